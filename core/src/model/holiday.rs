/// Calendar entry; `month` is 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct Holiday {
    pub month: u32,
    pub day: u32,
    pub name: &'static str,
}

const fn holiday(month: u32, day: u32, name: &'static str) -> Holiday {
    Holiday { month, day, name }
}

pub const FIXED_HOLIDAYS: &[Holiday] = &[
    holiday(1, 1, "Ano Novo"),
    holiday(2, 4, "Início da Luta Armada"),
    holiday(3, 8, "Dia Internacional da Mulher"),
    holiday(3, 23, "Dia da Libertação da África Austral"),
    holiday(4, 4, "Dia da Paz e Reconciliação Nacional"),
    holiday(5, 1, "Dia do Trabalho"),
    holiday(9, 17, "Dia do Herói Nacional"),
    holiday(11, 2, "Dia dos Finados"),
    holiday(11, 11, "Dia da Independência Nacional"),
    holiday(12, 25, "Dia de Natal"),
];

const MOVABLE_2024: &[Holiday] = &[
    holiday(2, 13, "Carnaval"),
    holiday(3, 29, "Sexta-feira Santa"),
];

const MOVABLE_2025: &[Holiday] = &[
    holiday(3, 4, "Carnaval"),
    holiday(4, 18, "Sexta-feira Santa"),
];

/// Movable feasts for `year`. Only tabulated years are known; others yield none.
pub fn movable_holidays(year: i32) -> &'static [Holiday] {
    match year {
        2024 => MOVABLE_2024,
        2025 => MOVABLE_2025,
        _ => &[],
    }
}
