use mototracker_core::{
    time::display_date,
    usecase::{month_view::CalendarCell, report::MonthlyReport},
    MonthlyStats, Person, Profile, StatusModel, TripState, YearMonth,
};
use chrono::{Local, NaiveDateTime};
use tabled::builder::Builder;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

const DONE: &str = "✅";
const NOT_DONE: &str = "❌";
const NOT_RECORDED: &str = "-";

// Helper struct for Table Row
#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "Data")]
    date: String,
    #[tabled(rename = "Dia")]
    weekday: String,
    #[tabled(rename = "Jorge (Ida)")]
    jorge_ida: String,
    #[tabled(rename = "Jorge (Reg)")]
    jorge_reg: String,
    #[tabled(rename = "William (Ida)")]
    william_ida: String,
    #[tabled(rename = "William (Reg)")]
    william_reg: String,
    #[tabled(rename = "Obs.")]
    note: String,
}

#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "")]
    person: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Viagens completas")]
    trips: u32,
    #[tabled(rename = "Dias ativos")]
    active_days: u32,
    #[tabled(rename = "Média/dia")]
    average: String,
    #[tabled(rename = "Previsão")]
    forecast: String,
}

/// Formats an amount with space-separated thousands, e.g. `12 600 Kz`.
pub fn kz(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    format!("{} Kz", out)
}

fn mark(done: bool) -> &'static str {
    if done { DONE } else { NOT_DONE }
}

fn marks(state: &TripState) -> String {
    format!("{}{}", mark(state.outbound_done), mark(state.return_done))
}

pub fn print_calendar(month: YearMonth, weeks: &[[CalendarCell; 7]]) {
    println!("\n\x1b[1;36m{}\x1b[0m", month.label());

    let mut builder = Builder::default();
    builder.push_record(["Seg", "Ter", "Qua", "Qui", "Sex", "Sáb", "Dom"]);
    for week in weeks {
        builder.push_record(week.iter().map(cell_text));
    }

    let mut table = builder.build();
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);
    println!("J/W: ida regresso   F: feriado   *: hoje");
}

fn cell_text(cell: &CalendarCell) -> String {
    if !cell.in_month {
        return String::new();
    }
    let mut text = cell.date.format("%d").to_string();
    if cell.is_today {
        text.push('*');
    }
    if cell.holiday.is_some() {
        text.push_str(" F");
    }
    if cell.active || !cell.record.is_empty() {
        text.push_str(&format!("\nJ {}\nW {}", marks(&cell.record.jorge), marks(&cell.record.william)));
    } else if cell.is_weekend {
        text.push_str("\n-");
    }
    text
}

fn stats_rows(stats: &MonthlyStats) -> Vec<StatsRow> {
    Person::ALL
        .iter()
        .map(|person| {
            let s = stats.person(*person);
            StatsRow {
                person: person.to_string(),
                total: kz(s.confirmed_total),
                trips: s.completed_trips,
                active_days: s.active_days,
                average: kz(s.average_per_active_day.round() as u64),
                forecast: kz(s.forecast),
            }
        })
        .collect()
}

pub fn print_stats(stats: &MonthlyStats, profile: &Profile) {
    println!("\n\x1b[1;36mResumo do Mês - {}\x1b[0m ({} por trajeto)", stats.month.label(), kz(stats.cost_per_leg));

    let mut table = Table::new(stats_rows(stats));
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);

    println!("Total do grupo: {}", kz(stats.group_total()));
    if profile.status_model == StatusModel::FullDayStatus {
        let days = &stats.working_days;
        println!("Previsão do grupo: {}", kz(stats.group_forecast()));
        println!(
            "Dias úteis: {} ({} passados, {} restantes)",
            days.total, days.passed, days.remaining
        );
        println!("Eficiência de presença: {}%", stats.attendance_efficiency);
    }
}

pub fn print_report(report: &MonthlyReport, profile: &Profile) {
    println!("{}", render_report(report, profile, Local::now().naive_local()));
}

fn report_mark(done: bool) -> &'static str {
    if done { DONE } else { NOT_RECORDED }
}

pub fn render_report(report: &MonthlyReport, profile: &Profile, generated_at: NaiveDateTime) -> String {
    let mut out = format!("\n\x1b[1m{}\x1b[0m\n", report.title);
    for person in Person::ALL {
        let s = report.stats.person(person);
        out.push_str(&format!(
            "  {:<8} Total Gasto: {:>12}  Viagens Realizadas: {}\n",
            person.name(),
            kz(s.confirmed_total),
            s.completed_trips
        ));
    }

    let rows: Vec<ReportRow> = report
        .rows
        .iter()
        .map(|row| ReportRow {
            date: display_date(row.date),
            weekday: row.weekday.to_string(),
            jorge_ida: report_mark(row.record.jorge.outbound_done).to_string(),
            jorge_reg: report_mark(row.record.jorge.return_done).to_string(),
            william_ida: report_mark(row.record.william.outbound_done).to_string(),
            william_reg: report_mark(row.record.william.return_done).to_string(),
            note: row.holiday.map(|h| format!("FERIADO: {}", h)).unwrap_or_default(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    out.push_str(&format!("{}\n", table));

    if profile.status_model == StatusModel::FullDayStatus {
        out.push_str(&format!("Previsão de fim de mês: {}\n", kz(report.stats.group_forecast())));
    }
    out.push_str(&format!("\nGerado em {} - MotoTracker Angola", generated_at.format("%d/%m/%Y %H:%M")));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mototracker_core::{usecase::report::ReportUseCase, AttendanceStore, Leg};

    #[test]
    fn test_kz_groups_thousands() {
        assert_eq!(kz(0), "0 Kz");
        assert_eq!(kz(300), "300 Kz");
        assert_eq!(kz(1200), "1 200 Kz");
        assert_eq!(kz(12600), "12 600 Kz");
        assert_eq!(kz(1234567), "1 234 567 Kz");
    }

    #[test]
    fn test_report_matches_print_layout() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 12).unwrap();
        let store = AttendanceStore::new().set_trip_state(date, Person::Jorge, Leg::Outbound, true);
        let profile = Profile::basic();
        let month = YearMonth::new(2024, 2).unwrap();
        let report = ReportUseCase::new(&store, &profile).build(month, date);
        let generated_at = date.and_hms_opt(18, 5, 0).unwrap();

        let text = render_report(&report, &profile, generated_at);

        assert!(text.contains("Relatório de Viagens - fevereiro 2024"));
        assert!(text.contains("Total Gasto:"));
        assert!(text.contains("Jorge (Ida)"));
        assert!(text.ends_with("Gerado em 12/02/2024 18:05 - MotoTracker Angola"));
        assert!(!text.contains(NOT_DONE));
        assert_eq!(text.matches(DONE).count(), 1);
        assert!(text.contains(NOT_RECORDED));
    }
}
