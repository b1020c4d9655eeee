use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Cell, Clear, Gauge, Paragraph, Row, Table, Wrap},
    Frame,
};
use mototracker_core::{
    usecase::month_view::CalendarCell, MonthlyStats, Person, StatusModel, StoreRepository, TripState,
};

use crate::report::kz;
use crate::tui::app::App;

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    jorge: Color,
    william: Color,
    holiday: Color,
}

const THEME: Theme = Theme {
    primary: Color::Indexed(99), // indigo
    muted: Color::DarkGray,
    text: Color::White,
    jorge: Color::Indexed(99),
    william: Color::Green,
    holiday: Color::Red,
};

fn person_color(person: Person) -> Color {
    match person {
        Person::Jorge => THEME.jorge,
        Person::William => THEME.william,
    }
}

pub fn draw<R: StoreRepository>(f: &mut Frame, app: &App<R>) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Calendar + Sidebar
            Constraint::Length(1), // Footer
        ])
        .split(size);

    draw_header(f, app, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(32), // Stats
            Constraint::Length(1),      // Gutter
            Constraint::Percentage(68), // Calendar
        ])
        .split(main_chunks[1]);

    let stats = app.stats();
    draw_sidebar(f, app, &stats, content_chunks[0]);
    draw_calendar(f, app, content_chunks[2]);
    draw_footer(f, app, main_chunks[2]);

    if let Some(change) = app.pending() {
        draw_confirm_popup(f, &change.prompt(), person_color(change.action.person()), size);
    }
}

fn draw_header<R: StoreRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(34)])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled("MotoTracker Angola", Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled("Controle de deslocamento diário", Style::default().fg(THEME.muted))),
    ]);
    f.render_widget(title, header_layout[0]);

    let nav = Paragraph::new(Line::from(vec![
        Span::styled(" < ", Style::default().fg(THEME.text)),
        Span::styled(app.month.label(), Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
        Span::styled(" > ", Style::default().fg(THEME.text)),
    ]))
    .alignment(Alignment::Right)
    .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(THEME.muted)));
    f.render_widget(nav, header_layout[1]);
}

fn draw_sidebar<R: StoreRepository>(f: &mut Frame, app: &App<R>, stats: &MonthlyStats, area: Rect) {
    let extended = app.service.profile().status_model == StatusModel::FullDayStatus;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if extended { 14 } else { 9 }), // Summary
            Constraint::Min(6),                                 // Chart
            Constraint::Length(3),                              // Efficiency
        ])
        .split(area);

    let mut lines = vec![Line::from(Span::styled("Resumo do Mês", Style::default().add_modifier(Modifier::BOLD)))];
    for person in Person::ALL {
        let s = stats.person(person);
        let marker = if person == app.person { "▶ " } else { "  " };
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!("{}{:<8}", marker, person.name()), Style::default().fg(person_color(person)).add_modifier(Modifier::BOLD)),
            Span::styled(kz(s.confirmed_total), Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
        ]));
        let detail = if extended {
            format!("  {} dias ativos, média {}", s.active_days, kz(s.average_per_active_day.round() as u64))
        } else {
            format!("  {} viagens completas", s.completed_trips)
        };
        lines.push(Line::from(Span::styled(detail, Style::default().fg(THEME.muted))));
        if extended {
            lines.push(Line::from(Span::styled(format!("  previsão {}", kz(s.forecast)), Style::default().fg(THEME.muted))));
        }
    }
    if extended {
        let days = &stats.working_days;
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Dias úteis: ", Style::default().fg(THEME.muted)),
            Span::raw(format!("{} ({} restantes)", days.total, days.remaining)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Previsão:   ", Style::default().fg(THEME.muted)),
            Span::raw(kz(stats.group_forecast())),
        ]));
    }

    let summary = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(THEME.muted)).title(" Resumo "));
    f.render_widget(summary, chunks[0]);

    draw_cost_chart(f, stats, chunks[1]);

    let ratio = (stats.attendance_efficiency as f64 / 100.0).min(1.0);
    let gauge = Gauge::default()
        .block(Block::default().title(" Eficiência ").borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(THEME.muted)))
        .gauge_style(Style::default().fg(THEME.primary))
        .ratio(ratio)
        .label(format!("{}%", stats.attendance_efficiency));
    f.render_widget(gauge, chunks[2]);
}

fn draw_cost_chart(f: &mut Frame, stats: &MonthlyStats, area: Rect) {
    let bar_items: Vec<Bar> = Person::ALL
        .iter()
        .map(|person| {
            let total = stats.person(*person).confirmed_total;
            Bar::default()
                .label(person.name())
                .value(total)
                .style(Style::default().fg(person_color(*person)))
                .text_value(if total > 0 { kz(total) } else { "".to_string() })
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(THEME.muted)).title(" Custo "))
        .bar_width(9)
        .bar_gap(3)
        .data(BarGroup::default().bars(&bar_items));
    f.render_widget(chart, area);
}

fn draw_calendar<R: StoreRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let weeks = app.weeks();
    let rows: Vec<Row> = weeks
        .iter()
        .map(|week| Row::new(week.iter().map(|cell| calendar_cell(app, cell))).height(4))
        .collect();

    let header = Row::new(["Seg", "Ter", "Qua", "Qui", "Sex", "Sáb", "Dom"])
        .style(Style::default().fg(THEME.muted).add_modifier(Modifier::BOLD));

    let table = Table::new(rows, [Constraint::Ratio(1, 7); 7])
        .header(header)
        .column_spacing(1)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(THEME.muted)));
    f.render_widget(table, area);
}

fn leg_marks(state: &TripState) -> String {
    let mark = |done: bool| if done { "✅" } else { "❌" };
    format!("I{} R{}", mark(state.outbound_done), mark(state.return_done))
}

fn calendar_cell<'a, R: StoreRepository>(app: &App<R>, cell: &CalendarCell) -> Cell<'a> {
    if !cell.in_month {
        return Cell::from(Span::styled(cell.date.format("%d").to_string(), Style::default().fg(THEME.muted)));
    }

    let mut day_style = Style::default().fg(THEME.text).add_modifier(Modifier::BOLD);
    if cell.is_today {
        day_style = day_style.fg(THEME.primary).add_modifier(Modifier::UNDERLINED);
    }
    let mut first = vec![Span::styled(cell.date.format("%d").to_string(), day_style)];
    if cell.holiday.is_some() {
        first.push(Span::styled(" FERIADO", Style::default().fg(THEME.holiday)));
    }

    let mut lines = vec![Line::from(first)];
    if cell.active {
        for person in Person::ALL {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", &person.name()[..1]), Style::default().fg(person_color(person))),
                Span::raw(leg_marks(cell.record.person(person))),
            ]));
        }
    } else if cell.is_weekend {
        lines.push(Line::from(Span::styled("Fim de semana", Style::default().fg(THEME.muted).add_modifier(Modifier::ITALIC))));
    }

    let mut style = Style::default();
    if cell.holiday.is_some() {
        style = style.bg(Color::Indexed(52));
    }
    if cell.date == app.cursor {
        style = style.bg(person_color(app.person)).fg(Color::Black);
    }
    Cell::from(Text::from(lines)).style(style)
}

fn draw_footer<R: StoreRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let edit_keys = match app.service.profile().status_model {
        StatusModel::PerLegToggle => "i/r ida/regresso",
        StatusModel::FullDayStatus => "1-4 completo/ida/regresso/nenhum",
    };
    let line = match &app.message {
        Some(msg) => Line::from(Span::styled(msg.clone(), Style::default().fg(Color::Yellow))),
        None => Line::from(vec![
            Span::styled("NAV: ", Style::default().fg(THEME.muted)),
            Span::styled("←↑↓→ [ ] t ", Style::default().fg(THEME.text)),
            Span::styled(" TAB: ", Style::default().fg(THEME.muted)),
            Span::styled(app.person.name(), Style::default().fg(person_color(app.person))),
            Span::styled("  EDIT: ", Style::default().fg(THEME.muted)),
            Span::styled(edit_keys, Style::default().fg(THEME.text)),
            Span::styled("  QUIT: ", Style::default().fg(THEME.muted)),
            Span::styled("q", Style::default().fg(THEME.text)),
        ]),
    };
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_confirm_popup(f: &mut Frame, prompt: &str, accent: Color, area: Rect) {
    let popup = centered_rect(50, 30, area);
    let text = vec![
        Line::from(Span::styled("Confirmar Alteração", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(prompt.to_string()),
        Line::from(""),
        Line::from(vec![
            Span::styled("[s] Confirmar", Style::default().fg(accent).add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("[n] Cancelar", Style::default().fg(THEME.muted)),
        ]),
    ];
    let block = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(accent)));
    f.render_widget(Clear, popup);
    f.render_widget(block, popup);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
