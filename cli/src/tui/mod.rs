pub mod app;
pub mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use mototracker_core::{DayStatus, Leg, StoreRepository, TrackerService};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::tui::app::App;

pub fn run<R: StoreRepository>(service: TrackerService<R>, today: NaiveDate) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(service, today);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

fn run_app<B: Backend, R: StoreRepository>(terminal: &mut Terminal<B>, app: &mut App<R>) -> io::Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if app.pending().is_some() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('s') | KeyCode::Enter => app.confirm(),
                KeyCode::Char('n') | KeyCode::Esc => app.cancel(),
                _ => {}
            }
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Left | KeyCode::Char('h') => app.move_days(-1),
            KeyCode::Right | KeyCode::Char('l') => app.move_days(1),
            KeyCode::Up | KeyCode::Char('k') => app.move_days(-7),
            KeyCode::Down | KeyCode::Char('j') => app.move_days(7),
            KeyCode::Char('[') | KeyCode::Char('p') => app.previous_month(),
            KeyCode::Char(']') | KeyCode::Char('n') => app.next_month(),
            KeyCode::Char('t') => app.go_today(),
            KeyCode::Tab => app.switch_person(),
            KeyCode::Char('i') => app.request_leg(Leg::Outbound),
            KeyCode::Char('r') => app.request_leg(Leg::Return),
            KeyCode::Char(' ') | KeyCode::Enter => app.cycle_status(),
            KeyCode::Char('1') => app.request_status(DayStatus::Full),
            KeyCode::Char('2') => app.request_status(DayStatus::OutboundOnly),
            KeyCode::Char('3') => app.request_status(DayStatus::ReturnOnly),
            KeyCode::Char('4') => app.request_status(DayStatus::None),
            _ => {}
        }
    }
}
