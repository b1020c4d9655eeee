mod report;
mod tui;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use mototracker_core::{
    config::resolve_data_dir, parse_human_date, usecase::month_view::build_month_view,
    usecase::report::ReportUseCase, Action, AppConfig, DayStatus, FileStoreRepository, Leg, Person,
    Profile, ProfileKind, TrackerService, YearMonth,
};

#[derive(Parser)]
#[command(name = "mototracker")]
#[command(about = "Daily motorcycle commute tracker", long_about = None)]
struct Cli {
    /// Data directory (default: ~/.mototracker)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Profile to use: basic or extended (overrides config.json)
    #[arg(long, global = true)]
    profile: Option<String>,
    /// Cost of a single leg in Kz (overrides config.json)
    #[arg(long, global = true)]
    cost: Option<u64>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show the month calendar
    Calendar {
        /// Month as yyyy-MM (default: current month)
        #[arg(long)]
        month: Option<String>,
    },
    /// Toggle one leg for a rider (basic profile). usage: mark today jorge ida
    Mark {
        /// Date: today, yesterday, -Nd, yyyy-MM-dd or dd/MM/yyyy
        date: String,
        person: String,
        /// ida or regresso
        leg: String,
        /// Skip the confirmation question
        #[arg(short, long)]
        yes: bool,
    },
    /// Set the whole-day status for a rider (extended profile). usage: status today william full
    Status {
        date: String,
        person: String,
        /// full, ida, regresso or none
        status: String,
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the month statistics
    Stats {
        #[arg(long)]
        month: Option<String>,
    },
    /// Print the month report
    Report {
        #[arg(long)]
        month: Option<String>,
    },
    /// Open the Terminal User Interface
    Tui,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_profile(cli: &Cli, data_dir: &std::path::Path) -> Result<Profile> {
    let mut config = AppConfig::load(data_dir)?;
    if let Some(p) = &cli.profile {
        config.profile = ProfileKind::parse(p)?;
    }
    if let Some(cost) = cli.cost {
        config.cost_per_leg = Some(cost);
    }
    Ok(config.resolve())
}

fn parse_month(month: &Option<String>, today: NaiveDate) -> Result<YearMonth> {
    match month {
        Some(m) => YearMonth::parse(m),
        None => Ok(YearMonth::of(today)),
    }
}

fn parse_person(s: &str) -> Result<Person> {
    Person::parse(s).ok_or_else(|| anyhow!("Unknown person: '{}' (expected jorge or william)", s))
}

fn ask_confirmation(prompt: &str) -> Result<bool> {
    print!("{} [s/N] ", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "s" | "sim" | "y" | "yes"))
}

fn submit(service: &mut TrackerService<FileStoreRepository>, action: Action, yes: bool) -> Result<()> {
    let change = service.request(action)?;
    if change.is_noop() {
        println!("Nothing to change.");
        service.cancel();
        return Ok(());
    }

    if yes || ask_confirmation(&change.prompt())? {
        service.confirm();
        println!("Saved.");
    } else {
        service.cancel();
        println!("Cancelled.");
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    let profile = load_profile(&cli, &data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), profile = ?profile.kind, cost = profile.cost_per_leg, "starting");
    let repo = FileStoreRepository::new(&data_dir, &profile.storage_key)?;
    let mut service = TrackerService::new(repo, profile);
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Calendar { month }) => {
            let month = parse_month(&month, today)?;
            let weeks = build_month_view(service.store(), month, today, service.profile().policy());
            report::print_calendar(month, &weeks);
        },
        Some(Commands::Mark { date, person, leg, yes }) => {
            let date = parse_human_date(&date, today)?;
            let person = parse_person(&person)?;
            let leg = Leg::parse(&leg).ok_or_else(|| anyhow!("Unknown leg: '{}' (expected ida or regresso)", leg))?;
            submit(&mut service, Action::ToggleLeg { date, person, leg }, yes)?;
        },
        Some(Commands::Status { date, person, status, yes }) => {
            let date = parse_human_date(&date, today)?;
            let person = parse_person(&person)?;
            let status = DayStatus::parse(&status)
                .ok_or_else(|| anyhow!("Unknown status: '{}' (expected full, ida, regresso or none)", status))?;
            submit(&mut service, Action::SetStatus { date, person, status }, yes)?;
        },
        Some(Commands::Stats { month }) => {
            let month = parse_month(&month, today)?;
            report::print_stats(&service.stats(month, today), service.profile());
        },
        Some(Commands::Report { month }) => {
            let month = parse_month(&month, today)?;
            let monthly = ReportUseCase::new(service.store(), service.profile()).build(month, today);
            report::print_report(&monthly, service.profile());
        },
        Some(Commands::Tui) | None => {
            tui::run(service, today)?;
        }
    }
    Ok(())
}
