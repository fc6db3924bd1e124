mod cli;
mod config;
mod output;
mod roster;
mod tui;

use anyhow::Result;
use cli::{Cli, Commands, ConfigActions, OutputFormat};
use config::Config;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use output::RosterListing;
use ratatui::{backend::CrosstermBackend, Terminal};
use roster::{demo_roster, load_roster, Column, Student};
use std::fs;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use tui::logic::sort_rows_directed;
use tui::state::SortDirection;
use tui::App;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let result = match Config::load() {
        Ok(config) => run(cli, config),
        Err(e) => Err(e),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli, config: Config) -> Result<ExitCode> {
    let students = load_students(cli.roster.as_deref())?;

    match cli.command {
        None => run_tui(config, students)?,
        Some(Commands::List {
            sort_by,
            descending,
            format,
            out,
        }) => run_list(students, sort_by, descending, format, out.as_deref())?,
        Some(Commands::Config { action }) => run_config(action, config)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn load_students(roster_path: Option<&str>) -> Result<Vec<Student>> {
    match roster_path {
        Some(path) => Ok(load_roster(Path::new(path))?),
        None => Ok(demo_roster()),
    }
}

fn run_tui(config: Config, students: Vec<Student>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, students);
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_list(
    mut students: Vec<Student>,
    sort_by: Option<Column>,
    descending: bool,
    format: OutputFormat,
    out: Option<&str>,
) -> Result<()> {
    if let Some(column) = sort_by {
        let direction = if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        sort_rows_directed(&mut students, |s| s.cell_text(column), direction);
    }

    match format {
        OutputFormat::Json => {
            let listing = RosterListing::new(students);
            let json = serde_json::to_string_pretty(&listing)?;
            if let Some(path) = out {
                fs::write(path, &json)?;
            } else {
                println!("{}", json);
            }
        }
        OutputFormat::Human => {
            let mut text = String::new();
            text.push_str(&format!(
                "{:<22} {:<8} {:<14} {:<12} {}\n",
                "Name", "Room", "Phone", "Joined", "Fees"
            ));
            for student in &students {
                text.push_str(&format!(
                    "{:<22} {:<8} {:<14} {:<12} {}\n",
                    student.name,
                    student.room,
                    student.phone,
                    student.joined.format("%Y-%m-%d"),
                    student.fees_label()
                ));
            }

            let paid = students.iter().filter(|s| s.fees_paid).count();
            text.push_str(&format!(
                "\nTotal: {} students, {} paid, {} due\n",
                students.len(),
                paid,
                students.len() - paid
            ));

            if let Some(path) = out {
                fs::write(path, &text)?;
            } else {
                print!("{}", text);
            }
        }
    }

    Ok(())
}

fn run_config(action: ConfigActions, mut config: Config) -> Result<()> {
    match action {
        ConfigActions::Show => {
            println!("Current configuration:");
            println!("  Alert timeout: {}ms", config.ui.alert_timeout_ms);
            println!("  Payment delay: {}ms", config.ui.payment_delay_ms);
        }
        ConfigActions::Set { key, value } => match key.as_str() {
            "alert_timeout_ms" => {
                config.ui.alert_timeout_ms = value.parse()?;
                config.save()?;
                println!("Set alert_timeout_ms to {}", value);
            }
            "payment_delay_ms" => {
                config.ui.payment_delay_ms = value.parse()?;
                config.save()?;
                println!("Set payment_delay_ms to {}", value);
            }
            _ => {
                println!("Unknown key: {}", key);
                println!("Available keys: alert_timeout_ms, payment_delay_ms");
            }
        },
    }

    Ok(())
}
