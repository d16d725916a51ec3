#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::{self, stdout};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use jobapply::check::check_draft;
use jobapply::config::Config;
use jobapply::telemetry;
use jobapply::tui::App;

#[derive(Parser, Debug)]
#[command(
    name = "jobapply",
    about = "Fill in and validate a job application from the terminal",
    version
)]
struct Cli {
    /// Write logs to this file instead of the default location
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    /// Directory that exported applications are written to
    #[arg(long, global = true)]
    export_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a draft JSON file and print the snapshot or the errors
    Check {
        /// Path to the draft JSON file
        path: PathBuf,
    },
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::from_env()?.with_overrides(cli.log_file, cli.export_dir);

    match cli.command {
        Some(Command::Check { path }) => run_check(&config, &path),
        None => run_tui(config).map(|()| ExitCode::SUCCESS),
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn run_check(config: &Config, path: &std::path::Path) -> Result<ExitCode, Box<dyn std::error::Error>> {
    telemetry::init_stderr(&config.log_filter)?;
    let outcome = check_draft(path)?;
    println!("{}", outcome.to_json_pretty()?);
    Ok(if outcome.is_accepted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn run_tui(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_file(&config.log_filter, &config.log_file)?;
    info!(export_dir = %config.export_dir.display(), "starting jobapply");

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(config.export_dir);
    let result = app.run(&mut terminal);

    let restore_result = restore_terminal();
    match result {
        Err(e) => Err(e.into()),
        Ok(()) => restore_result.map_err(Into::into),
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn restore_terminal() -> Result<(), io::Error> {
    let raw_result = disable_raw_mode();
    let screen_result = execute!(stdout(), LeaveAlternateScreen);
    raw_result.and(screen_result)
}
