//! jjpane - terminal panes and pickers over the Jujutsu (jj) CLI
//!
//! Binary entry point for the TUI application.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use jjpane::app::{App, Session};
use jjpane::config::Config;
use jjpane::jj::JjExecutor;

/// Environment variable holding the tracing filter
const LOG_FILTER_ENV: &str = "JJPANE_LOG";

#[derive(Parser)]
#[command(name = "jjpane")]
#[command(version, about = "Terminal panes and pickers over the jj CLI", long_about = None)]
struct Cli {
    /// Repository path (defaults to the current directory)
    path: Option<PathBuf>,

    /// Initial log revset
    #[arg(short, long)]
    revset: Option<String>,

    /// Initial log limit
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Config file (must exist)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, env = "JJPANE_LOG_FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut config = Config::discover(cli.config.as_deref())?;
    if let Some(revset) = cli.revset {
        config.log.revset = Some(revset);
    }
    if let Some(limit) = cli.limit {
        config.log.limit = Some(limit);
    }

    let jj = match cli.path {
        Some(path) => JjExecutor::with_repo_path(path),
        None => JjExecutor::new(),
    };
    // Fail before touching the terminal so the message stays readable
    jj.check_version()?;

    info!(repo = ?jj.repo_path(), "jjpane starting");
    let session = Session::new(jj, config);

    let terminal = ratatui::init();
    let result = run(terminal, session);
    ratatui::restore();
    result
}

/// Install a file logger; stderr belongs to the terminal UI
fn init_logging(path: &Path) -> color_eyre::Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("Failed to create log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();
    Ok(())
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, session: Session) -> color_eyre::Result<()> {
    let mut app = App::new(session);

    while app.running {
        // An interactive command drew over the alternate screen
        if app.needs_clear {
            terminal.clear()?;
            app.needs_clear = false;
        }
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with 200ms timeout so expired notifications disappear
/// without a key press.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    } else {
        app.clear_expired_notification();
    }
    Ok(())
}
