//! State Showcase - six UI state-management patterns on one terminal page
//!
//! A Ratatui-based page composed of a counter, a fetched users table, a
//! theme toggle, a reducer form, a memoized calculation and a login form
//! built on a reusable form binding.

mod app;
mod config;
mod state;
mod ui;
mod users;

use anyhow::Result;
use app::App;
use config::ShowcaseConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use users::HttpUserSource;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ShowcaseConfig::load()?;

    // Initialize logging
    init_logging(&config);

    let users_source = Arc::new(HttpUserSource::new(config.users_endpoint())?);
    tracing::info!(
        "Starting state-showcase, users endpoint: {}",
        users_source.endpoint()
    );

    // Restore the terminal before a panic message is printed
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(users_source);
    let result = run_app(&mut terminal, &mut app, &config);

    // Restore terminal
    restore_terminal()?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("Exiting with error: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Send tracing output to the log file; the terminal belongs to the UI
fn init_logging(config: &ShowcaseConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    let registry = tracing_subscriber::registry().with(filter);

    match open_log_file() {
        Some(file) => registry
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .init(),
        None => registry.with(fmt::layer().with_writer(io::sink)).init(),
    }
}

fn open_log_file() -> Option<File> {
    let path = ShowcaseConfig::log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    config: &ShowcaseConfig,
) -> Result<()> {
    let tick_rate = config.tick_rate();
    app.activate();

    loop {
        app.tick();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
