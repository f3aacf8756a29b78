//! Taiwan Weather CLI - current conditions and a 47-hour temperature chart
//!
//! A terminal UI application that displays the CWA township forecast for one
//! region, or prints it as JSON with `--json`.

use std::fs::File;
use std::io;
use std::panic;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use twweather::app::App;
use twweather::cli::{Cli, StartupConfig};
use twweather::data::ForecastClient;
use twweather::ui;

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Initializes tracing output
///
/// Logs go to `log_file` when given. Otherwise they go to stderr in JSON mode
/// and are dropped in TUI mode, where stderr shares the screen.
fn init_tracing(log_file: Option<&Path>, json_output: bool) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if json_output => builder.with_writer(io::stderr).init(),
        None => builder.with_writer(io::sink).init(),
    }
    Ok(())
}

/// Fetches once and prints the report as pretty JSON
async fn run_json(config: &StartupConfig) -> Result<(), Box<dyn std::error::Error>> {
    let client = ForecastClient::new(config.api_key.clone());
    let report = client.fetch_weather(&config.request).await.map_err(|err| {
        tracing::error!(error = %err, "failed to fetch forecast");
        err
    })?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn run_tui(config: &StartupConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);

    // Initial render to show loading state
    terminal.draw(|f| ui::render_forecast(f, &app))?;

    // Trigger initial data load
    app.refresh().await;

    // Main event loop
    loop {
        terminal.draw(|f| ui::render_forecast(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }

        if app.refresh_requested {
            app.refresh().await;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref(), cli.json)?;

    let config = StartupConfig::from_cli(&cli).map_err(|err| {
        tracing::error!(error = %err, "invalid arguments");
        err
    })?;
    tracing::info!(
        city = %config.request.city,
        region = %config.request.region,
        dataset = %config.request.dataset_id,
        "starting"
    );

    if config.json_output {
        run_json(&config).await
    } else {
        run_tui(&config).await
    }
}
