//! Contact Book - Main entry point
//!
//! Reads commands from stdin, one per line, and prints each reply to stdout.
//! Logs go to stderr.

use anyhow::{Context, Result};
use contact_book::commands::Reply;
use contact_book::{Assistant, Config};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging (stderr only so replies on stdout stay clean)
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Birthday window: {} days",
        config.birthday_window_days
    );

    let mut assistant = Assistant::new(config.birthday_window_days);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "Welcome to the assistant bot!")?;
    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "{}", config.prompt)?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            info!("End of input reached");
            break;
        };
        let line = line.context("Failed to read command from stdin")?;

        let today = chrono::Local::now().date_naive();
        match assistant.handle(&line, today) {
            Reply::Continue(text) => writeln!(stdout, "{}", text)?,
            Reply::Exit(text) => {
                writeln!(stdout, "{}", text)?;
                break;
            }
        }
    }

    info!("Contact book shutdown complete");
    Ok(())
}
