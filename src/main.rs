//! TripMate interactive session binary

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tripmate::config::{LoggingConfig, TripMateConfig};
use tripmate::planner::TravelPlanner;
use tripmate::repl::{self, Command};
use tripmate::session::SessionState;

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));

    // Stdout belongs to the interactive surface; diagnostics go to stderr.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = TripMateConfig::load().with_context(|| "Failed to load configuration")?;
    init_tracing(&config.logging);

    let planner =
        TravelPlanner::new(&config).with_context(|| "Failed to initialize travel planner")?;
    let mut session = SessionState::new();
    let supported = planner.registry().supported_cities();

    println!("{}", repl::render_welcome(&supported));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.with_context(|| "Failed to read input")?;

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(hint) => {
                println!("{hint}");
                continue;
            }
        };

        // Every error is terminal for this interaction only; the loop and
        // the session stay usable afterwards.
        match command {
            Command::Quit => break,
            Command::Help => println!("{}", repl::render_help(&supported)),
            Command::Favorites => {
                println!("{}", repl::render_favorites(session.favorites.list()));
            }
            Command::Lookup(city) => match planner.suggestions(&city, &mut session).await {
                Ok(suggestions) => println!("{}", repl::render_suggestions(&suggestions)),
                Err(e) => {
                    tracing::warn!("Lookup failed: {e}");
                    println!("{}", e.user_message());
                }
            },
            Command::Save(index) => {
                if session.current_city.is_none() {
                    println!("Look up a city first to see attractions you can save.");
                    continue;
                }
                match session.save_from_sample(index) {
                    Ok(saved) => println!("Saved {} in {}!", saved.attraction, saved.city),
                    Err(e) => println!("{}", e.user_message()),
                }
            }
            Command::Remove(index) => match session.favorites.remove_at(index) {
                Ok(removed) => println!("Deleted {}.", removed.format_entry()),
                Err(e) => println!("{}", e.user_message()),
            },
        }
    }

    session.reset();
    println!("Session ended - favorites are not stored between sessions. Goodbye!");

    Ok(())
}
