mod types;

use std::env;
use std::io;

use catalog::Catalog;
use logger::{Color, Logger};
use types::config::{Config, USAGE};
use types::console_error::ConsoleError;
use types::menu::Console;
use types::seed;

/// Entry point of the booking console.
///
/// Builds the flight catalog, opens the session log and runs the passenger and
/// manager menus on stdin/stdout.
///
/// # Usage
///
/// ```sh
/// cargo run --bin booking -- [--log-dir <dir>] [--session <name>] [--echo-logs] [--empty]
/// ```
///
/// # Errors
///
/// The program returns an error if:
/// - The arguments are not valid.
/// - The log directory cannot be created.
/// - Reading stdin or writing stdout fails.
fn main() -> Result<(), ConsoleError> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            return Err(e);
        }
    };

    let logger = Logger::new(&config.log_dir, &config.session, config.echo_logs)?;
    logger.info(
        &format!(
            "Starting session '{}' (log dir: {}, seed: {})",
            config.session,
            config.log_dir.display(),
            config.seed
        ),
        Color::Cyan,
    )?;

    let mut catalog = Catalog::new();
    if config.seed {
        seed::populate_logged(&mut catalog, &logger)?;
    }

    println!("\nWELCOME TO RUSTIC BOOKING:");
    let stdin = io::stdin();
    let mut console = Console::new(catalog, stdin.lock(), io::stdout(), Some(logger.clone()));

    if let Err(e) = console.run() {
        logger.error(&format!("Session aborted: {}", e))?;
        return Err(e);
    }

    let booked: u32 = console
        .catalog()
        .iter()
        .map(|flight| flight.booked_seats())
        .sum();
    logger.info(&format!("{} seats booked this session", booked), Color::Blue)?;
    Ok(())
}
