use budget_tracker::args::{Args, Command, USAGE};
use budget_tracker::{commands, interactive, Config};
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // Requests for help and anything clap cannot make sense of get the usage banner on stdout.
        Err(_) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
    };
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e}");
            debug!("Exiting with error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

pub fn main_inner(args: Args) -> anyhow::Result<()> {
    trace!("{args:?}");
    let config = Config::new(args.common().data_file().path());
    debug!("Using data file {}", config.data_file().display());

    match args.command() {
        None => {
            config.store().ensure_exists()?;
            interactive::run(&config, std::io::stdin().lock(), std::io::stdout().lock())?
        }
        Some(Command::Add(add_args)) => commands::add(&config, add_args)?.print()?,
        Some(Command::List(list_args)) => commands::list(&config, list_args)?.print()?,
        Some(Command::Summary) => commands::summary(&config)?.print()?,
        Some(Command::Monthly(monthly_args)) => commands::monthly(&config, monthly_args)?.print()?,
        Some(Command::Categories) => commands::categories(&config)?.print()?,
        Some(Command::Delete(delete_args)) => commands::delete(&config, delete_args)?.print()?,
    }
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "budget_tracker={},{}={}",
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
