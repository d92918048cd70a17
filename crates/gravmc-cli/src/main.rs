mod cli;
mod commands;
mod config;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\nError: {e}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("gravmc v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let result = match cli.command {
        Commands::Redshift(args) => {
            info!("Dispatching to 'redshift' command.");
            commands::redshift::run(args)
        }
        Commands::Zeropoint(args) => {
            info!("Dispatching to 'zeropoint' command.");
            commands::zeropoint::run(args)
        }
    };

    match &result {
        Ok(_) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {e}"),
    }
    result
}
