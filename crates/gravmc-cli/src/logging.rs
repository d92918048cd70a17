use crate::error::Result;
use std::fs::File;
use std::path::Path;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Installs the global tracing subscriber: a compact stderr layer filtered
/// by verbosity, plus an optional plain-text file layer.
pub fn init(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let level_filter = match (quiet, verbosity) {
        (true, _) => LevelFilter::OFF,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let registry = tracing_subscriber::registry()
        .with(level_filter)
        .with(stderr_layer);

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            let file_layer = fmt::layer().with_writer(file).with_ansi(false);
            registry.with(file_layer).init();
        }
        None => registry.init(),
    }

    Ok(())
}
