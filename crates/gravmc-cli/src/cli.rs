use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "gravmc - Monte-Carlo error propagation for gravitational-redshift surface gravities and photometric zero-point calibration.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive companion surface gravities from differential gravitational redshifts.
    Redshift(RedshiftArgs),
    /// Calibrate photometric zero points against synthetic reference photometry.
    Zeropoint(ZeropointArgs),
}

/// Arguments for the `redshift` subcommand.
#[derive(Args, Debug)]
pub struct RedshiftArgs {
    /// Path to the TOML file listing the targets and their measurements.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,

    /// Override the number of Monte-Carlo samples from the config file.
    #[arg(short = 'n', long, value_name = "INT")]
    pub samples: Option<usize>,

    /// Seed for the random stream; omit for an entropy-seeded run.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,
}

/// Arguments for the `zeropoint` subcommand.
#[derive(Args, Debug)]
pub struct ZeropointArgs {
    /// Path to the synthetic photometry table (CSV).
    #[arg(short = 's', long, required = true, value_name = "PATH")]
    pub synthetic: PathBuf,

    /// Path to the observed photometry table (CSV).
    #[arg(short = 'o', long, required = true, value_name = "PATH")]
    pub observed: PathBuf,

    /// Comma-separated list of bands to calibrate (e.g. 'J,H,KS').
    #[arg(short, long, required = true, value_name = "BANDS")]
    pub bands: String,

    /// The two bands forming the color index, bluest first (e.g. 'J,KS').
    #[arg(short, long, required = true, value_name = "B1,B2")]
    pub color: String,

    /// Minimum photometric error floor in magnitudes.
    #[arg(long, value_name = "FLOAT", default_value_t = 0.01)]
    pub min_error: f64,

    /// Reject points beyond this many zero-point errors from the first fit.
    #[arg(long, value_name = "FLOAT", default_value_t = 10.0)]
    pub s_reject: f64,

    /// Number of Monte-Carlo re-fits for the error estimate.
    #[arg(long, value_name = "INT", default_value_t = 1024)]
    pub iterations: usize,

    /// Seed for the random stream; omit for an entropy-seeded run.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,
}
