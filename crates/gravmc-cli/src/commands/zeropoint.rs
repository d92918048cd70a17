use crate::cli::ZeropointArgs;
use crate::error::{CliError, Result};
use gravmc::core::io::table::MagnitudeTable;
use gravmc::engine::zeropoint::ZeroPointParams;
use gravmc::workflows::zeropoint::{self, CalibrationConfig};
use tracing::info;

fn parse_band_list(raw: &str) -> Result<Vec<String>> {
    let bands: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .map(str::to_string)
        .collect();
    if bands.is_empty() {
        return Err(CliError::Argument(format!(
            "'{raw}' does not name any band"
        )));
    }
    Ok(bands)
}

fn parse_color(raw: &str) -> Result<(String, String)> {
    match parse_band_list(raw)?.as_slice() {
        [blue, red] => Ok((blue.clone(), red.clone())),
        other => Err(CliError::Argument(format!(
            "a color index needs exactly two bands, got {} in '{raw}'",
            other.len()
        ))),
    }
}

pub fn run(args: ZeropointArgs) -> Result<()> {
    let config = CalibrationConfig {
        bands: parse_band_list(&args.bands)?,
        color: parse_color(&args.color)?,
        min_error: args.min_error,
        fit: ZeroPointParams {
            iterations: args.iterations,
            s_reject: args.s_reject,
        },
    };

    info!(path = %args.synthetic.display(), "Loading synthetic photometry");
    let synthetic = MagnitudeTable::load(&args.synthetic)?;
    info!(path = %args.observed.display(), "Loading observed photometry");
    let observed = MagnitudeTable::load(&args.observed)?;

    let mut rng = super::build_rng(args.seed);
    let results = zeropoint::run(&synthetic, &observed, &config, &mut rng)?;

    for result in &results {
        let fit = &result.fit;
        println!(
            "{} : Zp = {:.3} +- {:.3}   slope = {:.3} +- {:.3}   accepted = {}   rejected = {}",
            result.band,
            fit.zero_point,
            fit.zero_point_error,
            fit.slope,
            fit.slope_error,
            fit.accepted,
            fit.rejected
        );
    }
    Ok(())
}
