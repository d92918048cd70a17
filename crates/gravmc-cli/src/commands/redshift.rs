use crate::cli::RedshiftArgs;
use crate::config::{DEFAULT_SAMPLES, TargetsFile};
use crate::error::Result;
use gravmc::workflows::redshift;
use tracing::info;

pub fn run(args: RedshiftArgs) -> Result<()> {
    let file = TargetsFile::from_file(&args.config)?;
    let samples = args.samples.or(file.samples).unwrap_or(DEFAULT_SAMPLES);
    let seed = args.seed.or(file.seed);
    let targets = file.into_targets()?;

    info!(
        targets = targets.len(),
        samples, "Starting redshift propagation"
    );
    let mut rng = super::build_rng(seed);
    let estimates = redshift::run_all(&targets, samples, &mut rng)?;

    for estimate in &estimates {
        println!("logg {}: {}", estimate.name, estimate.logg);
    }
    Ok(())
}
