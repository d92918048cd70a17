use rand::Rng;
use tracing::{info, instrument};

use crate::core::models::measurement::DerivedEstimate;
use crate::core::models::system::RedshiftSystem;
use crate::engine::error::EngineError;
use crate::engine::propagation::propagate;

/// One named binary system to analyze.
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftTarget {
    pub name: String,
    pub system: RedshiftSystem,
}

/// The derived companion surface gravity of one target.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetEstimate {
    pub name: String,
    pub logg: DerivedEstimate,
}

/// Derives the companion's surface gravity for a single target.
#[instrument(skip_all, name = "redshift_workflow", fields(target = %target.name))]
pub fn run(
    target: &RedshiftTarget,
    samples: usize,
    rng: &mut impl Rng,
) -> Result<TargetEstimate, EngineError> {
    let logg = propagate(&target.system, samples, rng)?;
    info!(
        logg = logg.value,
        lower = logg.lower,
        upper = logg.upper,
        "Derived companion surface gravity"
    );
    Ok(TargetEstimate {
        name: target.name.clone(),
        logg,
    })
}

/// Runs the propagation for a list of targets, in order, sharing one random
/// stream. Any failing target aborts the batch.
pub fn run_all(
    targets: &[RedshiftTarget],
    samples: usize,
    rng: &mut impl Rng,
) -> Result<Vec<TargetEstimate>, EngineError> {
    targets
        .iter()
        .map(|target| run(target, samples, rng))
        .collect()
}
