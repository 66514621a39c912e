use std::path::{Path, PathBuf};
use crate::config::{SweepConfig, SweepKind};
use crate::scenarios::sweep_runner::SweepRunner;
use crate::simulation::SimulationError;
use crate::SimulationResults;

/// Runs the arrival rate sweep.
///
/// Explores how the Poisson arrival rate lambda shapes the tangle. Denser arrivals leave more nodes
/// unseen by their successors, so the tip count grows with lambda.
pub async fn run_sweep_lambda_simulation(config_path: Option<&Path>) -> Result<Vec<(f64, SimulationResults)>, SimulationError> {
    let path: PathBuf = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(SweepKind::Lambda.config_path()));

    let runner = SweepRunner::new(
        "Arrival Rate",
        "sim_sweep_lambda",
        SweepKind::Lambda,
        Box::new(move || SweepConfig::load_from(&path, SweepKind::Lambda)),
    );

    runner.run().await
}
