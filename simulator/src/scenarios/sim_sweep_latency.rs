use std::path::{Path, PathBuf};
use crate::config::{SweepConfig, SweepKind};
use crate::scenarios::sweep_runner::SweepRunner;
use crate::simulation::SimulationError;
use crate::SimulationResults;

/// Runs the network latency sweep.
///
/// Explores how the network latency h shapes the tangle. A larger h hides more
/// recent nodes from each arrival.
pub async fn run_sweep_latency_simulation(config_path: Option<&Path>) -> Result<Vec<(f64, SimulationResults)>, SimulationError> {
    let path: PathBuf = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(SweepKind::Latency.config_path()));

    let runner = SweepRunner::new(
        "Network Latency",
        "sim_sweep_latency",
        SweepKind::Latency,
        Box::new(move || SweepConfig::load_from(&path, SweepKind::Latency)),
    );

    runner.run().await
}
