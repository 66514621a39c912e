use std::path::{Path, PathBuf};
use crate::config::{SweepConfig, SweepKind};
use crate::scenarios::sweep_runner::SweepRunner;
use crate::simulation::SimulationError;
use crate::SimulationResults;

/// Runs the bias strength sweep.
///
/// Explores how the bias strength alpha of weighted MCMC shapes the tangle. Large alpha
/// concentrates walks on heavy branches and leaves lazy tips behind.
pub async fn run_sweep_alpha_simulation(config_path: Option<&Path>) -> Result<Vec<(f64, SimulationResults)>, SimulationError> {
    let path: PathBuf = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(SweepKind::Alpha.config_path()));

    let runner = SweepRunner::new(
        "Bias Strength",
        "sim_sweep_alpha",
        SweepKind::Alpha,
        Box::new(move || SweepConfig::load_from(&path, SweepKind::Alpha)),
    );

    runner.run().await
}
