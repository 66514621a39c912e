use std::path::{Path, PathBuf};
use tangle::utils::logging;
use crate::config::Config;
use crate::scenarios::sweep_runner::RESULTS_ROOT;
use crate::simulation::{create_progress_bar, run_simulation, SimulationError};
use crate::SimulationResults;

// ------------------------------------------------------------------------------------------------
// Simulation Entry Point
// ------------------------------------------------------------------------------------------------

/// Runs the simple simulation: `num_runs` tangles grown with one configuration.
///
/// Reads `config_path` when given, the default simple configuration otherwise,
/// and writes its results to `simulator/results/sim_simple/data`.
pub async fn run_simple_simulation(config_path: Option<&Path>) -> Result<SimulationResults, SimulationError> {
    let config = match config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    run_simple_with_config(config, PathBuf::from(RESULTS_ROOT)).await
}

/// Runs the simple simulation with an already loaded configuration, writing under `results_root`
pub async fn run_simple_with_config(config: Config, results_root: PathBuf) -> Result<SimulationResults, SimulationError> {
    logging::log("SIMULATOR", "=== Simple Simulation ===");
    println!("Running Simple Simulation");

    let progress_bar = create_progress_bar(config.run_config.num_runs as u64, "runs");
    let bar = progress_bar.clone();
    let results = tokio::task::spawn_blocking(move || run_simulation(&config, &bar)).await??;
    progress_bar.finish_with_message("done");

    results.save_to_directory(results_root.join("sim_simple").join("data"))?;
    println!("Simple simulation complete");
    Ok(results)
}
