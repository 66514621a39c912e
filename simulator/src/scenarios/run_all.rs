use std::time::Instant;
use tangle::utils::logging;
use crate::simulation::SimulationError;

/// Runs every scenario sequentially with its default configuration
pub async fn run_all() -> Result<(), SimulationError> {
    let start_time = Instant::now();

    logging::log("SIMULATOR", "=== Starting All Scenarios ===");

    crate::scenarios::sim_simple::run_simple_simulation(None).await?;
    crate::scenarios::sim_sweep_lambda::run_sweep_lambda_simulation(None).await?;
    crate::scenarios::sim_sweep_alpha::run_sweep_alpha_simulation(None).await?;
    crate::scenarios::sim_sweep_latency::run_sweep_latency_simulation(None).await?;

    let total_time = start_time.elapsed();
    logging::log("SIMULATOR", "=== All Scenarios Completed Successfully ===");
    logging::log("SIMULATOR", &format!("Total execution time: {:.2?}", total_time));

    println!("All scenarios completed successfully!");
    println!("Total execution time: {:.2?}", total_time);

    Ok(())
}
