use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tangle::utils::logging;
use tangle::{generate_tangle, TangleError};
use thiserror::Error;
use crate::config::{Config, ConfigError};
use crate::SimulationResults;

// ------------------------------------------------------------------------------------------------
// Errors
// ------------------------------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Tangle generation failed: {0}")]
    Tangle(#[from] TangleError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to write results: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize results: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Simulation task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

// ------------------------------------------------------------------------------------------------
// Main Simulation Function
// ------------------------------------------------------------------------------------------------

/// Creates the progress bar used for repeated runs
pub fn create_progress_bar(len: u64, unit: &str) -> ProgressBar {
    let progress_bar = ProgressBar::new(len);
    let template = format!("[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos}}/{{len}} {} {{msg}}", unit);
    if let Ok(style) = ProgressStyle::default_bar().template(&template) {
        progress_bar.set_style(style.progress_chars("##-"));
    }
    progress_bar
}

/// RNG of run `run_index`: `seed + run_index` when seeded, fresh entropy otherwise
pub fn run_rng(seed: Option<u64>, run_index: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(run_index as u64)),
        None => StdRng::from_entropy(),
    }
}

/// Grows `num_runs` independent tangles and collects their statistics.
///
/// Blocking. Each finished run advances `progress_bar` by one.
pub fn run_simulation(config: &Config, progress_bar: &ProgressBar) -> Result<SimulationResults, SimulationError> {
    config.validate()?;
    let run_config = &config.run_config;
    let mut results = SimulationResults::new(config.tangle_config.clone(), run_config.num_runs, run_config.seed);

    logging::log("SIMULATOR", &format!(
        "Starting {} runs: {} nodes, lambda {}, h {}, alpha {}, {}",
        run_config.num_runs,
        config.tangle_config.node_count,
        config.tangle_config.lambda,
        config.tangle_config.h,
        config.tangle_config.alpha,
        config.tangle_config.tip_selection,
    ));

    for run_index in 0..run_config.num_runs {
        let mut rng = run_rng(run_config.seed, run_index);
        let tangle = generate_tangle(&config.tangle_config, &mut rng)?;
        logging::log("SIMULATOR", &format!(
            "Run {}/{} finished: {} nodes, {} links, duration {:.3}",
            run_index + 1,
            run_config.num_runs,
            tangle.nodes.len(),
            tangle.links.len(),
            tangle.duration(),
        ));
        results.record_run(tangle);
        progress_bar.inc(1);
    }

    Ok(results)
}
