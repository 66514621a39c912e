use std::fs;
use std::path::PathBuf;
use chrono::Local;
use serde_json;
use tangle::utils::logging;
use crate::config::{ConfigError, SweepConfig, SweepKind};
use crate::simulation::{create_progress_bar, run_simulation, SimulationError};
use crate::SimulationResults;

/// Root directory every scenario writes under
pub const RESULTS_ROOT: &str = "simulator/results";

/// Generic sweep runner shared by every sweep scenario.
///
/// Each sweep point is an independent simulation, so the points run
/// concurrently on the blocking pool and are collected in sweep order.
pub struct SweepRunner {
    sweep_name: String,
    results_dir: PathBuf,
    kind: SweepKind,
    config_loader: Box<dyn Fn() -> Result<SweepConfig, ConfigError> + Send + Sync>,
}

impl SweepRunner {
    pub fn new(
        sweep_name: &str,
        results_dir: &str,
        kind: SweepKind,
        config_loader: Box<dyn Fn() -> Result<SweepConfig, ConfigError> + Send + Sync>,
    ) -> Self {
        Self {
            sweep_name: sweep_name.to_string(),
            results_dir: PathBuf::from(RESULTS_ROOT).join(results_dir),
            kind,
            config_loader,
        }
    }

    /// Writes under `root` instead of the default results directory
    pub fn with_results_root(mut self, root: impl Into<PathBuf>) -> Self {
        let dir_name = self.results_dir.file_name().map(|name| name.to_owned()).unwrap_or_default();
        self.results_dir = root.into().join(dir_name);
        self
    }

    pub fn results_dir(&self) -> &PathBuf {
        &self.results_dir
    }

    /// Runs the complete sweep and returns every point with its results
    pub async fn run(&self) -> Result<Vec<(f64, SimulationResults)>, SimulationError> {
        let data_dir = self.results_dir.join("data");
        fs::create_dir_all(&data_dir)?;

        let sweep_config = (self.config_loader)()?;
        let values = sweep_config.parameter_values(self.kind);
        self.log_sweep_start(&sweep_config, &values);

        println!("Running Sweep: {}", self.sweep_name);
        let total_runs = (values.len() * sweep_config.run_config.num_runs) as u64;
        let progress_bar = create_progress_bar(total_runs, "runs");

        let mut handles = Vec::with_capacity(values.len());
        for &value in &values {
            let sim_config = sweep_config.config_for(self.kind, value);
            let progress_bar = progress_bar.clone();
            handles.push(tokio::task::spawn_blocking(move || {
                run_simulation(&sim_config, &progress_bar)
            }));
        }

        let mut all_results = Vec::with_capacity(values.len());
        for (sim_index, (value, handle)) in values.iter().zip(handles).enumerate() {
            let results = handle.await??;
            logging::log("SWEEP", &format!(
                "Simulation {}/{} with {} = {:.3}: mean tips {:.2}",
                sim_index + 1,
                values.len(),
                self.kind.parameter_name(),
                value,
                results.summary().tip_count,
            ));
            results.save_to_directory(data_dir.join(format!("sim_{}", sim_index)))?;
            all_results.push((*value, results));
        }

        progress_bar.finish_with_message(format!("{} complete", self.sweep_name));
        println!("Sweep simulation complete");

        self.save_sweep_results(&all_results)?;

        logging::log("SWEEP", "=== Sweep Simulation Complete ===");
        logging::log("SWEEP", &format!("Total simulations completed: {}", all_results.len()));

        Ok(all_results)
    }

    /// Writes the mean statistics of every sweep point to `sweep_results.json`
    fn save_sweep_results(&self, all_results: &[(f64, SimulationResults)]) -> Result<(), SimulationError> {
        let parameter = self.kind.parameter_name();
        let points: Vec<serde_json::Value> = all_results
            .iter()
            .map(|(value, results)| -> Result<serde_json::Value, serde_json::Error> {
                let mut point = serde_json::Map::new();
                point.insert(parameter.to_string(), serde_json::json!(value));
                point.insert("average".to_string(), serde_json::to_value(results.summary())?);
                Ok(serde_json::Value::Object(point))
            })
            .collect::<Result<_, _>>()?;
        let combined = serde_json::json!({
            "sweep": self.sweep_name,
            "parameter": parameter,
            "points": points,
        });

        let path = self.results_dir.join("data").join("sweep_results.json");
        fs::write(&path, serde_json::to_string_pretty(&combined)?)?;
        logging::log("SWEEP", &format!("Saved combined results to {}", path.display()));
        Ok(())
    }

    fn log_sweep_start(&self, sweep_config: &SweepConfig, values: &[f64]) {
        logging::log("SWEEP", &format!("=== {} ===", self.sweep_name));
        logging::log("SWEEP", &format!("Start Time: {}", Local::now().format("%Y-%m-%d %H:%M:%S")));
        logging::log("SWEEP", &format!("Number of Simulations: {}", values.len()));
        logging::log("SWEEP", &format!("Runs per Simulation: {}", sweep_config.run_config.num_runs));
        logging::log("SWEEP", &format!("{} values: {:?}", self.kind.parameter_name(), values));
        logging::log("SWEEP", &format!("Tip Selection: {}", sweep_config.tangle_config.tip_selection));
    }
}
