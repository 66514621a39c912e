use std::fs;
use std::path::Path;
use std::time::Instant;
use serde_json;
use tangle::utils::logging;
use tangle::{get_descendants, get_tips, GeneratorConfig, LinkId, NodeId, Tangle};
use crate::stats::{AverageStats, TangleStats};

/// Results of one simulation: the statistics of every run plus the last
/// generated tangle, kept for render consumers
#[derive(Debug)]
pub struct SimulationResults {
    // Simulation parameters
    pub tangle_config: GeneratorConfig,
    pub num_runs: usize,
    pub seed: Option<u64>,

    // Per-run statistics
    pub runs: Vec<TangleStats>,
    pub last_tangle: Option<Tangle>,

    pub start_time: Instant,
}

impl SimulationResults {
    pub fn new(tangle_config: GeneratorConfig, num_runs: usize, seed: Option<u64>) -> Self {
        Self {
            tangle_config,
            num_runs,
            seed,
            runs: Vec::with_capacity(num_runs),
            last_tangle: None,
            start_time: Instant::now(),
        }
    }

    /// Records the statistics of a finished run and keeps its tangle
    pub fn record_run(&mut self, tangle: Tangle) {
        self.runs.push(TangleStats::from_tangle(&tangle));
        self.last_tangle = Some(tangle);
    }

    pub fn summary(&self) -> AverageStats {
        AverageStats::from_runs(&self.runs)
    }

    /// Parameters, per-run statistics and their means
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "parameters": {
                "node_count": self.tangle_config.node_count,
                "lambda": self.tangle_config.lambda,
                "h": self.tangle_config.h,
                "alpha": self.tangle_config.alpha,
                "tip_selection": self.tangle_config.tip_selection.as_str(),
                "num_runs": self.num_runs,
                "seed": self.seed,
            },
            "results": {
                "average": self.summary(),
                "runs": self.runs,
            }
        })
    }

    /// The last tangle together with its tips and everything its newest node
    /// transitively approves, the shape render consumers highlight
    pub fn tangle_json(&self) -> Option<serde_json::Value> {
        let tangle = self.last_tangle.as_ref()?;
        let mut tips: Vec<NodeId> = get_tips(&tangle.nodes, &tangle.links).into_iter().collect();
        tips.sort();
        let newest = tangle.nodes.last()?.id;
        let descendants = get_descendants(&tangle.nodes, &tangle.links, newest);
        let mut descendant_nodes: Vec<NodeId> = descendants.nodes.into_iter().collect();
        descendant_nodes.sort();
        let mut descendant_links: Vec<LinkId> = descendants.links.into_iter().collect();
        descendant_links.sort();

        Some(serde_json::json!({
            "tangle": tangle.to_json(),
            "tips": tips,
            "newest": {
                "node": newest,
                "descendants": descendant_nodes,
                "links": descendant_links,
            },
        }))
    }

    /// Logs the summary and writes `simulation_stats.json` and `tangle.json`
    /// into `dir`
    pub fn save_to_directory<P: AsRef<Path>>(&self, dir: P) -> Result<(), crate::SimulationError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let summary = self.summary();
        logging::log("SIMULATOR", "=== Simulation Statistics ===");
        logging::log("SIMULATOR", &format!("Runs: {}", summary.runs));
        logging::log("SIMULATOR", &format!("Mean Tips: {:.2}", summary.tip_count));
        logging::log("SIMULATOR", &format!("Mean Tip Ratio: {:.3}", summary.tip_ratio));
        logging::log("SIMULATOR", &format!("Mean Duration: {:.2}", summary.duration));
        logging::log("SIMULATOR", &format!("Elapsed: {:.2?}", self.start_time.elapsed()));
        logging::log("SIMULATOR", "=============================");

        let stats_file = dir.join("simulation_stats.json");
        fs::write(&stats_file, serde_json::to_string_pretty(&self.to_json())?)?;
        logging::log("SIMULATOR", &format!("Saved simulation statistics to {}", stats_file.display()));

        if let Some(tangle) = self.tangle_json() {
            let tangle_file = dir.join("tangle.json");
            fs::write(&tangle_file, serde_json::to_string_pretty(&tangle)?)?;
            logging::log("SIMULATOR", &format!("Saved tangle to {}", tangle_file.display()));
        }

        Ok(())
    }
}
