//! Per-tangle statistics for the tangle simulator.
//! Summarizes the shape of a generated tangle: size, tips, connectivity and timing.

use serde::Serialize;
use tangle::graph::ApprovalIndex;
use tangle::{calculate_weights, Tangle};

// ------------------------------------------------------------------------------------------------
// Statistics Tracking
// ------------------------------------------------------------------------------------------------

/// Statistics of a single generated tangle
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TangleStats {
    /// Number of nodes, genesis included
    pub node_count: usize,
    /// Number of approval links
    pub link_count: usize,
    /// Nodes that nothing approves yet
    pub tip_count: usize,
    /// Non-genesis nodes that approve nothing, i.e. arrived before anything was visible
    pub isolated_count: usize,
    /// Mean number of nodes approved per non-genesis node
    pub mean_out_degree: f64,
    /// Cumulative weight of the genesis node
    pub genesis_weight: usize,
    /// Arrival time of the newest node
    pub duration: f64,
}

impl TangleStats {
    pub fn from_tangle(tangle: &Tangle) -> Self {
        let index = ApprovalIndex::new(&tangle.links);
        let tip_count = tangle.nodes.iter().filter(|node| index.is_tip(node.id)).count();
        let isolated_count = tangle
            .nodes
            .iter()
            .skip(1)
            .filter(|node| index.outgoing(node.id).is_empty())
            .count();
        let mean_out_degree = match tangle.nodes.len() {
            0 | 1 => 0.0,
            n => tangle.links.len() as f64 / (n - 1) as f64,
        };
        let genesis_weight = tangle
            .genesis()
            .and_then(|genesis| calculate_weights(&tangle.nodes, &tangle.links).get(genesis.id))
            .unwrap_or(0);

        Self {
            node_count: tangle.nodes.len(),
            link_count: tangle.links.len(),
            tip_count,
            isolated_count,
            mean_out_degree,
            genesis_weight,
            duration: tangle.duration(),
        }
    }

    /// Fraction of nodes that are tips
    pub fn tip_ratio(&self) -> f64 {
        if self.node_count == 0 {
            0.0
        } else {
            self.tip_count as f64 / self.node_count as f64
        }
    }
}

/// Mean of each statistic over a set of runs
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AverageStats {
    pub runs: usize,
    pub node_count: f64,
    pub link_count: f64,
    pub tip_count: f64,
    pub tip_ratio: f64,
    pub isolated_count: f64,
    pub mean_out_degree: f64,
    pub genesis_weight: f64,
    pub duration: f64,
}

impl AverageStats {
    pub fn from_runs(runs: &[TangleStats]) -> Self {
        if runs.is_empty() {
            return Self::default();
        }
        let n = runs.len() as f64;
        let mean = |f: &dyn Fn(&TangleStats) -> f64| runs.iter().map(f).sum::<f64>() / n;

        Self {
            runs: runs.len(),
            node_count: mean(&|s| s.node_count as f64),
            link_count: mean(&|s| s.link_count as f64),
            tip_count: mean(&|s| s.tip_count as f64),
            tip_ratio: mean(&|s| s.tip_ratio()),
            isolated_count: mean(&|s| s.isolated_count as f64),
            mean_out_degree: mean(&|s| s.mean_out_degree),
            genesis_weight: mean(&|s| s.genesis_weight as f64),
            duration: mean(&|s| s.duration),
        }
    }
}
