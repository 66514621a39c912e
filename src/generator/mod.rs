//! Tangle growth under Poisson arrivals.
//!
//! Each arriving node sees only the sub-tangle older than its arrival time
//! minus the latency `h`, asks the configured tip selection algorithm for
//! parents and links to each distinct candidate.

use rand::Rng;
use rand_distr::{Distribution, Exp};
use serde::{Deserialize, Serialize};
use crate::error::TangleError;
use crate::tip_selection::TipSelection;
use crate::types::{constants, NodeId, Tangle};
use crate::utils::logging;

#[cfg(test)]
mod tests;

// ------------------------------------------------------------------------------------------------
// Configuration
// ------------------------------------------------------------------------------------------------

/// Parameters of a single tangle generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Total number of nodes, genesis included
    #[serde(default = "default_node_count")]
    pub node_count: usize,
    /// Poisson arrival rate (higher means denser arrivals)
    #[serde(default = "default_lambda")]
    pub lambda: f64,
    /// Network latency: a node cannot see nodes younger than `time - h`
    #[serde(default = "default_h")]
    pub h: f64,
    /// Bias strength, only read by weighted MCMC
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default = "constants::default_tip_selection")]
    pub tip_selection: TipSelection,
}

fn default_node_count() -> usize {
    constants::DEFAULT_NODE_COUNT
}

fn default_lambda() -> f64 {
    constants::DEFAULT_LAMBDA
}

fn default_h() -> f64 {
    constants::DEFAULT_H
}

fn default_alpha() -> f64 {
    constants::DEFAULT_ALPHA
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            node_count: default_node_count(),
            lambda: default_lambda(),
            h: default_h(),
            alpha: default_alpha(),
            tip_selection: constants::default_tip_selection(),
        }
    }
}

impl GeneratorConfig {
    /// Rejects parameters that cannot describe a run. Nothing is clamped.
    pub fn validate(&self) -> Result<(), TangleError> {
        if self.node_count == 0 {
            return Err(TangleError::InvalidConfig("Node count must be positive".into()));
        }
        if !(self.lambda.is_finite() && self.lambda > 0.0) {
            return Err(TangleError::InvalidConfig(format!("Lambda must be positive and finite, got {}", self.lambda)));
        }
        if !(self.h.is_finite() && self.h >= 0.0) {
            return Err(TangleError::InvalidConfig(format!("Latency h must be non-negative and finite, got {}", self.h)));
        }
        if !self.alpha.is_finite() {
            return Err(TangleError::InvalidConfig(format!("Alpha must be finite, got {}", self.alpha)));
        }
        Ok(())
    }
}

// ------------------------------------------------------------------------------------------------
// Generator
// ------------------------------------------------------------------------------------------------

/// Grows one tangle node by node.
///
/// The generator exclusively owns its arena and running clock, independent
/// tangles need independent generators.
pub struct TangleGenerator {
    config: GeneratorConfig,
    arrivals: Exp<f64>,
    tangle: Tangle,
    clock: f64,
}

impl TangleGenerator {
    /// Validates the configuration and creates the genesis node.
    /// The clock starts at `h` so genesis is visible to the first arrival.
    pub fn new(config: GeneratorConfig) -> Result<Self, TangleError> {
        config.validate()?;
        let arrivals = Exp::new(config.lambda)
            .map_err(|e| TangleError::InvalidConfig(e.to_string()))?;

        logging::log("GENERATOR", &format!(
            "Creating generator: {} nodes, lambda {}, h {}, alpha {}, {}",
            config.node_count, config.lambda, config.h, config.alpha, config.tip_selection
        ));

        Ok(Self {
            clock: config.h,
            config,
            arrivals,
            tangle: Tangle::with_genesis(),
        })
    }

    pub fn is_complete(&self) -> bool {
        self.tangle.nodes.len() >= self.config.node_count
    }

    /// Adds the next node and its links. Returns `None` once complete.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<NodeId> {
        if self.is_complete() {
            return None;
        }

        self.clock += self.arrivals.sample(rng);
        let time = self.clock;

        let candidates = {
            let (nodes, links) = self.tangle.visible(time, self.config.h);
            self.config.tip_selection.select(rng, nodes, links, self.config.alpha)
        };

        let id = self.tangle.push_node(time);
        let mut parents: Vec<NodeId> = Vec::with_capacity(2);
        for candidate in candidates {
            if !parents.contains(&candidate) {
                parents.push(candidate);
                self.tangle.push_link(id, candidate);
            }
        }

        logging::log("GENERATOR", &format!(
            "Node {} arrived at {:.3}, approves {:?}",
            id, time, parents.iter().map(|p| p.0).collect::<Vec<_>>()
        ));

        Some(id)
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn tangle(&self) -> &Tangle {
        &self.tangle
    }

    pub fn finish(self) -> Tangle {
        self.tangle
    }
}

/// Generates a complete tangle
pub fn generate_tangle<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<Tangle, TangleError> {
    let mut generator = TangleGenerator::new(config.clone())?;
    while generator.step(rng).is_some() {}
    Ok(generator.finish())
}
