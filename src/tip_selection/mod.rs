//! Tip selection strategies.
//!
//! Every strategy returns either no candidates or exactly two, which may be
//! the same node. The generator treats them interchangeably through
//! [`TipSelection::select`].

use std::fmt;
use std::str::FromStr;
use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::graph::{choose, ApprovalIndex};
use crate::ordering::calculate_weights;
use crate::random_walk::{random_walk, weighted_random_walk};
use crate::types::{Link, Node, NodeId};

#[cfg(test)]
mod tests;

// ------------------------------------------------------------------------------------------------
// Strategy Selection
// ------------------------------------------------------------------------------------------------

/// The available tip selection algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipSelection {
    /// Two tips drawn uniformly, with replacement
    UniformRandom,
    /// Two unbiased random walks from the oldest visible node
    UnweightedMcmc,
    /// Two random walks biased by cumulative weight
    WeightedMcmc,
}

impl TipSelection {
    pub const ALL: [TipSelection; 3] = [
        TipSelection::UniformRandom,
        TipSelection::UnweightedMcmc,
        TipSelection::WeightedMcmc,
    ];

    /// Selects up to two parents from the given sub-tangle.
    /// `alpha` is only read by [`TipSelection::WeightedMcmc`].
    pub fn select<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        nodes: &[Node],
        links: &[Link],
        alpha: f64,
    ) -> Vec<NodeId> {
        match self {
            TipSelection::UniformRandom => uniform_random(rng, nodes, links),
            TipSelection::UnweightedMcmc => unweighted_mcmc(rng, nodes, links),
            TipSelection::WeightedMcmc => weighted_mcmc(rng, nodes, links, alpha),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TipSelection::UniformRandom => "uniform_random",
            TipSelection::UnweightedMcmc => "unweighted_mcmc",
            TipSelection::WeightedMcmc => "weighted_mcmc",
        }
    }
}

impl fmt::Display for TipSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TipSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "uniform_random" | "uniformRandom" => Ok(TipSelection::UniformRandom),
            "unweighted_mcmc" | "unWeightedMCMC" => Ok(TipSelection::UnweightedMcmc),
            "weighted_mcmc" | "weightedMCMC" => Ok(TipSelection::WeightedMcmc),
            other => Err(format!("Unknown tip selection algorithm: {}", other)),
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Strategies
// ------------------------------------------------------------------------------------------------

/// Draws two tips uniformly at random, with replacement
pub fn uniform_random<R: Rng + ?Sized>(rng: &mut R, nodes: &[Node], links: &[Link]) -> Vec<NodeId> {
    let index = ApprovalIndex::new(links);
    let candidates: Vec<NodeId> = nodes
        .iter()
        .map(|node| node.id)
        .filter(|id| index.is_tip(*id))
        .collect();

    match (choose(rng, &candidates), choose(rng, &candidates)) {
        (Some(first), Some(second)) => vec![*first, *second],
        _ => Vec::new(),
    }
}

/// Two independent unweighted walks starting at `nodes[0]`
pub fn unweighted_mcmc<R: Rng + ?Sized>(rng: &mut R, nodes: &[Node], links: &[Link]) -> Vec<NodeId> {
    let Some(start) = nodes.first().map(|node| node.id) else {
        return Vec::new();
    };

    vec![
        random_walk(rng, links, start),
        random_walk(rng, links, start),
    ]
}

/// Recomputes cumulative weights over the sub-tangle, then performs two
/// independent weighted walks starting at `nodes[0]`
pub fn weighted_mcmc<R: Rng + ?Sized>(
    rng: &mut R,
    nodes: &[Node],
    links: &[Link],
    alpha: f64,
) -> Vec<NodeId> {
    let Some(start) = nodes.first().map(|node| node.id) else {
        return Vec::new();
    };

    let weights = calculate_weights(nodes, links);

    vec![
        weighted_random_walk(rng, links, &weights, start, alpha),
        weighted_random_walk(rng, links, &weights, start, alpha),
    ]
}
