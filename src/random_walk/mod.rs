//! MCMC particle walks from a start node towards the tips.

use rand::Rng;
use crate::graph::{choose, weighted_choose, ApprovalIndex};
use crate::ordering::CumulativeWeights;
use crate::types::{Link, NodeId};


// ------------------------------------------------------------------------------------------------
// Walks
// ------------------------------------------------------------------------------------------------

/// Moves a particle to a uniformly chosen approver until it reaches a tip
pub fn random_walk<R: Rng + ?Sized>(rng: &mut R, links: &[Link], start: NodeId) -> NodeId {
    let index = ApprovalIndex::new(links);
    walk(&index, links.len(), start, |approvers| {
        choose(&mut *rng, approvers).copied()
    })
}

/// Like [`random_walk`], but approver `a` is chosen with probability
/// proportional to `exp(alpha * weight(a))`.
///
/// `weights` must come from `calculate_weights` over the same sub-tangle.
/// Approvers missing from it count as weight 1.
pub fn weighted_random_walk<R: Rng + ?Sized>(
    rng: &mut R,
    links: &[Link],
    weights: &CumulativeWeights,
    start: NodeId,
    alpha: f64,
) -> NodeId {
    let index = ApprovalIndex::new(links);
    walk(&index, links.len(), start, |approvers| {
        if approvers.is_empty() {
            return None;
        }
        let bias = transition_weights(approvers, weights, alpha);
        match weighted_choose(&mut *rng, approvers, &bias) {
            Some(next) => Some(*next),
            None => {
                tracing::warn!("invalid transition weights {:?} for alpha {}, stepping uniformly", bias, alpha);
                choose(&mut *rng, approvers).copied()
            }
        }
    })
}

/// Runs `step` until it finds no successor.
///
/// A walk on a DAG takes at most one step per link, so exceeding that bound
/// means the links contain a cycle and the walk stops where it is.
fn walk<F>(index: &ApprovalIndex, max_steps: usize, start: NodeId, mut step: F) -> NodeId
where
    F: FnMut(&[NodeId]) -> Option<NodeId>,
{
    let mut particle = start;
    for _ in 0..=max_steps {
        match step(index.approvers(particle)) {
            Some(next) => particle = next,
            None => return particle,
        }
    }
    tracing::warn!("random walk from {} did not reach a tip, links contain a cycle", start);
    particle
}

/// `exp(alpha * (w - w_ref))` per approver.
///
/// `w_ref` is the largest weight for `alpha >= 0` and the smallest otherwise,
/// so every exponent is at or below zero and the most favored approver gets 1.
/// A huge `alpha` drives the other exponents to `-inf`, never to NaN.
pub fn transition_weights(approvers: &[NodeId], weights: &CumulativeWeights, alpha: f64) -> Vec<f64> {
    let approver_weights: Vec<f64> = approvers
        .iter()
        .map(|approver| weights.get(*approver).unwrap_or(1) as f64)
        .collect();
    let reference = if alpha >= 0.0 {
        approver_weights.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    } else {
        approver_weights.iter().copied().fold(f64::INFINITY, f64::min)
    };
    approver_weights
        .iter()
        .map(|weight| (alpha * (weight - reference)).exp())
        .collect()
}
