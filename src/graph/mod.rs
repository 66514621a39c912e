//! Elementary queries over a tangle's node and link sequences.
//!
//! Every function takes plain slices so it can run on any sub-tangle, in
//! particular the visible prefix the generator hands to a tip selector.

use std::collections::{HashMap, HashSet};
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use crate::types::{Link, LinkId, Node, NodeId};


// ------------------------------------------------------------------------------------------------
// Approval Index
// ------------------------------------------------------------------------------------------------

/// Adjacency of a link sequence, built once in O(E).
///
/// `approvers` maps a target to the sources approving it (link order),
/// `outgoing` maps a source to the links it created.
#[derive(Debug, Default)]
pub struct ApprovalIndex {
    approvers: HashMap<NodeId, Vec<NodeId>>,
    outgoing: HashMap<NodeId, Vec<LinkId>>,
}

impl ApprovalIndex {
    pub fn new(links: &[Link]) -> Self {
        let mut index = Self::default();
        for (position, link) in links.iter().enumerate() {
            index.approvers.entry(link.target).or_default().push(link.source);
            index.outgoing.entry(link.source).or_default().push(LinkId(position));
        }
        index
    }

    /// Nodes directly approving `node`
    pub fn approvers(&self, node: NodeId) -> &[NodeId] {
        self.approvers.get(&node).map_or(&[][..], Vec::as_slice)
    }

    /// Links created by `node`
    pub fn outgoing(&self, node: NodeId) -> &[LinkId] {
        self.outgoing.get(&node).map_or(&[][..], Vec::as_slice)
    }

    pub fn is_tip(&self, node: NodeId) -> bool {
        self.approvers(node).is_empty()
    }
}

// ------------------------------------------------------------------------------------------------
// Queries
// ------------------------------------------------------------------------------------------------

/// True iff no link approves `node`
pub fn is_tip(links: &[Link], node: NodeId) -> bool {
    !links.iter().any(|link| link.target == node)
}

/// Sources of all links targeting `node`, in link insertion order
pub fn get_approvers(links: &[Link], node: NodeId) -> Vec<NodeId> {
    links
        .iter()
        .filter(|link| link.target == node)
        .map(|link| link.source)
        .collect()
}

/// All nodes no link approves yet
pub fn get_tips(nodes: &[Node], links: &[Link]) -> HashSet<NodeId> {
    let approved: HashSet<NodeId> = links.iter().map(|link| link.target).collect();
    nodes
        .iter()
        .map(|node| node.id)
        .filter(|id| !approved.contains(id))
        .collect()
}

/// Nodes and links reachable from a root along approvals
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Descendants {
    pub nodes: HashSet<NodeId>,
    pub links: HashSet<LinkId>,
}

/// Collects everything `root` transitively approves.
///
/// Iterative depth-first traversal over `source -> target` links. The root is
/// never part of the result, and links pointing outside `nodes` are skipped.
pub fn get_descendants(nodes: &[Node], links: &[Link], root: NodeId) -> Descendants {
    let members: HashSet<NodeId> = nodes.iter().map(|node| node.id).collect();
    let index = ApprovalIndex::new(links);

    let mut descendants = Descendants::default();
    let mut seen = HashSet::from([root]);
    let mut stack = vec![root];

    while let Some(current) = stack.pop() {
        for &link_id in index.outgoing(current) {
            let target = links[link_id.0].target;
            if !members.contains(&target) {
                continue;
            }
            descendants.links.insert(link_id);
            if seen.insert(target) {
                descendants.nodes.insert(target);
                stack.push(target);
            }
        }
    }

    descendants
}

// ------------------------------------------------------------------------------------------------
// Random Choice
// ------------------------------------------------------------------------------------------------

/// Uniformly picks one candidate, `None` if there are none
pub fn choose<'a, T, R: Rng + ?Sized>(rng: &mut R, candidates: &'a [T]) -> Option<&'a T> {
    candidates.choose(rng)
}

/// Picks candidate `i` with probability `weights[i] / sum(weights)`.
///
/// Returns `None` for empty input, mismatched lengths, or weights that are
/// negative, non-finite or all zero.
pub fn weighted_choose<'a, T, R: Rng + ?Sized>(
    rng: &mut R,
    candidates: &'a [T],
    weights: &[f64],
) -> Option<&'a T> {
    if candidates.is_empty() || candidates.len() != weights.len() {
        return None;
    }
    // WeightedIndex panics on an infinite total rather than erroring
    if weights.iter().any(|weight| !weight.is_finite()) {
        return None;
    }
    let distribution = WeightedIndex::new(weights).ok()?;
    candidates.get(distribution.sample(rng))
}
