//! Topological ordering and cumulative weights.
//!
//! Both operations only consider links whose endpoints lie in the supplied
//! node set, so they can run on a visible sub-tangle directly.

use std::collections::{HashMap, HashSet};
use crate::graph::ApprovalIndex;
use crate::types::{Link, Node, NodeId};

#[cfg(test)]
mod tests;

// ------------------------------------------------------------------------------------------------
// Topological Sort
// ------------------------------------------------------------------------------------------------

/// Orders nodes so every approver precedes the nodes it approves.
///
/// Depth-first post-order over `source -> target` edges, reversed. Roots are
/// taken in `nodes` order and each node appears exactly once, connected or not.
pub fn topological_sort(nodes: &[Node], links: &[Link]) -> Vec<NodeId> {
    let members: HashSet<NodeId> = nodes.iter().map(|node| node.id).collect();
    let mut children: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
    for link in links {
        if members.contains(&link.source) && members.contains(&link.target) {
            children.entry(link.source).or_default().push(link.target);
        }
    }

    let mut visited: HashSet<NodeId> = HashSet::with_capacity(nodes.len());
    let mut order = Vec::with_capacity(nodes.len());
    // (node, index of the next child to visit)
    let mut stack: Vec<(NodeId, usize)> = Vec::new();

    for node in nodes {
        if !visited.insert(node.id) {
            continue;
        }
        stack.push((node.id, 0));

        while let Some(frame) = stack.last_mut() {
            let current = frame.0;
            let child = children
                .get(&current)
                .and_then(|kids| kids.get(frame.1))
                .copied();
            frame.1 += 1;

            match child {
                Some(child) => {
                    if visited.insert(child) {
                        stack.push((child, 0));
                    }
                }
                None => {
                    order.push(current);
                    stack.pop();
                }
            }
        }
    }

    order.reverse();
    order
}

// ------------------------------------------------------------------------------------------------
// Cumulative Weights
// ------------------------------------------------------------------------------------------------

/// Cumulative weight per node, valid for the sub-tangle it was computed over
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CumulativeWeights(HashMap<NodeId, usize>);

impl CumulativeWeights {
    pub fn get(&self, node: NodeId) -> Option<usize> {
        self.0.get(&node).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        self.0.iter().map(|(&id, &weight)| (id, weight))
    }
}

impl FromIterator<(NodeId, usize)> for CumulativeWeights {
    fn from_iter<I: IntoIterator<Item = (NodeId, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Fixed-size bitset over dense node positions
#[derive(Clone)]
struct AncestorSet {
    words: Vec<u64>,
}

impl AncestorSet {
    fn new(bits: usize) -> Self {
        Self { words: vec![0; (bits + 63) / 64] }
    }

    fn insert(&mut self, bit: usize) {
        self.words[bit / 64] |= 1u64 << (bit % 64);
    }

    fn union_with(&mut self, other: &AncestorSet) {
        for (word, other) in self.words.iter_mut().zip(&other.words) {
            *word |= *other;
        }
    }

    fn len(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }
}

/// Computes every node's cumulative weight: the size of the set made of the
/// node itself and every node that transitively approves it.
///
/// A single pass over the topological order, so each approver's set is
/// complete before it is merged into the nodes it approves.
pub fn calculate_weights(nodes: &[Node], links: &[Link]) -> CumulativeWeights {
    let position: HashMap<NodeId, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id, i))
        .collect();
    let index = ApprovalIndex::new(links);
    let mut sets = vec![AncestorSet::new(nodes.len()); nodes.len()];

    for id in topological_sort(nodes, links) {
        let own = position[&id];
        let mut set = AncestorSet::new(nodes.len());
        set.insert(own);
        for approver in index.approvers(id) {
            if let Some(&approver_position) = position.get(approver) {
                set.union_with(&sets[approver_position]);
            }
        }
        sets[own] = set;
    }

    nodes
        .iter()
        .zip(&sets)
        .map(|(node, set)| (node.id, set.len()))
        .collect()
}
