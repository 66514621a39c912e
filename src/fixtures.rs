//! Small hand-built graphs shared by unit and integration tests.

use crate::types::{Link, Node, NodeId};

/// Creates `n` nodes named `0..n` with `time == index`
pub fn init_nodes(n: usize) -> Vec<Node> {
    (0..n).map(|i| Node::new(NodeId(i), i as f64)).collect()
}

/// Builds links from `(source, target)` index pairs
pub fn links(pairs: &[(usize, usize)]) -> Vec<Link> {
    pairs
        .iter()
        .map(|&(source, target)| Link::new(NodeId(source), NodeId(target)))
        .collect()
}

/// `1->0, 2->0, 3->2, 3->1`
pub fn diamond() -> (Vec<Node>, Vec<Link>) {
    (init_nodes(4), links(&[(1, 0), (2, 0), (3, 2), (3, 1)]))
}

/// `0->1, 1->2, ..., (n-2)->(n-1)`
pub fn forward_chain(n: usize) -> (Vec<Node>, Vec<Link>) {
    let pairs: Vec<(usize, usize)> = (0..n.saturating_sub(1)).map(|i| (i, i + 1)).collect();
    (init_nodes(n), links(&pairs))
}

/// `1->0, 2->1, ..., (n-1)->(n-2)`, each node approving the previous one
pub fn approval_chain(n: usize) -> (Vec<Node>, Vec<Link>) {
    let pairs: Vec<(usize, usize)> = (1..n).map(|i| (i, i - 1)).collect();
    (init_nodes(n), links(&pairs))
}

/// Ids for a list of indices
pub fn ids(indices: &[usize]) -> Vec<NodeId> {
    indices.iter().map(|&i| NodeId(i)).collect()
}
