use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique identifier for a node in the tangle arena
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// Position of a link in the tangle's link sequence
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct LinkId(pub usize);

/// A transaction in the tangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Identity of this node, equal to its insertion index
    pub id: NodeId,
    /// Stable label for external consumers (decimal form of the index)
    pub name: String,
    /// Arrival time, genesis is at 0
    pub time: f64,
}

impl Node {
    /// Creates a node whose name is derived from its id
    pub fn new(id: NodeId, time: f64) -> Self {
        Self {
            id,
            name: id.0.to_string(),
            time,
        }
    }
}

/// An approval: `source` approves `target`
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// The newer, approving node
    pub source: NodeId,
    /// The older, approved node
    pub target: NodeId,
}

impl Link {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
