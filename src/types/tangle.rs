use serde::{Deserialize, Serialize};
use super::{Link, Node, NodeId};

/// The arena owning every node and link of a tangle.
///
/// Links reference nodes by `NodeId`. Both sequences are append-only and sorted
/// by time, so any visible sub-tangle is a prefix of each.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tangle {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

impl Tangle {
    /// Creates a tangle holding only the genesis node at time 0
    pub fn with_genesis() -> Self {
        Self {
            nodes: vec![Node::new(NodeId(0), 0.0)],
            links: Vec::new(),
        }
    }

    pub fn genesis(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Looks up a node by its stable name
    pub fn find_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.name == name)
    }

    /// Number of nodes with `time < cutoff`
    pub fn visible_node_count(&self, cutoff: f64) -> usize {
        self.nodes.partition_point(|node| node.time < cutoff)
    }

    /// Number of links whose source has `time < cutoff`
    pub fn visible_link_count(&self, cutoff: f64) -> usize {
        self.links.partition_point(|link| {
            self.node(link.source).is_some_and(|source| source.time < cutoff)
        })
    }

    /// The sub-tangle a node arriving at `time` can see under latency `h`
    pub fn visible(&self, time: f64, h: f64) -> (&[Node], &[Link]) {
        let cutoff = time - h;
        (
            &self.nodes[..self.visible_node_count(cutoff)],
            &self.links[..self.visible_link_count(cutoff)],
        )
    }

    /// Appends a node at `time` and returns its id
    pub fn push_node(&mut self, time: f64) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id, time));
        id
    }

    pub fn push_link(&mut self, source: NodeId, target: NodeId) {
        self.links.push(Link::new(source, target));
    }

    /// Time of the newest node
    pub fn duration(&self) -> f64 {
        self.nodes.last().map_or(0.0, |node| node.time)
    }

    /// Serializes the tangle for render consumers
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "nodes": self.nodes,
            "links": self.links,
        })
    }
}
