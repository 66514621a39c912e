pub mod constants;
pub mod node;
pub mod tangle;

pub use node::{Link, LinkId, Node, NodeId};
pub use tangle::Tangle;
