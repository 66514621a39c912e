pub mod types;
pub mod error;
pub mod graph;
pub mod ordering;
pub mod random_walk;
pub mod tip_selection;
pub mod generator;
pub mod utils;

#[cfg(any(test, feature = "test"))]
pub mod fixtures;

pub use error::TangleError;
pub use generator::{generate_tangle, GeneratorConfig, TangleGenerator};
pub use graph::{get_approvers, get_descendants, get_tips, is_tip, Descendants};
pub use ordering::{calculate_weights, topological_sort, CumulativeWeights};
pub use random_walk::{random_walk, weighted_random_walk};
pub use tip_selection::TipSelection;
pub use types::{Link, LinkId, Node, NodeId, Tangle};
