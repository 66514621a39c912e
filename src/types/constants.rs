use crate::tip_selection::TipSelection;

/// Default number of nodes in a generated tangle, genesis included
pub const DEFAULT_NODE_COUNT: usize = 20;

/// Default Poisson arrival rate
pub const DEFAULT_LAMBDA: f64 = 1.5;

/// Default network latency
pub const DEFAULT_H: f64 = 1.0;

/// Default bias strength for weighted MCMC
pub const DEFAULT_ALPHA: f64 = 0.5;

/// Default tip selection algorithm
pub fn default_tip_selection() -> TipSelection {
    TipSelection::WeightedMcmc
}
