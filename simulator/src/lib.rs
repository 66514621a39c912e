pub mod config;
pub mod interface;
pub mod scenarios;
pub mod simulation;
pub mod simulation_results;
pub mod stats;

pub use config::{Config, ConfigError, SweepConfig, SweepKind};
pub use interface::{SimulationType, SimulatorInterface};
pub use simulation::{run_simulation, SimulationError};
pub use simulation_results::SimulationResults;
pub use stats::{AverageStats, TangleStats};
