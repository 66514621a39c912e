pub mod sim_simple;
pub mod sim_sweep_lambda;
pub mod sim_sweep_alpha;
pub mod sim_sweep_latency;
pub mod run_all;
pub mod sweep_runner;
