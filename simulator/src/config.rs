//! Configuration loader and validator for the tangle simulator.
//! Handles parsing, validation, and access to simulation configuration files.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tangle::GeneratorConfig;
use thiserror::Error;

/// Default location of the simple simulation configuration
pub const SIMPLE_CONFIG_PATH: &str = "simulator/src/scenarios/config_simple.toml";

// ------------------------------------------------------------------------------------------------
// Main Configuration Structs
// ------------------------------------------------------------------------------------------------

/// Main configuration struct for simulation parameters.
///
/// It is used for simple simulations and as the base configuration of every
/// sweep point.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Tangle generation parameters (node count, arrival rate, latency, bias, algorithm)
    pub tangle_config: GeneratorConfig,
    /// How many tangles to grow and how to seed them
    #[serde(default)]
    pub run_config: RunConfig,
}

/// Configuration for repeated runs.
#[derive(Debug, Deserialize, Clone)]
pub struct RunConfig {
    /// Number of independent tangles grown per simulation
    #[serde(default = "default_num_runs")]
    pub num_runs: usize,
    /// Base seed; run `i` uses `seed + i`. Absent means fresh entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_num_runs() -> usize {
    1
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            num_runs: default_num_runs(),
            seed: None,
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Sweep Configuration Structs
// ------------------------------------------------------------------------------------------------

/// Configuration for sweep simulation parameters.
///
/// Only ONE step parameter should be specified per sweep type. Point `i` of a
/// sweep uses `base + i * step`, where `base` is the value in `tangle_config`.
#[derive(Debug, Deserialize, Clone)]
pub struct SweepParameters {
    /// Total number of simulation runs in the sweep
    pub num_simulations: usize,
    /// Step size for arrival rate sweeps
    #[serde(default)]
    pub lambda_step: Option<f64>,
    /// Step size for bias strength sweeps
    #[serde(default)]
    pub alpha_step: Option<f64>,
    /// Step size for network latency sweeps
    #[serde(default)]
    pub h_step: Option<f64>,
}

/// A sweep configuration: a base configuration plus sweep parameters.
#[derive(Debug, Deserialize, Clone)]
pub struct SweepConfig {
    pub tangle_config: GeneratorConfig,
    #[serde(default)]
    pub run_config: RunConfig,
    pub sweep: SweepParameters,
}

/// The parameter a sweep varies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepKind {
    Lambda,
    Alpha,
    Latency,
}

impl SweepKind {
    pub fn config_path(&self) -> &'static str {
        match self {
            SweepKind::Lambda => "simulator/src/scenarios/config_sweep_lambda.toml",
            SweepKind::Alpha => "simulator/src/scenarios/config_sweep_alpha.toml",
            SweepKind::Latency => "simulator/src/scenarios/config_sweep_latency.toml",
        }
    }

    pub fn parameter_name(&self) -> &'static str {
        match self {
            SweepKind::Lambda => "lambda",
            SweepKind::Alpha => "alpha",
            SweepKind::Latency => "h",
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Error Types and Validation
// ------------------------------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// Common validation logic
pub fn validate_common_fields(
    tangle_config: &GeneratorConfig,
    run_config: &RunConfig,
) -> Result<(), ConfigError> {
    tangle_config
        .validate()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
    if run_config.num_runs == 0 {
        return Err(ConfigError::ValidationError("Number of runs must be positive".into()));
    }
    Ok(())
}

// ------------------------------------------------------------------------------------------------
// Configuration Implementation Methods
// ------------------------------------------------------------------------------------------------

impl Config {
    /// Loads the simple simulation configuration from its default location
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(SIMPLE_CONFIG_PATH)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config_str = fs::read_to_string(path)?;
        Self::from_toml_str(&config_str)
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_common_fields(&self.tangle_config, &self.run_config)
    }
}

impl SweepConfig {
    pub fn load(kind: SweepKind) -> Result<Self, ConfigError> {
        Self::load_from(kind.config_path(), kind)
    }

    pub fn load_from<P: AsRef<Path>>(path: P, kind: SweepKind) -> Result<Self, ConfigError> {
        let config_str = fs::read_to_string(path)?;
        Self::from_toml_str(&config_str, kind)
    }

    pub fn from_toml_str(config_str: &str, kind: SweepKind) -> Result<Self, ConfigError> {
        let config: SweepConfig = toml::from_str(config_str)?;
        config.validate(kind)?;
        Ok(config)
    }

    pub fn validate(&self, kind: SweepKind) -> Result<(), ConfigError> {
        validate_common_fields(&self.tangle_config, &self.run_config)?;
        if self.sweep.num_simulations == 0 {
            return Err(ConfigError::ValidationError("Number of simulations must be positive".into()));
        }
        let step = self.step(kind).ok_or_else(|| {
            ConfigError::ValidationError(format!("Missing {}_step for {} sweep", kind.parameter_name(), kind.parameter_name()))
        })?;
        if !(step.is_finite() && step > 0.0) {
            return Err(ConfigError::ValidationError(format!("{}_step must be positive", kind.parameter_name())));
        }
        // Every point must itself be a valid configuration
        for value in self.parameter_values(kind) {
            self.config_for(kind, value).validate()?;
        }
        Ok(())
    }

    fn step(&self, kind: SweepKind) -> Option<f64> {
        match kind {
            SweepKind::Lambda => self.sweep.lambda_step,
            SweepKind::Alpha => self.sweep.alpha_step,
            SweepKind::Latency => self.sweep.h_step,
        }
    }

    fn base(&self, kind: SweepKind) -> f64 {
        match kind {
            SweepKind::Lambda => self.tangle_config.lambda,
            SweepKind::Alpha => self.tangle_config.alpha,
            SweepKind::Latency => self.tangle_config.h,
        }
    }

    /// `base + i * step` for each simulation of the sweep
    pub fn parameter_values(&self, kind: SweepKind) -> Vec<f64> {
        let base = self.base(kind);
        let step = self.step(kind).unwrap_or(0.0);
        (0..self.sweep.num_simulations)
            .map(|i| base + i as f64 * step)
            .collect()
    }

    /// The simple configuration of one sweep point
    pub fn config_for(&self, kind: SweepKind, value: f64) -> Config {
        let mut tangle_config = self.tangle_config.clone();
        match kind {
            SweepKind::Lambda => tangle_config.lambda = value,
            SweepKind::Alpha => tangle_config.alpha = value,
            SweepKind::Latency => tangle_config.h = value,
        }
        Config {
            tangle_config,
            run_config: self.run_config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tangle::TipSelection;

    const SIMPLE: &str = r#"
        [tangle_config]
        node_count = 50
        lambda = 2.0
        h = 0.5
        alpha = 1.0
        tip_selection = "unweighted_mcmc"

        [run_config]
        num_runs = 3
        seed = 7
    "#;

    #[test]
    fn test_parse_simple_config() {
        let config = Config::from_toml_str(SIMPLE).unwrap();

        assert_eq!(config.tangle_config.node_count, 50);
        assert_eq!(config.tangle_config.lambda, 2.0);
        assert_eq!(config.tangle_config.tip_selection, TipSelection::UnweightedMcmc);
        assert_eq!(config.run_config.num_runs, 3);
        assert_eq!(config.run_config.seed, Some(7));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = Config::from_toml_str("[tangle_config]\nnode_count = 10\n").unwrap();

        assert_eq!(config.tangle_config.lambda, 1.5);
        assert_eq!(config.run_config.num_runs, 1);
        assert_eq!(config.run_config.seed, None);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let bad_lambda = SIMPLE.replace("lambda = 2.0", "lambda = 0.0");
        assert!(matches!(Config::from_toml_str(&bad_lambda), Err(ConfigError::ValidationError(_))));

        let bad_runs = SIMPLE.replace("num_runs = 3", "num_runs = 0");
        assert!(matches!(Config::from_toml_str(&bad_runs), Err(ConfigError::ValidationError(_))));

        let bad_algorithm = SIMPLE.replace("unweighted_mcmc", "metropolis");
        assert!(matches!(Config::from_toml_str(&bad_algorithm), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_sweep_values_start_at_base() {
        let text = format!("{}\n[sweep]\nnum_simulations = 4\nlambda_step = 0.5\n", SIMPLE);
        let sweep = SweepConfig::from_toml_str(&text, SweepKind::Lambda).unwrap();

        assert_eq!(sweep.parameter_values(SweepKind::Lambda), vec![2.0, 2.5, 3.0, 3.5]);
        let point = sweep.config_for(SweepKind::Lambda, 3.0);
        assert_eq!(point.tangle_config.lambda, 3.0);
        assert_eq!(point.tangle_config.h, 0.5);
    }

    #[test]
    fn test_sweep_requires_matching_step() {
        let text = format!("{}\n[sweep]\nnum_simulations = 4\nlambda_step = 0.5\n", SIMPLE);

        assert!(matches!(
            SweepConfig::from_toml_str(&text, SweepKind::Alpha),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        assert!(matches!(
            Config::load_from("does/not/exist.toml"),
            Err(ConfigError::FileReadError(_))
        ));
    }
}
