//! Solver configuration: an algorithm config file and an environment file.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use oil_delivery_core::models::Instance;
use oil_delivery_core::solver::Builder;
use oil_delivery_core::solver::strategies::{AllocationStrategy, ConstructiveAllocation, RandomAllocation};
use oil_delivery_core::utils::{Environment, GenericError, GenericResult, InfoLogger};
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// An algorithm configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Amount of jobs given to one worker. Default is 1.
    pub threads_per_worker: Option<usize>,
    /// Specifies allocation strategy.
    pub strategy: Option<StrategyType>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// An allocation strategy type.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum StrategyType {
    /// Random allocation, see `RandomAllocation`.
    #[serde(rename(deserialize = "random"))]
    Random,

    /// Feasibility preserving construction, see `ConstructiveAllocation`.
    #[serde(rename(deserialize = "constructive"))]
    #[serde(rename_all = "camelCase")]
    Constructive {
        /// Max spread of station ids served by one vehicle. Default is 4.
        cluster_width: Option<usize>,
    },
}

/// A telemetry configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TelemetryConfig {
    /// Enables logging to stdout.
    pub logging: Option<bool>,
}

/// An environment file: paths and runtime settings. Command line arguments override its values.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    /// Path to the instance file.
    pub instance_path: Option<String>,
    /// Path to the solution file.
    pub solution_path: Option<String>,
    /// Random seed.
    pub rand_seed: Option<u64>,
    /// Time budget in seconds.
    pub timeout: Option<f64>,
    /// Max amount of attempts per worker.
    pub max_iterations: Option<usize>,
    /// Amount of parallel jobs. Non-positive values mean all cpus.
    pub jobs: Option<i64>,
    /// Run identifier written to the audit record.
    pub run_id: Option<String>,
    /// Path to the algorithm config file.
    pub config_path: Option<String>,
    /// Path to the audit log file.
    pub log_path: Option<String>,
}

impl EnvironmentConfig {
    /// Returns a config which takes values from `other` where they are set.
    pub fn merge(self, other: EnvironmentConfig) -> Self {
        Self {
            instance_path: other.instance_path.or(self.instance_path),
            solution_path: other.solution_path.or(self.solution_path),
            rand_seed: other.rand_seed.or(self.rand_seed),
            timeout: other.timeout.or(self.timeout),
            max_iterations: other.max_iterations.or(self.max_iterations),
            jobs: other.jobs.or(self.jobs),
            run_id: other.run_id.or(self.run_id),
            config_path: other.config_path.or(self.config_path),
            log_path: other.log_path.or(self.log_path),
        }
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Reads environment config from reader.
pub fn read_environment_config<R: Read>(reader: BufReader<R>) -> GenericResult<EnvironmentConfig> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize environment: '{err}'").into())
}

/// Creates an allocation strategy from config. Default is constructive allocation.
pub fn create_strategy(config: &Config) -> Arc<dyn AllocationStrategy + Send + Sync> {
    match &config.strategy {
        Some(StrategyType::Random) => Arc::new(RandomAllocation),
        Some(StrategyType::Constructive { cluster_width: Some(cluster_width) }) => {
            Arc::new(ConstructiveAllocation::new(*cluster_width))
        }
        Some(StrategyType::Constructive { cluster_width: None }) | None => Arc::new(ConstructiveAllocation::default()),
    }
}

/// Returns amount of workers: jobs divided by threads per worker, at least one.
pub fn get_workers(config: &Config, jobs: usize) -> GenericResult<usize> {
    match config.threads_per_worker {
        Some(0) => Err(GenericError::from("threads per worker must be positive")),
        Some(threads) => Ok((jobs / threads).max(1)),
        None => Ok(jobs.max(1)),
    }
}

/// Creates a logger which prints to stdout when enabled, a no-op one otherwise.
pub fn create_logger(is_enabled: bool) -> InfoLogger {
    if is_enabled { Arc::new(|msg: &str| println!("{msg}")) } else { Arc::new(|_: &str| {}) }
}

/// Returns true if config enables logging.
pub fn is_logging_enabled(config: &Config) -> bool {
    config.telemetry.as_ref().and_then(|telemetry| telemetry.logging).unwrap_or(false)
}

/// Creates a solver `Builder` from config.
pub fn create_builder_from_config(
    instance: Arc<Instance>,
    environment: Arc<Environment>,
    config: &Config,
) -> GenericResult<Builder> {
    let workers = get_workers(config, environment.jobs)?;

    Ok(Builder::new(instance, environment).with_workers(Some(workers)).with_strategy(create_strategy(config)))
}
