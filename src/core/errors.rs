/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors, detected before the simulation loop ever starts
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Process {0} has zero burst time")]
    #[diagnostic(
        code(config::zero_burst_time),
        help("Burst time must be a positive number of time units.")
    )]
    ZeroBurstTime(String),

    #[error("Process {0} has zero quantum")]
    #[diagnostic(
        code(config::zero_quantum),
        help("Quantum must be a positive number of time units.")
    )]
    ZeroQuantum(String),

    #[error("Process name is empty")]
    #[diagnostic(
        code(config::empty_name),
        help("Every process needs a unique, non-empty name.")
    )]
    EmptyName,

    #[error("Duplicate process name: {0}")]
    #[diagnostic(
        code(config::duplicate_name),
        help("Process names identify trace entries and result rows; make them unique.")
    )]
    DuplicateName(String),

    #[error("Aging interval must be positive")]
    #[diagnostic(
        code(config::zero_aging_interval),
        help("A zero aging interval would decrement priorities every tick, forever.")
    )]
    ZeroAgingInterval,
}

/// Metrics errors, raised when deriving results from finished records
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum MetricsError {
    #[error("Process {0} never completed")]
    #[diagnostic(
        code(metrics::incomplete_simulation),
        help("Every policy must run all processes to completion; this indicates a policy bug.")
    )]
    IncompleteSimulation(String),

    #[error("Cannot compute averages over zero processes")]
    #[diagnostic(
        code(metrics::empty_process_list),
        help("Provide at least one process descriptor.")
    )]
    EmptyProcessList,
}

/// Top-level simulator error
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Metrics(#[from] MetricsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::ZeroBurstTime("P1".into());
        assert_eq!(err.to_string(), "Process P1 has zero burst time");

        let err = MetricsError::EmptyProcessList;
        assert_eq!(
            err.to_string(),
            "Cannot compute averages over zero processes"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: SimulationError = ConfigError::DuplicateName("P2".into()).into();
        assert_eq!(
            err,
            SimulationError::Config(ConfigError::DuplicateName("P2".into()))
        );
    }
}
