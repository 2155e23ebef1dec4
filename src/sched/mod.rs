/*!
 * Scheduling Policies
 * Policy selection and the simulation entry point
 */

use crate::core::errors::ConfigError;
use crate::core::types::{SimResult, Time};
use crate::metrics::{self, SimulationResult};
use crate::process::{self, ProcessRecord, ProcessSpec};
use log::info;
use serde::{Deserialize, Serialize};

mod adaptive;
mod priority_aging;
mod round_robin;
mod srtf;
mod trace;

pub use trace::Trace;

/// Scheduling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Policy {
    /// Preemptive shortest-job-first: at every tick the arrived process
    /// with the least remaining time runs
    ShortestRemainingTime,
    /// FIFO dispatch with per-process time quanta
    RoundRobin,
    /// Non-preemptive priority dispatch with starvation-avoiding aging
    PriorityAging { aging_interval: Time },
    /// Round-robin with a deterministic per-dispatch quantum adaptation rule
    AdaptiveGang,
}

/// Configuration for one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimConfig {
    pub policy: Policy,
    /// Time charged whenever the dispatched process changes; not attributed
    /// to any process in the trace
    pub context_switch: Time,
}

impl SimConfig {
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            context_switch: 0,
        }
    }

    pub fn with_context_switch(mut self, cost: Time) -> Self {
        self.context_switch = cost;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.policy {
            Policy::PriorityAging { aging_interval: 0 } => Err(ConfigError::ZeroAgingInterval),
            _ => Ok(()),
        }
    }
}

/// Run one complete simulation.
///
/// Takes ownership of the descriptors, runs the selected policy to
/// completion, and returns the fully resolved records together with the
/// derived [`SimulationResult`]. Identical inputs always produce an
/// identical trace.
pub fn simulate(
    specs: Vec<ProcessSpec>,
    config: &SimConfig,
) -> SimResult<(Vec<ProcessRecord>, SimulationResult)> {
    config.validate()?;
    process::validate_specs(&specs)?;

    let mut records: Vec<ProcessRecord> = specs.into_iter().map(ProcessRecord::from_spec).collect();

    info!(
        "Simulating {} processes with {:?} (context switch cost: {})",
        records.len(),
        config.policy,
        config.context_switch
    );

    let trace = match config.policy {
        Policy::ShortestRemainingTime => srtf::run(&mut records, config.context_switch),
        Policy::RoundRobin => round_robin::run(&mut records, config.context_switch),
        Policy::PriorityAging { aging_interval } => {
            priority_aging::run(&mut records, config.context_switch, aging_interval)
        }
        Policy::AdaptiveGang => adaptive::run(&mut records, config.context_switch),
    };

    let result = metrics::calculate(&records, &trace)?;

    info!(
        "Simulation complete: {} units granted, avg waiting {:.2}, avg turnaround {:.2}",
        result.execution_order.len(),
        result.average_waiting_time,
        result.average_turnaround_time
    );

    Ok((records, result))
}
