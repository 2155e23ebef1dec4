/*!
 * Process Types
 * Descriptors and mutable simulation state for scheduled processes
 */

use crate::core::errors::ConfigError;
use crate::core::types::{Priority, Time};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Process descriptor, as handed over by the (external) input layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    pub name: String,
    pub arrival_time: Time,
    pub burst_time: Time,
    pub priority: Priority,
    pub quantum: Time,
}

impl ProcessSpec {
    pub fn new(name: impl Into<String>, arrival_time: Time, burst_time: Time) -> Self {
        Self {
            name: name.into(),
            arrival_time,
            burst_time,
            priority: 0,
            quantum: 1,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_quantum(mut self, quantum: Time) -> Self {
        self.quantum = quantum;
        self
    }
}

/// Validate a batch of descriptors before any simulation state is built.
///
/// Rejects empty or duplicate names, zero burst times, and zero quanta, so
/// the simulation loops never have to guard against them.
pub(crate) fn validate_specs(specs: &[ProcessSpec]) -> Result<(), ConfigError> {
    let mut seen = HashSet::with_capacity(specs.len());
    for spec in specs {
        if spec.name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if spec.burst_time == 0 {
            return Err(ConfigError::ZeroBurstTime(spec.name.clone()));
        }
        if spec.quantum == 0 {
            return Err(ConfigError::ZeroQuantum(spec.name.clone()));
        }
        if !seen.insert(spec.name.as_str()) {
            return Err(ConfigError::DuplicateName(spec.name.clone()));
        }
    }
    Ok(())
}

/// Mutable simulation state for one process
///
/// Built from a [`ProcessSpec`] at the start of a run, mutated only by the
/// active scheduling policy, and read-only once `remaining_time` hits zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessRecord {
    pub name: String,
    pub arrival_time: Time,
    pub burst_time: Time,
    pub remaining_time: Time,
    pub priority: Priority,
    pub quantum: Time,
    pub completion_time: Option<Time>,
}

impl ProcessRecord {
    pub fn from_spec(spec: ProcessSpec) -> Self {
        Self {
            name: spec.name,
            arrival_time: spec.arrival_time,
            burst_time: spec.burst_time,
            remaining_time: spec.burst_time,
            priority: spec.priority,
            quantum: spec.quantum,
            completion_time: None,
        }
    }

    /// Whether the process is eligible to run at `now`
    pub fn has_arrived(&self, now: Time) -> bool {
        self.arrival_time <= now
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Grant one unit of CPU time ending at `now`.
    ///
    /// Decrements `remaining_time`; when it reaches zero, stamps
    /// `completion_time = now` and returns `true`.
    pub(crate) fn tick(&mut self, now: Time) -> bool {
        debug_assert!(self.remaining_time > 0, "tick on finished process");
        self.remaining_time -= 1;
        if self.remaining_time == 0 {
            self.completion_time = Some(now);
            true
        } else {
            false
        }
    }
}

impl From<ProcessSpec> for ProcessRecord {
    fn from(spec: ProcessSpec) -> Self {
        Self::from_spec(spec)
    }
}
