/*!
 * CPU Scheduling Simulator
 * Deterministic simulation of scheduling policies with per-process metrics
 */

pub mod core;
pub mod metrics;
pub mod process;
pub mod sched;

// Re-exports
pub use crate::core::errors::{ConfigError, MetricsError, SimulationError};
pub use crate::core::types::{Priority, SimResult, Time};
pub use crate::metrics::SimulationResult;
pub use crate::process::{ProcessRecord, ProcessSpec};
pub use crate::sched::{simulate, Policy, SimConfig};
