/*!
 * Core Types
 * Common types used across the simulator
 */

/// Discrete simulation time, in abstract units
pub type Time = u32;

/// Priority level (lower value = more urgent); may go negative under aging
pub type Priority = i32;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SimulationError>;
