/*!
 * Core Module
 * Shared types and error definitions
 */

pub mod errors;
pub mod types;
