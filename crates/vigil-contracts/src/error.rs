//! Error types for the VIGIL monitor.
//!
//! The monitor has no I/O data paths and parses no untrusted input, so the
//! taxonomy is deliberately small. Acknowledging an unknown patient id is a
//! silent no-op, not an error.

use thiserror::Error;

/// The unified error type for the VIGIL crates.
#[derive(Debug, Error)]
pub enum VigilError {
    /// A configuration value is missing, malformed, or unreadable.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The tick scheduler's thread or channel failed.
    #[error("scheduler error: {reason}")]
    SchedulerError { reason: String },
}

/// Convenience alias used throughout the VIGIL crates.
pub type VigilResult<T> = Result<T, VigilError>;
