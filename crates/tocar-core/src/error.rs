//! Error types for gesture configuration.

use thiserror::Error;

/// Rejected gesture configuration, surfaced at bind time.
///
/// Geometric edge cases at runtime (insufficient contacts, coincident
/// points, out-of-tolerance taps) are not errors; they suppress recognition
/// for that call. Only malformed configuration is reportable.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A recognizer was asked to run with a zero minimum contact count.
    #[error("minimum input count must be at least 1, got {0}")]
    InvalidMinInputs(usize),

    /// A tap tolerance that is negative or not finite.
    #[error("tap tolerance must be a finite, non-negative pixel radius, got {0}")]
    InvalidTolerance(f32),
}
