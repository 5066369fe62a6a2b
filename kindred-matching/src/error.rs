//! Error types raised while configuring matchmaking components.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised while configuring matchmaking components.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum MatchingError {
    /// The ranking limit was zero.
    #[error("matchmaking limit must be at least one")]
    ZeroLimit,
    /// The minimum score fell outside the score range.
    #[error("minimum score must be a finite value between 0 and 100, got {value}")]
    InvalidMinimumScore {
        /// Value that failed validation.
        value: f32,
    },
    /// The jitter amplitude was unusable.
    #[error("jitter amplitude must be finite and non-negative, got {value}")]
    InvalidJitterAmplitude {
        /// Value that failed validation.
        value: f32,
    },
    /// The cache capacity was zero.
    #[error("score cache capacity must be at least one")]
    ZeroCapacity,
}
