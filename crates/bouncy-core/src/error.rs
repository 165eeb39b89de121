//! Errors for opt-in parameter validation.
//!
//! The integrator itself never fails. These errors only come out of
//! [`SpringConfig::validate`](crate::config::SpringConfig::validate) and the
//! constructors built on it.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpringError>;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SpringError {
    #[error("{parameter} must be finite, got {value}")]
    NonFinite { parameter: &'static str, value: f64 },

    #[error("tension must be positive, got {0}")]
    NonPositiveTension(f64),

    #[error("friction must not be negative, got {0}")]
    NegativeFriction(f64),

    #[error("tolerance must be positive, got {0}")]
    NonPositiveTolerance(f64),
}

impl SpringError {
    /// Name of the offending parameter.
    #[must_use]
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::NonFinite { parameter, .. } => parameter,
            Self::NonPositiveTension(_) => "tension",
            Self::NegativeFriction(_) => "friction",
            Self::NonPositiveTolerance(_) => "tolerance",
        }
    }
}
