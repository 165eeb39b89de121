#![forbid(unsafe_code)]

//! Spring parameters as plain, serializable configuration.
//!
//! [`SpringConfig`] holds scalar tension, friction and tolerance. Springs over
//! composite values broadcast each scalar to every component. Nothing here
//! is checked unless the caller asks for it with [`SpringConfig::validate`].

use crate::error::{Result, SpringError};

/// Default spring stiffness.
pub const DEFAULT_TENSION: f64 = 320.0;

/// Default spring damping.
pub const DEFAULT_FRICTION: f64 = 16.0;

/// Default settling threshold.
pub const DEFAULT_TOLERANCE: f64 = 0.0001;

/// Tension, friction and tolerance for a spring.
///
/// With the `serde` feature this can be loaded from host configuration;
/// missing fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpringConfig {
    /// Stiffness. Higher values pull toward the target harder.
    pub tension: f64,
    /// Damping. Higher values reduce overshoot.
    pub friction: f64,
    /// Threshold below which the spring counts as settled.
    pub tolerance: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            tension: DEFAULT_TENSION,
            friction: DEFAULT_FRICTION,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl SpringConfig {
    /// Create a config with explicit tension and friction and the default
    /// tolerance.
    #[must_use]
    pub const fn new(tension: f64, friction: f64) -> Self {
        Self {
            tension,
            friction,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Set tension (builder pattern).
    #[must_use]
    pub const fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    /// Set friction (builder pattern).
    #[must_use]
    pub const fn with_friction(mut self, friction: f64) -> Self {
        self.friction = friction;
        self
    }

    /// Set tolerance (builder pattern).
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Damping ratio `friction / (2·√tension)`.
    ///
    /// Below 1.0 the spring overshoots; at 1.0 it is critically damped.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.friction / critical_friction(self.tension)
    }

    /// Check that the parameters describe a spring that can settle.
    ///
    /// # Errors
    ///
    /// Returns the first offending parameter: non-finite values, tension
    /// `<= 0`, friction `< 0`, or tolerance `<= 0`.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("tension", self.tension),
            ("friction", self.friction),
            ("tolerance", self.tolerance),
        ] {
            if !value.is_finite() {
                return Err(SpringError::NonFinite { parameter, value });
            }
        }
        if self.tension <= 0.0 {
            return Err(SpringError::NonPositiveTension(self.tension));
        }
        if self.friction < 0.0 {
            return Err(SpringError::NegativeFriction(self.friction));
        }
        if self.tolerance <= 0.0 {
            return Err(SpringError::NonPositiveTolerance(self.tolerance));
        }
        Ok(())
    }
}

/// Friction at which a spring of the given tension is critically damped.
#[must_use]
pub fn critical_friction(tension: f64) -> f64 {
    2.0 * tension.sqrt()
}
