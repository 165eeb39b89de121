#![forbid(unsafe_code)]

//! Frame-driven spring ownership with in-place retargeting.
//!
//! [`SpringAnimator`] is what a view layer keeps per animated property. It
//! remembers the last rendered value and, while moving, the spring carrying
//! it. Each display refresh calls [`frame`](SpringAnimator::frame). When the
//! destination changes mid-flight, [`animate_to`](SpringAnimator::animate_to)
//! redirects the existing spring instead of starting over, so motion stays
//! continuous.

use crate::animation::spring::Spring;
use crate::arithmetic::SpringArithmetic;
use crate::config::SpringConfig;

#[cfg(feature = "tracing")]
use crate::logging::debug;
#[cfg(not(feature = "tracing"))]
use crate::debug;

/// Owns at most one in-flight [`Spring`] and the value it last produced.
#[derive(Debug, Clone)]
pub struct SpringAnimator<T> {
    value: T,
    spring: Option<Spring<T>>,
    tension: T,
    friction: T,
    tolerance: T,
}

impl<T: SpringArithmetic> SpringAnimator<T> {
    /// Create an idle animator resting at `at` with default parameters.
    #[must_use]
    pub fn new(at: T) -> Self {
        Self::from_config(at, &SpringConfig::default())
    }

    /// Create an idle animator using scalar parameters from `config`.
    #[must_use]
    pub fn from_config(at: T, config: &SpringConfig) -> Self {
        Self {
            value: at,
            spring: None,
            tension: T::from_scalar(config.tension),
            friction: T::from_scalar(config.friction),
            tolerance: T::from_scalar(config.tolerance),
        }
    }

    /// Set tension (builder pattern).
    #[must_use]
    pub fn with_tension(mut self, tension: T) -> Self {
        self.set_tension(tension);
        self
    }

    /// Set friction (builder pattern).
    #[must_use]
    pub fn with_friction(mut self, friction: T) -> Self {
        self.set_friction(friction);
        self
    }

    /// Last value produced (or the resting value when idle).
    #[inline]
    #[must_use]
    pub fn value(&self) -> T {
        self.value
    }

    /// Destination of the in-flight spring, if any.
    #[inline]
    #[must_use]
    pub fn target(&self) -> Option<T> {
        self.spring.as_ref().map(|spring| spring.target_value)
    }

    /// The in-flight spring, if any.
    #[inline]
    #[must_use]
    pub fn spring(&self) -> Option<&Spring<T>> {
        self.spring.as_ref()
    }

    /// Whether a spring is in flight.
    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.spring.is_some()
    }

    /// Current tension applied to new and in-flight springs.
    #[inline]
    #[must_use]
    pub fn tension(&self) -> T {
        self.tension
    }

    /// Current friction applied to new and in-flight springs.
    #[inline]
    #[must_use]
    pub fn friction(&self) -> T {
        self.friction
    }

    /// Head toward `target`.
    ///
    /// An in-flight spring keeps its value and speed and simply changes
    /// destination. An idle animator starts a new spring from its current
    /// value.
    pub fn animate_to(&mut self, target: T) {
        match self.spring.as_mut() {
            Some(spring) => {
                debug!(to = ?target, value = ?spring.value, "spring retargeted");
                spring.target_value = target;
            }
            None => {
                debug!(from = ?self.value, to = ?target, "spring started");
                self.spring = Some(Spring::with_parameters(
                    self.value,
                    target,
                    T::zero(),
                    self.tension,
                    self.friction,
                    self.tolerance,
                ));
            }
        }
    }

    /// Change tension for the in-flight spring and any later ones.
    pub fn set_tension(&mut self, tension: T) {
        self.tension = tension;
        if let Some(spring) = self.spring.as_mut() {
            spring.tension = tension;
        }
    }

    /// Change friction for the in-flight spring and any later ones.
    pub fn set_friction(&mut self, friction: T) {
        self.friction = friction;
        if let Some(spring) = self.spring.as_mut() {
            spring.friction = friction;
        }
    }

    /// Advance one display frame.
    ///
    /// Returns the value to render, or `None` when idle. On the frame the
    /// spring settles, the animator adopts the spring's resting value, drops
    /// the spring and returns `None`.
    pub fn frame(&mut self) -> Option<T> {
        let spring = self.spring.as_mut()?;
        match spring.step() {
            Some(state) => {
                self.value = state.value;
                Some(state.value)
            }
            None => {
                debug!(steps = spring.steps(), value = ?spring.value, "spring finished");
                self.value = spring.value;
                self.spring = None;
                None
            }
        }
    }

    /// Stop where the last frame left off.
    pub fn stop(&mut self) {
        self.spring = None;
    }

    /// Stop and jump straight to `value`.
    pub fn snap_to(&mut self, value: T) {
        self.spring = None;
        self.value = value;
    }
}
