#![forbid(unsafe_code)]

//! Fixed-timestep damped spring integrator.
//!
//! A [`Spring`] moves `value` toward `target_value` one simulated frame at a
//! time. Each step computes
//!
//! ```text
//! springy = -tension × (value - target)
//! force'  = value + springy × dt²
//! speed'  = max(1 - dt × friction, 0) × (force' - force) / dt
//! value'  = force' + speed' × dt
//! ```
//!
//! where `dt` is fixed at 1/60 s regardless of how often the caller actually
//! steps. `force` is a projected position, kept apart from `value` so that a
//! spring can start with non-zero speed.
//!
//! # Parameters
//!
//! - **tension**: stiffness. Higher pulls toward the target harder.
//! - **friction**: damping. The `max(.., 0)` clamp keeps the damping factor
//!   from going negative when `dt × friction > 1`.
//! - **tolerance**: settling threshold, fixed at construction.
//!
//! # Invariants
//!
//! 1. [`step`](Spring::step) returns the state from *before* the update, so
//!    the first state produced by a fresh spring has exactly the `from`
//!    value it was built with.
//! 2. A spring is settled iff `|value - target|`, `|force - target|` and
//!    `|speed|` are all strictly below `tolerance` (on every component).
//! 3. Once `step` has returned `None` it always returns `None`. Changing the
//!    target afterwards does not revive it; build a new spring instead.
//! 4. `target_value`, `tension` and `friction` may be changed between steps.
//!    The next step uses them with no jump in `value`, `force` or `speed`.
//! 5. `tolerance` and the frame duration never change after construction.
//!
//! # Failure Modes
//!
//! None are reported. Zero or negative tension never converges, negative
//! tolerance never settles, and huge tension overshoots wildly. Those are
//! accepted outcomes of the model. Use
//! [`Spring::try_from_config`] to reject them up front.

use core::iter::FusedIterator;

use crate::arithmetic::SpringArithmetic;
use crate::config::{DEFAULT_FRICTION, DEFAULT_TENSION, DEFAULT_TOLERANCE, SpringConfig};
use crate::error::Result;

#[cfg(feature = "tracing")]
use crate::logging::trace;
#[cfg(not(feature = "tracing"))]
use crate::trace;

/// Simulated frames per second. Each step advances `1 / FRAMES_PER_SECOND`.
pub const FRAMES_PER_SECOND: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Active,
    Settled,
}

/// A damped spring over any [`SpringArithmetic`] value.
///
/// # Example
///
/// ```
/// use bouncy_core::Spring;
///
/// let spring = Spring::new(0.0_f64, 1.0);
/// let states: Vec<_> = spring.collect();
///
/// assert_eq!(states[0].value, 0.0);
/// let last = states.last().unwrap();
/// assert!((last.value - 1.0).abs() < 0.001);
/// ```
///
/// Re-targeting mid-flight:
///
/// ```
/// use bouncy_core::Spring;
///
/// let mut spring = Spring::new(0.0_f64, 1.0);
/// for _ in spring.by_ref().take(10) {}
/// spring.target_value = -1.0;
/// let last = spring.last().unwrap();
/// assert!((last.value + 1.0).abs() < 0.001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring<T> {
    /// Current value; what the caller renders.
    pub value: T,
    /// Projected position used to derive speed.
    pub force: T,
    /// Rate of change, in units per simulated second.
    pub speed: T,
    /// Point of convergence.
    pub target_value: T,
    /// Stiffness.
    pub tension: T,
    /// Damping.
    pub friction: T,
    tolerance: T,
    frame_duration: T,
    phase: Phase,
    steps: u64,
}

impl<T: SpringArithmetic> Spring<T> {
    /// Create a spring from `from` to `to` at rest, with default tension
    /// (320), friction (16) and tolerance (0.0001).
    #[must_use]
    pub fn new(from: T, to: T) -> Self {
        Self::with_parameters(
            from,
            to,
            T::zero(),
            T::from_scalar(DEFAULT_TENSION),
            T::from_scalar(DEFAULT_FRICTION),
            T::from_scalar(DEFAULT_TOLERANCE),
        )
    }

    /// Create a spring with every parameter explicit.
    ///
    /// Nothing is validated.
    #[must_use]
    pub fn with_parameters(
        from: T,
        to: T,
        initial_speed: T,
        tension: T,
        friction: T,
        tolerance: T,
    ) -> Self {
        let frame_duration = T::from_scalar(1.0 / FRAMES_PER_SECOND);
        Self {
            value: from,
            force: from.sub(initial_speed.mul(frame_duration)),
            speed: initial_speed,
            target_value: to,
            tension,
            friction,
            tolerance,
            frame_duration,
            phase: Phase::Active,
            steps: 0,
        }
    }

    /// Create a spring at rest using scalar parameters from `config`,
    /// broadcast to every component.
    #[must_use]
    pub fn from_config(from: T, to: T, config: &SpringConfig) -> Self {
        Self::with_parameters(
            from,
            to,
            T::zero(),
            T::from_scalar(config.tension),
            T::from_scalar(config.friction),
            T::from_scalar(config.tolerance),
        )
    }

    /// Like [`from_config`](Self::from_config), but rejects parameters that
    /// cannot produce a settling spring.
    ///
    /// # Errors
    ///
    /// Returns the [`SpringError`](crate::error::SpringError) reported by
    /// [`SpringConfig::validate`].
    pub fn try_from_config(from: T, to: T, config: &SpringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(from, to, config))
    }

    /// Set the initial speed (builder pattern). Reseeds `force` so the first
    /// step carries the speed.
    #[must_use]
    pub fn with_initial_speed(mut self, speed: T) -> Self {
        self.speed = speed;
        self.force = self.value.sub(speed.mul(self.frame_duration));
        self
    }

    /// Set tension (builder pattern).
    #[must_use]
    pub fn with_tension(mut self, tension: T) -> Self {
        self.tension = tension;
        self
    }

    /// Set friction (builder pattern).
    #[must_use]
    pub fn with_friction(mut self, friction: T) -> Self {
        self.friction = friction;
        self
    }

    /// Set tolerance (builder pattern).
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Settling threshold.
    #[inline]
    #[must_use]
    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// Simulated time advanced per step.
    #[inline]
    #[must_use]
    pub fn frame_duration(&self) -> T {
        self.frame_duration
    }

    /// Number of states produced so far.
    #[inline]
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Whether value, force and speed are all within tolerance of rest.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.value.abs_diff(self.target_value).less_than(self.tolerance)
            && self.force.abs_diff(self.target_value).less_than(self.tolerance)
            && self.speed.abs().less_than(self.tolerance)
    }

    /// Whether [`step`](Self::step) has finished for good.
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.phase == Phase::Settled
    }

    /// Advance one frame and return the state from before the update.
    ///
    /// Returns `None` once the spring is settled. A spring that is already
    /// settled when built still produces its initial state once, so every
    /// sequence starts with the `from` value.
    pub fn step(&mut self) -> Option<Self> {
        if self.phase == Phase::Settled {
            return None;
        }

        let previous = *self;
        if self.is_settled() {
            self.phase = Phase::Settled;
            trace!(steps = self.steps, value = ?self.value, "spring settled");
            if self.steps > 0 {
                return None;
            }
            self.steps = 1;
            return Some(previous);
        }

        let dt = self.frame_duration;
        let springy = T::zero().sub(self.tension.mul(self.value.sub(self.target_value)));
        let force = self.value.add(springy.mul(dt).mul(dt));
        let damping = T::one().sub(dt.mul(self.friction)).max(T::zero());
        let speed = damping.mul(force.sub(self.force)).div(dt);

        self.force = force;
        self.speed = speed;
        self.value = force.add(speed.mul(dt));
        self.steps += 1;

        Some(previous)
    }
}

impl<T: SpringArithmetic> Iterator for Spring<T> {
    type Item = Spring<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}

impl<T: SpringArithmetic> FusedIterator for Spring<T> {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn run(spring: &mut Spring<f64>, frames: usize) {
        for _ in 0..frames {
            spring.step();
        }
    }

    #[test]
    fn first_state_is_initial_value() {
        let mut spring = Spring::new(3.5_f64, 10.0);
        let first = spring.step().unwrap();
        assert_eq!(first.value, 3.5);
        assert_eq!(first.speed, 0.0);
        assert!(spring.value > 3.5);
    }

    #[test]
    fn defaults_applied() {
        let spring = Spring::new(0.0_f64, 1.0);
        assert_eq!(spring.tension, 320.0);
        assert_eq!(spring.friction, 16.0);
        assert_eq!(spring.tolerance(), 0.0001);
        assert_eq!(spring.frame_duration(), 1.0 / 60.0);
    }

    #[test]
    fn first_update_matches_formula() {
        let mut spring = Spring::new(0.0_f64, 1.0);
        spring.step();
        let dt = 1.0 / 60.0;
        let force = 0.0 + 320.0 * dt * dt;
        let speed = (1.0 - dt * 16.0) * force / dt;
        assert_eq!(spring.force, force);
        assert_eq!(spring.speed, speed);
        assert_eq!(spring.value, force + speed * dt);
    }

    #[test]
    fn equal_endpoints_produce_single_state() {
        let mut spring = Spring::new(5.0_f64, 5.0);
        assert!(spring.is_settled());
        let only = spring.step().unwrap();
        assert_eq!(only.value, 5.0);
        assert!(spring.step().is_none());
        assert!(spring.is_exhausted());
    }

    #[test]
    fn settles_within_a_few_hundred_steps() {
        let spring = Spring::new(0.0_f64, 1.0);
        let count = spring.count();
        assert!(count > 10 && count < 400, "count: {count}");
    }

    #[test]
    fn settled_spring_is_near_target() {
        let mut spring = Spring::new(0.0_f64, 1.0);
        while spring.step().is_some() {}
        assert!(spring.is_settled());
        assert!((spring.value - 1.0).abs() < 0.0001);
    }

    #[test]
    fn exhausted_spring_stays_exhausted_after_retarget() {
        let mut spring = Spring::new(0.0_f64, 1.0);
        while spring.step().is_some() {}
        spring.target_value = 2.0;
        assert!(!spring.is_settled());
        assert!(spring.step().is_none());
    }

    #[test]
    fn exhausted_step_does_not_mutate() {
        let mut spring = Spring::new(0.0_f64, 1.0);
        while spring.step().is_some() {}
        let before = spring;
        assert!(spring.step().is_none());
        assert_eq!(spring, before);
    }

    #[test]
    fn initial_speed_seeds_force() {
        let spring = Spring::new(0.0_f64, 0.0).with_initial_speed(60.0);
        assert_eq!(spring.speed, 60.0);
        assert!((spring.force - -1.0).abs() < 1e-12);
        assert!(!spring.is_settled());
    }

    #[test]
    fn initial_speed_moves_away_from_target_first() {
        let mut spring = Spring::new(0.0_f64, 0.0).with_initial_speed(100.0);
        spring.step();
        assert!(spring.value > 0.0, "value: {}", spring.value);
        let count = spring.count();
        assert!(count < 600, "count: {count}");
    }

    #[test]
    fn speed_alone_prevents_settling() {
        let mut spring = Spring::new(1.0_f64, 1.0);
        spring.speed = 50.0;
        assert!(!spring.is_settled());
    }

    #[test]
    fn force_alone_prevents_settling() {
        let mut spring = Spring::new(1.0_f64, 1.0);
        spring.force = 1.5;
        assert!(!spring.is_settled());
    }

    #[test]
    fn tolerance_boundary_is_strict() {
        let spring = Spring::new(1.0_f64, 1.0).with_tolerance(0.0);
        assert!(!spring.is_settled());
    }

    #[test]
    fn high_friction_clamps_damping() {
        // dt * friction > 1, so the damping factor clamps to zero.
        let mut spring = Spring::new(0.0_f64, 1.0).with_friction(120.0);
        spring.step();
        assert_eq!(spring.speed, 0.0);
        assert_eq!(spring.value, spring.force);
    }

    #[test]
    fn zero_friction_oscillates() {
        let mut spring = Spring::new(0.0_f64, 1.0).with_friction(0.0);
        let mut above = false;
        let mut crossed_back = false;
        for state in spring.by_ref().take(300) {
            if state.value > 1.0 {
                above = true;
            }
            if above && state.value < 1.0 {
                crossed_back = true;
                break;
            }
        }
        assert!(crossed_back, "zero-friction spring should oscillate");
        assert!(!spring.is_exhausted());
    }

    #[test]
    fn retune_takes_effect_next_step() {
        let mut a = Spring::new(0.0_f64, 1.0);
        let mut b = a;
        run(&mut a, 5);
        run(&mut b, 5);
        b.tension = 1000.0;
        a.step();
        b.step();
        assert!(b.value > a.value);
    }

    #[test]
    fn retarget_keeps_state_continuous() {
        let mut spring = Spring::new(0.0_f64, 1.0);
        run(&mut spring, 10);
        let value = spring.value;
        let speed = spring.speed;
        spring.target_value = -1.0;
        let next = spring.step().unwrap();
        assert_eq!(next.value, value);
        assert_eq!(next.speed, speed);
        let last = spring.last().unwrap();
        assert!((last.value + 1.0).abs() < 0.001);
    }

    #[test]
    fn negative_tension_never_settles() {
        let spring = Spring::new(0.0_f64, 1.0).with_tension(-10.0);
        assert_eq!(spring.take(1000).count(), 1000);
    }

    #[test]
    fn reverse_direction() {
        let last = Spring::new(1.0_f64, 0.0).last().unwrap();
        assert!(last.value.abs() < 0.001);
    }

    #[test]
    fn f32_spring_settles() {
        let spring = Spring::new(0.0_f32, 100.0).with_tolerance(0.01);
        let last = spring.last().unwrap();
        assert!((last.value - 100.0).abs() < 0.1, "value: {}", last.value);
    }

    #[test]
    fn point_spring_settles_on_both_axes() {
        let target = Point::new(10.0, -20.0);
        let last = Spring::new(Point::ZERO, target).last().unwrap();
        assert!(last.value.distance(&target) < 0.001);
    }

    #[test]
    fn from_config_broadcasts() {
        let config = SpringConfig::new(100.0, 12.0).with_tolerance(0.5);
        let spring = Spring::from_config(Point::ZERO, Point::new(1.0, 1.0), &config);
        assert_eq!(spring.tension, Point::new(100.0, 100.0));
        assert_eq!(spring.friction, Point::new(12.0, 12.0));
        assert_eq!(spring.tolerance(), Point::new(0.5, 0.5));
    }

    #[test]
    fn try_from_config_rejects_zero_tension() {
        let config = SpringConfig::default().with_tension(0.0);
        assert!(Spring::try_from_config(0.0_f64, 1.0, &config).is_err());
        assert!(Spring::try_from_config(0.0_f64, 1.0, &SpringConfig::default()).is_ok());
    }

    #[test]
    fn steps_counts_produced_states() {
        let mut spring = Spring::new(0.0_f64, 1.0);
        run(&mut spring, 3);
        assert_eq!(spring.steps(), 3);
    }

    #[test]
    fn deterministic_across_runs() {
        let run = || {
            Spring::new(0.0_f64, 1.0)
                .map(|state| state.value)
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn clone_independence() {
        let mut spring = Spring::new(0.0_f64, 1.0);
        run(&mut spring, 5);
        let before = spring.value;
        let mut copy = spring;
        run(&mut copy, 5);
        assert!((copy.value - before).abs() > 0.01);
        assert_eq!(spring.value, before);
    }

    #[test]
    fn debug_format() {
        let dbg = format!("{:?}", Spring::new(0.0_f64, 1.0));
        assert!(dbg.contains("Spring"));
        assert!(dbg.contains("target_value"));
        assert!(dbg.contains("speed"));
    }
}
