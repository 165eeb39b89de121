#![forbid(unsafe_code)]

//! Spring-driven animation.
//!
//! - [`spring`]: the fixed-timestep integrator and its state sequence.
//! - [`presets`]: named parameter sets.
//! - [`animator`]: a frame-driven holder that retargets an in-flight spring.

pub mod animator;
pub mod presets;
pub mod spring;

pub use animator::SpringAnimator;
pub use spring::{FRAMES_PER_SECOND, Spring};
