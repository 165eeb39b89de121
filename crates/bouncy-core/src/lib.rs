#![forbid(unsafe_code)]

//! Core: damped-spring integration over generic, component-wise arithmetic.
//!
//! # Role in Bouncy
//! `bouncy-core` owns the numeric model behind spring-driven transitions.
//! Callers build a [`Spring`](animation::spring::Spring), then pull one state
//! per display frame until the spring settles on its target.
//!
//! # Primary responsibilities
//! - **SpringArithmetic**: the named-operation capability the integrator needs.
//! - **Pair**: generic component-wise combinator for composite values.
//! - **Geometry**: points, sizes, rects, vectors, offsets and insets that
//!   decompose into nested pairs.
//! - **Spring**: fixed-timestep integrator producing a lazy, finite sequence
//!   of states.
//!
//! # How it fits in the system
//! The integrator knows nothing about timers or rendering. A presentation
//! layer calls [`Spring::step`](animation::spring::Spring::step) (or iterates)
//! once per refresh and places whatever it draws at the produced `value`.

pub mod animation;
pub mod arithmetic;
pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod pair;

pub use animation::animator::SpringAnimator;
pub use animation::spring::Spring;
pub use arithmetic::SpringArithmetic;
pub use config::SpringConfig;
pub use error::{Result, SpringError};
pub use pair::{Pair, TwoComponent};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span};
