#![forbid(unsafe_code)]

//! Bouncy public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the spring integrator, the arithmetic abstraction and the
//! geometric value types from `bouncy-core`, and offers a lightweight
//! prelude for day-to-day usage.
//!
//! ```
//! use bouncy::prelude::*;
//!
//! let mut animator = SpringAnimator::new(Point::ZERO);
//! animator.animate_to(Point::new(120.0, 80.0));
//! while let Some(at) = animator.frame() {
//!     // place the view at `at`
//!     let _ = at;
//! }
//! assert!(animator.value().distance(&Point::new(120.0, 80.0)) < 0.001);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use bouncy_core::animation::presets;
pub use bouncy_core::animation::{FRAMES_PER_SECOND, Spring, SpringAnimator};
pub use bouncy_core::arithmetic::SpringArithmetic;
pub use bouncy_core::config::{
    DEFAULT_FRICTION, DEFAULT_TENSION, DEFAULT_TOLERANCE, SpringConfig, critical_friction,
};
pub use bouncy_core::error::{Result, SpringError};
pub use bouncy_core::geometry::{Insets, Offset, Point, Rect, Size, Vector};
pub use bouncy_core::pair::{Pair, TwoComponent};

#[cfg(feature = "tracing-json")]
pub use bouncy_core::logging::init_json_subscriber;

// --- Prelude --------------------------------------------------------------

/// Common imports for everyday use.
pub mod prelude {
    pub use crate::{
        Insets, Offset, Pair, Point, Rect, Size, Spring, SpringAnimator, SpringArithmetic,
        SpringConfig, TwoComponent, Vector, presets,
    };
}
