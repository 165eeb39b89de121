#![forbid(unsafe_code)]

//! Ready-to-use spring parameter sets.
//!
//! | Preset | Tension | Friction | Character |
//! |--------|---------|----------|-----------|
//! | [`default_motion`] | 320 | 16 | Quick, slight overshoot |
//! | [`gentle`] | 120 | 20 | Smooth and slow |
//! | [`bouncy`] | 300 | 10 | Visible oscillation |
//! | [`stiff`] | 400 | 38 | Snappy, no visible bounce |
//! | [`critical`] | 170 | 2√170 | Fastest without overshoot |
//! | [`slow`] | 50 | 14 | Background transitions |
//!
//! Every preset keeps the default tolerance and settles a unit jump well
//! within ten seconds of simulated time.

use crate::config::{SpringConfig, critical_friction};

/// The library defaults.
#[must_use]
pub fn default_motion() -> SpringConfig {
    SpringConfig::default()
}

/// Gentle spring: low tension, high friction.
#[must_use]
pub fn gentle() -> SpringConfig {
    SpringConfig::new(120.0, 20.0)
}

/// Bouncy spring: high tension, low friction.
#[must_use]
pub fn bouncy() -> SpringConfig {
    SpringConfig::new(300.0, 10.0)
}

/// Stiff spring: high tension, heavy friction.
#[must_use]
pub fn stiff() -> SpringConfig {
    SpringConfig::new(400.0, 38.0)
}

/// Critically damped spring.
#[must_use]
pub fn critical() -> SpringConfig {
    let tension = 170.0;
    SpringConfig::new(tension, critical_friction(tension))
}

/// Slow spring: very low tension.
#[must_use]
pub fn slow() -> SpringConfig {
    SpringConfig::new(50.0, 14.0)
}

/// All presets with their names.
#[must_use]
pub fn all() -> [(&'static str, SpringConfig); 6] {
    [
        ("default", default_motion()),
        ("gentle", gentle()),
        ("bouncy", bouncy()),
        ("stiff", stiff()),
        ("critical", critical()),
        ("slow", slow()),
    ]
}
