//! Swarm - force-field steering for a small population of 2D actors
//!
//! Core modules:
//! - `sim`: Deterministic simulation (field math, actors, topology, tick)
//! - `settings`: Data-driven tuning, loaded from JSON

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::DVec2;

/// Simulation configuration constants (defaults for [`Settings`])
pub mod consts {
    /// Distance beyond which a repulsor has no effect
    pub const NOTICE_RADIUS: f64 = 150.0;
    /// Scale applied to the repulsion falloff
    pub const REPULSION_SCALE: f64 = 0.2;
    /// Attraction strength (force = power / distance)
    pub const ATTRACTING_POWER: f64 = 10.0;

    /// Number of static obstacles in the ring
    pub const RING_SIZE: usize = 100;
    /// Number of actors in the swarm
    pub const ACTOR_COUNT: usize = 6;

    /// Ring center, also the half-extents of the spawn rectangle
    pub const CENTER: (f64, f64) = (500.0, 220.0);
    /// Fixed external attractor
    pub const ANCHOR: (f64, f64) = (500.0, 300.0);

    /// Actor speed before scaling (units/s)
    pub const BASE_SPEED: f64 = 90.0;
    /// Turn rate before scaling (degrees/s)
    pub const BASE_TURN_RATE: f64 = 120.0;
    /// Multiplier applied to both speed and turn rate
    pub const SPEED_SCALE: f64 = 2.0;

    /// Sources closer than this are ignored under the guarded singularity policy
    pub const SINGULARITY_EPSILON: f64 = 1e-9;

    /// Default driver timestep (60 Hz)
    pub const DRIVER_DT: f64 = 1.0 / 60.0;
}

/// Normalize a heading to [0, 360)
#[inline]
pub fn normalize_heading(heading: f64) -> f64 {
    let h = heading.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if h >= 360.0 { 0.0 } else { h }
}

/// Signed shortest rotation from heading `from` to heading `to`, in (-180, 180]
#[inline]
pub fn angle_between(from: f64, to: f64) -> f64 {
    let mut res = to - from + 180.0;
    if !res.is_finite() {
        return res;
    }
    if res > 360.0 || res <= 0.0 {
        res = res.rem_euclid(360.0);
        if res == 0.0 {
            res = 360.0;
        }
    }
    res - 180.0
}

/// Unit direction of travel for a compass heading (0 = north, y grows downward)
#[inline]
pub fn heading_to_direction(heading: f64) -> DVec2 {
    let rad = heading.to_radians();
    DVec2::new(rad.sin(), -rad.cos())
}

/// Compass heading in [0, 360) pointing along `v`
#[inline]
pub fn direction_to_heading(v: DVec2) -> f64 {
    normalize_heading(v.y.atan2(v.x).to_degrees() + 90.0)
}
