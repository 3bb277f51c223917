//! Force field math
//!
//! Pure functions mapping a field source and a probe position to a force.
//! Both fields diverge as the probe approaches the source; how that is
//! handled is chosen by [`SingularityPolicy`].

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// What to do when a probe sits on top of its source (distance ~ 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingularityPolicy {
    /// Skip sources closer than `SINGULARITY_EPSILON` (zero contribution)
    #[default]
    Guard,
    /// Divide by the raw distance; coincident points yield inf/NaN
    Propagate,
}

/// Tunable field parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldParams {
    pub notice_radius: f64,
    pub repulsion_scale: f64,
    pub attracting_power: f64,
    pub singularity: SingularityPolicy,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            notice_radius: NOTICE_RADIUS,
            repulsion_scale: REPULSION_SCALE,
            attracting_power: ATTRACTING_POWER,
            singularity: SingularityPolicy::Guard,
        }
    }
}

impl FieldParams {
    #[inline]
    fn is_singular(&self, distance: f64) -> bool {
        self.singularity == SingularityPolicy::Guard && distance < SINGULARITY_EPSILON
    }
}

/// Push on `probe` away from `source`
///
/// Zero beyond the notice radius, otherwise
/// `(probe - source) * (notice / d - 1) * scale`, which fades to zero at the
/// notice radius and grows without bound as `d -> 0`.
pub fn repulsion_field(source: DVec2, probe: DVec2, params: &FieldParams) -> DVec2 {
    let offset = probe - source;
    let distance = offset.length();
    if distance > params.notice_radius || params.is_singular(distance) {
        return DVec2::ZERO;
    }
    let scalar = (params.notice_radius / distance - 1.0) * params.repulsion_scale;
    offset * scalar
}

/// Pull on `probe` toward `source`, with magnitude `power / d`
pub fn attraction_field(source: DVec2, probe: DVec2, params: &FieldParams) -> DVec2 {
    let offset = source - probe;
    let distance = offset.length();
    if params.is_singular(distance) {
        return DVec2::ZERO;
    }
    offset * (params.attracting_power / distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> FieldParams {
        FieldParams::default()
    }

    #[test]
    fn test_repulsion_cutoff() {
        let f = repulsion_field(DVec2::ZERO, DVec2::new(150.5, 0.0), &params());
        assert_eq!(f, DVec2::ZERO);

        let f = repulsion_field(DVec2::new(10.0, 10.0), DVec2::new(200.0, -90.0), &params());
        assert_eq!(f, DVec2::ZERO);
    }

    #[test]
    fn test_repulsion_at_half_radius() {
        let f = repulsion_field(DVec2::ZERO, DVec2::new(75.0, 0.0), &params());
        assert!((f.x - 15.0).abs() < 1e-9);
        assert!(f.y.abs() < 1e-12);
    }

    #[test]
    fn test_repulsion_vanishes_at_notice_radius() {
        let f = repulsion_field(DVec2::ZERO, DVec2::new(0.0, 150.0), &params());
        assert!(f.length() < 1e-12);
    }

    #[test]
    fn test_repulsion_points_away_from_source() {
        let source = DVec2::new(100.0, 100.0);
        let probe = DVec2::new(90.0, 120.0);
        let f = repulsion_field(source, probe, &params());
        assert!(f.dot(probe - source) > 0.0);
    }

    #[test]
    fn test_attraction_example() {
        let f = attraction_field(DVec2::new(10.0, 0.0), DVec2::ZERO, &params());
        assert!((f.x - 10.0).abs() < 1e-9);
        assert!(f.y.abs() < 1e-12);
    }

    #[test]
    fn test_attraction_has_no_cutoff() {
        let f = attraction_field(DVec2::new(0.0, 10_000.0), DVec2::ZERO, &params());
        assert!((f.length() - 10.0).abs() < 1e-9);
        assert!(f.y > 0.0);
    }

    #[test]
    fn test_guarded_singularity_is_zero() {
        let p = DVec2::new(3.0, 4.0);
        assert_eq!(repulsion_field(p, p, &params()), DVec2::ZERO);
        assert_eq!(attraction_field(p, p, &params()), DVec2::ZERO);
    }

    #[test]
    fn test_propagated_singularity_is_not_finite() {
        let raw = FieldParams {
            singularity: SingularityPolicy::Propagate,
            ..FieldParams::default()
        };
        let p = DVec2::new(3.0, 4.0);
        assert!(!repulsion_field(p, p, &raw).is_finite());
        assert!(!attraction_field(p, p, &raw).is_finite());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn repulsion_is_zero_beyond_radius(
                sx in -1000.0f64..1000.0,
                sy in -1000.0f64..1000.0,
                angle in 0.0f64..std::f64::consts::TAU,
                extra in 0.001f64..5000.0,
            ) {
                let source = DVec2::new(sx, sy);
                let d = NOTICE_RADIUS + extra;
                let probe = source + DVec2::new(angle.cos(), angle.sin()) * d;
                prop_assume!(probe.distance(source) > NOTICE_RADIUS);
                prop_assert_eq!(repulsion_field(source, probe, &params()), DVec2::ZERO);
            }
        }
    }
}
