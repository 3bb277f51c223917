//! Simulation settings
//!
//! Loaded from a JSON file by the headless driver; every field has a default,
//! so partial files are fine.

use std::fs;
use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{FieldParams, SingularityPolicy};

/// Which emitter each actor is attracted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttractorMode {
    /// Chain to the previous actor, then override with the fixed anchor.
    /// Every actor ends up attracted to the anchor.
    #[default]
    FixedPoint,
    /// Keep the chain: actor `i` follows actor `i - 1`, actor 0 follows the last
    PeerChain,
}

impl AttractorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttractorMode::FixedPoint => "fixed_point",
            AttractorMode::PeerChain => "peer_chain",
        }
    }
}

/// Errors from loading or validating settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// All tunables of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for initial actor placement
    pub seed: u64,

    // === Topology ===
    /// Obstacles in the ring
    pub ring_size: usize,
    /// Actors in the swarm
    pub actor_count: usize,
    /// Ring center and spawn rectangle half-extents
    pub center: DVec2,
    /// Fixed attractor used by `AttractorMode::FixedPoint`
    pub anchor: DVec2,
    pub attractor_mode: AttractorMode,

    // === Motion ===
    /// Units per second before `speed_scale`
    pub base_speed: f64,
    /// Degrees per second before `speed_scale`
    pub base_turn_rate: f64,
    pub speed_scale: f64,

    // === Field ===
    pub notice_radius: f64,
    pub repulsion_scale: f64,
    pub attracting_power: f64,
    pub singularity: SingularityPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0,

            ring_size: RING_SIZE,
            actor_count: ACTOR_COUNT,
            center: DVec2::new(CENTER.0, CENTER.1),
            anchor: DVec2::new(ANCHOR.0, ANCHOR.1),
            attractor_mode: AttractorMode::FixedPoint,

            base_speed: BASE_SPEED,
            base_turn_rate: BASE_TURN_RATE,
            speed_scale: SPEED_SCALE,

            notice_radius: NOTICE_RADIUS,
            repulsion_scale: REPULSION_SCALE,
            attracting_power: ATTRACTING_POWER,
            singularity: SingularityPolicy::Guard,
        }
    }
}

impl Settings {
    /// Default settings with the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Actor speed in units per second
    pub fn speed(&self) -> f64 {
        self.base_speed * self.speed_scale
    }

    /// Maximum turn in degrees per second
    pub fn turn_rate(&self) -> f64 {
        self.base_turn_rate * self.speed_scale
    }

    /// Ring radius: the length of the half-extents vector
    pub fn ring_radius(&self) -> f64 {
        self.center.length()
    }

    pub fn field_params(&self) -> FieldParams {
        FieldParams {
            notice_radius: self.notice_radius,
            repulsion_scale: self.repulsion_scale,
            attracting_power: self.attracting_power,
            singularity: self.singularity,
        }
    }

    /// Parse and validate settings from JSON
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> SettingsError {
            SettingsError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if self.actor_count == 0 {
            return Err(invalid("actor_count", "must be at least 1"));
        }
        if !self.center.is_finite() || self.center.x < 0.0 || self.center.y < 0.0 {
            return Err(invalid("center", "must be finite and non-negative"));
        }
        if !self.anchor.is_finite() {
            return Err(invalid("anchor", "must be finite"));
        }
        let positive = [
            ("base_speed", self.base_speed),
            ("base_turn_rate", self.base_turn_rate),
            ("speed_scale", self.speed_scale),
            ("notice_radius", self.notice_radius),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, format!("must be finite and positive, got {value}")));
            }
        }
        let finite = [
            ("repulsion_scale", self.repulsion_scale),
            ("attracting_power", self.attracting_power),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(invalid(field, format!("must be finite, got {value}")));
            }
        }
        Ok(())
    }
}
