//! Actor steering and integration

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::emitter::{Emitter, EmitterId, EmitterLookup};
use super::field::{FieldParams, attraction_field, repulsion_field};
use crate::{angle_between, direction_to_heading, heading_to_direction};

/// A movable field source that steers toward the heading its field suggests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: u32,
    pub pos: DVec2,
    /// Current facing, degrees (0 = north)
    pub heading: f64,
    /// Heading suggested by the last field evaluation, degrees in [0, 360)
    pub target_heading: f64,
    attractor: EmitterId,
    repulsors: Vec<EmitterId>,
    /// Set once the field at this actor has gone non-finite
    #[serde(skip)]
    diverged: bool,
}

impl Actor {
    pub fn new(id: u32, pos: DVec2, heading: f64) -> Self {
        Self {
            id,
            pos,
            heading,
            target_heading: heading,
            attractor: EmitterId::Anchor,
            repulsors: Vec::new(),
            diverged: false,
        }
    }

    pub fn attractor(&self) -> EmitterId {
        self.attractor
    }

    pub fn repulsors(&self) -> &[EmitterId] {
        &self.repulsors
    }

    pub fn is_diverged(&self) -> bool {
        self.diverged
    }

    /// Latch divergence; returns true only the first time
    pub(crate) fn mark_diverged(&mut self) -> bool {
        !std::mem::replace(&mut self.diverged, true)
    }

    /// Replace the attractor
    pub fn set_attractor(&mut self, id: EmitterId) {
        self.attractor = id;
    }

    pub fn add_repulsor(&mut self, id: EmitterId) {
        self.repulsors.push(id);
    }

    /// Superposed field at the actor's position
    pub fn net_force<L: EmitterLookup>(&self, lookup: &L, params: &FieldParams) -> DVec2 {
        let pull = attraction_field(lookup.position_of(self.attractor), self.pos, params);
        self.repulsors.iter().fold(pull, |force, &r| {
            force + repulsion_field(lookup.position_of(r), self.pos, params)
        })
    }

    /// Heading the current field suggests, in [0, 360)
    pub fn plan_ahead<L: EmitterLookup>(&self, lookup: &L, params: &FieldParams) -> f64 {
        direction_to_heading(self.net_force(lookup, params))
    }

    /// Turn toward `target_heading` by at most `max_turn` degrees
    ///
    /// Returns the applied turn.
    pub fn steer(&mut self, max_turn: f64) -> f64 {
        let delta = angle_between(self.heading, self.target_heading).clamp(-max_turn, max_turn);
        self.heading += delta;
        delta
    }

    /// Move `distance` units along the current heading
    pub fn advance(&mut self, distance: f64) {
        self.pos += heading_to_direction(self.heading) * distance;
    }
}

impl Emitter for Actor {
    #[inline]
    fn position(&self) -> DVec2 {
        self.pos
    }
}
