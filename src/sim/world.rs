//! Boundary between the simulation and whatever presents it
//!
//! The simulation reports each entity once, at creation, through [`World`].
//! A driver then advances it through [`Simulator::tick`].

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::emitter::{Emitter, Static};

/// Receives spawn notifications. Must not block.
pub trait World {
    fn actor_spawned(&mut self, actor: &Actor);
    fn static_spawned(&mut self, obstacle: &Static);
}

/// Driver-facing simulation contract
pub trait Simulator {
    /// Build the topology and report every entity to `world`
    fn set_world<W: World>(&mut self, world: &mut W);
    /// Advance by `dt` seconds
    fn tick(&mut self, dt: f64);
}

/// A single spawn notification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpawnEvent {
    Actor { id: u32, pos: DVec2, heading: f64 },
    Static { id: u32, pos: DVec2 },
}

/// World that records spawn notifications in arrival order
#[derive(Debug, Clone, Default)]
pub struct SpawnRecorder {
    pub events: Vec<SpawnEvent>,
}

impl SpawnRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actor_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SpawnEvent::Actor { .. }))
            .count()
    }

    pub fn static_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SpawnEvent::Static { .. }))
            .count()
    }
}

impl World for SpawnRecorder {
    fn actor_spawned(&mut self, actor: &Actor) {
        self.events.push(SpawnEvent::Actor {
            id: actor.id,
            pos: actor.position(),
            heading: actor.heading,
        });
    }

    fn static_spawned(&mut self, obstacle: &Static) {
        self.events.push(SpawnEvent::Static {
            id: obstacle.id,
            pos: obstacle.position(),
        });
    }
}

/// World that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NullWorld;

impl World for NullWorld {
    fn actor_spawned(&mut self, _actor: &Actor) {}
    fn static_spawned(&mut self, _obstacle: &Static) {}
}
