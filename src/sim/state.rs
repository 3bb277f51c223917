//! Simulation state
//!
//! Actors and obstacles live in arenas addressed by [`EmitterId`]. The actor
//! order is the creation order and is also the update order.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::emitter::{Emitter, EmitterId, EmitterLookup, Static};
use super::field::FieldParams;
use super::world::{Simulator, World};
use crate::settings::{Settings, SettingsError};

/// Per-actor view for snapshots
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorSnapshot {
    pub id: u32,
    pub pos: DVec2,
    pub heading: f64,
    pub target_heading: f64,
}

/// Serializable summary of the moving part of the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub seed: u64,
    pub time_ticks: u64,
    pub elapsed: f64,
    pub actors: Vec<ActorSnapshot>,
}

/// The swarm simulation
#[derive(Debug, Clone)]
pub struct Simulation {
    pub(crate) settings: Settings,
    pub(crate) field: FieldParams,
    pub(crate) anchor: Static,
    pub(crate) statics: Vec<Static>,
    pub(crate) actors: Vec<Actor>,
    /// Ticks applied since `set_world`
    pub time_ticks: u64,
    /// Simulated seconds since `set_world`
    pub elapsed: f64,
    next_id: u32,
}

impl Simulation {
    /// Build an empty simulation; rejects settings that fail validation
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self::from_valid(settings))
    }

    /// Simulation with default settings and the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::from_valid(Settings::with_seed(seed))
    }

    fn from_valid(settings: Settings) -> Self {
        let field = settings.field_params();
        let anchor = Static::new(0, settings.anchor);
        Self {
            settings,
            field,
            anchor,
            statics: Vec::new(),
            actors: Vec::new(),
            time_ticks: 0,
            elapsed: 0.0,
            next_id: 1,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.settings.seed
    }

    pub fn anchor(&self) -> &Static {
        &self.anchor
    }

    pub fn statics(&self) -> &[Static] {
        &self.statics
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Fresh RNG for topology construction
    pub(crate) fn rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.settings.seed)
    }

    /// Allocate a new entity ID
    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Drop all entities and counters ahead of a rebuild
    pub(crate) fn reset(&mut self) {
        self.statics.clear();
        self.actors.clear();
        self.time_ticks = 0;
        self.elapsed = 0.0;
        self.next_id = 1;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seed: self.settings.seed,
            time_ticks: self.time_ticks,
            elapsed: self.elapsed,
            actors: self
                .actors
                .iter()
                .map(|a| ActorSnapshot {
                    id: a.id,
                    pos: a.pos,
                    heading: a.heading,
                    target_heading: a.target_heading,
                })
                .collect(),
        }
    }
}

impl EmitterLookup for Simulation {
    #[inline]
    fn position_of(&self, id: EmitterId) -> DVec2 {
        match id {
            EmitterId::Anchor => self.anchor.position(),
            EmitterId::Static(i) => self.statics[i].position(),
            EmitterId::Actor(i) => self.actors[i].position(),
        }
    }
}

impl Simulator for Simulation {
    fn set_world<W: World>(&mut self, world: &mut W) {
        super::topology::build(self, world);
    }

    fn tick(&mut self, dt: f64) {
        super::tick::tick(self, dt);
    }
}
