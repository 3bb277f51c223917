//! Topology construction
//!
//! Builds the obstacle ring, places the actors and wires up attractors and
//! repulsors. Shape is fixed by settings; placement comes from the seeded RNG.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;

use super::actor::Actor;
use super::emitter::{EmitterId, Static};
use super::state::Simulation;
use super::world::World;
use crate::settings::AttractorMode;

/// Rebuild `sim` from its settings and report every entity to `world`
pub fn build<W: World>(sim: &mut Simulation, world: &mut W) {
    sim.reset();
    let mut rng = sim.rng();

    let settings = sim.settings.clone();
    let center = settings.center;
    let radius = settings.ring_radius();
    let ring_size = settings.ring_size;

    // Obstacle ring, reported in ring order
    for i in 0..ring_size {
        let angle = TAU / ring_size as f64 * i as f64;
        let pos = center + DVec2::new(angle.sin(), angle.cos()) * radius;
        let id = sim.next_entity_id();
        let obstacle = Static::new(id, pos);
        sim.statics.push(obstacle);
        world.static_spawned(&obstacle);
    }

    // Actors inside the [0, 2 * center] rectangle
    let bounds = center * 2.0;
    for _ in 0..settings.actor_count {
        let pos = DVec2::new(
            rng.random_range(0.0..=bounds.x),
            rng.random_range(0.0..=bounds.y),
        );
        let heading = rng.random_range(0.0..360.0);
        let id = sim.next_entity_id();
        let mut actor = Actor::new(id, pos, heading);
        for s in 0..ring_size {
            actor.add_repulsor(EmitterId::Static(s));
        }
        sim.actors.push(actor);
    }

    // Attractors and mutual repulsion
    let count = sim.actors.len();
    for i in 0..count {
        let previous = if i == 0 { count - 1 } else { i - 1 };
        let actor = &mut sim.actors[i];
        actor.set_attractor(EmitterId::Actor(previous));
        if settings.attractor_mode == AttractorMode::FixedPoint {
            actor.set_attractor(EmitterId::Anchor);
        }
        for j in (0..count).filter(|&j| j != i) {
            actor.add_repulsor(EmitterId::Actor(j));
        }
    }

    for actor in &sim.actors {
        world.actor_spawned(actor);
    }

    log::info!(
        "Topology built: seed={}, statics={}, actors={}, ring radius={:.1}, mode={}",
        settings.seed,
        sim.statics.len(),
        sim.actors.len(),
        radius,
        settings.attractor_mode.as_str()
    );
}
