//! Simulation tick
//!
//! Advances every actor by the same elapsed time, in creation order. Each
//! actor reads the live positions of the others, so actors earlier in the
//! order have already moved when later ones plan.

use super::state::Simulation;

/// Advance the simulation by `dt` seconds
pub fn tick(sim: &mut Simulation, dt: f64) {
    if !dt.is_finite() || dt <= 0.0 {
        log::debug!("Skipping tick with dt={dt}");
        return;
    }

    let distance = sim.settings.speed() * dt;
    let max_turn = sim.settings.turn_rate() * dt;

    for i in 0..sim.actors.len() {
        let target = sim.actors[i].plan_ahead(&*sim, &sim.field);
        let actor = &mut sim.actors[i];
        if !target.is_finite() && actor.mark_diverged() {
            log::warn!(
                "actor {}: non-finite field at ({:.1}, {:.1}), heading is now undefined",
                actor.id,
                actor.pos.x,
                actor.pos.y
            );
        }
        actor.target_heading = target;
        actor.steer(max_turn);
        actor.advance(distance);
    }

    sim.time_ticks += 1;
    sim.elapsed += dt;

    if log::log_enabled!(log::Level::Trace) {
        for a in &sim.actors {
            log::trace!(
                "tick {} actor {}: pos=({:.1}, {:.1}) heading={:.1} target={:.1}",
                sim.time_ticks,
                a.id,
                a.pos.x,
                a.pos.y,
                a.heading,
                a.target_heading
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::{AttractorMode, Settings};
    use crate::sim::emitter::{Emitter, EmitterId, EmitterLookup};
    use crate::sim::field::SingularityPolicy;
    use crate::sim::world::{NullWorld, Simulator};
    use glam::DVec2;

    fn running(settings: Settings) -> Simulation {
        let mut sim = Simulation::new(settings).expect("valid settings");
        sim.set_world(&mut NullWorld);
        sim
    }

    /// One actor, no obstacles: only the anchor acts on it
    fn lone_actor(pos: DVec2, heading: f64, anchor: DVec2) -> Simulation {
        let settings = Settings {
            ring_size: 0,
            actor_count: 1,
            anchor,
            ..Settings::with_seed(1)
        };
        let mut sim = running(settings);
        sim.actors[0].pos = pos;
        sim.actors[0].heading = heading;
        sim
    }

    #[test]
    fn test_integration_north() {
        // Anchor straight ahead keeps the actor on course
        let mut sim = lone_actor(DVec2::ZERO, 0.0, DVec2::new(0.0, -10_000.0));
        sim.tick(1.0);
        let a = &sim.actors()[0];
        assert!(a.pos.x.abs() < 1e-9);
        assert!((a.pos.y + 180.0).abs() < 1e-9);
        assert!(a.heading.abs() < 1e-9);
    }

    #[test]
    fn test_turn_rate_clamped() {
        // Anchor at heading 170 relative to a north-facing actor
        let target = 170.0f64;
        let dir = DVec2::new(target.to_radians().sin(), -target.to_radians().cos());
        let mut sim = lone_actor(DVec2::ZERO, 0.0, dir * 1000.0);
        sim.tick(0.5);
        let a = &sim.actors()[0];
        assert!((a.target_heading - 170.0).abs() < 1e-9);
        assert!((a.heading - 120.0).abs() < 1e-9, "{}", a.heading);
        // Moved 90 units along the clamped heading
        assert!((a.pos.length() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_counters_advance() {
        let mut sim = running(Settings::with_seed(9));
        sim.tick(0.25);
        sim.tick(0.25);
        assert_eq!(sim.time_ticks, 2);
        assert!((sim.elapsed - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_non_positive_dt_is_noop() {
        let mut sim = running(Settings::with_seed(9));
        let before = sim.snapshot();
        sim.tick(0.0);
        sim.tick(-1.0);
        sim.tick(f64::NAN);
        assert_eq!(sim.snapshot(), before);
    }

    #[test]
    fn test_determinism() {
        let mut a = running(Settings::with_seed(4242));
        let mut b = running(Settings::with_seed(4242));
        for _ in 0..300 {
            a.tick(DRIVER_DT);
            b.tick(DRIVER_DT);
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_later_actors_see_moved_positions() {
        let settings = Settings {
            attractor_mode: AttractorMode::PeerChain,
            ..Settings::with_seed(11)
        };
        let mut sim = running(settings.clone());
        let mut replay = running(settings);
        sim.tick(0.1);

        // Move actor 0 by hand, then plan actor 1 against that state
        let params = replay.field;
        let t0 = replay.actors[0].plan_ahead(&replay, &params);
        replay.actors[0].target_heading = t0;
        replay.actors[0].steer(replay.settings.turn_rate() * 0.1);
        replay.actors[0].advance(replay.settings.speed() * 0.1);
        assert_eq!(
            replay.position_of(EmitterId::Actor(0)),
            sim.actors()[0].position()
        );

        let t1 = replay.actors[1].plan_ahead(&replay, &params);
        assert!((t1 - sim.actors()[1].target_heading).abs() < 1e-9);
    }

    #[test]
    fn test_swarm_stays_finite_when_guarded() {
        let mut sim = running(Settings::with_seed(1));
        // Stack two actors exactly on top of each other
        sim.actors[1].pos = sim.actors[0].pos;
        for _ in 0..120 {
            sim.tick(DRIVER_DT);
        }
        assert!(sim.actors().iter().all(|a| a.pos.is_finite() && a.heading.is_finite()));
    }

    #[test]
    fn test_singularity_propagates_when_requested() {
        let settings = Settings {
            ring_size: 0,
            actor_count: 1,
            singularity: SingularityPolicy::Propagate,
            ..Settings::with_seed(1)
        };
        let mut sim = running(settings);
        sim.actors[0].pos = sim.anchor().position();
        sim.tick(DRIVER_DT);
        assert!(!sim.actors()[0].heading.is_finite());
        assert!(sim.actors()[0].is_diverged());
    }

    #[test]
    fn test_divergence_spreads_and_latches() {
        let settings = Settings {
            ring_size: 0,
            actor_count: 3,
            singularity: SingularityPolicy::Propagate,
            ..Settings::with_seed(2)
        };
        let mut sim = running(settings);
        sim.actors[0].pos = sim.anchor().position();
        sim.tick(DRIVER_DT);
        // NaN distances slip past the notice-radius cutoff
        assert!(sim.actors().iter().all(|a| a.is_diverged()));
        for _ in 0..10 {
            sim.tick(DRIVER_DT);
        }
        assert!(sim.actors().iter().all(|a| a.is_diverged()));
        // Already latched, so no further warning would be logged
        assert!(!sim.actors[0].mark_diverged());
    }
}
