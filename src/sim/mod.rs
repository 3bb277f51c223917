//! Deterministic simulation module
//!
//! All swarm logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - Stable iteration order (actor creation order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod emitter;
pub mod field;
pub mod state;
pub mod tick;
pub mod topology;
pub mod world;

pub use actor::Actor;
pub use emitter::{Emitter, EmitterId, EmitterLookup, Static};
pub use field::{FieldParams, SingularityPolicy, attraction_field, repulsion_field};
pub use state::{ActorSnapshot, Simulation, Snapshot};
pub use tick::tick;
pub use world::{NullWorld, SpawnEvent, SpawnRecorder, Simulator, World};
