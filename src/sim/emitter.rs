//! Field sources
//!
//! Anything with a position can act as an attractor or repulsor. Actors refer
//! to each other through [`EmitterId`] handles into the simulation's arenas.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A field source with a queryable position
pub trait Emitter {
    fn position(&self) -> DVec2;
}

/// An immovable obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Static {
    pub id: u32,
    pos: DVec2,
}

impl Static {
    pub fn new(id: u32, pos: DVec2) -> Self {
        Self { id, pos }
    }
}

impl Emitter for Static {
    #[inline]
    fn position(&self) -> DVec2 {
        self.pos
    }
}

/// Stable handle to a field source owned by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmitterId {
    /// The fixed external attractor
    Anchor,
    /// Index into the obstacle ring
    Static(usize),
    /// Index into the actor population
    Actor(usize),
}

/// Resolves emitter handles to their current positions
pub trait EmitterLookup {
    fn position_of(&self, id: EmitterId) -> DVec2;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centroid<E: Emitter>(emitters: &[E]) -> DVec2 {
        emitters.iter().map(Emitter::position).sum::<DVec2>() / emitters.len() as f64
    }

    #[test]
    fn test_static_reports_position() {
        let s = Static::new(1, DVec2::new(4.0, -2.0));
        assert_eq!(s.position(), DVec2::new(4.0, -2.0));
    }

    #[test]
    fn test_generic_over_emitters() {
        let ring = [
            Static::new(1, DVec2::new(1.0, 0.0)),
            Static::new(2, DVec2::new(-1.0, 0.0)),
            Static::new(3, DVec2::new(0.0, 2.0)),
            Static::new(4, DVec2::new(0.0, -2.0)),
        ];
        assert!(centroid(&ring).length() < 1e-12);
    }
}
