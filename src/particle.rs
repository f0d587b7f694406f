//! The particle type simulated by [`ParticleField`](crate::ParticleField).
//!
//! Particles are deliberately minimal: a position, a velocity, and nothing
//! else. The render radius is a shared constant rather than per-particle
//! state, and it plays no part in the update math.

use glam::Vec2;

/// Render radius of every particle, in pixels.
///
/// Purely cosmetic: the update loop treats particles as points.
pub const PARTICLE_RADIUS: f32 = 2.0;

/// Maximum drift speed per axis, in pixels per frame.
///
/// Freshly spawned particles get a velocity drawn uniformly from
/// `[-MAX_DRIFT, MAX_DRIFT]` on each axis.
pub const MAX_DRIFT: f32 = 0.15;

/// A single point particle in viewport pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in pixels, kept inside `[0, width] x [0, height]`.
    pub position: Vec2,
    /// Velocity in pixels per frame. Only the sign changes after spawn,
    /// when the particle reflects off a viewport edge.
    pub velocity: Vec2,
}

impl Particle {
    /// Create a particle at `position` with the given drift velocity.
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }
}
