//! Particle spawning.
//!
//! Spawning happens only during a full field rebuild (startup and every
//! viewport resize), never incrementally. Each particle gets a uniformly
//! random position inside the viewport and a uniformly random drift velocity
//! in `[-MAX_DRIFT, MAX_DRIFT]` per axis.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::particle::{Particle, MAX_DRIFT};

/// Spawn a single particle somewhere inside a `width` x `height` viewport.
pub fn spawn_particle(rng: &mut SmallRng, width: f32, height: f32) -> Particle {
    Particle::new(
        Vec2::new(rng.gen_range(0.0..=width), rng.gen_range(0.0..=height)),
        Vec2::new(
            rng.gen_range(-MAX_DRIFT..=MAX_DRIFT),
            rng.gen_range(-MAX_DRIFT..=MAX_DRIFT),
        ),
    )
}
