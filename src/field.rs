//! The particle field simulator.
//!
//! [`ParticleField`] owns a flat collection of drifting particles and updates
//! them once per frame. Three things move a particle:
//!
//! - **Repulsion**: inside [`REPEL_RADIUS`] of the pointer, particles are
//!   pushed directly away with linear falloff (full strength at the pointer,
//!   zero at the radius).
//! - **Drift**: every frame the stored velocity is added to the position.
//! - **Reflection**: crossing a viewport edge flips the velocity sign on that
//!   axis, and the position is clamped back inside the viewport.
//!
//! The field has no internal concurrency and no frame scheduler of its own.
//! The host calls [`ParticleField::tick`] once per frame, feeding pointer
//! samples and resize events in between; `tick` is a single deterministic
//! pass over the collection.
//!
//! # Usage
//!
//! ```
//! use driftfield::ParticleField;
//!
//! let mut field = ParticleField::new();
//! field.resize(1280.0, 720.0);
//!
//! // Per frame:
//! field.set_pointer(640.0, 360.0);
//! field.tick();
//! for p in field.particles() {
//!     // hand off to the renderer
//!     let _ = p.position;
//! }
//! ```

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::particle::Particle;
use crate::spawn::spawn_particle;

/// Viewport area, in square pixels, that one particle occupies on average.
/// The particle budget for a `W x H` viewport is `floor(W * H / DENSITY)`.
pub const PARTICLE_DENSITY: f32 = 8000.0;

/// Distance from the pointer, in pixels, within which particles are repelled.
pub const REPEL_RADIUS: f32 = 100.0;

/// Displacement applied at zero distance, in pixels per frame. Scaled down
/// linearly to zero at [`REPEL_RADIUS`].
pub const REPEL_STRENGTH: f32 = 3.0;

/// A pointer-reactive field of drifting particles.
///
/// The collection is rebuilt wholesale on every [`resize`](Self::resize);
/// no particle identity survives a rebuild.
#[derive(Debug)]
pub struct ParticleField {
    width: f32,
    height: f32,
    pointer: Vec2,
    particles: Vec<Particle>,
    rng: SmallRng,
}

impl ParticleField {
    /// Create an empty field with a degenerate `0 x 0` viewport.
    ///
    /// Call [`resize`](Self::resize) with the real viewport before ticking.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Create a field with a fixed RNG seed, for reproducible spawns.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            pointer: Vec2::ZERO,
            particles: Vec::new(),
            rng,
        }
    }

    /// Set the viewport size and rebuild the particle collection.
    ///
    /// The new collection holds `floor(width * height / PARTICLE_DENSITY)`
    /// freshly spawned particles; the old collection is discarded entirely.
    /// A degenerate `0 x 0` viewport yields an empty field.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);

        let count = (self.width * self.height / PARTICLE_DENSITY).floor() as usize;
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles
                .push(spawn_particle(&mut self.rng, self.width, self.height));
        }
    }

    /// Record the latest pointer position, in the same pixel space as
    /// particle positions. Takes effect on the next [`tick`](Self::tick).
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Advance every particle by one frame.
    ///
    /// Per particle, in order: pointer repulsion, drift, edge reflection,
    /// clamp. The clamp after reflection is deliberate; without it a fast
    /// particle can sit outside the viewport for the frame on which it
    /// crossed the edge.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            let to_pointer = self.pointer - p.position;
            let dist = to_pointer.length();
            // dist == 0 would divide to NaN and the particle would never
            // recover; a particle exactly under the pointer just drifts.
            if dist > 0.0 && dist < REPEL_RADIUS {
                let falloff = (REPEL_RADIUS - dist) / REPEL_RADIUS;
                p.position -= to_pointer / dist * falloff * REPEL_STRENGTH;
            }

            p.position += p.velocity;

            if p.position.x < 0.0 || p.position.x > self.width {
                p.velocity.x = -p.velocity.x;
            }
            if p.position.y < 0.0 || p.position.y > self.height {
                p.velocity.y = -p.velocity.y;
            }

            p.position.x = p.position.x.clamp(0.0, self.width);
            p.position.y = p.position.y.clamp(0.0, self.height);
        }
    }

    /// The current particle collection.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles in the field.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field holds no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Current viewport width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Current viewport height in pixels.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Last recorded pointer position.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_in_bounds(field: &ParticleField) {
        for p in field.particles() {
            assert!(
                p.position.x >= 0.0 && p.position.x <= field.width(),
                "x out of bounds: {}",
                p.position.x
            );
            assert!(
                p.position.y >= 0.0 && p.position.y <= field.height(),
                "y out of bounds: {}",
                p.position.y
            );
        }
    }

    #[test]
    fn particle_count_matches_viewport_area() {
        let mut field = ParticleField::with_seed(1);

        field.resize(1280.0, 720.0);
        assert_eq!(field.len(), (1280.0 * 720.0 / 8000.0) as usize);

        field.resize(100.0, 50.0);
        assert_eq!(field.len(), 0); // area below one particle's budget

        field.resize(0.0, 0.0);
        assert!(field.is_empty());
    }

    #[test]
    fn spawned_particles_start_in_bounds() {
        let mut field = ParticleField::with_seed(2);
        field.resize(1920.0, 1080.0);
        assert_in_bounds(&field);
    }

    #[test]
    fn resize_rebuilds_the_collection() {
        let mut field = ParticleField::with_seed(3);
        field.resize(800.0, 600.0);
        let before: Vec<_> = field.particles().to_vec();

        field.resize(800.0, 600.0);
        assert_eq!(field.len(), before.len());
        // Fresh random draw: the odds of 60 particles landing identically
        // are nil, so any difference proves the rebuild.
        assert_ne!(field.particles(), &before[..]);
    }

    #[test]
    fn bounds_hold_over_ten_thousand_ticks() {
        let mut field = ParticleField::with_seed(4);
        field.resize(400.0, 300.0);
        assert!(!field.is_empty());

        for i in 0..10_000 {
            // Sweep the pointer around so repulsion keeps firing.
            let t = i as f32 * 0.01;
            field.set_pointer(200.0 + 150.0 * t.cos(), 150.0 + 100.0 * t.sin());
            field.tick();
        }

        assert_in_bounds(&field);
        for p in field.particles() {
            assert!(p.position.is_finite());
            assert!(p.velocity.is_finite());
        }
    }

    #[test]
    fn repulsion_pushes_away_from_pointer() {
        let mut field = ParticleField::with_seed(5);
        field.resize(400.0, 300.0);
        field.particles[0] = Particle::new(Vec2::new(50.0, 50.0), Vec2::new(0.1, 0.0));
        field.set_pointer(110.0, 50.0); // 60px to the right, inside the radius

        field.tick();

        // Repulsion moves the particle toward smaller x, beyond pure drift:
        // 50 - (100-60)/100 * 3 + 0.1 = 48.9
        let p = field.particles()[0];
        assert!(p.position.x < 50.0 + 0.1);
        assert!((p.position.x - 48.9).abs() < 1e-4);
        assert_eq!(p.position.y, 50.0);
    }

    #[test]
    fn no_repulsion_outside_the_radius() {
        let mut field = ParticleField::with_seed(6);
        field.resize(400.0, 300.0);
        let start = Vec2::new(50.0, 50.0);
        let vel = Vec2::new(0.12, -0.07);
        field.particles[0] = Particle::new(start, vel);
        field.set_pointer(150.0, 50.0); // exactly 100px away

        field.tick();

        // Pure drift, nothing else.
        let p = field.particles()[0];
        assert_eq!(p.position, start + vel);
        assert_eq!(p.velocity, vel);
    }

    #[test]
    fn pointer_on_particle_does_not_produce_nan() {
        let mut field = ParticleField::with_seed(7);
        field.resize(400.0, 300.0);
        let start = Vec2::new(80.0, 90.0);
        let vel = Vec2::new(0.05, 0.05);
        field.particles[0] = Particle::new(start, vel);
        field.set_pointer(start.x, start.y);

        field.tick();

        let p = field.particles()[0];
        assert!(p.position.is_finite());
        assert_eq!(p.position, start + vel);
    }

    #[test]
    fn edge_crossing_reflects_velocity_and_clamps() {
        let mut field = ParticleField::with_seed(8);
        field.resize(400.0, 300.0);
        field.particles[0] = Particle::new(Vec2::new(399.95, 150.0), Vec2::new(1.0, 0.0));
        field.set_pointer(-500.0, -500.0); // far away, no repulsion

        field.tick();

        let p = field.particles()[0];
        assert_eq!(p.velocity.x, -1.0);
        assert_eq!(p.position.x, 400.0); // clamped back onto the edge
    }

    #[test]
    fn pointer_is_recorded_verbatim() {
        let mut field = ParticleField::new();
        field.set_pointer(12.5, -3.0);
        assert_eq!(field.pointer(), Vec2::new(12.5, -3.0));
    }
}
