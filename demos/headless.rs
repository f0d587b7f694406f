//! # Headless field stepping
//!
//! Runs the particle field without a window: resize once, sweep the pointer
//! in a circle, and tick a few hundred frames while printing a summary.
//! Useful for sanity-checking the update loop on machines with no GPU.
//!
//! Run with: `cargo run --example headless`

use driftfield::{ParticleField, REPEL_RADIUS};

fn main() {
    env_logger::init();

    let mut field = ParticleField::new();
    field.resize(1280.0, 720.0);
    println!(
        "field: 1280x720 px, {} particles, repel radius {} px",
        field.len(),
        REPEL_RADIUS
    );

    for frame in 0..600u32 {
        let t = frame as f32 * 0.05;
        field.set_pointer(640.0 + 300.0 * t.cos(), 360.0 + 200.0 * t.sin());
        field.tick();

        if frame % 120 == 0 {
            let near_pointer = field
                .particles()
                .iter()
                .filter(|p| p.position.distance(field.pointer()) < REPEL_RADIUS)
                .count();
            println!(
                "frame {:3}: {} particles within the repulsion radius",
                frame, near_pointer
            );
        }
    }

    println!("done: {} frames, no window required", 600);
}
