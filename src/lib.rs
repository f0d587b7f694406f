//! # driftfield
//!
//! A mouse-reactive particle field: particles drift across the viewport,
//! bounce off its edges, and scatter away from the pointer. The simulation
//! runs on the CPU — one deterministic pass per frame over a flat `Vec` —
//! and is drawn as instanced circles with wgpu.
//!
//! ## Quick Start
//!
//! Windowed, with theme persistence and pointer interaction:
//!
//! ```ignore
//! use driftfield::Viewer;
//!
//! fn main() -> Result<(), driftfield::ViewerError> {
//!     Viewer::new().with_title("driftfield").run()
//! }
//! ```
//!
//! Headless, for tests or embedding in another render loop:
//!
//! ```
//! use driftfield::ParticleField;
//!
//! let mut field = ParticleField::new();
//! field.resize(1280.0, 720.0);
//! field.set_pointer(640.0, 360.0);
//! field.tick();
//! assert_eq!(field.len(), 115);
//! ```
//!
//! ## Core Concepts
//!
//! ### The field
//!
//! [`ParticleField`] owns everything the simulation touches: viewport
//! dimensions, the particle collection, and the last pointer sample. The
//! particle budget is `floor(width * height / 8000)`; resizing the viewport
//! discards and respawns the whole collection.
//!
//! ### The update rule
//!
//! Each [`tick`](ParticleField::tick) applies, per particle: pointer
//! repulsion inside a 100 px radius with linear falloff, velocity drift,
//! edge reflection, and a position clamp. Order matters and is fixed.
//!
//! ### Collaborators
//!
//! Theming ([`Theme`]), persisted settings ([`Settings`]), and the webhook
//! chat client ([`ChatClient`]) sit beside the core rather than inside it;
//! the viewer wires them together but the field never reads them.

pub mod chat;
pub mod error;
mod field;
mod gpu;
pub mod input;
mod particle;
mod settings;
mod shader;
pub mod spawn;
pub mod theme;
pub mod time;
mod viewer;

pub use chat::{ChatClient, ChatEntry, WebhookPayload, WebhookTransport};
pub use error::{ChatError, GpuError, SettingsError, ViewerError};
pub use field::{ParticleField, PARTICLE_DENSITY, REPEL_RADIUS, REPEL_STRENGTH};
pub use glam::Vec2;
pub use particle::{Particle, MAX_DRIFT, PARTICLE_RADIUS};
pub use settings::{Settings, DEFAULT_USERNAME};
pub use theme::Theme;
pub use viewer::Viewer;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use driftfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chat::{ChatClient, WebhookTransport};
    pub use crate::field::ParticleField;
    pub use crate::input::{Input, KeyCode};
    pub use crate::particle::Particle;
    pub use crate::settings::Settings;
    pub use crate::theme::Theme;
    pub use crate::time::FrameClock;
    pub use crate::viewer::Viewer;
    pub use crate::Vec2;
}
