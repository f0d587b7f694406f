//! Input tracking over raw window events.
//!
//! The viewer only needs two things from the host's event stream: the latest
//! pointer position in surface pixels (fed to the field every frame) and
//! edge-detected key presses for the theme toggle and exit. Both are tracked
//! here so the event handler stays a thin dispatch.

use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::PhysicalKey;

pub use winit::keyboard::KeyCode;

/// Pointer and keyboard state assembled from window events.
#[derive(Debug, Default)]
pub struct Input {
    keys_held: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
    pointer: Vec2,
    pointer_moved: bool,
}

impl Input {
    /// Create an input tracker with the pointer at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a key went down since the last [`begin_frame`](Self::begin_frame).
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if a key is currently held down.
    pub fn key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Latest pointer position in surface pixels.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Whether the pointer moved since the last frame.
    pub fn pointer_moved(&self) -> bool {
        self.pointer_moved
    }

    /// Clear per-frame state. Call once per frame, after consuming it.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.pointer_moved = false;
    }

    /// Fold one window event into the tracked state.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => {
                            // Held keys repeat; only the first edge counts.
                            if !self.keys_held.contains(&key) {
                                self.keys_pressed.insert(key);
                            }
                            self.keys_held.insert(key);
                        }
                        ElementState::Released => {
                            self.keys_held.remove(&key);
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer = Vec2::new(position.x as f32, position.y as f32);
                self.pointer_moved = true;
            }
            _ => {}
        }
    }
}
