//! Light/dark theme selection.
//!
//! The theme only affects rendering: particles draw white on a dark
//! background or black on a light one. The renderer reads it once per frame,
//! and the viewer persists the choice through [`Settings`](crate::Settings).

/// The two supported color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Black particles on a white background.
    #[default]
    Light,
    /// White particles on a near-black background.
    Dark,
}

impl Theme {
    /// Map the persisted dark-mode flag onto a theme.
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Whether this is the dark theme.
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Fill color for particles, as linear RGBA.
    pub fn particle_color(self) -> [f32; 4] {
        match self {
            Theme::Light => [0.0, 0.0, 0.0, 1.0],
            Theme::Dark => [1.0, 1.0, 1.0, 1.0],
        }
    }

    /// Clear color for the render pass.
    pub fn clear_color(self) -> wgpu::Color {
        match self {
            Theme::Light => wgpu::Color {
                r: 1.0,
                g: 1.0,
                b: 1.0,
                a: 1.0,
            },
            Theme::Dark => wgpu::Color {
                r: 0.02,
                g: 0.02,
                b: 0.05,
                a: 1.0,
            },
        }
    }
}
