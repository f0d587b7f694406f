//! Windowed viewer for the particle field.
//!
//! [`Viewer`] is a small builder over a winit application: it opens one
//! window, drives [`ParticleField::tick`] once per frame, and renders the
//! result with [`FieldRenderer`]. Keyboard bindings:
//!
//! - `T` toggles the light/dark theme and persists the choice
//! - `Escape` exits
//!
//! Closing the window (or pressing `Escape`) saves settings and stops the
//! event loop deterministically; there is no self-perpetuating callback left
//! behind.
//!
//! # Usage
//!
//! ```ignore
//! use driftfield::Viewer;
//!
//! fn main() -> Result<(), driftfield::ViewerError> {
//!     Viewer::new()
//!         .with_title("particles")
//!         .with_size(1280, 720)
//!         .run()
//! }
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::ViewerError;
use crate::field::ParticleField;
use crate::gpu::FieldRenderer;
use crate::input::{Input, KeyCode};
use crate::settings::Settings;
use crate::theme::Theme;
use crate::time::FrameClock;

/// Builder for the windowed particle field viewer.
pub struct Viewer {
    title: String,
    size: (u32, u32),
    settings_path: PathBuf,
}

impl Viewer {
    /// Create a viewer with default window size and settings path.
    pub fn new() -> Self {
        Self {
            title: "driftfield".to_string(),
            size: (1280, 720),
            settings_path: PathBuf::from("driftfield.json"),
        }
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Set where settings are persisted.
    pub fn with_settings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = path.into();
        self
    }

    /// Open the window and run until it is closed.
    pub fn run(self) -> Result<(), ViewerError> {
        let settings = match Settings::load(&self.settings_path) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("could not load settings, using defaults: {}", e);
                Settings::default()
            }
        };

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self.title, self.size, settings, self.settings_path);
        event_loop.run_app(&mut app)?;

        match app.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    title: String,
    size: (u32, u32),
    window: Option<Arc<Window>>,
    renderer: Option<FieldRenderer>,
    field: ParticleField,
    input: Input,
    clock: FrameClock,
    theme: Theme,
    settings: Settings,
    settings_path: PathBuf,
    fatal: Option<ViewerError>,
}

impl App {
    fn new(title: String, size: (u32, u32), settings: Settings, settings_path: PathBuf) -> Self {
        let theme = Theme::from_dark_flag(settings.dark_mode);
        Self {
            title,
            size,
            window: None,
            renderer: None,
            field: ParticleField::new(),
            input: Input::new(),
            clock: FrameClock::new(),
            theme,
            settings,
            settings_path,
            fatal: None,
        }
    }

    fn persist_settings(&self) {
        if let Err(e) = self.settings.save(&self.settings_path) {
            log::warn!("could not save settings: {}", e);
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.settings.dark_mode = self.theme.is_dark();
        self.persist_settings();
        log::info!(
            "theme switched to {}",
            if self.theme.is_dark() { "dark" } else { "light" }
        );
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(self.size.0, self.size.1));

        let window = match event_loop.create_window(window_attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fatal = Some(ViewerError::Window(e));
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        let size = window.inner_size();
        self.field.resize(size.width as f32, size.height as f32);
        log::info!(
            "field initialized: {}x{} px, {} particles",
            size.width,
            size.height,
            self.field.len()
        );

        match pollster::block_on(FieldRenderer::new(window)) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(e) => {
                self.fatal = Some(ViewerError::Gpu(e));
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                self.persist_settings();
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size);
                }
                self.field
                    .resize(physical_size.width as f32, physical_size.height as f32);
                log::debug!(
                    "viewport resized to {}x{}, rebuilt {} particles",
                    physical_size.width,
                    physical_size.height,
                    self.field.len()
                );
            }
            WindowEvent::RedrawRequested => {
                if self.input.key_pressed(KeyCode::Escape) {
                    self.persist_settings();
                    event_loop.exit();
                    return;
                }
                if self.input.key_pressed(KeyCode::KeyT) {
                    self.toggle_theme();
                }
                if self.input.pointer_moved() {
                    let pointer = self.input.pointer();
                    self.field.set_pointer(pointer.x, pointer.y);
                }

                if self.clock.update() {
                    log::debug!(
                        "{} particles at {:.0} fps",
                        self.field.len(),
                        self.clock.fps()
                    );
                }

                self.field.tick();

                if let Some(renderer) = &mut self.renderer {
                    match renderer.render(&self.field, self.theme) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            renderer.resize(winit::dpi::PhysicalSize {
                                width: renderer.config.width,
                                height: renderer.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => log::error!("render error: {:?}", e),
                    }
                }

                self.input.begin_frame();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
