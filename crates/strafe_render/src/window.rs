//! Window management
//!
//! Cross-platform window creation via winit

use winit::error::EventLoopError;
use winit::event_loop::EventLoop;
use winit::window::Window;

pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl WindowConfig {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Strafe".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// Create window attributes from config
pub fn window_attributes(config: &WindowConfig) -> winit::window::WindowAttributes {
    Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height))
}

/// Build the event loop (winit 0.30+ API).
///
/// Windows themselves must be created inside `ApplicationHandler::resumed`;
/// demos implement that trait directly and call `window_attributes` there.
pub fn create_event_loop() -> Result<EventLoop<()>, EventLoopError> {
    EventLoop::new()
}
