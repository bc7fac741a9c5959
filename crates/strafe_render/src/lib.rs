//! Strafe Render Boundary
//!
//! The thin layer between the simulation and whatever actually draws:
//! window configuration, sprite pixel data with opaque handles, a recorded
//! draw list, and sprite animation. GPU pipelines live with the demos that
//! need them; nothing in here issues a graphics call.

pub mod animation;
pub mod draw_list;
pub mod texture;
pub mod window;

pub use winit;

pub use animation::{AnimationError, SpriteAnimation};
pub use draw_list::{DrawCommand, DrawList};
pub use texture::{SpriteLibrary, SpritePixels};
pub use window::{create_event_loop, window_attributes, WindowConfig};
