//! Strafe Services Layer
//!
//! Everything around the simulation that is not the simulation: settings
//! files, key bindings, input recording/replay, and the shared resource
//! bank with its background accrual ticker.

pub mod input;
pub mod resources;
pub mod settings;

pub use input::{InputScript, KeyBindings};
pub use resources::{AccrualHandle, ResourceBank};
pub use settings::{Settings, SettingsError};
