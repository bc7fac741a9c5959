//! Strafe Engine Core
//!
//! Contains the simulation heart of the engine:
//! - Entity Component System (mask-table world)
//! - The fixed frame schedule and its system passes
//! - Frame clock and logical input snapshots

pub mod ecs;
pub mod input;
pub mod math;
pub mod systems;
pub mod time;

pub use glam;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
