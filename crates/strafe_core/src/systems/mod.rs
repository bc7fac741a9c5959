//! Frame systems
//!
//! The closed set of passes the driver runs each frame, in fixed order:
//! input, movement, collision, particle emission, particle cleanup, then the
//! render-transform pass on demand. The order is part of the contract:
//! cleanup runs after movement and emission so entities that left the screen
//! this frame never reach the next render pass, and collision runs right
//! after movement so reports reflect this frame's positions.

mod collision;
mod movement;
mod particle_cleanup;
mod particle_emitter;
mod player_input;
mod render_transform;

pub use collision::{CollisionPair, CollisionSystem, COLLISION_RADIUS};
pub use movement::movement_pass;
pub use particle_cleanup::particle_cleanup_pass;
pub use particle_emitter::particle_emitter_pass;
pub use player_input::player_input_pass;
pub use render_transform::{render_pass, DrawTarget};

use strafe_metrics::PassProfiler;

use crate::ecs::World;
use crate::input::ButtonState;
use crate::time::FrameTime;

/// The fixed frame schedule.
///
/// Owns the one stateful system (collision keeps scratch buffers across
/// frames) and the pass profiler. `simulate` advances the world by exactly
/// one frame.
pub struct Schedule {
    collision: CollisionSystem,
    profiler: PassProfiler,
}

impl Schedule {
    pub fn new() -> Self {
        Self {
            collision: CollisionSystem::new(),
            profiler: PassProfiler::new(),
        }
    }

    /// Run one frame's simulation passes and return the collisions found.
    pub fn simulate(
        &mut self,
        world: &mut World,
        frame: &FrameTime,
        input: &ButtonState,
    ) -> &[CollisionPair] {
        self.profiler.time("input", || player_input_pass(world, input));
        self.profiler.time("movement", || movement_pass(world, frame));
        let collision = &mut self.collision;
        self.profiler.time("collision", || collision.run(world));
        self.profiler
            .time("emitter", || particle_emitter_pass(world, frame));
        self.profiler
            .time("cleanup", || particle_cleanup_pass(world));
        self.collision.pairs()
    }

    /// Run the render-transform pass, forwarding draws to `target`.
    pub fn draw(&mut self, world: &World, target: &mut impl DrawTarget) {
        self.profiler.time("render", || render_pass(world, target));
    }

    /// Rolling per-pass timings (label, average); empty without the
    /// `metrics` feature.
    pub fn pass_timings(&self) -> impl Iterator<Item = (&'static str, std::time::Duration)> + '_ {
        self.profiler.iter()
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new()
    }
}
