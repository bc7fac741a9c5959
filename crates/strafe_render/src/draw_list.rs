//! Recorded draw list
//!
//! A `DrawTarget` that records instead of drawing. Headless drivers and
//! tests inspect the commands; windowed demos drain them into a GPU pass.

use glam::Mat3;

use strafe_core::ecs::SpriteHandle;
use strafe_core::systems::DrawTarget;

/// One recorded draw: the transform and sprite the render pass produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub transform: Mat3,
    pub sprite: SpriteHandle,
}

/// Draw commands in submission order for one frame.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Hand the frame's commands to a consumer, leaving the list empty.
    pub fn drain(&mut self) -> impl Iterator<Item = DrawCommand> + '_ {
        self.commands.drain(..)
    }
}

impl DrawTarget for DrawList {
    fn draw(&mut self, transform: Mat3, sprite: SpriteHandle) {
        self.commands.push(DrawCommand { transform, sprite });
    }
}
