//! Sprite animation
//!
//! Cycles a fixed list of sprite frames at a constant period. Advancing
//! steps at most one frame per call; time beyond the period is dropped, the
//! same no-catch-up rule the particle emitter follows.

use std::time::Duration;

use thiserror::Error;

use strafe_core::ecs::SpriteHandle;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnimationError {
    #[error("animation needs at least one frame")]
    NoFrames,
}

/// A looping flip-book over sprite handles.
pub struct SpriteAnimation {
    frames: Vec<SpriteHandle>,
    period: Duration,
    current: usize,
    since_step: Duration,
}

impl SpriteAnimation {
    /// Build an animation stepping through `frames` every `period`.
    pub fn new(frames: Vec<SpriteHandle>, period: Duration) -> Result<Self, AnimationError> {
        if frames.is_empty() {
            return Err(AnimationError::NoFrames);
        }
        Ok(Self {
            frames,
            period,
            current: 0,
            since_step: Duration::ZERO,
        })
    }

    /// Frame the animation is currently showing.
    pub fn current(&self) -> SpriteHandle {
        self.frames[self.current]
    }

    /// Account for `delta` elapsed time and return the frame to show.
    ///
    /// Steps forward at most once per call and wraps at the end of the
    /// frame list.
    pub fn advance(&mut self, delta: Duration) -> SpriteHandle {
        self.since_step += delta;
        if self.since_step >= self.period {
            self.current = (self.current + 1) % self.frames.len();
            self.since_step = Duration::ZERO;
        }
        self.current()
    }
}
