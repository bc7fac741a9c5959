//! Frame time
//!
//! The driver reads the clock once per frame and threads the resulting
//! `FrameTime` into every system pass, so no system measures time on its own
//! and all passes agree on "now".

use std::time::{Duration, Instant};

/// Timestamp and delta for a single frame.
///
/// `now` is time since the clock started, `delta` is time since the previous
/// frame. Both come from the same monotonic reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTime {
    pub now: Duration,
    pub delta: Duration,
}

impl FrameTime {
    pub const fn new(now: Duration, delta: Duration) -> Self {
        Self { now, delta }
    }

    /// Delta in seconds, the form the integration passes consume.
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

/// Monotonic clock producing one `FrameTime` per tick.
pub struct FrameClock {
    started: Instant,
    previous: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            previous: Duration::ZERO,
        }
    }

    /// Read the clock and close out the current frame.
    pub fn tick(&mut self) -> FrameTime {
        let now = self.started.elapsed();
        let delta = now - self.previous;
        self.previous = now;
        FrameTime::new(now, delta)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
