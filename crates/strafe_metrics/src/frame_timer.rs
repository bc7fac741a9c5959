//! Whole-frame timing

use super::ring_buffer::RingBuffer;
use std::time::{Duration, Instant};

/// Measures frame durations over a rolling window.
pub struct FrameTimer {
    frame_start: Instant,
    frame_times: RingBuffer<Duration>,
}

impl FrameTimer {
    pub fn new(window: usize) -> Self {
        Self {
            frame_start: Instant::now(),
            frame_times: RingBuffer::new(window),
        }
    }

    pub fn begin(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Close the frame and return its duration.
    pub fn end(&mut self) -> Duration {
        let elapsed = self.frame_start.elapsed();
        self.frame_times.push(elapsed);
        elapsed
    }

    /// Frames per second over the rolling window.
    pub fn fps(&self) -> f64 {
        let average = self.frame_times.average();
        if average.is_zero() {
            0.0
        } else {
            1.0 / average.as_secs_f64()
        }
    }

    pub fn average_ms(&self) -> f64 {
        self.frame_times.average().as_secs_f64() * 1000.0
    }

    /// (fastest, slowest) frame in the window, in milliseconds.
    pub fn spread_ms(&self) -> (f64, f64) {
        let (min, max) = self.frame_times.min_max();
        (min.as_secs_f64() * 1000.0, max.as_secs_f64() * 1000.0)
    }
}
