//! Strafe Metrics - Frame and pass timing utilities
//!
//! Instrumentation for the frame loop that vanishes entirely in production
//! builds via feature flags.
//!
//! # Feature Flags
//!
//! - `metrics` - Enable metrics collection (default: disabled)
//!
//! # Usage
//!
//! ```ignore
//! use strafe_metrics::{FrameTimer, PassProfiler};
//!
//! let mut timer = FrameTimer::new(120); // Rolling window of 120 frames
//! let mut profiler = PassProfiler::new();
//!
//! timer.begin();
//! profiler.time("movement", || run_movement());
//! timer.end();
//! println!("FPS: {:.1}", timer.fps());
//! ```
//!
//! Without the `metrics` feature every type below is replaced by a no-op
//! stub with the same signatures, so call sites never need `cfg` guards.

#[cfg(feature = "metrics")]
mod frame_timer;
#[cfg(feature = "metrics")]
mod pass_profiler;
#[cfg(feature = "metrics")]
mod ring_buffer;

#[cfg(feature = "metrics")]
pub use frame_timer::FrameTimer;
#[cfg(feature = "metrics")]
pub use pass_profiler::PassProfiler;
#[cfg(feature = "metrics")]
pub use ring_buffer::RingBuffer;

// ============================================================================
// Macros for conditional compilation
// ============================================================================

/// Execute code only when metrics are enabled
#[macro_export]
macro_rules! metrics {
    ($($tt:tt)*) => {
        #[cfg(feature = "metrics")]
        {
            $($tt)*
        }
    };
}

// ============================================================================
// No-op stubs when metrics disabled
// ============================================================================

#[cfg(not(feature = "metrics"))]
pub struct FrameTimer;

#[cfg(not(feature = "metrics"))]
impl FrameTimer {
    pub fn new(_window: usize) -> Self {
        Self
    }
    pub fn begin(&mut self) {}
    pub fn end(&mut self) -> std::time::Duration {
        std::time::Duration::ZERO
    }
    pub fn fps(&self) -> f64 {
        0.0
    }
    pub fn average_ms(&self) -> f64 {
        0.0
    }
    pub fn spread_ms(&self) -> (f64, f64) {
        (0.0, 0.0)
    }
}

#[cfg(not(feature = "metrics"))]
pub struct RingBuffer<T>(std::marker::PhantomData<T>);

#[cfg(not(feature = "metrics"))]
impl<T> RingBuffer<T> {
    pub fn new(_capacity: usize) -> Self {
        Self(std::marker::PhantomData)
    }
    pub fn push(&mut self, _sample: T) {}
    pub fn len(&self) -> usize {
        0
    }
    pub fn is_empty(&self) -> bool {
        true
    }
}

#[cfg(not(feature = "metrics"))]
pub struct PassProfiler;

#[cfg(not(feature = "metrics"))]
impl PassProfiler {
    pub fn new() -> Self {
        Self
    }
    pub fn time<R>(&mut self, _label: &'static str, f: impl FnOnce() -> R) -> R {
        f()
    }
    pub fn record(&mut self, _label: &'static str, _elapsed: std::time::Duration) {}
    pub fn average(&self, _label: &'static str) -> std::time::Duration {
        std::time::Duration::ZERO
    }
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, std::time::Duration)> + '_ {
        std::iter::empty()
    }
    pub fn reset(&mut self) {}
}

#[cfg(not(feature = "metrics"))]
impl Default for PassProfiler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn stubs_or_impls_compile() {
        let mut timer = super::FrameTimer::new(4);
        timer.begin();
        let _ = timer.end();
        let mut profiler = super::PassProfiler::new();
        let value = profiler.time("noop", || 7);
        assert_eq!(value, 7);
    }
}
