//! Per-pass timing for a fixed frame schedule

use super::ring_buffer::RingBuffer;
use std::time::{Duration, Instant};

const SAMPLE_WINDOW: usize = 120;

/// Accumulates rolling timings per pass, keyed by static label.
///
/// Labels are stored in first-seen order, which for a fixed schedule is the
/// schedule order. A linear scan over a handful of passes beats hashing.
pub struct PassProfiler {
    passes: Vec<(&'static str, RingBuffer<Duration>)>,
}

impl PassProfiler {
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    /// Run `f`, recording its duration under `label`.
    pub fn time<R>(&mut self, label: &'static str, f: impl FnOnce() -> R) -> R {
        let started = Instant::now();
        let result = f();
        self.record(label, started.elapsed());
        result
    }

    pub fn record(&mut self, label: &'static str, elapsed: Duration) {
        match self.passes.iter_mut().find(|(name, _)| *name == label) {
            Some((_, samples)) => samples.push(elapsed),
            None => {
                let mut samples = RingBuffer::new(SAMPLE_WINDOW);
                samples.push(elapsed);
                self.passes.push((label, samples));
            }
        }
    }

    /// Rolling average for `label`; zero if never recorded.
    pub fn average(&self, label: &'static str) -> Duration {
        self.passes
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, samples)| samples.average())
            .unwrap_or(Duration::ZERO)
    }

    /// (label, rolling average) per pass, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Duration)> + '_ {
        self.passes
            .iter()
            .map(|(name, samples)| (*name, samples.average()))
    }

    pub fn reset(&mut self) {
        self.passes.clear();
    }
}

impl Default for PassProfiler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_returns_closure_value() {
        let mut profiler = PassProfiler::new();
        let doubled = profiler.time("double", || 21 * 2);
        assert_eq!(doubled, 42);
        assert!(profiler.average("double") >= Duration::ZERO);
    }

    #[test]
    fn labels_keep_first_seen_order() {
        let mut profiler = PassProfiler::new();
        profiler.record("input", Duration::from_micros(10));
        profiler.record("movement", Duration::from_micros(20));
        profiler.record("input", Duration::from_micros(30));

        let labels: Vec<&str> = profiler.iter().map(|(name, _)| name).collect();
        assert_eq!(labels, ["input", "movement"]);
        assert_eq!(profiler.average("input"), Duration::from_micros(20));
    }

    #[test]
    fn unknown_label_averages_zero() {
        let profiler = PassProfiler::new();
        assert_eq!(profiler.average("render"), Duration::ZERO);
    }
}
