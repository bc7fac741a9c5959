//! Fixed-window sample buffer for rolling statistics

use std::time::Duration;

/// Keeps the most recent `capacity` samples, overwriting the oldest.
pub struct RingBuffer<T> {
    samples: Vec<T>,
    capacity: usize,
    cursor: usize,
}

impl<T: Copy + Default> RingBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: Vec::with_capacity(capacity),
            capacity,
            cursor: 0,
        }
    }

    pub fn push(&mut self, sample: T) {
        if self.samples.len() < self.capacity {
            self.samples.push(sample);
        } else {
            self.samples[self.cursor] = sample;
        }
        self.cursor = (self.cursor + 1) % self.capacity;
    }

    /// Most recently pushed sample, if any.
    pub fn latest(&self) -> Option<T> {
        if self.samples.is_empty() {
            return None;
        }
        let last = (self.cursor + self.samples.len() - 1) % self.samples.len();
        Some(self.samples[last])
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

// Duration is the only sample type the frame loop records.
impl RingBuffer<Duration> {
    pub fn average(&self) -> Duration {
        if self.samples.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.samples.iter().sum();
        total / self.samples.len() as u32
    }

    pub fn min_max(&self) -> (Duration, Duration) {
        let mut min = Duration::MAX;
        let mut max = Duration::ZERO;
        for &sample in &self.samples {
            min = min.min(sample);
            max = max.max(sample);
        }
        if self.samples.is_empty() {
            (Duration::ZERO, Duration::ZERO)
        } else {
            (min, max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolling_average_overwrites_oldest() {
        let mut buffer = RingBuffer::new(3);
        buffer.push(Duration::from_millis(6));
        buffer.push(Duration::from_millis(12));
        assert_eq!(buffer.average(), Duration::from_millis(9));

        buffer.push(Duration::from_millis(18));
        buffer.push(Duration::from_millis(24)); // evicts the 6ms sample
        assert_eq!(buffer.average(), Duration::from_millis(18));
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn latest_tracks_wraparound() {
        let mut buffer = RingBuffer::new(2);
        assert_eq!(buffer.latest(), None);
        buffer.push(Duration::from_millis(1));
        buffer.push(Duration::from_millis(2));
        buffer.push(Duration::from_millis(3));
        assert_eq!(buffer.latest(), Some(Duration::from_millis(3)));
    }

    #[test]
    fn min_max_spread() {
        let mut buffer = RingBuffer::new(4);
        buffer.push(Duration::from_millis(5));
        buffer.push(Duration::from_millis(20));
        buffer.push(Duration::from_millis(10));
        assert_eq!(
            buffer.min_max(),
            (Duration::from_millis(5), Duration::from_millis(20))
        );
    }
}
