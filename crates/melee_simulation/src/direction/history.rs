//! Fixed-size aim history.
//!
//! Ring buffer of `2 × depth` samples. Every tick writes exactly one sample
//! over the oldest one, so the length never changes after construction.

use super::types::MouseMovementSample;

#[derive(Debug, Clone)]
pub struct DirectionHistory {
    samples: Vec<MouseMovementSample>,
    /// Index of the oldest sample (next slot to overwrite).
    head: usize,
}

impl DirectionHistory {
    /// Zero-filled history holding `2 × depth` samples.
    ///
    /// `depth` must be at least 1; `AttackDirectionController` validates it.
    pub fn new(depth: usize) -> Self {
        Self {
            samples: vec![MouseMovementSample::ZERO; depth * 2],
            head: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    /// Most recently pushed sample.
    pub fn latest(&self) -> MouseMovementSample {
        let capacity = self.samples.len();
        self.samples[(self.head + capacity - 1) % capacity]
    }

    /// Oldest sample still held.
    pub fn oldest(&self) -> MouseMovementSample {
        self.samples[self.head]
    }

    /// Writes `sample` as the newest entry and returns the evicted oldest one.
    pub fn push_pop(&mut self, sample: MouseMovementSample) -> MouseMovementSample {
        let evicted = std::mem::replace(&mut self.samples[self.head], sample);
        self.head = (self.head + 1) % self.samples.len();
        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(pitch: f32) -> MouseMovementSample {
        MouseMovementSample {
            pitch,
            ..MouseMovementSample::ZERO
        }
    }

    #[test]
    fn test_history_prefilled_with_zero_samples() {
        let history = DirectionHistory::new(5);

        assert_eq!(history.capacity(), 10);
        assert_eq!(history.latest(), MouseMovementSample::ZERO);
        assert_eq!(history.oldest(), MouseMovementSample::ZERO);
    }

    #[test]
    fn test_push_pop_is_fifo_with_constant_size() {
        let mut history = DirectionHistory::new(2); // 4 slots

        // First 4 pushes evict the zero prefill
        for i in 1..=4 {
            let evicted = history.push_pop(sample(i as f32));
            assert_eq!(evicted, MouseMovementSample::ZERO);
            assert_eq!(history.latest().pitch, i as f32);
        }

        // From here on, samples come back in push order, 4 ticks late
        for i in 5..=12 {
            let evicted = history.push_pop(sample(i as f32));
            assert_eq!(evicted.pitch, (i - 4) as f32);
            assert_eq!(history.capacity(), 4);
        }

        assert_eq!(history.oldest().pitch, 9.0);
        assert_eq!(history.latest().pitch, 12.0);
    }
}
