use std::collections::VecDeque;

use crate::error::StripError;
use crate::signal::SampleBatch;
use crate::types::Sample;

/// Upper bound on the samples reserved up front; larger windows grow on push.
const MAX_PREALLOC: usize = 4096;

/// Rolling buffer holding the most recent period of samples.
pub struct SampleWindow {
    samples: VecDeque<Sample>,
    sampling_rate: f64,
    capacity: usize,
}
impl SampleWindow {
    pub fn new(sampling_rate: f64, capacity: usize) -> Result<Self, StripError> {
        if !(sampling_rate.is_finite() && sampling_rate > 0.0) {
            return Err(StripError::InvalidConfiguration(format!(
                "window sampling rate must be greater than zero, got {sampling_rate}"
            )));
        }
        Ok(Self {
            samples: VecDeque::with_capacity(capacity.min(MAX_PREALLOC)),
            sampling_rate,
            capacity,
        })
    }
    pub fn sampling_rate(&self) -> f64 {
        self.sampling_rate
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
    pub fn push(&mut self, sample: Sample) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }
    pub fn push_batch(&mut self, batch: &SampleBatch) -> Result<(), StripError> {
        batch.validate()?;
        if batch.sampling_rate != self.sampling_rate {
            return Err(StripError::SampleRateMismatch {
                expected: self.sampling_rate,
                actual: batch.sampling_rate,
            });
        }
        for &sample in &batch.samples {
            self.push(sample);
        }
        Ok(())
    }
    /// Oldest-first copy of the window, ready for `Strip::draw_curve`.
    pub fn snapshot(&self) -> Vec<Sample> {
        self.samples.iter().copied().collect()
    }
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
