use std::collections::VecDeque;
use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::StripError;
use crate::types::Sample;

/// Contiguous run of samples from one fixed-rate stream.
#[derive(Clone, Debug)]
pub struct SampleBatch {
    pub sampling_rate: f64,
    pub samples: Vec<Sample>,
}
impl SampleBatch {
    pub fn validate(&self) -> Result<(), StripError> {
        if !(self.sampling_rate.is_finite() && self.sampling_rate > 0.0) {
            return Err(StripError::InvalidConfiguration(format!(
                "batch sampling rate must be greater than zero, got {}",
                self.sampling_rate
            )));
        }
        Ok(())
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
/// Something that can yield sample batches on demand.
pub trait SampleSource {
    fn next_batch(&mut self) -> Result<Option<SampleBatch>, StripError>;
}
/// In-memory source useful for tests and deterministic playback.
pub struct ManualSource {
    queue: VecDeque<SampleBatch>,
}
impl ManualSource {
    pub fn new(batches: impl IntoIterator<Item = SampleBatch>) -> Self {
        Self {
            queue: batches.into_iter().collect(),
        }
    }
}
impl SampleSource for ManualSource {
    fn next_batch(&mut self) -> Result<Option<SampleBatch>, StripError> {
        Ok(self.queue.pop_front())
    }
}

/// One gaussian bump of the PQRST complex: (phase centre, width, height).
type Wave = (f64, f64, f64);
const PQRST: [Wave; 5] = [
    (0.20, 0.025, 0.12),  // P
    (0.36, 0.010, -0.15), // Q
    (0.40, 0.012, 1.00),  // R
    (0.44, 0.010, -0.25), // S
    (0.65, 0.040, 0.30),  // T
];

/// Endless PQRST-shaped signal in pixel units above the bottom edge.
pub struct SyntheticEcgSource {
    sampling_rate: f64,
    heart_rate_bpm: f64,
    baseline: f64,
    gain: f64,
    noise: f64,
    dropout: f64,
    batch_len: usize,
    next_index: u64,
    rng: StdRng,
}
impl SyntheticEcgSource {
    pub fn new(sampling_rate: f64, baseline: f64, gain: f64) -> Self {
        Self {
            sampling_rate,
            heart_rate_bpm: 72.0,
            baseline,
            gain,
            noise: 0.0,
            dropout: 0.0,
            batch_len: (sampling_rate / 25.0).ceil().max(1.0) as usize,
            next_index: 0,
            rng: StdRng::seed_from_u64(0x0ec6),
        }
    }
    pub fn with_heart_rate(mut self, bpm: f64) -> Self {
        self.set_heart_rate(bpm);
        self
    }
    /// Uniform noise of +/- `amplitude` pixels.
    pub fn with_noise(mut self, amplitude: f64) -> Self {
        self.set_noise(amplitude);
        self
    }
    /// Probability that any given sample is reported as a gap.
    pub fn with_dropout(mut self, probability: f64) -> Self {
        self.set_dropout(probability);
        self
    }
    pub fn with_batch_len(mut self, len: usize) -> Self {
        self.batch_len = len.max(1);
        self
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
    pub fn set_heart_rate(&mut self, bpm: f64) {
        self.heart_rate_bpm = bpm.max(1.0);
    }
    pub fn set_noise(&mut self, amplitude: f64) {
        self.noise = amplitude.abs();
    }
    pub fn set_dropout(&mut self, probability: f64) {
        self.dropout = probability.clamp(0.0, 1.0);
    }
    pub fn heart_rate(&self) -> f64 {
        self.heart_rate_bpm
    }
    pub fn sampling_rate(&self) -> f64 {
        self.sampling_rate
    }
    /// Generates the next `count` samples.
    pub fn take(&mut self, count: usize) -> Vec<Sample> {
        (0..count).map(|_| self.next_sample()).collect()
    }
    fn next_sample(&mut self) -> Sample {
        let index = self.next_index;
        self.next_index += 1;
        if self.dropout > 0.0 && self.rng.gen_bool(self.dropout) {
            return Sample::gap(index);
        }
        let t = index as f64 / self.sampling_rate;
        let beat = self.heart_rate_bpm / 60.0;
        let phase = (t * beat).fract();
        let shape: f64 = PQRST
            .iter()
            .map(|&(centre, width, height)| {
                let d = phase - centre;
                height * (-(d * d) / (2.0 * width * width)).exp()
            })
            .sum();
        // slow respiratory wander
        let wander = 0.03 * (TAU * 0.25 * t).sin();
        let noise = if self.noise > 0.0 {
            self.rng.gen_range(-self.noise..=self.noise)
        } else {
            0.0
        };
        Sample::new(index, self.baseline + self.gain * (shape + wander) + noise)
    }
}
impl SampleSource for SyntheticEcgSource {
    fn next_batch(&mut self) -> Result<Option<SampleBatch>, StripError> {
        let samples = self.take(self.batch_len);
        Ok(Some(SampleBatch {
            sampling_rate: self.sampling_rate,
            samples,
        }))
    }
}
