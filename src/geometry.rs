use crate::config::StripConfig;
use crate::error::StripError;

/// Cells per block along each axis.
pub const CELLS_PER_BLOCK: u32 = 5;
/// Seconds of signal one cell spans on standard ECG paper.
pub const SECONDS_PER_CELL: f64 = 0.04;

/// Layout values derived from a validated [`StripConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    width: u32,
    height: u32,
    cell_size: u32,
    sampling_rate: f64,
}

impl Geometry {
    pub fn new(config: &StripConfig) -> Result<Self, StripError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    /// Caller guarantees `config` already passed [`StripConfig::validate`].
    pub(crate) fn from_validated(config: &StripConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            cell_size: config.cell_size,
            sampling_rate: config.sampling_rate,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn sampling_rate(&self) -> f64 {
        self.sampling_rate
    }

    pub fn block_size(&self) -> u32 {
        self.cell_size * CELLS_PER_BLOCK
    }

    /// 5 at 125 Hz, 10 at 250 Hz.
    pub fn samples_per_cell(&self) -> f64 {
        SECONDS_PER_CELL * self.sampling_rate
    }

    pub fn cells_per_period(&self) -> u32 {
        self.width / self.cell_size
    }

    pub fn samples_per_period(&self) -> usize {
        (self.samples_per_cell() * f64::from(self.cells_per_period())).floor() as usize
    }

    /// Seconds of signal covered by the full surface width.
    pub fn period_seconds(&self) -> f64 {
        SECONDS_PER_CELL * f64::from(self.cells_per_period())
    }

    pub fn pixels_per_sample(&self) -> f64 {
        f64::from(self.cell_size) / self.samples_per_cell()
    }
}
