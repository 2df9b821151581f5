use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StripError;
use crate::geometry::CELLS_PER_BLOCK;
use crate::types::{GapPolicy, Rgb};

/// Everything a strip needs to know up front. Fixed once the strip is built;
/// a resize means building a new strip.
///
/// Missing fields in a JSON document fall back to [`StripConfig::default`]:
///
/// ```
/// let cfg = ecg_strip::StripConfig::from_json_str(r#"{ "sampling_rate": 250.0 }"#).unwrap();
/// assert_eq!(cfg.cell_size, 6);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Pixel size of one cell, nominally 1 mm of ECG paper.
    pub cell_size: u32,
    /// Samples per second of the incoming stream.
    pub sampling_rate: f64,
    pub grid_color: Rgb,
    pub curve_color: Rgb,
    /// Color painted by surfaces that fill on clear.
    pub background: Rgb,
    /// Inset applied on all four sides of the drawing area.
    pub padding: u32,
    pub cell_line_width: f64,
    pub block_line_width: f64,
    pub curve_line_width: f64,
    pub gap_policy: GapPolicy,
    /// How often a driver should repaint the curve, in Hz.
    pub refresh_hz: f64,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            // 127 cells of 6 px: a 5.08 s period.
            width: 762,
            height: 300,
            cell_size: 6,
            sampling_rate: 125.0,
            grid_color: Rgb::GREEN,
            curve_color: Rgb::GREEN,
            background: Rgb::WHITE,
            padding: 0,
            cell_line_width: 0.1,
            block_line_width: 0.2,
            curve_line_width: 1.0,
            gap_policy: GapPolicy::default(),
            refresh_hz: 250.0,
        }
    }
}

impl StripConfig {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, StripError> {
        let config: StripConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, StripError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&text)?;
        log::info!("loaded strip config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), StripError> {
        if self.cell_size == 0 {
            return Err(invalid("cell size must be greater than zero"));
        }
        if self.cell_size > u32::MAX / CELLS_PER_BLOCK {
            return Err(invalid(format!(
                "cell size {} is too large for a {CELLS_PER_BLOCK}-cell block",
                self.cell_size
            )));
        }
        if !(self.sampling_rate.is_finite() && self.sampling_rate > 0.0) {
            return Err(invalid(format!(
                "sampling rate must be greater than zero, got {}",
                self.sampling_rate
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(invalid(format!(
                "surface dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        let inset = u64::from(self.padding) * 2;
        if inset >= u64::from(self.width) || inset >= u64::from(self.height) {
            return Err(invalid(format!(
                "padding {} leaves no drawing area in {}x{}",
                self.padding, self.width, self.height
            )));
        }
        for (name, value) in [
            ("cell line width", self.cell_line_width),
            ("block line width", self.block_line_width),
            ("curve line width", self.curve_line_width),
            ("refresh rate", self.refresh_hz),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be greater than zero")));
            }
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> StripError {
    StripError::InvalidConfiguration(message.into())
}
