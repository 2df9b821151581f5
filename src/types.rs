// src/types.rs
use serde::{Deserialize, Serialize};

/// One amplitude reading at a fixed-rate position in the signal stream.
///
/// `amplitude` is `None` for a dropout. Time is implied by `index` and the
/// sampling rate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub amplitude: Option<f64>,
    pub index: u64,
}

impl Sample {
    pub fn new(index: u64, amplitude: f64) -> Self {
        Self {
            amplitude: Some(amplitude),
            index,
        }
    }

    pub fn gap(index: u64) -> Self {
        Self {
            amplitude: None,
            index,
        }
    }

    pub fn is_gap(&self) -> bool {
        self.amplitude.is_none()
    }
}

/// Builds a contiguous sequence starting at index 0.
pub fn samples_from(amplitudes: impl IntoIterator<Item = Option<f64>>) -> Vec<Sample> {
    amplitudes
        .into_iter()
        .enumerate()
        .map(|(i, amplitude)| Sample {
            amplitude,
            index: i as u64,
        })
        .collect()
}

/// How a gap after the first real sample is drawn.
///
/// Defaults to `ZeroFill`: every step after the anchor gets a segment, the
/// same polyline a plain canvas renderer produces when it coerces a missing
/// value to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPolicy {
    /// Draw the gap as amplitude 0.
    #[default]
    ZeroFill,
    /// Leave the segments touching the gap undrawn.
    Break,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const GREEN: Rgb = Rgb(0, 128, 0);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::BLACK
    }
}

impl From<Rgb> for plotters::style::RGBColor {
    fn from(value: Rgb) -> Self {
        plotters::style::RGBColor(value.0, value.1, value.2)
    }
}

impl From<Rgb> for eframe::egui::Color32 {
    fn from(value: Rgb) -> Self {
        eframe::egui::Color32::from_rgb(value.0, value.1, value.2)
    }
}
