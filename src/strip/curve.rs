use super::draw_line;
use super::style::{StyleGuard, TranslateGuard};
use crate::config::StripConfig;
use crate::geometry::Geometry;
use crate::surface::Surface;
use crate::types::{GapPolicy, Sample};

/// What a curve pass drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CurveStats {
    /// Position of the first non-gap sample, if any.
    pub anchor: Option<usize>,
    pub segments: usize,
}

/// Strokes `samples` as a polyline with the origin moved to the bottom-left
/// of the drawing area, so larger amplitudes go up.
///
/// Leading gaps are dropped and x is counted from the first real sample.
pub(crate) fn paint_curve<S: Surface + ?Sized>(
    surface: &mut S,
    config: &StripConfig,
    geometry: &Geometry,
    samples: &[Sample],
) -> CurveStats {
    let mut styled = StyleGuard::new(surface);
    styled.set_stroke_style(config.curve_color);
    let padding = f64::from(config.padding);
    let baseline = f64::from(geometry.height()) - padding;
    let mut flipped = TranslateGuard::new(&mut *styled, padding, baseline);

    let Some(anchor) = samples.iter().position(|s| s.amplitude.is_some()) else {
        return CurveStats::default();
    };
    let step = geometry.pixels_per_sample();
    let mut p0 = samples[anchor].amplitude;
    let mut segments = 0;
    for (k, p1) in samples[anchor + 1..].iter().enumerate() {
        let k = (k + 1) as f64;
        let p1 = p1.amplitude;
        if let (Some(a0), Some(a1)) = (
            resolve(p0, config.gap_policy),
            resolve(p1, config.gap_policy),
        ) {
            flipped.begin_path();
            flipped.set_line_width(config.curve_line_width);
            draw_line(&mut *flipped, (k - 1.0) * step, -a0, k * step, -a1);
            flipped.close_path();
            flipped.stroke();
            segments += 1;
        }
        p0 = p1;
    }
    CurveStats {
        anchor: Some(anchor),
        segments,
    }
}

fn resolve(amplitude: Option<f64>, policy: GapPolicy) -> Option<f64> {
    match policy {
        GapPolicy::ZeroFill => Some(amplitude.unwrap_or(0.0)),
        GapPolicy::Break => amplitude,
    }
}
