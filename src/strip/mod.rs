// src/strip/mod.rs
mod curve;
mod grid;
mod style;
pub use curve::CurveStats;

use crate::config::StripConfig;
use crate::error::StripError;
use crate::geometry::Geometry;
use crate::surface::Surface;
use crate::types::Sample;

/// A scrolling ECG strip: one surface, one immutable configuration.
///
/// Every [`Strip::draw_curve`] is a full repaint; nothing about previous
/// frames or samples is kept.
pub struct Strip<S: Surface> {
    config: StripConfig,
    surface: S,
}

impl<S: Surface> Strip<S> {
    /// Wraps an existing surface, which must match the configured size.
    pub fn new(surface: S, config: StripConfig) -> Result<Self, StripError> {
        config.validate()?;
        if surface.width() != config.width || surface.height() != config.height {
            return Err(StripError::InvalidConfiguration(format!(
                "surface is {}x{} but config asks for {}x{}",
                surface.width(),
                surface.height(),
                config.width,
                config.height
            )));
        }
        Ok(Self { config, surface })
    }

    /// Allocates the surface through `factory` at the configured size.
    pub fn create(
        config: StripConfig,
        factory: impl FnOnce(u32, u32) -> S,
    ) -> Result<Self, StripError> {
        config.validate()?;
        let surface = factory(config.width, config.height);
        Self::new(surface, config)
    }

    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    pub fn geometry(&self) -> Geometry {
        Geometry::from_validated(&self.config)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn cell_size(&self) -> u32 {
        self.config.cell_size
    }

    pub fn block_size(&self) -> u32 {
        self.geometry().block_size()
    }

    pub fn sampling_rate(&self) -> f64 {
        self.config.sampling_rate
    }

    pub fn samples_per_cell(&self) -> f64 {
        self.geometry().samples_per_cell()
    }

    pub fn samples_per_period(&self) -> usize {
        self.geometry().samples_per_period()
    }

    /// Seconds of signal shown across the full width.
    pub fn period(&self) -> f64 {
        self.geometry().period_seconds()
    }

    pub fn clear(&mut self) {
        let (w, h) = (f64::from(self.width()), f64::from(self.height()));
        self.surface.clear_rect(0.0, 0.0, w, h);
    }

    /// Adds a segment to the surface's current path.
    pub fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        draw_line(&mut self.surface, x1, y1, x2, y2);
    }

    pub fn draw_grid(&mut self) {
        let geometry = self.geometry();
        grid::paint_grid(&mut self.surface, &self.config, &geometry);
    }

    /// Clears the surface, repaints the grid and strokes `samples` on top.
    pub fn draw_curve(&mut self, samples: &[Sample]) -> CurveStats {
        self.clear();
        self.draw_grid();
        let geometry = self.geometry();
        let stats = curve::paint_curve(&mut self.surface, &self.config, &geometry, samples);
        log::debug!(
            "strip repaint: {} samples, anchor {:?}, {} segments",
            samples.len(),
            stats.anchor,
            stats.segments
        );
        stats
    }
}

pub(crate) fn draw_line<S: Surface + ?Sized>(surface: &mut S, x1: f64, y1: f64, x2: f64, y2: f64) {
    surface.move_to(x1, y1);
    surface.line_to(x2, y2);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{BitmapSurface, DrawOp, RecordingSurface};
    use crate::types::{samples_from, GapPolicy, Rgb};

    fn recording_strip(config: StripConfig) -> Strip<RecordingSurface> {
        Strip::create(config, RecordingSurface::new).unwrap()
    }

    fn line_tos(ops: &[DrawOp]) -> Vec<(f64, f64)> {
        ops.iter()
            .filter_map(|op| match op {
                DrawOp::LineTo(x, y) => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    fn grid_ops(config: &StripConfig) -> Vec<DrawOp> {
        let mut strip = recording_strip(config.clone());
        strip.draw_grid();
        strip.surface_mut().take_ops()
    }

    #[test]
    fn accessors_expose_geometry() {
        let strip = recording_strip(StripConfig::with_size(762, 300));
        assert_eq!(strip.width(), 762);
        assert_eq!(strip.height(), 300);
        assert_eq!(strip.cell_size(), 6);
        assert_eq!(strip.block_size(), 30);
        assert_eq!(strip.sampling_rate(), 125.0);
        assert!((strip.samples_per_cell() - 5.0).abs() < 1e-9);
        assert_eq!(strip.samples_per_period(), 635);
        let expected = 0.04 * f64::from(strip.width()) / f64::from(strip.cell_size());
        assert!((strip.period() - expected).abs() < 1e-9);
    }

    #[test]
    fn mismatched_surface_is_rejected() {
        let err = Strip::new(RecordingSurface::new(100, 100), StripConfig::with_size(200, 100))
            .err()
            .unwrap();
        assert!(matches!(err, StripError::InvalidConfiguration(_)));
    }

    #[test]
    fn invalid_config_never_builds_a_surface() {
        let cfg = StripConfig {
            cell_size: 0,
            ..StripConfig::default()
        };
        let mut called = false;
        let result = Strip::create(cfg, |w, h| {
            called = true;
            RecordingSurface::new(w, h)
        });
        assert!(result.is_err());
        assert!(!called);
    }

    #[test]
    fn grid_line_counts_and_widths() {
        let config = StripConfig::with_size(100, 61);
        let ops = grid_ops(&config);
        let mut horizontal = Vec::new();
        let mut vertical = Vec::new();
        let mut width = 0.0;
        let mut start = (0.0, 0.0);
        for op in &ops {
            match op {
                DrawOp::SetLineWidth(w) => width = *w,
                DrawOp::MoveTo(x, y) => start = (*x, *y),
                DrawOp::LineTo(_, y) if start.1 == *y => horizontal.push((*y, width)),
                DrawOp::LineTo(x, _) if start.0 == *x => vertical.push((*x, width)),
                _ => {}
            }
        }
        // h = 60: y = 60, 54, ..., 0
        assert_eq!(horizontal.len(), (60 / 6) + 1);
        for (y, w) in &horizontal {
            let from_bottom = 60.0 - y;
            let expected = if from_bottom % 30.0 == 0.0 { 0.2 } else { 0.1 };
            assert_eq!(*w, expected, "horizontal line at y={y}");
        }
        assert_eq!(horizontal[0], (60.0, 0.2));
        // w = 99: x = 0, 6, ..., 96
        assert_eq!(vertical.len(), 17);
        for (x, w) in &vertical {
            let expected = if x % 30.0 == 0.0 { 0.2 } else { 0.1 };
            assert_eq!(*w, expected, "vertical line at x={x}");
        }
    }

    #[test]
    fn vertical_lines_reach_inclusive_right_edge() {
        // w = 120 is a multiple of the cell, so x = 120 gets a line too.
        // h = 61 keeps every horizontal line off y = 0.
        let mut strip = recording_strip(StripConfig::with_size(121, 62));
        strip.draw_grid();
        let surface = strip.surface();
        let vertical = surface.count(|op| matches!(op, DrawOp::MoveTo(_, y) if *y == 0.0));
        assert_eq!(vertical, 21);
        assert_eq!(surface.count(|op| *op == DrawOp::MoveTo(120.0, 0.0)), 1);
        assert_eq!(surface.count(|op| matches!(op, DrawOp::MoveTo(x, _) if *x > 120.0)), 0);
    }

    #[test]
    fn oversized_cell_is_rejected_before_drawing() {
        let config = StripConfig {
            cell_size: 900_000_000,
            ..StripConfig::with_size(100, 100)
        };
        let result = Strip::create(config, RecordingSurface::new);
        assert!(matches!(result, Err(StripError::InvalidConfiguration(_))));
    }

    #[test]
    fn horizontal_blocks_anchor_at_bottom_edge() {
        // h = 40 is not a multiple of the block, so the bold lines sit at
        // y = 40 and y = 10 rather than at the top.
        let ops = grid_ops(&StripConfig::with_size(30, 41));
        let bold_rows: Vec<f64> = ops
            .windows(3)
            .filter_map(|w| match w {
                [DrawOp::SetLineWidth(lw), DrawOp::MoveTo(x, y), DrawOp::LineTo(_, y2)]
                    if *x == 0.0 && y == y2 && *lw == 0.2 =>
                {
                    Some(*y)
                }
                _ => None,
            })
            .collect();
        assert_eq!(bold_rows, vec![40.0, 10.0]);
    }

    #[test]
    fn grid_restores_style() {
        let mut strip = recording_strip(StripConfig::default());
        strip.surface_mut().set_stroke_style(Rgb::RED);
        strip.surface_mut().set_line_width(4.0);
        strip.draw_grid();
        assert_eq!(strip.surface().stroke_style(), Rgb::RED);
        assert_eq!(strip.surface().line_width(), 4.0);
        assert_eq!(strip.surface().origin(), (0.0, 0.0));
    }

    #[test]
    fn grid_respects_padding() {
        let config = StripConfig {
            padding: 10,
            ..StripConfig::with_size(121, 81)
        };
        let mut strip = recording_strip(config);
        strip.draw_grid();
        assert_eq!(strip.surface().ops()[1], DrawOp::Translate(10.0, 10.0));
        // inner h = 60
        let horizontal = strip
            .surface()
            .count(|op| matches!(op, DrawOp::MoveTo(x, _) if *x == 0.0));
        assert_eq!(horizontal, 11 + 1);
        assert_eq!(strip.surface().origin(), (0.0, 0.0));
    }

    #[test]
    fn empty_and_all_gap_frames_only_draw_grid() {
        let config = StripConfig::with_size(120, 60);
        let grid_line_count = line_tos(&grid_ops(&config)).len();
        for samples in [Vec::new(), samples_from([None, None])] {
            let mut strip = recording_strip(config.clone());
            let stats = strip.draw_curve(&samples);
            assert_eq!(stats.segments, 0);
            assert_eq!(stats.anchor, None);
            assert_eq!(line_tos(strip.surface().ops()).len(), grid_line_count);
            assert!(matches!(strip.surface().ops()[0], DrawOp::ClearRect(..)));
        }
    }

    #[test]
    fn leading_gap_is_skipped_and_curve_is_flipped() {
        let config = StripConfig::with_size(120, 60);
        let grid_line_count = line_tos(&grid_ops(&config)).len();
        let mut strip = recording_strip(config);
        let pps = strip.geometry().pixels_per_sample();
        let stats = strip.draw_curve(&samples_from([None, Some(5.0), Some(3.0)]));
        assert_eq!(stats.anchor, Some(1));
        assert_eq!(stats.segments, 1);

        let ops = strip.surface().ops();
        let curve = &line_tos(ops)[grid_line_count..];
        assert_eq!(curve, &[(pps, -3.0)]);
        assert!(ops.contains(&DrawOp::MoveTo(0.0, -5.0)));
        assert!(ops.contains(&DrawOp::Translate(0.0, 60.0)));
        assert_eq!(strip.surface().origin(), (0.0, 0.0));
    }

    #[test]
    fn segments_step_by_pixels_per_sample() {
        let config = StripConfig {
            sampling_rate: 250.0,
            ..StripConfig::with_size(120, 60)
        };
        let grid_line_count = line_tos(&grid_ops(&config)).len();
        let mut strip = recording_strip(config);
        strip.draw_curve(&samples_from([Some(1.0), Some(2.0), Some(3.0), Some(4.0)]));
        let curve = line_tos(strip.surface().ops())[grid_line_count..].to_vec();
        // 6 px cell / 10 samples per cell
        let expected: Vec<(f64, f64)> = (1..4)
            .map(|k| (k as f64 * 0.6, -(k as f64 + 1.0)))
            .collect();
        assert_eq!(curve.len(), expected.len());
        for ((x, y), (ex, ey)) in curve.iter().zip(expected) {
            assert!((x - ex).abs() < 1e-9);
            assert_eq!(*y, ey);
        }
    }

    #[test]
    fn zero_fill_draws_gaps_at_baseline() {
        let config = StripConfig {
            gap_policy: GapPolicy::ZeroFill,
            ..StripConfig::with_size(120, 60)
        };
        let grid_line_count = line_tos(&grid_ops(&config)).len();
        let mut strip = recording_strip(config);
        let pps = strip.geometry().pixels_per_sample();
        let stats = strip.draw_curve(&samples_from([Some(4.0), None, Some(6.0)]));
        assert_eq!(stats.segments, 2);
        let curve = line_tos(strip.surface().ops())[grid_line_count..].to_vec();
        assert_eq!(curve, vec![(pps, 0.0), (2.0 * pps, -6.0)]);
    }

    #[test]
    fn break_leaves_gaps_undrawn() {
        let config = StripConfig {
            gap_policy: GapPolicy::Break,
            ..StripConfig::with_size(120, 60)
        };
        let grid_line_count = line_tos(&grid_ops(&config)).len();
        let mut strip = recording_strip(config);
        let pps = strip.geometry().pixels_per_sample();
        let stats = strip.draw_curve(&samples_from([
            Some(4.0),
            Some(5.0),
            None,
            Some(6.0),
            Some(7.0),
        ]));
        assert_eq!(stats.segments, 2);
        let curve = line_tos(strip.surface().ops())[grid_line_count..].to_vec();
        assert_eq!(curve, vec![(pps, -5.0), (4.0 * pps, -7.0)]);
    }

    #[test]
    fn amplitudes_are_not_clamped() {
        let mut strip = recording_strip(StripConfig::with_size(120, 60));
        strip.draw_curve(&samples_from([Some(1000.0), Some(-1000.0)]));
        assert!(strip.surface().ops().contains(&DrawOp::MoveTo(0.0, -1000.0)));
        assert!(strip.surface().ops().contains(&DrawOp::LineTo(1.2, 1000.0)));
    }

    #[test]
    fn curve_restores_style_and_origin() {
        let config = StripConfig {
            curve_color: Rgb::RED,
            ..StripConfig::with_size(120, 60)
        };
        let mut strip = recording_strip(config);
        strip.surface_mut().set_stroke_style(Rgb::BLACK);
        strip.surface_mut().set_line_width(2.5);
        strip.draw_curve(&samples_from([Some(1.0), Some(2.0)]));
        assert!(strip.surface().ops().contains(&DrawOp::SetStrokeStyle(Rgb::RED)));
        assert_eq!(strip.surface().stroke_style(), Rgb::BLACK);
        assert_eq!(strip.surface().line_width(), 2.5);
        assert_eq!(strip.surface().origin(), (0.0, 0.0));
    }

    #[test]
    fn repeated_draws_issue_identical_commands() {
        let samples = samples_from((0..200).map(|i| Some((i as f64 * 0.3).sin() * 40.0 + 80.0)));
        let mut strip = recording_strip(StripConfig::with_size(300, 160));
        strip.draw_curve(&samples);
        let first = strip.surface_mut().take_ops();
        strip.draw_curve(&samples);
        assert_eq!(first, strip.surface().ops());
    }

    #[test]
    fn repeated_draws_are_pixel_identical() {
        let config = StripConfig::with_size(200, 120);
        let mut strip = Strip::create(config.clone(), |w, h| {
            BitmapSurface::new(w, h, config.background)
        })
        .unwrap();
        let samples = samples_from((0..150).map(|i| {
            if i % 37 == 0 {
                None
            } else {
                Some((i as f64 * 0.2).sin() * 30.0 + 60.0)
            }
        }));
        strip.draw_curve(&samples);
        let first = strip.surface().pixels().to_vec();
        // something else lands on the surface between frames
        strip.surface_mut().set_stroke_style(Rgb::BLACK);
        strip.surface_mut().begin_path();
        strip.draw_line(0.0, 0.0, 199.0, 119.0);
        strip.surface_mut().stroke();
        strip.draw_curve(&samples);
        assert_eq!(first, strip.surface().pixels());
    }

    #[test]
    fn curve_is_drawn_upward_on_bitmap() {
        let config = StripConfig {
            curve_color: Rgb::RED,
            curve_line_width: 1.0,
            ..StripConfig::with_size(120, 60)
        };
        let mut strip = Strip::create(config.clone(), |w, h| {
            BitmapSurface::new(w, h, config.background)
        })
        .unwrap();
        strip.draw_curve(&samples_from(vec![Some(20.0); 60]));
        // amplitude 20 lands 20 px above the bottom edge
        assert_eq!(strip.surface().pixel(31, 40), Some(Rgb::RED));
        assert_eq!(strip.surface().pixel(31, 20), Some(config.background));
    }
}
