// src/surface/mod.rs
pub mod bitmap;
pub mod egui;
pub mod recording;
pub use bitmap::BitmapSurface;
pub use egui::EguiSurface;
pub use recording::{DrawOp, RecordingSurface};

use crate::types::Rgb;

/// Minimal 2D line-drawing capability, modelled on a canvas context.
///
/// Path coordinates are relative to the current origin, which `translate`
/// shifts. Stroke style and line width are surface-global state.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn stroke_style(&self) -> Rgb;
    fn set_stroke_style(&mut self, color: Rgb);
    fn line_width(&self) -> f64;
    fn set_line_width(&mut self, width: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Joins the current subpath back to its first point.
    fn close_path(&mut self);
    fn stroke(&mut self);
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn translate(&mut self, dx: f64, dy: f64);
}

/// Path under construction, shared by the surfaces that rasterize on `stroke`.
#[derive(Clone, Debug, Default)]
pub(crate) struct PathBuilder {
    subpaths: Vec<Vec<(f64, f64)>>,
}

impl PathBuilder {
    pub(crate) fn clear(&mut self) {
        self.subpaths.clear();
    }

    pub(crate) fn move_to(&mut self, point: (f64, f64)) {
        self.subpaths.push(vec![point]);
    }

    pub(crate) fn line_to(&mut self, point: (f64, f64)) {
        match self.subpaths.last_mut() {
            Some(subpath) => subpath.push(point),
            // A canvas treats a leading lineTo as a moveTo.
            None => self.subpaths.push(vec![point]),
        }
    }

    pub(crate) fn close(&mut self) {
        if let Some(subpath) = self.subpaths.last_mut() {
            if subpath.len() > 1 {
                let first = subpath[0];
                subpath.push(first);
            }
        }
    }

    /// Subpaths with at least one segment.
    pub(crate) fn strokable(&self) -> impl Iterator<Item = &[(f64, f64)]> {
        self.subpaths
            .iter()
            .filter(|s| s.len() > 1)
            .map(|s| s.as_slice())
    }
}
