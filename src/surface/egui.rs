use eframe::egui::{Color32, Painter, Pos2, Rect, Rounding, Shape, Stroke, Vec2};

use super::{PathBuilder, Surface};
use crate::types::Rgb;

/// Collects strokes as egui shapes so an immediate-mode UI can paint the
/// last full frame every time it repaints.
pub struct EguiSurface {
    width: u32,
    height: u32,
    background: Rgb,
    stroke_style: Rgb,
    line_width: f64,
    origin: (f64, f64),
    path: PathBuilder,
    shapes: Vec<Shape>,
}

impl EguiSurface {
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        Self {
            width,
            height,
            background,
            stroke_style: Rgb::BLACK,
            line_width: 1.0,
            origin: (0.0, 0.0),
            path: PathBuilder::default(),
            shapes: Vec::new(),
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Paints the recorded frame with its top-left corner at `origin`.
    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        painter.extend(self.shapes.iter().cloned().map(|mut shape| {
            shape.translate(offset);
            shape
        }));
    }

    fn device_point(&self, (x, y): (f64, f64)) -> Pos2 {
        Pos2::new((x + self.origin.0) as f32, (y + self.origin.1) as f32)
    }
}

impl Surface for EguiSurface {
    fn width(&self) -> u32 {
        self.width
    }
    fn height(&self) -> u32 {
        self.height
    }
    fn stroke_style(&self) -> Rgb {
        self.stroke_style
    }
    fn set_stroke_style(&mut self, color: Rgb) {
        self.stroke_style = color;
    }
    fn line_width(&self) -> f64 {
        self.line_width
    }
    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }
    fn begin_path(&mut self) {
        self.path.clear();
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to((x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to((x, y));
    }
    fn close_path(&mut self) {
        self.path.close();
    }
    fn stroke(&mut self) {
        let stroke = Stroke::new(self.line_width as f32, Color32::from(self.stroke_style));
        let lines: Vec<Shape> = self
            .path
            .strokable()
            .map(|subpath| {
                let points = subpath.iter().map(|&p| self.device_point(p)).collect();
                Shape::line(points, stroke)
            })
            .collect();
        self.shapes.extend(lines);
    }
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let min = self.device_point((x, y));
        let max = self.device_point((x + width, y + height));
        let rect = Rect::from_min_max(min, max);
        let full = Rect::from_min_size(Pos2::ZERO, self.size());
        if rect.contains_rect(full) {
            self.shapes.clear();
        }
        self.shapes
            .push(Shape::rect_filled(rect, Rounding::ZERO, Color32::from(self.background)));
    }
    fn translate(&mut self, dx: f64, dy: f64) {
        self.origin = (self.origin.0 + dx, self.origin.1 + dy);
    }
}
