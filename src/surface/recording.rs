use super::Surface;
use crate::types::Rgb;

/// One call made against a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    SetStrokeStyle(Rgb),
    SetLineWidth(f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ClosePath,
    Stroke,
    ClearRect(f64, f64, f64, f64),
    Translate(f64, f64),
}

/// Surface that draws nothing and keeps a log of every call.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    stroke_style: Rgb,
    line_width: f64,
    origin: (f64, f64),
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            stroke_style: Rgb::BLACK,
            line_width: 1.0,
            origin: (0.0, 0.0),
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Current translation of the logical origin.
    pub fn origin(&self) -> (f64, f64) {
        self.origin
    }

    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Surface for RecordingSurface {
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
        self.ops.push(DrawOp::SetStrokeStyle(color));
    }
    fn line_width(&self) -> f64 {
        self.line_width
    }
    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
        self.ops.push(DrawOp::SetLineWidth(width));
    }
    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::LineTo(x, y));
    }
    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
    }
    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::ClearRect(x, y, width, height));
    }
    fn translate(&mut self, dx: f64, dy: f64) {
        self.origin = (self.origin.0 + dx, self.origin.1 + dy);
        self.ops.push(DrawOp::Translate(dx, dy));
    }
}
