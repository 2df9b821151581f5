use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageBuffer, ImageFormat};
use plotters::prelude::*;

use super::{PathBuilder, Surface};
use crate::error::StripError;
use crate::types::Rgb;

/// RGB pixel surface rasterized through plotters' bitmap backend.
///
/// Strokes thinner than one pixel are drawn one pixel wide with their width
/// used as opacity, which is roughly what a browser canvas shows for the
/// 0.1/0.2 grid lines.
pub struct BitmapSurface {
    width: u32,
    height: u32,
    background: Rgb,
    pixels: Vec<u8>,
    stroke_style: Rgb,
    line_width: f64,
    origin: (f64, f64),
    path: PathBuilder,
}

impl BitmapSurface {
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let mut surface = Self {
            width,
            height,
            background,
            pixels: vec![0u8; (width as usize) * (height as usize) * 3],
            stroke_style: Rgb::BLACK,
            line_width: 1.0,
            origin: (0.0, 0.0),
            path: PathBuilder::default(),
        };
        surface.fill_region(0, 0, width, height);
        surface
    }

    /// Raw RGB bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let at = ((y as usize) * (self.width as usize) + x as usize) * 3;
        Some(Rgb(self.pixels[at], self.pixels[at + 1], self.pixels[at + 2]))
    }

    pub fn to_png(&self) -> Result<Vec<u8>, StripError> {
        let image =
            ImageBuffer::<image::Rgb<u8>, _>::from_raw(self.width, self.height, self.pixels.clone())
                .ok_or_else(|| StripError::Plot("failed to allocate image buffer".into()))?;
        let mut output = Vec::new();
        let dynamic = DynamicImage::ImageRgb8(image);
        dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
        Ok(output)
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), StripError> {
        let bytes = self.to_png()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn device_point(&self, (x, y): (f64, f64)) -> (i32, i32) {
        (
            (x + self.origin.0).round() as i32,
            (y + self.origin.1).round() as i32,
        )
    }

    fn fill_region(&mut self, x0: u32, y0: u32, x1: u32, y1: u32) {
        let Rgb(r, g, b) = self.background;
        let row_len = self.width as usize;
        for y in y0..y1.min(self.height) {
            for x in x0..x1.min(self.width) {
                let at = ((y as usize) * row_len + x as usize) * 3;
                self.pixels[at..at + 3].copy_from_slice(&[r, g, b]);
            }
        }
    }

    fn stroke_path(&mut self) -> Result<(), StripError> {
        let polylines: Vec<Vec<(i32, i32)>> = self
            .path
            .strokable()
            .map(|subpath| subpath.iter().map(|&p| self.device_point(p)).collect())
            .collect();
        if polylines.is_empty() {
            return Ok(());
        }
        let (stroke_width, opacity) = if self.line_width < 1.0 {
            (1, self.line_width)
        } else {
            (self.line_width.round() as u32, 1.0)
        };
        let style = RGBColor::from(self.stroke_style)
            .mix(opacity)
            .stroke_width(stroke_width);
        let root = BitMapBackend::with_buffer(&mut self.pixels, (self.width, self.height))
            .into_drawing_area();
        for points in polylines {
            root.draw(&PathElement::new(points, style))?;
        }
        root.present()?;
        Ok(())
    }
}

impl Surface for BitmapSurface {
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
        if let Err(err) = self.stroke_path() {
            log::warn!("bitmap stroke failed: {err}");
        }
    }
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let left = (x + self.origin.0).max(0.0);
        let top = (y + self.origin.1).max(0.0);
        let right = (x + self.origin.0 + width).max(0.0);
        let bottom = (y + self.origin.1 + height).max(0.0);
        self.fill_region(
            left.floor() as u32,
            top.floor() as u32,
            right.ceil() as u32,
            bottom.ceil() as u32,
        );
    }
    fn translate(&mut self, dx: f64, dy: f64) {
        self.origin = (self.origin.0 + dx, self.origin.1 + dy);
    }
}
