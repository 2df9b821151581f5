use std::ops::{Deref, DerefMut};

use crate::surface::Surface;
use crate::types::Rgb;

/// Saves stroke style and line width, restores them when dropped.
pub(crate) struct StyleGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    stroke_style: Rgb,
    line_width: f64,
}

impl<'a, S: Surface + ?Sized> StyleGuard<'a, S> {
    pub(crate) fn new(surface: &'a mut S) -> Self {
        let stroke_style = surface.stroke_style();
        let line_width = surface.line_width();
        Self {
            surface,
            stroke_style,
            line_width,
        }
    }
}

impl<S: Surface + ?Sized> Deref for StyleGuard<'_, S> {
    type Target = S;
    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for StyleGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for StyleGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_line_width(self.line_width);
        self.surface.set_stroke_style(self.stroke_style);
    }
}

/// Shifts the logical origin, shifts it back when dropped.
pub(crate) struct TranslateGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    dx: f64,
    dy: f64,
}

impl<'a, S: Surface + ?Sized> TranslateGuard<'a, S> {
    pub(crate) fn new(surface: &'a mut S, dx: f64, dy: f64) -> Self {
        if dx != 0.0 || dy != 0.0 {
            surface.translate(dx, dy);
        }
        Self { surface, dx, dy }
    }
}

impl<S: Surface + ?Sized> Deref for TranslateGuard<'_, S> {
    type Target = S;
    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for TranslateGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for TranslateGuard<'_, S> {
    fn drop(&mut self) {
        if self.dx != 0.0 || self.dy != 0.0 {
            self.surface.translate(-self.dx, -self.dy);
        }
    }
}
