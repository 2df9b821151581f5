use super::style::{StyleGuard, TranslateGuard};
use super::draw_line;
use crate::config::StripConfig;
use crate::geometry::Geometry;
use crate::surface::Surface;

/// Paints the 1 mm / 5 mm reference grid over the padded drawing area.
///
/// Horizontal lines are stepped up from the bottom edge and vertical lines
/// right from the left edge, so the bold block lines meet at the bottom-left
/// corner where the curve baseline sits. Does not clear first.
pub(crate) fn paint_grid<S: Surface + ?Sized>(
    surface: &mut S,
    config: &StripConfig,
    geometry: &Geometry,
) {
    let cell = i64::from(geometry.cell_size());
    let block = i64::from(geometry.block_size());
    let inset = i64::from(config.padding);
    // One pixel short of the edge so the border stroke is not clipped.
    let w = i64::from(geometry.width()) - 2 * inset - 1;
    let h = i64::from(geometry.height()) - 2 * inset - 1;
    let stroke_for = |offset: i64| {
        if offset % block == 0 {
            config.block_line_width
        } else {
            config.cell_line_width
        }
    };

    let mut styled = StyleGuard::new(surface);
    styled.set_stroke_style(config.grid_color);
    let padding = f64::from(config.padding);
    let mut area = TranslateGuard::new(&mut *styled, padding, padding);

    let mut offset = 0;
    while h - offset >= 0 {
        let y = (h - offset) as f64;
        area.begin_path();
        area.set_line_width(stroke_for(offset));
        draw_line(&mut *area, 0.0, y, w as f64, y);
        area.close_path();
        area.stroke();
        offset += cell;
    }

    let mut x = 0;
    while x <= w {
        area.begin_path();
        area.set_line_width(stroke_for(x));
        draw_line(&mut *area, x as f64, 0.0, x as f64, h as f64);
        area.close_path();
        area.stroke();
        x += cell;
    }
}
