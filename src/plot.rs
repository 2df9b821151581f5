use crate::config::StripConfig;
use crate::error::StripError;
use crate::strip::Strip;
use crate::surface::BitmapSurface;
use crate::types::Sample;

/// Renders one full strip frame off-screen and returns it as PNG bytes.
pub fn render_strip_png(config: &StripConfig, samples: &[Sample]) -> Result<Vec<u8>, StripError> {
    let background = config.background;
    let mut strip = Strip::create(config.clone(), |width, height| {
        BitmapSurface::new(width, height, background)
    })?;
    strip.draw_curve(samples);
    strip.surface().to_png()
}
