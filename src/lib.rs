//! Scrolling ECG strip: a 1 mm / 5 mm reference grid with a signal curve
//! repainted on top, drawn onto any [`Surface`].
pub mod config;
pub mod error;
pub mod geometry;
pub mod plot;
pub mod signal;
pub mod strip;
pub mod surface;
pub mod types;
pub use config::StripConfig;
pub use error::StripError;
pub use geometry::Geometry;
pub use plot::render_strip_png;
pub use strip::{CurveStats, Strip};
pub use surface::{BitmapSurface, DrawOp, EguiSurface, RecordingSurface, Surface};
pub use types::{samples_from, GapPolicy, Rgb, Sample};
