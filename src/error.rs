use thiserror::Error;
#[derive(Debug, Error)]
pub enum StripError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("sample rate mismatch: expected {expected}, got {actual}")]
    SampleRateMismatch { expected: f64, actual: f64 },
    #[error("failed to render plot: {0}")]
    Plot(String),
    #[error("failed to parse config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for StripError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        StripError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for StripError {
    fn from(value: image::ImageError) -> Self {
        StripError::Plot(value.to_string())
    }
}
