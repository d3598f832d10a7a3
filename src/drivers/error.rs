use thiserror::Error;
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("series index {index} out of range (series count {count})")]
    OutOfRange { index: usize, count: usize },
    #[error("sample count must be greater than zero")]
    InvalidSampleCount,
    #[error("series count must be greater than zero")]
    InvalidSeriesCount,
    #[error("tick interval must be greater than zero")]
    InvalidTickInterval,
    #[error("failed to export snapshot: {0}")]
    Export(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for ChartError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        ChartError::Export(format!("{value:?}"))
    }
}
impl From<image::ImageError> for ChartError {
    fn from(value: image::ImageError) -> Self {
        ChartError::Export(value.to_string())
    }
}
