use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("target container could not be resolved or measured")]
    MissingContainer,

    #[error("drawing surface accessed before the chart root was mounted")]
    MissingSurface,

    #[error("series value `{selector}` missing from record {index}")]
    MissingSeriesValue { selector: String, index: usize },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
