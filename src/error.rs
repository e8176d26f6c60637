use thiserror::Error;

pub type HistogramResult<T> = Result<T, HistogramError>;

#[derive(Debug, Error)]
pub enum HistogramError {
    #[error("the minimum height is {min}px, got {height}px")]
    HeightBelowMinimum { height: f64, min: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
