//! The error type shared by the numerical and the presentation layer.
use thiserror::Error;

/// Everything that can go wrong while estimating an integral or drawing it.
#[derive(Debug, Error)]
pub enum Error {
    /// A partition needs at least one subinterval.
    #[error("invalid subdivision count {0}: at least one subdivision is required")]
    InvalidSubdivisionCount(usize),
    /// Interval bounds must be finite and satisfy `left < right`.
    #[error("invalid interval: bounds must be finite and satisfy left < right")]
    InvalidInterval,
    /// A sampled curve needs both end points of the interval.
    #[error("invalid sample count {0}: a curve needs at least two samples")]
    InvalidSampleCount(usize),
    /// The plotting backend could not produce the figure.
    #[error("rendering failed: {0}")]
    Rendering(String),
    /// The configuration file could not be understood.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Reading a configuration or writing a figure failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A report could not be serialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
