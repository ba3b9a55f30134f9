//! Error types for the batch generator

use label_render::RenderError;
use thiserror::Error;

/// Top-level error taxonomy for a generation run.
///
/// Every variant carries enough context to be logged once at the process
/// boundary; intermediate layers only propagate.
#[derive(Debug, Error)]
pub enum LabelError {
    /// Missing or malformed configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing or malformed input file
    #[error("Input error: {0}")]
    Input(String),

    /// Missing or corrupt master template, or a failed save
    #[error("Image error: {0}")]
    Image(String),

    /// Failure inside the rendering library
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Filesystem error outside image decode/encode
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for generator operations
pub type LabelResult<T> = Result<T, LabelError>;
