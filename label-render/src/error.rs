//! Error types for the rendering library

use thiserror::Error;

/// Rendering error types
#[derive(Debug, Error)]
pub enum RenderError {
    /// Typeface missing or unreadable
    #[error("Font error: {0}")]
    Font(String),

    /// Corrupt source image or invalid raster operation
    #[error("Image error: {0}")]
    Image(String),

    /// Payload rejected by a symbology encoder
    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
