//! Error types for Overlay

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OverlayError>;

/// Main error type for Overlay
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("Font unavailable: {0}")]
    FontUnavailable(#[from] FontLoadError),

    #[error("Rendering failed: {0}")]
    RenderingFailed(#[from] RenderError),

    #[error("Export failed: {0}")]
    ExportFailed(#[from] ExportError),

    #[error("Background image failed: {0}")]
    Background(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,

    #[error("No font configured for variant: {0}")]
    VariantNotConfigured(String),
}

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid font data")]
    InvalidFont,

    #[error("Failed to extract outline for glyph {0}")]
    OutlineExtractionFailed(u32),
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),
}
