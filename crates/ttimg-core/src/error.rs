//! Error types for text-to-img

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtiError>;

/// Main error type for text-to-img
#[derive(Debug, Error)]
pub enum TtiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TtiError {
    /// True when the error was caused by user input rather than by the
    /// rendering or encoding backends.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Input that was rejected before any image was composed
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Cannot parse \"{0}\" to color value")]
    InvalidColor(String),

    #[error("Font named \"{0}\" was not found")]
    FontNotFound(String),

    #[error("\"{0}\" is not a valid file extension")]
    EmptyOrInvalidExtension(String),

    #[error("\".{0}\" is not a supported image format")]
    UnsupportedFormat(String),

    #[error("Selected output folder ({0}) does not exist")]
    DirectoryNotFound(String),

    #[error("\"{0}\" is not a valid file name")]
    InvalidFileName(String),

    #[error("Font size must be a whole number greater than 0 (got \"{0}\")")]
    InvalidFontSize(String),
}

/// Failures while drawing already validated input
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Failed to allocate a {width}x{height} canvas")]
    CanvasCreationFailed { width: u32, height: u32 },

    #[error("Invalid font data")]
    InvalidFont,

    #[error("Failed to extract outline for glyph {0}")]
    OutlineExtractionFailed(u32),

    #[error("Nothing to draw: \"{0}\" has no visible pixels")]
    EmptyImage(String),
}

/// Encoding and write errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),
}
