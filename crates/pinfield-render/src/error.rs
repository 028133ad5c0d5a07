//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur during rendering setup.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Font data could not be parsed.
    #[error("failed to parse font data: {0}")]
    FontParse(#[from] ttf_parser::FaceParsingError),

    /// The font reports zero units per em, so it cannot be scaled.
    #[error("font has invalid units per em: {0}")]
    InvalidUnitsPerEm(u16),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
