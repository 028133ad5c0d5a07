//! Widget crate error types.

use pinfield_style::StyleError;
use thiserror::Error;

/// Errors raised when building or reconfiguring a slot field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlotFieldError {
    /// The attributes or style values are invalid.
    #[error("invalid slot field style: {0}")]
    Style(#[from] StyleError),
}

impl SlotFieldError {
    /// The attribute that caused the error, if known.
    pub fn property(&self) -> Option<&str> {
        match self {
            Self::Style(err) => Some(err.property()),
        }
    }
}

/// Result type for slot field operations.
pub type SlotFieldResult<T> = std::result::Result<T, SlotFieldError>;
