//! Error types for the styling system.

/// Result type alias for style operations.
pub type StyleResult<T> = std::result::Result<T, StyleError>;

/// Errors that can occur while resolving field attributes.
///
/// Syntax errors never surface here; the parser logs and skips them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StyleError {
    /// Invalid property value.
    #[error("invalid value for property '{property}': {message}")]
    InvalidValue { property: String, message: String },
}

impl StyleError {
    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }

    /// The property this error refers to.
    pub fn property(&self) -> &str {
        match self {
            Self::InvalidValue { property, .. } => property,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_property() {
        let err = StyleError::invalid_value("slot-count", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid value for property 'slot-count': must be at least 1"
        );
        assert_eq!(err.property(), "slot-count");
    }
}
