//! Attribute parsing module.

mod declarations;
mod values;

pub use declarations::parse_attributes;

use crate::error::StyleError;

/// Why a single declaration was rejected.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DeclarationError {
    /// The property name is not a field attribute.
    UnknownProperty(String),
    /// The value could not be read for the property.
    Malformed(String),
    /// The value was read but is out of range; never skipped.
    Invalid(StyleError),
}
