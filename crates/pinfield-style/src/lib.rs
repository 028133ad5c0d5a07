//! Styling for pinfield widgets.
//!
//! This crate turns declared field attributes into a validated style:
//!
//! - **Themes**: light and dark palettes with per-field default resources
//! - **Attribute parsing**: CSS-style declaration blocks read with `cssparser`
//! - **Resolution**: declared attributes overlaid on theme defaults, then
//!   range-checked
//!
//! # Example
//!
//! ```
//! use pinfield_style::prelude::*;
//!
//! let attrs = AttributeSet::parse("slot-count: 4; border-color-focus: #007aff").unwrap();
//! let style = SlotFieldStyle::resolve(&attrs, &Theme::light().field).unwrap();
//!
//! assert_eq!(style.slot_count, 4);
//! assert_eq!(style.border_width, Theme::light().field.border_width);
//! ```

pub mod attributes;
pub mod parser;
pub mod resolve;
pub mod theme;

mod error;

pub use error::{StyleError, StyleResult};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::attributes::{Attribute, AttributeSet};
    pub use crate::parser::parse_attributes;
    pub use crate::resolve::SlotFieldStyle;
    pub use crate::theme::{ColorPalette, FieldDefaults, Theme, ThemeMode};
    pub use crate::{StyleError, StyleResult};
}
