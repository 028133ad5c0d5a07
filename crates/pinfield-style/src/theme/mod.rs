//! Theme system with built-in themes.

mod builtin;
mod defaults;
mod palette;

pub use builtin::{Theme, ThemeMode};
pub use defaults::FieldDefaults;
pub use palette::ColorPalette;
