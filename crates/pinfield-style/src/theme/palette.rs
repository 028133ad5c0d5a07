//! Theme colors.

use pinfield_render::Color;

/// The subset of a theme palette the field draws with.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    /// Accent; the focused border.
    pub primary: Color,
    /// Focused dividers.
    pub primary_light: Color,
    /// Field background.
    pub surface: Color,
    /// Glyphs.
    pub text_primary: Color,
    /// Unfocused border.
    pub border: Color,
    /// Lines between slots.
    pub divider: Color,
}

impl ColorPalette {
    pub fn light() -> Self {
        Self {
            primary: Color::from_rgb8(0x00, 0x7A, 0xFF),
            primary_light: Color::from_rgb8(0x4D, 0xA3, 0xFF),
            surface: Color::WHITE,
            text_primary: Color::from_rgb8(0x21, 0x25, 0x29),
            border: Color::from_rgb8(0xCE, 0xD4, 0xDA),
            divider: Color::from_rgb8(0xDE, 0xE2, 0xE6),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: Color::from_rgb8(0x0A, 0x84, 0xFF),
            primary_light: Color::from_rgb8(0x5A, 0xC8, 0xFA),
            surface: Color::from_rgb8(0x1E, 0x1E, 0x1E),
            text_primary: Color::from_rgb8(0xF8, 0xF9, 0xFA),
            border: Color::from_rgb8(0x49, 0x50, 0x57),
            divider: Color::from_rgb8(0x34, 0x3A, 0x40),
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::light()
    }
}
