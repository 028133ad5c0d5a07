//! Default resources for the slot field.

use pinfield_render::{Color, FontMetrics};

use super::ColorPalette;

/// Default value of every field attribute.
///
/// These are the values an attribute falls back to when it is absent from
/// the declaration block.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefaults {
    /// Number of slots.
    pub slot_count: u32,
    /// Border color when unfocused.
    pub border_color: Color,
    /// Border color when focused.
    pub border_color_focus: Color,
    /// Divider line color when unfocused.
    pub divider_color: Color,
    /// Divider line color when focused.
    pub divider_color_focus: Color,
    /// Border stroke width in pixels.
    pub border_width: f32,
    /// Corner radius of both rounded rects.
    pub border_radius: f32,
    /// Dot and revealed-text color.
    pub glyph_color: Color,
    /// Glyph stroke width in pixels.
    pub glyph_width: f32,
    /// Dot radius in pixels.
    pub glyph_radius: f32,
    /// Revealed-text size in pixels.
    pub glyph_size: f32,
    /// Inner content area color.
    pub background_color: Color,
    /// Whether characters are revealed instead of masked.
    pub display_password: bool,
    /// Metrics used to center revealed text.
    pub glyph_metrics: FontMetrics,
}

impl FieldDefaults {
    /// Derive the defaults from a palette.
    pub fn from_palette(palette: &ColorPalette) -> Self {
        Self {
            slot_count: 6,
            border_color: palette.border,
            border_color_focus: palette.primary,
            divider_color: palette.divider,
            divider_color_focus: palette.primary_light,
            border_width: 1.0,
            border_radius: 4.0,
            glyph_color: palette.text_primary,
            glyph_width: 1.0,
            glyph_radius: 6.0,
            glyph_size: 24.0,
            background_color: palette.surface,
            display_password: false,
            glyph_metrics: FontMetrics::DEFAULT_SANS,
        }
    }
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self::from_palette(&ColorPalette::light())
    }
}
