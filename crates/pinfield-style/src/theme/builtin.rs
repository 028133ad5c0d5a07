//! The light and dark themes fields fall back to.

use pinfield_render::{Color, FontMetrics};

use super::{ColorPalette, FieldDefaults};

/// Whether a theme is meant for light or dark surroundings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// A palette plus the field attributes derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub palette: ColorPalette,
    /// Values for attributes a field leaves undeclared.
    pub field: FieldDefaults,
}

impl Theme {
    pub fn light() -> Self {
        Self::custom(ThemeMode::Light, ColorPalette::light())
    }

    pub fn dark() -> Self {
        Self::custom(ThemeMode::Dark, ColorPalette::dark())
    }

    /// Derive field defaults from an arbitrary palette.
    pub fn custom(mode: ThemeMode, palette: ColorPalette) -> Self {
        let field = FieldDefaults::from_palette(&palette);
        Self {
            mode,
            palette,
            field,
        }
    }

    /// Use metrics read from the application's own font for revealed glyphs.
    pub fn with_glyph_metrics(mut self, metrics: FontMetrics) -> Self {
        self.field.glyph_metrics = metrics;
        self
    }

    pub fn primary(&self) -> Color {
        self.palette.primary
    }

    pub fn surface(&self) -> Color {
        self.palette.surface
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_creation() {
        let light = Theme::light();
        assert_eq!(light.mode, ThemeMode::Light);

        let dark = Theme::dark();
        assert_eq!(dark.mode, ThemeMode::Dark);
        assert_ne!(light.field.background_color, dark.field.background_color);
    }

    #[test]
    fn light_defaults() {
        let field = Theme::light().field;
        assert_eq!(field.slot_count, 6);
        assert_eq!(field.background_color, Color::WHITE);
        assert_eq!(field.border_color_focus, Theme::light().primary());
        assert!(!field.display_password);
        assert!(field.border_width > 0.0);
    }

    #[test]
    fn custom_glyph_metrics() {
        let metrics = FontMetrics {
            units_per_em: 1000,
            ascent: 750,
            descent: -250,
            line_gap: 0,
        };
        let theme = Theme::dark().with_glyph_metrics(metrics);
        assert_eq!(theme.field.glyph_metrics, metrics);
        assert_eq!(theme.surface(), theme.field.background_color);
    }
}
