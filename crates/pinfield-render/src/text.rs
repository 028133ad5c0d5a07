//! Font metrics and text drawing parameters.
//!
//! Widgets in this workspace only draw short runs of text (a single glyph
//! per slot), so text handling is limited to what is needed to position a
//! run against a baseline: the vertical metrics of a face and a pixel size.
//! Shaping and rasterization are left to the [`Renderer`](crate::Renderer)
//! backend.

use crate::error::{RenderError, RenderResult};

/// Vertical metrics of a font face, in font units.
///
/// Follows the usual font-file convention: `ascent` is positive (above the
/// baseline) and `descent` is typically negative (below the baseline).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    pub units_per_em: u16,
    /// Baseline to the top of the tallest glyph.
    pub ascent: i16,
    /// Baseline to the lowest descender; negative for nearly every face.
    pub descent: i16,
    /// Extra leading the face asks for between lines.
    pub line_gap: i16,
}

impl FontMetrics {
    /// Metrics of a typical sans-serif UI face, used when no font data
    /// has been loaded.
    pub const DEFAULT_SANS: Self = Self {
        units_per_em: 2048,
        ascent: 1900,
        descent: -500,
        line_gap: 0,
    };

    /// Read the vertical metrics of the face at `index` in `data`.
    ///
    /// `data` may be a single font file or a font collection.
    pub fn from_font_data(data: &[u8], index: u32) -> RenderResult<Self> {
        let face = ttf_parser::Face::parse(data, index)?;
        let units_per_em = face.units_per_em();
        if units_per_em == 0 {
            return Err(RenderError::InvalidUnitsPerEm(units_per_em));
        }

        let metrics = Self {
            units_per_em,
            ascent: face.ascender(),
            descent: face.descender(),
            line_gap: face.line_gap(),
        };
        tracing::debug!(
            target: "pinfield_render",
            units_per_em,
            ascent = metrics.ascent,
            descent = metrics.descent,
            "loaded font metrics"
        );
        Ok(metrics)
    }

    /// `ascent - descent + line_gap`, in font units.
    pub fn line_height(&self) -> i16 {
        self.ascent - self.descent + self.line_gap
    }

    /// Font units to pixels at `font_size` pixels per em.
    pub fn scale_to_pixels(&self, font_units: i16, font_size: f32) -> f32 {
        font_units as f32 * font_size / self.units_per_em as f32
    }

    pub fn ascent_px(&self, font_size: f32) -> f32 {
        self.scale_to_pixels(self.ascent, font_size)
    }

    pub fn descent_px(&self, font_size: f32) -> f32 {
        self.scale_to_pixels(self.descent, font_size)
    }

    pub fn line_height_px(&self, font_size: f32) -> f32 {
        self.scale_to_pixels(self.line_height(), font_size)
    }

    /// Baseline y that vertically centers a line of text on `center_y`.
    ///
    /// The glyph box spans `ascent_px` above and `-descent_px` below the
    /// baseline, so the box midpoint sits `(ascent_px + descent_px) / 2`
    /// above it.
    pub fn centered_baseline(&self, center_y: f32, font_size: f32) -> f32 {
        center_y + (self.ascent_px(font_size) + self.descent_px(font_size)) / 2.0
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::DEFAULT_SANS
    }
}

/// A font at a particular pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub metrics: FontMetrics,
    /// Pixels per em.
    pub size: f32,
}

impl Font {
    pub const fn new(metrics: FontMetrics, size: f32) -> Self {
        Self { metrics, size }
    }

    #[inline]
    pub fn ascent(&self) -> f32 {
        self.metrics.ascent_px(self.size)
    }

    /// Usually negative.
    #[inline]
    pub fn descent(&self) -> f32 {
        self.metrics.descent_px(self.size)
    }

    /// Baseline y that vertically centers text on `center_y`.
    #[inline]
    pub fn centered_baseline(&self, center_y: f32) -> f32 {
        self.metrics.centered_baseline(center_y, self.size)
    }
}

/// Horizontal alignment of a text run relative to its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum TextAlign {
    /// The run starts at the origin.
    #[default]
    Left,
    /// The run is centered on the origin.
    Center,
    /// The run ends at the origin.
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_scaling() {
        let metrics = FontMetrics {
            units_per_em: 1000,
            ascent: 800,
            descent: -200,
            line_gap: 100,
        };
        assert_eq!(metrics.ascent_px(10.0), 8.0);
        assert_eq!(metrics.descent_px(10.0), -2.0);
        assert_eq!(metrics.line_height(), 1100);
        assert_eq!(metrics.line_height_px(10.0), 11.0);
    }

    #[test]
    fn baseline_centers_glyph_box() {
        let font = Font::new(
            FontMetrics {
                units_per_em: 1000,
                ascent: 800,
                descent: -200,
                line_gap: 0,
            },
            20.0,
        );
        // ascent 16, descent -4: glyph box midpoint is 6 above the baseline
        let baseline = font.centered_baseline(50.0);
        assert_eq!(baseline, 56.0);
        let top = baseline - font.ascent();
        let bottom = baseline - font.descent();
        assert_eq!((top + bottom) / 2.0, 50.0);
    }

    #[test]
    fn garbage_font_data_is_rejected() {
        let result = FontMetrics::from_font_data(b"not a font", 0);
        assert!(matches!(result, Err(RenderError::FontParse(_))));
    }

    #[test]
    fn test_default_metrics() {
        let metrics = FontMetrics::default();
        assert_eq!(metrics, FontMetrics::DEFAULT_SANS);
        assert!(metrics.ascent > 0);
        assert!(metrics.descent < 0);
    }
}
