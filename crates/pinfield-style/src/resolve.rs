//! Overlay resolution of declared attributes onto theme defaults.

use pinfield_core::logging::targets;
use pinfield_render::{Color, FontMetrics};

use crate::attributes::{Attribute, AttributeSet};
use crate::error::{StyleError, StyleResult};
use crate::theme::FieldDefaults;

/// The fully resolved, validated style of a slot field.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotFieldStyle {
    /// Number of character slots, at least 1.
    pub slot_count: u32,
    /// Border color when unfocused.
    pub border_color: Color,
    /// Border color when focused.
    pub border_color_focus: Color,
    /// Divider line color when unfocused.
    pub divider_color: Color,
    /// Divider line color when focused.
    pub divider_color_focus: Color,
    /// Border stroke width; the inner rect is inset by this much.
    pub border_width: f32,
    /// Corner radius shared by the outer and inner rects.
    pub border_radius: f32,
    /// Dot and revealed-text color.
    pub glyph_color: Color,
    /// Glyph stroke width.
    pub glyph_width: f32,
    /// Dot radius in masked mode.
    pub glyph_radius: f32,
    /// Text size in reveal mode.
    pub glyph_size: f32,
    /// Inner content area color.
    pub background_color: Color,
    /// Reveal characters instead of masking them.
    pub display_password: bool,
    /// Metrics used to center revealed text.
    pub glyph_metrics: FontMetrics,
}

impl SlotFieldStyle {
    /// Build a style from defaults alone.
    pub fn from_defaults(defaults: &FieldDefaults) -> StyleResult<Self> {
        Self::resolve(&AttributeSet::default(), defaults)
    }

    /// Resolve `attrs` over `defaults` and validate the result.
    ///
    /// Each attribute takes its declared value if present, otherwise the
    /// default. Divider colors with no declaration of their own follow a
    /// declared border color before falling back to the divider default.
    pub fn resolve(attrs: &AttributeSet, defaults: &FieldDefaults) -> StyleResult<Self> {
        let slot_count = match attrs.slot_count {
            Some(n) => u32::try_from(n).map_err(|_| {
                StyleError::invalid_value(
                    Attribute::SlotCount.name(),
                    format!("{} is out of range", n),
                )
            })?,
            None => defaults.slot_count,
        };

        let style = Self {
            slot_count,
            border_color: attrs.border_color.unwrap_or(defaults.border_color),
            border_color_focus: attrs
                .border_color_focus
                .unwrap_or(defaults.border_color_focus),
            divider_color: attrs
                .divider_color
                .or(attrs.border_color)
                .unwrap_or(defaults.divider_color),
            divider_color_focus: attrs
                .divider_color_focus
                .or(attrs.border_color_focus)
                .unwrap_or(defaults.divider_color_focus),
            border_width: attrs.border_width.unwrap_or(defaults.border_width),
            border_radius: attrs.border_radius.unwrap_or(defaults.border_radius),
            glyph_color: attrs.glyph_color.unwrap_or(defaults.glyph_color),
            glyph_width: attrs.glyph_width.unwrap_or(defaults.glyph_width),
            glyph_radius: attrs.glyph_radius.unwrap_or(defaults.glyph_radius),
            glyph_size: attrs.glyph_size.unwrap_or(defaults.glyph_size),
            background_color: attrs.background_color.unwrap_or(defaults.background_color),
            display_password: attrs.display_password.unwrap_or(defaults.display_password),
            glyph_metrics: defaults.glyph_metrics,
        };
        style.validate()?;

        tracing::debug!(
            target: targets::STYLE,
            slot_count = style.slot_count,
            border_width = style.border_width,
            display_password = style.display_password,
            overrides = attrs.len(),
            "resolved slot field style"
        );
        Ok(style)
    }

    /// Check every range constraint.
    pub fn validate(&self) -> StyleResult<()> {
        validate_slot_count(self.slot_count)?;
        validate_dimension(Attribute::BorderWidth, self.border_width)?;
        validate_dimension(Attribute::BorderRadius, self.border_radius)?;
        validate_dimension(Attribute::GlyphWidth, self.glyph_width)?;
        validate_dimension(Attribute::GlyphRadius, self.glyph_radius)?;
        validate_dimension(Attribute::GlyphSize, self.glyph_size)?;
        if self.glyph_metrics.units_per_em == 0 {
            return Err(StyleError::invalid_value(
                "glyph-metrics",
                "units per em must be non-zero",
            ));
        }
        Ok(())
    }
}

/// Check that a slot count is usable.
pub fn validate_slot_count(slot_count: u32) -> StyleResult<()> {
    if slot_count == 0 {
        return Err(StyleError::invalid_value(
            Attribute::SlotCount.name(),
            "must be at least 1",
        ));
    }
    Ok(())
}

/// Check that a width, radius or size is finite and non-negative.
pub fn validate_dimension(attribute: Attribute, value: f32) -> StyleResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(StyleError::invalid_value(
            attribute.name(),
            format!("{} must be a non-negative length", value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_attributes;
    use crate::theme::Theme;

    #[test]
    fn empty_attributes_use_defaults() {
        let defaults = Theme::light().field;
        let style = SlotFieldStyle::from_defaults(&defaults).unwrap();

        assert_eq!(style.slot_count, defaults.slot_count);
        assert_eq!(style.border_color, defaults.border_color);
        assert_eq!(style.divider_color, defaults.divider_color);
        assert_eq!(style.divider_color_focus, defaults.divider_color_focus);
        assert_eq!(style.background_color, Color::WHITE);
        assert_eq!(style.glyph_radius, defaults.glyph_radius);
    }

    #[test]
    fn declared_attributes_override_defaults() {
        let defaults = Theme::dark().field;
        let attrs = parse_attributes("slot-count: 4; glyph-radius: 3px; display-password: true").unwrap();
        let style = SlotFieldStyle::resolve(&attrs, &defaults).unwrap();

        assert_eq!(style.slot_count, 4);
        assert_eq!(style.glyph_radius, 3.0);
        assert!(style.display_password);
        assert_eq!(style.border_width, defaults.border_width);
        assert_eq!(style.glyph_color, defaults.glyph_color);
    }

    #[test]
    fn divider_follows_border_color() {
        let defaults = FieldDefaults::default();
        let attrs = parse_attributes("borderColor: red; borderColorFocus: blue").unwrap();
        let style = SlotFieldStyle::resolve(&attrs, &defaults).unwrap();

        assert_eq!(style.divider_color, Color::RED);
        assert_eq!(style.divider_color_focus, Color::BLUE);

        let attrs = parse_attributes("border-color: red; divider-color: green").unwrap();
        let style = SlotFieldStyle::resolve(&attrs, &defaults).unwrap();
        assert_eq!(style.border_color, Color::RED);
        assert_eq!(style.divider_color, Color::GREEN);
        assert_eq!(style.divider_color_focus, defaults.divider_color_focus);
    }

    #[test]
    fn zero_and_negative_slot_counts_rejected() {
        let defaults = FieldDefaults::default();
        for css in ["slot-count: 0", "slot-count: -3"] {
            let attrs = parse_attributes(css).unwrap();
            let err = SlotFieldStyle::resolve(&attrs, &defaults).unwrap_err();
            assert_eq!(err.property(), "slot-count", "{css}");
        }
    }

    #[test]
    fn negative_dimensions_rejected() {
        let defaults = FieldDefaults::default();
        let attrs = parse_attributes("border-width: -1px").unwrap();
        let err = SlotFieldStyle::resolve(&attrs, &defaults).unwrap_err();
        assert_eq!(err.property(), "border-width");

        let mut defaults = FieldDefaults::default();
        defaults.glyph_radius = f32::NAN;
        assert!(SlotFieldStyle::from_defaults(&defaults).is_err());
    }

    #[test]
    fn zero_slot_count_default_rejected() {
        let mut defaults = FieldDefaults::default();
        defaults.slot_count = 0;
        assert!(SlotFieldStyle::from_defaults(&defaults).is_err());
        assert!(validate_slot_count(1).is_ok());
    }
}
