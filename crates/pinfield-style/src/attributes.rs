//! Field attributes and their names.
//!
//! An [`AttributeSet`] holds the attributes a field was declared with. Each
//! attribute is optional; anything left unset falls back to the theme's
//! [`FieldDefaults`](crate::theme::FieldDefaults) when the set is resolved.

use pinfield_render::Color;

use crate::error::StyleResult;

/// A recognized field attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// `slot-count` / `passwordLength`
    SlotCount,
    /// `border-color` / `borderColor`
    BorderColor,
    /// `border-color-focus` / `borderColorFocus`
    BorderColorFocus,
    /// `border-width` / `borderWidth`
    BorderWidth,
    /// `border-radius` / `borderRadius`
    BorderRadius,
    /// `divider-color` / `dividerColor`
    DividerColor,
    /// `divider-color-focus` / `dividerColorFocus`
    DividerColorFocus,
    /// `glyph-color` / `passwordColor`
    GlyphColor,
    /// `glyph-width` / `passwordWidth`
    GlyphWidth,
    /// `glyph-radius` / `passwordRadius`
    GlyphRadius,
    /// `glyph-size`
    GlyphSize,
    /// `background-color` / `backgroundColor`
    BackgroundColor,
    /// `display-password` / `displayPassword`
    DisplayPassword,
}

impl Attribute {
    /// Every attribute, in declaration order.
    pub const ALL: [Attribute; 13] = [
        Attribute::SlotCount,
        Attribute::BorderColor,
        Attribute::BorderColorFocus,
        Attribute::BorderWidth,
        Attribute::BorderRadius,
        Attribute::DividerColor,
        Attribute::DividerColorFocus,
        Attribute::GlyphColor,
        Attribute::GlyphWidth,
        Attribute::GlyphRadius,
        Attribute::GlyphSize,
        Attribute::BackgroundColor,
        Attribute::DisplayPassword,
    ];

    /// Look up an attribute by its kebab-case name or camelCase alias.
    pub fn from_name(name: &str) -> Option<Self> {
        let attribute = match name {
            "slot-count" | "passwordLength" => Self::SlotCount,
            "border-color" | "borderColor" => Self::BorderColor,
            "border-color-focus" | "borderColorFocus" => Self::BorderColorFocus,
            "border-width" | "borderWidth" => Self::BorderWidth,
            "border-radius" | "borderRadius" => Self::BorderRadius,
            "divider-color" | "dividerColor" => Self::DividerColor,
            "divider-color-focus" | "dividerColorFocus" => Self::DividerColorFocus,
            "glyph-color" | "passwordColor" => Self::GlyphColor,
            "glyph-width" | "passwordWidth" => Self::GlyphWidth,
            "glyph-radius" | "passwordRadius" => Self::GlyphRadius,
            "glyph-size" | "glyphSize" => Self::GlyphSize,
            "background-color" | "backgroundColor" => Self::BackgroundColor,
            "display-password" | "displayPassword" | "displayPassWord" => Self::DisplayPassword,
            _ => return None,
        };
        Some(attribute)
    }

    /// The canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::SlotCount => "slot-count",
            Self::BorderColor => "border-color",
            Self::BorderColorFocus => "border-color-focus",
            Self::BorderWidth => "border-width",
            Self::BorderRadius => "border-radius",
            Self::DividerColor => "divider-color",
            Self::DividerColorFocus => "divider-color-focus",
            Self::GlyphColor => "glyph-color",
            Self::GlyphWidth => "glyph-width",
            Self::GlyphRadius => "glyph-radius",
            Self::GlyphSize => "glyph-size",
            Self::BackgroundColor => "background-color",
            Self::DisplayPassword => "display-password",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Attributes explicitly declared for a field.
///
/// Values are stored as declared; range checks happen at resolution time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
    pub slot_count: Option<i64>,
    pub border_color: Option<Color>,
    pub border_color_focus: Option<Color>,
    pub border_width: Option<f32>,
    pub border_radius: Option<f32>,
    pub divider_color: Option<Color>,
    pub divider_color_focus: Option<Color>,
    pub glyph_color: Option<Color>,
    pub glyph_width: Option<f32>,
    pub glyph_radius: Option<f32>,
    pub glyph_size: Option<f32>,
    pub background_color: Option<Color>,
    pub display_password: Option<bool>,
}

impl AttributeSet {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a declaration block, skipping malformed declarations.
    ///
    /// See [`parse_attributes`](crate::parser::parse_attributes).
    pub fn parse(css: &str) -> StyleResult<Self> {
        crate::parser::parse_attributes(css)
    }

    /// Whether `attribute` has been declared.
    pub fn is_set(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::SlotCount => self.slot_count.is_some(),
            Attribute::BorderColor => self.border_color.is_some(),
            Attribute::BorderColorFocus => self.border_color_focus.is_some(),
            Attribute::BorderWidth => self.border_width.is_some(),
            Attribute::BorderRadius => self.border_radius.is_some(),
            Attribute::DividerColor => self.divider_color.is_some(),
            Attribute::DividerColorFocus => self.divider_color_focus.is_some(),
            Attribute::GlyphColor => self.glyph_color.is_some(),
            Attribute::GlyphWidth => self.glyph_width.is_some(),
            Attribute::GlyphRadius => self.glyph_radius.is_some(),
            Attribute::GlyphSize => self.glyph_size.is_some(),
            Attribute::BackgroundColor => self.background_color.is_some(),
            Attribute::DisplayPassword => self.display_password.is_some(),
        }
    }

    /// Number of declared attributes.
    pub fn len(&self) -> usize {
        Attribute::ALL.iter().filter(|a| self.is_set(**a)).count()
    }

    /// Whether no attribute has been declared.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Overlay `other` on top of this set: attributes declared in `other`
    /// replace the ones here.
    pub fn merge(&mut self, other: &AttributeSet) {
        fn overlay<T: Copy>(dst: &mut Option<T>, src: Option<T>) {
            if src.is_some() {
                *dst = src;
            }
        }
        overlay(&mut self.slot_count, other.slot_count);
        overlay(&mut self.border_color, other.border_color);
        overlay(&mut self.border_color_focus, other.border_color_focus);
        overlay(&mut self.border_width, other.border_width);
        overlay(&mut self.border_radius, other.border_radius);
        overlay(&mut self.divider_color, other.divider_color);
        overlay(&mut self.divider_color_focus, other.divider_color_focus);
        overlay(&mut self.glyph_color, other.glyph_color);
        overlay(&mut self.glyph_width, other.glyph_width);
        overlay(&mut self.glyph_radius, other.glyph_radius);
        overlay(&mut self.glyph_size, other.glyph_size);
        overlay(&mut self.background_color, other.background_color);
        overlay(&mut self.display_password, other.display_password);
    }
}
