//! Declaration block parser using the `cssparser` crate.
//!
//! Field attributes are written as the body of a CSS rule:
//!
//! ```text
//! slot-count: 4;
//! border-color: #cccccc;
//! border-color-focus: #007aff;
//! border-width: 2px;
//! display-password: false
//! ```

use cssparser::{Delimiter, ParseError, ParseErrorKind, Parser, ParserInput};
use pinfield_core::logging::targets;

use super::DeclarationError;
use super::values::{parse_bool, parse_color, parse_integer, parse_length};
use crate::attributes::{Attribute, AttributeSet};
use crate::error::StyleResult;

/// Parse a declaration block into an [`AttributeSet`].
///
/// Unknown properties and malformed values are logged via `tracing::warn!`
/// and skipped, so the attribute falls back to its default. Values that are
/// well-formed but out of range for their attribute (a fractional slot
/// count) are returned as
/// [`StyleError::InvalidValue`](crate::StyleError::InvalidValue). A later
/// declaration of the same attribute replaces an earlier one.
///
/// # Example
///
/// ```
/// use pinfield_style::parser::parse_attributes;
///
/// let attrs = parse_attributes("passwordLength: 4; borderWidth: 2px").unwrap();
/// assert_eq!(attrs.slot_count, Some(4));
/// assert_eq!(attrs.border_width, Some(2.0));
/// ```
pub fn parse_attributes(css: &str) -> StyleResult<AttributeSet> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut attrs = AttributeSet::default();

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        let result = parser.parse_until_after(Delimiter::Semicolon, |p| {
            parse_declaration(p, &mut attrs)
        });

        let Err(error) = result else {
            continue;
        };

        let line = error.location.line + 1;
        let column = error.location.column;
        let message = match error.kind {
            ParseErrorKind::Custom(DeclarationError::Invalid(err)) => return Err(err),
            ParseErrorKind::Custom(DeclarationError::UnknownProperty(name)) => {
                format!("unknown property '{}'", name)
            }
            ParseErrorKind::Custom(DeclarationError::Malformed(message)) => message,
            ParseErrorKind::Basic(kind) => format!("{:?}", kind),
        };

        tracing::warn!(
            target: targets::STYLE,
            line,
            column,
            "skipping attribute declaration: {}",
            message
        );
    }

    tracing::debug!(target: targets::STYLE, declared = attrs.len(), "parsed attributes");
    Ok(attrs)
}

/// Parse a single `name: value` declaration into `attrs`.
fn parse_declaration<'i>(
    parser: &mut Parser<'i, '_>,
    attrs: &mut AttributeSet,
) -> Result<(), ParseError<'i, DeclarationError>> {
    if parser.is_exhausted() {
        return Ok(());
    }

    let location = parser.current_source_location();
    let name = parser.expect_ident()?.clone();
    parser.expect_colon()?;

    let Some(attribute) = Attribute::from_name(&name) else {
        return Err(location.new_custom_error(DeclarationError::UnknownProperty(
            name.to_string(),
        )));
    };

    // Nothing is stored until the whole value has been consumed.
    let mut declared = AttributeSet::default();
    parser.skip_whitespace();
    match attribute {
        Attribute::SlotCount => declared.slot_count = Some(parse_integer(parser, attribute)?),
        Attribute::BorderColor => declared.border_color = Some(parse_color(parser)?),
        Attribute::BorderColorFocus => declared.border_color_focus = Some(parse_color(parser)?),
        Attribute::BorderWidth => declared.border_width = Some(parse_length(parser)?),
        Attribute::BorderRadius => declared.border_radius = Some(parse_length(parser)?),
        Attribute::DividerColor => declared.divider_color = Some(parse_color(parser)?),
        Attribute::DividerColorFocus => {
            declared.divider_color_focus = Some(parse_color(parser)?)
        }
        Attribute::GlyphColor => declared.glyph_color = Some(parse_color(parser)?),
        Attribute::GlyphWidth => declared.glyph_width = Some(parse_length(parser)?),
        Attribute::GlyphRadius => declared.glyph_radius = Some(parse_length(parser)?),
        Attribute::GlyphSize => declared.glyph_size = Some(parse_length(parser)?),
        Attribute::BackgroundColor => declared.background_color = Some(parse_color(parser)?),
        Attribute::DisplayPassword => declared.display_password = Some(parse_bool(parser)?),
    }
    parser.expect_exhausted()?;

    attrs.merge(&declared);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StyleError;
    use pinfield_render::Color;

    #[test]
    fn parse_kebab_case_block() {
        let attrs = parse_attributes(
            "slot-count: 4; border-color: #cccccc; border-color-focus: #007aff; \
             border-width: 2px; border-radius: 8px; glyph-radius: 6px; \
             background-color: white; display-password: true",
        )
        .unwrap();

        assert_eq!(attrs.slot_count, Some(4));
        assert_eq!(attrs.border_color, Color::from_hex("#cccccc"));
        assert_eq!(attrs.border_color_focus, Color::from_hex("#007aff"));
        assert_eq!(attrs.border_width, Some(2.0));
        assert_eq!(attrs.border_radius, Some(8.0));
        assert_eq!(attrs.glyph_radius, Some(6.0));
        assert_eq!(attrs.background_color, Some(Color::WHITE));
        assert_eq!(attrs.display_password, Some(true));
        assert_eq!(attrs.divider_color, None);
    }

    #[test]
    fn parse_camel_case_aliases() {
        let attrs = parse_attributes(
            "displayPassword: false;\n\
             passwordLength: 5;\n\
             passwordColor: #000;\n\
             passwordWidth: 1px;\n\
             passwordRadius: 4px;",
        )
        .unwrap();

        assert_eq!(attrs.display_password, Some(false));
        assert_eq!(attrs.slot_count, Some(5));
        assert_eq!(attrs.glyph_color, Some(Color::BLACK));
        assert_eq!(attrs.glyph_width, Some(1.0));
        assert_eq!(attrs.glyph_radius, Some(4.0));
    }

    #[test]
    fn skips_unknown_and_malformed_declarations() {
        let attrs = parse_attributes(
            "color: red; border-width: ; slot-count: 4; border-radius: 3em; \
             glyph-color: #00ff00 extra; border-color: blue",
        )
        .unwrap();

        assert_eq!(attrs.slot_count, Some(4));
        assert_eq!(attrs.border_width, None);
        assert_eq!(attrs.border_radius, None);
        assert_eq!(attrs.glyph_color, None);
        assert_eq!(attrs.border_color, Some(Color::BLUE));
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn later_declaration_wins() {
        let attrs = parse_attributes("slot-count: 4; passwordLength: 8").unwrap();
        assert_eq!(attrs.slot_count, Some(8));
    }

    #[test]
    fn empty_block() {
        assert!(parse_attributes("").unwrap().is_empty());
        assert!(parse_attributes("  ;; ").unwrap().is_empty());
    }

    #[test]
    fn fractional_slot_count_is_invalid() {
        let err = parse_attributes("slot-count: 2.5").unwrap_err();
        assert!(matches!(err, StyleError::InvalidValue { ref property, .. } if property == "slot-count"));
    }
}
