//! Attribute value parsers.

use cssparser::{ParseError, Parser, Token};
use pinfield_render::Color;

use super::DeclarationError;
use crate::attributes::Attribute;
use crate::error::StyleError;

type ValueResult<'i, T> = Result<T, ParseError<'i, DeclarationError>>;

/// Parse a color: `#rgb`, `#rrggbb`, `#rrggbbaa`, a named color, or
/// `rgb()`/`rgba()`.
pub(crate) fn parse_color<'i>(parser: &mut Parser<'i, '_>) -> ValueResult<'i, Color> {
    let location = parser.current_source_location();
    let token = parser.next()?.clone();

    match token {
        Token::Hash(ref hash) | Token::IDHash(ref hash) => Color::from_hex(hash).ok_or_else(|| {
            location.new_custom_error(DeclarationError::Malformed(format!(
                "invalid hex color '#{}'",
                hash
            )))
        }),
        Token::Ident(ref name) => named_color(name).ok_or_else(|| {
            location.new_custom_error(DeclarationError::Malformed(format!(
                "unknown color name '{}'",
                name
            )))
        }),
        Token::Function(ref name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            let (r, g, b, a) = parser.parse_nested_block(|p| {
                let r = parse_color_component(p)?;
                p.expect_comma()?;
                let g = parse_color_component(p)?;
                p.expect_comma()?;
                let b = parse_color_component(p)?;
                let a = if p.try_parse(|p| p.expect_comma()).is_ok() {
                    parse_alpha_component(p)?
                } else {
                    1.0
                };
                p.expect_exhausted()?;
                Ok((r, g, b, a))
            })?;
            Ok(Color::from_rgba(r, g, b, a))
        }
        _ => Err(location.new_unexpected_token_error(token)),
    }
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name.to_ascii_lowercase().as_str() {
        "transparent" => Color::TRANSPARENT,
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "red" => Color::RED,
        "green" => Color::GREEN,
        "blue" => Color::BLUE,
        "gray" | "grey" => Color::GRAY,
        "lightgray" | "lightgrey" => Color::LIGHT_GRAY,
        "darkgray" | "darkgrey" => Color::DARK_GRAY,
        _ => return None,
    };
    Some(color)
}

fn parse_color_component<'i>(parser: &mut Parser<'i, '_>) -> ValueResult<'i, f32> {
    let location = parser.current_source_location();
    match parser.next()?.clone() {
        Token::Number { value, .. } => Ok((value / 255.0).clamp(0.0, 1.0)),
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        token => Err(location.new_unexpected_token_error(token)),
    }
}

fn parse_alpha_component<'i>(parser: &mut Parser<'i, '_>) -> ValueResult<'i, f32> {
    let location = parser.current_source_location();
    match parser.next()?.clone() {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 1.0)),
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        token => Err(location.new_unexpected_token_error(token)),
    }
}

/// Parse a length in pixels.
///
/// Unitless numbers are pixels. `dp`, `dip` and `sp` are accepted as
/// pixel synonyms since field attributes are often written with them.
pub(crate) fn parse_length<'i>(parser: &mut Parser<'i, '_>) -> ValueResult<'i, f32> {
    let location = parser.current_source_location();
    match parser.next()?.clone() {
        Token::Number { value, .. } => Ok(value),
        Token::Dimension { value, ref unit, .. } => {
            let unit = unit.to_ascii_lowercase();
            match unit.as_str() {
                "px" | "dp" | "dip" | "sp" => Ok(value),
                _ => Err(location.new_custom_error(DeclarationError::Malformed(format!(
                    "unsupported unit '{}'",
                    unit
                )))),
            }
        }
        token => Err(location.new_unexpected_token_error(token)),
    }
}

/// Parse an integer-valued attribute.
///
/// A number with a fractional part is reported as an invalid value rather
/// than a syntax error.
pub(crate) fn parse_integer<'i>(
    parser: &mut Parser<'i, '_>,
    attribute: Attribute,
) -> ValueResult<'i, i64> {
    let location = parser.current_source_location();
    match parser.next()?.clone() {
        Token::Number {
            int_value: Some(v), ..
        } => Ok(i64::from(v)),
        Token::Number { value, .. } => Err(location.new_custom_error(
            DeclarationError::Invalid(StyleError::invalid_value(
                attribute.name(),
                format!("expected an integer, got {}", value),
            )),
        )),
        token => Err(location.new_unexpected_token_error(token)),
    }
}

/// Parse a boolean: `true`/`false` or `1`/`0`.
pub(crate) fn parse_bool<'i>(parser: &mut Parser<'i, '_>) -> ValueResult<'i, bool> {
    let location = parser.current_source_location();
    match parser.next()?.clone() {
        Token::Ident(ref ident) if ident.eq_ignore_ascii_case("true") => Ok(true),
        Token::Ident(ref ident) if ident.eq_ignore_ascii_case("false") => Ok(false),
        Token::Number {
            int_value: Some(1), ..
        } => Ok(true),
        Token::Number {
            int_value: Some(0), ..
        } => Ok(false),
        token => Err(location.new_unexpected_token_error(token)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssparser::ParserInput;

    fn with_parser<T>(css: &str, f: impl for<'i, 't> FnOnce(&mut Parser<'i, 't>) -> Option<T>) -> Option<T> {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        f(&mut parser)
    }

    fn color(css: &str) -> Option<Color> {
        with_parser(css, |p| parse_color(p).ok())
    }

    fn length(css: &str) -> Option<f32> {
        with_parser(css, |p| parse_length(p).ok())
    }

    #[test]
    fn color_formats() {
        assert_eq!(color("#ff0000"), Some(Color::RED));
        assert_eq!(color("#00f"), Some(Color::BLUE));
        assert_eq!(color("White"), Some(Color::WHITE));
        assert_eq!(color("rgb(0, 255, 0)"), Some(Color::GREEN));

        let translucent = color("rgba(255, 0, 0, 0.5)").unwrap();
        assert!((translucent.a - 0.5).abs() < 1e-6);
        assert!((translucent.r - 0.5).abs() < 1e-6);

        assert_eq!(color("#12345"), None);
        assert_eq!(color("chartreuse"), None);
        assert_eq!(color("12"), None);
    }

    #[test]
    fn length_units() {
        assert_eq!(length("2px"), Some(2.0));
        assert_eq!(length("1.5"), Some(1.5));
        assert_eq!(length("4dp"), Some(4.0));
        assert_eq!(length("3em"), None);
        assert_eq!(length("auto"), None);
    }

    #[test]
    fn integers_and_booleans() {
        let n = with_parser("4", |p| parse_integer(p, Attribute::SlotCount).ok());
        assert_eq!(n, Some(4));

        let fractional = with_parser("2.5", |p| match parse_integer(p, Attribute::SlotCount) {
            Err(ParseError {
                kind: cssparser::ParseErrorKind::Custom(DeclarationError::Invalid(err)),
                ..
            }) => Some(err),
            _ => None,
        });
        assert_eq!(fractional.as_ref().map(StyleError::property), Some("slot-count"));

        assert_eq!(with_parser("true", |p| parse_bool(p).ok()), Some(true));
        assert_eq!(with_parser("0", |p| parse_bool(p).ok()), Some(false));
        assert_eq!(with_parser("yes", |p| parse_bool(p).ok()), None);
    }
}
