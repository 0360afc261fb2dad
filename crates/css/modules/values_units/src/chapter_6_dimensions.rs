//! CSS Values & Units Level 3: §6 Dimensions (Lengths subset)
//! Spec: <https://www.w3.org/TR/css-values-3/#lengths>

use crate::ParseError;
use cssparser::{Parser, ParserInput, Token};

/// Font size browsers fall back to when no font metric is available.
pub const DEFAULT_FONT_SIZE_PX: f32 = 16.0;

/// Supported subset of CSS <length>: absolute units, em, rem, plus bare numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthUnit {
    Pixels,
    Points,
    Picas,
    Inches,
    Centimeters,
    Millimeters,
    /// Relative to the parent's font size.
    Ems,
    /// Relative to the root element's font size.
    RootEms,
}

impl LengthUnit {
    /// Map a unit suffix to a `LengthUnit`. Case-insensitive.
    #[inline]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_ascii_lowercase().as_str() {
            "px" => Some(Self::Pixels),
            "pt" => Some(Self::Points),
            "pc" => Some(Self::Picas),
            "in" => Some(Self::Inches),
            "cm" => Some(Self::Centimeters),
            "mm" => Some(Self::Millimeters),
            "em" => Some(Self::Ems),
            "rem" => Some(Self::RootEms),
            _ => None,
        }
    }

    /// Fixed px-per-unit factor for absolute units (§6.2); `None` for font-relative units.
    #[inline]
    pub const fn absolute_factor(self) -> Option<f32> {
        match self {
            Self::Pixels => Some(1.0),
            Self::Points => Some(96.0 / 72.0),
            Self::Picas => Some(16.0),
            Self::Inches => Some(96.0),
            Self::Centimeters => Some(96.0 / 2.54),
            Self::Millimeters => Some(96.0 / 25.4),
            Self::Ems | Self::RootEms => None,
        }
    }
}

/// A CSS <length> value with unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

/// Font metrics that font-relative units resolve against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontContext {
    /// Font size `em` resolves against: the parent's computed font size.
    pub font_size_px: f32,
    /// Font size of the layout root, used by `rem`.
    pub root_font_size_px: f32,
}

impl Default for FontContext {
    #[inline]
    fn default() -> Self {
        Self {
            font_size_px: DEFAULT_FONT_SIZE_PX,
            root_font_size_px: DEFAULT_FONT_SIZE_PX,
        }
    }
}

/// Compute the pixel value for a given `Length` using the current font environment.
///
/// - Absolute units: scale by their fixed factor.
/// - Ems/RootEms: scale by the provided font sizes.
#[inline]
pub fn compute_length_px(length: Length, fonts: FontContext) -> f32 {
    match length.unit.absolute_factor() {
        Some(factor) => length.value * factor,
        None if length.unit == LengthUnit::RootEms => length.value * fonts.root_font_size_px,
        None => length.value * fonts.font_size_px,
    }
}

/// Parse a CSS <length> (§6.2). Bare numbers are accepted and read as pixels.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a supported `<length>`.
pub fn parse_length(input: &mut Parser) -> Result<Length, ParseError> {
    match input.next() {
        Ok(Token::Dimension { value, unit, .. }) => LengthUnit::from_suffix(unit)
            .map(|unit_kind| Length {
                value: *value,
                unit: unit_kind,
            })
            .ok_or(ParseError::UnexpectedToken),
        Ok(Token::Number { value, .. }) => Ok(Length {
            value: *value,
            unit: LengthUnit::Pixels,
        }),
        Ok(_) | Err(_) => Err(ParseError::UnexpectedToken),
    }
}

/// Parse a whole string as exactly one `<length>`.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the value is not a length and
/// `ParseError::TrailingInput` when tokens follow it.
pub fn parse_length_str(raw: &str) -> Result<Length, ParseError> {
    let mut input = ParserInput::new(raw);
    let mut parser = Parser::new(&mut input);
    let length = parse_length(&mut parser)?;
    parser
        .expect_exhausted()
        .map_err(|_| ParseError::TrailingInput)?;
    Ok(length)
}

/// Resolve a declared length to whole pixels, truncating toward zero.
///
/// Returns `None` when the value is not a recognized length (keywords such as `auto`,
/// percentages, empty strings) or does not resolve to a finite number.
#[inline]
pub fn resolve_length(raw: &str, fonts: FontContext) -> Option<i32> {
    let length = parse_length_str(raw).ok()?;
    let pixels = compute_length_px(length, fonts);
    pixels.is_finite().then(|| pixels.trunc() as i32)
}

/// Resolve a declared length, falling back to `default` when it cannot be resolved.
#[inline]
pub fn resolve_length_or(raw: &str, fonts: FontContext, default: i32) -> i32 {
    resolve_length(raw, fonts).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fonts(parent: f32, root: f32) -> FontContext {
        FontContext {
            font_size_px: parent,
            root_font_size_px: root,
        }
    }

    #[test]
    /// # Panics
    /// Panics if absolute units do not resolve through their fixed factors.
    fn absolute_units_use_fixed_factors() {
        let ctx = FontContext::default();
        assert_eq!(resolve_length("12px", ctx), Some(12));
        assert_eq!(resolve_length("12.9px", ctx), Some(12));
        assert_eq!(resolve_length("1in", ctx), Some(96));
        assert_eq!(resolve_length("3pt", ctx), Some(4));
        assert_eq!(resolve_length("1pc", ctx), Some(16));
        assert_eq!(resolve_length("2cm", ctx), Some(75));
        assert_eq!(resolve_length("10mm", ctx), Some(37));
        assert_eq!(resolve_length("-4px", ctx), Some(-4));
    }

    #[test]
    /// # Panics
    /// Panics if `em` and `rem` resolve against the wrong font metric.
    fn font_relative_units_pick_their_reference() {
        let ctx = fonts(10.0, 20.0);
        assert_eq!(resolve_length("2em", ctx), Some(20));
        assert_eq!(resolve_length("2rem", ctx), Some(40));
        assert_eq!(resolve_length("1.5EM", ctx), Some(15));
    }

    #[test]
    /// # Panics
    /// Panics if bare numbers are not treated as pixels.
    fn bare_numbers_are_pixels() {
        assert_eq!(resolve_length("42", FontContext::default()), Some(42));
        assert_eq!(resolve_length(" 7 ", FontContext::default()), Some(7));
    }

    #[test]
    /// # Panics
    /// Panics if unparseable input does not fall back to the supplied default.
    fn unparseable_falls_back() {
        let ctx = FontContext::default();
        assert_eq!(resolve_length("auto", ctx), None);
        assert_eq!(resolve_length("50%", ctx), None);
        assert_eq!(resolve_length("10vw", ctx), None);
        assert_eq!(resolve_length("", ctx), None);
        assert_eq!(resolve_length_or("none", ctx, 5), 5);
        assert_eq!(resolve_length_or("10px 2px", ctx, 0), 0);
    }
}
