//! CSS Values and Units Module Level 3: the subset needed to resolve declared
//! lengths into whole pixels.
//! Spec: <https://www.w3.org/TR/css-values-3/>

#![forbid(unsafe_code)]

// Per-chapter modules mirroring the CSS Values and Units table of contents.
pub mod chapter_3_identifiers;
pub mod chapter_4_numbers;
pub mod chapter_6_dimensions;

use core::fmt;

// Re-exports for ergonomic access from other crates.
pub use chapter_3_identifiers::{Ident, parse_ident, parse_ident_str};
pub use chapter_4_numbers::{Number, parse_integer_str, parse_number, parse_number_str};
pub use chapter_6_dimensions::{
    DEFAULT_FONT_SIZE_PX, FontContext, Length, LengthUnit, compute_length_px, parse_length,
    parse_length_str, resolve_length, resolve_length_or,
};

/// Parse error for Values & Units parsing utilities in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The next token did not match the expected grammar.
    UnexpectedToken,
    /// A value parsed, but input remained after it.
    TrailingInput,
}

impl fmt::Display for ParseError {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken => formatter.write_str("unexpected token"),
            Self::TrailingInput => formatter.write_str("unexpected trailing input"),
        }
    }
}

impl core::error::Error for ParseError {}
