//! CSS Identifiers (keywords such as `auto`, `none`, `row`, `space-between`)
//! Spec: <https://www.w3.org/TR/CSS2/syndata.html#value-def-identifier>

use crate::ParseError;
use cssparser::{Parser, ParserInput, Token};

/// A CSS identifier value, lowercased for canonicalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ident(pub String);

impl Ident {
    /// Borrow the canonical (lowercase) keyword text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parse a CSS identifier token.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not an identifier.
#[inline]
pub fn parse_ident(input: &mut Parser) -> Result<Ident, ParseError> {
    input.next().map_or(Err(ParseError::UnexpectedToken), |token| {
        if let Token::Ident(text) = token {
            Ok(Ident(text.to_ascii_lowercase()))
        } else {
            Err(ParseError::UnexpectedToken)
        }
    })
}

/// Parse a whole string as exactly one identifier.
///
/// Surrounding whitespace is ignored; anything after the keyword is rejected.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the string does not start with an identifier
/// and `ParseError::TrailingInput` when more tokens follow it.
#[inline]
pub fn parse_ident_str(raw: &str) -> Result<Ident, ParseError> {
    let mut input = ParserInput::new(raw);
    let mut parser = Parser::new(&mut input);
    let ident = parse_ident(&mut parser)?;
    parser
        .expect_exhausted()
        .map_err(|_| ParseError::TrailingInput)?;
    Ok(ident)
}
