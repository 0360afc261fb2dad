//! CSS Values & Units Level 3: §4 Numbers
//! Spec: <https://www.w3.org/TR/css-values-3/#numeric-types>

use crate::ParseError;
use cssparser::{Parser, ParserInput, Token};

/// A CSS <number>
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number(pub f32);

/// Parse a CSS <number> (§4.2). Accepts integer or real numbers.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `<number>`.
pub fn parse_number(input: &mut Parser) -> Result<Number, ParseError> {
    input.next().map_or(Err(ParseError::UnexpectedToken), |token| {
        if let Token::Number { value, .. } = *token {
            Ok(Number(value))
        } else {
            Err(ParseError::UnexpectedToken)
        }
    })
}

/// Parse a whole string as exactly one `<number>`.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for non-numbers and `ParseError::TrailingInput`
/// when extra tokens follow the number.
pub fn parse_number_str(raw: &str) -> Result<Number, ParseError> {
    let mut input = ParserInput::new(raw);
    let mut parser = Parser::new(&mut input);
    let number = parse_number(&mut parser)?;
    parser
        .expect_exhausted()
        .map_err(|_| ParseError::TrailingInput)?;
    Ok(number)
}

/// Parse a whole string as an integer, truncating any fractional part toward zero.
///
/// Used for the integer-valued flex properties (`order`, `flex-grow`, `flex-shrink`).
///
/// # Errors
/// Propagates the errors of [`parse_number_str`].
pub fn parse_integer_str(raw: &str) -> Result<i32, ParseError> {
    let Number(value) = parse_number_str(raw)?;
    if value.is_finite() {
        Ok(value.trunc() as i32)
    } else {
        Err(ParseError::UnexpectedToken)
    }
}
