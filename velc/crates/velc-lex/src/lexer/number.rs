//! Number literal lexing.
//!
//! Handles decimal integer and float literals, including leading signs
//! (`-123`), leading dots (`.5`), exponents (`1e-23`), and underscore digit
//! grouping (`1_000_000`). The classifier only enters this sub-lexer when a
//! digit is actually present, so a lone `-` or `.` falls to the operator
//! tables instead of being swallowed here.

use velc_util::{Pos, Span};

use crate::error::{LexError, LexErrorKind, LexResult};
use crate::token::TokenKind;
use crate::Lexer;

/// Characters that may legally follow a number literal: anything that starts
/// a separator, punctuator, or operator.
fn terminates_literal(c: u8) -> bool {
    c.is_ascii_whitespace()
        || matches!(
            c,
            b';' | b','
                | b'.' | b':' | b'(' | b')' | b'{' | b'}' | b'[' | b']'
                | b'-' | b'>' | b'<' | b'=' | b'!' | b'&' | b'|'
                | b'+' | b'*' | b'/' | b'%' | b'^'
        )
}

impl Lexer<'_> {
    /// Lexes a number literal, entered on a digit or on a `.`/`-` that is
    /// immediately followed by one.
    pub(crate) fn lex_number(&mut self) -> LexResult<()> {
        let mut value = String::new();
        value.push(self.cursor.current() as char);

        while let Some(c) = self.cursor.peek(1) {
            if !(c.is_ascii_digit() || matches!(c, b'_' | b'.' | b'e' | b'-')) {
                break;
            }
            self.cursor.advance();

            if c == b'-' && !value.ends_with('e') {
                return Err(self.fail(LexErrorKind::UnexpectedMinusInNumberLiteral));
            }
            if c == b'.' && value.contains('.') {
                return Err(self.fail(LexErrorKind::UnexpectedDotInFloatLiteral));
            }
            if c == b'e' && value.contains('e') {
                return Err(self.fail(LexErrorKind::UnexpectedEInFloatLiteral));
            }
            if c == b'_' {
                continue; // digit-group separator, never stored
            }
            value.push(c as char);
        }

        // The literal must be followed by something that can start a new
        // token; `12a23` is not two tokens.
        if let Some(c) = self.cursor.peek(1) {
            if !terminates_literal(c) {
                let offender = Pos::new(self.cursor.pos().line, self.cursor.pos().column + 1);
                return Err(LexError::new(
                    LexErrorKind::UnexpectedCharacterInNumber,
                    Span::point(offender),
                ));
            }
        }

        let kind = if value.contains('e') || value.contains('.') {
            value
                .parse::<f64>()
                .map(TokenKind::Float)
                .map_err(|_| self.fail(LexErrorKind::InvalidNumberLiteral))?
        } else {
            value
                .parse::<i64>()
                .map(TokenKind::Int)
                .map_err(|_| self.fail(LexErrorKind::InvalidNumberLiteral))?
        };
        self.push(kind);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexErrorKind;
    use crate::token::TokenKind;
    use crate::tokenize;

    fn first_kind(source: &str) -> TokenKind {
        tokenize(source).unwrap().tokens[0].kind
    }

    fn float_eq(kind: TokenKind, expected: f64) -> bool {
        matches!(kind, TokenKind::Float(f) if (f - expected).abs() < 1e-9 * expected.abs().max(1.0))
    }

    #[test]
    fn test_integers() {
        assert_eq!(first_kind("42"), TokenKind::Int(42));
        assert_eq!(first_kind("0"), TokenKind::Int(0));
        assert_eq!(first_kind("011"), TokenKind::Int(11));
        assert_eq!(first_kind("-123"), TokenKind::Int(-123));
        assert_eq!(first_kind("-0"), TokenKind::Int(0));
    }

    #[test]
    fn test_underscore_grouping() {
        assert_eq!(first_kind("1_2_3_____"), TokenKind::Int(123));
        assert_eq!(first_kind("1_000_000"), TokenKind::Int(1_000_000));
    }

    #[test]
    fn test_floats() {
        assert!(float_eq(first_kind("3.14"), 3.14));
        assert!(float_eq(first_kind("1.1724"), 1.1724));
        assert!(float_eq(first_kind("11."), 11.0));
        assert!(float_eq(first_kind(".11"), 0.11));
        assert!(float_eq(first_kind(".1234"), 0.1234));
    }

    #[test]
    fn test_exponents() {
        assert!(float_eq(first_kind("17.e2"), 1700.0));
        assert!(float_eq(first_kind("1e-23"), 1e-23));
        assert!(float_eq(first_kind("2.5e-3"), 2.5e-3));
    }

    #[test]
    fn test_second_dot_fails() {
        assert_eq!(
            tokenize("1.1.1").unwrap_err().kind,
            LexErrorKind::UnexpectedDotInFloatLiteral
        );
    }

    #[test]
    fn test_second_e_fails() {
        assert_eq!(
            tokenize("10.134e12e37").unwrap_err().kind,
            LexErrorKind::UnexpectedEInFloatLiteral
        );
    }

    #[test]
    fn test_misplaced_minus_fails() {
        assert_eq!(
            tokenize("12-e23").unwrap_err().kind,
            LexErrorKind::UnexpectedMinusInNumberLiteral
        );
    }

    #[test]
    fn test_letter_after_number_fails() {
        let err = tokenize("12a23").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacterInNumber);
        assert_eq!((err.span.start.line, err.span.start.column), (1, 2));
    }

    #[test]
    fn test_exponent_without_digits_fails() {
        assert_eq!(
            tokenize("1e").unwrap_err().kind,
            LexErrorKind::InvalidNumberLiteral
        );
    }

    #[test]
    fn test_overflow_fails() {
        assert_eq!(
            tokenize("99999999999999999999").unwrap_err().kind,
            LexErrorKind::InvalidNumberLiteral
        );
    }

    #[test]
    fn test_number_before_separator_and_bracket() {
        let output = tokenize("42;").unwrap();
        assert_eq!(output.tokens[0].kind, TokenKind::Int(42));
        let output = tokenize("f(42)").unwrap();
        assert_eq!(output.tokens[2].kind, TokenKind::Int(42));
    }

    #[test]
    fn test_original_number_gauntlet() {
        let output = tokenize("1 -123 17.e2 1.1724 0 011 11. .11 -0 1e-23 1_2_3_____").unwrap();
        let kinds: Vec<_> = output.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds[0], TokenKind::Int(1));
        assert_eq!(kinds[1], TokenKind::Int(-123));
        assert!(float_eq(kinds[2], 1700.0));
        assert!(float_eq(kinds[3], 1.1724));
        assert_eq!(kinds[4], TokenKind::Int(0));
        assert_eq!(kinds[5], TokenKind::Int(11));
        assert!(float_eq(kinds[6], 11.0));
        assert!(float_eq(kinds[7], 0.11));
        assert_eq!(kinds[8], TokenKind::Int(0));
        assert!(float_eq(kinds[9], 1e-23));
        assert_eq!(kinds[10], TokenKind::Int(123));
        assert_eq!(kinds[11], TokenKind::Eof);
    }
}
