//! String literal lexing.
//!
//! Handles both single-line literals (`"..."`) and multiline literals
//! delimited by triple quotes, which must open and close on lines of their
//! own. Escape decoding is shared between the two modes.

use velc_util::Symbol;

use crate::error::{LexErrorKind, LexResult};
use crate::token::TokenKind;
use crate::Lexer;

impl Lexer<'_> {
    /// Lexes a string literal, entered with the cursor on the opening quote.
    ///
    /// Multiline form:
    ///
    /// ```text
    /// """
    /// body
    /// """
    /// ```
    ///
    /// The opening `"""` must be followed directly by a newline, the closing
    /// `"""` must sit right after a newline, and whatever follows the close
    /// must be a newline or semicolon. The newlines that carry the
    /// delimiters are not part of the payload.
    pub(crate) fn lex_string(&mut self) -> LexResult<()> {
        let multiline = self.cursor.match_literal("\"\"\"");
        if multiline {
            if self.cursor.peek(1) != Some(b'\n') {
                return Err(self.fail(LexErrorKind::NewlineExpectedBeforeMultilineStringLiteral));
            }
            self.cursor.advance(); // onto the required newline
        }

        // Step onto the first body character.
        self.cursor.advance();
        if self.cursor.is_at_end() {
            return Err(self.fail(LexErrorKind::UnexpectedEndOfFile));
        }

        let mut value: Vec<u8> = Vec::new();
        loop {
            if self.cursor.is_at_end() {
                return Err(self.fail(LexErrorKind::UnexpectedEndOfFile));
            }
            let c = self.cursor.current();

            if c == b'\\' {
                let escaped = match self.cursor.peek(1) {
                    None => return Err(self.fail(LexErrorKind::UnexpectedEndOfFile)),
                    Some(b'0') => 0,
                    Some(b'n') => b'\n',
                    Some(b'r') => b'\r',
                    Some(b't') => b'\t',
                    Some(b'\\') => b'\\',
                    Some(b'"') => b'"',
                    Some(_) => {
                        return Err(self.fail_here(LexErrorKind::UnexpectedCharacterToEscape))
                    },
                };
                value.push(escaped);
                // An escape consumes exactly two source characters.
                self.cursor.advance();
                self.cursor.advance();
                if self.cursor.is_at_end() {
                    return Err(self.fail(LexErrorKind::UnexpectedEndOfFile));
                }
                continue;
            }

            if multiline {
                if self.cursor.peek(1).is_none() {
                    return Err(self.fail(LexErrorKind::UnexpectedEndOfFile));
                }
                if self.cursor.starts_with("\"\"\"") {
                    // an embedded triple quote without the newline before it
                    return Err(
                        self.fail(LexErrorKind::NewlineExpectedAfterMultilineStringLiteral)
                    );
                }
                if self.cursor.match_literal("\n\"\"\"") {
                    match self.cursor.peek(1) {
                        None | Some(b'\n') | Some(b';') => {
                            self.emit_str(&value);
                            return Ok(());
                        },
                        Some(_) => {
                            return Err(
                                self.fail(LexErrorKind::NewlineExpectedAfterMultilineStringLiteral)
                            )
                        },
                    }
                }
            } else {
                if c == b'"' {
                    self.emit_str(&value);
                    return Ok(()); // cursor rests on the closing quote
                }
                if c == b'\n' {
                    return Err(self.fail(LexErrorKind::NewLineInStringLiteral));
                }
            }

            value.push(c);
            self.cursor.advance();
        }
    }

    /// Interns the accumulated bytes and appends the string token. The
    /// payload is an owned copy; it never aliases the scan buffer.
    fn emit_str(&mut self, value: &[u8]) {
        let text = String::from_utf8_lossy(value);
        self.push(TokenKind::Str(Symbol::intern(&text)));
    }
}
