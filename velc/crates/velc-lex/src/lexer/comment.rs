//! Comment lexing.
//!
//! Comments are kept as tokens rather than skipped: later tooling (pretty
//! printers, documentation extractors) reads them from the stream. Line
//! comments run to the end of the line; block comments nest, and the
//! delimiters of the inner levels stay in the body. Bodies are trimmed of
//! surrounding whitespace.

use velc_util::Symbol;

use crate::token::TokenKind;
use crate::Lexer;

impl Lexer<'_> {
    /// Lexes a comment, entered on a `/` followed by `/` or `*`.
    pub(crate) fn lex_comment(&mut self) {
        if self.cursor.peek(1) == Some(b'*') {
            self.lex_block_comment();
        } else {
            self.lex_line_comment();
        }
    }

    fn lex_line_comment(&mut self) {
        self.cursor.match_literal("//");

        let mut value: Vec<u8> = Vec::new();
        while let Some(c) = self.cursor.peek(1) {
            if c == b'\n' {
                break; // the newline stays for the classifier to skip
            }
            self.cursor.advance();
            value.push(c);
        }
        self.emit_comment(&value);
    }

    fn lex_block_comment(&mut self) {
        self.cursor.match_literal("/*");
        self.cursor.advance(); // onto the first body character

        let mut depth = 1u32;
        let mut value: Vec<u8> = Vec::new();
        while !self.cursor.is_at_end() {
            if self.cursor.starts_with("/*") {
                depth += 1;
                value.extend_from_slice(b"/*");
                self.cursor.advance();
                self.cursor.advance();
                continue;
            }
            if self.cursor.starts_with("*/") {
                depth -= 1;
                if depth == 0 {
                    self.cursor.advance(); // rest on the closing '/'
                    break;
                }
                value.extend_from_slice(b"*/");
                self.cursor.advance();
                self.cursor.advance();
                continue;
            }
            value.push(self.cursor.current());
            self.cursor.advance();
        }
        // a comment still open at end of input keeps what it collected
        self.emit_comment(&value);
    }

    fn emit_comment(&mut self, value: &[u8]) {
        let text = String::from_utf8_lossy(value);
        self.push(TokenKind::Comment(Symbol::intern(text.trim())));
    }
}
