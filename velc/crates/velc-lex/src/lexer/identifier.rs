//! Identifier, keyword, directive, and boolean-literal lexing.
//!
//! One sub-lexer covers every token that looks like a name: plain
//! identifiers, reserved words, `#`-prefixed directives, the `true`/`false`
//! boolean literals, and the `void`/`null` literals. Backtick-quoted names
//! (`` `func` ``) are verbatim identifiers that bypass all of that, and a
//! trailing run of asterisks (`Int**`) stays attached to the name it
//! follows.

use velc_util::Symbol;

use crate::error::{LexErrorKind, LexResult};
use crate::token::{keyword_from_ident, TokenKind};
use crate::Lexer;

impl Lexer<'_> {
    /// Lexes a name-shaped token, entered on a letter, `_`, `#`, or backtick.
    pub(crate) fn lex_identifier(&mut self) -> LexResult<()> {
        let is_directive = self.cursor.current() == b'#';
        if is_directive {
            match self.cursor.peek(1) {
                None | Some(b' ') => return Err(self.fail(LexErrorKind::EmptyDirectiveName)),
                Some(c) if !c.is_ascii_alphabetic() && c != b'_' => {
                    return Err(self.fail(LexErrorKind::UnexpectedDirectiveName));
                },
                _ => {},
            }
            self.cursor.advance(); // onto the first name character
        }

        let mut value = String::new();
        value.push(self.cursor.current() as char);

        while let Some(c) = self.cursor.peek(1) {
            let legal = c.is_ascii_alphanumeric()
                || c == b'_'
                || c == b'`'
                // an asterisk needs an asterisk neighbor: pointer-like
                // suffixes stay attached, a lone '*' ends the token early
                // and falls to the operator table
                || (c == b'*' && (value.ends_with('*') || self.cursor.peek(2) == Some(b'*')));
            if !legal {
                break;
            }
            self.cursor.advance();
            value.push(c as char);
        }

        // Backtick quoting: `name` is a verbatim identifier.
        let mut verbatim = false;
        if value.len() >= 3 && value.starts_with('`') && value.ends_with('`') {
            value.drain(..1);
            value.pop();
            verbatim = true;
        }
        if value.contains('`') {
            return Err(self.fail(LexErrorKind::UnexpectedCharacter));
        }

        if !verbatim {
            match value.as_str() {
                "void" => {
                    self.push(TokenKind::Void);
                    return Ok(());
                },
                "null" => {
                    self.push(TokenKind::Null);
                    return Ok(());
                },
                "true" => {
                    self.push(TokenKind::Bool(true));
                    return Ok(());
                },
                "false" => {
                    self.push(TokenKind::Bool(false));
                    return Ok(());
                },
                _ => {},
            }
        }

        if is_directive {
            self.push(TokenKind::Directive(Symbol::intern(&value)));
            return Ok(());
        }

        if !verbatim {
            if let Some(keyword) = keyword_from_ident(&value) {
                self.push(TokenKind::Keyword(keyword));
                return Ok(());
            }
            if value == "_" {
                return Err(self.fail(LexErrorKind::InvalidIdentifierUnderscore));
            }
        }

        self.push(TokenKind::Ident(Symbol::intern(&value)));
        Ok(())
    }
}
