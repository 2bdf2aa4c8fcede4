//! Punctuator and operator lexing.
//!
//! Entered when no other sub-lexer claims the current character. Candidates
//! come from two fixed tables tried longest-match-first; the longer match
//! across the two tables wins, with punctuators taking length ties, so `..`
//! is the range operator while `...` and `->` stay punctuators.

use velc_util::Symbol;

use crate::error::{LexErrorKind, LexResult};
use crate::token::TokenKind;
use crate::Lexer;

/// Punctuator table, longer sequences before their prefixes.
pub(crate) const PUNCTUATORS: &[&str] = &[
    "...", "->", ".", ":", "(", ")", "{", "}", "[", "]",
];

/// Operator table, longer sequences before their prefixes.
pub(crate) const OPERATORS: &[&str] = &[
    ">>=", "<<=",
    ":=", "==", "!=", "<=", ">=", "&&", "||", ">>", "<<",
    "+=", "-=", "*=", "/=", "%=", "^=", "..",
    ">", "<", "-", "+", "/", "&", "*", "%", "=",
];

impl Lexer<'_> {
    /// Lexes a punctuator or operator at the current character.
    ///
    /// Whitespace that reaches this point (tab, carriage return) is skipped
    /// without a token; anything that matches neither table is an error
    /// spanning the single offending character.
    pub(crate) fn lex_punctuator_or_operator(&mut self) -> LexResult<()> {
        let punctuator = self.cursor.peek_one_of(PUNCTUATORS);
        let operator = self.cursor.peek_one_of(OPERATORS);

        let best = match (punctuator, operator) {
            (Some(p), Some(o)) if o.len() > p.len() => Some((o, false)),
            (Some(p), _) => Some((p, true)),
            (None, Some(o)) => Some((o, false)),
            (None, None) => None,
        };

        if let Some((text, is_punctuator)) = best {
            self.cursor.advance_by(text.len() - 1);
            let symbol = Symbol::intern(text);
            self.push(if is_punctuator {
                TokenKind::Punctuator(symbol)
            } else {
                TokenKind::Operator(symbol)
            });
            return Ok(());
        }

        if self.cursor.current().is_ascii_whitespace() {
            return Ok(());
        }
        Err(self.fail_here(LexErrorKind::UnexpectedCharacter))
    }
}
