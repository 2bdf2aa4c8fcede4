//! Core lexer implementation.
//!
//! This module contains the main `Lexer` struct and the classifier loop that
//! dispatches to the sub-lexers.

use velc_util::{Pos, Span, Symbol};

use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind, LexResult};
use crate::token::{LexOutput, Token, TokenKind};

/// Lexer for the Vel programming language.
///
/// One `Lexer` owns one scan of one buffer: the cursor, the output vector,
/// and the start position of the token being recognized. Concurrent lexing
/// of several buffers uses one instance each; nothing is shared between
/// passes except the global symbol table.
pub struct Lexer<'a> {
    /// Byte cursor over the source.
    pub(crate) cursor: Cursor<'a>,

    /// Tokens recognized so far, in source order.
    pub(crate) tokens: Vec<Token>,

    /// Position of the first character of the current token.
    pub(crate) token_start: Pos,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            token_start: Pos::start(),
        }
    }

    /// Runs the scan to completion.
    ///
    /// On success the returned stream ends with exactly one end-of-file
    /// token. The first lexical violation aborts the pass and is returned
    /// as a [`LexError`]; there is no recovery or resynchronization.
    pub fn analyze(mut self) -> LexResult<LexOutput> {
        loop {
            // NUL doubles as the end sentinel, terminating the scan early
            // for null-terminated buffers.
            if self.cursor.is_at_end() || self.cursor.current() == 0 {
                break;
            }
            self.token_start = self.cursor.pos();

            match self.cursor.current() {
                b'"' => self.lex_string()?,
                b';' | b',' => self.lex_separator(),
                b'\n' | b' ' => {},
                c if c.is_ascii_alphabetic() || c == b'_' || c == b'#' || c == b'`' => {
                    self.lex_identifier()?
                },
                c if c.is_ascii_digit() => self.lex_number()?,
                b'.' | b'-' if self.cursor.peek(1).is_some_and(|b| b.is_ascii_digit()) => {
                    self.lex_number()?
                },
                b'/' if matches!(self.cursor.peek(1), Some(b'/') | Some(b'*')) => {
                    self.lex_comment()
                },
                _ => self.lex_punctuator_or_operator()?,
            }

            // Every sub-lexer leaves the cursor on the last character of its
            // token; this single advance steps past it.
            if !self.cursor.advance() {
                break;
            }
        }

        let end = self.cursor.pos();
        self.tokens.push(Token::new(TokenKind::Eof, Span::point(end)));
        Ok(LexOutput {
            tokens: self.tokens,
            lines_processed: end.line,
        })
    }

    /// Emits a single-character separator token (`;` or `,`).
    fn lex_separator(&mut self) {
        let text = match self.cursor.current() {
            b',' => ",",
            _ => ";",
        };
        self.push(TokenKind::Separator(Symbol::intern(text)));
    }

    /// Appends a token spanning from the token start to the current cursor
    /// position (inclusive).
    pub(crate) fn push(&mut self, kind: TokenKind) {
        let span = Span::new(self.token_start, self.cursor.pos());
        self.tokens.push(Token::new(kind, span));
    }

    /// Builds an error spanning the token recognized so far.
    pub(crate) fn fail(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, Span::new(self.token_start, self.cursor.pos()))
    }

    /// Builds an error covering only the current character.
    pub(crate) fn fail_here(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, Span::point(self.cursor.pos()))
    }
}

/// Lexes a complete source buffer into a token stream.
///
/// This is the main entry point of the crate.
///
/// # Example
///
/// ```
/// use velc_lex::{tokenize, TokenKind};
///
/// let output = tokenize("x;").unwrap();
/// assert_eq!(output.tokens.len(), 3); // identifier, separator, EOF
/// assert_eq!(output.tokens[2].kind, TokenKind::Eof);
/// ```
pub fn tokenize(source: &str) -> LexResult<LexOutput> {
    Lexer::new(source).analyze()
}
