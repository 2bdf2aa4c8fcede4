//! Lexical error types.
//!
//! Every lexical error is fatal to the current pass: the first violation
//! aborts tokenization and is returned to the caller as a [`LexError`]. The
//! core never terminates the process or prints anything itself.

use thiserror::Error;
use velc_util::Span;

/// The categories of lexical errors.
///
/// Each variant's message matches the reference implementation's wording so
/// diagnostics stay recognizable across tools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// Input exhausted in the middle of a token.
    #[error("Unexpected end of file.")]
    UnexpectedEndOfFile,

    /// Multiline string literal did not start on a fresh line.
    #[error("Multiline string literal is expected to start from a new line.")]
    NewlineExpectedBeforeMultilineStringLiteral,

    /// Multiline string literal did not end on its own line.
    #[error("Multiline string literal is expected to end after a new line.")]
    NewlineExpectedAfterMultilineStringLiteral,

    /// Unescaped newline inside a single-line string literal.
    #[error("String literal is not terminated before a new line.")]
    NewLineInStringLiteral,

    /// Backslash followed by an unsupported escape code.
    #[error("Unexpected character to escape in a string literal.")]
    UnexpectedCharacterToEscape,

    /// `#` with no directive name after it.
    #[error("Directive identifier is expected after #.")]
    EmptyDirectiveName,

    /// `#` followed by something that cannot start a directive name.
    #[error("Unexpected characters in a directive identifier after #.")]
    UnexpectedDirectiveName,

    /// The identifier `_` alone is reserved.
    #[error("'_' is not a valid identifier.")]
    InvalidIdentifierUnderscore,

    /// A character matching no token form, or a stray backtick.
    #[error("Unexpected character.")]
    UnexpectedCharacter,

    /// `-` inside a number literal anywhere but right after `e`.
    #[error("Unexpected '-' in the middle of a number literal.")]
    UnexpectedMinusInNumberLiteral,

    /// More than one `.` in a float literal.
    #[error("Only a single '.' is expected in a float literal.")]
    UnexpectedDotInFloatLiteral,

    /// More than one `e` in a float literal.
    #[error("Only a single 'e' is expected in a float literal.")]
    UnexpectedEInFloatLiteral,

    /// A number literal followed directly by a character that cannot
    /// terminate one.
    #[error("Unexpected character in a number literal.")]
    UnexpectedCharacterInNumber,

    /// A number literal whose value cannot be represented.
    #[error("Number literal is out of range or malformed.")]
    InvalidNumberLiteral,
}

/// A fatal lexical error with the span that triggered it.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[error("{kind}")]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// Where it went wrong.
    pub span: Span,
}

impl LexError {
    /// Creates an error over the given span.
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Result type for lexing operations.
pub type LexResult<T> = std::result::Result<T, LexError>;
