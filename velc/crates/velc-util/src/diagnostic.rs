//! Diagnostic reporting infrastructure.
//!
//! The lexer surfaces failures as typed errors; this module turns them into
//! text a human can act on. [`Diagnostic`] pairs a severity [`Level`] with a
//! message and a [`Span`], and [`Diagnostic::render`] produces the offending
//! source line with a caret under the reported columns.

use std::fmt;

use crate::span::Span;

/// Diagnostic severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// A fatal problem; the current pass is aborted.
    Error,
    /// A problem that does not abort the pass.
    Warning,
    /// Additional context attached to another diagnostic.
    Note,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message anchored to a source location.
///
/// # Example
///
/// ```
/// use velc_util::{Diagnostic, Pos, Span};
///
/// let source = "let x = ?;";
/// let diag = Diagnostic::error("Unexpected character.", Span::point(Pos::new(1, 8)));
/// let rendered = diag.render(source);
/// assert!(rendered.contains("error: Unexpected character."));
/// assert!(rendered.contains("let x = ?;"));
/// ```
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Severity of this diagnostic.
    pub level: Level,
    /// Main message text.
    pub message: String,
    /// Location the message refers to.
    pub span: Span,
}

impl Diagnostic {
    /// Creates an error-level diagnostic.
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            span,
        }
    }

    /// Creates a warning-level diagnostic.
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
            span,
        }
    }

    /// Renders the diagnostic against the source it refers to.
    ///
    /// Output shape:
    ///
    /// ```text
    /// error: Unexpected character.
    ///  --> 1:8
    ///   | let x = ?;
    ///   |         ^
    /// ```
    ///
    /// The caret covers the span's columns when the span sits on a single
    /// line, and only the start column otherwise.
    pub fn render(&self, source: &str) -> String {
        let mut out = format!("{}: {}\n --> {}\n", self.level, self.message, self.span.start);

        let line_idx = self.span.start.line.saturating_sub(1) as usize;
        let Some(line) = source.lines().nth(line_idx) else {
            return out;
        };

        let column = self.span.start.column as usize;
        let width = if self.span.is_single_line() {
            (self.span.end.column as usize + 1).saturating_sub(column).max(1)
        } else {
            1
        };

        out.push_str(&format!("  | {}\n", line));
        out.push_str(&format!("  | {}{}\n", " ".repeat(column), "^".repeat(width)));
        out
    }
}
