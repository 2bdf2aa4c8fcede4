//! velc-util - Core Utilities and Foundation Types
//!
//! This crate provides the foundation types shared by every phase of the
//! velc compiler infrastructure:
//!
//! - [`span`] - Source positions ([`Pos`]) and ranges ([`Span`])
//! - [`symbol`] - String interning ([`Symbol`]) for identifiers and literals
//! - [`diagnostic`] - Diagnostic levels and human-readable rendering
//!
//! # Positions
//!
//! A [`Pos`] is a `(line, column)` pair. Lines are 1-based and columns are
//! 0-based, matching the positions the lexer's own tests assert against. A
//! [`Span`] is an inclusive start/end pair of positions delimiting a token.
//!
//! # Symbols
//!
//! A [`Symbol`] is a 4-byte handle to a string stored in a global, thread-safe
//! string table. Interning the same text twice yields the same symbol, so
//! comparisons are O(1) and token payloads never alias a live scan buffer.
//!
//! # Example
//!
//! ```
//! use velc_util::{Pos, Span, Symbol};
//!
//! let name = Symbol::intern("main");
//! assert_eq!(name.as_str(), "main");
//!
//! let span = Span::new(Pos::new(1, 0), Pos::new(1, 3));
//! assert_eq!(span.to_string(), "1:0-1:3");
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, Level};
pub use span::{Pos, Span};
pub use symbol::Symbol;
