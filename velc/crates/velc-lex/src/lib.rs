//! velc-lex - Lexical Analyzer for the Vel Programming Language
//!
//! This crate provides a complete lexer (tokenizer) for the Vel programming
//! language. It transforms source code into a stream of tokens that can be
//! consumed by the parser.
//!
//! # Overview
//!
//! Lexical analysis is the first phase of compilation: a single pass over a
//! complete in-memory buffer that produces a token list and a count of the
//! lines processed. The lexer performs no I/O and touches no global state
//! other than the symbol table; each [`tokenize`] call owns its own cursor
//! and output. The first lexical violation aborts the pass with a typed
//! [`LexError`].
//!
//! # Example Usage
//!
//! ```
//! use velc_lex::{tokenize, TokenKind};
//!
//! let output = tokenize("func main() { }").unwrap();
//! for token in &output.tokens {
//!     println!("{}", token);
//! }
//! assert!(output.tokens.last().unwrap().is_eof());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Byte cursor for source traversal
//! - [`error`] - Lexical error taxonomy
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! Reserved words with special meaning (18 total):
//!
//! `func`, `break`, `continue`, `fallthrough`, `while`, `for`, `enum`,
//! `struct`, `defer`, `if`, `else`, `switch`, `case`, `return`, `cast`,
//! `sizeof`, `new`, `free`
//!
//! ## Identifiers
//!
//! Names for variables, functions, types. Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`,
//! optionally carrying a pointer-like `**` suffix. Backtick quoting
//! (`` `func` ``) makes any name a verbatim identifier.
//!
//! ## Directives
//!
//! `#`-prefixed names such as `#foreign`, distinct from identifiers.
//!
//! ## Literals
//!
//! - **Integer**: `42`, `-123`, `1_000_000`
//! - **Float**: `3.14`, `.11`, `17.e2`, `1e-23`
//! - **String**: `"hello"`, `"line\n"`, triple-quoted multiline blocks
//! - **Boolean**: `true`, `false`
//! - **Void / Null**: `void`, `null`
//!
//! ## Separators, Punctuators, Operators
//!
//! - **Separators**: `;`, `,`
//! - **Punctuators**: `(` `)` `{` `}` `[` `]` `:` `.` `->` `...`
//! - **Operators**: `:=` `=` `==` `!=` `<=` `>=` `&&` `||` `<` `>` `+` `-`
//!   `*` `/` `%` `&` `..` `+=` `-=` `*=` `/=` `%=` `^=` `<<` `>>` `<<=` `>>=`
//!
//! ## Special
//!
//! - **Comments**: `//` and nested `/* */`, kept in the stream
//! - **EOF**: end-of-input marker, always the last token

#![warn(missing_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexErrorKind, LexResult};
pub use lexer::{tokenize, Lexer};
pub use token::{keyword_from_ident, Keyword, LexOutput, Token, TokenKind};
