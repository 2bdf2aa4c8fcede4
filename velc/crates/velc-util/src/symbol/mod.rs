//! String interning for identifiers and literal payloads.
//!
//! This module provides the [`Symbol`] type, a compact 4-byte handle to an
//! interned string. Interning the same text twice yields the same symbol, so
//! equality is an integer comparison and the same identifier appearing a
//! thousand times costs one allocation.
//!
//! Interned strings live for the lifetime of the process. That is acceptable
//! for a compiler: the set of distinct identifiers and literals is bounded by
//! the source text, and it frees token payloads from borrowing any scan
//! buffer.
//!
//! # Thread safety
//!
//! The global string table is lock-free for lookups (DashMap) and takes a
//! short write lock only when a new string is first seen. Concurrent lexing
//! sessions may intern freely from multiple threads.
//!
//! # Example
//!
//! ```
//! use velc_util::Symbol;
//!
//! let a = Symbol::intern("hello");
//! let b = Symbol::intern("hello");
//! let c = Symbol::intern("world");
//!
//! assert_eq!(a, b);
//! assert_ne!(a, c);
//! assert_eq!(a.as_str(), "hello");
//! ```

mod interner;

use std::fmt;

use static_assertions::assert_eq_size;

/// An interned string handle.
///
/// `Symbol` is exactly 4 bytes and `Copy`; comparing two symbols compares
/// table indices, not characters.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    /// Index into the global string table.
    index: u32,
}

assert_eq_size!(Symbol, u32);

impl Symbol {
    /// Interns a string, returning its symbol.
    ///
    /// Returns an existing symbol if the string has been interned before,
    /// otherwise allocates a new table entry.
    pub fn intern(string: &str) -> Self {
        interner::table().intern(string)
    }

    /// Returns the string this symbol refers to.
    pub fn as_str(self) -> &'static str {
        interner::table().resolve(self.index)
    }

    /// Returns the raw table index.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.index
    }

    #[inline]
    pub(crate) fn from_index(index: u32) -> Self {
        Self { index }
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
