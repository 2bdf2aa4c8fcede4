//! Global string table backing [`Symbol`].
//!
//! Lookups go through a DashMap keyed by string contents, so the common case
//! (string already interned) never blocks. New strings are leaked to obtain
//! a `'static` lifetime and appended to an index vector guarded by a
//! parking_lot RwLock, which keeps `resolve` an O(1) array access.

use std::sync::LazyLock;

use ahash::RandomState;
use dashmap::DashMap;
use parking_lot::RwLock;

use super::Symbol;

static STRING_TABLE: LazyLock<StringTable> = LazyLock::new(StringTable::new);

/// Returns the process-wide string table.
pub(super) fn table() -> &'static StringTable {
    &STRING_TABLE
}

/// Thread-safe string table.
///
/// Strings are stored once and never removed; the table lives for the whole
/// process. The `map` answers "has this text been seen, and at which index";
/// the `strings` vector answers "which text lives at this index".
pub(super) struct StringTable {
    map: DashMap<&'static str, u32, RandomState>,
    strings: RwLock<Vec<&'static str>>,
}

impl StringTable {
    fn new() -> Self {
        Self {
            map: DashMap::with_capacity_and_hasher(256, RandomState::new()),
            strings: RwLock::new(Vec::with_capacity(256)),
        }
    }

    /// Interns `string`, returning its symbol.
    pub(super) fn intern(&self, string: &str) -> Symbol {
        if let Some(index) = self.map.get(string) {
            return Symbol::from_index(*index);
        }

        let mut strings = self.strings.write();
        // Another thread may have inserted while we waited for the lock.
        if let Some(index) = self.map.get(string) {
            return Symbol::from_index(*index);
        }

        let interned: &'static str = Box::leak(string.to_owned().into_boxed_str());
        let index = strings.len() as u32;
        strings.push(interned);
        self.map.insert(interned, index);
        Symbol::from_index(index)
    }

    /// Returns the string stored at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` was not produced by this table, which cannot happen
    /// for symbols obtained through [`Symbol::intern`].
    pub(super) fn resolve(&self, index: u32) -> &'static str {
        self.strings.read()[index as usize]
    }
}
