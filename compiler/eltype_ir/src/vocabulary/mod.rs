//! Token vocabularies.
//!
//! A vocabulary numbers the token symbols of a grammar and names them for
//! display. The registry only needs the two operations on [`Vocabulary`];
//! [`VocabularyTable`] is the usual concrete form, built from the literal and
//! symbolic name tables a parser generator emits.

use std::borrow::Cow;

use crate::symbol::{SymbolId, EOF_NAME};

/// Source of token symbols and their display names.
pub trait Vocabulary {
    /// Highest symbol id; symbols run from 0 to this value inclusive.
    fn max_symbol_id(&self) -> SymbolId;

    /// Display name of `symbol`, or `None` if the vocabulary has no name for it.
    fn display_name(&self, symbol: SymbolId) -> Option<Cow<'_, str>>;
}

impl<V: Vocabulary + ?Sized> Vocabulary for &V {
    fn max_symbol_id(&self) -> SymbolId {
        (**self).max_symbol_id()
    }

    fn display_name(&self, symbol: SymbolId) -> Option<Cow<'_, str>> {
        (**self).display_name(symbol)
    }
}

/// Vocabulary backed by per-symbol name tables.
///
/// Display names resolve in order: explicit display name, literal name
/// (e.g. `'+'`), symbolic name (e.g. `PLUS`), then the decimal symbol id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VocabularyTable {
    literal_names: Vec<Option<String>>,
    symbolic_names: Vec<Option<String>>,
    display_names: Vec<Option<String>>,
    max_symbol: SymbolId,
}

impl VocabularyTable {
    /// Build from the three name tables, each indexed by symbol id.
    ///
    /// The max symbol id is one less than the longest table, so a vocabulary
    /// with every table empty has max `-1` and no symbols.
    pub fn new(
        literal_names: Vec<Option<String>>,
        symbolic_names: Vec<Option<String>>,
        display_names: Vec<Option<String>>,
    ) -> Self {
        let longest = literal_names
            .len()
            .max(symbolic_names.len())
            .max(display_names.len());
        let max_symbol = SymbolId::new(i32::try_from(longest).map_or(i32::MAX, |n| n - 1));
        VocabularyTable {
            literal_names,
            symbolic_names,
            display_names,
            max_symbol,
        }
    }

    /// Build from symbolic names only; index 0 is usually `None`.
    pub fn from_symbolic_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let symbolic = names.into_iter().map(|name| name.map(Into::into)).collect();
        Self::new(Vec::new(), symbolic, Vec::new())
    }

    pub fn literal_name(&self, symbol: SymbolId) -> Option<&str> {
        Self::lookup(&self.literal_names, symbol)
    }

    /// Symbolic name of `symbol`; `EOF` is always named.
    pub fn symbolic_name(&self, symbol: SymbolId) -> Option<&str> {
        if symbol.is_eof() {
            return Some(EOF_NAME);
        }
        Self::lookup(&self.symbolic_names, symbol)
    }

    fn lookup(table: &[Option<String>], symbol: SymbolId) -> Option<&str> {
        table.get(symbol.index()?)?.as_deref()
    }
}

impl Default for VocabularyTable {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }
}

impl Vocabulary for VocabularyTable {
    fn max_symbol_id(&self) -> SymbolId {
        self.max_symbol
    }

    fn display_name(&self, symbol: SymbolId) -> Option<Cow<'_, str>> {
        if symbol.is_eof() {
            return Some(Cow::Borrowed(EOF_NAME));
        }
        if symbol.raw() < 0 || symbol > self.max_symbol {
            return None;
        }
        let name = Self::lookup(&self.display_names, symbol)
            .or_else(|| self.literal_name(symbol))
            .or_else(|| self.symbolic_name(symbol));
        Some(match name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(symbol.to_string()),
        })
    }
}

#[cfg(test)]
mod tests;
