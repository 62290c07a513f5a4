//! Identity-keyed sets of token element types.

use std::fmt;

use eltype_ir::{ElementType, TokenElementType};
use rustc_hash::FxHashSet;

/// Unordered set of token element types, compared by identity.
///
/// Built on demand for membership tests during lexing and highlighting;
/// the registry never caches one.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    types: FxHashSet<TokenElementType>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: TokenElementType) -> bool {
        self.types.insert(token)
    }

    pub fn contains(&self, token: &TokenElementType) -> bool {
        self.types.contains(token)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TokenElementType> {
        self.types.iter()
    }

    /// Tokens in either set.
    #[must_use]
    pub fn union(&self, other: &TokenSet) -> TokenSet {
        self.types.union(&other.types).cloned().collect()
    }

    /// Tokens in both sets.
    #[must_use]
    pub fn intersection(&self, other: &TokenSet) -> TokenSet {
        self.types.intersection(&other.types).cloned().collect()
    }

    /// Tokens in `self` but not in `other`.
    #[must_use]
    pub fn difference(&self, other: &TokenSet) -> TokenSet {
        self.types.difference(&other.types).cloned().collect()
    }
}

impl FromIterator<TokenElementType> for TokenSet {
    fn from_iter<I: IntoIterator<Item = TokenElementType>>(iter: I) -> Self {
        TokenSet {
            types: iter.into_iter().collect(),
        }
    }
}

impl Extend<TokenElementType> for TokenSet {
    fn extend<I: IntoIterator<Item = TokenElementType>>(&mut self, iter: I) {
        self.types.extend(iter);
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a TokenElementType;
    type IntoIter = std::collections::hash_set::Iter<'a, TokenElementType>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sorted so output is stable across runs.
        let mut names: Vec<&str> = self.types.iter().map(ElementType::debug_name).collect();
        names.sort_unstable();
        f.debug_set().entries(names).finish()
    }
}
