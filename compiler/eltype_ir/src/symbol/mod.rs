//! Raw grammar numbering.
//!
//! Token symbols and rule indices as the parser generator emits them.

use std::fmt;

/// Debug name of the end-of-input element type.
pub const EOF_NAME: &str = "EOF";

/// Token symbol id as numbered by the grammar.
///
/// Symbols of a vocabulary run from 0 to its max symbol id inclusive.
/// Slot 0 is never produced by a lexer but still gets an element type.
/// `EOF` (-1) lies outside every vocabulary.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct SymbolId(i32);

impl SymbolId {
    /// End of input.
    pub const EOF: SymbolId = SymbolId(-1);

    /// The unused slot every vocabulary starts with.
    pub const INVALID: SymbolId = SymbolId(0);

    #[inline]
    pub const fn new(raw: i32) -> Self {
        SymbolId(raw)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_eof(self) -> bool {
        self.0 == Self::EOF.0
    }

    /// Position of this symbol in a token list, or `None` for negative ids.
    #[inline]
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }

    /// Every symbol id from 0 up to `max` inclusive.
    ///
    /// Empty when `max` is negative.
    pub fn up_to(max: SymbolId) -> impl Iterator<Item = SymbolId> {
        (0..=max.0).map(SymbolId)
    }
}

impl From<i32> for SymbolId {
    fn from(raw: i32) -> Self {
        SymbolId(raw)
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_eof() {
            write!(f, "SymbolId::EOF")
        } else {
            write!(f, "SymbolId({})", self.0)
        }
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parser rule index, the position of the rule in the rule name list.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct RuleIndex(u32);

impl RuleIndex {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        RuleIndex(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for RuleIndex {
    fn from(raw: u32) -> Self {
        RuleIndex(raw)
    }
}

impl fmt::Debug for RuleIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleIndex({})", self.0)
    }
}

impl fmt::Display for RuleIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
