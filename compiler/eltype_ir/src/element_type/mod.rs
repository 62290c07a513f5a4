//! Token and rule element types.
//!
//! Element types are what editors and tree builders attach to tokens and
//! nodes. Consumers compare them by identity, so each handle wraps one shared
//! allocation and `Eq`/`Hash` look only at its address.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::language::Language;
use crate::symbol::{RuleIndex, SymbolId};

/// Read surface shared by token and rule element types.
pub trait ElementType {
    /// Name used in debug output and highlighting tables.
    fn debug_name(&self) -> &str;

    /// Owning language; `None` means any language.
    fn language(&self) -> Option<&Language>;

    /// Whether the host framework was asked to record this instance.
    fn is_registered(&self) -> bool;
}

struct TokenData {
    symbol: SymbolId,
    name: Box<str>,
    language: Option<Language>,
    registered: bool,
}

/// Element type for one token symbol.
#[derive(Clone)]
pub struct TokenElementType(Arc<TokenData>);

impl TokenElementType {
    /// Allocate a new, distinct instance.
    ///
    /// Canonical instances come from the registry; a value built here is
    /// never equal to any other.
    pub fn new(
        symbol: SymbolId,
        name: impl Into<Box<str>>,
        language: Option<Language>,
        registered: bool,
    ) -> Self {
        TokenElementType(Arc::new(TokenData {
            symbol,
            name: name.into(),
            language,
            registered,
        }))
    }

    pub fn symbol(&self) -> SymbolId {
        self.0.symbol
    }

    pub fn is_eof(&self) -> bool {
        self.0.symbol.is_eof()
    }
}

impl ElementType for TokenElementType {
    fn debug_name(&self) -> &str {
        &self.0.name
    }

    fn language(&self) -> Option<&Language> {
        self.0.language.as_ref()
    }

    fn is_registered(&self) -> bool {
        self.0.registered
    }
}

struct RuleData {
    index: RuleIndex,
    name: Box<str>,
    language: Language,
    registered: bool,
}

/// Element type for one parser rule.
#[derive(Clone)]
pub struct RuleElementType(Arc<RuleData>);

impl RuleElementType {
    pub fn new(
        index: RuleIndex,
        name: impl Into<Box<str>>,
        language: Language,
        registered: bool,
    ) -> Self {
        RuleElementType(Arc::new(RuleData {
            index,
            name: name.into(),
            language,
            registered,
        }))
    }

    pub fn rule_index(&self) -> RuleIndex {
        self.0.index
    }

    /// Owning language. Rules always have one.
    pub fn rule_language(&self) -> &Language {
        &self.0.language
    }
}

impl ElementType for RuleElementType {
    fn debug_name(&self) -> &str {
        &self.0.name
    }

    fn language(&self) -> Option<&Language> {
        Some(&self.0.language)
    }

    fn is_registered(&self) -> bool {
        self.0.registered
    }
}

macro_rules! identity_traits {
    ($ty:ty) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                Arc::ptr_eq(&self.0, &other.0)
            }
        }

        impl Eq for $ty {}

        impl Hash for $ty {
            #[inline]
            fn hash<H: Hasher>(&self, state: &mut H) {
                std::ptr::hash(Arc::as_ptr(&self.0), state);
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.debug_name())
            }
        }
    };
}

identity_traits!(TokenElementType);
identity_traits!(RuleElementType);

impl fmt::Debug for TokenElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenElementType({}, {})", self.debug_name(), self.0.symbol)
    }
}

impl fmt::Debug for RuleElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleElementType({}, {})", self.debug_name(), self.0.index)
    }
}

#[cfg(test)]
mod tests;
