//! Validation errors for language definitions.

use eltype_ir::{RuleIndex, SymbolId};

/// Why `try_define_language` refused a vocabulary or rule name list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The vocabulary reports a max symbol id below -1.
    #[error("vocabulary for `{language}` reports max symbol id {max}, below -1")]
    NegativeMaxSymbol { language: String, max: SymbolId },

    /// A symbol within range has no display name.
    #[error("vocabulary for `{language}` has no display name for symbol {symbol}")]
    MissingDisplayName { language: String, symbol: SymbolId },

    /// Two symbols share a display name, so the name map would be ambiguous.
    #[error(
        "vocabulary for `{language}` names both symbol {first} and symbol {second} `{name}`"
    )]
    DuplicateTokenName {
        language: String,
        name: String,
        first: SymbolId,
        second: SymbolId,
    },

    /// Two rules share a name.
    #[error("rules {first} and {second} of `{language}` are both named `{name}`")]
    DuplicateRuleName {
        language: String,
        name: String,
        first: RuleIndex,
        second: RuleIndex,
    },
}
