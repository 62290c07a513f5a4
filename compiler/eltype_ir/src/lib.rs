//! Eltype IR - identity types for grammar element types
//!
//! This crate holds the data that the element type registry hands out:
//! - `SymbolId` and `RuleIndex` for raw grammar numbering
//! - `Language` handles with a base-language relation
//! - `Vocabulary` for token display names
//! - `TokenElementType` / `RuleElementType` with identity equality
//!
//! # Identity
//!
//! `Language`, `TokenElementType` and `RuleElementType` are `Arc`-backed
//! handles. Equality and hashing use the allocation address, never the
//! contents, so two handles compare equal only if they are clones of the
//! same instance. Canonical instances come from `eltype_registry`.

mod element_type;
mod language;
mod symbol;
mod vocabulary;

pub use element_type::{ElementType, RuleElementType, TokenElementType};
pub use language::{base_language, Language};
pub use symbol::{RuleIndex, SymbolId, EOF_NAME};
pub use vocabulary::{Vocabulary, VocabularyTable};
