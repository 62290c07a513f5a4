//! Element type registry.
//!
//! Turns a grammar's token vocabulary and rule names into element types,
//! once per language, and returns the same instances on every later request
//! so consumers can compare them by identity.
//!
//! ```text
//! let registry = ElementTypeRegistry::new();
//! registry.define_language(&calc, &vocabulary, &["file", "expr"], false);
//!
//! let tokens = registry.token_element_types(&calc);
//! let operators = registry.create_token_set(&calc, &[PLUS, MINUS]);
//! assert!(operators.contains(&tokens[PLUS.raw() as usize]));
//! ```
//!
//! Dialects created with [`Language::dialect`] share token instances with
//! their base language wherever display names match.

mod error;
mod registry;
mod token_set;

use std::sync::Once;

pub use eltype_ir::{
    base_language, ElementType, Language, RuleElementType, RuleIndex, SymbolId, TokenElementType,
    Vocabulary, VocabularyTable, EOF_NAME,
};
pub use error::RegistryError;
pub use registry::{global_registry, ElementTypeRegistry, SharedRegistry, SymbolMap};
pub use token_set::TokenSet;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=eltype_registry=debug` or `RUST_LOG=eltype_registry=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
