//! Per-language element type registry.
//!
//! Maps a grammar's token symbols and rule names to element types, once per
//! language, and hands out the same instances on every later request.
//!
//! # Tables
//!
//! - `languages`: token list, rule list and both name maps of each defined
//!   language, published together
//! - `interned`: canonical token types keyed by base language, then name
//! - `eof_types`: one end-of-input type per exact language
//!
//! Entries are only ever added. Nothing is evicted or replaced.
//!
//! # Thread Safety
//! Every table sits behind a `RwLock`, so a reader sees either no entry or a
//! complete one. Definitions are serialized by a single mutex across all
//! languages; interning and the EOF table use read-then-write with a
//! re-check under the write lock.

use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

use eltype_ir::{
    base_language, Language, RuleElementType, RuleIndex, SymbolId, TokenElementType, Vocabulary,
    EOF_NAME,
};
use parking_lot::{Mutex, RwLock};
use rustc_hash::{FxBuildHasher, FxHashMap};
use tracing::{debug, trace, warn};

use crate::error::RegistryError;
use crate::token_set::TokenSet;

/// Name to id map for one language's tokens or rules.
pub type SymbolMap<T> = FxHashMap<Box<str>, T>;

/// Canonical token types of one base language, by display name.
type InternTable = FxHashMap<Box<str>, TokenElementType>;

/// Everything built for one language by a definition.
struct LanguageTables {
    tokens: Arc<[TokenElementType]>,
    rules: Arc<[RuleElementType]>,
    token_names: Arc<SymbolMap<SymbolId>>,
    rule_names: Arc<SymbolMap<RuleIndex>>,
}

/// Process-lifetime cache of element types per language.
///
/// Create one with [`ElementTypeRegistry::new`] and pass it by reference,
/// or use [`global_registry`] for the process-wide instance.
pub struct ElementTypeRegistry {
    /// Serializes definitions of all languages.
    define_lock: Mutex<()>,
    languages: RwLock<FxHashMap<Language, Arc<LanguageTables>>>,
    /// Keyed by base language, so dialects share token instances.
    interned: RwLock<FxHashMap<Language, InternTable>>,
    /// Keyed by exact language.
    eof_types: RwLock<FxHashMap<Language, TokenElementType>>,
}

impl ElementTypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty registry sized for `languages` definitions.
    pub fn with_capacity(languages: usize) -> Self {
        ElementTypeRegistry {
            define_lock: Mutex::new(()),
            languages: RwLock::new(FxHashMap::with_capacity_and_hasher(
                languages,
                FxBuildHasher,
            )),
            interned: RwLock::new(FxHashMap::default()),
            eof_types: RwLock::new(FxHashMap::with_capacity_and_hasher(
                languages,
                FxBuildHasher,
            )),
        }
    }

    /// Define the element types of `language`.
    ///
    /// Builds the token list (symbols 0 through the vocabulary's max,
    /// inclusive), the rule list, and the token and rule name maps. If the
    /// language is already defined this does nothing: the first definition
    /// stays and later vocabularies are ignored.
    ///
    /// `register` is recorded on every element type created here.
    ///
    /// Vocabularies are trusted. A symbol without a display name is named by
    /// its decimal id, and a name used twice maps to its first id. Use
    /// [`try_define_language`](Self::try_define_language) to reject such input.
    #[tracing::instrument(level = "debug", skip_all, fields(language = %language))]
    pub fn define_language<V, S>(
        &self,
        language: &Language,
        vocabulary: &V,
        rule_names: &[S],
        register: bool,
    ) where
        V: Vocabulary + ?Sized,
        S: AsRef<str>,
    {
        let _guard = self.define_lock.lock();
        if self.is_defined(language) {
            debug!("already defined, keeping existing element types");
            return;
        }
        let names = display_names(vocabulary);
        self.publish(language, &names, rule_names, register);
    }

    /// Validate the vocabulary and rule names, then define `language`.
    ///
    /// On error nothing is recorded. Validation runs even when the language
    /// is already defined.
    #[tracing::instrument(level = "debug", skip_all, fields(language = %language))]
    pub fn try_define_language<V, S>(
        &self,
        language: &Language,
        vocabulary: &V,
        rule_names: &[S],
        register: bool,
    ) -> Result<(), RegistryError>
    where
        V: Vocabulary + ?Sized,
        S: AsRef<str>,
    {
        let names = validated_display_names(language, vocabulary)?;
        validate_rule_names(language, rule_names)?;

        let _guard = self.define_lock.lock();
        if self.is_defined(language) {
            debug!("already defined, keeping existing element types");
            return Ok(());
        }
        self.publish(language, &names, rule_names, register);
        Ok(())
    }

    /// Build all four tables and publish them in one write.
    ///
    /// Caller holds `define_lock`.
    fn publish<S: AsRef<str>>(
        &self,
        language: &Language,
        names: &[(SymbolId, Cow<'_, str>)],
        rule_names: &[S],
        register: bool,
    ) {
        let tables = LanguageTables {
            tokens: self.create_token_types(language, names, register),
            rules: create_rule_types(language, rule_names, register),
            token_names: Arc::new(token_name_map(names)),
            rule_names: Arc::new(rule_index_map(rule_names)),
        };
        debug!(
            tokens = tables.tokens.len(),
            rules = tables.rules.len(),
            "element types defined"
        );
        self.languages
            .write()
            .insert(language.clone(), Arc::new(tables));
    }

    /// Token list of `language`, interning each name under its base language.
    fn create_token_types(
        &self,
        language: &Language,
        names: &[(SymbolId, Cow<'_, str>)],
        register: bool,
    ) -> Arc<[TokenElementType]> {
        let base = base_language(Some(language));
        let mut interned = self.interned.write();
        let table = interned.entry(base).or_default();
        names
            .iter()
            .map(|(symbol, name)| intern_in(table, *symbol, name, Some(language), register))
            .collect()
    }

    /// Canonical token type for `name` in the base language of `language`.
    ///
    /// The first call for a (base language, name) pair creates the instance;
    /// every later call returns it, whatever `symbol`, `language` or
    /// `register` it passes. Two dialects that disagree on the id of a shared
    /// name therefore both get the first one's.
    ///
    /// `None` interns under [`Language::any`].
    pub fn intern_token_type(
        &self,
        symbol: SymbolId,
        name: &str,
        language: Option<&Language>,
        register: bool,
    ) -> TokenElementType {
        let base = base_language(language);

        // Fast path: check if already interned
        {
            let interned = self.interned.read();
            if let Some(existing) = interned.get(&base).and_then(|table| table.get(name)) {
                return existing.clone();
            }
        }

        // Slow path: intern_in re-checks under the write lock
        let mut interned = self.interned.write();
        let table = interned.entry(base).or_default();
        intern_in(table, symbol, name, language, register)
    }

    /// The end-of-input element type of exactly `language`.
    ///
    /// Not shared with dialects or the base language.
    pub fn eof_element_type(&self, language: &Language) -> TokenElementType {
        if let Some(eof) = self.eof_types.read().get(language) {
            return eof.clone();
        }

        self.eof_types
            .write()
            .entry(language.clone())
            .or_insert_with(|| {
                TokenElementType::new(SymbolId::EOF, EOF_NAME, Some(language.clone()), false)
            })
            .clone()
    }

    /// Whether `language` has been defined.
    pub fn is_defined(&self, language: &Language) -> bool {
        self.languages.read().contains_key(language)
    }

    fn tables(&self, language: &Language) -> Option<Arc<LanguageTables>> {
        self.languages.read().get(language).cloned()
    }

    /// Token types of `language`, indexed by symbol id.
    ///
    /// Empty if the language was never defined; see [`is_defined`](Self::is_defined)
    /// to tell that apart from an empty vocabulary.
    pub fn token_element_types(&self, language: &Language) -> Arc<[TokenElementType]> {
        self.tables(language)
            .map_or_else(|| Arc::from(Vec::new()), |tables| Arc::clone(&tables.tokens))
    }

    /// Rule types of `language`, indexed by rule index.
    ///
    /// Empty if the language was never defined.
    pub fn rule_element_types(&self, language: &Language) -> Arc<[RuleElementType]> {
        self.tables(language)
            .map_or_else(|| Arc::from(Vec::new()), |tables| Arc::clone(&tables.rules))
    }

    /// Token display name to symbol id, or `None` if never defined.
    pub fn token_name_to_id_map(&self, language: &Language) -> Option<Arc<SymbolMap<SymbolId>>> {
        self.tables(language)
            .map(|tables| Arc::clone(&tables.token_names))
    }

    /// Rule name to rule index, or `None` if never defined.
    pub fn rule_name_to_index_map(
        &self,
        language: &Language,
    ) -> Option<Arc<SymbolMap<RuleIndex>>> {
        self.tables(language)
            .map(|tables| Arc::clone(&tables.rule_names))
    }

    /// Token type for one symbol id, as a lexer adapter needs it.
    ///
    /// `EOF` gives the language's end-of-input type, even if the language was
    /// never defined. Other ids outside the token list give `None`.
    pub fn token_element_type(
        &self,
        language: &Language,
        symbol: SymbolId,
    ) -> Option<TokenElementType> {
        if symbol.is_eof() {
            return Some(self.eof_element_type(language));
        }
        let tables = self.tables(language)?;
        tables.tokens.get(symbol.index()?).cloned()
    }

    /// Rule type for one rule index.
    pub fn rule_element_type(
        &self,
        language: &Language,
        rule: RuleIndex,
    ) -> Option<RuleElementType> {
        self.tables(language)?.rules.get(rule.index()).cloned()
    }

    /// Token type by display name.
    pub fn token_type_by_name(&self, language: &Language, name: &str) -> Option<TokenElementType> {
        let tables = self.tables(language)?;
        let symbol = *tables.token_names.get(name)?;
        tables.tokens.get(symbol.index()?).cloned()
    }

    /// Rule type by rule name.
    pub fn rule_type_by_name(&self, language: &Language, name: &str) -> Option<RuleElementType> {
        let tables = self.tables(language)?;
        let rule = *tables.rule_names.get(name)?;
        tables.rules.get(rule.index()).cloned()
    }

    /// Build a token set from raw symbol ids.
    ///
    /// `EOF` contributes the language's end-of-input type. Ids inside the
    /// token list contribute that entry. Anything else, including every id of
    /// a language never defined, contributes nothing.
    pub fn create_token_set(&self, language: &Language, symbols: &[SymbolId]) -> TokenSet {
        let tokens = self.token_element_types(language);
        let mut set = TokenSet::new();
        for &symbol in symbols {
            if symbol.is_eof() {
                set.insert(self.eof_element_type(language));
            } else if let Some(token) = symbol.index().and_then(|index| tokens.get(index)) {
                set.insert(token.clone());
            }
        }
        set
    }

    /// Number of defined languages.
    pub fn language_count(&self) -> usize {
        self.languages.read().len()
    }

    /// Snapshot of the defined languages, in no particular order.
    pub fn defined_languages(&self) -> Vec<Language> {
        self.languages.read().keys().cloned().collect()
    }
}

impl Default for ElementTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Look up or create `name` in one base language's table.
fn intern_in(
    table: &mut InternTable,
    symbol: SymbolId,
    name: &str,
    language: Option<&Language>,
    register: bool,
) -> TokenElementType {
    if let Some(existing) = table.get(name) {
        return existing.clone();
    }
    trace!(%symbol, name, "interning token type");
    let token = TokenElementType::new(symbol, name, language.cloned(), register);
    table.insert(name.into(), token.clone());
    token
}

/// Display names for symbols 0 through max, falling back to the decimal id.
fn display_names<V: Vocabulary + ?Sized>(vocabulary: &V) -> Vec<(SymbolId, Cow<'_, str>)> {
    SymbolId::up_to(vocabulary.max_symbol_id())
        .map(|symbol| {
            let name = vocabulary.display_name(symbol).unwrap_or_else(|| {
                warn!(%symbol, "vocabulary has no display name, using the symbol id");
                Cow::Owned(symbol.to_string())
            });
            (symbol, name)
        })
        .collect()
}

fn validated_display_names<'v, V: Vocabulary + ?Sized>(
    language: &Language,
    vocabulary: &'v V,
) -> Result<Vec<(SymbolId, Cow<'v, str>)>, RegistryError> {
    let max = vocabulary.max_symbol_id();
    // -1 is an empty vocabulary.
    if max.raw() < SymbolId::EOF.raw() {
        return Err(RegistryError::NegativeMaxSymbol {
            language: language.id().to_owned(),
            max,
        });
    }

    let mut names = Vec::new();
    let mut seen: FxHashMap<Cow<'v, str>, SymbolId> = FxHashMap::default();
    for symbol in SymbolId::up_to(max) {
        let name = vocabulary
            .display_name(symbol)
            .ok_or_else(|| RegistryError::MissingDisplayName {
                language: language.id().to_owned(),
                symbol,
            })?;
        if let Some(&first) = seen.get(&name) {
            return Err(RegistryError::DuplicateTokenName {
                language: language.id().to_owned(),
                name: name.into_owned(),
                first,
                second: symbol,
            });
        }
        seen.insert(name.clone(), symbol);
        names.push((symbol, name));
    }
    Ok(names)
}

fn validate_rule_names<S: AsRef<str>>(
    language: &Language,
    rule_names: &[S],
) -> Result<(), RegistryError> {
    let mut seen: FxHashMap<&str, RuleIndex> = FxHashMap::default();
    for (index, name) in (0u32..).zip(rule_names) {
        let name: &str = name.as_ref();
        if let Some(&first) = seen.get(name) {
            return Err(RegistryError::DuplicateRuleName {
                language: language.id().to_owned(),
                name: name.to_owned(),
                first,
                second: RuleIndex::new(index),
            });
        }
        seen.insert(name, RuleIndex::new(index));
    }
    Ok(())
}

/// Fresh rule types; rules are never shared between languages.
fn create_rule_types<S: AsRef<str>>(
    language: &Language,
    rule_names: &[S],
    register: bool,
) -> Arc<[RuleElementType]> {
    (0u32..)
        .zip(rule_names)
        .map(|(index, name)| {
            let name: &str = name.as_ref();
            RuleElementType::new(RuleIndex::new(index), name, language.clone(), register)
        })
        .collect()
}

/// First symbol wins for a repeated name.
fn token_name_map(names: &[(SymbolId, Cow<'_, str>)]) -> SymbolMap<SymbolId> {
    let mut map = SymbolMap::with_capacity_and_hasher(names.len(), FxBuildHasher);
    for (symbol, name) in names {
        map.entry(Box::from(&**name)).or_insert(*symbol);
    }
    map
}

/// First rule wins for a repeated name.
fn rule_index_map<S: AsRef<str>>(rule_names: &[S]) -> SymbolMap<RuleIndex> {
    let mut map = SymbolMap::with_capacity_and_hasher(rule_names.len(), FxBuildHasher);
    for (index, name) in (0u32..).zip(rule_names) {
        let name: &str = name.as_ref();
        map.entry(Box::from(name)).or_insert(RuleIndex::new(index));
    }
    map
}

/// Global registry singleton.
static GLOBAL_REGISTRY: OnceLock<ElementTypeRegistry> = OnceLock::new();

/// The process-wide registry, created on first use and never torn down.
pub fn global_registry() -> &'static ElementTypeRegistry {
    GLOBAL_REGISTRY.get_or_init(ElementTypeRegistry::new)
}

/// Shared registry for handing one registry to several owners.
///
/// # When to Use This vs `&ElementTypeRegistry`
///
/// **Use `SharedRegistry` (Arc) when** threads or plugin components need
/// their own owned handle to the same registry.
///
/// **Use `&ElementTypeRegistry` when** the caller owns the registry, or it
/// is the `'static` one from [`global_registry`].
#[derive(Clone, Default)]
pub struct SharedRegistry(Arc<ElementTypeRegistry>);

impl SharedRegistry {
    /// Create a new shared registry.
    pub fn new() -> Self {
        SharedRegistry(Arc::new(ElementTypeRegistry::new()))
    }
}

impl std::ops::Deref for SharedRegistry {
    type Target = ElementTypeRegistry;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
