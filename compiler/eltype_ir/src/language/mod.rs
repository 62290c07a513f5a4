//! Language handles.
//!
//! A `Language` names one grammar or dialect. Dialects point at the language
//! they derive from, and token identity is shared along that chain.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

/// Sentinel for element types that belong to no particular language.
static ANY: OnceLock<Language> = OnceLock::new();

struct LanguageData {
    id: Box<str>,
    base: Option<Language>,
}

/// Handle to a grammar or dialect.
///
/// Cloning is cheap and keeps identity: clones compare equal, while two
/// languages created separately never do, even with the same id.
#[derive(Clone)]
pub struct Language(Arc<LanguageData>);

impl Language {
    /// Create a root language.
    pub fn new(id: impl Into<Box<str>>) -> Self {
        Language(Arc::new(LanguageData {
            id: id.into(),
            base: None,
        }))
    }

    /// Create a dialect deriving from `base`.
    pub fn dialect(id: impl Into<Box<str>>, base: &Language) -> Self {
        Language(Arc::new(LanguageData {
            id: id.into(),
            base: Some(base.clone()),
        }))
    }

    /// The process-wide "any language" sentinel.
    pub fn any() -> Language {
        ANY.get_or_init(|| Language::new("any")).clone()
    }

    pub fn id(&self) -> &str {
        &self.0.id
    }

    /// The language this one directly derives from.
    pub fn base(&self) -> Option<&Language> {
        self.0.base.as_ref()
    }
}

/// Resolve the scope that token identity is shared in.
///
/// A missing language resolves to [`Language::any`]. A dialect resolves to
/// the language it directly derives from, and any other language to itself.
pub fn base_language(language: Option<&Language>) -> Language {
    match language {
        Some(language) => language.base().unwrap_or(language).clone(),
        None => Language::any(),
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Language {}

impl Hash for Language {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.0), state);
    }
}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.base() {
            Some(base) => write!(f, "Language({} : {})", self.id(), base.id()),
            None => write!(f, "Language({})", self.id()),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
