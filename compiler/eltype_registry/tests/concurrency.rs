//! Concurrent definition and lookup.
//!
//! Definitions from many threads must each see their own complete tables,
//! and readers racing a definition must see either nothing or everything.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::collections::HashSet;
use std::sync::Barrier;
use std::thread;

use eltype_registry::{
    ElementType, ElementTypeRegistry, Language, SharedRegistry, SymbolId, TokenElementType,
    VocabularyTable,
};
use pretty_assertions::assert_eq;

const THREADS: usize = 16;

fn vocabulary_for(n: usize) -> VocabularyTable {
    let names = (0..=n + 3).map(|i| {
        if i == 0 {
            None
        } else if i % 2 == 0 {
            Some(format!("SHARED_{i}"))
        } else {
            Some(format!("L{n}_TOKEN_{i}"))
        }
    });
    VocabularyTable::from_symbolic_names(names)
}

fn rules_for(n: usize) -> Vec<String> {
    (0..n + 2).map(|i| format!("l{n}_rule_{i}")).collect()
}

#[test]
fn test_concurrent_definitions_of_distinct_languages() {
    let registry = ElementTypeRegistry::new();
    let languages: Vec<Language> = (0..THREADS)
        .map(|n| Language::new(format!("lang{n}")))
        .collect();
    let barrier = Barrier::new(THREADS);

    thread::scope(|s| {
        for (n, language) in languages.iter().enumerate() {
            let registry = &registry;
            let barrier = &barrier;
            s.spawn(move || {
                let vocab = vocabulary_for(n);
                let rules = rules_for(n);
                barrier.wait();
                registry.define_language(language, &vocab, &rules, false);
            });
        }
    });

    assert_eq!(registry.language_count(), THREADS);
    for (n, language) in languages.iter().enumerate() {
        let tokens = registry.token_element_types(language);
        assert_eq!(tokens.len(), n + 4);
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.symbol().index(), Some(i));
            assert_eq!(token.language(), Some(language));
        }
        let distinct: HashSet<&TokenElementType> = tokens.iter().collect();
        assert_eq!(distinct.len(), tokens.len());

        let rules = registry.rule_element_types(language);
        assert_eq!(rules.len(), n + 2);
        assert!(rules.iter().all(|r| r.rule_language() == language));

        let token_names = registry.token_name_to_id_map(language).unwrap();
        assert_eq!(token_names.len(), n + 4);
        let rule_names = registry.rule_name_to_index_map(language).unwrap();
        assert_eq!(rule_names.len(), n + 2);
        assert_eq!(
            rule_names.get(format!("l{n}_rule_0").as_str()).copied(),
            Some(eltype_registry::RuleIndex::new(0))
        );
    }
}

#[test]
fn test_concurrent_definitions_of_same_language() {
    let registry = SharedRegistry::new();
    let calc = Language::new("calc");
    let barrier = Barrier::new(THREADS);

    let seen: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let registry = registry.clone();
                let calc = calc.clone();
                let barrier = &barrier;
                s.spawn(move || {
                    barrier.wait();
                    registry.define_language(&calc, &vocabulary_for(3), &rules_for(3), false);
                    registry.token_element_types(&calc)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let first = &seen[0];
    assert_eq!(first.len(), 7);
    for tokens in &seen {
        assert!(std::sync::Arc::ptr_eq(first, tokens));
    }
    assert_eq!(registry.language_count(), 1);
}

#[test]
fn test_concurrent_dialects_share_tokens() {
    let registry = ElementTypeRegistry::new();
    let base = Language::new("base");
    let dialects: Vec<Language> = (0..THREADS)
        .map(|n| Language::dialect(format!("dialect{n}"), &base))
        .collect();
    let barrier = Barrier::new(THREADS);

    thread::scope(|s| {
        for (n, dialect) in dialects.iter().enumerate() {
            let registry = &registry;
            let barrier = &barrier;
            s.spawn(move || {
                barrier.wait();
                registry.define_language(dialect, &vocabulary_for(n), &rules_for(n), false);
            });
        }
    });

    // SHARED_2 exists in every dialect's vocabulary at symbol 2.
    let shared: HashSet<TokenElementType> = dialects
        .iter()
        .map(|d| registry.token_element_types(d)[2].clone())
        .collect();
    assert_eq!(shared.len(), 1);
    let canonical = shared.into_iter().next().unwrap();
    assert_eq!(canonical.debug_name(), "SHARED_2");
    assert_eq!(
        registry.intern_token_type(SymbolId::new(2), "SHARED_2", Some(&base), false),
        canonical
    );
}

#[test]
fn test_readers_see_complete_tables() {
    let registry = ElementTypeRegistry::new();
    let calc = Language::new("calc");
    let vocab = vocabulary_for(8);
    let rules = rules_for(8);
    let expected_tokens = 12;
    let expected_rules = 10;

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..1_000 {
                    let tokens = registry.token_element_types(&calc);
                    let rules = registry.rule_element_types(&calc);
                    assert!(tokens.is_empty() || tokens.len() == expected_tokens);
                    assert!(rules.is_empty() || rules.len() == expected_rules);
                    if let Some(names) = registry.token_name_to_id_map(&calc) {
                        assert_eq!(names.len(), expected_tokens);
                    }
                }
            });
        }
        s.spawn(|| registry.define_language(&calc, &vocab, &rules, false));
    });

    assert_eq!(registry.token_element_types(&calc).len(), expected_tokens);
}

#[test]
fn test_concurrent_eof_requests() {
    let registry = ElementTypeRegistry::new();
    let calc = Language::new("calc");
    let barrier = Barrier::new(THREADS);

    let seen: HashSet<TokenElementType> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    registry.eof_element_type(&calc)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(seen.len(), 1);
}
