use super::*;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

#[test]
fn test_token_identity() {
    let lang = Language::new("calc");
    let a = TokenElementType::new(SymbolId::new(3), "ID", Some(lang.clone()), false);
    let b = TokenElementType::new(SymbolId::new(3), "ID", Some(lang), false);

    assert_eq!(a, a.clone());
    assert_ne!(a, b);

    let set: HashSet<_> = [a.clone(), a.clone(), b].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_token_accessors() {
    let lang = Language::new("calc");
    let token = TokenElementType::new(SymbolId::new(7), "PLUS", Some(lang.clone()), true);

    assert_eq!(token.symbol(), SymbolId::new(7));
    assert_eq!(token.debug_name(), "PLUS");
    assert_eq!(token.language(), Some(&lang));
    assert!(token.is_registered());
    assert!(!token.is_eof());
}

#[test]
fn test_token_without_language() {
    let token = TokenElementType::new(SymbolId::EOF, "EOF", None, false);
    assert_eq!(token.language(), None);
    assert!(token.is_eof());
}

#[test]
fn test_rule_accessors() {
    let lang = Language::new("calc");
    let rule = RuleElementType::new(RuleIndex::new(2), "expr", lang.clone(), false);

    assert_eq!(rule.rule_index(), RuleIndex::new(2));
    assert_eq!(rule.debug_name(), "expr");
    assert_eq!(rule.rule_language(), &lang);
    assert_eq!(ElementType::language(&rule), Some(&lang));
    assert!(!rule.is_registered());
}

#[test]
fn test_rule_identity() {
    let lang = Language::new("calc");
    let a = RuleElementType::new(RuleIndex::new(0), "file", lang.clone(), false);
    let b = RuleElementType::new(RuleIndex::new(0), "file", lang, false);
    assert_ne!(a, b);
    assert_eq!(a, a.clone());
}

#[test]
fn test_formatting() {
    let lang = Language::new("calc");
    let token = TokenElementType::new(SymbolId::new(1), "'+'", Some(lang.clone()), false);
    let rule = RuleElementType::new(RuleIndex::new(4), "term", lang, false);

    assert_eq!(token.to_string(), "'+'");
    assert_eq!(format!("{token:?}"), "TokenElementType('+', 1)");
    assert_eq!(rule.to_string(), "term");
    assert_eq!(format!("{rule:?}"), "RuleElementType(term, 4)");
}
