use super::*;
use pretty_assertions::assert_eq;

fn names(entries: &[Option<&str>]) -> Vec<Option<String>> {
    entries.iter().map(|name| name.map(String::from)).collect()
}

#[test]
fn test_max_symbol_from_longest_table() {
    let vocab = VocabularyTable::new(
        names(&[None, Some("'+'")]),
        names(&[None, Some("PLUS"), Some("ID"), Some("WS")]),
        Vec::new(),
    );
    assert_eq!(vocab.max_symbol_id(), SymbolId::new(3));
}

#[test]
fn test_empty_tables_have_no_symbols() {
    let vocab = VocabularyTable::default();
    assert_eq!(vocab.max_symbol_id(), SymbolId::EOF);

    let vocab = VocabularyTable::new(Vec::new(), Vec::new(), Vec::new());
    assert_eq!(vocab.max_symbol_id(), SymbolId::new(-1));
    assert_eq!(vocab.display_name(SymbolId::INVALID), None);
    assert_eq!(vocab.display_name(SymbolId::EOF).as_deref(), Some(EOF_NAME));
}

#[test]
fn test_single_slot_table_keeps_invalid_slot() {
    let vocab = VocabularyTable::from_symbolic_names([None::<&str>]);
    assert_eq!(vocab.max_symbol_id(), SymbolId::INVALID);
    assert_eq!(vocab.display_name(SymbolId::INVALID).as_deref(), Some("0"));
}

#[test]
fn test_display_name_fallback_order() {
    let vocab = VocabularyTable::new(
        names(&[None, Some("'+'"), None, None]),
        names(&[None, Some("PLUS"), Some("ID"), None]),
        names(&[None, None, None, Some("whitespace")]),
    );

    assert_eq!(vocab.display_name(SymbolId::new(1)).as_deref(), Some("'+'"));
    assert_eq!(vocab.display_name(SymbolId::new(2)).as_deref(), Some("ID"));
    assert_eq!(
        vocab.display_name(SymbolId::new(3)).as_deref(),
        Some("whitespace")
    );
    assert_eq!(vocab.display_name(SymbolId::INVALID).as_deref(), Some("0"));
}

#[test]
fn test_display_name_out_of_range() {
    let vocab = VocabularyTable::from_symbolic_names([None, Some("ID")]);
    assert_eq!(vocab.display_name(SymbolId::new(2)), None);
    assert_eq!(vocab.display_name(SymbolId::new(-5)), None);
}

#[test]
fn test_eof_is_always_named() {
    let vocab = VocabularyTable::default();
    assert_eq!(vocab.display_name(SymbolId::EOF).as_deref(), Some(EOF_NAME));
    assert_eq!(vocab.symbolic_name(SymbolId::EOF), Some(EOF_NAME));
}

#[test]
fn test_vocabulary_by_reference() {
    fn max_of(vocab: impl Vocabulary) -> SymbolId {
        vocab.max_symbol_id()
    }

    let vocab = VocabularyTable::from_symbolic_names([None, Some("A"), Some("B")]);
    assert_eq!(max_of(&vocab), SymbolId::new(2));
}
