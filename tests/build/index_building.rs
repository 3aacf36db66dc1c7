//! Index construction tests.

use super::common::{doc_id, gadget_catalog, make_product, repeated_catalog};
use catalog_search::{tokenize, Catalog, Indexer};

#[test]
fn test_one_field_entry_per_document_in_id_order() {
    let catalog = gadget_catalog();
    let index = Indexer::new().build(&catalog);

    assert_eq!(index.doc_count(), catalog.len());
    let ids: Vec<u32> = index.fields.iter().map(|f| f.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_vocabulary_matches_trie() {
    let catalog = gadget_catalog();
    let index = Indexer::new().build(&catalog);

    assert_eq!(index.inverted.vocabulary_len(), index.trie.len());
    for (token, _) in index.inverted.iter() {
        assert!(index.trie.contains(token), "{token} missing from trie");
    }
}

#[test]
fn test_category_tokens_are_indexed() {
    let catalog = gadget_catalog();
    let index = Indexer::new().build(&catalog);

    let hits: Vec<u32> = index.inverted.search("accessories").into_iter().map(|id| id.get()).collect();
    assert_eq!(hits, vec![5]);
}

#[test]
fn test_fields_are_normalized() {
    let catalog: Catalog = vec![make_product(9, "USB-C Cable", "Braided, 2m", "Accessories")]
        .into_iter()
        .collect();
    let index = Indexer::new().build(&catalog);
    let fields = index.fields_of(doc_id(9)).unwrap();

    assert_eq!(fields.title, "usb-c cable");
    assert_eq!(fields.title_words, tokenize("USB-C Cable"));
    assert_eq!(fields.description_words, vec!["braided", "2m"]);
    assert!(index.fields_of(doc_id(10)).is_none());
}

#[test]
fn test_repeated_titles_share_postings() {
    let catalog = repeated_catalog(50, "Blue Mug");
    let index = Indexer::new().build(&catalog);

    assert_eq!(index.inverted.search("blue mug").len(), 50);
    assert_eq!(index.trie.autocomplete("m"), vec!["mug"]);
}

#[test]
fn test_empty_catalog_builds_empty_index() {
    let index = Indexer::new().build(&Catalog::new());

    assert_eq!(index.doc_count(), 0);
    assert!(index.trie.is_empty());
    assert_eq!(index.inverted.vocabulary_len(), 0);
}
