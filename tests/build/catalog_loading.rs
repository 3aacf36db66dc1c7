//! Catalog file loading tests.

use super::common::temp_json;
use catalog_search::{Catalog, DocId, Error};

#[test]
fn test_load_wrapped_catalog() {
    let file = temp_json(
        r#"{
            "products": [
                {"id": 1, "title": "iPhone 14", "description": "Apple smartphone", "category": "smartphones", "price": 799, "thumbnail": "https://cdn.example.com/1.jpg"},
                {"id": 2, "title": "Samsung Galaxy", "description": "Android smartphone", "category": "smartphones", "rating": 4.5}
            ],
            "total": 2,
            "skip": 0,
            "limit": 30
        }"#,
    );

    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);

    let iphone = catalog.get(DocId(1)).unwrap();
    assert_eq!(iphone.price, Some(799.0));
    assert_eq!(iphone.image.as_deref(), Some("https://cdn.example.com/1.jpg"));
}

#[test]
fn test_load_bare_array_with_in_app_names() {
    let file = temp_json(r#"[{"id": 7, "name": "Desk Lamp", "image": "lamp.png"}]"#);

    let catalog = Catalog::load(file.path()).unwrap();
    let lamp = catalog.get(DocId(7)).unwrap();
    assert_eq!(lamp.title, "Desk Lamp");
    assert_eq!(lamp.description, "");
    assert_eq!(lamp.category, "");
    assert_eq!(lamp.image.as_deref(), Some("lamp.png"));
}

#[test]
fn test_duplicate_ids_keep_the_later_record() {
    let file = temp_json(
        r#"[
            {"id": 1, "title": "First"},
            {"id": 2, "title": "Other"},
            {"id": 1, "title": "Second"}
        ]"#,
    );

    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(DocId(1)).unwrap().title, "Second");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = Catalog::load(&path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "got {err:?}");
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_malformed_json_is_json_error() {
    for contents in ["{not json", r#"{"items": []}"#, r#"[{"title": "no id"}]"#] {
        let file = temp_json(contents);
        let err = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Json { .. }), "{contents:?} gave {err:?}");
    }
}
