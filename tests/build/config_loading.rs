//! Ranking config loading tests.

use super::common::temp_json;
use catalog_search::{Error, RankingConfig};

#[test]
fn test_partial_overrides_keep_defaults() {
    let file = temp_json(r#"{"maxResults": 5, "exactMatchBoost": 3.0}"#);
    let config = RankingConfig::load(file.path()).unwrap();

    assert_eq!(config.max_results, 5);
    assert_eq!(config.exact_match_boost, 3.0);
    assert_eq!(config.phrase_match_boost, 1.5);
    assert_eq!(config.max_fuzzy_distance, 2);
    assert!(config.is_stop_word("the"));
}

#[test]
fn test_stop_words_override_is_lower_cased() {
    let file = temp_json(r#"{"stopWords": ["The", "OF"]}"#);
    let config = RankingConfig::load(file.path()).unwrap();

    assert_eq!(config.stop_words.len(), 2);
    assert!(config.is_stop_word("the"));
    assert!(config.is_stop_word("of"));
    assert!(!config.is_stop_word("and"));
}

#[test]
fn test_invalid_values_are_rejected() {
    for contents in [
        r#"{"maxResults": 0}"#,
        r#"{"exactMatchBoost": -1.0}"#,
        r#"{"fuzzyMatchPenalty": -0.5}"#,
    ] {
        let file = temp_json(contents);
        let err = RankingConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)), "{contents:?} gave {err:?}");
    }
}

#[test]
fn test_unknown_key_is_json_error() {
    let file = temp_json(r#"{"maxResult": 5}"#);
    let err = RankingConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::Json { .. }), "got {err:?}");
}

#[test]
fn test_missing_config_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RankingConfig::load(dir.path().join("ranking.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_empty_object_is_default() {
    let file = temp_json("{}");
    assert_eq!(RankingConfig::load(file.path()).unwrap(), RankingConfig::default());
}
