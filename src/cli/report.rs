// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boxed terminal reports for each subcommand.

use super::display::*;
use catalog_search::{RankingEngine, ScoredDocument, SearchAnalytics};

const TITLE_WIDTH: usize = 40;

pub fn print_results(query: &str, results: &[ScoredDocument<'_>]) {
    section_top(&format!("SEARCH \"{}\"", truncate(query, 50)));

    if results.is_empty() {
        row(&format!("  {}", themed(GRAY, &[DIM], "no matches")));
        section_bot();
        return;
    }

    for (rank, result) in results.iter().enumerate() {
        let doc = result.document;
        let title = pad_right(&truncate(&doc.title, TITLE_WIDTH), TITLE_WIDTH);
        row(&format!(
            " {:>2}. {} {}  {}",
            rank + 1,
            themed(BRIGHT_CYAN, &[BOLD], &title),
            score_value(result.relevance_score),
            percentage_bar(result.relevance_percentage)
        ));

        let mut detail = format!("     #{} {}", doc.id, match_type_label(result.match_type));
        if !doc.category.is_empty() {
            detail.push_str(&format!("  {}", themed(GRAY, &[], &truncate(&doc.category, 20))));
        }
        if let Some(price) = doc.price {
            detail.push_str(&format!("  {}", themed(YELLOW, &[], &format!("${:.2}", price))));
        }
        row(&detail);
    }

    section_mid("SUMMARY");
    row(&format!("  {} results", count_value(results.len())));
    section_bot();
}

pub fn print_suggestions(prefix: &str, suggestions: &[String]) {
    section_top(&format!("SUGGEST \"{}\"", truncate(prefix, 50)));
    if suggestions.is_empty() {
        row(&format!("  {}", themed(GRAY, &[DIM], "no suggestions")));
    }
    for suggestion in suggestions {
        row(&format!("  {}", themed(GREEN, &[], &truncate(suggestion, BOX_WIDTH - 4))));
    }
    section_bot();
}

pub fn print_analytics(query: &str, analytics: &SearchAnalytics) {
    let intent = analytics.query_intent();

    section_top(&format!("ANALYZE \"{}\"", truncate(query, 50)));
    row(&format!("  Query type        {}", themed(BRIGHT_CYAN, &[], &intent.query_type.to_string())));
    row(&format!("  Exact phrase      {}", flag(intent.exact_phrase)));
    row(&format!("  Has keywords      {}", flag(intent.has_keywords)));
    row(&format!("  Fuzzy search      {}", flag(intent.allows_fuzzy_search)));
    row(&format!("  Strategy          {}", themed(BLUE, &[BOLD], analytics.strategy().label())));

    section_mid("MATCHES");
    row(&format!("  Keyword           {}", count_value(analytics.keyword_matches())));
    row(&format!("  Phrase            {}", count_value(analytics.phrase_matches())));
    row(&format!("  Fuzzy             {}", count_value(analytics.fuzzy_matches())));
    row(&format!("  Total             {}", count_value(analytics.total_matches())));
    row(&format!("  Suggestions       {}", count_value(analytics.suggestions())));
    section_bot();
}

pub fn print_inspect(engine: &RankingEngine<'_>) {
    let index = engine.index();
    let config = engine.config();

    section_top("INDEX");
    row(&format!("  Documents         {}", count_value(index.doc_count())));
    row(&format!("  Vocabulary        {}", count_value(index.inverted.vocabulary_len())));
    row(&format!("  Trie tokens       {}", count_value(index.trie.len())));
    row(&format!("  Trie nodes        {}", count_value(index.trie.node_count())));

    section_mid("RANKING");
    row(&format!("  Exact boost       {}", config.exact_match_boost));
    row(&format!("  Phrase boost      {}", config.phrase_match_boost));
    row(&format!("  Fuzzy penalty     {}", config.fuzzy_match_penalty));
    row(&format!("  Max fuzzy edits   {}", config.max_fuzzy_distance));
    row(&format!("  Max results       {}", config.max_results));
    row(&format!("  Stop words        {}", count_value(config.stop_words.len())));
    section_bot();
}
