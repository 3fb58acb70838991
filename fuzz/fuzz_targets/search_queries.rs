// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary queries and article text at the engine to verify it never
//! panics and never returns results that break the ranking invariants.

#![no_main]

use arbitrary::Arbitrary;
use kabar::testing::frozen_engine;
use kabar::{Article, MAX_SUGGESTIONS};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzArticle {
    id: i64,
    title: String,
    description: Option<String>,
    kategori: Option<String>,
    created_at: Option<String>,
}

#[derive(Debug, Arbitrary)]
struct SearchInput {
    query: String,
    category: String,
    articles: Vec<FuzzArticle>,
}

fuzz_target!(|input: SearchInput| {
    let articles: Vec<Article> = input
        .articles
        .into_iter()
        .take(32)
        .map(|a| Article {
            description: a.description,
            kategori: a.kategori,
            created_at: a.created_at,
            ..Article::new(a.id, &a.title)
        })
        .collect();

    let engine = frozen_engine();
    let result = engine.search_with_category(&input.query, &input.category, &articles);

    assert_eq!(result.total_results, result.results.len());
    assert!(result.suggestions.len() <= MAX_SUGGESTIONS);
    for pair in result.results.windows(2) {
        assert!(pair[0].search_score >= pair[1].search_score, "results out of order");
    }
    for scored in &result.results {
        assert!(scored.search_score > 0);
        assert!(scored.match_details.len() <= 1);
    }
});
