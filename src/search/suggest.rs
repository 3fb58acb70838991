// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! "Did you mean": fallback terms for queries that matched nothing.
//!
//! The vocabulary is every word of every title and description, in feed
//! order, first occurrence wins. A word qualifies when it is longer than
//! three characters and, for some query word, either contains it, is
//! contained by it, or is more than 60% similar to it.

use crate::fuzzy::similarity;
use crate::search::utils::split_words;
use crate::types::Article;
use std::collections::HashSet;

/// Most suggestions the engine returns.
pub const MAX_SUGGESTIONS: usize = 8;

/// Shortest word that can be suggested.
pub const MIN_SUGGESTION_CHARS: usize = 4;

/// Similarity a word must exceed to count as a likely typo.
pub const SIMILARITY_THRESHOLD: f64 = 0.6;

/// Unique lower-cased words of all titles and descriptions, first-seen order.
pub fn vocabulary(articles: &[Article]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for article in articles {
        let text = split_words(&article.title).chain(split_words(article.description_or_empty()));
        for word in text {
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }
    }
    words
}

/// Does `word` look related to any of the query words?
pub fn is_related(word: &str, query_words: &[String]) -> bool {
    query_words.iter().any(|query_word| {
        word.contains(query_word.as_str())
            || query_word.contains(word)
            || similarity(word, query_word) > SIMILARITY_THRESHOLD
    })
}

/// Up to [`MAX_SUGGESTIONS`] vocabulary words related to the query.
pub fn generate_suggestions(query_words: &[String], articles: &[Article]) -> Vec<String> {
    vocabulary(articles)
        .into_iter()
        .filter(|word| {
            word.chars().count() >= MIN_SUGGESTION_CHARS && is_related(word, query_words)
        })
        .take(MAX_SUGGESTIONS)
        .collect()
}
