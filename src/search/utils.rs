// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for search modules: query parsing and word splitting.

/// A normalized query: the trimmed lower-case phrase and its words.
///
/// The phrase keeps interior whitespace exactly as typed (after lower-casing),
/// so `"santri  digital"` only phrase-matches a title with the same double
/// space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub phrase: String,
    pub words: Vec<String>,
}

impl Query {
    /// Lower-case, trim, split on whitespace runs. `None` for a blank query.
    ///
    /// # Example
    ///
    /// ```
    /// use kabar::Query;
    ///
    /// let query = Query::parse("  Santri Digital ").unwrap();
    /// assert_eq!(query.phrase, "santri digital");
    /// assert_eq!(query.words, vec!["santri", "digital"]);
    /// assert!(Query::parse("   ").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Query> {
        let phrase = raw.trim().to_lowercase();
        if phrase.is_empty() {
            return None;
        }
        let words = phrase.split_whitespace().map(str::to_string).collect();
        Some(Query { phrase, words })
    }
}

/// Lower-cased whitespace-delimited words of `text`, in order, with repeats.
pub fn split_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_lowercase)
}
