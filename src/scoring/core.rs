// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Six rules, evaluated in order against the lower-cased title and
//! description:
//!
//! | # | Rule                       | Points                      | Tag                  |
//! |---|----------------------------|-----------------------------|----------------------|
//! | 1 | query ⊂ title              | 100                         | `exact_phrase_title` |
//! | 2 | every word ⊂ title         | 50                          | `all_words_title`    |
//! | 3 | words in title             | 10 each                     | `partial_title`      |
//! | 4 | words in description       | 3 each                      | `description`        |
//! | 5 | recency                    | 30 / 20 / 10 / 0            | none                 |
//! | 6 | frequency                  | 2 per title or desc word    | none                 |
//!
//! A tier tag is only written when no earlier tier wrote one, so
//! `match_details` holds at most one entry. Recency and frequency never tag,
//! which means a fresh article can score above zero with empty
//! `match_details`.
//!
//! Note that rule 2 is vacuously true for an empty word list, but
//! [`crate::search`] never scores a blank query.

use crate::scoring::recency::recency_boost;
use crate::search::utils::Query;
use crate::types::{Article, MatchKind};
use chrono::{DateTime, Utc};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Whole query found verbatim in the title.
pub const EXACT_PHRASE_TITLE_SCORE: u32 = 100;

/// Every query word found somewhere in the title.
pub const ALL_WORDS_TITLE_SCORE: u32 = 50;

/// Per query word found in the title.
pub const TITLE_WORD_SCORE: u32 = 10;

/// Per query word found in the description.
pub const DESCRIPTION_WORD_SCORE: u32 = 3;

/// Per query word found in title or description, counted once per field.
pub const FREQUENCY_WORD_SCORE: u32 = 2;

/// Score breakdown for one article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleScore {
    pub score: u32,
    pub match_details: Vec<MatchKind>,
    pub title_matches: u32,
    pub description_matches: u32,
}

impl ArticleScore {
    /// Record a tier tag unless one is already present.
    fn tag_if_untagged(&mut self, kind: MatchKind) {
        if self.match_details.is_empty() {
            self.match_details.push(kind);
        }
    }
}

/// Apply every scoring rule to one article.
pub fn score_article(query: &Query, article: &Article, now: DateTime<Utc>) -> ArticleScore {
    let title = article.title.to_lowercase();
    let description = article.description_or_empty().to_lowercase();
    let mut result = ArticleScore::default();

    // 1. Exact phrase in title
    if title.contains(query.phrase.as_str()) {
        result.score += EXACT_PHRASE_TITLE_SCORE;
        result.tag_if_untagged(MatchKind::ExactPhraseTitle);
    }

    // 2. All words in title
    if query.words.iter().all(|word| title.contains(word.as_str())) {
        result.score += ALL_WORDS_TITLE_SCORE;
        result.tag_if_untagged(MatchKind::AllWordsTitle);
    }

    // 3. Partial title matches
    result.title_matches = count_present(&query.words, &title);
    if result.title_matches > 0 {
        result.score += result.title_matches * TITLE_WORD_SCORE;
        result.tag_if_untagged(MatchKind::PartialTitle);
    }

    // 4. Description matches
    result.description_matches = count_present(&query.words, &description);
    if result.description_matches > 0 {
        result.score += result.description_matches * DESCRIPTION_WORD_SCORE;
        result.tag_if_untagged(MatchKind::Description);
    }

    // 5. Recency
    result.score += recency_boost(article.effective_date(), now);

    // 6. Frequency
    result.score += (result.title_matches + result.description_matches) * FREQUENCY_WORD_SCORE;

    result
}

/// How many of `words` occur as substrings of `haystack`.
fn count_present(words: &[String], haystack: &str) -> u32 {
    words
        .iter()
        .filter(|word| haystack.contains(word.as_str()))
        .count() as u32
}
