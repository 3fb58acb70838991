// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records that flow through the engine.
//!
//! `Article` is whatever the feed hands us. The engine never mutates it; it
//! wraps each match in a `ScoredArticle` and returns those inside a
//! `SearchResult` envelope. Serialization is camelCase and flattens the
//! original record, so a consumer that already renders feed articles can
//! render results without a second schema.
//!
//! # Invariants
//!
//! - **ScoredArticle**: `search_score > 0` for everything inside a
//!   `SearchResult`, and `match_details` never holds the same kind twice.
//!
//! - **SearchResult**: `total_results == results.len()`, and `suggestions` is
//!   non-empty only when `results` is empty (for the unfiltered search).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

// =============================================================================
// ARTICLE IDENTIFIERS
// =============================================================================

/// Article identifier as it appears in the feed.
///
/// Feeds are inconsistent about this: some emit `"id": 42`, others `"id": "42"`.
/// Ordering only ever looks at the leading integer (see [`ArticleId::numeric`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleId {
    Int(i64),
    Float(f64),
    Text(String),
}

impl ArticleId {
    /// Leading-integer interpretation of the id.
    ///
    /// Skips leading whitespace, accepts one sign, then reads digits until the
    /// first non-digit: `"42abc"` is 42, `"3.9"` is 3, `"abc"` is `None`.
    pub fn numeric(&self) -> Option<i64> {
        match self {
            ArticleId::Int(n) => Some(*n),
            ArticleId::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            ArticleId::Float(_) => None,
            ArticleId::Text(s) => parse_leading_int(s),
        }
    }

    /// Does a raw id from a link or the command line name this article?
    ///
    /// Numeric ids compare by value (`"7"` and `" 7.0"` both name `7`); text
    /// ids must match exactly.
    pub fn matches(&self, raw: &str) -> bool {
        let value = || raw.trim().parse::<f64>().ok();
        match self {
            ArticleId::Int(n) => value().is_some_and(|v| v == *n as f64),
            ArticleId::Float(x) => value().is_some_and(|v| v == *x),
            ArticleId::Text(s) => s == raw,
        }
    }
}

impl Default for ArticleId {
    fn default() -> Self {
        ArticleId::Text(String::new())
    }
}

impl From<i64> for ArticleId {
    fn from(id: i64) -> Self {
        ArticleId::Int(id)
    }
}

impl From<&str> for ArticleId {
    fn from(id: &str) -> Self {
        ArticleId::Text(id.to_string())
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleId::Int(n) => write!(f, "{}", n),
            ArticleId::Float(x) => write!(f, "{}", x),
            ArticleId::Text(s) => f.write_str(s),
        }
    }
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    // Overlong digit runs saturate instead of failing.
    let magnitude = rest[..digits_end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

// =============================================================================
// ARTICLE
// =============================================================================

/// One record from the news feed.
///
/// Only `id` and `title` are expected, and even `title` degrades to empty when
/// missing. Fields the engine does not know about are kept in `extra` so they
/// survive into the serialized results.
///
/// Decoding never fails on a badly typed field: a `null` or non-scalar id
/// becomes the empty id, non-string text fields become `None`, and numeric
/// `created_at`/`date` values are read as epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: ArticleId,
    #[serde(default, deserialize_with = "lenient_title")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub kategori: Option<String>,
    #[serde(default, deserialize_with = "lenient_date", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_date", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn lenient_id<'de, D>(deserializer: D) -> Result<ArticleId, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => match n.as_i64() {
            Some(int) => ArticleId::Int(int),
            None => n.as_f64().map(ArticleId::Float).unwrap_or_default(),
        },
        Value::String(s) => ArticleId::Text(s),
        _ => ArticleId::default(),
    })
}

fn lenient_title<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => n
            .as_f64()
            .filter(|millis| millis.is_finite())
            .and_then(|millis| DateTime::<Utc>::from_timestamp_millis(millis.trunc() as i64))
            .map(|date| date.to_rfc3339()),
        _ => None,
    })
}

impl Article {
    pub fn new(id: impl Into<ArticleId>, title: &str) -> Self {
        Article {
            id: id.into(),
            title: title.to_string(),
            ..Article::default()
        }
    }

    /// Description, or the empty string when the feed left it out.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// The date used for recency: `created_at`, then `date`. Empty strings
    /// count as absent.
    pub fn effective_date(&self) -> Option<&str> {
        fn present(field: &Option<String>) -> Option<&str> {
            field.as_deref().filter(|s| !s.is_empty())
        }
        present(&self.created_at).or_else(|| present(&self.date))
    }
}

// =============================================================================
// MATCH KINDS
// =============================================================================

/// Which tier of textual match put an article in the results.
///
/// At most one tier tag is recorded per article today, strongest first:
/// `ExactPhraseTitle` > `AllWordsTitle` > `PartialTitle` > `Description`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    ExactPhraseTitle,
    AllWordsTitle,
    PartialTitle,
    Description,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::ExactPhraseTitle => "exact_phrase_title",
            MatchKind::AllWordsTitle => "all_words_title",
            MatchKind::PartialTitle => "partial_title",
            MatchKind::Description => "description",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// An article plus the score that ranked it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredArticle {
    #[serde(flatten)]
    pub article: Article,
    pub search_score: u32,
    pub match_details: Vec<MatchKind>,
}

impl ScoredArticle {
    /// Strongest match tier recorded, if any text matched at all.
    pub fn primary_match(&self) -> Option<MatchKind> {
        self.match_details.first().copied()
    }
}

/// The envelope returned by every search call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub results: Vec<ScoredArticle>,
    pub suggestions: Vec<String>,
    pub total_results: usize,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub search_time: Option<DateTime<Utc>>,
}

impl SearchResult {
    /// The envelope for a blank query: nothing scored, no timestamp.
    pub fn empty() -> Self {
        SearchResult::default()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Total order on ids for tie-breaking: larger numeric ids first, ids with no
/// numeric reading last. Two non-numeric ids compare equal.
pub fn compare_ids_desc(a: &ArticleId, b: &ArticleId) -> Ordering {
    match (a.numeric(), b.numeric()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Oldest-first counterpart of [`compare_ids_desc`]. Non-numeric ids still
/// sort last.
pub fn compare_ids_asc(a: &ArticleId, b: &ArticleId) -> Ordering {
    match (a.numeric(), b.numeric()) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => compare_ids_desc(a, b),
    }
}
