// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Decoding the news feed.
//!
//! The news API wraps its articles as `{ "data": [ ... ] }`; exported dumps
//! are often a bare array. Both are accepted. A missing or `null` `data`
//! decodes to an empty feed. A collection that is present but is not an
//! array is rejected with [`SearchError::InvalidInput`] rather than quietly
//! searching nothing.

use crate::error::{Result, SearchError};
use crate::types::{compare_ids_asc, compare_ids_desc, Article};
use serde_json::Value;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// An ordered article collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feed {
    pub articles: Vec<Article>,
}

impl Feed {
    pub fn new(articles: Vec<Article>) -> Self {
        Feed { articles }
    }

    /// Decode a feed document.
    pub fn from_json(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    /// Read a feed file; `-` reads stdin.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path == Path::new("-") {
            return Self::from_reader(std::io::stdin().lock());
        }
        let feed = Self::from_reader(BufReader::new(File::open(path)?))?;
        debug!(path = %path.display(), articles = feed.len(), "feed loaded");
        Ok(feed)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let collection = match value {
            Value::Array(items) => items,
            Value::Object(mut envelope) => match envelope.remove("data") {
                None | Some(Value::Null) => Vec::new(),
                Some(Value::Array(items)) => items,
                Some(other) => {
                    return Err(SearchError::InvalidInput(format!(
                        "feed `data` must be an array of articles, found {}",
                        kind_of(&other)
                    )))
                }
            },
            other => {
                return Err(SearchError::InvalidInput(format!(
                    "feed must be an array or an object with `data`, found {}",
                    kind_of(&other)
                )))
            }
        };

        let articles = collection
            .into_iter()
            .enumerate()
            .map(|(position, item)| {
                if !item.is_object() {
                    return Err(SearchError::InvalidInput(format!(
                        "article at position {} is {}, not an object",
                        position,
                        kind_of(&item)
                    )));
                }
                Ok(serde_json::from_value(item)?)
            })
            .collect::<Result<Vec<Article>>>()?;

        Ok(Feed { articles })
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Look up one article by the id a link or the user typed.
    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.id.matches(id))
    }

    /// Every article, highest id first.
    pub fn latest(&self) -> Vec<&Article> {
        let mut articles: Vec<&Article> = self.articles.iter().collect();
        articles.sort_by(|a, b| compare_ids_desc(&a.id, &b.id));
        articles
    }

    /// Every article, lowest id first.
    pub fn oldest(&self) -> Vec<&Article> {
        let mut articles: Vec<&Article> = self.articles.iter().collect();
        articles.sort_by(|a, b| compare_ids_asc(&a.id, &b.id));
        articles
    }

    /// Articles tagged `category`, highest id first.
    ///
    /// Unlike [`crate::SearchEngine::search_with_category`], the match ignores
    /// case: tag links are typed by hand.
    pub fn by_category(&self, category: &str) -> Vec<&Article> {
        let wanted = category.to_lowercase();
        let mut articles: Vec<&Article> = self
            .articles
            .iter()
            .filter(|article| {
                article
                    .kategori
                    .as_deref()
                    .is_some_and(|kategori| !kategori.is_empty() && kategori.to_lowercase() == wanted)
            })
            .collect();
        articles.sort_by(|a, b| compare_ids_desc(&a.id, &b.id));
        articles
    }

    /// Distinct non-empty categories, in the order they first appear.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.articles
            .iter()
            .filter_map(|article| article.kategori.as_deref())
            .filter(|kategori| !kategori.is_empty() && seen.insert(*kategori))
            .collect()
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
