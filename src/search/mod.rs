// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: score, filter, rank, and fall back to suggestions.
//!
//! A search is a pure function of the query, the article slice, and the
//! engine's clock. Nothing is cached between calls, so the same engine can
//! serve unrelated feeds back to back.
//!
//! ```text
//! query ──parse──▶ Query ──score_article (per article)──▶ ArticleScore
//!                                                          │ score > 0
//!                                                          ▼
//!                     suggestions ◀── results empty? ── rank (stable)
//! ```

pub mod suggest;
pub mod utils;

use crate::clock::{Clock, SystemClock};
use crate::scoring::ranking::rank;
use crate::scoring::score_article;
use crate::types::{Article, ScoredArticle, SearchResult};
use suggest::generate_suggestions;
use tracing::{debug, trace};
use utils::Query;

/// Relevance-ranked search over an in-memory article collection.
///
/// # Example
///
/// ```
/// use kabar::{Article, SearchEngine};
///
/// let articles = vec![
///     Article::new(1, "Pesantren Digital"),
///     Article::new(2, "Belajar Rust di Pondok"),
/// ];
/// let result = SearchEngine::new().search("pesantren", &articles);
/// assert_eq!(result.total_results, 1);
/// assert_eq!(result.results[0].article.title, "Pesantren Digital");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchEngine<C = SystemClock> {
    clock: C,
}

impl SearchEngine<SystemClock> {
    /// Engine reading the wall clock for recency.
    pub fn new() -> Self {
        SearchEngine { clock: SystemClock }
    }
}

impl<C: Clock> SearchEngine<C> {
    /// Engine with an injected clock.
    pub fn with_clock(clock: C) -> Self {
        SearchEngine { clock }
    }

    /// Score every article against `query` and rank the hits.
    ///
    /// A blank query short-circuits to [`SearchResult::empty`]. Otherwise the
    /// result carries `search_time`, and `suggestions` is filled only when no
    /// article scored above zero.
    pub fn search(&self, query: &str, articles: &[Article]) -> SearchResult {
        let Some(query) = Query::parse(query) else {
            debug!("blank query, skipping search");
            return SearchResult::empty();
        };

        let now = self.clock.now();
        let mut results: Vec<ScoredArticle> = articles
            .iter()
            .filter_map(|article| {
                let scored = score_article(&query, article, now);
                trace!(
                    id = %article.id,
                    score = scored.score,
                    title_matches = scored.title_matches,
                    description_matches = scored.description_matches,
                    "scored article"
                );
                (scored.score > 0).then(|| ScoredArticle {
                    article: article.clone(),
                    search_score: scored.score,
                    match_details: scored.match_details,
                })
            })
            .collect();

        rank(&mut results);

        let suggestions = if results.is_empty() {
            generate_suggestions(&query.words, articles)
        } else {
            Vec::new()
        };

        debug!(
            query = %query.phrase,
            articles = articles.len(),
            results = results.len(),
            suggestions = suggestions.len(),
            "search finished"
        );

        SearchResult {
            total_results: results.len(),
            results,
            suggestions,
            search_time: Some(now),
        }
    }

    /// [`search`](Self::search), then keep only results whose `kategori`
    /// equals `category` exactly.
    ///
    /// An empty `category` means no filter. Suggestions are those of the
    /// unfiltered search: if the query matched only other categories, the
    /// filtered result is empty and `suggestions` is empty too.
    pub fn search_with_category(
        &self,
        query: &str,
        category: &str,
        articles: &[Article],
    ) -> SearchResult {
        let mut result = self.search(query, articles);
        if category.is_empty() {
            return result;
        }

        result
            .results
            .retain(|scored| scored.article.kategori.as_deref() == Some(category));
        result.total_results = result.results.len();
        debug!(category, results = result.total_results, "category filter applied");
        result
    }
}
