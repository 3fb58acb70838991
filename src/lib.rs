//! Relevance-ranked search over a news feed.
//!
//! Give the engine a query and the articles from the feed; it scores every
//! article on title and description matches plus how recently it was
//! published, drops the ones that scored nothing, and ranks the rest. When
//! nothing matches it offers "did you mean" words mined from the feed itself.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   feed.rs   │────▶│  search/     │────▶│  types.rs    │
//! │ (Feed JSON) │     │ SearchEngine │     │ SearchResult │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                        │        │
//!                        ▼        ▼
//!              ┌──────────────┐ ┌──────────────┐
//!              │  scoring/    │ │  fuzzy/      │
//!              │ rules, rank, │ │ levenshtein, │
//!              │ recency      │ │ similarity   │
//!              └──────────────┘ └──────────────┘
//!                     │
//!                     ▼
//!              ┌──────────────┐
//!              │  clock.rs    │
//!              └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use kabar::{Feed, SearchEngine};
//!
//! let feed = Feed::from_json(r#"{"data": [
//!     {"id": 1, "title": "Pesantren Digital", "kategori": "Teknologi"},
//!     {"id": 2, "title": "Kajian Subuh", "description": "di pesantren"}
//! ]}"#).unwrap();
//!
//! let engine = SearchEngine::new();
//! let result = engine.search("pesantren", &feed.articles);
//! assert_eq!(result.total_results, 2);
//!
//! let tech = engine.search_with_category("pesantren", "Teknologi", &feed.articles);
//! assert_eq!(tech.total_results, 1);
//! ```

// Module declarations
pub mod clock;
pub mod error;
pub mod feed;
pub mod fuzzy;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;

// Re-exports for public API
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Result, SearchError};
pub use feed::Feed;
pub use fuzzy::{levenshtein_distance, similarity};
pub use scoring::ranking::compare_results;
pub use scoring::{score_article, ArticleScore};
pub use search::suggest::{generate_suggestions, MAX_SUGGESTIONS};
pub use search::utils::Query;
pub use search::SearchEngine;
pub use types::{
    compare_ids_asc, compare_ids_desc, Article, ArticleId, MatchKind, ScoredArticle, SearchResult,
};
