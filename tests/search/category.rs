//! Category-filtered search.
//!
//! The filtered call must return a subset of the plain search, and must carry
//! the plain search's suggestions over unchanged, even when filtering empties
//! the result list.

use super::common::{frozen_engine, make_article_full, result_ids, sample_feed};

#[test]
fn test_filtered_results_are_a_subset() {
    let engine = frozen_engine();
    let feed = sample_feed();
    for (query, category) in [
        ("santri", "Teknologi"),
        ("pesantren", "Kajian"),
        ("pendidikan", "Pendidikan"),
        ("santri", "Tidak Ada"),
    ] {
        let all = engine.search(query, &feed);
        let filtered = engine.search_with_category(query, category, &feed);

        assert_eq!(filtered.total_results, filtered.results.len());
        for scored in &filtered.results {
            assert_eq!(scored.article.kategori.as_deref(), Some(category));
            assert!(all.results.contains(scored));
        }
        // order is preserved from the unfiltered ranking
        let expected: Vec<String> = all
            .results
            .iter()
            .filter(|r| r.article.kategori.as_deref() == Some(category))
            .map(|r| r.article.id.to_string())
            .collect();
        assert_eq!(result_ids(&filtered), expected);
        assert_eq!(filtered.suggestions, all.suggestions);
    }
}

#[test]
fn test_category_match_is_exact() {
    let feed = sample_feed();
    let result = frozen_engine().search_with_category("santri", "teknologi", &feed);
    assert!(result.results.is_empty());
    assert_eq!(result.total_results, 0);

    let result = frozen_engine().search_with_category("santri", "Teknologi", &feed);
    assert_eq!(result_ids(&result), vec!["4", "1"]);
}

#[test]
fn test_filter_emptying_results_keeps_empty_suggestions() {
    // The query matches, so the unfiltered search has no suggestions. The
    // category removes every hit; suggestions are not recomputed.
    let feed = vec![make_article_full(1, "Santri Coding", "Belajar Rust", "Teknologi")];
    let result = frozen_engine().search_with_category("coding", "Kajian", &feed);

    assert!(result.results.is_empty());
    assert_eq!(result.total_results, 0);
    assert!(result.suggestions.is_empty());
    assert!(result.search_time.is_some());
}

#[test]
fn test_zero_result_suggestions_survive_filter() {
    let feed = vec![make_article_full(1, "Santri Coding", "Belajar Rust", "Teknologi")];
    let engine = frozen_engine();
    let plain = engine.search("codng", &feed);
    let filtered = engine.search_with_category("codng", "Teknologi", &feed);

    assert_eq!(plain.suggestions, vec!["coding"]);
    assert_eq!(filtered.suggestions, plain.suggestions);
}

#[test]
fn test_blank_query_with_category() {
    let result = frozen_engine().search_with_category("  ", "Teknologi", &sample_feed());
    assert!(result.results.is_empty());
    assert!(result.suggestions.is_empty());
    assert!(result.search_time.is_none());
}
