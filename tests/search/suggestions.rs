//! Suggestion tests: the zero-result fallback.

use super::common::{frozen_engine, make_article, make_article_full, sample_feed};
use kabar::MAX_SUGGESTIONS;

#[test]
fn test_unknown_token_yields_no_results() {
    let articles = vec![
        make_article_full(1, "Teknologi Informasi", "Belajar jaringan", "Teknologi"),
        make_article_full(2, "Pendidikan Karakter", "Pembinaan akhlak", "Pendidikan"),
    ];
    let result = frozen_engine().search("xyzabc123", &articles);

    assert!(result.results.is_empty());
    assert_eq!(result.total_results, 0);
    // nothing in the feed is close to this token
    assert!(result.suggestions.is_empty());
}

#[test]
fn test_typo_gets_corrected() {
    let articles = vec![
        make_article_full(1, "Teknologi Informasi", "Belajar jaringan", "Teknologi"),
        make_article_full(2, "Pendidikan Karakter", "Pembinaan akhlak", "Pendidikan"),
    ];
    let result = frozen_engine().search("teknolgi", &articles);

    assert!(result.results.is_empty());
    assert_eq!(result.suggestions, vec!["teknologi"]);
}

#[test]
fn test_suggestions_follow_feed_order() {
    let articles = vec![
        make_article(1, "Kegiatan Santriwan"),
        make_article(2, "Santri Baru"),
    ];
    // a typo of the first word that also contains the second
    let result = frozen_engine().search("santriwn", &articles);

    assert!(result.results.is_empty());
    assert_eq!(result.suggestions, vec!["santriwan", "santri"]);
}

#[test]
fn test_every_suggestion_relates_to_a_query_word() {
    let result = frozen_engine().search("pesantrn digitl", &sample_feed());

    assert!(result.results.is_empty());
    assert!(!result.suggestions.is_empty());
    assert!(result.suggestions.len() <= MAX_SUGGESTIONS);
    for suggestion in &result.suggestions {
        assert!(suggestion.chars().count() > 3);
        let related = ["pesantrn", "digitl"].iter().any(|word| {
            suggestion.contains(word)
                || word.contains(suggestion.as_str())
                || kabar::similarity(suggestion, word) > 0.6
        });
        assert!(related, "unrelated suggestion {}", suggestion);
    }
}

#[test]
fn test_no_suggestions_when_results_exist() {
    let result = frozen_engine().search("santri", &sample_feed());
    assert!(!result.results.is_empty());
    assert!(result.suggestions.is_empty());
}
