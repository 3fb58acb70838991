//! Ranking tests: score stacking, tier precedence, and tie-breaks.
//!
//! Tests that:
//! - Title matches outrank description-only matches
//! - Rules are additive while match tags are exclusive
//! - Recency lifts fresh articles without tagging them
//! - Ties fall back to descending numeric id

use super::common::{
    assert_ranked, find_result, frozen_engine, make_article, make_article_full,
    make_dated_article, result_ids, same_title_articles, sample_feed,
};
use kabar::{Article, ArticleId, MatchKind};

// ============================================================================
// FIELD PRECEDENCE
// ============================================================================

#[test]
fn test_title_match_outranks_description_match() {
    let articles = vec![
        make_article_full(1, "Kabar Hari Ini", "Liputan pesantren di kota", "Umum"),
        make_article_full(2, "Pesantren Digital", "Liputan teknologi", "Teknologi"),
    ];
    let result = frozen_engine().search("pesantren", &articles);

    assert_ranked(&result);
    assert_eq!(result_ids(&result), vec!["2", "1"]);
    let title_hit = find_result(&result, 2).unwrap();
    let desc_hit = find_result(&result, 1).unwrap();
    assert!(title_hit.search_score > desc_hit.search_score);
    assert_eq!(title_hit.match_details, vec![MatchKind::ExactPhraseTitle]);
    assert_eq!(desc_hit.match_details, vec![MatchKind::Description]);
}

#[test]
fn test_exact_title_scores_at_least_stacked_minimum() {
    let articles = vec![make_article(1, "Santri Mengaji")];
    let result = frozen_engine().search("SANTRI MENGAJI", &articles);

    // exact (100) + all words (50) + 2 title words (20) + frequency (4)
    assert_eq!(result.results[0].search_score, 174);
    assert!(result.results[0].search_score >= 150);
}

#[test]
fn test_phrase_beats_scattered_words() {
    let articles = vec![
        make_article(1, "Digital untuk Santri"),
        make_article(2, "Santri Digital Indonesia"),
    ];
    let result = frozen_engine().search("santri digital", &articles);

    assert_eq!(result_ids(&result), vec!["2", "1"]);
    assert_eq!(result.results[0].match_details, vec![MatchKind::ExactPhraseTitle]);
    assert_eq!(result.results[1].match_details, vec![MatchKind::AllWordsTitle]);
    assert_eq!(result.results[0].search_score - result.results[1].search_score, 100);
}

#[test]
fn test_partial_title_tag() {
    let articles = vec![make_article(1, "Santri Berprestasi")];
    let result = frozen_engine().search("santri juara", &articles);

    assert_eq!(result.results[0].match_details, vec![MatchKind::PartialTitle]);
    assert_eq!(result.results[0].search_score, 12);
}

// ============================================================================
// RECENCY
// ============================================================================

#[test]
fn test_recency_lifts_fresh_articles() {
    let articles = vec![
        make_dated_article(1, "Santri Juara Lomba", 400),
        make_dated_article(2, "Santri Juara Lomba", 0),
        make_dated_article(3, "Santri Juara Lomba", 3),
        make_dated_article(4, "Santri Juara Lomba", 20),
    ];
    let result = frozen_engine().search("juara", &articles);

    assert_ranked(&result);
    assert_eq!(result_ids(&result), vec!["2", "3", "4", "1"]);
    let base = find_result(&result, 1).unwrap().search_score;
    assert_eq!(find_result(&result, 2).unwrap().search_score, base + 30);
    assert_eq!(find_result(&result, 3).unwrap().search_score, base + 20);
    assert_eq!(find_result(&result, 4).unwrap().search_score, base + 10);
}

#[test]
fn test_recent_article_without_text_match_is_included_untagged() {
    let articles = vec![
        make_dated_article(1, "Jadwal Libur Semester", 0),
        make_article(2, "Jadwal Ujian"),
    ];
    let result = frozen_engine().search("wisuda", &articles);

    assert_eq!(result_ids(&result), vec!["1"]);
    assert_eq!(result.results[0].search_score, 30);
    assert!(result.results[0].match_details.is_empty());
    // a result exists, so no suggestions
    assert!(result.suggestions.is_empty());
}

#[test]
fn test_date_field_is_used_when_created_at_missing() {
    let mut fresh = make_article(1, "Berita Santri");
    fresh.date = Some(kabar::testing::test_now().to_rfc3339());
    let mut overridden = make_article(2, "Berita Santri");
    overridden.date = Some(kabar::testing::test_now().to_rfc3339());
    overridden.created_at = Some("2010-01-01".to_string());

    let result = frozen_engine().search("berita", &[fresh, overridden]);
    assert_eq!(result_ids(&result), vec!["1", "2"]);
    assert_eq!(result.results[0].search_score - result.results[1].search_score, 30);
}

// ============================================================================
// TIE-BREAKS
// ============================================================================

#[test]
fn test_ties_break_by_descending_numeric_id() {
    let articles = same_title_articles(&[3, 10, 7, 1], "Kabar Pondok");
    let result = frozen_engine().search("pondok", &articles);

    assert_eq!(result_ids(&result), vec!["10", "7", "3", "1"]);
}

#[test]
fn test_string_ids_compare_numerically() {
    let articles = vec![
        Article::new(ArticleId::from("9"), "Kabar Pondok"),
        Article::new(ArticleId::from("10"), "Kabar Pondok"),
        Article::new(ArticleId::from(2), "Kabar Pondok"),
    ];
    let result = frozen_engine().search("pondok", &articles);

    // "10" > "9" numerically even though it sorts lower as text
    assert_eq!(result_ids(&result), vec!["10", "9", "2"]);
}

#[test]
fn test_non_numeric_ids_rank_last_in_feed_order() {
    let articles = vec![
        Article::new(ArticleId::from("draf-b"), "Kabar Pondok"),
        Article::new(ArticleId::from(1), "Kabar Pondok"),
        Article::new(ArticleId::from("draf-a"), "Kabar Pondok"),
        Article::new(ArticleId::from(5), "Kabar Pondok"),
    ];
    let result = frozen_engine().search("pondok", &articles);

    assert_eq!(result_ids(&result), vec!["5", "1", "draf-b", "draf-a"]);
}

#[test]
fn test_sample_feed_is_well_ranked() {
    for query in ["santri", "pesantren", "teknologi", "kajian pagi", "coding"] {
        let result = frozen_engine().search(query, &sample_feed());
        assert_ranked(&result);
    }
}
