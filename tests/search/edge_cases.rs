//! Edge cases: blank queries, sparse records, odd input.

use super::common::{frozen_engine, make_article, sample_feed};
use kabar::{Article, ArticleId, Feed, SearchResult};

#[test]
fn test_blank_queries_return_empty_envelope() {
    for query in ["", " ", "\t\n", "     "] {
        let result = frozen_engine().search(query, &sample_feed());
        assert_eq!(result, SearchResult::empty(), "query {:?}", query);
    }
}

#[test]
fn test_empty_envelope_json_shape() {
    let result = frozen_engine().search("", &sample_feed());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"results": [], "suggestions": [], "totalResults": 0})
    );
}

#[test]
fn test_article_with_missing_fields_is_tolerated() {
    let articles = vec![
        Article::default(),
        Article {
            id: ArticleId::from(2),
            description: Some("tentang santri".to_string()),
            ..Article::default()
        },
    ];
    let result = frozen_engine().search("santri", &articles);
    assert_eq!(result.total_results, 1);
    assert_eq!(result.results[0].article.id.numeric(), Some(2));
}

#[test]
fn test_unparseable_dates_earn_no_recency() {
    let mut article = make_article(1, "Berita");
    article.created_at = Some("kemarin sore".to_string());
    let result = frozen_engine().search("tidakada", &[article]);
    assert!(result.results.is_empty());
}

#[test]
fn test_multiple_spaces_inside_query() {
    let articles = vec![make_article(1, "Santri Digital")];
    let result = frozen_engine().search("santri   digital", &articles);

    // the phrase keeps its spacing and misses, but every word hits
    assert_eq!(result.total_results, 1);
    assert_eq!(result.results[0].search_score, 74);
}

#[test]
fn test_results_serialize_with_original_fields() {
    let feed = Feed::from_json(super::common::FEED_JSON).unwrap();
    let result = frozen_engine().search("pesantren", &feed.articles);
    let json = serde_json::to_value(&result).unwrap();

    let first = &json["results"][0];
    assert_eq!(first["id"], 11);
    assert_eq!(first["image_url"], "https://example.org/a.jpg");
    assert_eq!(first["content"], "<p>Isi lengkap</p>");
    assert_eq!(first["matchDetails"][0], "exact_phrase_title");
    assert!(first["searchScore"].as_u64().unwrap() > 0);
    assert_eq!(json["totalResults"], 2);
    assert!(json["searchTime"].as_i64().is_some());
}

#[test]
fn test_unicode_titles() {
    let articles = vec![make_article(1, "Ḥadīth Pilihan"), make_article(2, "ÉCOLE Santri")];
    let result = frozen_engine().search("école", &articles);
    assert_eq!(result.total_results, 1);
    assert_eq!(result.results[0].article.id.numeric(), Some(2));
}

#[test]
fn test_empty_created_at_falls_back_to_date() {
    let feed = Feed::from_json(
        r#"[{"id": 1, "title": "Santri", "created_at": "", "date": "2024-06-01"}]"#,
    )
    .unwrap();
    let result = frozen_engine().search("santri", &feed.articles);

    // 162 for the title match plus 30 for the same-day `date`
    assert_eq!(result.results[0].search_score, 192);
}

#[test]
fn test_epoch_millis_date_earns_recency() {
    let feed = Feed::from_json(r#"[{"id": 1, "title": "Santri", "created_at": 1717200000000}]"#)
        .unwrap();
    let result = frozen_engine().search("santri", &feed.articles);
    assert_eq!(result.results[0].search_score, 192);
}
