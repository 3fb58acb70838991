//! Determinism: a frozen clock makes search a pure function.

use super::common::{frozen_engine, make_dated_article, sample_feed};
use chrono::Duration;
use kabar::{FixedClock, SearchEngine};

#[test]
fn test_repeated_search_is_identical() {
    let engine = frozen_engine();
    let feed = sample_feed();
    for query in ["santri", "pesantren digital", "pesantrn", "kajian"] {
        let first = engine.search(query, &feed);
        for _ in 0..10 {
            assert_eq!(engine.search(query, &feed), first, "query {:?}", query);
        }
    }
}

#[test]
fn test_fresh_engines_agree() {
    let feed = sample_feed();
    let a = frozen_engine().search("santri", &feed);
    let b = frozen_engine().search("santri", &feed);
    assert_eq!(a, b);
}

#[test]
fn test_no_state_leaks_between_feeds() {
    let engine = frozen_engine();
    let first = engine.search("pesantrn", &sample_feed());
    assert!(!first.suggestions.is_empty());

    // suggestions for an unrelated feed must not include words from the first
    let other = vec![make_dated_article(1, "Jadwal Ujian", 400)];
    let second = engine.search("pesantrn", &other);
    assert!(second.results.is_empty());
    assert!(second.suggestions.is_empty());
}

#[test]
fn test_clock_controls_recency() {
    let feed = vec![make_dated_article(1, "Kabar Pondok", 0)];
    let now = kabar::testing::test_now();

    let same_day = SearchEngine::with_clock(FixedClock::new(now)).search("pondok", &feed);
    let later = SearchEngine::with_clock(FixedClock::new(now + Duration::days(60)))
        .search("pondok", &feed);

    assert_eq!(
        same_day.results[0].search_score - later.results[0].search_score,
        30
    );
    assert_eq!(same_day.search_time, Some(now));
}
