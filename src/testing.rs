//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::clock::FixedClock;
use crate::search::SearchEngine;
use crate::types::Article;
use chrono::{DateTime, TimeZone, Utc};

/// The instant test engines are frozen at: 2024-06-01T12:00:00Z.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// An engine whose clock never moves.
pub fn frozen_engine() -> SearchEngine<FixedClock> {
    SearchEngine::with_clock(FixedClock::new(test_now()))
}

/// Create an article with just an id and title, undated.
pub fn make_article(id: i64, title: &str) -> Article {
    Article::new(id, title)
}

/// Create an article with a description and category.
pub fn make_article_full(id: i64, title: &str, description: &str, kategori: &str) -> Article {
    Article {
        description: Some(description.to_string()),
        kategori: Some(kategori.to_string()),
        ..Article::new(id, title)
    }
}

/// Create an article published `days_ago` days before [`test_now`].
pub fn make_dated_article(id: i64, title: &str, days_ago: i64) -> Article {
    let published = test_now() - chrono::Duration::days(days_ago);
    Article {
        created_at: Some(published.to_rfc3339()),
        ..Article::new(id, title)
    }
}

/// A small feed in the shape the news site serves.
pub fn sample_feed() -> Vec<Article> {
    vec![
        make_article_full(
            1,
            "Pesantren Digital Resmi Dibuka",
            "Santri kini belajar pemrograman web dan mobile",
            "Teknologi",
        ),
        make_article_full(
            2,
            "Kajian Rutin Ba'da Subuh",
            "Kegiatan kajian di pesantren setiap pagi",
            "Kajian",
        ),
        make_article_full(
            3,
            "Pendidikan Karakter untuk Santri",
            "Program pendidikan berbasis teknologi",
            "Pendidikan",
        ),
        make_article_full(
            4,
            "Lomba Coding Antar Pesantren",
            "Santri berkompetisi membuat aplikasi",
            "Teknologi",
        ),
    ]
}
