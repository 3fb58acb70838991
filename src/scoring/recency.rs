// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recency boost: fresh news ranks higher.
//!
//! Feed dates come in several shapes (`2024-05-01`, `2024-05-01 08:30:00`,
//! RFC 3339). Anything missing or unparseable is treated as
//! [`DEFAULT_ARTICLE_DATE`], which is old enough to earn nothing. Dates in
//! the future have negative age and earn the top bracket.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Stand-in date for articles without a usable one: 2000-01-01T00:00:00Z.
pub const DEFAULT_ARTICLE_DATE: (i32, u32, u32) = (2000, 1, 1);

/// Under one day old.
pub const BOOST_DAY: u32 = 30;
/// Under one week old.
pub const BOOST_WEEK: u32 = 20;
/// Under thirty days old.
pub const BOOST_MONTH: u32 = 10;

const MILLIS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

fn default_date() -> DateTime<Utc> {
    let (y, m, d) = DEFAULT_ARTICLE_DATE;
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Parse a feed date. Zone-less values are read as UTC.
pub fn parse_article_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// The date recency is measured from, with the default applied.
pub fn resolve_article_date(raw: Option<&str>) -> DateTime<Utc> {
    raw.and_then(parse_article_date).unwrap_or_else(default_date)
}

/// Fractional days between `date` and `now`. Negative for future dates.
pub fn days_since(date: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - date).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Points for how recently the article was published.
pub fn recency_boost(raw_date: Option<&str>, now: DateTime<Utc>) -> u32 {
    let days = days_since(resolve_article_date(raw_date), now);
    if days < 1.0 {
        BOOST_DAY
    } else if days < 7.0 {
        BOOST_WEEK
    } else if days < 30.0 {
        BOOST_MONTH
    } else {
        0
    }
}
