// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored articles get sorted.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Id** - descending by numeric value; ids with no numeric reading last
//!
//! Anything still tied keeps feed order, because callers sort with a stable
//! sort.

use crate::types::{compare_ids_desc, ScoredArticle};
use std::cmp::Ordering;

/// Compare two scored articles for ranking (`Less` = ranks first).
pub fn compare_results(a: &ScoredArticle, b: &ScoredArticle) -> Ordering {
    b.search_score
        .cmp(&a.search_score)
        .then_with(|| compare_ids_desc(&a.article.id, &b.article.id))
}

/// Stable in-place ranking.
pub fn rank(results: &mut [ScoredArticle]) {
    results.sort_by(compare_results);
}
