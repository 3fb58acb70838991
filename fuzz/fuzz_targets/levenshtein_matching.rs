// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance and similarity.
//!
//! Checks symmetry, the length bounds, and that similarity stays in [0, 1].
//! The suggestion generator trusts these numbers blindly.

#![no_main]

use arbitrary::Arbitrary;
use kabar::{levenshtein_distance, similarity};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    a: String,
    b: String,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts on the O(nm) matrix
    let a: String = input.a.chars().take(64).collect();
    let b: String = input.b.chars().take(64).collect();

    let d = levenshtein_distance(&a, &b);
    assert_eq!(d, levenshtein_distance(&b, &a), "distance not symmetric");

    let (la, lb) = (a.chars().count(), b.chars().count());
    assert!(d >= la.abs_diff(lb), "distance below length difference");
    assert!(d <= la.max(lb), "distance above longer length");

    let s = similarity(&a, &b);
    assert!((0.0..=1.0).contains(&s), "similarity {} out of range", s);
});
