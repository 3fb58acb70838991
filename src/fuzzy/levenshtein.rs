// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance and the similarity ratio built on it.
//!
//! Plain unit-cost Levenshtein over Unicode scalar values. The suggestion
//! path compares short single words, so the full DP matrix is cheap and we
//! keep it rather than a rolling row.
//!
//! Key properties (covered by the property tests):
//! - `levenshtein_distance(a, a) == 0`
//! - symmetric in its arguments
//! - `|len(a) - len(b)| <= distance <= max(len(a), len(b))`

/// Minimum number of single-character insertions, deletions, or
/// substitutions that turn `a` into `b`.
///
/// The matrix has `len(b) + 1` rows and `len(a) + 1` columns; row 0 and
/// column 0 hold the cost of building a prefix from nothing.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    // Use character counts, not byte lengths, for Unicode correctness
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut matrix = vec![vec![0usize; a.len() + 1]; b.len() + 1];
    for i in 0..=b.len() {
        matrix[i][0] = i;
    }
    for j in 0..=a.len() {
        matrix[0][j] = j;
    }

    for i in 1..=b.len() {
        for j in 1..=a.len() {
            matrix[i][j] = if b[i - 1] == a[j - 1] {
                matrix[i - 1][j - 1]
            } else {
                (matrix[i - 1][j - 1] + 1)
                    .min(matrix[i][j - 1] + 1)
                    .min(matrix[i - 1][j] + 1)
            };
        }
    }

    matrix[b.len()][a.len()]
}

/// Similarity ratio in `[0, 1]`: `(max_len - distance) / max_len`.
///
/// Two empty strings are identical (1.0). A ratio above 0.6 is what the
/// suggestion generator treats as "probably a typo of".
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    let distance = levenshtein_distance(a, b);
    (longest - distance) as f64 / longest as f64
}
