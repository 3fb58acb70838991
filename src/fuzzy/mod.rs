// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: how close is a feed word to what the user typed?
//!
//! Only used on the zero-result path, to turn a typo into a "did you mean".

mod levenshtein;

pub use levenshtein::*;
