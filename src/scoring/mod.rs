// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Every rule is additive. A title that equals the query collects the exact
//! phrase bonus, the all-words bonus, the per-word title bonus and the
//! frequency bonus at once. Only the match tag is exclusive: the first tier
//! that fires is the one recorded.

mod core;
pub mod ranking;
pub mod recency;

pub use self::core::*;
