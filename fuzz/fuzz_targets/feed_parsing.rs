// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for feed decoding.
//!
//! Arbitrary bytes must either decode into a feed or fail with an error,
//! never panic.

#![no_main]

use kabar::Feed;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(feed) = Feed::from_reader(data) {
        let categories = feed.categories();
        assert!(categories.len() <= feed.len());
    }
});
