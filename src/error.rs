// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by the library.
//!
//! Searching itself cannot fail. Everything here comes from turning bytes
//! into an article collection.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// The feed decoded, but the article collection is not an array.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("malformed feed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read feed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
