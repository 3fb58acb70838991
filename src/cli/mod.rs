// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the kabar command-line interface.
//!
//! `search` ranks a feed against a query. The rest browse it without
//! scoring: `list` by id, `tag` by category, `show` for a single article,
//! and `categories` for the tag list. All read the feed from `--feed`, then
//! `KABAR_FEED`, then stdin.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kabar",
    about = "Relevance-ranked search over a JSON news feed",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the feed and display ranked results
    Search {
        /// Search query
        query: String,

        /// Feed file (`{"data": [...]}` or a bare array); `-` for stdin
        #[arg(short, long, env = "KABAR_FEED", default_value = "-")]
        feed: String,

        /// Only keep results in this category (exact, case-sensitive)
        #[arg(short, long, default_value = "")]
        category: String,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print the full search result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List articles newest first (by id)
    List {
        /// Feed file (`{"data": [...]}` or a bare array); `-` for stdin
        #[arg(short, long, env = "KABAR_FEED", default_value = "-")]
        feed: String,

        /// Oldest first instead, like the archive page
        #[arg(long)]
        oldest: bool,

        /// Maximum number of articles to display
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print the articles as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List articles in one category, newest first (case-insensitive)
    Tag {
        /// Category name
        name: String,

        /// Feed file (`{"data": [...]}` or a bare array); `-` for stdin
        #[arg(short, long, env = "KABAR_FEED", default_value = "-")]
        feed: String,

        /// Maximum number of articles to display
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print the articles as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one article by id
    Show {
        /// Article id
        id: String,

        /// Feed file (`{"data": [...]}` or a bare array); `-` for stdin
        #[arg(short, long, env = "KABAR_FEED", default_value = "-")]
        feed: String,

        /// Print the article as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the feed's categories in first-seen order
    Categories {
        /// Feed file (`{"data": [...]}` or a bare array); `-` for stdin
        #[arg(short, long, env = "KABAR_FEED", default_value = "-")]
        feed: String,
    },
}
