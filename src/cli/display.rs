// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the kabar CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `KABAR_THEME` first, then `COLORFGBG`, then defaults to dark. `NO_COLOR`
//! and non-TTY stdout turn color off entirely, so piped output stays plain.
//!
//! # Theme detection order
//!
//! 1. `KABAR_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use kabar::{Article, MatchKind, ScoredArticle, SearchResult};
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

/// How many "did you mean" links the search page shows.
pub const DISPLAY_SUGGESTIONS: usize = 5;

/// Characters of description shown under each result.
pub const EXCERPT_CHARS: usize = 120;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("KABAR_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut `text` to at most `max_chars` characters, marking the cut with `...`.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{b}│{r}{}{}{b}│{r}",
        content,
        " ".repeat(pad),
        b = border(),
        r = reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{b}┌{r}{}{b}{}┐{r}",
        label_part,
        "─".repeat(remaining),
        b = border(),
        r = reset()
    );
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{b}├{r}{}{b}{}┤{r}",
        label_part,
        "─".repeat(remaining),
        b = border(),
        r = reset()
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded score badge
pub fn score_value(score: u32) -> String {
    let text = format!("★{:>4}", score);
    let color: fn() -> String = if score >= 100 {
        BRIGHT_GREEN
    } else if score >= 50 {
        GREEN
    } else if score >= 20 {
        YELLOW
    } else {
        GRAY
    };
    themed(color, &[], &text)
}

/// Color-coded match tier label; recency-only hits show as "recent"
pub fn match_label(kind: Option<MatchKind>) -> String {
    match kind {
        Some(MatchKind::ExactPhraseTitle) => themed(BRIGHT_GREEN, &[], "exact phrase"),
        Some(MatchKind::AllWordsTitle) => themed(GREEN, &[], "all words"),
        Some(MatchKind::PartialTitle) => themed(BLUE, &[], "partial title"),
        Some(MatchKind::Description) => themed(CYAN, &[], "description"),
        None => themed(GRAY, &[], "recent"),
    }
}

/// Color-coded timing value in ms
pub fn timing_ms(value: f64) -> String {
    let text = format!("{:.3} ms", value);
    let color: fn() -> String = if value < 5.0 {
        GREEN
    } else if value < 20.0 {
        YELLOW
    } else {
        RED
    };
    themed(color, &[], &text)
}

// ═══════════════════════════════════════════════════════════════════════════
// PAGES
// ═══════════════════════════════════════════════════════════════════════════

fn category_label(article: &Article) -> String {
    let category = article.kategori.as_deref().filter(|k| !k.is_empty()).unwrap_or("Umum");
    themed(BLUE, &[], category)
}

/// Title, excerpt and id/date footer shared by every article listing.
fn print_article_body(article: &Article) {
    row(&format!("     {}", themed(BRIGHT_CYAN, &[BOLD], &article.title)));
    if let Some(description) = article.description.as_deref().filter(|d| !d.is_empty()) {
        row(&format!("     {}", truncate_chars(description, EXCERPT_CHARS)));
    }
    let date = article.effective_date().unwrap_or("-");
    row(&themed(GRAY, &[DIM], &format!("     id {} · {}", article.id, date)));
}

fn print_article(rank: usize, scored: &ScoredArticle) {
    row(&format!(
        " {:>2}. {}  {}  [{}]",
        rank,
        score_value(scored.search_score),
        match_label(scored.primary_match()),
        category_label(&scored.article)
    ));
    print_article_body(&scored.article);
}

/// Break `text` into lines of at most `width` characters, on word boundaries
/// where possible.
pub fn wrap_chars(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = current.chars().count() + usize::from(!current.is_empty()) + word.chars().count();
        if !current.is_empty() && needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
        while current.chars().count() > width {
            let head: String = current.chars().take(width).collect();
            current = current.chars().skip(width).collect();
            lines.push(head);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Render a search result the way the search page lays it out.
pub fn print_search_result(query: &str, result: &SearchResult, limit: usize, elapsed_ms: f64) {
    section_top(&format!("SEARCH \"{}\"", query));
    row(&format!(
        " {} results in {}",
        themed(BRIGHT_GREEN, &[BOLD], &result.total_results.to_string()),
        timing_ms(elapsed_ms)
    ));

    if !result.suggestions.is_empty() {
        section_mid("DID YOU MEAN");
        let shown: Vec<String> = result
            .suggestions
            .iter()
            .take(DISPLAY_SUGGESTIONS)
            .map(|s| themed(YELLOW, &[], s))
            .collect();
        row(&format!(" {}", shown.join("  ")));
    }

    if result.results.is_empty() {
        section_mid("NO ARTICLES FOUND");
        row(" Try different keywords or check the spelling.");
    } else {
        section_mid("RESULTS");
        for (i, scored) in result.results.iter().take(limit).enumerate() {
            print_article(i + 1, scored);
        }
        if result.results.len() > limit {
            row(&themed(
                GRAY,
                &[],
                &format!(" ... {} more", result.results.len() - limit),
            ));
        }
    }
    section_bot();
}

/// Render an unscored listing (home page, archive, tag page).
pub fn print_article_list(label: &str, articles: &[&Article], limit: usize) {
    section_top(label);
    if articles.is_empty() {
        row(" No articles.");
    }
    for (i, article) in articles.iter().take(limit).enumerate() {
        row(&format!(" {:>2}. [{}]", i + 1, category_label(article)));
        print_article_body(article);
    }
    if articles.len() > limit {
        row(&themed(GRAY, &[], &format!(" ... {} more", articles.len() - limit)));
    }
    section_bot();
}

/// Render one article in full: content when the feed has it, else the
/// description.
pub fn print_article_detail(article: &Article) {
    section_top(&format!("ARTICLE {}", article.id));
    row(&format!(" {}", themed(BRIGHT_CYAN, &[BOLD], &article.title)));
    row(&format!(
        " [{}]  {}",
        category_label(article),
        themed(GRAY, &[DIM], article.effective_date().unwrap_or("-"))
    ));
    let body = [article.content.as_deref(), article.description.as_deref()]
        .into_iter()
        .flatten()
        .find(|text| !text.trim().is_empty());
    section_mid("CONTENT");
    match body {
        Some(text) => {
            for line in wrap_chars(text, BOX_WIDTH - 2) {
                row(&format!(" {}", line));
            }
        }
        None => row(" No content available."),
    }
    if let Some(url) = article.image_url.as_deref().filter(|u| !u.is_empty()) {
        row(&themed(GRAY, &[DIM], &format!(" image: {}", url)));
    }
    section_bot();
}

/// List categories, one per line.
pub fn print_categories(categories: &[&str]) {
    section_top("CATEGORIES");
    if categories.is_empty() {
        row(" (none)");
    }
    for category in categories {
        row(&format!(" {}", themed(BLUE, &[], category)));
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
