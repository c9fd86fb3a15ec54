// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the starthub-search CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. The theme comes
//! from `STARTHUB_THEME` ("dark" or "light") when set, then from `COLORFGBG`,
//! and defaults to dark. `NO_COLOR` and non-TTY stdout turn color off.

use starthub_search::{AutocompleteEntry, Category, SearchResult, StartupProfile};
use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("STARTHUB_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": 7 and up (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
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

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Theme color plus modifiers, or plain text when colors are off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, ignoring ANSI escapes.
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

/// Cut to `max` characters, ending in "..." when something was dropped.
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
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

/// │ content          │
pub fn row(content: &str) {
    let border = border();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset(),
        content,
        " ".repeat(pad),
        border,
        reset()
    );
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = border();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Relevance score as fixed-width text; "-" when the page was not scored.
pub fn score_text(score: Option<f64>) -> String {
    match score {
        Some(score) => format!("{:>4.2}", score),
        None => "   -".to_string(),
    }
}

/// Score colored by band: 0.9 and up bright green, 0.7 green, 0.4 yellow,
/// anything lower gray.
pub fn score_badge(score: Option<f64>) -> String {
    let text = score_text(score);
    match score {
        Some(s) if s >= 0.9 => themed(BRIGHT_GREEN, &[BOLD], &text),
        Some(s) if s >= 0.7 => themed(GREEN, &[], &text),
        Some(s) if s >= 0.4 => themed(YELLOW, &[], &text),
        _ => themed(GRAY, &[], &text),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PRINTERS
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_search_result(result: &SearchResult) {
    let header = format!(
        "RESULTS  page {}/{}  total {}",
        result.page, result.total_pages, result.total
    );
    section_top(&header);

    if result.results.is_empty() {
        row(&themed(GRAY, &[DIM], "  no matching startups"));
    }

    for entry in &result.results {
        let c = &entry.candidate;
        let id = themed(BLUE, &[], &format!("#{:<5}", c.id.0));
        let name = pad_right(&themed(CYAN, &[BOLD], &truncate_chars(&c.name, 40)), 40);
        row(&format!(
            "  {} {} {}  ▲{:<4} ✉{:<4}",
            id,
            name,
            score_badge(entry.relevance_score),
            c.total_votes,
            c.total_comments
        ));
        if !c.description.is_empty() {
            let description = truncate_chars(&c.description, BOX_WIDTH - 10);
            row(&format!("        {}", themed(GRAY, &[DIM], &description)));
        }
    }

    section_bot();
}

pub fn print_autocomplete(query: &str, entries: &[AutocompleteEntry]) {
    section_top(&format!("SUGGESTIONS for \"{}\"", truncate_chars(query, 40)));
    if entries.is_empty() {
        row(&themed(GRAY, &[DIM], "  no suggestions"));
    }
    for entry in entries {
        let id = themed(BLUE, &[], &format!("#{:<5}", entry.id.0));
        row(&format!(
            "  {} {}",
            id,
            themed(CYAN, &[], &truncate_chars(&entry.name, BOX_WIDTH - 12))
        ));
    }
    section_bot();
}

pub fn print_profile(profile: &StartupProfile) {
    let c = &profile.candidate;
    section_top(&truncate_chars(&c.name, BOX_WIDTH - 10));
    row(&format!("  id        {}", themed(BLUE, &[], &c.id.to_string())));
    row(&format!(
        "  category  {}",
        profile.category_name.as_deref().unwrap_or("-")
    ));
    row(&format!(
        "  owner     {}",
        profile.owner_name.as_deref().unwrap_or("-")
    ));
    row(&format!("  votes     {}", themed(GREEN, &[BOLD], &c.total_votes.to_string())));
    row(&format!("  comments  {}", themed(YELLOW, &[], &c.total_comments.to_string())));
    if !c.description.is_empty() {
        row("");
        row(&format!("  {}", truncate_chars(&c.description, BOX_WIDTH - 4)));
    }
    section_bot();
}

pub fn print_categories(categories: &[Category]) {
    section_top("CATEGORIES");
    for category in categories {
        let id = themed(BLUE, &[], &format!("#{:<5}", category.id.0));
        let line = match &category.description {
            Some(description) => format!(
                "  {} {}  {}",
                id,
                themed(CYAN, &[BOLD], &category.name),
                themed(GRAY, &[DIM], &truncate_chars(description, 40))
            ),
            None => format!("  {} {}", id, themed(CYAN, &[BOLD], &category.name)),
        };
        row(&line);
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
