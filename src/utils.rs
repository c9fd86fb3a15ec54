// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

/// Normalize a string for matching: lowercase, then trim surrounding whitespace.
///
/// Internal whitespace is left alone. Word splitting happens separately via
/// [`words`], so "AI  Vision" and "AI Vision" still yield the same words while
/// the full-string comparison stays exact.
pub fn normalize(value: &str) -> String {
    value.to_lowercase().trim().to_string()
}

/// Length in characters, not bytes. Every length threshold in search is
/// counted this way so that "é" is one character like "e".
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Whitespace-delimited words of an already-normalized string.
#[inline]
pub fn words(value: &str) -> impl Iterator<Item = &str> {
    value.split_whitespace()
}

/// ASCII-and-Unicode case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive "field starts with" test.
pub fn starts_with_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().starts_with(&needle.to_lowercase())
}
