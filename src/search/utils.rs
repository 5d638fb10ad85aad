// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case folding and literal substring scanning.
//!
//! Matching and highlighting both need "case-insensitive" to mean the same
//! thing, and the snippet window needs offsets that line up with the original
//! text. `str::to_lowercase` breaks the second requirement: `İ` lowercases to
//! two characters, so offsets found in the lowered copy drift away from the
//! original. Folding one character to exactly one character keeps the folded
//! text the same length as the source, which makes every offset valid in both.
//!
//! The needle is compared as plain characters. There is no pattern syntax, so
//! `.`, `*` or `(` in a query are just characters.

/// Fold a single character for case-insensitive comparison.
///
/// Characters whose lowercase form is several characters fold to themselves.
#[inline]
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Fold a string into characters. `fold(s).len() == s.chars().count()`.
pub fn fold(text: &str) -> Vec<char> {
    text.chars().map(fold_char).collect()
}

/// First position `>= from` where `needle` occurs in `haystack`.
///
/// Both sides must already be folded. An empty needle never matches.
pub fn find_folded(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    let last_start = haystack.len() - needle.len();
    (from..=last_start).find(|&i| haystack[i..i + needle.len()] == *needle)
}

/// Whether `text` contains the folded `needle`, ignoring case.
pub fn contains_folded(text: &str, needle: &[char]) -> bool {
    if needle.is_empty() {
        return false;
    }
    // ASCII needles against ASCII text are the common case for English docs
    if text.is_ascii() && needle.iter().all(char::is_ascii) {
        let needle: Vec<u8> = needle.iter().map(|&c| c as u8).collect();
        return text
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(&needle));
    }
    find_folded(&fold(text), needle, 0).is_some()
}

/// Convert a character offset into a byte offset within `text`.
///
/// Offsets past the end clamp to `text.len()`.
pub fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(byte, _)| byte)
}
