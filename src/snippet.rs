// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighted excerpts for result rows.
//!
//! A snippet is a short window of a page's text around the first hit, with
//! every hit inside the window wrapped in `<mark>`. The output goes straight
//! into `innerHTML`, so everything that is not a marker is escaped.
//!
//! # Window
//!
//! ```text
//!   content:  ....................[hit].............................
//!                     ^ i-40      ^ i   ^ i+len          ^ i+len+80
//!   snippet:  "..." + content[i-40 .. i+len+80] + "..."
//! ```
//!
//! Bounds clamp to the content; an ellipsis appears only on a side that was
//! actually cut. When the query is empty or absent, the snippet is the first
//! `max_length` characters instead.
//!
//! All arithmetic is in characters. The query is scanned as a literal (see
//! `search::utils`), so highlighting cannot be steered by pattern syntax in
//! user input.

use crate::config::SnippetOptions;
use crate::search::utils::{char_to_byte, find_folded, fold};

/// Marks a cut edge of the window.
pub const ELLIPSIS: &str = "...";

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// Excerpt of `content` around `query`, at most `max_length` characters when
/// there is no hit. Uses the default 40/80 context window.
pub fn extract(content: &str, query: &str, max_length: usize) -> String {
    extract_with(content, query, &SnippetOptions::with_max_length(max_length))
}

/// Excerpt of `content` around `query` with an explicit window shape.
pub fn extract_with(content: &str, query: &str, options: &SnippetOptions) -> String {
    let haystack = fold(content);
    let needle = fold(query);

    let Some(first) = find_folded(&haystack, &needle, 0) else {
        return leading_excerpt(content, haystack.len(), options.max_length);
    };

    let start = first.saturating_sub(options.context_before);
    let end = first
        .saturating_add(needle.len())
        .saturating_add(options.context_after)
        .min(haystack.len());
    let offsets = char_offsets(content);

    let mut out = String::with_capacity(offsets[end] - offsets[start] + 2 * ELLIPSIS.len());
    if start > 0 {
        out.push_str(ELLIPSIS);
    }
    // Only hits entirely inside the window get marked
    let window = &haystack[..end];
    let mut cursor = start;
    let mut next = Some(first);
    while let Some(hit) = next {
        let hit_end = hit + needle.len();
        escape_html_into(&mut out, &content[offsets[cursor]..offsets[hit]]);
        out.push_str(MARK_OPEN);
        escape_html_into(&mut out, &content[offsets[hit]..offsets[hit_end]]);
        out.push_str(MARK_CLOSE);
        cursor = hit_end;
        next = find_folded(window, &needle, cursor);
    }
    escape_html_into(&mut out, &content[offsets[cursor]..offsets[end]]);
    if end < haystack.len() {
        out.push_str(ELLIPSIS);
    }
    out
}

/// First `max_length` characters, plus an ellipsis if anything was cut.
fn leading_excerpt(content: &str, char_len: usize, max_length: usize) -> String {
    let mut out = String::new();
    if char_len <= max_length {
        escape_html_into(&mut out, content);
    } else {
        escape_html_into(&mut out, &content[..char_to_byte(content, max_length)]);
        out.push_str(ELLIPSIS);
    }
    out
}

/// Byte offset of every character, plus `content.len()` as a final sentinel.
fn char_offsets(content: &str) -> Vec<usize> {
    content
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(content.len()))
        .collect()
}

/// Append `text` with `& < > " '` escaped.
pub fn escape_html_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_html_into(&mut out, text);
    out
}
