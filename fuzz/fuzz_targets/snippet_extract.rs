// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for snippet extraction.
//!
//! Arbitrary page text and queries, including every character that means
//! something to a regex engine or an HTML parser. The extractor must not
//! panic, must not slice through a multi-byte character, and must never let
//! a raw `<` through outside its own `<mark>` tags.

#![no_main]

use arbitrary::Arbitrary;
use docsift::snippet::{MARK_CLOSE, MARK_OPEN};
use docsift::{extract_with, SnippetOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    content: &'a str,
    query: &'a str,
    max_length: u8,
    context_before: u8,
    context_after: u8,
}

fuzz_target!(|input: Input| {
    let options = SnippetOptions {
        max_length: input.max_length as usize,
        context_before: input.context_before as usize,
        context_after: input.context_after as usize,
    };
    let snippet = extract_with(input.content, input.query, &options);

    let opens = snippet.matches(MARK_OPEN).count();
    assert_eq!(opens, snippet.matches(MARK_CLOSE).count());

    let stripped = snippet.replace(MARK_OPEN, "").replace(MARK_CLOSE, "");
    assert!(!stripped.contains('<'), "unescaped markup in {:?}", snippet);
    assert!(!stripped.contains('"'), "unescaped quote in {:?}", snippet);
});
