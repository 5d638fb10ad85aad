//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use docsift::{SearchDocument, SearchIndex};
use std::fs;

// Re-export canonical test utilities from docsift::testing
pub use docsift::testing::{
    docs_index, docs_index_json, make_doc, routing_index, TestHost, ROUTING_CONTENT,
};

/// A small hand-written site index, checked in at the crate root.
pub const FIXTURE_INDEX: &str = "fixtures/index.json";

pub fn fixture_json() -> String {
    fs::read_to_string(FIXTURE_INDEX).expect("Failed to read fixture")
}

pub fn fixture_index() -> SearchIndex {
    SearchIndex::from_json(&fixture_json()).expect("Invalid fixture")
}

pub fn permalinks(docs: &[&SearchDocument]) -> Vec<String> {
    docs.iter().map(|d| d.permalink.clone()).collect()
}

/// `n` documents titled "Page 0".."Page n-1", each mentioning "common".
pub fn numbered_index(n: usize) -> SearchIndex {
    SearchIndex::new(
        (0..n)
            .map(|i| {
                make_doc(
                    &format!("Page {}", i),
                    &format!("A common paragraph for page number {}.", i),
                    &format!("/docs/page-{}", i),
                )
            })
            .collect(),
    )
}

/// Count non-overlapping `<mark>` spans.
pub fn mark_count(snippet: &str) -> usize {
    snippet.matches("<mark>").count()
}

/// Strip `<mark>` markers, leaving the escaped text.
pub fn unmark(snippet: &str) -> String {
    snippet.replace("<mark>", "").replace("</mark>", "")
}
