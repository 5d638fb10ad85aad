// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Literal, case-insensitive containment over titles and content.
//!
//! No ranking: a document either contains the query or it doesn't, and hits
//! come back in index order. The site generator already orders the index the
//! way the docs navigation is ordered, which is the order readers expect.

use super::utils::{contains_folded, fold};
use crate::types::{SearchDocument, SearchIndex};

/// A trimmed, folded query ready to test documents against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    folded: Vec<char>,
}

impl Query {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            folded: fold(text),
        })
    }

    /// The trimmed query as typed.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn folded(&self) -> &[char] {
        &self.folded
    }

    /// Title OR content contains the query, ignoring case.
    pub fn matches(&self, doc: &SearchDocument) -> bool {
        contains_folded(&doc.title, &self.folded) || contains_folded(&doc.content, &self.folded)
    }
}

/// Documents containing `query`, in index order, at most `limit` of them.
///
/// ```ignore
/// let hits = match_documents("matched", &index, 10);
/// ```
pub fn match_documents<'a>(
    query: &str,
    index: &'a SearchIndex,
    limit: usize,
) -> Vec<&'a SearchDocument> {
    let Some(query) = Query::parse(query) else {
        return Vec::new();
    };
    match_query(&query, index, limit)
}

/// Like [`match_documents`] with an already-parsed query.
pub fn match_query<'a>(
    query: &Query,
    index: &'a SearchIndex,
    limit: usize,
) -> Vec<&'a SearchDocument> {
    index
        .iter()
        .filter(|doc| query.matches(doc))
        .take(limit)
        .collect()
}
