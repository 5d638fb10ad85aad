// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data model the widget searches over.
//!
//! A site build emits `/index.json`: a flat array of pages, each with a title,
//! the page's plain text, and where it lives. That array is the whole corpus.
//! Nothing here is ever mutated after loading; the index is shared behind an
//! `Rc` by the loader and the result list.
//!
//! # Invariants
//!
//! - **SearchIndex**: document order is the order of the source array. Matching
//!   never reorders, so the index order *is* the result order.
//! - **SearchDocument**: `permalink` is assumed unique. Nothing enforces it at
//!   load time; `docsift inspect` reports duplicates.

use crate::error::LoadError;
use serde::{Deserialize, Serialize};

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// One page of the site as the search widget sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDocument {
    pub title: String,
    /// Plain extracted text. Pages without body text ship an empty string or
    /// omit the field entirely.
    #[serde(default)]
    pub content: String,
    pub permalink: String,
}

impl SearchDocument {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        permalink: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            permalink: permalink.into(),
        }
    }
}

/// The in-memory corpus, in source order.
///
/// Serializes transparently as the JSON array the site publishes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchIndex {
    docs: Vec<SearchDocument>,
}

impl SearchIndex {
    pub fn new(docs: Vec<SearchDocument>) -> Self {
        Self { docs }
    }

    /// The index a failed load degrades to.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the body of `GET /index.json`.
    pub fn from_json(body: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn docs(&self) -> &[SearchDocument] {
        &self.docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchDocument> {
        self.docs.iter()
    }
}

impl From<Vec<SearchDocument>> for SearchIndex {
    fn from(docs: Vec<SearchDocument>) -> Self {
        Self::new(docs)
    }
}

impl<'a> IntoIterator for &'a SearchIndex {
    type Item = &'a SearchDocument;
    type IntoIter = std::slice::Iter<'a, SearchDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// A matched document plus its highlighted excerpt.
///
/// `snippet` is an HTML fragment: escaped text with `<mark>` around each hit.
/// Derived on every keystroke and never stored beyond the current result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub document: SearchDocument,
    pub snippet: String,
}
