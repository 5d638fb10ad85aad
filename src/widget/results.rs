// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The result list and its selection cursor.
//!
//! # States
//!
//! | State          | When                                   |
//! |----------------|----------------------------------------|
//! | `Idle`         | query is empty or whitespace           |
//! | `Rendered(n)`  | `n > 0` documents match                |
//! | `Empty`        | non-blank query, nothing matches       |
//!
//! There is no loading state: matching is synchronous once the index is in
//! memory, and before that every query is simply `Empty`.
//!
//! # Selection
//!
//! `selected` is `None` or an index into `results`. Any query change resets
//! it to `None`, even when the new results are the same documents, because
//! the rows were re-rendered and the old highlight no longer means anything.

use crate::config::SnippetOptions;
use crate::search::{match_query, Query};
use crate::snippet::extract_with;
use crate::types::{MatchResult, SearchIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultState {
    Idle,
    Rendered(usize),
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone)]
pub struct ResultList {
    limit: usize,
    snippet: SnippetOptions,
    query: Option<Query>,
    results: Vec<MatchResult>,
    selected: Option<usize>,
}

impl ResultList {
    pub fn new(limit: usize, snippet: SnippetOptions) -> Self {
        Self {
            limit,
            snippet,
            query: None,
            results: Vec::new(),
            selected: None,
        }
    }

    pub fn state(&self) -> ResultState {
        match (&self.query, self.results.len()) {
            (None, _) => ResultState::Idle,
            (Some(_), 0) => ResultState::Empty,
            (Some(_), n) => ResultState::Rendered(n),
        }
    }

    /// The trimmed query, or "" when idle.
    pub fn query(&self) -> &str {
        self.query.as_ref().map_or("", Query::as_str)
    }

    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MatchResult> {
        self.results.get(index)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Selection as the DOM-facing integer: `-1` for nothing selected.
    pub fn selected_index(&self) -> i32 {
        self.selected.map_or(-1, |i| i as i32)
    }

    /// New query text: re-match, re-extract snippets, clear the selection.
    pub fn set_query(&mut self, raw: &str, index: &SearchIndex) {
        self.query = Query::parse(raw);
        self.rematch(index);
    }

    /// Re-run the current query, e.g. after the index finally arrives.
    pub fn refresh(&mut self, index: &SearchIndex) {
        self.rematch(index);
    }

    /// Back to `Idle` with nothing selected.
    pub fn reset(&mut self) {
        self.query = None;
        self.results.clear();
        self.selected = None;
    }

    fn rematch(&mut self, index: &SearchIndex) {
        self.selected = None;
        self.results = match &self.query {
            None => Vec::new(),
            Some(query) => match_query(query, index, self.limit)
                .into_iter()
                .map(|doc| MatchResult {
                    snippet: extract_with(&doc.content, query.as_str(), &self.snippet),
                    document: doc.clone(),
                })
                .collect(),
        };
    }

    /// Move the cursor with wraparound. Returns the new selection.
    ///
    /// Down from the last row goes to the first; up from the first row, or
    /// from no selection, goes to the last. Does nothing with no rows.
    pub fn navigate(&mut self, direction: Direction) -> Option<usize> {
        let count = self.results.len();
        if count == 0 {
            return None;
        }
        let next = match (direction, self.selected) {
            (Direction::Down, None) => 0,
            (Direction::Down, Some(i)) => (i + 1) % count,
            (Direction::Up, None | Some(0)) => count - 1,
            (Direction::Up, Some(i)) => i - 1,
        };
        self.selected = Some(next);
        self.selected
    }

    /// Permalink of the selected row, if any (Enter).
    pub fn select(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.results.get(i))
            .map(|r| r.document.permalink.as_str())
    }

    /// Permalink of row `index` (mouse click), regardless of selection.
    pub fn permalink_at(&self, index: usize) -> Option<&str> {
        self.results.get(index).map(|r| r.document.permalink.as_str())
    }
}
