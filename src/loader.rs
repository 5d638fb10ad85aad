// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fetch-once index loading.
//!
//! The loader is a small state machine that never does IO on its own. In the
//! browser the host page performs the fetch when asked; natively an
//! [`IndexSource`] does it synchronously. Either way the rules are the same:
//!
//! ```text
//!   NotRequested ──request()──▶ Loading ──resolve(Ok)──▶ Ready
//!                                   │
//!                                   └────resolve(Err)──▶ Unavailable (empty index)
//! ```
//!
//! - `request()` hands out the URL exactly once. Every later call, whether the
//!   fetch is still in flight or long finished, gets `None`.
//! - `resolve()` never fails. A network error or a malformed body is logged and
//!   the index becomes empty. Callers always get an index.
//! - Once resolved, the index is kept until the loader is dropped. There is no
//!   refresh; reloading the page is the refresh.

use crate::error::LoadError;
use crate::types::SearchIndex;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

/// Where a loader is in its one-shot lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexStatus {
    NotRequested,
    Loading,
    Ready,
    /// The load failed; the index is empty.
    Unavailable,
}

impl IndexStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            IndexStatus::NotRequested => "notRequested",
            IndexStatus::Loading => "loading",
            IndexStatus::Ready => "ready",
            IndexStatus::Unavailable => "unavailable",
        }
    }
}

/// The single fetch a loader asks its host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
}

/// Something that can produce the raw index body for a URL.
pub trait IndexSource {
    fn fetch(&self, url: &str) -> Result<String, LoadError>;
}

/// Reads the index from a local file, ignoring the URL.
///
/// Used by the CLI to check an index before it is published.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl IndexSource for FileSource {
    fn fetch(&self, _url: &str) -> Result<String, LoadError> {
        fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[derive(Debug)]
enum LoadState {
    NotRequested,
    Loading,
    Loaded {
        index: Rc<SearchIndex>,
        degraded: bool,
    },
}

/// Memoizing index loader.
#[derive(Debug)]
pub struct IndexLoader {
    url: String,
    state: LoadState,
}

impl IndexLoader {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            state: LoadState::NotRequested,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status(&self) -> IndexStatus {
        match &self.state {
            LoadState::NotRequested => IndexStatus::NotRequested,
            LoadState::Loading => IndexStatus::Loading,
            LoadState::Loaded { degraded: false, .. } => IndexStatus::Ready,
            LoadState::Loaded { degraded: true, .. } => IndexStatus::Unavailable,
        }
    }

    /// The cached index, once a load has resolved.
    pub fn index(&self) -> Option<Rc<SearchIndex>> {
        match &self.state {
            LoadState::Loaded { index, .. } => Some(Rc::clone(index)),
            _ => None,
        }
    }

    /// Start the load. Returns the fetch to perform the first time only.
    pub fn request(&mut self) -> Option<FetchRequest> {
        match self.state {
            LoadState::NotRequested => {
                tracing::debug!(url = %self.url, "requesting search index");
                self.state = LoadState::Loading;
                Some(FetchRequest {
                    url: self.url.clone(),
                })
            }
            _ => None,
        }
    }

    /// Settle the load with the fetched body (or the fetch error).
    ///
    /// Failures degrade to an empty index. Resolving an already-settled loader
    /// keeps the first result.
    pub fn resolve(&mut self, body: Result<String, LoadError>) -> Rc<SearchIndex> {
        if let Some(index) = self.index() {
            tracing::debug!(url = %self.url, "ignoring duplicate index response");
            return index;
        }

        let (index, degraded) = match body.and_then(|body| SearchIndex::from_json(&body)) {
            Ok(index) => {
                tracing::debug!(url = %self.url, docs = index.len(), "search index loaded");
                (index, false)
            }
            Err(error) => {
                tracing::warn!(url = %self.url, %error, "search index unavailable, continuing with an empty index");
                (SearchIndex::empty(), true)
            }
        };

        let index = Rc::new(index);
        self.state = LoadState::Loaded {
            index: Rc::clone(&index),
            degraded,
        };
        index
    }

    /// Drive a whole load through `source`, or return the cached index.
    ///
    /// Fetches at most once per loader, no matter how often it is called.
    pub fn load_with<S: IndexSource + ?Sized>(&mut self, source: &S) -> Rc<SearchIndex> {
        if let Some(index) = self.index() {
            return index;
        }
        match self.request() {
            Some(request) => {
                let body = source.fetch(&request.url);
                self.resolve(body)
            }
            // A host fetch is in flight; nothing to search yet
            None => Rc::new(SearchIndex::empty()),
        }
    }
}
