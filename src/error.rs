// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while getting the index into memory.
//!
//! The widget itself never surfaces these: the loader logs them and degrades
//! to an empty index. They exist so sources can use `?` and so the CLI can
//! report exactly why an index file is broken.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The host could not fetch the index (network error, non-2xx status).
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// A local index file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The body was not a JSON array of `{title, content, permalink}`.
    #[error("malformed index: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LoadError {
    pub fn fetch(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
