// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Widget configuration.
//!
//! Every field has a default that matches what the docs theme ships with, so
//! the host page can pass `{}` (or nothing) and get the stock behavior. Field
//! names are camelCase on the JS side.

use serde::{Deserialize, Serialize};

/// Where the index lives unless the host says otherwise.
pub const DEFAULT_INDEX_URL: &str = "/index.json";

/// Maximum number of results shown in the modal.
pub const DEFAULT_LIMIT: usize = 10;

/// Snippet length used when the query does not occur in the content.
pub const DEFAULT_SNIPPET_LENGTH: usize = 120;

/// Characters of context kept before the first hit.
pub const DEFAULT_CONTEXT_BEFORE: usize = 40;

/// Characters of context kept after the first hit.
pub const DEFAULT_CONTEXT_AFTER: usize = 80;

/// Shape of a snippet window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnippetOptions {
    pub max_length: usize,
    pub context_before: usize,
    pub context_after: usize,
}

impl Default for SnippetOptions {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_SNIPPET_LENGTH,
            context_before: DEFAULT_CONTEXT_BEFORE,
            context_after: DEFAULT_CONTEXT_AFTER,
        }
    }
}

impl SnippetOptions {
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            max_length,
            ..Self::default()
        }
    }
}

/// Everything a `SearchController` needs to know up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub index_url: String,
    pub limit: usize,
    #[serde(flatten)]
    pub snippet: SnippetOptions,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            limit: DEFAULT_LIMIT,
            snippet: SnippetOptions::default(),
        }
    }
}
