// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Modal search for documentation sites.
//!
//! The site publishes `/index.json` (every page's title, text, and permalink).
//! This crate is everything between that file and the search dialog: a
//! fetch-once loader, literal case-insensitive matching, highlighted snippets,
//! and a keyboard-driven result list inside a modal. It compiles to WASM for
//! the browser and natively for the `docsift` CLI and the tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  loader.rs  │────▶│  search/     │────▶│  snippet.rs  │
//! │ (fetch once,│     │ (match_      │     │ (window +    │
//! │  degrade)   │     │  documents)  │     │  <mark>)     │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     widget/                          │
//! │  SearchController: Closed/Open × Idle/Rendered/Empty │
//! │  ResultList (cursor), render (markup), Effect        │
//! └─────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//!                  runtime::wasm (SearchWidget)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use docsift::{extract, match_documents, SearchIndex};
//!
//! let index = SearchIndex::from_json(&body)?;
//! for doc in match_documents("routing", &index, 10) {
//!     println!("{} {}", doc.permalink, extract(&doc.content, "routing", 120));
//! }
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod runtime;
pub mod search;
pub mod snippet;
pub mod testing;
pub mod types;
pub mod widget;

// Re-exports for public API
pub use config::{SnippetOptions, WidgetConfig};
pub use error::LoadError;
pub use loader::{FetchRequest, FileSource, IndexLoader, IndexSource, IndexStatus};
pub use search::{match_documents, match_query, Query};
pub use snippet::{extract, extract_with};
pub use types::{MatchResult, SearchDocument, SearchIndex};
pub use widget::{
    Direction, Effect, KeyInput, ModalState, ResultList, ResultState, SearchController,
};

#[cfg(feature = "wasm")]
pub use runtime::wasm::{search_index, SearchWidget};
