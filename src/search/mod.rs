// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query matching.
//!
//! Trimmed, case-folded literal containment against the title or the body,
//! in index order. `utils` holds the folding and scanning primitives shared
//! with the snippet extractor, so a content match always yields a highlighted
//! snippet.

mod matcher;
pub mod utils;

pub use matcher::{match_documents, match_query, Query};
