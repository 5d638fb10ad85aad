// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsift command-line interface.
//!
//! Two subcommands for site authors: `search` runs a query against a local
//! `index.json` exactly the way the widget would, and `inspect` summarizes
//! the index so problems (empty pages, duplicate permalinks) show up before
//! the site ships.

pub mod display;

use clap::{Parser, Subcommand};
use docsift::config::{
    DEFAULT_CONTEXT_AFTER, DEFAULT_CONTEXT_BEFORE, DEFAULT_LIMIT, DEFAULT_SNIPPET_LENGTH,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docsift",
    about = "Check and query documentation search indexes",
    version
)]
pub struct Cli {
    /// Log loader and matcher activity to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index.json and display results with snippets
    Search {
        /// Path to the index.json file
        index: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Snippet length when the query is not in the page text
        #[arg(long, default_value_t = DEFAULT_SNIPPET_LENGTH)]
        snippet_length: usize,

        /// Characters of context before the first hit
        #[arg(long, default_value_t = DEFAULT_CONTEXT_BEFORE)]
        context_before: usize,

        /// Characters of context after the first hit
        #[arg(long, default_value_t = DEFAULT_CONTEXT_AFTER)]
        context_after: usize,

        /// Print the widget's result markup instead of terminal output
        #[arg(long)]
        html: bool,
    },

    /// Summarize an index.json file
    Inspect {
        /// Path to the index.json file
        index: PathBuf,
    },
}
