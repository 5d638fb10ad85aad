// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use docsift::widget::render_results;
use docsift::{FileSource, IndexSource, IndexStatus, ResultList, SearchIndex, SnippetOptions};
use std::collections::HashMap;
use std::path::Path;
use std::process::ExitCode;

mod cli;
use cli::display::{
    kv_row, row, section_bot, section_top, snippet_to_terminal, themed, use_colors, BLUE, BOLD,
    GRAY, GREEN, RED, YELLOW,
};
use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    docsift::logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Search {
            index,
            query,
            limit,
            snippet_length,
            context_before,
            context_after,
            html,
        } => {
            let snippet = SnippetOptions {
                max_length: snippet_length,
                context_before,
                context_after,
            };
            run_search(&index, &query, limit, snippet, html)
        }
        Commands::Inspect { index } => run_inspect(&index),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", themed(RED, &[BOLD], "error:"), e);
            ExitCode::FAILURE
        }
    }
}

/// Read and parse a local index.
///
/// The widget degrades to an empty index on failure; the CLI refuses to, since
/// its whole job is catching a broken index before it ships.
fn load_index(path: &Path) -> Result<SearchIndex> {
    let body = FileSource::new(path).fetch(&path.display().to_string())?;
    let index = SearchIndex::from_json(&body)
        .with_context(|| format!("{} is not a valid search index", path.display()))?;
    tracing::debug!(path = %path.display(), docs = index.len(), "index loaded");
    Ok(index)
}

fn run_search(
    path: &Path,
    query: &str,
    limit: usize,
    snippet: SnippetOptions,
    html: bool,
) -> Result<()> {
    let index = load_index(path)?;
    let mut results = ResultList::new(limit, snippet);
    results.set_query(query, &index);

    if html {
        // load_index already bailed on an unreadable or malformed index
        println!("{}", render_results(&results, IndexStatus::Ready));
        return Ok(());
    }

    if results.is_empty() {
        println!(
            "{} for {:?} in {} documents",
            themed(YELLOW, &[], "No results"),
            query.trim(),
            index.len()
        );
        return Ok(());
    }

    let colors = use_colors();
    for (i, result) in results.results().iter().enumerate() {
        println!(
            "{} {}  {}",
            themed(GRAY, &[], &format!("{:>2}.", i + 1)),
            themed(BLUE, &[BOLD], &result.document.title),
            themed(GREEN, &[], &result.document.permalink)
        );
        if !result.snippet.is_empty() {
            println!("    {}", snippet_to_terminal(&result.snippet, colors));
        }
    }
    println!(
        "{}",
        themed(
            GRAY,
            &[],
            &format!("{} of {} documents matched", results.len(), index.len())
        )
    );
    Ok(())
}

fn run_inspect(path: &Path) -> Result<()> {
    let index = load_index(path)?;
    let stats = IndexStats::collect(&index);

    section_top(&path.display().to_string());
    kv_row("documents", &stats.documents.to_string());
    kv_row("without content", &stats.empty_content.to_string());
    kv_row("content chars (total)", &stats.total_chars.to_string());
    kv_row("content chars (mean)", &stats.mean_chars().to_string());
    kv_row("content chars (max)", &stats.max_chars.to_string());
    if stats.duplicates.is_empty() {
        kv_row("duplicate permalinks", &themed(GREEN, &[], "none"));
    } else {
        kv_row(
            "duplicate permalinks",
            &themed(RED, &[BOLD], &stats.duplicates.len().to_string()),
        );
        for (permalink, count) in &stats.duplicates {
            row(&format!("   {} ×{}", permalink, count));
        }
    }
    section_bot();
    Ok(())
}

struct IndexStats {
    documents: usize,
    empty_content: usize,
    total_chars: usize,
    max_chars: usize,
    duplicates: Vec<(String, usize)>,
}

impl IndexStats {
    fn collect(index: &SearchIndex) -> Self {
        let mut permalinks: HashMap<&str, usize> = HashMap::new();
        let mut empty_content = 0;
        let mut total_chars = 0;
        let mut max_chars = 0;

        for doc in index {
            *permalinks.entry(doc.permalink.as_str()).or_default() += 1;
            let chars = doc.content.chars().count();
            if doc.content.trim().is_empty() {
                empty_content += 1;
            }
            total_chars += chars;
            max_chars = max_chars.max(chars);
        }

        let mut duplicates: Vec<(String, usize)> = permalinks
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(permalink, count)| (permalink.to_string(), count))
            .collect();
        duplicates.sort();

        Self {
            documents: index.len(),
            empty_content,
            total_chars,
            max_chars,
            duplicates,
        }
    }

    fn mean_chars(&self) -> usize {
        if self.documents == 0 {
            0
        } else {
            self.total_chars / self.documents
        }
    }
}
