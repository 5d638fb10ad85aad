// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Markup for the results container.
//!
//! The theme styles these class names; keep them stable.

use super::results::{ResultList, ResultState};
use crate::loader::IndexStatus;
use crate::snippet::escape_html_into;

pub const RESULT_CLASS: &str = "search-result";
pub const SELECTED_CLASS: &str = "selected";
pub const EMPTY_CLASS: &str = "search-empty";

/// Shown instead of "No results" when the index could not be loaded.
pub const UNAVAILABLE_MESSAGE: &str = "Search is unavailable";

pub fn render_results(list: &ResultList, status: IndexStatus) -> String {
    match list.state() {
        ResultState::Idle => String::new(),
        ResultState::Empty => render_empty(list.query(), status),
        ResultState::Rendered(_) => render_rows(list),
    }
}

fn render_empty(query: &str, status: IndexStatus) -> String {
    let mut html = format!(r#"<p class="{}">"#, EMPTY_CLASS);
    if status == IndexStatus::Unavailable {
        html.push_str(UNAVAILABLE_MESSAGE);
    } else {
        html.push_str("No results for &quot;");
        escape_html_into(&mut html, query);
        html.push_str("&quot;");
    }
    html.push_str("</p>");
    html
}

fn render_rows(list: &ResultList) -> String {
    let mut html = String::new();
    for (i, result) in list.results().iter().enumerate() {
        let selected = list.selected() == Some(i);
        html.push_str(r#"<a class=""#);
        html.push_str(RESULT_CLASS);
        if selected {
            html.push(' ');
            html.push_str(SELECTED_CLASS);
        }
        html.push_str(r#"" href=""#);
        escape_html_into(&mut html, &result.document.permalink);
        html.push_str(&format!(
            r#"" data-index="{}" role="option" aria-selected="{}">"#,
            i, selected
        ));
        html.push_str(r#"<span class="search-result-title">"#);
        escape_html_into(&mut html, &result.document.title);
        html.push_str(r#"</span><span class="search-result-snippet">"#);
        // Already escaped by the extractor
        html.push_str(&result.snippet);
        html.push_str("</span></a>");
    }
    html
}
