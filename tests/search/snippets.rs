//! Snippet tests against realistic page text.

use crate::common::{fixture_index, mark_count, unmark, ROUTING_CONTENT};
use docsift::{extract, extract_with, SnippetOptions};

fn content_of(title_prefix: &str) -> String {
    fixture_index()
        .iter()
        .find(|d| d.title.starts_with(title_prefix))
        .map(|d| d.content.clone())
        .unwrap()
}

#[test]
fn test_short_page_is_shown_whole() {
    assert_eq!(
        extract(ROUTING_CONTENT, "matched", 120),
        "Routes define how incoming requests are <mark>matched</mark> to handlers."
    );
}

#[test]
fn test_hit_near_start_keeps_page_start() {
    let snippet = extract(&content_of("Search"), "index.json", 120);
    assert!(snippet.starts_with("The build writes <mark>index.json</mark> with"));
    assert!(snippet.ends_with("..."));
}

#[test]
fn test_hit_deep_in_page_gets_leading_ellipsis() {
    let content = content_of("Configuration");
    let snippet = extract(&content, "quoted", 120);
    assert!(snippet.starts_with("..."));
    // The hit is at the very end of the page
    assert!(snippet.ends_with("<mark>quoted</mark>."));
}

#[test]
fn test_markup_in_content_is_escaped() {
    let snippet = extract(&content_of("Templates"), "<title>", 120);
    assert!(snippet.contains("<mark>&lt;title&gt;</mark>"));
    assert!(snippet.contains("&lt;main&gt;"));
    assert!(!snippet.contains("<title>"));
}

#[test]
fn test_quotes_are_escaped() {
    let snippet = extract(&content_of("Configuration"), "$5.00 (approx.)", 120);
    assert!(snippet.contains("&quot;<mark>$5.00 (approx.)</mark>&quot;"));
}

#[test]
fn test_every_hit_in_window_is_marked() {
    let snippet = extract(&content_of("Search"), "+k", 120);
    // "Ctrl+K" and "Cmd+K"
    assert_eq!(mark_count(&snippet), 2);
    assert!(snippet.contains("Ctrl<mark>+K</mark> (or Cmd<mark>+K</mark>)"));
}

#[test]
fn test_unmarked_text_is_a_substring_of_escaped_content() {
    let content = content_of("Installation");
    let snippet = extract(&content, "binary", 120);
    let text = unmark(&snippet);
    let text = text.trim_start_matches("...").trim_end_matches("...");
    assert!(docsift::snippet::escape_html(&content).contains(text));
}

#[test]
fn test_no_hit_uses_prefix() {
    let content = content_of("Introduction");
    let snippet = extract(&content, "changelog", 50);
    let prefix: String = content.chars().take(50).collect();
    assert_eq!(snippet, format!("{}...", prefix));
}

#[test]
fn test_empty_content() {
    assert_eq!(extract("", "anything", 120), "");
    assert_eq!(extract("", "", 120), "");
}

#[test]
fn test_custom_window() {
    let options = SnippetOptions {
        max_length: 120,
        context_before: 5,
        context_after: 5,
    };
    let content = format!("{}target{}", "a".repeat(50), "b".repeat(50));
    assert_eq!(
        extract_with(&content, "TARGET", &options),
        "...aaaaa<mark>target</mark>bbbbb..."
    );
}

#[test]
fn test_multibyte_window_counts_characters() {
    let content = format!("{}ключ{}", "д".repeat(60), "ж".repeat(100));
    let snippet = extract(&content, "КЛЮЧ", 120);
    assert_eq!(
        snippet,
        format!("...{}<mark>ключ</mark>{}...", "д".repeat(40), "ж".repeat(80))
    );
}
