//! Matching tests against the fixture site.

use crate::common::{fixture_index, numbered_index, permalinks, routing_index};
use docsift::{match_documents, Query};

#[test]
fn test_single_page_match() {
    let index = fixture_index();
    let hits = match_documents("routing", &index, 10);
    assert_eq!(permalinks(&hits), vec!["/docs/routing/"]);
}

#[test]
fn test_case_insensitive() {
    let index = fixture_index();
    for query in ["template", "TEMPLATE", "TeMpLaTe"] {
        let hits = match_documents(query, &index, 10);
        assert_eq!(permalinks(&hits), vec!["/docs/templates/"], "query {:?}", query);
    }
}

#[test]
fn test_title_or_content() {
    let index = fixture_index();
    // Title only
    assert_eq!(
        permalinks(&match_documents("changelog", &index, 10)),
        vec!["/changelog/"]
    );
    // Content only ("Pages" in the intro, "page" in search)
    assert_eq!(
        permalinks(&match_documents("page", &index, 10)),
        vec!["/docs/", "/docs/search/"]
    );
}

#[test]
fn test_results_keep_index_order() {
    let index = fixture_index();
    let hits = match_documents("the", &index, 10);
    assert_eq!(
        permalinks(&hits),
        vec![
            "/docs/",
            "/docs/installation/",
            "/docs/search/",
            "/docs/configuration/"
        ]
    );
}

#[test]
fn test_pattern_syntax_is_literal() {
    let index = fixture_index();
    assert_eq!(
        permalinks(&match_documents("(config.toml)", &index, 10)),
        vec!["/docs/configuration/"]
    );
    assert_eq!(
        permalinks(&match_documents("$5.00 (approx.)", &index, 10)),
        vec!["/docs/configuration/"]
    );
    assert_eq!(
        permalinks(&match_documents("{{", &index, 10)),
        vec!["/docs/templates/"]
    );
    // "." is not a wildcard
    assert!(match_documents("index.jsonx", &index, 10).is_empty());
    assert!(match_documents(".*", &index, 10).is_empty());
}

#[test]
fn test_markup_characters_match_as_text() {
    let index = fixture_index();
    assert_eq!(
        permalinks(&match_documents("<title>", &index, 10)),
        vec!["/docs/templates/"]
    );
}

#[test]
fn test_no_match() {
    let index = routing_index();
    assert!(match_documents("xyz", &index, 10).is_empty());
}

#[test]
fn test_whitespace_query_matches_nothing() {
    let index = fixture_index();
    assert!(match_documents("", &index, 10).is_empty());
    assert!(match_documents("   \t", &index, 10).is_empty());
}

#[test]
fn test_query_is_trimmed() {
    let index = fixture_index();
    assert_eq!(
        permalinks(&match_documents("  routing  ", &index, 10)),
        vec!["/docs/routing/"]
    );
}

#[test]
fn test_limit_keeps_first_n() {
    let index = numbered_index(25);
    let hits = match_documents("common", &index, 10);
    assert_eq!(hits.len(), 10);
    assert_eq!(hits[0].permalink, "/docs/page-0");
    assert_eq!(hits[9].permalink, "/docs/page-9");
}

#[test]
fn test_limit_zero() {
    let index = numbered_index(3);
    assert!(match_documents("common", &index, 0).is_empty());
}

#[test]
fn test_query_parse() {
    assert!(Query::parse(" \n ").is_none());
    let query = Query::parse("  Hello ").unwrap();
    assert_eq!(query.as_str(), "Hello");
    assert_eq!(query.folded(), &['h', 'e', 'l', 'l', 'o']);
}

#[test]
fn test_unicode_case_folding() {
    let index = docsift::SearchIndex::new(vec![
        crate::common::make_doc("Ünïcode Straße", "Grüße aus Köln", "/u"),
        crate::common::make_doc("ASCII", "plain", "/a"),
    ]);
    assert_eq!(permalinks(&match_documents("ÜNÏCODE", &index, 10)), vec!["/u"]);
    assert_eq!(permalinks(&match_documents("köln", &index, 10)), vec!["/u"]);
}
