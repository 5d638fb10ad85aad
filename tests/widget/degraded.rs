//! Index fetch in flight, failed, or malformed.

use crate::common::{docs_index_json, TestHost};
use docsift::{IndexStatus, ResultState};

#[test]
fn test_failed_fetch_keeps_widget_usable() {
    let mut host = TestHost::failing("HTTP 500");
    host.shortcut();
    assert_eq!(host.controller.index_status(), IndexStatus::Unavailable);

    host.type_query("routing");
    assert_eq!(host.controller.results().state(), ResultState::Empty);
    assert!(host.html.contains("Search is unavailable"));

    host.press("Escape");
    assert!(!host.visible);
    assert_eq!(host.scroll_lock_depth(), 0);
}

#[test]
fn test_failed_fetch_is_not_retried() {
    let mut host = TestHost::failing("network down");
    host.open();
    host.close();
    host.open();
    assert_eq!(host.fetches, 1);
}

#[test]
fn test_malformed_body_is_unavailable() {
    let mut host = TestHost::deferred(Ok("<!doctype html>".to_string()));
    host.open();
    host.finish_fetch();
    assert_eq!(host.controller.index_status(), IndexStatus::Unavailable);
}

#[test]
fn test_query_before_index_arrives_rerenders() {
    let mut host = TestHost::deferred(Ok(docs_index_json()));
    host.shortcut();
    assert_eq!(host.pending_fetches(), 1);
    assert_eq!(host.controller.index_status(), IndexStatus::Loading);

    host.type_query("routing");
    assert_eq!(host.controller.results().state(), ResultState::Empty);
    assert!(host.html.contains("No results"));

    host.finish_fetch();
    assert_eq!(host.controller.results().state(), ResultState::Rendered(1));
    assert!(host.html.contains(r#"href="/docs/routing""#));
}

#[test]
fn test_idle_modal_does_not_render_on_load() {
    let mut host = TestHost::deferred(Ok(docs_index_json()));
    host.open();
    let before = host.log.len();
    host.finish_fetch();
    assert_eq!(host.log.len(), before);
    assert_eq!(host.controller.index_status(), IndexStatus::Ready);
}

#[test]
fn test_response_after_close_is_cached_silently() {
    let mut host = TestHost::deferred(Ok(docs_index_json()));
    host.open();
    host.close();
    host.open();
    host.close();
    assert_eq!(host.fetches, 1);
    assert_eq!(host.pending_fetches(), 1);

    let before = host.log.len();
    host.finish_fetch();
    assert_eq!(host.log.len(), before);
    assert_eq!(host.controller.index_status(), IndexStatus::Ready);

    host.open();
    host.type_query("routing");
    assert_eq!(host.controller.results().len(), 1);
    assert_eq!(host.fetches, 1);
}

#[test]
fn test_failure_while_typing_switches_message() {
    let mut host = TestHost::deferred(Err("HTTP 404".to_string()));
    host.open();
    host.type_query("routing");
    assert!(host.html.contains("No results for"));

    host.finish_fetch();
    assert!(host.html.contains("Search is unavailable"));
}
