//! Index loading tests: memoization, degradation, and the file source.

use crate::common::{docs_index_json, fixture_index, FIXTURE_INDEX};
use docsift::testing::CountingSource;
use docsift::{FileSource, IndexLoader, IndexStatus, LoadError, SearchIndex};
use std::io::Write;
use std::rc::Rc;

#[test]
fn test_fixture_parses() {
    let index = fixture_index();
    assert_eq!(index.len(), 7);
    // Missing "content" defaults to empty
    let changelog = index.iter().find(|d| d.title == "Changelog").unwrap();
    assert_eq!(changelog.content, "");
}

#[test]
fn test_file_source_loads_fixture() {
    let mut loader = IndexLoader::new("/index.json");
    let index = loader.load_with(&FileSource::new(FIXTURE_INDEX));
    assert_eq!(loader.status(), IndexStatus::Ready);
    assert_eq!(index.len(), 7);
}

#[test]
fn test_file_source_missing_file_degrades() {
    let mut loader = IndexLoader::new("/index.json");
    let index = loader.load_with(&FileSource::new("fixtures/does-not-exist.json"));
    assert_eq!(loader.status(), IndexStatus::Unavailable);
    assert!(index.is_empty());
}

#[test]
fn test_file_source_reports_io_error() {
    let source = FileSource::new("fixtures/does-not-exist.json");
    use docsift::IndexSource;
    assert!(matches!(
        source.fetch("/index.json"),
        Err(LoadError::Io { .. })
    ));
}

#[test]
fn test_malformed_file_degrades() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"title": "Broken""#).unwrap();

    let mut loader = IndexLoader::new("/index.json");
    let index = loader.load_with(&FileSource::new(file.path()));
    assert_eq!(loader.status(), IndexStatus::Unavailable);
    assert!(index.is_empty());
}

#[test]
fn test_non_array_body_degrades() {
    let mut loader = IndexLoader::new("/index.json");
    let index = loader.resolve(Ok(r#"{"docs": []}"#.to_string()));
    assert_eq!(loader.status(), IndexStatus::Unavailable);
    assert!(index.is_empty());
}

#[test]
fn test_empty_array_is_ready_not_unavailable() {
    let mut loader = IndexLoader::new("/index.json");
    let index = loader.resolve(Ok("[]".to_string()));
    assert_eq!(loader.status(), IndexStatus::Ready);
    assert!(index.is_empty());
}

#[test]
fn test_fetches_once_across_many_loads() {
    let source = CountingSource::ok(docs_index_json());
    let mut loader = IndexLoader::new("/index.json");

    let first = loader.load_with(&source);
    for _ in 0..5 {
        let again = loader.load_with(&source);
        assert!(Rc::ptr_eq(&first, &again));
    }
    assert_eq!(source.fetches(), 1);
}

#[test]
fn test_failure_is_also_memoized() {
    let source = CountingSource::failing("HTTP 404");
    let mut loader = IndexLoader::new("/index.json");

    loader.load_with(&source);
    loader.load_with(&source);
    assert_eq!(source.fetches(), 1);
    assert_eq!(loader.status(), IndexStatus::Unavailable);
}

#[test]
fn test_concurrent_requests_share_one_fetch() {
    let mut loader = IndexLoader::new("/search/index.json");
    let request = loader.request().expect("first request fetches");
    assert_eq!(request.url, "/search/index.json");

    // Second caller while the fetch is in flight
    assert!(loader.request().is_none());
    assert_eq!(loader.status(), IndexStatus::Loading);

    let index = loader.resolve(Ok(docs_index_json()));
    assert_eq!(index.len(), 5);
    assert!(loader.request().is_none());
}

#[test]
fn test_late_response_does_not_replace_index() {
    let mut loader = IndexLoader::new("/index.json");
    loader.request();
    let first = loader.resolve(Ok(docs_index_json()));
    let second = loader.resolve(Ok("[]".to_string()));
    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(second.len(), 5);
}

#[test]
fn test_independent_loaders_do_not_share_cache() {
    let source = CountingSource::ok(docs_index_json());
    let mut a = IndexLoader::new("/index.json");
    let mut b = IndexLoader::new("/index.json");
    a.load_with(&source);
    b.load_with(&source);
    assert_eq!(source.fetches(), 2);
}

#[test]
fn test_from_json_round_trips_through_serialize() {
    let index = fixture_index();
    let body = serde_json::to_string(&index).unwrap();
    assert_eq!(SearchIndex::from_json(&body).unwrap(), index);
}
