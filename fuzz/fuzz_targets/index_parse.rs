// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index loading.
//!
//! Whatever the server sends back, the loader settles: either a parsed index
//! or an empty one marked unavailable. It never panics and never fetches twice.

#![no_main]

use docsift::{match_documents, IndexLoader, IndexStatus};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|body: &[u8]| {
    let body = String::from_utf8_lossy(body).into_owned();

    let mut loader = IndexLoader::new("/index.json");
    assert!(loader.request().is_some());
    let index = loader.resolve(Ok(body));
    assert!(loader.request().is_none());

    match loader.status() {
        IndexStatus::Ready => {}
        IndexStatus::Unavailable => assert!(index.is_empty()),
        other => panic!("loader did not settle: {:?}", other),
    }

    // Whatever parsed must be searchable
    for doc in index.iter().take(4) {
        let hits = match_documents(&doc.title, &index, 10);
        assert!(hits.len() <= 10);
    }
});
