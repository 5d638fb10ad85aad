// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the widget state machine.
//!
//! Random sequences of keys, clicks, input, and index responses. The modal
//! and the scroll lock must always agree, and the index is fetched at most once.

#![no_main]

use arbitrary::Arbitrary;
use docsift::testing::{docs_index_json, TestHost};
use docsift::KeyInput;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Event {
    Key { key: String, ctrl: bool, meta: bool },
    Input(String),
    Click(u8),
    Backdrop,
    Inside,
    Open,
    Close,
    FinishFetch,
    Destroy,
}

fuzz_target!(|input: (bool, Vec<Event>)| {
    let (fail, events) = input;
    let response = if fail {
        Err("HTTP 503".to_string())
    } else {
        Ok(docs_index_json())
    };
    let mut host = TestHost::deferred(response);

    for event in events {
        match event {
            Event::Key { key, ctrl, meta } => {
                let mut input = KeyInput::new(key);
                if ctrl {
                    input = input.with_ctrl();
                }
                if meta {
                    input = input.with_meta();
                }
                host.key(input);
            }
            Event::Input(value) => host.type_query(&value),
            Event::Click(index) => host.click(index as usize),
            Event::Backdrop => host.click_backdrop(),
            Event::Inside => host.click_inside(),
            Event::Open => host.open(),
            Event::Close => host.close(),
            Event::FinishFetch => host.finish_fetch(),
            Event::Destroy => host.destroy(),
        }

        let open = host.controller.is_open();
        assert_eq!(host.scroll_lock_depth(), i32::from(open));
        assert_eq!(host.visible, open);
        assert!(host.fetches <= 1);
        assert!(host.controller.selected_index() < host.controller.results().len() as i32);
    }
});
