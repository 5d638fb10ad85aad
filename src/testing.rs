//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::config::WidgetConfig;
use crate::error::LoadError;
use crate::loader::IndexSource;
use crate::types::{SearchDocument, SearchIndex};
use crate::widget::{Effect, KeyInput, SearchController};
use std::cell::Cell;

/// Content of the routing page used throughout the tests.
pub const ROUTING_CONTENT: &str = "Routes define how incoming requests are matched to handlers.";

/// Create a document from its three fields.
pub fn make_doc(title: &str, content: &str, permalink: &str) -> SearchDocument {
    SearchDocument::new(title, content, permalink)
}

/// The single-document index: "Routing" at `/docs/routing`.
pub fn routing_index() -> SearchIndex {
    SearchIndex::new(vec![make_doc("Routing", ROUTING_CONTENT, "/docs/routing")])
}

/// A small docs site with a predictable shape.
pub fn docs_index() -> SearchIndex {
    SearchIndex::new(vec![
        make_doc("Getting Started", "Install the CLI and create a project.", "/docs/start"),
        make_doc("Routing", ROUTING_CONTENT, "/docs/routing"),
        make_doc("Middleware", "Middleware wraps handlers and can short-circuit requests.", "/docs/middleware"),
        make_doc("Configuration", "Configuration is read from a TOML file at startup.", "/docs/config"),
        make_doc("Deployment", "", "/docs/deploy"),
    ])
}

/// `docs_index()` as the JSON body the site would serve.
pub fn docs_index_json() -> String {
    serde_json::to_string(&docs_index()).unwrap_or_default()
}

/// An `IndexSource` that serves a fixed response and counts fetches.
pub struct CountingSource {
    response: Result<String, String>,
    fetches: Cell<usize>,
}

impl CountingSource {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            response: Ok(body.into()),
            fetches: Cell::new(0),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            response: Err(reason.into()),
            fetches: Cell::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.get()
    }
}

impl IndexSource for CountingSource {
    fn fetch(&self, url: &str) -> Result<String, LoadError> {
        self.fetches.set(self.fetches.get() + 1);
        self.response
            .clone()
            .map_err(|reason| LoadError::fetch(url, reason))
    }
}

/// A fake page that applies a controller's effects the way the JS glue does.
///
/// Fetches are answered immediately from `response` unless the host was built
/// with [`TestHost::deferred`], in which case they wait for
/// [`TestHost::finish_fetch`].
pub struct TestHost {
    pub controller: SearchController,
    response: Result<String, String>,
    defer: bool,
    pending: Vec<String>,
    /// Every effect applied, in order.
    pub log: Vec<Effect>,
    pub fetches: usize,
    pub visible: bool,
    pub input: String,
    pub html: String,
    pub navigated: Vec<String>,
    pub prevented: usize,
    pub scrolled_to: Option<usize>,
    scroll_locks: i32,
}

impl TestHost {
    /// An initialized widget backed by `docs_index()`.
    pub fn new() -> Self {
        Self::with_response(Ok(docs_index_json()), false)
    }

    /// Fetches stay in flight until `finish_fetch`.
    pub fn deferred(response: Result<String, String>) -> Self {
        Self::with_response(response, true)
    }

    /// Fetches fail immediately with `reason`.
    pub fn failing(reason: &str) -> Self {
        Self::with_response(Err(reason.to_string()), false)
    }

    fn with_response(response: Result<String, String>, defer: bool) -> Self {
        let mut host = Self {
            controller: SearchController::new(WidgetConfig::default()),
            response,
            defer,
            pending: Vec::new(),
            log: Vec::new(),
            fetches: 0,
            visible: true,
            input: String::new(),
            html: String::new(),
            navigated: Vec::new(),
            prevented: 0,
            scrolled_to: None,
            scroll_locks: 0,
        };
        let effects = host.controller.init();
        host.apply(effects);
        host
    }

    pub fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.log.push(effect.clone());
            match effect {
                Effect::ShowModal => self.visible = true,
                Effect::HideModal => self.visible = false,
                Effect::FocusInput => {}
                Effect::ClearInput => self.input.clear(),
                Effect::LockScroll => self.scroll_locks += 1,
                Effect::UnlockScroll => self.scroll_locks -= 1,
                Effect::FetchIndex { url } => {
                    self.fetches += 1;
                    self.pending.push(url);
                    if !self.defer {
                        self.finish_fetch();
                    }
                }
                Effect::RenderResults { html } => self.html = html,
                Effect::ScrollIntoView { index } => self.scrolled_to = Some(index),
                Effect::Navigate { url } => self.navigated.push(url),
                Effect::PreventDefault => self.prevented += 1,
            }
        }
    }

    /// Answer the oldest in-flight fetch.
    pub fn finish_fetch(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        self.pending.remove(0);
        let effects = match self.response.clone() {
            Ok(body) => self.controller.index_loaded(body),
            Err(reason) => self.controller.index_failed(&reason),
        };
        self.apply(effects);
    }

    pub fn pending_fetches(&self) -> usize {
        self.pending.len()
    }

    /// Net LockScroll minus UnlockScroll. Always 0 or 1 on a correct widget.
    pub fn scroll_lock_depth(&self) -> i32 {
        self.scroll_locks
    }

    pub fn key(&mut self, input: KeyInput) {
        let effects = self.controller.handle_key(&input);
        self.apply(effects);
    }

    pub fn press(&mut self, key: &str) {
        self.key(KeyInput::new(key));
    }

    pub fn shortcut(&mut self) {
        self.key(KeyInput::new("k").with_ctrl());
    }

    pub fn open(&mut self) {
        let effects = self.controller.open();
        self.apply(effects);
    }

    pub fn close(&mut self) {
        let effects = self.controller.close();
        self.apply(effects);
    }

    /// Replace the input's value and fire `input`.
    pub fn type_query(&mut self, value: &str) {
        self.input = value.to_string();
        let effects = self.controller.set_query(value);
        self.apply(effects);
    }

    pub fn click(&mut self, index: usize) {
        let effects = self.controller.click_result(index);
        self.apply(effects);
    }

    pub fn click_backdrop(&mut self) {
        let effects = self.controller.pointer_down(false);
        self.apply(effects);
    }

    pub fn click_inside(&mut self) {
        let effects = self.controller.pointer_down(true);
        self.apply(effects);
    }

    pub fn destroy(&mut self) {
        let effects = self.controller.destroy();
        self.apply(effects);
    }
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}
