// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the search widget.
//!
//! This is the browser-facing API. The page owns the DOM and the network;
//! the widget owns the decisions. Every event method returns an array of
//! effects (`{ kind: "showModal" }`, `{ kind: "renderResults", html }`, ...)
//! that the page applies in order.
//!
//! # Host glue
//!
//! ```js
//! const widget = new SearchWidget({ indexUrl: "/index.json" });
//! const apply = (effects) => {
//!     for (const e of effects) {
//!         switch (e.kind) {
//!             case "showModal":      modal.hidden = false; break;
//!             case "hideModal":      modal.hidden = true; break;
//!             case "focusInput":     input.focus(); break;
//!             case "clearInput":     input.value = ""; break;
//!             case "lockScroll":     document.body.style.overflow = "hidden"; break;
//!             case "unlockScroll":   document.body.style.overflow = ""; break;
//!             case "renderResults":  results.innerHTML = e.html; break;
//!             case "scrollIntoView": results.children[e.index]?.scrollIntoView({ block: "nearest" }); break;
//!             case "navigate":       window.location.href = e.url; break;
//!             case "preventDefault": currentEvent?.preventDefault(); break;
//!             case "fetchIndex":
//!                 fetch(e.url)
//!                     .then((r) => r.ok ? r.text() : Promise.reject(`HTTP ${r.status}`))
//!                     .then((body) => apply(widget.indexLoaded(body)))
//!                     .catch((err) => apply(widget.indexFailed(String(err))));
//!                 break;
//!         }
//!     }
//! };
//! apply(widget.init());
//! document.addEventListener("keydown", (ev) => { currentEvent = ev; apply(widget.keydown(ev.key, ev.ctrlKey, ev.metaKey)); });
//! input.addEventListener("input", () => apply(widget.input(input.value)));
//! trigger.addEventListener("click", () => apply(widget.open()));
//! ```

use crate::config::WidgetConfig;
use crate::search::match_documents;
use crate::snippet::extract_with;
use crate::types::SearchIndex;
use crate::widget::{Effect, KeyInput, SearchController};
use js_sys::Array;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Search result for JavaScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSearchResult {
    title: String,
    permalink: String,
    snippet: String,
}

/// The modal search widget.
#[wasm_bindgen]
pub struct SearchWidget {
    controller: SearchController,
}

#[wasm_bindgen]
impl SearchWidget {
    /// Create a widget. `options` may be `undefined`, `null`, or a partial
    /// `{ indexUrl, limit, maxLength, contextBefore, contextAfter }`.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<SearchWidget, JsValue> {
        crate::logging::init_console();
        Ok(SearchWidget {
            controller: SearchController::new(parse_options(options)?),
        })
    }

    #[wasm_bindgen]
    pub fn init(&mut self) -> Result<Array, JsValue> {
        effects_to_js(self.controller.init())
    }

    #[wasm_bindgen]
    pub fn open(&mut self) -> Result<Array, JsValue> {
        effects_to_js(self.controller.open())
    }

    #[wasm_bindgen]
    pub fn close(&mut self) -> Result<Array, JsValue> {
        effects_to_js(self.controller.close())
    }

    #[wasm_bindgen]
    pub fn destroy(&mut self) -> Result<Array, JsValue> {
        effects_to_js(self.controller.destroy())
    }

    /// Forward a document-level `keydown`.
    #[wasm_bindgen]
    pub fn keydown(&mut self, key: &str, ctrl_key: bool, meta_key: bool) -> Result<Array, JsValue> {
        let input = KeyInput {
            key: key.to_string(),
            ctrl: ctrl_key,
            meta: meta_key,
        };
        effects_to_js(self.controller.handle_key(&input))
    }

    /// Forward the query input's `input` event.
    #[wasm_bindgen]
    pub fn input(&mut self, value: &str) -> Result<Array, JsValue> {
        effects_to_js(self.controller.set_query(value))
    }

    #[wasm_bindgen(js_name = "clickResult")]
    pub fn click_result(&mut self, index: usize) -> Result<Array, JsValue> {
        effects_to_js(self.controller.click_result(index))
    }

    /// Forward a `pointerdown` on the modal overlay.
    #[wasm_bindgen(js_name = "pointerDown")]
    pub fn pointer_down(&mut self, inside_content: bool) -> Result<Array, JsValue> {
        effects_to_js(self.controller.pointer_down(inside_content))
    }

    #[wasm_bindgen(js_name = "indexLoaded")]
    pub fn index_loaded(&mut self, body: String) -> Result<Array, JsValue> {
        effects_to_js(self.controller.index_loaded(body))
    }

    #[wasm_bindgen(js_name = "indexFailed")]
    pub fn index_failed(&mut self, message: &str) -> Result<Array, JsValue> {
        effects_to_js(self.controller.index_failed(message))
    }

    #[wasm_bindgen(getter, js_name = "isOpen")]
    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    /// `-1` when nothing is selected.
    #[wasm_bindgen(getter, js_name = "selectedIndex")]
    pub fn selected_index(&self) -> i32 {
        self.controller.selected_index()
    }

    #[wasm_bindgen(getter, js_name = "resultCount")]
    pub fn result_count(&self) -> usize {
        self.controller.results().len()
    }

    /// `"notRequested" | "loading" | "ready" | "unavailable"`.
    #[wasm_bindgen(getter, js_name = "indexStatus")]
    pub fn index_status(&self) -> String {
        self.controller.index_status().as_str().to_string()
    }
}

/// One-shot search over an index body, for pages that render their own UI.
///
/// ```js
/// const hits = searchIndex(await (await fetch("/index.json")).text(), "routing", 10);
/// ```
#[wasm_bindgen(js_name = "searchIndex")]
pub fn search_index(json: &str, query: &str, limit: Option<usize>) -> Result<JsValue, JsValue> {
    let index = SearchIndex::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let options = WidgetConfig::default();
    let limit = limit.unwrap_or(options.limit);

    let results: Vec<JsSearchResult> = match_documents(query, &index, limit)
        .into_iter()
        .map(|doc| JsSearchResult {
            title: doc.title.clone(),
            permalink: doc.permalink.clone(),
            snippet: extract_with(&doc.content, query.trim(), &options.snippet),
        })
        .collect();
    to_value(&results).map_err(|e| e.to_string().into())
}

fn parse_options(options: JsValue) -> Result<WidgetConfig, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(WidgetConfig::default());
    }
    from_value(options).map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))
}

fn effects_to_js(effects: Vec<Effect>) -> Result<Array, JsValue> {
    let array = Array::new();
    for effect in &effects {
        array.push(&to_value(effect)?);
    }
    Ok(array)
}
