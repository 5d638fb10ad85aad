// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The modal search controller.
//!
//! One value owns everything the widget remembers: the modal state, the
//! memoized index, and the result list with its cursor. Hosts feed it events
//! and apply the [`Effect`]s it returns. Two controllers never share state, so
//! tests can spin up as many as they like.
//!
//! # State machine
//!
//! ```text
//!                 Ctrl/Cmd+K, trigger
//!        ┌────────┐ ───────────────▶ ┌──────┐
//!        │ Closed │                  │ Open │ ── typing ──▶ Idle / Rendered(n) / Empty
//!        └────────┘ ◀─────────────── └──────┘
//!            Escape, backdrop click, navigation
//! ```
//!
//! Lifecycle wraps the whole thing: nothing happens before `init()` or after
//! `destroy()`. Index responses are still cached when they arrive while the
//! modal is closed; they just don't render anything.

use super::effect::Effect;
use super::keys::{KeyInput, Shortcut};
use super::render::render_results;
use super::results::{Direction, ResultList, ResultState};
use crate::config::WidgetConfig;
use crate::error::LoadError;
use crate::loader::{IndexLoader, IndexStatus};
use crate::types::SearchIndex;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Active,
    Destroyed,
}

#[derive(Debug)]
pub struct SearchController {
    lifecycle: Lifecycle,
    modal: ModalState,
    loader: IndexLoader,
    results: ResultList,
}

impl SearchController {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            lifecycle: Lifecycle::Created,
            modal: ModalState::Closed,
            loader: IndexLoader::new(config.index_url),
            results: ResultList::new(config.limit, config.snippet),
        }
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Attach to the page. The modal starts hidden.
    pub fn init(&mut self) -> Vec<Effect> {
        if self.lifecycle != Lifecycle::Created {
            return Vec::new();
        }
        self.lifecycle = Lifecycle::Active;
        tracing::debug!("search widget initialized");
        vec![Effect::HideModal]
    }

    /// Detach. An open modal is closed first so the page can scroll again.
    pub fn destroy(&mut self) -> Vec<Effect> {
        if self.lifecycle != Lifecycle::Active {
            self.lifecycle = Lifecycle::Destroyed;
            return Vec::new();
        }
        let effects = self.close();
        self.lifecycle = Lifecycle::Destroyed;
        tracing::debug!("search widget destroyed");
        effects
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }

    // -------------------------------------------------------------------------
    // Modal
    // -------------------------------------------------------------------------

    pub fn open(&mut self) -> Vec<Effect> {
        if !self.is_active() {
            return Vec::new();
        }
        if self.modal == ModalState::Open {
            return vec![Effect::FocusInput];
        }
        self.modal = ModalState::Open;
        tracing::debug!("search modal opened");

        let mut effects = vec![Effect::ShowModal, Effect::LockScroll, Effect::FocusInput];
        if let Some(request) = self.loader.request() {
            effects.push(Effect::FetchIndex { url: request.url });
        }
        effects
    }

    pub fn close(&mut self) -> Vec<Effect> {
        if !self.is_active() || self.modal == ModalState::Closed {
            return Vec::new();
        }
        self.modal = ModalState::Closed;
        self.results.reset();
        tracing::debug!("search modal closed");
        vec![
            Effect::HideModal,
            Effect::ClearInput,
            Effect::RenderResults {
                html: String::new(),
            },
            Effect::UnlockScroll,
        ]
    }

    pub fn is_open(&self) -> bool {
        self.modal == ModalState::Open
    }

    pub fn modal_state(&self) -> ModalState {
        self.modal
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// A `keydown` anywhere in the document.
    pub fn handle_key(&mut self, input: &KeyInput) -> Vec<Effect> {
        if !self.is_active() {
            return Vec::new();
        }
        let Some(shortcut) = Shortcut::from_key(input) else {
            return Vec::new();
        };

        match shortcut {
            Shortcut::Open => {
                let mut effects = vec![Effect::PreventDefault];
                effects.extend(self.open());
                effects
            }
            _ if !self.is_open() => Vec::new(),
            Shortcut::Close => self.close(),
            Shortcut::Up => self.prevent_default_then(|c| c.navigate(Direction::Up)),
            Shortcut::Down => self.prevent_default_then(|c| c.navigate(Direction::Down)),
            Shortcut::Select => self.prevent_default_then(Self::select),
        }
    }

    fn prevent_default_then(&mut self, f: impl FnOnce(&mut Self) -> Vec<Effect>) -> Vec<Effect> {
        let mut effects = vec![Effect::PreventDefault];
        effects.extend(f(self));
        effects
    }

    /// The query input changed.
    pub fn set_query(&mut self, raw: &str) -> Vec<Effect> {
        if !self.is_active() || !self.is_open() {
            return Vec::new();
        }
        let index = self.current_index();
        self.results.set_query(raw, &index);
        vec![self.render()]
    }

    /// Move the selection cursor.
    pub fn navigate(&mut self, direction: Direction) -> Vec<Effect> {
        if !self.is_active() || !self.is_open() {
            return Vec::new();
        }
        match self.results.navigate(direction) {
            Some(index) => vec![self.render(), Effect::ScrollIntoView { index }],
            None => Vec::new(),
        }
    }

    /// Go to the selected result (Enter). No-op with nothing selected.
    pub fn select(&mut self) -> Vec<Effect> {
        if !self.is_active() || !self.is_open() {
            return Vec::new();
        }
        match self.results.select().map(str::to_string) {
            Some(url) => self.navigate_away(url),
            None => Vec::new(),
        }
    }

    /// A click on result row `index`, independent of the cursor.
    pub fn click_result(&mut self, index: usize) -> Vec<Effect> {
        if !self.is_active() || !self.is_open() {
            return Vec::new();
        }
        match self.results.permalink_at(index).map(str::to_string) {
            Some(url) => self.navigate_away(url),
            None => Vec::new(),
        }
    }

    /// A pointer press on the modal overlay. Presses outside the content
    /// region (on the backdrop) close the modal.
    pub fn pointer_down(&mut self, inside_content: bool) -> Vec<Effect> {
        if inside_content {
            return Vec::new();
        }
        self.close()
    }

    fn navigate_away(&mut self, url: String) -> Vec<Effect> {
        tracing::debug!(%url, "navigating to search result");
        let mut effects = vec![Effect::Navigate { url }];
        effects.extend(self.close());
        effects
    }

    // -------------------------------------------------------------------------
    // Index
    // -------------------------------------------------------------------------

    /// The host's fetch finished with `body`.
    pub fn index_loaded(&mut self, body: String) -> Vec<Effect> {
        self.loader.resolve(Ok(body));
        self.rerender_after_load()
    }

    /// The host's fetch failed.
    pub fn index_failed(&mut self, reason: &str) -> Vec<Effect> {
        let error = LoadError::fetch(self.loader.url(), reason);
        self.loader.resolve(Err(error));
        self.rerender_after_load()
    }

    fn rerender_after_load(&mut self) -> Vec<Effect> {
        if !self.is_active() || !self.is_open() || self.results.state() == ResultState::Idle {
            return Vec::new();
        }
        let index = self.current_index();
        self.results.refresh(&index);
        vec![self.render()]
    }

    pub fn index_status(&self) -> IndexStatus {
        self.loader.status()
    }

    fn current_index(&self) -> Rc<SearchIndex> {
        self.loader
            .index()
            .unwrap_or_else(|| Rc::new(SearchIndex::empty()))
    }

    // -------------------------------------------------------------------------
    // Results
    // -------------------------------------------------------------------------

    pub fn results(&self) -> &ResultList {
        &self.results
    }

    /// `-1` when nothing is selected.
    pub fn selected_index(&self) -> i32 {
        self.results.selected_index()
    }

    fn render(&self) -> Effect {
        Effect::RenderResults {
            html: render_results(&self.results, self.loader.status()),
        }
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(WidgetConfig::default())
    }
}
