// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyboard decoding.
//!
//! Takes the three things a `keydown` listener can cheaply forward (`key`,
//! `ctrlKey`, `metaKey`) and decides which widget command, if any, it means.
//! Whether the command applies depends on modal state; that is the
//! controller's call, not this module's.

/// The subset of a `KeyboardEvent` the widget cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
    /// Cmd on macOS.
    pub meta: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            meta: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

/// What a key press asks the widget to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl+K / Cmd+K, from anywhere in the page.
    Open,
    Close,
    Up,
    Down,
    Select,
}

impl Shortcut {
    pub fn from_key(input: &KeyInput) -> Option<Self> {
        if input.ctrl || input.meta {
            return input.key.eq_ignore_ascii_case("k").then_some(Shortcut::Open);
        }
        match input.key.as_str() {
            "Escape" | "Esc" => Some(Shortcut::Close),
            "ArrowUp" | "Up" => Some(Shortcut::Up),
            "ArrowDown" | "Down" => Some(Shortcut::Down),
            "Enter" => Some(Shortcut::Select),
            _ => None,
        }
    }
}
