// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Instructions from the controller to the page.
//!
//! The controller never touches the DOM. Every event returns a list of
//! effects, in order, and the host applies them. Serialized for JS as
//! `{ kind: "renderResults", html: "..." }` and so on.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Effect {
    /// Make the modal container visible.
    ShowModal,
    /// Hide the modal container.
    HideModal,
    /// Move keyboard focus into the query input.
    FocusInput,
    /// Set the query input's value to "".
    ClearInput,
    /// Stop the page behind the modal from scrolling.
    LockScroll,
    /// Undo `LockScroll`.
    UnlockScroll,
    /// Fetch the index and report back via `indexLoaded`/`indexFailed`.
    FetchIndex { url: String },
    /// Replace the results container's markup.
    RenderResults { html: String },
    /// Keep result row `index` visible in the scrolling list.
    ScrollIntoView { index: usize },
    /// Send the browser to `url`.
    Navigate { url: String },
    /// Suppress the browser's default action for the current event.
    PreventDefault,
}
