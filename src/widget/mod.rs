// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search modal, minus the DOM.
//!
//! `SearchController` is the whole widget as a state machine: feed it events,
//! get back [`Effect`]s. The browser glue in `runtime::wasm` is a thin
//! translation layer; everything with behavior lives here and is tested
//! natively.

pub mod effect;
pub mod keys;
pub mod modal;
pub mod render;
pub mod results;

pub use effect::Effect;
pub use keys::{KeyInput, Shortcut};
pub use modal::{ModalState, SearchController};
pub use render::render_results;
pub use results::{Direction, ResultList, ResultState};
