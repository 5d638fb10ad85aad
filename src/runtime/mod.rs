// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime bindings.
//!
//! Only the browser for now. The controller is host-agnostic, so a different
//! host (a desktop webview, a test harness) drives the same `SearchController`
//! and applies the same effects.

#[cfg(feature = "wasm")]
pub mod wasm;
