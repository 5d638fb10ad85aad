// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tracing initialization.
//!
//! Natively, events go to stderr filtered by `RUST_LOG`. In the browser they
//! go to the devtools console: `warn` and above through `console.warn`,
//! everything else through `console.log`. Browsers have no wall clock that
//! `tracing-subscriber` can read, so the console format has no timestamps.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize stderr logging for the CLI. Safe to call multiple times.
///
/// `verbose` raises the default level from `warn` to `debug`; `RUST_LOG`
/// still wins when set.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let default = if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        };
        let filter = EnvFilter::builder()
            .with_default_directive(default.into())
            .from_env_lossy();

        let result = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .compact()
            .with_writer(std::io::stderr)
            .try_init();
        if let Err(e) = result {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}

#[cfg(feature = "wasm")]
pub use console::init_console;

#[cfg(feature = "wasm")]
mod console {
    use super::INIT;
    use std::io;
    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = console, js_name = log)]
        fn console_log(s: &str);

        #[wasm_bindgen(js_namespace = console, js_name = warn)]
        fn console_warn(s: &str);
    }

    /// Buffers one formatted event and hands it to the console on drop.
    pub struct ConsoleWriter {
        buf: Vec<u8>,
        warn: bool,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.buf.is_empty() {
                return Ok(());
            }
            let line = String::from_utf8_lossy(&self.buf);
            let line = line.trim_end();
            if self.warn {
                console_warn(line);
            } else {
                console_log(line);
            }
            self.buf.clear();
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let _ = io::Write::flush(self);
        }
    }

    pub struct MakeConsoleWriter;

    impl<'a> MakeWriter<'a> for MakeConsoleWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                buf: Vec::new(),
                warn: false,
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                buf: Vec::new(),
                warn: *meta.level() <= Level::WARN,
            }
        }
    }

    /// Route tracing events to the browser console. Safe to call repeatedly.
    pub fn init_console() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_writer(MakeConsoleWriter)
                .with_max_level(Level::INFO)
                .with_ansi(false)
                .without_time()
                .with_target(false)
                .try_init();
        });
    }
}
