//! Platform-aware logging initialization.
//!
//! For WASM builds this routes `tracing` events to the browser console.
//! Server builds configure their subscriber in `main` instead.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for the current platform.
///
/// This function is idempotent - it can be called multiple times but will only
/// initialize once.
pub fn init() {
    INIT.call_once(|| {
        #[cfg(feature = "web")]
        init_web_logging();
    });
}

#[cfg(feature = "web")]
fn init_web_logging() {
    console_error_panic_hook::set_once();
    use tracing_subscriber::{filter::LevelFilter, prelude::*};
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(MakeWebConsoleWriter::new())
        .without_time(); // WASM doesn't have std::time

    tracing_subscriber::registry().with(LevelFilter::INFO).with(fmt_layer).init();
}
