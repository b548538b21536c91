//! Browser console logging

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::prelude::*;
use tracing_web::{MakeWebConsoleWriter, performance_layer};

/// Route `tracing` events to the devtools console and `log` records through
/// wasm-logger. Safe to call more than once.
pub fn init_logging() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    let subscriber = tracing_subscriber::registry()
        .with(level)
        .with(fmt_layer)
        .with(perf_layer);
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return;
    }

    wasm_logger::init(wasm_logger::Config::default());
}
