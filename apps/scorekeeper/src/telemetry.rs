use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a JSON subscriber for a host application embedding the engine.
///
/// `RUST_LOG` overrides the default `info` filter. Safe to call more than once;
/// later calls are ignored.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,scorekeeper=info"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .ok();
}
