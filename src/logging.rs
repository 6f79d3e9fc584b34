use std::io::IsTerminal;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Maps the host's level names onto tracing levels. Unknown names fall back to `info`.
pub fn level_directive(level: &str) -> &'static str {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" | "warning" => "warn",
        "error" | "fatal" | "panic" => "error",
        _ => "info",
    }
}

/// Installs the global subscriber once. Later calls are ignored.
pub fn init_logging(level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::new(level_directive(level));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
            .init();
    });
}
