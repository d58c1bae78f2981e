//! Logging setup for the binary.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// Falls back to `chat_cli=<default_level>` when `RUST_LOG` is unset or
/// invalid. Only the first call has any effect.
pub fn init(default_level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("chat_cli={default_level}")));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init("warn");
        super::init("debug");
        tracing::warn!("still alive after double init");
    }
}
