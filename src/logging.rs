//! Unified logging for debug output.
//!
//! Provides compact timestamped logging, quiet by default. The `RUST_LOG`
//! environment variable overrides the default level at runtime:
//!
//! ```bash
//! RUST_LOG=debug randsum
//! ```

use std::sync::Once;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is unset: errors and warnings only.
const DEFAULT_FILTER: &str = "warn";

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Initialize logging.
///
/// Call once at startup. Safe to call multiple times (only first call takes
/// effect). Diagnostics go to stderr through `tracing`; program output never
/// flows through here.
pub fn init() {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_timer(CompactTime)
            .with_level(true)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}
