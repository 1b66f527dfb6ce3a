//! Tracing setup for the calculator binary.
//!
//! Events go to stderr with a `HH:MM:SS.mmm` timestamp, so command results on
//! stdout stay machine-readable. Levels come from the `[logging]` table:
//!
//! ```toml
//! [logging]
//! default = "warn"
//!
//! [logging.modules]
//! calculator = "debug"  # log every operation
//! ```
//!
//! A valid `RUST_LOG` replaces the table entirely:
//! ```bash
//! RUST_LOG=calculator::calculator=debug calculator divide --a 4 --b 2
//! ```

use std::sync::Once;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

const FALLBACK_LEVEL: &str = "warn";

static INIT: Once = Once::new();

struct ClockTime;

impl FormatTime for ClockTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Build the filter directive string from config.
///
/// `default` comes first, followed by one `module=level` directive per
/// override, sorted so the output is stable.
pub fn filter_directives(config: &LoggingConfig) -> String {
    let mut modules: Vec<_> = config.modules.iter().collect();
    modules.sort();

    modules
        .into_iter()
        .fold(config.default.clone(), |mut directives, (module, level)| {
            directives.push_str(&format!(",{module}={level}"));
            directives
        })
}

/// Parse the config into a filter, ignoring `RUST_LOG`.
pub fn config_filter(config: &LoggingConfig) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(filter_directives(config))
}

fn select_filter(config: &LoggingConfig) -> (EnvFilter, Option<String>) {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return (filter, None);
    }
    match config_filter(config) {
        Ok(filter) => (filter, None),
        Err(e) => (
            EnvFilter::new(FALLBACK_LEVEL),
            Some(format!("invalid [logging] levels, using \"{FALLBACK_LEVEL}\": {e}")),
        ),
    }
}

/// Install the global subscriber.
///
/// Only the first call has an effect. A subscriber installed by someone
/// else (e.g. a test harness) is left in place. Unparseable levels fall
/// back to `warn` and the problem is logged once the subscriber is up.
pub fn init_with_config(config: &LoggingConfig) {
    INIT.call_once(|| {
        let (filter, problem) = select_filter(config);

        let layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_timer(ClockTime)
            .with_target(true)
            .with_filter(filter);

        let installed = tracing_subscriber::registry().with(layer).try_init().is_ok();
        if let (true, Some(problem)) = (installed, problem) {
            tracing::warn!("{problem}");
        }
    });
}

/// Log an `info` event tagged with `handler` and `event` fields.
///
/// ```ignore
/// log_event!("cli", "initialized", "{}", path.display());
/// ```
#[macro_export]
macro_rules! log_event {
    ($handler:expr, $event:expr) => {
        tracing::info!(handler = $handler, event = $event)
    };
    ($handler:expr, $event:expr, $($arg:tt)*) => {
        tracing::info!(handler = $handler, event = $event, "{}", format_args!($($arg)*))
    };
}

/// Log a `debug` event tagged with `handler` and `event` fields.
///
/// ```ignore
/// debug_event!("calculator", "sum", "{a:?} + {b:?} = {result}");
/// ```
#[macro_export]
macro_rules! debug_event {
    ($handler:expr, $event:expr) => {
        tracing::debug!(handler = $handler, event = $event)
    };
    ($handler:expr, $event:expr, $($arg:tt)*) => {
        tracing::debug!(handler = $handler, event = $event, "{}", format_args!($($arg)*))
    };
}
