//! Tracing setup for the CLI and the `trace_time!` helper.
//!
//! Events go to stderr so stdout only ever carries run output. The filter is
//! taken from `RUST_LOG`, then `STEPGRAPH_LOG`, then the CLI flags.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log the time elapsed since `$start` at trace level, with optional fields.
///
/// ```rust,ignore
/// let start = Instant::now();
/// let result = engine.run(&graph, &request, &cancel)?;
/// trace_time!(start, "engine_run", steps = result.steps.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

const CRATES: [&str; 2] = ["stepgraph", "stepgraph_core"];

/// Install the global subscriber.
///
/// `--log-level` wins over `--verbose`; without either only warnings from
/// the stepgraph crates are shown. `log_json` switches to one JSON object per
/// event, including span open and close.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let directive = match log_level {
        Some(level) => filter_directive(level),
        None if verbose => filter_directive("debug"),
        None => filter_directive("warn"),
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("STEPGRAPH_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(directive));

    let registry = tracing_subscriber::registry().with(filter);
    let stderr = fmt::layer().with_writer(std::io::stderr).with_ansi(false);
    if log_json {
        registry
            .with(stderr.json().with_span_events(FmtSpan::NEW | FmtSpan::CLOSE))
            .try_init()?;
    } else {
        registry
            .with(stderr.compact().with_target(false))
            .try_init()?;
    }
    Ok(())
}

/// A bare level applies to both stepgraph crates; anything with `=` is
/// already a directive and passes through
fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        return level.to_string();
    }
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
