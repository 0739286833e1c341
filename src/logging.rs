//! Structured logging setup for host programs embedding skein
//!
//! The graph emits tracing events (vertex/edge mutation at debug,
//! traversal spans and completion at trace); hosts that want them on
//! stderr can install a subscriber through this module instead of
//! wiring `tracing-subscriber` themselves.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter directive used when neither `SKEIN_LOG` nor an explicit level
/// is supplied.
const DEFAULT_DIRECTIVE: &str = "skein=info";

/// Install a global stderr subscriber for skein's tracing events.
///
/// `level` is either a bare level ("debug") scoped to this crate or a
/// full filter directive ("skein=trace,warn"); the `SKEIN_LOG`
/// environment variable overrides it. With `json` set, events are
/// emitted as JSON with span open/close records for machine
/// consumption; otherwise as compact text.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(level: Option<&str>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let directive = match level {
        Some(spec) if spec.contains('=') => spec.to_string(),
        Some(spec) => format!("skein={}", spec),
        None => DEFAULT_DIRECTIVE.to_string(),
    };

    let filter =
        EnvFilter::try_from_env("SKEIN_LOG").unwrap_or_else(|_| EnvFilter::new(directive));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
