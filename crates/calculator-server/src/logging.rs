//! Tracing subscriber setup.
//!
//! Human-readable output goes to stdout. When file logging is enabled, every
//! event passing the filter is also appended as JSON to `combined.log`, and
//! ERROR events additionally to `error.log`.

use anyhow::Context;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::{Format, Json, JsonFields};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::config::ServerConfig;

/// Combined log file name.
pub const COMBINED_LOG: &str = "combined.log";

/// Error-only log file name.
pub const ERROR_LOG: &str = "error.log";

/// Keeps the non-blocking file writers flushing. Drop at process exit.
#[must_use = "dropping the guards stops file logging"]
pub struct LogGuards {
    _guards: Vec<WorkerGuard>,
}

/// JSON formatting shared by the log files.
///
/// Each record embeds its current span and the span list, so fields set on
/// the request span (the service name among them) reach every file record.
pub fn json_layer<S, W>(writer: W) -> fmt::Layer<S, JsonFields, Format<Json>, W>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
    W: for<'writer> MakeWriter<'writer> + 'static,
{
    fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_ansi(false)
        .with_writer(writer)
}

/// Filter directive: `RUST_LOG` if set, otherwise verbose or configured level.
fn filter_directive(config: &ServerConfig, verbose: bool) -> String {
    match std::env::var("RUST_LOG") {
        Ok(directive) if !directive.is_empty() => directive,
        _ if verbose => "debug,tower_http=debug".to_string(),
        _ => config.log_filter.clone(),
    }
}

/// Install the global subscriber.
pub fn init_tracing(config: &ServerConfig, verbose: bool) -> anyhow::Result<LogGuards> {
    let directive = filter_directive(config, verbose);
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("invalid log filter '{directive}'"))?;

    let mut guards = Vec::new();
    let file_layers = if config.file_logging {
        std::fs::create_dir_all(&config.log_dir).with_context(|| {
            format!("failed to create log directory {}", config.log_dir.display())
        })?;

        let (combined, combined_guard) = tracing_appender::non_blocking(
            tracing_appender::rolling::never(&config.log_dir, COMBINED_LOG),
        );
        let (errors, errors_guard) = tracing_appender::non_blocking(
            tracing_appender::rolling::never(&config.log_dir, ERROR_LOG),
        );
        guards.push(combined_guard);
        guards.push(errors_guard);

        let combined_layer = json_layer(combined);
        let errors_layer = json_layer(errors).with_filter(LevelFilter::ERROR);
        Some(combined_layer.and_then(errors_layer))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layers)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(LogGuards { _guards: guards })
}
