use std::{env, str::FromStr};

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

pub const LOG_FILTER_ENV: &str = "RUST_LOG";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match env::var(LOG_FORMAT_ENV) {
            Ok(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Installs the global `tracing` subscriber.
///
/// The filter is read from `RUST_LOG` (defaulting to `info`) and the output
/// format from `LOG_FORMAT` (`text` or `json`). Calling this more than once is
/// harmless: the second call only logs a warning.
pub fn configure_logging() -> Result<(), anyhow::Error> {
    let filter = env::var(LOG_FILTER_ENV).unwrap_or("info".to_string());
    configure_logging_with(&filter, LogFormat::from_env())
}

pub fn configure_logging_with(filter: &str, format: LogFormat) -> Result<(), anyhow::Error> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_str(filter)?)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stdout);

    let subscriber = match format {
        LogFormat::Json => subscriber.json().try_init(),
        LogFormat::Text => subscriber.try_init(),
    };

    if let Err(e) = subscriber {
        warn!(
            "Failed to initialize logging, potentially because we have initialized logging already: {}",
            e
        );
    }

    Ok(())
}
