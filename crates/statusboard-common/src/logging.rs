//! Structured logging setup built on `tracing-subscriber`.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Configuration for the logging system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level filter used when `RUST_LOG` is unset (e.g. "info", "statusboard=debug").
    pub level: String,
    /// Emit one JSON object per line instead of human-readable text.
    pub json_format: bool,
    /// Optional file path for log output; stdout when `None`.
    pub file_path: Option<String>,
    /// Whether to include target module information.
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_path: None,
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    /// Builds the filter: `RUST_LOG` wins, then the configured level, then `info`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Initialize the global tracing subscriber.
///
/// When logging to a file the returned guard must be held for the lifetime
/// of the process, otherwise buffered lines are lost on exit.
pub fn init_logging(
    config: &LoggingConfig,
) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error + Send + Sync>> {
    let (writer, guard) = match &config.file_path {
        Some(file_path) => {
            let path = Path::new(file_path);
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path.file_name().ok_or("log file path has no file name")?;
            std::fs::create_dir_all(directory)?;

            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(writer), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stdout), None),
    };

    let registry = tracing_subscriber::registry().with(config.env_filter());

    if config.json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(config.include_targets)
                    .with_ansi(config.file_path.is_none())
                    .with_writer(writer),
            )
            .try_init()?;
    }

    Ok(guard)
}
