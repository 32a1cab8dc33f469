//! Structured logging for Volcano Atlas
//!
//! Sets up a `tracing` subscriber with:
//!
//! - **Console output**: pretty (default), compact or JSON lines on stderr
//! - **File output**: JSONL files with daily/hourly rotation via tracing-appender
//! - **Env filtering**: `RUST_LOG` overrides the configured default level
//!
//! # Quick Start
//!
//! ```ignore
//! use volcano_logging::{LogConfig, VolcanoSubscriberBuilder};
//!
//! // Keep the guard alive for as long as file output is needed
//! let _guard = VolcanoSubscriberBuilder::new()
//!     .with_config(LogConfig::development())
//!     .init()?;
//! ```

pub mod config;

pub use config::{ConsoleFormat, ConsoleOutput, FileOutput, JsonFields, LogConfig, LogRotation};
pub use tracing_appender::non_blocking::WorkerGuard;

use std::fs::{self, File};

use thiserror::Error;
use tracing::Subscriber;
use tracing_appender::non_blocking::NonBlocking;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

/// Errors while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter {filter:?}: {message}")]
    Filter { filter: String, message: String },

    #[error("Failed to create log file in {directory}: {source}")]
    File {
        directory: String,
        #[source]
        source: std::io::Error,
    },

    #[error("A global subscriber is already set: {0}")]
    AlreadyInitialized(String),
}

/// Builds and installs the process-wide `tracing` subscriber
#[derive(Debug, Clone, Default)]
pub struct VolcanoSubscriberBuilder {
    config: LogConfig,
}

impl VolcanoSubscriberBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Filter directive used when `RUST_LOG` is unset
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.level = level.into();
        self
    }

    pub fn with_console(mut self, format: ConsoleFormat) -> Self {
        self.config.console.format = format;
        self
    }

    pub fn with_file_output(mut self, output: FileOutput) -> Self {
        self.config.file = Some(output);
        self
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Filter from `RUST_LOG`, falling back to the configured level
    pub fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.config.level))
            .map_err(|e| LoggingError::Filter {
                filter: self.config.level.clone(),
                message: e.to_string(),
            })
    }

    /// Install the subscriber globally
    ///
    /// The returned guard flushes the file writer when dropped and must be
    /// held until the program exits. `None` when file output is disabled.
    pub fn init(self) -> Result<Option<WorkerGuard>, LoggingError> {
        let env_filter = self.env_filter()?;

        let (file_writer, guard) = match &self.config.file {
            Some(output) => {
                let (writer, guard) = create_file_writer(output)?;
                (Some(writer), Some(guard))
            }
            None => (None, None),
        };

        let console = &self.config.console;
        let fields = self.config.fields;

        let console_layer = match console.format {
            ConsoleFormat::Off => None,
            ConsoleFormat::Pretty => Some(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_ansi(console.ansi)
                    .with_writer(std::io::stderr)
                    .boxed(),
            ),
            ConsoleFormat::Compact => Some(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_ansi(console.ansi)
                    .with_writer(std::io::stderr)
                    .boxed(),
            ),
            ConsoleFormat::Json => Some(json_layer(fields, std::io::stderr).boxed()),
        };

        let file_layer = file_writer.map(|writer| json_layer(fields, writer));

        Registry::default()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()
            .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

        tracing::debug!(level = %self.config.level, "Logging initialized");
        Ok(guard)
    }
}

/// JSON-lines layer with the configured field layout
fn json_layer<S, W>(fields: JsonFields, writer: W) -> impl Layer<S> + Send + Sync + 'static
where
    S: Subscriber + for<'span> LookupSpan<'span>,
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .json()
        .with_ansi(false)
        .flatten_event(fields.flatten)
        .with_span_list(fields.span_list)
        .with_current_span(fields.current_span)
        .with_file(fields.source_location)
        .with_line_number(fields.source_location)
        .with_writer(writer)
}

/// Non-blocking writer for file output
///
/// `Never` truncates a single `<prefix>.log`; the rotating strategies
/// append to dated `.jsonl` files.
fn create_file_writer(output: &FileOutput) -> Result<(NonBlocking, WorkerGuard), LoggingError> {
    let file_error = |source: std::io::Error| LoggingError::File {
        directory: output.directory.display().to_string(),
        source,
    };
    fs::create_dir_all(&output.directory).map_err(file_error)?;

    let rotation = match output.rotation {
        LogRotation::Never => {
            let path = output.directory.join(output.single_file_name());
            let file = File::create(&path).map_err(file_error)?;
            return Ok(tracing_appender::non_blocking(file));
        }
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Hourly => Rotation::HOURLY,
    };

    let appender = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(&output.prefix)
        .filename_suffix("jsonl")
        .build(&output.directory)
        .map_err(|e| file_error(std::io::Error::other(e.to_string())))?;
    Ok(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = VolcanoSubscriberBuilder::new();
        assert_eq!(builder.config().level, "info");
        assert_eq!(builder.config().console.format, ConsoleFormat::Pretty);
    }

    #[test]
    fn test_builder_overrides() {
        let builder = VolcanoSubscriberBuilder::new()
            .with_config(LogConfig::testing())
            .with_level("volcano_lookup=trace,warn")
            .with_console(ConsoleFormat::Off)
            .with_file_output(FileOutput {
                rotation: LogRotation::Hourly,
                ..FileOutput::default()
            });

        let config = builder.config();
        assert_eq!(config.level, "volcano_lookup=trace,warn");
        assert!(!config.console.is_enabled());
        assert_eq!(config.file.as_ref().map(|f| f.rotation), Some(LogRotation::Hourly));
    }

    #[test]
    fn test_file_writer_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output = FileOutput {
            directory: dir.path().join("nested").join("logs"),
            prefix: "unit".to_string(),
            rotation: LogRotation::Never,
        };
        let (_writer, _guard) = create_file_writer(&output).unwrap();
        assert!(dir.path().join("nested/logs/unit.log").exists());
    }
}
