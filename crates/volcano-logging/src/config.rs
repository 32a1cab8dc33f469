//! Logging settings, usually read from the `[logging]` table
//!
//! Missing keys take their defaults, so a config file only lists what it
//! changes.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Prefix of log file names
pub const DEFAULT_FILE_PREFIX: &str = "volcano-atlas";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `info` or
    /// `volcano_lookup=debug,info`
    pub level: String,
    pub console: ConsoleOutput,
    /// JSONL files, off unless a directory is given
    pub file: Option<FileOutput>,
    /// Field layout of JSON lines, on the console and in files
    pub fields: JsonFields,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console: ConsoleOutput::default(),
            file: None,
            fields: JsonFields::default(),
        }
    }
}

impl LogConfig {
    /// Debug level, colored pretty console
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            ..Self::default()
        }
    }

    /// Warnings only, as plain JSON lines
    pub fn testing() -> Self {
        Self {
            level: "warn".to_string(),
            console: ConsoleOutput {
                format: ConsoleFormat::Json,
                ansi: false,
            },
            ..Self::default()
        }
    }

    /// Add daily JSONL files under `directory`
    pub fn with_log_dir(mut self, directory: impl Into<PathBuf>) -> Self {
        self.file = Some(FileOutput::daily(directory));
        self
    }
}

/// How events are printed to stderr
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleFormat {
    Off,
    /// Multi-line, human-oriented
    #[default]
    Pretty,
    /// One line per event
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleOutput {
    pub format: ConsoleFormat,
    /// Colors; ignored for JSON
    pub ansi: bool,
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self {
            format: ConsoleFormat::Pretty,
            ansi: true,
        }
    }
}

impl ConsoleOutput {
    pub fn is_enabled(&self) -> bool {
        self.format != ConsoleFormat::Off
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutput {
    pub directory: PathBuf,
    pub prefix: String,
    pub rotation: LogRotation,
}

impl Default for FileOutput {
    fn default() -> Self {
        Self::daily("./logs")
    }
}

impl FileOutput {
    pub fn daily(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            prefix: DEFAULT_FILE_PREFIX.to_string(),
            rotation: LogRotation::Daily,
        }
    }

    /// Name of the file written when rotation is off
    pub fn single_file_name(&self) -> String {
        format!("{}.log", self.prefix)
    }
}

/// When a new log file is started
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    #[default]
    Daily,
    Hourly,
    /// One file, truncated at startup
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonFields {
    /// Event fields at the top level instead of under `fields`
    pub flatten: bool,
    pub span_list: bool,
    pub current_span: bool,
    /// Source file and line
    pub source_location: bool,
}

impl Default for JsonFields {
    fn default() -> Self {
        Self {
            flatten: true,
            span_list: false,
            current_span: true,
            source_location: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_pretty_console_without_files() {
        let config = LogConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.console.format, ConsoleFormat::Pretty);
        assert!(config.console.is_enabled());
        assert!(config.file.is_none());
    }

    #[test]
    fn test_presets() {
        assert_eq!(LogConfig::development().level, "debug");
        assert_eq!(LogConfig::development().console.format, ConsoleFormat::Pretty);

        let testing = LogConfig::testing();
        assert_eq!(testing.level, "warn");
        assert_eq!(testing.console.format, ConsoleFormat::Json);
        assert!(!testing.console.ansi);
    }

    #[test]
    fn test_with_log_dir() {
        let config = LogConfig::default().with_log_dir("/var/log/volcano-atlas");
        let file = config.file.unwrap();
        assert_eq!(file.directory, PathBuf::from("/var/log/volcano-atlas"));
        assert_eq!(file.rotation, LogRotation::Daily);
        assert_eq!(file.single_file_name(), "volcano-atlas.log");
    }

    #[test]
    fn test_partial_toml_table() {
        let config: LogConfig = toml::from_str(
            r#"
            level = "debug"

            [console]
            format = "compact"

            [file]
            directory = "logs"
            rotation = "never"
            "#,
        )
        .unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.console.format, ConsoleFormat::Compact);
        assert!(config.console.ansi);
        let file = config.file.unwrap();
        assert_eq!(file.rotation, LogRotation::Never);
        assert_eq!(file.prefix, DEFAULT_FILE_PREFIX);
        assert!(config.fields.flatten);
    }
}
