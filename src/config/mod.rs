//! Configuration management for repl-editor
//!
//! This module handles loading, parsing, and validating configuration:
//! - Configuration files (TOML format)
//! - Command-line overrides applied by the binary
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::editor::WordChars;
use crate::error::{ConfigError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Editing behaviour
    #[serde(default)]
    pub editor: EditorConfig,

    /// Submission history
    #[serde(default)]
    pub history: HistoryConfig,

    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Editing behaviour configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Characters that end a word, in addition to whitespace
    #[serde(default = "default_word_separators")]
    pub word_separators: String,

    /// Spaces inserted when Tab is not consumed by completion
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
}

/// Submission history configuration
///
/// History lives in memory only and is dropped when the process exits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of history entries
    #[serde(default = "default_max_history_size")]
    pub max_size: usize,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Enable colored output
    #[serde(default = "default_color_output")]
    pub color_output: bool,

    /// Prompt shown on the first line of the buffer
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Prompt shown on continuation lines
    #[serde(default = "default_continuation_prompt")]
    pub continuation_prompt: String,

    /// Maximum number of candidates rendered in the completion list
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Enable timestamps in logs
    #[serde(default = "default_log_timestamps")]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

// Default value functions
fn default_word_separators() -> String {
    WordChars::DEFAULT_SEPARATORS.to_string()
}

fn default_tab_width() -> usize {
    2
}

fn default_max_history_size() -> usize {
    1000
}

fn default_color_output() -> bool {
    true
}

fn default_prompt() -> String {
    "user=> ".to_string()
}

fn default_continuation_prompt() -> String {
    "   ... ".to_string()
}

fn default_max_candidates() -> usize {
    8
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_timestamps() -> bool {
    false
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            word_separators: default_word_separators(),
            tab_width: default_tab_width(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_history_size(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: default_color_output(),
            prompt: default_prompt(),
            continuation_prompt: default_continuation_prompt(),
            max_candidates: default_max_candidates(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: default_log_timestamps(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file, falling back to defaults
    ///
    /// With no explicit path the default location is tried; a missing
    /// default file yields the default configuration. A missing explicit
    /// file is an error.
    ///
    /// # Arguments
    /// * `path` - Optional path to a TOML configuration file
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigError::FileNotFound(path.display().to_string()).into());
            }
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Get the default configuration file path
    ///
    /// # Returns
    /// * `PathBuf` - Path to default configuration file
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".repl-editor")
            .join("config.toml")
    }

    /// Serialize the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Ok if valid, error otherwise
    pub fn validate(&self) -> Result<()> {
        if self.history.max_size == 0 {
            return Err(invalid("history.max_size", "0"));
        }
        if self.display.max_candidates == 0 {
            return Err(invalid("display.max_candidates", "0"));
        }
        if self.editor.tab_width == 0 {
            return Err(invalid("editor.tab_width", "0"));
        }
        if self
            .editor
            .word_separators
            .chars()
            .any(|c| c.is_alphanumeric())
        {
            return Err(invalid(
                "editor.word_separators",
                &self.editor.word_separators,
            ));
        }
        Ok(())
    }

    /// Build the word-character predicate described by this configuration
    pub fn word_chars(&self) -> WordChars {
        WordChars::with_separators(self.editor.word_separators.chars())
    }
}

fn invalid(field: &str, value: &str) -> crate::error::EditorError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
    .into()
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EditorError;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.editor.word_separators, "()[]{},`'");
        assert_eq!(config.history.max_size, 1000);
        assert_eq!(config.display.prompt, "user=> ");
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            [history]
            max_size = 50

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.history.max_size, 50);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.editor.tab_width, 2);
        assert!(config.display.color_output);
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_toml_str("[history]\nmax_size = \"lots\"");
        assert!(matches!(
            result,
            Err(EditorError::Config(ConfigError::InvalidFormat(_)))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_history() {
        let mut config = Config::default();
        config.history.max_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_alphanumeric_separators() {
        let mut config = Config::default();
        config.editor.word_separators = "()a".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = Config::load_from_file(Some(Path::new("/nonexistent/repl-editor.toml")));
        assert!(matches!(
            result,
            Err(EditorError::Config(ConfigError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = Config::default();
        config.display.prompt = "cljs.user=> ".to_string();
        let text = config.to_toml_string().unwrap();
        let parsed = Config::from_toml_str(&text).unwrap();
        assert_eq!(parsed.display.prompt, "cljs.user=> ");
    }

    #[test]
    fn test_word_chars_from_config() {
        let mut config = Config::default();
        config.editor.word_separators = "()".to_string();
        let chars = config.word_chars();
        assert!(!chars.is_word_char('('));
        assert!(chars.is_word_char('['));
        assert!(!chars.is_word_char(' '));
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::Trace.to_tracing_level(), tracing::Level::TRACE);
        assert_eq!(LogLevel::Error.to_tracing_level(), tracing::Level::ERROR);
    }
}
