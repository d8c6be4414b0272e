use std::{fmt, io};

/// Crate-wide `Result` type using [`EditorError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, EditorError>;

/// Top-level error type for the editor and its host.
///
/// The editing core itself never fails; these errors come from the ambient
/// layers (configuration, terminal I/O) and from pluggable sources, whose
/// failures the router degrades to "nothing found".
#[derive(Debug)]
pub enum EditorError {
    /// Configuration errors.
    Config(ConfigError),

    /// I/O errors.
    Io(io::Error),

    /// Terminal setup or rendering errors.
    Terminal(String),

    /// Completion or documentation source failures.
    Source(SourceError),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },
}

/// Errors raised by completion and documentation sources.
#[derive(Debug)]
pub enum SourceError {
    /// Candidate lookup failed for a fragment.
    CompletionFailed { fragment: String, reason: String },

    /// Documentation lookup failed.
    LookupFailed(String),

    /// The source is temporarily unavailable (e.g. evaluator not ready).
    Unavailable,
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::Config(e) => write!(f, "Configuration error: {e}"),
            EditorError::Io(e) => write!(f, "I/O error: {e}"),
            EditorError::Terminal(msg) => write!(f, "Terminal error: {msg}"),
            EditorError::Source(e) => write!(f, "Source error: {e}"),
            EditorError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::CompletionFailed { fragment, reason } => {
                write!(f, "Completion failed for '{fragment}': {reason}")
            }
            SourceError::LookupFailed(msg) => write!(f, "Documentation lookup failed: {msg}"),
            SourceError::Unavailable => write!(f, "Source unavailable"),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EditorError::Io(e) => Some(e),
            EditorError::Config(e) => Some(e),
            EditorError::Source(e) => Some(e),
            _ => None,
        }
    }
}
impl std::error::Error for ConfigError {}
impl std::error::Error for SourceError {}

/* ========================= Conversions to EditorError ========================= */

impl From<io::Error> for EditorError {
    fn from(err: io::Error) -> Self {
        EditorError::Io(err)
    }
}

impl From<ConfigError> for EditorError {
    fn from(err: ConfigError) -> Self {
        EditorError::Config(err)
    }
}

impl From<SourceError> for EditorError {
    fn from(err: SourceError) -> Self {
        EditorError::Source(err)
    }
}

impl From<toml::de::Error> for EditorError {
    fn from(err: toml::de::Error) -> Self {
        EditorError::Config(ConfigError::InvalidFormat(err.to_string()))
    }
}

impl From<toml::ser::Error> for EditorError {
    fn from(err: toml::ser::Error) -> Self {
        EditorError::Config(ConfigError::InvalidFormat(err.to_string()))
    }
}

impl From<String> for EditorError {
    fn from(msg: String) -> Self {
        EditorError::Generic(msg)
    }
}

impl From<&str> for EditorError {
    fn from(msg: &str) -> Self {
        EditorError::Generic(msg.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_config_error() {
        let err = EditorError::from(ConfigError::InvalidValue {
            field: "history.max_size".to_string(),
            value: "0".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value '0' for field 'history.max_size'"
        );
    }

    #[test]
    fn test_display_source_error() {
        let err = EditorError::from(SourceError::CompletionFailed {
            fragment: "ma".to_string(),
            reason: "evaluator busy".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Source error: Completion failed for 'ma': evaluator busy"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_conversion() {
        let err: EditorError = io::Error::new(io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, EditorError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_toml_conversion() {
        let parsed: std::result::Result<toml::Value, toml::de::Error> = toml::from_str("= broken");
        let err: EditorError = parsed.unwrap_err().into();
        assert!(matches!(
            err,
            EditorError::Config(ConfigError::InvalidFormat(_))
        ));
    }
}
