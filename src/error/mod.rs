//! Error handling for the editor and its terminal host.
//!
//! The editing decision engine never fails: syntax errors suppress
//! submission and source failures degrade to "no candidates". The error
//! types here cover the layers around it:
//! - configuration loading and validation
//! - terminal I/O in the interactive host
//! - failures reported by completion and documentation sources
//!
//! # Example
//!
//! ```rust
//! use repl_editor::error::{ConfigError, EditorError, Result};
//!
//! fn check_history_size(size: usize) -> Result<()> {
//!     if size == 0 {
//!         return Err(ConfigError::InvalidValue {
//!             field: "history.max_size".into(),
//!             value: size.to_string(),
//!         }
//!         .into());
//!     }
//!     Ok(())
//! }
//!
//! assert!(matches!(check_history_size(0), Err(EditorError::Config(_))));
//! ```

pub mod kinds;

// Re-export commonly used types
pub use kinds::{ConfigError, EditorError, Result, SourceError};
