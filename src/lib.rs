//! REPL Editor Library
//!
//! Editing decisions for an interactive read-eval-print loop input: word
//! location, Tab completion cycling, Enter submission and Up/Down history
//! gating. The host supplies the text surface, the evaluator and the
//! completion source; the library decides what each key means.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `config`: Configuration management
//! - `editor`: The editing decision engine
//! - `error`: Error types and handling
//! - `repl`: Terminal REPL built on the engine
//!
//! # Example
//!
//! ```
//! use repl_editor::editor::{EditorEvent, EditorOptions, EventRouter, TextBuffer};
//!
//! let mut router = EventRouter::<String>::new(EditorOptions::new().on_eval(|source| {
//!     println!("evaluating {source}");
//! }));
//! let mut buffer = TextBuffer::new("(+ 1 2)");
//!
//! let enter = EditorEvent::Enter { shift: false, meta: false };
//! assert!(router.on_key_down(enter, &mut buffer).prevent_default());
//! ```

pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod repl;

// Re-export commonly used types
pub use config::Config;
pub use editor::{
    Candidate, CompletionState, Document, EditorEvent, EditorOptions, EventRouter, KeyOutcome,
    Position, Span, TextBuffer, WordChars, WordLocator,
};
pub use error::{EditorError, Result};
pub use repl::ReplEngine;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(version(), VERSION);
        assert!(!VERSION.is_empty());
    }
}
