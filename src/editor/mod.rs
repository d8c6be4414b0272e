//! Editing decision engine for the REPL input
//!
//! This module holds everything that decides what a keystroke means:
//! - Word location under the cursor with a configurable word-character rule
//! - Tab completion cycling with wrap-around back to the typed text
//! - Enter gating: submit a complete form or insert a newline
//! - Up/Down gating: walk history from the first/last line or move the cursor
//!
//! The editing surface, the evaluator and the completion source are supplied
//! by the host through [`Document`], [`EditorOptions`] and the source traits.
//!
//! # Example
//!
//! ```
//! use repl_editor::editor::{Candidate, EditorEvent, EditorOptions, EventRouter, TextBuffer, Document};
//!
//! let options = EditorOptions::new().complete_word(|fragment: &str| {
//!     ["inc", "interpose", "into"]
//!         .into_iter()
//!         .filter(|name| name.starts_with(fragment))
//!         .map(Candidate::plain)
//!         .collect::<Vec<_>>()
//! });
//! let mut router = EventRouter::new(options);
//! let mut buffer = TextBuffer::new("(map in");
//!
//! router.on_key_up(EditorEvent::OtherKey('n' as u32), &mut buffer);
//! let outcome = router.on_key_down(EditorEvent::Tab { shift: false }, &mut buffer);
//!
//! assert!(outcome.prevent_default());
//! assert_eq!(buffer.text(), "(map inc");
//! ```

pub mod completion;
mod decision;
mod document;
pub mod event;
mod history;
mod options;
mod position;
mod router;
mod syntax;
mod word;

pub use completion::{
    AsyncCompletionSource, Candidate, CompletionRequest, CompletionSource, CompletionState,
    CompletionView, DocSource, Ticket,
};
pub use decision::{should_go_down, should_go_up, should_submit, should_submit_with};
pub use document::{Document, TextBuffer};
pub use event::EditorEvent;
pub use history::History;
pub use options::{EditorOptions, NavigationContext, SubmitContext};
pub use position::{Position, Span};
pub use router::{EventRouter, KeyOutcome, RouterState};
pub use syntax::{BalancedForms, SyntaxCheck, SyntaxError};
pub use word::{WordChars, WordLocator};
