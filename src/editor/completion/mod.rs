//! Completion cycling for the REPL editor
//!
//! Completion here is Tab-driven rather than menu-driven: each Tab writes
//! the next candidate straight into the document, and cycling past the end
//! of the list brings back what the user typed.
//!
//! # Architecture
//!
//! - **Candidate**: one ranked option with a display form and replacement text
//! - **CompletionState**: the session (candidates, pointer, span, flags) and
//!   its cycling transition
//! - **Source**: host-supplied candidate and documentation lookups, sync or async
//! - **Request**: generation tickets so only the newest async lookup applies
//!
//! # Examples
//!
//! ```
//! use repl_editor::editor::{Candidate, CompletionState, Document, TextBuffer, WordLocator};
//!
//! let mut buffer = TextBuffer::new("(ma");
//! let (span, word) = WordLocator::default().word_at(buffer.cursor(), &buffer);
//! let candidates = vec![Candidate::plain("map"), Candidate::plain("mapcat")];
//! let mut state = CompletionState::new(candidates, span, word).unwrap();
//!
//! state.cycle(false, &mut buffer);
//! assert_eq!(buffer.text(), "(map");
//! state.cycle(false, &mut buffer);
//! assert_eq!(buffer.text(), "(mapcat");
//! state.cycle(false, &mut buffer);
//! assert_eq!(buffer.text(), "(ma");
//! ```

mod candidate;
mod request;
mod source;
mod state;

pub use candidate::Candidate;
pub use request::{CompletionRequest, RequestGeneration, Ticket};
pub use source::{AsyncCompletionSource, CompletionSource, DocSource};
pub use state::{CompletionState, CompletionView, Step, cycle};
