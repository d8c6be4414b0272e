//! Interactive terminal REPL built on the editor engine
//!
//! This module provides:
//! - A raw-mode crossterm surface around an in-memory [`TextBuffer`]
//! - Tab completion and docs from a built-in `clojure.core` symbol table
//! - In-memory history walked with Up/Down
//! - An echo evaluator standing in for a real language runtime
//!
//! [`TextBuffer`]: crate::editor::TextBuffer

mod engine;
mod prompt;
mod symbols;
mod terminal;

pub use engine::{Evaluation, Evaluator, ReplEngine, echo_evaluator};
pub use prompt::{Frame, Renderer};
pub use symbols::SymbolTable;
pub use terminal::run;
