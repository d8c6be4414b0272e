//! Completion session state and the Tab cycling transition

use super::candidate::Candidate;
use crate::editor::document::Document;
use crate::editor::position::{Position, Span};

/// An in-progress completion session
///
/// The document text in `[from, to)` always equals `initial_text` while
/// inactive and `candidates[position].match_text` while active.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionState<T> {
    /// Candidates in the order the source ranked them
    pub candidates: Vec<Candidate<T>>,
    /// Index of the current candidate
    pub position: usize,
    /// Whether a candidate is substituted into the document
    pub active: bool,
    /// Render the full candidate list
    pub show_all: bool,
    /// Text under the cursor when the session started
    pub initial_text: String,
    pub from: Position,
    pub to: Position,
}

/// Result of a cycling transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub position: usize,
    pub active: bool,
}

/// Render-ready snapshot of a completion session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionView<'a> {
    pub items: Vec<&'a str>,
    /// Highlighted item, only while a candidate is substituted
    pub selected: Option<usize>,
    pub show_all: bool,
}

impl<T> CompletionState<T> {
    /// Start a session over `span`, which currently holds `initial_text`
    ///
    /// Returns `None` for an empty candidate list. A new session is
    /// inactive and points at the first candidate.
    pub fn new(
        candidates: Vec<Candidate<T>>,
        span: Span,
        initial_text: impl Into<String>,
    ) -> Option<Self> {
        if candidates.is_empty() {
            return None;
        }
        Some(Self {
            candidates,
            position: 0,
            active: false,
            show_all: false,
            initial_text: initial_text.into(),
            from: span.from,
            to: span.to,
        })
    }

    pub fn span(&self) -> Span {
        Span::new(self.from, self.to)
    }

    /// Candidate currently substituted into the document
    pub fn current(&self) -> Option<&Candidate<T>> {
        if self.active {
            self.candidates.get(self.position)
        } else {
            None
        }
    }

    /// Text the span holds in the current state
    pub fn displayed_text(&self) -> &str {
        match self.current() {
            Some(candidate) => &candidate.match_text,
            None => &self.initial_text,
        }
    }

    /// True when cycling could not change anything
    ///
    /// That is the case without candidates, or with a single candidate
    /// identical to what the user typed.
    pub fn is_exhausted(&self) -> bool {
        match self.candidates.as_slice() {
            [] => true,
            [only] => only.match_text == self.initial_text,
            _ => false,
        }
    }

    /// Whether the first candidate already equals the typed text
    ///
    /// When it does, wrapping lands on that candidate instead of restoring
    /// the typed text, since both would look the same.
    pub fn initial_active(&self) -> bool {
        self.candidates
            .first()
            .is_some_and(|c| c.match_text == self.initial_text)
    }

    /// Compute the next position and active flag without touching anything
    pub fn transition(&self, go_back: bool) -> Option<Step> {
        if self.is_exhausted() {
            return None;
        }

        let last = self.candidates.len() - 1;
        let wrap_active = self.initial_active();

        let step = match (self.active, go_back) {
            (false, false) => Step {
                position: self.position,
                active: true,
            },
            (false, true) => Step {
                position: last,
                active: true,
            },
            (true, false) if self.position < last => Step {
                position: self.position + 1,
                active: true,
            },
            (true, true) if self.position > 0 => Step {
                position: self.position - 1,
                active: true,
            },
            (true, false) if wrap_active => Step {
                position: 0,
                active: true,
            },
            (true, true) if wrap_active => Step {
                position: last,
                active: true,
            },
            (true, _) => Step {
                position: 0,
                active: false,
            },
        };

        Some(step)
    }

    /// Advance (or go back) one candidate and rewrite the span in `document`
    ///
    /// Returns `false` without touching the document when there is nothing
    /// to cycle through.
    pub fn cycle<D: Document + ?Sized>(&mut self, go_back: bool, document: &mut D) -> bool {
        let Some(step) = self.transition(go_back) else {
            return false;
        };

        self.position = step.position;
        self.active = step.active;

        let text = self.displayed_text().to_string();
        document.replace_range(self.from, self.to, &text);
        self.to = self.from.offset(text.chars().count());

        tracing::debug!(
            position = self.position,
            active = self.active,
            text = %text,
            "completion cycled"
        );
        true
    }

    pub fn view(&self) -> CompletionView<'_> {
        CompletionView {
            items: self.candidates.iter().map(|c| c.display.as_str()).collect(),
            selected: self.active.then_some(self.position),
            show_all: self.show_all,
        }
    }
}

/// Cycle an optional session
///
/// An absent session is a no-op, like an exhausted one.
pub fn cycle<T, D: Document + ?Sized>(
    state: Option<&mut CompletionState<T>>,
    go_back: bool,
    document: &mut D,
) -> bool {
    state.is_some_and(|state| state.cycle(go_back, document))
}
