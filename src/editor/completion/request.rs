//! Request generations for asynchronous completion
//!
//! Each lookup takes a ticket. Only the newest ticket may apply its result,
//! so a slow response to an old keystroke cannot overwrite the candidates
//! for the current word.

use crate::editor::position::Span;

/// Monotonic request counter
#[derive(Debug, Default, Clone)]
pub struct RequestGeneration {
    current: u64,
}

/// Identifies one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, invalidating every earlier ticket
    pub fn next(&mut self) -> Ticket {
        self.current += 1;
        Ticket(self.current)
    }

    /// Invalidate outstanding tickets without starting a request
    pub fn invalidate(&mut self) {
        self.current += 1;
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current
    }
}

/// A pending lookup for the word under the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub ticket: Ticket,
    /// Text to send to the source
    pub fragment: String,
    /// Where the fragment sits in the document
    pub span: Span,
}
