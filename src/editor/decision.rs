//! Enter and Up/Down gating
//!
//! These decide whether a key belongs to the host (submit, history) or to
//! the editing surface (newline, cursor movement).

use super::document::Document;
use super::position::Position;
use super::syntax::SyntaxCheck;

/// Whether Enter should submit the buffer
///
/// Shift always inserts a newline and meta always submits. Otherwise the
/// cursor must sit at the very end of the buffer and the source must read
/// as complete. `is_valid` is only consulted in that last case.
pub fn should_submit<D, F>(document: &D, cursor: Position, shift: bool, meta: bool, is_valid: F) -> bool
where
    D: Document + ?Sized,
    F: FnOnce(&str) -> bool,
{
    if shift {
        return false;
    }
    if meta {
        return true;
    }
    cursor == document.end() && is_valid(&document.text())
}

/// [`should_submit`] with a [`SyntaxCheck`]; check errors count as invalid
pub fn should_submit_with<D, S>(document: &D, cursor: Position, shift: bool, meta: bool, syntax: &S) -> bool
where
    D: Document + ?Sized,
    S: SyntaxCheck + ?Sized,
{
    should_submit(document, cursor, shift, meta, |source| match syntax.check(source) {
        Ok(()) => true,
        Err(e) => {
            tracing::trace!("submit suppressed: {e}");
            false
        }
    })
}

/// Up moves through history from the first line
pub fn should_go_up(cursor: Position, shift: bool) -> bool {
    !shift && cursor.line == 0
}

/// Down moves through history from the last line
pub fn should_go_down(cursor: Position, line_count: usize, shift: bool) -> bool {
    !shift && cursor.line + 1 >= line_count
}
