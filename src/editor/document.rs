//! The editing surface seen by the decision engine
//!
//! The router never owns a text engine. It reads lines and the cursor
//! through [`Document`] and writes back with [`Document::replace_range`].
//! [`TextBuffer`] is a plain in-memory implementation used by the terminal
//! host and by tests.

use super::position::{Position, Span};

/// A multi-line text surface with a single cursor
pub trait Document {
    /// Number of lines; an empty document has one empty line
    fn line_count(&self) -> usize;

    /// Content of a line without its terminator
    fn line(&self, index: usize) -> Option<&str>;

    /// Current cursor position
    fn cursor(&self) -> Position;

    /// Move the cursor, clipping it into the document
    fn set_cursor(&mut self, pos: Position);

    /// Replace `[from, to)` with `text`
    fn replace_range(&mut self, from: Position, to: Position, text: &str);

    /// Replace the whole content
    fn set_text(&mut self, text: &str);

    /// Full content, lines joined with `\n`
    fn text(&self) -> String {
        (0..self.line_count())
            .filter_map(|i| self.line(i))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Length of a line in characters
    fn line_len(&self, index: usize) -> usize {
        self.line(index).map(|l| l.chars().count()).unwrap_or(0)
    }

    /// Position just past the last character of the document
    fn end(&self) -> Position {
        let last = self.line_count().saturating_sub(1);
        Position::new(last, self.line_len(last))
    }

    /// Text inside a span
    fn text_in(&self, span: Span) -> String {
        let mut out = String::new();
        for index in span.from.line..=span.to.line {
            let Some(line) = self.line(index) else {
                break;
            };
            let start = if index == span.from.line { span.from.ch } else { 0 };
            let end = if index == span.to.line {
                span.to.ch
            } else {
                usize::MAX
            };
            out.extend(line.chars().skip(start).take(end.saturating_sub(start)));
            if index != span.to.line {
                out.push('\n');
            }
        }
        out
    }
}

/// In-memory multi-line buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor: Position,
}

impl TextBuffer {
    /// Create a buffer holding `text` with the cursor at the end
    pub fn new(text: &str) -> Self {
        let mut buffer = Self {
            lines: Vec::new(),
            cursor: Position::default(),
        };
        buffer.set_text(text);
        buffer
    }

    /// Create a buffer with the cursor at `cursor`
    pub fn with_cursor(text: &str, cursor: Position) -> Self {
        let mut buffer = Self::new(text);
        buffer.set_cursor(cursor);
        buffer
    }

    /// Insert text at the cursor and move the cursor after it
    pub fn insert_text(&mut self, text: &str) {
        let at = self.cursor;
        self.replace_range(at, at, text);
    }

    /// Insert a single character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.insert_text(c.encode_utf8(&mut buf));
    }

    /// Split the current line at the cursor
    pub fn insert_newline(&mut self) {
        self.insert_text("\n");
    }

    /// Delete the character before the cursor, joining lines at column 0
    pub fn backspace(&mut self) {
        let cursor = self.cursor;
        if cursor.ch > 0 {
            self.replace_range(Position::new(cursor.line, cursor.ch - 1), cursor, "");
        } else if cursor.line > 0 {
            let prev = cursor.line - 1;
            let prev_end = Position::new(prev, self.line_len(prev));
            self.replace_range(prev_end, cursor, "");
        }
    }

    /// Delete the character under the cursor, joining lines at line end
    pub fn delete(&mut self) {
        let cursor = self.cursor;
        if cursor.ch < self.line_len(cursor.line) {
            self.replace_range(cursor, cursor.offset(1), "");
        } else if cursor.line + 1 < self.lines.len() {
            self.replace_range(cursor, Position::new(cursor.line + 1, 0), "");
        }
    }

    pub fn move_home(&mut self) {
        self.cursor.ch = 0;
    }

    pub fn move_line_end(&mut self) {
        self.cursor.ch = self.line_len(self.cursor.line);
    }

    pub fn move_left(&mut self) {
        let cursor = self.cursor;
        if cursor.ch > 0 {
            self.cursor.ch -= 1;
        } else if cursor.line > 0 {
            self.cursor = Position::new(cursor.line - 1, self.line_len(cursor.line - 1));
        }
    }

    pub fn move_right(&mut self) {
        let cursor = self.cursor;
        if cursor.ch < self.line_len(cursor.line) {
            self.cursor.ch += 1;
        } else if cursor.line + 1 < self.lines.len() {
            self.cursor = Position::new(cursor.line + 1, 0);
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor.line > 0 {
            let target = Position::new(self.cursor.line - 1, self.cursor.ch);
            self.set_cursor(target);
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor.line + 1 < self.lines.len() {
            let target = Position::new(self.cursor.line + 1, self.cursor.ch);
            self.set_cursor(target);
        }
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.end();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// All lines of the buffer
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn clip(&self, pos: Position) -> Position {
        let line = pos.line.min(self.lines.len().saturating_sub(1));
        Position::new(line, pos.ch.min(self.line_len(line)))
    }

    fn byte_index(line: &str, ch: usize) -> usize {
        line.char_indices()
            .nth(ch)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new("")
    }
}

impl Document for TextBuffer {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    fn cursor(&self) -> Position {
        self.cursor
    }

    fn set_cursor(&mut self, pos: Position) {
        self.cursor = self.clip(pos);
    }

    fn replace_range(&mut self, from: Position, to: Position, text: &str) {
        let (from, to) = {
            let a = self.clip(from);
            let b = self.clip(to);
            if a <= b { (a, b) } else { (b, a) }
        };

        let head = &self.lines[from.line];
        let prefix = &head[..Self::byte_index(head, from.ch)];
        let tail = &self.lines[to.line];
        let suffix = &tail[Self::byte_index(tail, to.ch)..];

        let joined = format!("{prefix}{text}{suffix}");
        let replacement: Vec<String> = joined.split('\n').map(str::to_string).collect();

        let inserted_lines = text.matches('\n').count();
        let end = match text.rsplit_once('\n') {
            None => from.offset(text.chars().count()),
            Some((_, last)) => Position::new(from.line + inserted_lines, last.chars().count()),
        };

        self.lines.splice(from.line..=to.line, replacement);

        let cursor = self.cursor;
        self.cursor = if cursor >= from && cursor <= to {
            end
        } else if cursor > to && cursor.line == to.line {
            Position::new(end.line, end.ch + (cursor.ch - to.ch))
        } else if cursor > to {
            Position::new(cursor.line + end.line - to.line, cursor.ch)
        } else {
            cursor
        };
    }

    fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
        self.cursor = self.end();
    }
}
