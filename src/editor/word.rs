//! Word boundary detection under the cursor
//!
//! A "word" is a maximal run of word characters. Word characters are
//! everything except whitespace and a configurable set of separators, which
//! by default are the delimiters of Lisp-like sources: brackets, comma,
//! backtick and quote. That keeps `clojure.string/join`, `->>` and `:key`
//! whole.

use super::document::Document;
use super::position::{Position, Span};

/// Word-character predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordChars {
    separators: Vec<char>,
}

impl WordChars {
    /// Separators used when none are configured
    pub const DEFAULT_SEPARATORS: &'static str = "()[]{},`'";

    /// Predicate with an explicit separator set
    pub fn with_separators<I: IntoIterator<Item = char>>(separators: I) -> Self {
        let mut separators: Vec<char> = separators.into_iter().collect();
        separators.sort_unstable();
        separators.dedup();
        Self { separators }
    }

    pub fn is_word_char(&self, c: char) -> bool {
        !c.is_whitespace() && !self.separators.contains(&c)
    }
}

impl Default for WordChars {
    fn default() -> Self {
        Self::with_separators(Self::DEFAULT_SEPARATORS.chars())
    }
}

/// Finds the word under the cursor
#[derive(Debug, Clone, Default)]
pub struct WordLocator {
    chars: WordChars,
}

impl WordLocator {
    pub fn new(chars: WordChars) -> Self {
        Self { chars }
    }

    /// Span of the word ending at or surrounding `cursor`
    ///
    /// The scan starts at the character left of the cursor. If that is not
    /// a word character (or the cursor is at column 0) the result is the
    /// empty span at the cursor.
    pub fn locate<D: Document + ?Sized>(&self, cursor: Position, document: &D) -> Span {
        let Some(line) = document.line(cursor.line) else {
            return Span::empty(cursor);
        };
        let chars: Vec<char> = line.chars().collect();
        let ch = cursor.ch.min(chars.len());

        let mut start = ch;
        while start > 0 && self.chars.is_word_char(chars[start - 1]) {
            start -= 1;
        }
        if start == ch {
            return Span::empty(Position::new(cursor.line, ch));
        }

        let mut end = ch;
        while end < chars.len() && self.chars.is_word_char(chars[end]) {
            end += 1;
        }

        Span::new(Position::new(cursor.line, start), Position::new(cursor.line, end))
    }

    /// The located span together with its text
    pub fn word_at<D: Document + ?Sized>(&self, cursor: Position, document: &D) -> (Span, String) {
        let span = self.locate(cursor, document);
        let text = document.text_in(span);
        (span, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::document::TextBuffer;

    fn word(text: &str, line: usize, ch: usize) -> String {
        let buffer = TextBuffer::new(text);
        WordLocator::default()
            .word_at(Position::new(line, ch), &buffer)
            .1
    }

    #[test]
    fn test_word_inside_form() {
        let buffer = TextBuffer::new("(map inc coll)");
        let span = WordLocator::default().locate(Position::new(0, 8), &buffer);
        assert_eq!(span, Span::new(Position::new(0, 5), Position::new(0, 8)));
        assert_eq!(buffer.text_in(span), "inc");
    }

    #[test]
    fn test_cursor_mid_word_extends_right() {
        assert_eq!(word("(map inc coll)", 0, 10), "coll");
        assert_eq!(word("(map inc coll)", 0, 2), "map");
    }

    #[test]
    fn test_after_separator_is_empty() {
        let buffer = TextBuffer::new("(map inc coll)");
        let locator = WordLocator::default();
        assert!(locator.locate(Position::new(0, 1), &buffer).is_empty());
        assert!(locator.locate(Position::new(0, 5), &buffer).is_empty());
        assert!(locator.locate(Position::new(0, 14), &buffer).is_empty());
    }

    #[test]
    fn test_column_zero_is_empty() {
        let buffer = TextBuffer::new("map");
        let span = WordLocator::default().locate(Position::new(0, 0), &buffer);
        assert_eq!(span, Span::empty(Position::new(0, 0)));
    }

    #[test]
    fn test_namespaced_and_punctuated_symbols() {
        assert_eq!(word("(clojure.string/jo", 0, 18), "clojure.string/jo");
        assert_eq!(word("(->> xs", 0, 4), "->>");
        assert_eq!(word("{:ke", 0, 4), ":ke");
        assert_eq!(word("#{a,b", 0, 5), "b");
        assert_eq!(word("'sym", 0, 4), "sym");
        assert_eq!(word("`sym", 0, 4), "sym");
    }

    #[test]
    fn test_second_line() {
        assert_eq!(word("(defn f [x]\n  (str x", 1, 6), "str");
    }

    #[test]
    fn test_custom_separators() {
        let locator = WordLocator::new(WordChars::with_separators("()./".chars()));
        let buffer = TextBuffer::new("(clojure.string/jo");
        let (_, text) = locator.word_at(Position::new(0, 18), &buffer);
        assert_eq!(text, "jo");
    }

    #[test]
    fn test_default_predicate() {
        let chars = WordChars::default();
        for c in ['(', ')', '[', ']', '{', '}', ',', '`', '\'', ' ', '\t'] {
            assert!(!chars.is_word_char(c), "{c:?} should not be a word char");
        }
        for c in ['a', '-', '>', '.', '/', ':', '?', '!', '*', '"', 'é'] {
            assert!(chars.is_word_char(c), "{c:?} should be a word char");
        }
    }
}
