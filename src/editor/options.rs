//! Host callbacks and overrides for the event router

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};

use super::completion::{CompletionSource, DocSource};
use super::document::Document;
use super::position::Position;
use super::syntax::{BalancedForms, SyntaxCheck};
use super::word::WordChars;

/// What an Up/Down override gets to look at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationContext {
    pub cursor: Position,
    pub line_count: usize,
}

/// What an Enter override gets to look at
#[derive(Debug, Clone, Copy)]
pub struct SubmitContext<'a> {
    pub source: &'a str,
    pub cursor: Position,
    /// End of the buffer
    pub end: Position,
    pub shift: bool,
    pub meta: bool,
}

pub type TextCallback = Box<dyn FnMut(&str)>;
pub type Callback = Box<dyn FnMut()>;
pub type NavigationPredicate = Box<dyn Fn(&NavigationContext) -> bool>;
pub type SubmitPredicate = Box<dyn for<'a> Fn(&SubmitContext<'a>) -> bool>;
pub type InitHook = Box<dyn FnOnce(&mut dyn Document)>;

/// Everything the host plugs into an [`EventRouter`]
///
/// [`EventRouter`]: super::EventRouter
pub struct EditorOptions<T> {
    /// Presentation properties, passed through untouched
    pub style: BTreeMap<String, String>,
    /// Options for the editing surface, passed through untouched
    pub surface: Map<String, Value>,
    pub on_change: Option<TextCallback>,
    pub on_eval: Option<TextCallback>,
    pub on_up: Option<Callback>,
    pub on_down: Option<Callback>,
    pub complete_word: Option<Box<dyn CompletionSource<T>>>,
    pub doc_lookup: Option<Box<dyn DocSource<T>>>,
    pub should_go_up: Option<NavigationPredicate>,
    pub should_go_down: Option<NavigationPredicate>,
    pub should_eval: Option<SubmitPredicate>,
    pub syntax: Box<dyn SyntaxCheck>,
    pub word_chars: WordChars,
    pub on_editor_init: Option<InitHook>,
}

impl<T> EditorOptions<T> {
    pub fn new() -> Self {
        Self {
            style: BTreeMap::new(),
            surface: Map::new(),
            on_change: None,
            on_eval: None,
            on_up: None,
            on_down: None,
            complete_word: None,
            doc_lookup: None,
            should_go_up: None,
            should_go_down: None,
            should_eval: None,
            syntax: Box::new(BalancedForms),
            word_chars: WordChars::default(),
            on_editor_init: None,
        }
    }

    pub fn style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(key.into(), value.into());
        self
    }

    pub fn surface_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.surface.insert(key.into(), value);
        self
    }

    pub fn on_change(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn on_eval(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_eval = Some(Box::new(f));
        self
    }

    pub fn on_up(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_up = Some(Box::new(f));
        self
    }

    pub fn on_down(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_down = Some(Box::new(f));
        self
    }

    pub fn complete_word(mut self, source: impl CompletionSource<T> + 'static) -> Self {
        self.complete_word = Some(Box::new(source));
        self
    }

    pub fn doc_lookup(mut self, source: impl DocSource<T> + 'static) -> Self {
        self.doc_lookup = Some(Box::new(source));
        self
    }

    pub fn should_go_up(mut self, f: impl Fn(&NavigationContext) -> bool + 'static) -> Self {
        self.should_go_up = Some(Box::new(f));
        self
    }

    pub fn should_go_down(mut self, f: impl Fn(&NavigationContext) -> bool + 'static) -> Self {
        self.should_go_down = Some(Box::new(f));
        self
    }

    pub fn should_eval(mut self, f: impl for<'a> Fn(&SubmitContext<'a>) -> bool + 'static) -> Self {
        self.should_eval = Some(Box::new(f));
        self
    }

    pub fn syntax(mut self, checker: impl SyntaxCheck + 'static) -> Self {
        self.syntax = Box::new(checker);
        self
    }

    pub fn word_chars(mut self, chars: WordChars) -> Self {
        self.word_chars = chars;
        self
    }

    pub fn on_editor_init(mut self, f: impl FnOnce(&mut dyn Document) + 'static) -> Self {
        self.on_editor_init = Some(Box::new(f));
        self
    }
}

impl<T> Default for EditorOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Manual Debug implementation since the callbacks aren't Debug
impl<T> fmt::Debug for EditorOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorOptions")
            .field("style", &self.style)
            .field("surface", &self.surface)
            .field("on_change", &self.on_change.is_some())
            .field("on_eval", &self.on_eval.is_some())
            .field("on_up", &self.on_up.is_some())
            .field("on_down", &self.on_down.is_some())
            .field("complete_word", &self.complete_word.is_some())
            .field("doc_lookup", &self.doc_lookup.is_some())
            .field("word_chars", &self.word_chars)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::completion::Candidate;

    #[test]
    fn test_defaults() {
        let options = EditorOptions::<String>::new();
        assert!(options.on_eval.is_none());
        assert!(options.complete_word.is_none());
        assert!(options.syntax.is_valid("(+ 1 2)"));
        assert!(!options.syntax.is_valid("(+ 1 2"));
        assert_eq!(options.word_chars, WordChars::default());
    }

    #[test]
    fn test_builder_passes_through_opaque_options() {
        let options = EditorOptions::<String>::new()
            .style("font-family", "monospace")
            .surface_option("lineNumbers", Value::Bool(false))
            .surface_option("theme", Value::String("dark".into()));

        assert_eq!(options.style.get("font-family").map(String::as_str), Some("monospace"));
        assert_eq!(options.surface.get("lineNumbers"), Some(&Value::Bool(false)));
        assert_eq!(options.surface.len(), 2);
    }

    #[test]
    fn test_builder_sets_sources() {
        let options = EditorOptions::new()
            .complete_word(|fragment: &str| vec![Candidate::plain(fragment)])
            .doc_lookup(|_: &String| -> Option<String> { None });
        let source = options.complete_word.as_ref().unwrap();
        assert_eq!(source.complete("x").unwrap()[0].match_text, "x");
        assert!(options.doc_lookup.is_some());
    }

    #[test]
    fn test_debug_hides_callbacks() {
        let options = EditorOptions::<String>::new().on_eval(|_| {});
        let rendered = format!("{options:?}");
        assert!(rendered.contains("on_eval: true"));
        assert!(rendered.contains("on_up: false"));
    }
}
