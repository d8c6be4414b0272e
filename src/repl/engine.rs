use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde_json::json;

use crate::config::Config;
use crate::editor::{
    Candidate, CompletionRequest, Document, EditorEvent, EditorOptions, EventRouter, History,
    TextBuffer,
};
use crate::error::Result;

use super::prompt::{Frame, Renderer};
use super::symbols::SymbolTable;

/// Requests raised by router callbacks, handled once the key is routed
#[derive(Debug, Clone, PartialEq, Eq)]
enum HostAction {
    Eval(String),
    Older,
    Newer,
}

/// A submitted form and what the evaluator made of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub source: String,
    pub result: String,
}

pub type Evaluator = Box<dyn FnMut(&str) -> String>;

/// Evaluator that prints the submitted form back
pub fn echo_evaluator() -> Evaluator {
    Box::new(|source: &str| source.trim().to_string())
}

/// Terminal REPL state: the input buffer, its router and the history
pub struct ReplEngine {
    buffer: TextBuffer,
    router: EventRouter<String>,
    history: History,
    actions: Rc<RefCell<VecDeque<HostAction>>>,
    symbols: Arc<SymbolTable>,
    renderer: Renderer,
    evaluator: Evaluator,
    output: Vec<Evaluation>,
    tab_width: usize,
    /// Whether the terminal reports key releases on its own
    release_events: bool,
    running: bool,
}

impl ReplEngine {
    /// Create a new REPL engine
    ///
    /// # Arguments
    /// * `config` - Effective configuration
    ///
    /// # Returns
    /// * `Self` - New engine with an empty buffer
    pub fn new(config: &Config) -> Self {
        let actions = Rc::new(RefCell::new(VecDeque::new()));
        let symbols = Arc::new(SymbolTable::core());

        let mut buffer = TextBuffer::default();
        let mut router = EventRouter::new(Self::options(config, &actions, &symbols));
        router.attach(&mut buffer);

        Self {
            buffer,
            router,
            history: History::from_config(&config.history),
            actions,
            symbols,
            renderer: Renderer::from_config(&config.display),
            evaluator: echo_evaluator(),
            output: Vec::new(),
            tab_width: config.editor.tab_width,
            release_events: false,
            running: true,
        }
    }

    fn options(
        config: &Config,
        actions: &Rc<RefCell<VecDeque<HostAction>>>,
        symbols: &Arc<SymbolTable>,
    ) -> EditorOptions<String> {
        let eval = Rc::clone(actions);
        let up = Rc::clone(actions);
        let down = Rc::clone(actions);
        let docs = Arc::clone(symbols);

        EditorOptions::new()
            .word_chars(config.word_chars())
            .style("prompt", config.display.prompt.clone())
            .surface_option("tabWidth", json!(config.editor.tab_width))
            .surface_option("colorOutput", json!(config.display.color_output))
            .on_change(|text| tracing::trace!(len = text.len(), "buffer changed"))
            .on_eval(move |source| {
                eval.borrow_mut()
                    .push_back(HostAction::Eval(source.to_string()))
            })
            .on_up(move || up.borrow_mut().push_back(HostAction::Older))
            .on_down(move || down.borrow_mut().push_back(HostAction::Newer))
            .doc_lookup(move |name: &String| docs.docs(name))
    }

    /// Replace the evaluator
    pub fn with_evaluator(mut self, evaluator: impl FnMut(&str) -> String + 'static) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    /// Tell the engine whether key releases arrive as separate events
    pub fn set_release_events(&mut self, enabled: bool) {
        self.release_events = enabled;
    }

    /// Handle one terminal key event
    ///
    /// Returns a completion lookup to run when the key changed the word
    /// under the cursor.
    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<CompletionRequest> {
        let event = EditorEvent::from_crossterm(key);

        if key.kind == KeyEventKind::Release {
            return self.key_up(event);
        }
        if self.handle_control(key) {
            return None;
        }

        let outcome = self.router.on_key_down(event, &mut self.buffer);
        if !outcome.prevent_default() {
            self.apply_default(key);
        }
        self.drain_actions();

        if self.release_events {
            None
        } else {
            self.key_up(event)
        }
    }

    /// Apply a finished completion lookup
    pub fn finish_completion(
        &mut self,
        request: CompletionRequest,
        result: Result<Vec<Candidate<String>>>,
    ) -> bool {
        self.router.finish_completion(request, result)
    }

    /// Evaluations completed since the last call
    pub fn take_output(&mut self) -> Vec<Evaluation> {
        std::mem::take(&mut self.output)
    }

    /// Render the input area
    pub fn frame(&self) -> Frame {
        let view = self.router.completion().map(|state| state.view());
        let docs = self.router.current_docs();
        self.renderer.render(&self.buffer, view.as_ref(), docs.as_deref())
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn symbols(&self) -> Arc<SymbolTable> {
        Arc::clone(&self.symbols)
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn router(&self) -> &EventRouter<String> {
        &self.router
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Check if REPL is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    fn key_up(&mut self, event: EditorEvent) -> Option<CompletionRequest> {
        self.router.on_key_up(event, &mut self.buffer);
        if event.keeps_completion() {
            return None;
        }
        self.router.begin_completion(&self.buffer)
    }

    /// Ctrl-C clears the input, Ctrl-D on an empty buffer quits
    fn handle_control(&mut self, key: &KeyEvent) -> bool {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char('c') => {
                self.router.set_value("", &mut self.buffer);
                true
            }
            KeyCode::Char('d') => {
                if self.buffer.is_empty() {
                    tracing::debug!("end of input");
                    self.running = false;
                }
                true
            }
            _ => false,
        }
    }

    fn apply_default(&mut self, key: &KeyEvent) {
        let buffer = &mut self.buffer;
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                buffer.insert_char(c)
            }
            KeyCode::Enter => buffer.insert_newline(),
            KeyCode::Tab => buffer.insert_text(&" ".repeat(self.tab_width)),
            KeyCode::Backspace => buffer.backspace(),
            KeyCode::Delete => buffer.delete(),
            KeyCode::Left => buffer.move_left(),
            KeyCode::Right => buffer.move_right(),
            KeyCode::Up => buffer.move_up(),
            KeyCode::Down => buffer.move_down(),
            KeyCode::Home => buffer.move_home(),
            KeyCode::End => buffer.move_line_end(),
            _ => {}
        }
    }

    fn drain_actions(&mut self) {
        loop {
            let Some(action) = self.actions.borrow_mut().pop_front() else {
                break;
            };
            match action {
                HostAction::Eval(source) => {
                    self.history.push(&source);
                    let result = (self.evaluator)(&source);
                    self.output.push(Evaluation { source, result });
                    self.router.set_value("", &mut self.buffer);
                }
                HostAction::Older => {
                    let current = self.buffer.text();
                    if let Some(entry) = self.history.older(&current).map(str::to_string) {
                        self.router.set_value(&entry, &mut self.buffer);
                    }
                }
                HostAction::Newer => {
                    if let Some(entry) = self.history.newer().map(str::to_string) {
                        self.router.set_value(&entry, &mut self.buffer);
                    }
                }
            }
        }
    }
}
