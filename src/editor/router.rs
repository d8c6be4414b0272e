//! Key event routing
//!
//! The router sits between the editing surface and the host. On key-down
//! it decides whether the key is consumed (Tab cycling, Enter submission,
//! history navigation) or left to the surface. On key-up, after the surface
//! has applied the key, it rebuilds the completion session for the word
//! under the cursor.

use super::completion::{
    AsyncCompletionSource, Candidate, CompletionRequest, CompletionState, RequestGeneration, cycle,
};
use super::decision::{should_go_down, should_go_up, should_submit_with};
use super::document::Document;
use super::event::EditorEvent;
use super::options::{EditorOptions, NavigationContext, SubmitContext};
use super::word::WordLocator;
use crate::error::Result;

/// Whether the surface should still apply a key's default action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The router consumed the key; suppress the default action
    Handled,
    /// Let the surface handle the key
    PassThrough,
}

impl KeyOutcome {
    pub fn prevent_default(&self) -> bool {
        matches!(self, KeyOutcome::Handled)
    }
}

/// Whether a completion session exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterState {
    Idle,
    Completing,
}

pub struct EventRouter<T> {
    options: EditorOptions<T>,
    locator: WordLocator,
    completion: Option<CompletionState<T>>,
    generation: RequestGeneration,
    /// Last text reported to or supplied by the host
    value: String,
}

impl<T> EventRouter<T> {
    pub fn new(options: EditorOptions<T>) -> Self {
        let locator = WordLocator::new(options.word_chars.clone());
        Self {
            options,
            locator,
            completion: None,
            generation: RequestGeneration::new(),
            value: String::new(),
        }
    }

    /// Bind to a surface: run the init hook once and adopt its text
    pub fn attach(&mut self, document: &mut dyn Document) {
        if let Some(init) = self.options.on_editor_init.take() {
            init(document);
        }
        self.value = document.text();
    }

    pub fn state(&self) -> RouterState {
        if self.completion.is_some() {
            RouterState::Completing
        } else {
            RouterState::Idle
        }
    }

    pub fn completion(&self) -> Option<&CompletionState<T>> {
        self.completion.as_ref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Handle a key press before the surface applies it
    pub fn on_key_down(&mut self, event: EditorEvent, document: &mut dyn Document) -> KeyOutcome {
        tracing::trace!(?event, state = ?self.state(), "key down");

        let outcome = match event {
            EditorEvent::Cancel => {
                self.cancel();
                KeyOutcome::PassThrough
            }
            EditorEvent::ShowAllModifier => {
                if let Some(state) = self.completion.as_mut() {
                    state.show_all = true;
                }
                KeyOutcome::PassThrough
            }
            EditorEvent::Tab { shift } => {
                if cycle(self.completion.as_mut(), shift, document) {
                    KeyOutcome::Handled
                } else {
                    // The surface edits the document, so a lookup still in
                    // flight no longer matches the word at the cursor
                    self.generation.invalidate();
                    KeyOutcome::PassThrough
                }
            }
            EditorEvent::Enter { shift, meta } => self.handle_enter(shift, meta, document),
            EditorEvent::Up { shift } => self.handle_up(shift, document),
            EditorEvent::Down { shift } => self.handle_down(shift, document),
            EditorEvent::OtherKey(_) => KeyOutcome::PassThrough,
        };

        self.notify_change(document);
        outcome
    }

    /// Handle a key release, after the surface applied the key
    pub fn on_key_up(&mut self, event: EditorEvent, document: &mut dyn Document) {
        if !event.keeps_completion() {
            self.refresh(document);
        }
        self.notify_change(document);
    }

    /// Drop the completion session, leaving the document as it is
    pub fn cancel(&mut self) {
        if self.completion.take().is_some() {
            tracing::debug!("completion cancelled");
        }
        self.generation.invalidate();
    }

    /// Rebuild the completion session for the word under the cursor
    ///
    /// Uses the synchronous source, if any. Source errors leave the router
    /// idle.
    pub fn refresh(&mut self, document: &dyn Document) {
        self.generation.invalidate();
        self.completion = None;

        let Some(source) = self.options.complete_word.as_ref() else {
            return;
        };
        let (span, fragment) = self.locator.word_at(document.cursor(), document);
        if fragment.is_empty() {
            return;
        }

        let candidates = match source.complete(&fragment) {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!("completion source failed for '{fragment}': {e}");
                Vec::new()
            }
        };
        tracing::debug!(fragment = %fragment, count = candidates.len(), "completion refreshed");
        self.completion = CompletionState::new(candidates, span, fragment);
    }

    /// Start an asynchronous lookup for the word under the cursor
    ///
    /// Clears the current session and invalidates every earlier request.
    /// Returns `None` when there is no word to complete.
    pub fn begin_completion(&mut self, document: &dyn Document) -> Option<CompletionRequest> {
        self.completion = None;
        let ticket = self.generation.next();
        let (span, fragment) = self.locator.word_at(document.cursor(), document);
        if fragment.is_empty() {
            return None;
        }
        Some(CompletionRequest {
            ticket,
            fragment,
            span,
        })
    }

    /// Apply the result of a lookup started with [`begin_completion`]
    ///
    /// Results for superseded requests are dropped. Returns whether a
    /// session was started.
    ///
    /// [`begin_completion`]: EventRouter::begin_completion
    pub fn finish_completion(
        &mut self,
        request: CompletionRequest,
        result: Result<Vec<Candidate<T>>>,
    ) -> bool {
        if !self.generation.is_current(request.ticket) {
            tracing::debug!(fragment = %request.fragment, "dropping stale completion result");
            return false;
        }

        let candidates = result.unwrap_or_else(|e| {
            tracing::warn!("completion source failed for '{}': {e}", request.fragment);
            Vec::new()
        });
        self.completion = CompletionState::new(candidates, request.span, request.fragment);
        self.completion.is_some()
    }

    /// Look up candidates through an asynchronous source
    pub async fn complete_async<S>(&mut self, document: &dyn Document, source: &S) -> bool
    where
        T: Send,
        S: AsyncCompletionSource<T> + ?Sized,
    {
        let Some(request) = self.begin_completion(document) else {
            return false;
        };
        let result = source.complete(&request.fragment).await;
        self.finish_completion(request, result)
    }

    /// Documentation for the candidate currently in the document
    pub fn current_docs(&self) -> Option<String> {
        let candidate = self.completion.as_ref()?.current()?;
        let source = self.options.doc_lookup.as_ref()?;
        match source.lookup(&candidate.value) {
            Ok(docs) => docs,
            Err(e) => {
                tracing::warn!("documentation lookup failed: {e}");
                None
            }
        }
    }

    /// Replace the document text with a host-supplied value
    ///
    /// Ends any completion session. Does not report a change back.
    pub fn set_value(&mut self, value: &str, document: &mut dyn Document) {
        if document.text() != value {
            document.set_text(value);
        }
        self.value = value.to_string();
        self.cancel();
    }

    fn handle_enter(&mut self, shift: bool, meta: bool, document: &dyn Document) -> KeyOutcome {
        let cursor = document.cursor();
        let submit = match self.options.should_eval.as_ref() {
            Some(should_eval) => {
                let source = document.text();
                should_eval(&SubmitContext {
                    source: &source,
                    cursor,
                    end: document.end(),
                    shift,
                    meta,
                })
            }
            None => should_submit_with(document, cursor, shift, meta, self.options.syntax.as_ref()),
        };

        if !submit {
            return KeyOutcome::PassThrough;
        }

        let source = document.text();
        tracing::debug!(len = source.len(), "submitting buffer");
        if let Some(on_eval) = self.options.on_eval.as_mut() {
            on_eval(&source);
        }
        KeyOutcome::Handled
    }

    fn handle_up(&mut self, shift: bool, document: &dyn Document) -> KeyOutcome {
        let cursor = document.cursor();
        let go = !shift
            && match self.options.should_go_up.as_ref() {
                Some(f) => f(&Self::navigation(document)),
                None => should_go_up(cursor, shift),
            };

        if !go {
            return KeyOutcome::PassThrough;
        }
        if let Some(on_up) = self.options.on_up.as_mut() {
            on_up();
        }
        KeyOutcome::Handled
    }

    fn handle_down(&mut self, shift: bool, document: &dyn Document) -> KeyOutcome {
        let cursor = document.cursor();
        let go = !shift
            && match self.options.should_go_down.as_ref() {
                Some(f) => f(&Self::navigation(document)),
                None => should_go_down(cursor, document.line_count(), shift),
            };

        if !go {
            return KeyOutcome::PassThrough;
        }
        if let Some(on_down) = self.options.on_down.as_mut() {
            on_down();
        }
        KeyOutcome::Handled
    }

    fn navigation(document: &dyn Document) -> NavigationContext {
        NavigationContext {
            cursor: document.cursor(),
            line_count: document.line_count(),
        }
    }

    fn notify_change(&mut self, document: &dyn Document) {
        let text = document.text();
        if text == self.value {
            return;
        }
        if let Some(on_change) = self.options.on_change.as_mut() {
            on_change(&text);
        }
        self.value = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prevent_default() {
        assert!(KeyOutcome::Handled.prevent_default());
        assert!(!KeyOutcome::PassThrough.prevent_default());
    }

    #[test]
    fn test_new_router_is_idle() {
        let router = EventRouter::<String>::new(EditorOptions::new());
        assert_eq!(router.state(), RouterState::Idle);
        assert!(router.completion().is_none());
        assert_eq!(router.value(), "");
    }
}
