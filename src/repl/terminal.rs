//! Raw-mode terminal surface
//!
//! Reads key events from a crossterm [`EventStream`], lets the engine route
//! them and redraws the input area in place. Completion lookups run on
//! spawned tasks; their results come back over a channel and are applied
//! only if no later keystroke superseded them.

use std::io::{self, IsTerminal, Stdout, Write};

use crossterm::event::{
    Event, EventStream, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue, style::Print};
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::editor::{AsyncCompletionSource, Candidate, CompletionRequest};
use crate::error::{EditorError, Result};

use super::engine::{Evaluation, ReplEngine};
use super::prompt::Frame;

type LookupResult = (CompletionRequest, Result<Vec<Candidate<String>>>);

/// Restores the terminal when dropped
struct RawModeGuard {
    enhanced: bool,
}

impl RawModeGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if enhanced {
            execute!(
                io::stdout(),
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                        | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
                )
            )?;
        }
        tracing::debug!(enhanced, "terminal in raw mode");
        Ok(Self { enhanced })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.enhanced {
            let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
        }
        let _ = terminal::disable_raw_mode();
    }
}

/// Tracks what the last redraw left on screen
#[derive(Debug, Default)]
struct Screen {
    /// Cursor row within the drawn frame
    cursor_row: usize,
}

impl Screen {
    /// Erase the drawn frame and leave the cursor at its first column
    fn clear(&mut self, out: &mut Stdout) -> io::Result<()> {
        if self.cursor_row > 0 {
            queue!(out, cursor::MoveUp(to_u16(self.cursor_row)))?;
        }
        queue!(
            out,
            cursor::MoveToColumn(0),
            terminal::Clear(ClearType::FromCursorDown)
        )?;
        self.cursor_row = 0;
        Ok(())
    }

    fn draw(&mut self, out: &mut Stdout, frame: &Frame) -> io::Result<()> {
        self.clear(out)?;
        queue!(out, Print(frame.lines.join("\r\n")))?;

        let below = frame.lines.len().saturating_sub(1 + frame.cursor_row);
        if below > 0 {
            queue!(out, cursor::MoveUp(to_u16(below)))?;
        }
        queue!(out, cursor::MoveToColumn(to_u16(frame.cursor_col)))?;
        self.cursor_row = frame.cursor_row;
        out.flush()
    }

    /// Replace the frame with submitted forms and their results
    fn commit(
        &mut self,
        out: &mut Stdout,
        engine: &ReplEngine,
        evaluations: &[Evaluation],
    ) -> io::Result<()> {
        self.clear(out)?;
        let renderer = engine.renderer();
        for evaluation in evaluations {
            for line in renderer.render_source(&evaluation.source) {
                queue!(out, Print(line), Print("\r\n"))?;
            }
            for line in evaluation.result.lines() {
                queue!(out, Print(renderer.render_result(line)), Print("\r\n"))?;
            }
        }
        Ok(())
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn spawn_lookup(engine: &ReplEngine, request: CompletionRequest, tx: mpsc::UnboundedSender<LookupResult>) {
    let symbols = engine.symbols();
    tokio::spawn(async move {
        let result = symbols.complete(&request.fragment).await;
        let _ = tx.send((request, result));
    });
}

/// Run the interactive loop until end of input
///
/// # Arguments
/// * `engine` - Engine holding the buffer, router and history
///
/// # Returns
/// * `Result<()>` - Success or terminal error
pub async fn run(engine: &mut ReplEngine) -> Result<()> {
    if !io::stdin().is_terminal() {
        return Err(EditorError::Terminal(
            "standard input is not a terminal".to_string(),
        ));
    }

    let guard = RawModeGuard::enter()?;
    engine.set_release_events(guard.enhanced);

    let (tx, mut rx) = mpsc::unbounded_channel::<LookupResult>();
    let mut events = EventStream::new();
    let mut out = io::stdout();
    let mut screen = Screen::default();

    screen.draw(&mut out, &engine.frame())?;

    while engine.is_running() {
        tokio::select! {
            event = events.next() => {
                match event {
                    Some(Ok(Event::Key(key))) => {
                        if let Some(request) = engine.handle_key(&key) {
                            spawn_lookup(engine, request, tx.clone());
                        }
                        let evaluations = engine.take_output();
                        if !evaluations.is_empty() {
                            screen.commit(&mut out, engine, &evaluations)?;
                        }
                    }
                    Some(Ok(Event::Resize(..))) => {}
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
            Some((request, result)) = rx.recv() => {
                if !engine.finish_completion(request, result) {
                    continue;
                }
            }
        }

        screen.draw(&mut out, &engine.frame())?;
    }

    screen.clear(&mut out)?;
    out.flush()?;
    drop(guard);
    Ok(())
}
