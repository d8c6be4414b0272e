//! Prompt and screen rendering for the terminal REPL

use nu_ansi_term::{Color, Style};

use crate::config::DisplayConfig;
use crate::editor::{CompletionView, Document, TextBuffer};

/// Rendered screen area below the output history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<String>,
    /// Row of the cursor, relative to the first line of the frame
    pub cursor_row: usize,
    /// Column of the cursor, counted in characters
    pub cursor_col: usize,
}

/// Styles the input buffer, the candidate list and the docs line
#[derive(Debug, Clone)]
pub struct Renderer {
    prompt: String,
    continuation: String,
    color: bool,
    max_candidates: usize,
}

impl Renderer {
    /// Create a renderer from display configuration
    ///
    /// # Arguments
    /// * `display` - Display configuration
    ///
    /// # Returns
    /// * `Self` - New renderer
    pub fn from_config(display: &DisplayConfig) -> Self {
        Self {
            prompt: display.prompt.clone(),
            continuation: display.continuation_prompt.clone(),
            color: display.color_output,
            max_candidates: display.max_candidates.max(1),
        }
    }

    /// Render the buffer, then the candidate list when the user asked for
    /// it, then the documentation line for the candidate in the buffer
    pub fn render(
        &self,
        buffer: &TextBuffer,
        view: Option<&CompletionView<'_>>,
        docs: Option<&str>,
    ) -> Frame {
        let mut lines = self.render_lines(buffer.lines().iter().map(String::as_str));

        if let Some(view) = view.filter(|v| v.show_all) {
            lines.push(self.render_candidates(view));
        }
        if let Some(docs) = docs {
            lines.push(self.paint(Style::new().italic().fg(Color::DarkGray), docs));
        }

        let cursor = buffer.cursor();
        Frame {
            lines,
            cursor_row: cursor.line,
            cursor_col: self.prompt_for(cursor.line).chars().count() + cursor.ch,
        }
    }

    /// Render submitted source, without completion extras
    pub fn render_source(&self, source: &str) -> Vec<String> {
        self.render_lines(source.split('\n'))
    }

    /// Render the result of an evaluation
    pub fn render_result(&self, result: &str) -> String {
        self.paint(Style::new().fg(Color::Cyan), result)
    }

    fn render_lines<'a>(&self, lines: impl Iterator<Item = &'a str>) -> Vec<String> {
        lines
            .enumerate()
            .map(|(i, line)| {
                let prompt = if i == 0 {
                    self.paint(Style::new().bold().fg(Color::Green), &self.prompt)
                } else {
                    self.paint(Style::new().fg(Color::DarkGray), &self.continuation)
                };
                format!("{prompt}{line}")
            })
            .collect()
    }

    fn render_candidates(&self, view: &CompletionView<'_>) -> String {
        let total = view.items.len();
        let start = match view.selected {
            Some(selected) if selected >= self.max_candidates => selected + 1 - self.max_candidates,
            _ => 0,
        };
        let end = (start + self.max_candidates).min(total);

        let mut parts: Vec<String> = view.items[start..end]
            .iter()
            .enumerate()
            .map(|(offset, item)| {
                if view.selected == Some(start + offset) {
                    if self.color {
                        Style::new().reverse().paint(*item).to_string()
                    } else {
                        format!("[{item}]")
                    }
                } else {
                    item.to_string()
                }
            })
            .collect();

        let hidden = total - (end - start);
        if hidden > 0 {
            parts.push(self.paint(Style::new().fg(Color::DarkGray), &format!("(+{hidden})")));
        }
        parts.join("  ")
    }

    fn prompt_for(&self, line: usize) -> &str {
        if line == 0 {
            &self.prompt
        } else {
            &self.continuation
        }
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.color {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::Position;

    fn plain() -> Renderer {
        Renderer::from_config(&DisplayConfig {
            color_output: false,
            max_candidates: 3,
            ..DisplayConfig::default()
        })
    }

    fn view<'a>(items: &[&'a str], selected: Option<usize>) -> CompletionView<'a> {
        CompletionView {
            items: items.to_vec(),
            selected,
            show_all: true,
        }
    }

    #[test]
    fn test_prompts_and_cursor() {
        let buffer = TextBuffer::with_cursor("(let [a 1]\n  a)", Position::new(1, 2));
        let frame = plain().render(&buffer, None, None);
        assert_eq!(frame.lines, vec!["user=> (let [a 1]", "   ...   a)"]);
        assert_eq!(frame.cursor_row, 1);
        assert_eq!(frame.cursor_col, 9);
    }

    #[test]
    fn test_candidate_list_only_when_requested() {
        let buffer = TextBuffer::new("(ma");
        let mut hidden = view(&["map", "max"], None);
        hidden.show_all = false;
        assert_eq!(plain().render(&buffer, Some(&hidden), None).lines.len(), 1);

        let shown = view(&["map", "max"], Some(1));
        let frame = plain().render(&buffer, Some(&shown), Some("max ([x])"));
        assert_eq!(frame.lines[1], "map  [max]");
        assert_eq!(frame.lines[2], "max ([x])");
    }

    #[test]
    fn test_candidate_window_follows_selection() {
        let items = ["map", "max", "mapv", "mapcat", "max-key"];
        assert_eq!(
            plain().render_candidates(&view(&items, None)),
            "map  max  mapv  (+2)"
        );
        assert_eq!(
            plain().render_candidates(&view(&items, Some(4))),
            "mapv  mapcat  [max-key]  (+2)"
        );
    }

    #[test]
    fn test_colored_prompt_contains_escape_codes() {
        let renderer = Renderer::from_config(&DisplayConfig::default());
        let lines = renderer.render_source("(inc 1)");
        assert!(lines[0].contains("\u{1b}["));
        assert!(lines[0].ends_with("(inc 1)"));
    }
}
