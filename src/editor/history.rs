//! In-memory submission history
//!
//! Entries are kept for the lifetime of the process only. Walking back
//! stashes the text being edited and walking forward past the newest entry
//! restores it.

use std::collections::VecDeque;

use crate::config::HistoryConfig;

#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    max_size: usize,
    /// Entry currently shown, `None` while editing the draft
    index: Option<usize>,
    draft: String,
}

impl History {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_size: max_size.max(1),
            index: None,
            draft: String::new(),
        }
    }

    pub fn from_config(config: &HistoryConfig) -> Self {
        Self::new(config.max_size)
    }

    /// Record a submission and reset navigation
    ///
    /// Blank input and repeats of the newest entry are not recorded.
    pub fn push(&mut self, entry: &str) {
        self.index = None;
        self.draft.clear();

        if entry.trim().is_empty() || self.entries.back().is_some_and(|last| last == entry) {
            return;
        }
        if self.entries.len() == self.max_size {
            self.entries.pop_front();
        }
        self.entries.push_back(entry.to_string());
    }

    /// Step to the previous (older) entry
    ///
    /// `current` is the text being edited; it is stashed on the first step.
    /// Returns `None` when there is nothing older.
    pub fn older(&mut self, current: &str) -> Option<&str> {
        let index = match self.index {
            None if self.entries.is_empty() => return None,
            None => {
                self.draft = current.to_string();
                self.entries.len() - 1
            }
            Some(0) => return None,
            Some(i) => i - 1,
        };
        self.index = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    /// Step to the next (newer) entry, ending at the stashed draft
    pub fn newer(&mut self) -> Option<&str> {
        let index = self.index?;
        if index + 1 < self.entries.len() {
            self.index = Some(index + 1);
            self.entries.get(index + 1).map(String::as_str)
        } else {
            self.index = None;
            Some(self.draft.as_str())
        }
    }

    pub fn is_navigating(&self) -> bool {
        self.index.is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::from_config(&HistoryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_back_and_forward() {
        let mut history = History::new(10);
        history.push("(+ 1 2)");
        history.push("(map inc [1 2])");

        assert_eq!(history.older("(str"), Some("(map inc [1 2])"));
        assert_eq!(history.older("ignored"), Some("(+ 1 2)"));
        assert_eq!(history.older("ignored"), None);
        assert_eq!(history.newer(), Some("(map inc [1 2])"));
        assert_eq!(history.newer(), Some("(str"));
        assert!(!history.is_navigating());
        assert_eq!(history.newer(), None);
    }

    #[test]
    fn test_empty_history() {
        let mut history = History::new(10);
        assert_eq!(history.older("x"), None);
        assert_eq!(history.newer(), None);
    }

    #[test]
    fn test_skips_blank_and_repeated() {
        let mut history = History::new(10);
        history.push("  ");
        history.push("(inc 1)");
        history.push("(inc 1)");
        history.push("(dec 1)");
        history.push("(inc 1)");
        let entries: Vec<_> = history.entries().collect();
        assert_eq!(entries, vec!["(inc 1)", "(dec 1)", "(inc 1)"]);
    }

    #[test]
    fn test_bounded() {
        let mut history = History::new(2);
        history.push("a");
        history.push("b");
        history.push("c");
        let entries: Vec<_> = history.entries().collect();
        assert_eq!(entries, vec!["b", "c"]);
    }

    #[test]
    fn test_push_resets_navigation() {
        let mut history = History::new(10);
        history.push("a");
        history.older("draft");
        history.push("b");
        assert!(!history.is_navigating());
        assert_eq!(history.older(""), Some("b"));
    }
}
