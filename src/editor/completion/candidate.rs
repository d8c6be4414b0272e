//! Completion candidates

/// One completion option
///
/// `value` is whatever the source attaches (a symbol, a var, a keyword) and
/// is handed back to the documentation source. `match_text` is the literal
/// text that replaces the current word when this candidate is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<T> {
    pub value: T,
    pub display: String,
    pub match_text: String,
}

impl<T> Candidate<T> {
    pub fn new(value: T, display: impl Into<String>, match_text: impl Into<String>) -> Self {
        Self {
            value,
            display: display.into(),
            match_text: match_text.into(),
        }
    }
}

impl Candidate<String> {
    /// A candidate whose value, display form and replacement are the same text
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: text.clone(),
            display: text.clone(),
            match_text: text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_candidate() {
        let c = Candidate::plain("mapcat");
        assert_eq!(c.value, "mapcat");
        assert_eq!(c.display, "mapcat");
        assert_eq!(c.match_text, "mapcat");
    }

    #[test]
    fn test_display_differs_from_match() {
        let c = Candidate::new(42u32, "map (clojure.core)", "map");
        assert_eq!(c.value, 42);
        assert_eq!(c.match_text, "map");
    }
}
