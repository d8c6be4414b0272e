//! Completion and documentation sources
//!
//! Sources are supplied by the host. Closures work directly:
//!
//! ```
//! use repl_editor::editor::{Candidate, CompletionSource};
//!
//! let source = |fragment: &str| {
//!     ["map", "mapcat", "max"]
//!         .into_iter()
//!         .filter(|name| name.starts_with(fragment))
//!         .map(Candidate::plain)
//!         .collect::<Vec<_>>()
//! };
//! assert_eq!(source.complete("map").unwrap().len(), 2);
//! ```

use async_trait::async_trait;

use super::candidate::Candidate;
use crate::error::Result;

/// Produces ranked candidates for the text under the cursor
pub trait CompletionSource<T> {
    /// Candidates for `fragment`, best first
    ///
    /// Never called with an empty fragment.
    fn complete(&self, fragment: &str) -> Result<Vec<Candidate<T>>>;
}

impl<T, F> CompletionSource<T> for F
where
    F: Fn(&str) -> Vec<Candidate<T>>,
{
    fn complete(&self, fragment: &str) -> Result<Vec<Candidate<T>>> {
        Ok(self(fragment))
    }
}

/// Completion source backed by asynchronous I/O
///
/// Results are applied through [`EventRouter::finish_completion`], which
/// drops responses for superseded requests.
///
/// [`EventRouter::finish_completion`]: crate::editor::EventRouter::finish_completion
#[async_trait]
pub trait AsyncCompletionSource<T: Send>: Send + Sync {
    async fn complete(&self, fragment: &str) -> Result<Vec<Candidate<T>>>;
}

/// Looks up documentation for a candidate value
pub trait DocSource<T> {
    /// Rendered documentation, or `None` when the value has none
    fn lookup(&self, value: &T) -> Result<Option<String>>;
}

impl<T, F> DocSource<T> for F
where
    F: Fn(&T) -> Option<String>,
{
    fn lookup(&self, value: &T) -> Result<Option<String>> {
        Ok(self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EditorError, SourceError};

    struct Failing;

    impl CompletionSource<String> for Failing {
        fn complete(&self, fragment: &str) -> Result<Vec<Candidate<String>>> {
            Err(SourceError::CompletionFailed {
                fragment: fragment.to_string(),
                reason: "no evaluator".to_string(),
            }
            .into())
        }
    }

    struct Symbols(Vec<&'static str>);

    #[async_trait]
    impl AsyncCompletionSource<String> for Symbols {
        async fn complete(&self, fragment: &str) -> Result<Vec<Candidate<String>>> {
            Ok(self
                .0
                .iter()
                .filter(|s| s.starts_with(fragment))
                .map(|s| Candidate::plain(*s))
                .collect())
        }
    }

    #[test]
    fn test_closure_source() {
        let source = |fragment: &str| vec![Candidate::plain(format!("{fragment}-x"))];
        let candidates = source.complete("a").unwrap();
        assert_eq!(candidates[0].match_text, "a-x");
    }

    #[test]
    fn test_failing_source() {
        let result = Failing.complete("ma");
        assert!(matches!(result, Err(EditorError::Source(_))));
    }

    #[test]
    fn test_closure_doc_source() {
        let docs = |value: &String| (value == "map").then(|| "([f coll])".to_string());
        assert_eq!(
            docs.lookup(&"map".to_string()).unwrap().as_deref(),
            Some("([f coll])")
        );
        assert_eq!(docs.lookup(&"zzz".to_string()).unwrap(), None);
    }

    #[test]
    fn test_async_source() {
        let source = Symbols(vec!["first", "filter", "map"]);
        let candidates = tokio_test::block_on(source.complete("fi")).unwrap();
        let names: Vec<_> = candidates.iter().map(|c| c.match_text.as_str()).collect();
        assert_eq!(names, vec!["first", "filter"]);
    }
}
