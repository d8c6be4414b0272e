//! Syntax completeness checks used to gate submission

use std::fmt;

/// Why a source is not ready to submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A closing delimiter without a matching opener
    UnexpectedClose { found: char, line: usize, ch: usize },
    /// A closing delimiter of the wrong kind
    Mismatched {
        expected: char,
        found: char,
        line: usize,
        ch: usize,
    },
    /// Input ended inside a form
    Unclosed { expected: char },
    /// Input ended inside a string literal
    UnterminatedString,
    /// A predicate checker refused the source
    Rejected,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::UnexpectedClose { found, line, ch } => {
                write!(f, "Unmatched delimiter '{found}' at {line}:{ch}")
            }
            SyntaxError::Mismatched {
                expected,
                found,
                line,
                ch,
            } => write!(f, "Expected '{expected}', found '{found}' at {line}:{ch}"),
            SyntaxError::Unclosed { expected } => write!(f, "EOF while reading, expected '{expected}'"),
            SyntaxError::UnterminatedString => write!(f, "EOF while reading string"),
            SyntaxError::Rejected => write!(f, "Rejected by syntax check"),
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Decides whether a buffer is a complete, readable source
pub trait SyntaxCheck {
    fn check(&self, source: &str) -> Result<(), SyntaxError>;

    fn is_valid(&self, source: &str) -> bool {
        self.check(source).is_ok()
    }
}

impl<F> SyntaxCheck for F
where
    F: Fn(&str) -> bool,
{
    fn check(&self, source: &str) -> Result<(), SyntaxError> {
        if self(source) {
            Ok(())
        } else {
            Err(SyntaxError::Rejected)
        }
    }
}

/// Balanced-delimiter reader for Lisp-like sources
///
/// Tracks `()`, `[]` and `{}` outside of string literals, `;` line comments
/// and `\c` character literals.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalancedForms;

impl BalancedForms {
    pub fn new() -> Self {
        Self
    }

    fn closer(open: char) -> char {
        match open {
            '(' => ')',
            '[' => ']',
            _ => '}',
        }
    }
}

impl SyntaxCheck for BalancedForms {
    fn check(&self, source: &str) -> Result<(), SyntaxError> {
        let mut stack: Vec<char> = Vec::new();
        let mut in_string = false;
        let mut in_comment = false;
        let mut escape_next = false;
        let mut line = 0;
        let mut ch = 0;

        for c in source.chars() {
            let at = (line, ch);
            if c == '\n' {
                line += 1;
                ch = 0;
            } else {
                ch += 1;
            }

            if in_comment {
                in_comment = c != '\n';
                continue;
            }

            if escape_next {
                escape_next = false;
                continue;
            }

            if c == '\\' {
                escape_next = true;
                continue;
            }

            if in_string {
                in_string = c != '"';
                continue;
            }

            match c {
                '"' => in_string = true,
                ';' => in_comment = true,
                '(' | '[' | '{' => stack.push(Self::closer(c)),
                ')' | ']' | '}' => match stack.pop() {
                    Some(expected) if expected == c => {}
                    Some(expected) => {
                        return Err(SyntaxError::Mismatched {
                            expected,
                            found: c,
                            line: at.0,
                            ch: at.1,
                        });
                    }
                    None => {
                        return Err(SyntaxError::UnexpectedClose {
                            found: c,
                            line: at.0,
                            ch: at.1,
                        });
                    }
                },
                _ => {}
            }
        }

        if in_string {
            return Err(SyntaxError::UnterminatedString);
        }
        match stack.pop() {
            Some(expected) => Err(SyntaxError::Unclosed { expected }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_forms() {
        let checker = BalancedForms::new();
        assert!(checker.is_valid("(+ 1 2)"));
        assert!(checker.is_valid("42"));
        assert!(checker.is_valid(""));
        assert!(checker.is_valid("(let [a {:b [1 2]}] a)"));
    }

    #[test]
    fn test_unclosed_form() {
        let checker = BalancedForms::new();
        assert_eq!(
            checker.check("(defn f [x]\n  (inc x)"),
            Err(SyntaxError::Unclosed { expected: ')' })
        );
        assert_eq!(
            checker.check("{:a [1 2"),
            Err(SyntaxError::Unclosed { expected: ']' })
        );
    }

    #[test]
    fn test_mismatched_and_extra_closers() {
        let checker = BalancedForms::new();
        assert_eq!(
            checker.check("(let [a 1) a)"),
            Err(SyntaxError::Mismatched {
                expected: ']',
                found: ')',
                line: 0,
                ch: 9,
            })
        );
        assert_eq!(
            checker.check("(+ 1 2))"),
            Err(SyntaxError::UnexpectedClose {
                found: ')',
                line: 0,
                ch: 7,
            })
        );
    }

    #[test]
    fn test_strings_hide_delimiters() {
        let checker = BalancedForms::new();
        assert!(checker.is_valid(r#"(str "(" "]")"#));
        assert!(checker.is_valid(r#"(str "say \"hi\"")"#));
        assert_eq!(
            checker.check(r#"(str "abc)"#),
            Err(SyntaxError::UnterminatedString)
        );
    }

    #[test]
    fn test_comments_and_char_literals() {
        let checker = BalancedForms::new();
        assert!(checker.is_valid("(+ 1 2) ; trailing ("));
        assert!(checker.is_valid("(do ; open (\n  1)"));
        assert!(checker.is_valid(r"(= \( \))"));
    }

    #[test]
    fn test_closure_checker() {
        let never = |_: &str| false;
        assert!(!never.is_valid("(+ 1 2)"));
        assert_eq!(never.check("x"), Err(SyntaxError::Rejected));

        let dotted = |s: &str| s.ends_with('.');
        assert_eq!(dotted.check("(+ 1 2)."), Ok(()));
        assert_eq!(dotted.check("(+ 1 2"), Err(SyntaxError::Rejected));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            SyntaxError::Unclosed { expected: ')' }.to_string(),
            "EOF while reading, expected ')'"
        );
        assert_eq!(SyntaxError::Rejected.to_string(), "Rejected by syntax check");
    }
}
