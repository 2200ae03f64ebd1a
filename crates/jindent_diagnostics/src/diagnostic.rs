//! Diagnostic types for reporting violations.

use std::fmt;

/// A trait for violations that can be reported as diagnostics.
pub trait Violation: fmt::Debug + Clone + Send + Sync {
    /// Message key identifying the kind of message, e.g. `indentation.error`.
    fn key(&self) -> &'static str;

    /// Returns the message describing the violation.
    fn message(&self) -> String;
}

/// The kind of diagnostic (violation code, message key and message).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticKind {
    /// The violation type name, e.g. `IndentationChildError`.
    pub code: String,
    /// The message key.
    pub key: &'static str,
    /// The message body.
    pub body: String,
}

/// A position in the source. Both fields are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A diagnostic representing a violation found in source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The kind of diagnostic.
    pub kind: DiagnosticKind,
    /// Where the violation occurs.
    pub location: Location,
}

impl Diagnostic {
    /// Create a new diagnostic from a violation.
    #[allow(clippy::needless_pass_by_value)]
    pub fn new<V: Violation>(violation: V, location: Location) -> Self {
        Self {
            kind: DiagnosticKind {
                code: std::any::type_name::<V>()
                    .split("::")
                    .last()
                    .unwrap_or("Unknown")
                    .to_string(),
                key: violation.key(),
                body: violation.message(),
            },
            location,
        }
    }

    /// The 1-based line of the violation.
    pub fn line(&self) -> usize {
        self.location.line
    }
}
