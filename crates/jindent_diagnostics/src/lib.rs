//! Diagnostic types shared by the linter and the CLI.

pub use diagnostic::{Diagnostic, DiagnosticKind, Location, Violation};

mod diagnostic;
