//! Java indentation linter driven by checkstyle configuration.

pub mod registry;
pub mod rules;

pub use registry::{FromConfig, Properties, RuleRegistry};

use jindent_diagnostics::Diagnostic;
use jindent_java_ast::{Ast, AstNode};
use jindent_source_file::{LineIndex, SourceCode};

/// Context provided to rules during checking.
pub struct CheckContext<'a> {
    source: &'a str,
    line_index: LineIndex,
}

impl<'a> CheckContext<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            line_index: LineIndex::from_source_text(source),
        }
    }

    /// Get the source code helper for line lookups.
    pub fn source_code(&self) -> SourceCode<'a, '_> {
        SourceCode::new(self.source, &self.line_index)
    }
}

/// Trait for lint rules.
pub trait Rule: Send + Sync {
    /// Checkstyle module name of the rule.
    fn name(&self) -> &'static str;

    /// Check a node and return any violations.
    fn check(&self, ctx: &CheckContext, node: &AstNode) -> Vec<Diagnostic>;
}

/// Result of linting a file.
#[derive(Debug, Default)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// Orders diagnostics by position.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by_key(|d| d.location);
    }
}

/// Runs `rules` over every node of `source`.
///
/// Returns `None` when the source could not be parsed at all. Sources with
/// syntax errors still produce a tree and are checked best-effort.
pub fn lint_source(source: &str, rules: &[Box<dyn Rule>]) -> Option<LintResult> {
    let ast = Ast::parse(source)?;
    let ctx = CheckContext::new(source);

    let mut result = LintResult::new();
    for node in ast.preorder() {
        for rule in rules {
            result.extend(rule.check(&ctx, &node));
        }
    }
    result.sort();
    Some(result)
}
