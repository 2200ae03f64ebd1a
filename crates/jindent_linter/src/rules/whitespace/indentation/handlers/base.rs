//! Violations and the per-file state shared by every handler.

use std::cell::RefCell;
use std::collections::BTreeSet;

use jindent_diagnostics::{Diagnostic, Location, Violation};
use jindent_java_ast::AstNode;
use jindent_source_file::{SourceCode, expanded_column, indentation_width, is_blank};

use super::super::Indentation;
use super::super::indent_level::IndentLevel;

/// A construct that starts at the wrong column.
#[derive(Debug, Clone)]
pub struct IndentationError {
    /// Handler name, optionally followed by the part that is misplaced,
    /// e.g. `method def modifier`.
    pub element: String,
    pub actual: i32,
    pub expected: IndentLevel,
}

impl Violation for IndentationError {
    fn key(&self) -> &'static str {
        if self.expected.is_multi_level() {
            "indentation.error.multi"
        } else {
            "indentation.error"
        }
    }

    fn message(&self) -> String {
        format!(
            "'{}' has incorrect indentation level {}, {}",
            self.element,
            self.actual,
            expectation(&self.expected)
        )
    }
}

/// A line inside a construct that starts at the wrong column.
#[derive(Debug, Clone)]
pub struct IndentationChildError {
    pub parent: String,
    pub actual: i32,
    pub expected: IndentLevel,
}

impl Violation for IndentationChildError {
    fn key(&self) -> &'static str {
        if self.expected.is_multi_level() {
            "indentation.child.error.multi"
        } else {
            "indentation.child.error"
        }
    }

    fn message(&self) -> String {
        format!(
            "'{}' child has incorrect indentation level {}, {}",
            self.parent,
            self.actual,
            expectation(&self.expected)
        )
    }
}

fn expectation(expected: &IndentLevel) -> String {
    if expected.is_multi_level() {
        format!("expected level should be one of the following: {expected}")
    } else {
        format!("expected level should be {expected}")
    }
}

/// Source lookups, configuration and collected diagnostics for one file.
///
/// Only the first violation reported on a line is kept.
pub struct HandlerContext<'a> {
    source: SourceCode<'a, 'a>,
    config: &'a Indentation,
    diagnostics: RefCell<Vec<Diagnostic>>,
    reported_lines: RefCell<BTreeSet<usize>>,
}

impl<'a> HandlerContext<'a> {
    pub fn new(source: SourceCode<'a, 'a>, config: &'a Indentation) -> Self {
        Self {
            source,
            config,
            diagnostics: RefCell::new(Vec::new()),
            reported_lines: RefCell::new(BTreeSet::new()),
        }
    }

    pub fn basic_offset(&self) -> i32 {
        self.config.basic_offset
    }

    pub fn brace_adjustment(&self) -> i32 {
        self.config.brace_adjustment
    }

    pub fn case_indent(&self) -> i32 {
        self.config.case_indent
    }

    pub fn throws_indent(&self) -> i32 {
        self.config.throws_indent
    }

    pub fn array_init_indent(&self) -> i32 {
        self.config.array_init_indent
    }

    pub fn line_wrapping_indentation(&self) -> i32 {
        self.config.line_wrapping_indentation
    }

    /// Whether a wrapped line starting at `actual` meets `expected`: exactly
    /// under `forceStrictCondition`, otherwise at or right of it.
    pub fn is_wrap_acceptable(&self, actual: i32, expected: &IndentLevel) -> bool {
        expected.is_acceptable_with_force_strict(actual, self.config.force_strict_condition)
    }

    fn line_text(&self, line: usize) -> &'a str {
        self.source.line_text(line).unwrap_or_default()
    }

    /// Source text of a token. A token spanning lines yields the part on
    /// its first line.
    pub fn token_text(&self, token: AstNode<'_>) -> &'a str {
        let text = self.line_text(token.line_no());
        let end = if token.end_line_no() == token.line_no() {
            token.end_column_no()
        } else {
            text.len()
        };
        text.get(token.column_no()..end).unwrap_or_default()
    }

    /// Column of the first non-blank character of a 1-based line.
    pub fn line_start(&self, line: usize) -> i32 {
        to_column(indentation_width(self.line_text(line), self.config.tab_width))
    }

    pub fn is_blank_line(&self, line: usize) -> bool {
        is_blank(self.line_text(line))
    }

    /// Tab-expanded column where `node` starts.
    pub fn column_of(&self, node: AstNode<'_>) -> i32 {
        to_column(expanded_column(
            self.line_text(node.line_no()),
            node.column_no(),
            self.config.tab_width,
        ))
    }

    /// True when nothing but whitespace precedes `node` on its line.
    pub fn starts_line(&self, node: AstNode<'_>) -> bool {
        self.line_start(node.line_no()) == self.column_of(node)
    }

    /// Column of the first non-blank character after `column` on `line`,
    /// if the line has one.
    pub fn next_non_blank_after(&self, line: usize, column: i32) -> Option<i32> {
        let text = self.line_text(line);
        let tab_width = self.config.tab_width;
        text.char_indices()
            .filter(|(_, ch)| !ch.is_whitespace())
            .map(|(offset, _)| to_column(expanded_column(text, offset, tab_width)))
            .find(|&col| col > column)
    }

    pub fn log_error(&self, node: AstNode<'_>, element: String, actual: i32, expected: &IndentLevel) {
        let line = node.line_no();
        let column = self.column_of(node);
        self.report(
            line,
            column,
            IndentationError {
                element,
                actual,
                expected: expected.clone(),
            },
        );
    }

    pub fn log_child_error(&self, line: usize, parent: &str, actual: i32, expected: &IndentLevel) {
        self.report(
            line,
            actual,
            IndentationChildError {
                parent: parent.to_string(),
                actual,
                expected: expected.clone(),
            },
        );
    }

    fn report<V: Violation>(&self, line: usize, column: i32, violation: V) {
        if !self.reported_lines.borrow_mut().insert(line) {
            return;
        }
        let column = usize::try_from(column).unwrap_or_default() + 1;
        self.diagnostics
            .borrow_mut()
            .push(Diagnostic::new(violation, Location::new(line, column)));
    }

    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

fn to_column(width: usize) -> i32 {
    i32::try_from(width).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jindent_java_ast::{Ast, TokenType};
    use jindent_source_file::LineIndex;

    fn with_context(source: &str, tab_width: usize, f: impl FnOnce(&HandlerContext, &Ast)) {
        let index = LineIndex::from_source_text(source);
        let config = Indentation {
            tab_width,
            ..Indentation::default()
        };
        let ctx = HandlerContext::new(SourceCode::new(source, &index), &config);
        let ast = Ast::parse(source).unwrap();
        f(&ctx, &ast);
    }

    #[test]
    fn test_columns_expand_tabs() {
        with_context("class A {\n\tint x;\n}\n", 4, |ctx, ast| {
            let field = ast.preorder().find(|n| n.kind() == TokenType::FieldDef).unwrap();
            assert_eq!(ctx.line_start(2), 4);
            assert_eq!(ctx.column_of(field), 4);
            assert!(ctx.starts_line(field));
        });
    }

    #[test]
    fn test_crlf_lines() {
        with_context("class A {\r\n    int x;\r\n}\r\n", 8, |ctx, ast| {
            let field = ast.preorder().find(|n| n.kind() == TokenType::FieldDef).unwrap();
            assert_eq!(ctx.line_start(2), 4);
            assert!(ctx.starts_line(field));
            assert!(!ctx.is_blank_line(2));
        });
    }

    #[test]
    fn test_next_non_blank_after() {
        with_context("int[] a = {1,\n    2};\n", 8, |ctx, _| {
            assert_eq!(ctx.next_non_blank_after(1, 10), Some(11));
            assert_eq!(ctx.next_non_blank_after(1, 12), None);
        });
    }

    #[test]
    fn test_token_text() {
        with_context("class A {\n    int count = 1;\n}\n", 8, |ctx, ast| {
            let field = ast.preorder().find(|n| n.kind() == TokenType::FieldDef).unwrap();
            assert_eq!(ctx.token_text(field.first_token()), "int");
            let name = ast
                .preorder()
                .find(|n| n.kind() == TokenType::VariableDeclarator)
                .and_then(|d| d.child_by_field_name("name"))
                .unwrap();
            assert_eq!(ctx.token_text(name), "count");
        });
    }

    #[test]
    fn test_wrap_acceptance_follows_force_strict() {
        let index = LineIndex::from_source_text("");
        let lenient = Indentation::default();
        let strict = Indentation {
            force_strict_condition: true,
            ..Indentation::default()
        };
        let expected = IndentLevel::new(8);

        let ctx = HandlerContext::new(SourceCode::new("", &index), &lenient);
        assert!(ctx.is_wrap_acceptable(12, &expected));
        assert!(!ctx.is_wrap_acceptable(4, &expected));

        let ctx = HandlerContext::new(SourceCode::new("", &index), &strict);
        assert!(ctx.is_wrap_acceptable(8, &expected));
        assert!(!ctx.is_wrap_acceptable(12, &expected));
    }

    #[test]
    fn test_one_report_per_line() {
        with_context("class A {}\n", 8, |ctx, _| {
            ctx.log_child_error(1, "block", 2, &IndentLevel::new(4));
            ctx.log_child_error(1, "block", 3, &IndentLevel::new(4));
            ctx.log_child_error(2, "block", 2, &IndentLevel::new(4).add_acceptable(&[8]));
            let diagnostics = ctx.take_diagnostics();
            assert_eq!(diagnostics.len(), 2);
            assert_eq!(diagnostics[0].location, Location::new(1, 3));
            assert_eq!(diagnostics[0].kind.key, "indentation.child.error");
            assert_eq!(
                diagnostics[1].kind.body,
                "'block' child has incorrect indentation level 2, \
                 expected level should be one of the following: [4, 8]"
            );
            assert_eq!(diagnostics[1].kind.key, "indentation.child.error.multi");
        });
    }

    #[test]
    fn test_error_message() {
        let error = IndentationError {
            element: "method def modifier".to_string(),
            actual: 2,
            expected: IndentLevel::new(4),
        };
        assert_eq!(error.key(), "indentation.error");
        assert_eq!(
            error.message(),
            "'method def modifier' has incorrect indentation level 2, expected level should be 4"
        );
    }
}
