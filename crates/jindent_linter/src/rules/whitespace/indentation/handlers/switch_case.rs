//! `switch` statements and expressions, and their case groups.

use jindent_java_ast::{AstNode, TokenType};

use super::super::indent_level::IndentLevel;
use super::block_parent::BlockParent;
use super::frame::inside_parens;
use super::{Candidate, CheckResult, Frame, HandlerKind, IndentHandler};

/// `switch` statements and switch expressions.
pub(crate) struct Switch;

impl BlockParent for Switch {
    fn list_child<'a>(&self, _frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        None
    }

    fn nonlist_child<'a>(&self, _frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        None
    }

    fn lcurly<'a>(&self, frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        self.body(frame)
            .and_then(|block| block.first_child())
            .filter(|c| c.kind() == TokenType::LCurly)
    }

    fn rcurly<'a>(&self, frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        self.body(frame)
            .and_then(|block| block.last_child())
            .filter(|c| c.kind() == TokenType::RCurly)
    }
}

impl IndentHandler for Switch {
    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        let condition = frame.require(frame.node().child_by_field_name("condition"), "condition")?;
        frame.check_expression_nodes(inside_parens(condition), frame.level(), false, false);
        self.check_block(frame)
    }
}

/// One `case`/`default` group or arrow rule.
///
/// Labels sit `caseIndent` right of the switch. Statements on their own
/// lines sit one offset right of the first label.
pub(crate) struct Case;

impl Case {
    fn labels<'a>(node: AstNode<'a>) -> impl Iterator<Item = AstNode<'a>> + 'a {
        node.children().filter(|c| c.kind() == TokenType::SwitchLabel)
    }

    fn children_level(frame: &Frame<'_, '_>) -> IndentLevel {
        let basic_offset = frame.ctx().basic_offset();
        match Self::labels(frame.node()).next() {
            Some(label) if frame.starts_line(label) => {
                IndentLevel::new(frame.column_of(label) + basic_offset)
            }
            _ => frame.offset_level(),
        }
    }
}

impl IndentHandler for Case {
    fn level<'a>(&self, parent: &Frame<'_, 'a>, _candidate: Candidate<'a>) -> IndentLevel {
        parent.level().with_offset(parent.ctx().case_indent())
    }

    /// A braced case body lines up with its label.
    fn suggested_child_level<'a>(&self, frame: &Frame<'_, 'a>, child: Candidate<'a>) -> IndentLevel {
        if child.kind == HandlerKind::Slist {
            frame.level().clone()
        } else {
            Self::children_level(frame)
        }
    }

    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        let node = frame.node();
        frame.require(Self::labels(node).next(), "label")?;
        let mut label_lines = Vec::new();
        for label in Self::labels(node) {
            frame.check_expression_subtree(label, frame.level(), true, false);
            label_lines.push(label.line_no());
        }

        let children_level = Self::children_level(frame);
        for statement in node.children().filter(|c| {
            !matches!(
                c.kind(),
                TokenType::SwitchLabel
                    | TokenType::Colon
                    | TokenType::Arrow
                    | TokenType::Slist
            ) && !label_lines.contains(&c.line_no())
        }) {
            frame.check_expression_subtree(statement, &children_level, true, false);
        }
        Ok(())
    }
}
