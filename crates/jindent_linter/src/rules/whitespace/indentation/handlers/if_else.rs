//! `if` statements and their `else` branches.

use jindent_java_ast::{AstNode, TokenType};

use super::super::indent_level::IndentLevel;
use super::block_parent::BlockParent;
use super::frame::{are_on_same_line, inside_parens};
use super::{Candidate, CheckResult, Frame, HandlerKind, IndentHandler};

/// True for a statement written right after `else` on the same line, as in
/// `else if (..)`.
pub(super) fn follows_else_on_line(node: AstNode<'_>) -> bool {
    node.parent().is_some_and(|parent| {
        parent.kind() == TokenType::LiteralElse && are_on_same_line(parent, node)
    })
}

pub(crate) struct If;

impl BlockParent for If {
    fn toplevel<'a>(&self, frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        let node = frame.node();
        (!follows_else_on_line(node)).then_some(node)
    }

    fn body<'a>(&self, frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        frame.node().child_by_field_name("consequence")
    }
}

impl IndentHandler for If {
    fn level<'a>(&self, parent: &Frame<'_, 'a>, candidate: Candidate<'a>) -> IndentLevel {
        if follows_else_on_line(candidate.node) {
            parent.level().clone()
        } else {
            parent.suggested_child_level(candidate)
        }
    }

    /// The `else` branch lines up with its `if`.
    fn suggested_child_level<'a>(&self, frame: &Frame<'_, 'a>, child: Candidate<'a>) -> IndentLevel {
        if child.kind == HandlerKind::Else {
            frame.level().clone()
        } else {
            self.children_expected_level(frame)
        }
    }

    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        let condition = frame.require(frame.node().child_by_field_name("condition"), "condition")?;
        frame.check_expression_nodes(
            inside_parens(condition),
            &frame.offset_level(),
            false,
            false,
        );
        self.check_block(frame)?;
        frame.check_wrapping(frame.node(), [condition]);
        Ok(())
    }
}

/// The `else` keyword, owning the alternative branch.
pub(crate) struct Else;

impl BlockParent for Else {
    /// `} else {` leaves the keyword mid-line; nothing to check then.
    fn toplevel<'a>(&self, frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        let node = frame.node();
        let closes_same_line = node
            .previous_sibling()
            .and_then(|consequence| consequence.last_child())
            .is_some_and(|rcurly| {
                rcurly.kind() == TokenType::RCurly && are_on_same_line(rcurly, node)
            });
        (!closes_same_line).then_some(node)
    }

    fn body<'a>(&self, frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        frame.node().first_child()
    }

    fn parens<'a>(&self, _frame: &Frame<'_, 'a>) -> (Option<AstNode<'a>>, Option<AstNode<'a>>) {
        (None, None)
    }
}

impl IndentHandler for Else {
    fn suggested_child_level<'a>(&self, frame: &Frame<'_, 'a>, _child: Candidate<'a>) -> IndentLevel {
        self.children_expected_level(frame)
    }

    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        self.check_block(frame)
    }
}
