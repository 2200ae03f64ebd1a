//! `for`, `while` and `do .. while` loops.

use jindent_java_ast::{AstNode, TokenType};

use super::super::indent_level::IndentLevel;
use super::block_parent::BlockParent;
use super::frame::{inside_parens, parens};
use super::if_else::follows_else_on_line;
use super::{Candidate, CheckResult, Frame, IndentHandler};

/// Classic and enhanced `for` loops.
pub(crate) struct For;

impl BlockParent for For {
    fn toplevel<'a>(&self, frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        let node = frame.node();
        (!follows_else_on_line(node)).then_some(node)
    }

    fn parens<'a>(&self, frame: &Frame<'_, 'a>) -> (Option<AstNode<'a>>, Option<AstNode<'a>>) {
        parens(frame.node())
    }
}

impl IndentHandler for For {
    /// `else for (..)` lines up with the `else`.
    fn level<'a>(&self, parent: &Frame<'_, 'a>, candidate: Candidate<'a>) -> IndentLevel {
        if follows_else_on_line(candidate.node) {
            parent.level().clone()
        } else {
            parent.suggested_child_level(candidate)
        }
    }

    fn suggested_child_level<'a>(&self, frame: &Frame<'_, 'a>, _child: Candidate<'a>) -> IndentLevel {
        self.children_expected_level(frame)
    }

    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        let (lparen, rparen) = self.parens(frame);
        let lparen = frame.require(lparen, "lparen")?;
        let rparen = frame.require(rparen, "rparen")?;

        let clause_level = frame.offset_level();
        let mut part = lparen.next_sibling();
        while let Some(clause) = part.filter(|node| *node != rparen) {
            if clause.kind() != TokenType::Semi {
                frame.check_expression_subtree(clause, &clause_level, false, false);
            }
            part = clause.next_sibling();
        }
        self.check_block(frame)?;

        let node = frame.node();
        frame.check_wrapping(node, node.children().take_while(|c| c.id() <= rparen.id()));
        Ok(())
    }
}

pub(crate) struct While;

impl BlockParent for While {}

impl IndentHandler for While {
    fn suggested_child_level<'a>(&self, frame: &Frame<'_, 'a>, _child: Candidate<'a>) -> IndentLevel {
        self.children_expected_level(frame)
    }

    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        check_condition(frame)?;
        self.check_block(frame)
    }
}

pub(crate) struct DoWhile;

impl BlockParent for DoWhile {}

impl IndentHandler for DoWhile {
    fn suggested_child_level<'a>(&self, frame: &Frame<'_, 'a>, _child: Candidate<'a>) -> IndentLevel {
        self.children_expected_level(frame)
    }

    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        let node = frame.node();
        let keyword = frame.require(node.children().find(|c| c.is_token("while")), "while")?;
        frame.check_token(keyword, "while", frame.level(), false);
        check_condition(frame)?;
        self.check_block(frame)
    }
}

/// The parenthesized condition's contents sit one offset deeper.
fn check_condition(frame: &Frame<'_, '_>) -> CheckResult {
    let condition = frame.require(frame.node().child_by_field_name("condition"), "condition")?;
    frame.check_expression_nodes(
        inside_parens(condition),
        &frame.offset_level(),
        false,
        false,
    );
    Ok(())
}
