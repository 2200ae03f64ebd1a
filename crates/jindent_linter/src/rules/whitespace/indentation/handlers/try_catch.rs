//! `try` statements with their `catch` and `finally` clauses.

use jindent_java_ast::{AstNode, TokenType};

use super::super::indent_level::IndentLevel;
use super::block_parent::BlockParent;
use super::frame::{inside_parens, parens};
use super::{Candidate, CheckResult, Frame, HandlerKind, IndentHandler};

pub(crate) struct Try;

impl BlockParent for Try {
    fn parens<'a>(&self, _frame: &Frame<'_, 'a>) -> (Option<AstNode<'a>>, Option<AstNode<'a>>) {
        (None, None)
    }
}

impl IndentHandler for Try {
    /// `catch` and `finally` line up with the `try`.
    fn suggested_child_level<'a>(&self, frame: &Frame<'_, 'a>, child: Candidate<'a>) -> IndentLevel {
        match child.kind {
            HandlerKind::Catch | HandlerKind::Finally => frame.level().clone(),
            _ => self.children_expected_level(frame),
        }
    }

    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        if let Some(resources) = frame.node().find_first_token(TokenType::Resources) {
            let (lparen, rparen) = parens(resources);
            frame.check_lparen(lparen);
            frame.check_rparen(lparen, rparen);
            frame.check_expression_nodes(
                inside_parens(resources).filter(|part| part.kind() != TokenType::Semi),
                &frame.offset_level(),
                false,
                false,
            );
        }
        self.check_block(frame)
    }
}

/// `catch (..) { .. }`, usually sharing a line with the preceding `}`.
pub(crate) struct Catch;

impl BlockParent for Catch {
    fn parens<'a>(&self, frame: &Frame<'_, 'a>) -> (Option<AstNode<'a>>, Option<AstNode<'a>>) {
        parens(frame.node())
    }
}

impl IndentHandler for Catch {
    fn suggested_child_level<'a>(&self, frame: &Frame<'_, 'a>, _child: Candidate<'a>) -> IndentLevel {
        self.children_expected_level(frame)
    }

    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        let parameter = frame.require(
            frame.node().find_first_token(TokenType::CatchParameter),
            "parameter",
        )?;
        frame.check_expression_subtree(parameter, &frame.offset_level(), false, false);
        self.check_block(frame)
    }
}

pub(crate) struct Finally;

impl BlockParent for Finally {
    fn parens<'a>(&self, _frame: &Frame<'_, 'a>) -> (Option<AstNode<'a>>, Option<AstNode<'a>>) {
        (None, None)
    }
}

impl IndentHandler for Finally {
    fn suggested_child_level<'a>(&self, frame: &Frame<'_, 'a>, _child: Candidate<'a>) -> IndentLevel {
        self.children_expected_level(frame)
    }

    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        self.check_block(frame)
    }
}
