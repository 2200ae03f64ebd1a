//! Shared checks for constructs built around a braced block.

use jindent_java_ast::{AstNode, TokenType};

use super::super::indent_level::IndentLevel;
use super::frame::{Frame, are_on_same_line, parens};
use super::CheckResult;

/// A construct with a keyword, optional parens and a body that is either a
/// braced statement list or a single statement.
///
/// The hooks locate each part; [`BlockParent::check_block`] runs the checks
/// in order: keyword, parens, curlies, then the body.
pub(crate) trait BlockParent {
    /// Token whose column must match the handler's level when it begins
    /// its line.
    fn toplevel<'a>(&self, frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        Some(frame.node())
    }

    fn body<'a>(&self, frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        let node = frame.node();
        node.child_by_field_name("body")
            .or_else(|| node.find_first_token(TokenType::Slist))
    }

    fn list_child<'a>(&self, frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        self.body(frame).filter(|body| body.kind() == TokenType::Slist)
    }

    fn nonlist_child<'a>(&self, frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        self.body(frame).filter(|body| body.kind() != TokenType::Slist)
    }

    fn lcurly<'a>(&self, frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        self.list_child(frame)
            .and_then(|list| list.first_child())
            .filter(|c| c.kind() == TokenType::LCurly)
    }

    fn rcurly<'a>(&self, frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        self.list_child(frame)
            .and_then(|list| list.last_child())
            .filter(|c| c.kind() == TokenType::RCurly)
    }

    /// The parens around the construct's condition or header.
    fn parens<'a>(&self, frame: &Frame<'_, 'a>) -> (Option<AstNode<'a>>, Option<AstNode<'a>>) {
        let node = frame.node();
        match node
            .child_by_field_name("condition")
            .or_else(|| node.find_first_token(TokenType::ParenExpr))
        {
            Some(condition) if condition.kind() == TokenType::ParenExpr => parens(condition),
            _ => parens(node),
        }
    }

    /// Whether the closing brace is held to the curly level.
    fn checks_rcurly(&self, _frame: &Frame<'_, '_>) -> bool {
        true
    }

    fn children_may_nest(&self) -> bool {
        false
    }

    /// Children of the statement list whose first line is checked here.
    fn is_checked_child(&self, node: AstNode<'_>) -> bool {
        node.kind().is_block_statement()
    }

    /// Level of the curlies: the handler's level, plus the brace adjustment
    /// when `{` begins its line.
    fn curly_level(&self, frame: &Frame<'_, '_>) -> IndentLevel {
        match self.lcurly(frame) {
            Some(lcurly) if frame.starts_line(lcurly) && !is_instance_initializer(lcurly) => {
                frame.level().with_offset(frame.ctx().brace_adjustment())
            }
            _ => frame.level().clone(),
        }
    }

    /// Level expected from the statements of the body.
    ///
    /// A multi-valued own level is narrowed using the column of whichever
    /// curly begins its line.
    fn children_expected_level(&self, frame: &Frame<'_, '_>) -> IndentLevel {
        let basic_offset = frame.ctx().basic_offset();
        let mut level = frame.offset_level();
        let (Some(lcurly), Some(rcurly)) = (self.lcurly(frame), self.rcurly(frame)) else {
            return level;
        };
        let lcurly_starts_line = frame.starts_line(lcurly);
        if frame.level().is_multi_level() {
            if lcurly_starts_line {
                level = IndentLevel::new(frame.column_of(lcurly) + basic_offset);
            } else if frame.starts_line(rcurly) {
                level = self.curly_level(frame).with_offset(basic_offset);
                let wrapped = level.first_level() + frame.ctx().line_wrapping_indentation();
                level = level.add_acceptable(&[wrapped]);
            }
        }
        if lcurly_starts_line {
            level = level.add_acceptable(&[self.curly_level(frame).first_level() + basic_offset]);
        }
        level
    }

    fn check_block(&self, frame: &Frame<'_, '_>) -> CheckResult {
        if let Some(toplevel) = self.toplevel(frame)
            && !has_label_before(toplevel)
        {
            frame.check_token(toplevel, "", frame.level(), false);
        }

        let (lparen, rparen) = self.parens(frame);
        frame.check_lparen(lparen);
        frame.check_rparen(lparen, rparen);

        let curlies = self.lcurly(frame).zip(self.rcurly(frame));
        if let Some((lcurly, rcurly)) = curlies {
            let curly_level = self.curly_level(frame);
            frame.check_token(lcurly, "lcurly", &curly_level, false);
            if self.checks_rcurly(frame) {
                frame.check_token(rcurly, "rcurly", &curly_level, false);
            }
        }

        match self.list_child(frame) {
            None => {
                if let Some(nonlist) = self.nonlist_child(frame) {
                    frame.check_expression_subtree(nonlist, &frame.offset_level(), false, false);
                }
            }
            Some(list) => {
                if curlies.is_none_or(|(lcurly, rcurly)| !are_on_same_line(lcurly, rcurly)) {
                    frame.check_children(
                        list,
                        |child| self.is_checked_child(child),
                        &self.children_expected_level(frame),
                        true,
                        self.children_may_nest(),
                    );
                }
            }
        }
        Ok(())
    }
}

/// `label: while (..)` leaves the loop keyword mid-line.
fn has_label_before(node: AstNode<'_>) -> bool {
    node.parent().is_some_and(|parent| {
        parent.kind() == TokenType::LabeledStat && are_on_same_line(parent, node)
    })
}

fn is_instance_initializer(lcurly: AstNode<'_>) -> bool {
    lcurly
        .parent()
        .and_then(|block| block.parent())
        .is_some_and(|parent| parent.kind() == TokenType::ObjBlock)
}
