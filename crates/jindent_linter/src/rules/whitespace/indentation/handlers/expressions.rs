//! Assignments and array initializers.

use jindent_java_ast::{AstNode, TokenType};

use super::super::indent_level::IndentLevel;
use super::block_parent::BlockParent;
use super::{Candidate, CheckResult, Frame, HandlerKind, IndentHandler};

fn assign_operator(node: AstNode<'_>) -> Option<AstNode<'_>> {
    node.find_first_token(TokenType::AssignOperator)
}

/// `x = ..` expressions and initialized variable declarators. The right-hand
/// side hugs the assignment: wrapped lines stay at its level.
pub(crate) struct Assign;

impl IndentHandler for Assign {
    fn suggested_child_level<'a>(&self, frame: &Frame<'_, 'a>, _child: Candidate<'a>) -> IndentLevel {
        frame.level().clone()
    }

    fn should_increase_indent(&self) -> bool {
        false
    }

    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        let node = frame.node();
        let operator = frame.require(assign_operator(node), "operator")?;
        let wrapped = frame.offset_level();
        let column = frame.column_of(operator);
        if frame.starts_line(operator) && wrapped.is_greater_than(column) {
            frame.log_error_expected(operator, "", column, &wrapped);
        }

        let value = frame.require(
            node.child_by_field_name("right")
                .or_else(|| node.child_by_field_name("value")),
            "value",
        )?;
        frame.check_expression_subtree(value, frame.level(), false, false);
        Ok(())
    }
}

/// `{ a, b, c }` in declarations, `new T[] {..}` and annotations.
pub(crate) struct ArrayInit;

impl BlockParent for ArrayInit {
    fn toplevel<'a>(&self, _frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        None
    }

    fn body<'a>(&self, frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        Some(frame.node())
    }

    fn list_child<'a>(&self, frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        Some(frame.node())
    }

    fn nonlist_child<'a>(&self, _frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        None
    }

    fn parens<'a>(&self, _frame: &Frame<'_, 'a>) -> (Option<AstNode<'a>>, Option<AstNode<'a>>) {
        (None, None)
    }

    fn children_may_nest(&self) -> bool {
        true
    }

    fn is_checked_child(&self, node: AstNode<'_>) -> bool {
        !matches!(
            node.kind(),
            TokenType::LCurly | TokenType::RCurly | TokenType::Comma
        )
    }

    /// `arrayInitIndent` past the initializer's level, or aligned with the
    /// first element when it follows `{` on the same line.
    fn children_expected_level(&self, frame: &Frame<'_, '_>) -> IndentLevel {
        let level = frame.level().with_offset(frame.ctx().array_init_indent());
        let aligned = self.lcurly(frame).and_then(|lcurly| {
            frame
                .ctx()
                .next_non_blank_after(lcurly.line_no(), frame.column_of(lcurly))
        });
        match aligned {
            Some(column) => level.add_acceptable(&[column]),
            None => level,
        }
    }
}

impl IndentHandler for ArrayInit {
    fn level<'a>(&self, parent: &Frame<'_, 'a>, candidate: Candidate<'a>) -> IndentLevel {
        let owner = candidate.node.parent();
        match owner.map(|owner| owner.kind()) {
            Some(TokenType::VariableDeclarator | TokenType::Assign) => {
                let anchor = owner.and_then(assign_operator).or(owner);
                let line = anchor.map_or(candidate.node.line_no(), |anchor| anchor.line_no());
                IndentLevel::new(parent.ctx().line_start(line))
            }
            Some(TokenType::ArrayCreation | TokenType::LiteralNew) => {
                let line = owner.map_or(candidate.node.line_no(), |owner| owner.line_no());
                IndentLevel::new(parent.ctx().line_start(line))
            }
            _ if parent.kind() == HandlerKind::ArrayInit => parent.suggested_child_level(candidate),
            _ => parent.level().clone(),
        }
    }

    fn suggested_child_level<'a>(&self, frame: &Frame<'_, 'a>, _child: Candidate<'a>) -> IndentLevel {
        self.children_expected_level(frame)
    }

    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        self.check_block(frame)
    }
}
