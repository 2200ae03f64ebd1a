//! Method calls, constructor calls and `new` expressions.

use jindent_java_ast::{AstNode, TokenType};

use super::super::indent_level::IndentLevel;
use super::super::line_set::LineSet;
use super::frame::{are_on_same_line, inside_parens, parens};
use super::{Candidate, CheckResult, Frame, HandlerKind, IndentHandler};

/// The expression a call is invoked on, looking through field accesses:
/// `a.b().c.d()` yields the `a.b()` call for the outer call.
pub(crate) fn chained_object(call: AstNode<'_>) -> Option<AstNode<'_>> {
    let mut object = call.child_by_field_name("object")?;
    while object.kind() == TokenType::FieldAccess {
        object = object.child_by_field_name("object")?;
    }
    Some(object)
}

fn is_call(node: AstNode<'_>) -> bool {
    matches!(node.kind(), TokenType::MethodCall | TokenType::CtorCall)
}

/// Everything before the argument list: receiver, dot and name.
fn name_part<'a>(call: AstNode<'a>) -> impl Iterator<Item = AstNode<'a>> + 'a {
    call.children()
        .take_while(|c| c.kind() != TokenType::ArgumentList)
}

/// Checks an argument list: its parens at the handler's level and, when the
/// list spans lines, the arguments one offset deeper.
fn check_arguments(frame: &Frame<'_, '_>, arguments: AstNode<'_>) {
    let (lparen, rparen) = parens(arguments);
    frame.check_lparen(lparen);
    if let (Some(lparen), Some(rparen)) = (lparen, rparen)
        && are_on_same_line(lparen, rparen)
    {
        return;
    }
    frame.check_expression_nodes(inside_parens(arguments), &frame.offset_level(), false, true);
    frame.check_rparen(lparen, rparen);
}

pub(crate) struct MethodCall;

impl MethodCall {
    /// `a.b().c().d()`: the call's receiver is a call on yet another call.
    fn chained_twice(call: AstNode<'_>) -> bool {
        chained_object(call)
            .filter(|object| is_call(*object))
            .and_then(chained_object)
            .is_some_and(is_call)
    }

    fn lparen_line(call: AstNode<'_>) -> Option<usize> {
        call.child_by_field_name("arguments")
            .map(|arguments| arguments.line_no())
    }
}

impl IndentHandler for MethodCall {
    fn level<'a>(&self, parent: &Frame<'_, 'a>, candidate: Candidate<'a>) -> IndentLevel {
        let call = candidate.node;
        if parent.kind() == HandlerKind::MethodCall {
            let same_line = Self::lparen_line(parent.node()) == Self::lparen_line(call);
            return if same_line || Self::chained_twice(call) {
                parent.level().clone()
            } else {
                parent.offset_level()
            };
        }

        let mut lines = LineSet::new();
        for part in name_part(call) {
            parent.find_subtree_lines(&mut lines, part);
        }
        let line_start = parent.ctx().line_start(call.line_no());
        match lines.first_line_col() {
            Some(column) if column != line_start => IndentLevel::new(line_start),
            _ => parent.suggested_child_level(candidate),
        }
    }

    /// Lambda bodies and anonymous classes in the arguments start from the
    /// line they appear on.
    fn suggested_child_level<'a>(&self, frame: &Frame<'_, 'a>, child: Candidate<'a>) -> IndentLevel {
        IndentLevel::new(frame.ctx().line_start(child.node.line_no()))
    }

    fn should_increase_indent(&self) -> bool {
        false
    }

    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        let node = frame.node();
        let arguments = frame.require(node.child_by_field_name("arguments"), "arguments")?;
        frame.check_expression_nodes(name_part(node), frame.level(), false, false);
        check_arguments(frame, arguments);
        Ok(())
    }
}

/// Object and array creation.
pub(crate) struct New;

impl IndentHandler for New {
    /// A `new` that does not begin its line takes the line's indentation.
    fn level<'a>(&self, parent: &Frame<'_, 'a>, candidate: Candidate<'a>) -> IndentLevel {
        let node = candidate.node;
        let keyword = node.children().find(|c| c.is_token("new")).unwrap_or(node);
        if parent.starts_line(keyword) {
            parent.suggested_child_level(candidate)
        } else {
            IndentLevel::new(parent.ctx().line_start(keyword.line_no()))
        }
    }

    fn should_increase_indent(&self) -> bool {
        false
    }

    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        let node = frame.node();
        let created = frame.require(node.child_by_field_name("type"), "type")?;
        frame.check_expression_subtree(created, frame.level(), false, false);
        if let Some(arguments) = node.child_by_field_name("arguments") {
            check_arguments(frame, arguments);
        }
        Ok(())
    }
}
