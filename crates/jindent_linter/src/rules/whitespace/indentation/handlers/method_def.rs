//! Method, constructor and field declarations.

use jindent_java_ast::{AstNode, TokenType};

use super::super::indent_level::IndentLevel;
use super::block_parent::BlockParent;
use super::frame::parens;
use super::{Candidate, CheckResult, Frame, IndentHandler};

pub(crate) struct MethodDef;

impl BlockParent for MethodDef {
    fn toplevel<'a>(&self, _frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        None
    }

    fn parens<'a>(&self, frame: &Frame<'_, 'a>) -> (Option<AstNode<'a>>, Option<AstNode<'a>>) {
        frame
            .node()
            .child_by_field_name("parameters")
            .map_or((None, None), parens)
    }
}

impl IndentHandler for MethodDef {
    fn suggested_child_level<'a>(&self, frame: &Frame<'_, 'a>, _child: Candidate<'a>) -> IndentLevel {
        self.children_expected_level(frame)
    }

    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        let node = frame.node();
        let level = frame.level();

        match node.find_first_token(TokenType::Modifiers) {
            Some(modifiers) => frame.check_modifiers(modifiers),
            None => {
                if let Some(type_parameters) = node.find_first_token(TokenType::TypeParameters) {
                    frame.check_token(type_parameters, "", level, false);
                }
            }
        }
        if let Some(return_type) = node.child_by_field_name("type") {
            frame.check_token(return_type, "return type", level, false);
        }
        let name = frame.require(node.child_by_field_name("name"), "name")?;
        frame.check_token(name, "", level, false);

        if let Some(throws) = node.find_first_token(TokenType::Throws) {
            let throws_level = level.with_offset(frame.ctx().throws_indent());
            frame.check_token(throws, "throws", &throws_level, false);
        }

        if let Some(parameters) = node.child_by_field_name("parameters") {
            let header = node
                .children()
                .filter(|c| c.kind() != TokenType::Modifiers)
                .take_while(|c| c.id() <= parameters.id());
            frame.check_wrapping(header_start(node, name), header);
        }

        self.check_block(frame)
    }
}

/// First token of the declaration once leading annotations are set aside.
fn header_start<'a>(node: AstNode<'a>, name: AstNode<'a>) -> AstNode<'a> {
    node.children()
        .flat_map(|c| match c.kind() {
            TokenType::Modifiers => c.children().collect(),
            _ => vec![c],
        })
        .find(|c| c.kind() != TokenType::Annotation)
        .unwrap_or(name)
}

/// Field and local variable declarations.
pub(crate) struct MemberDef;

impl IndentHandler for MemberDef {
    fn suggested_child_level<'a>(&self, frame: &Frame<'_, 'a>, _child: Candidate<'a>) -> IndentLevel {
        frame.level().clone()
    }

    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        let node = frame.node();
        match node.find_first_token(TokenType::Modifiers) {
            Some(modifiers) => frame.check_modifiers(modifiers),
            None => {
                let declared_type = frame.require(node.child_by_field_name("type"), "type")?;
                frame.check_token(declared_type, "type", frame.level(), false);
            }
        }
        Ok(())
    }
}
