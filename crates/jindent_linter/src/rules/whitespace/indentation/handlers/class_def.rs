//! Type declarations and their bodies.

use jindent_java_ast::{AstNode, TokenType};

use super::super::indent_level::IndentLevel;
use super::block_parent::BlockParent;
use super::{Candidate, CheckResult, Frame, IndentHandler};

/// Clauses between the type name and its body.
const HEADER_CLAUSES: &[TokenType] = &[
    TokenType::TypeParameters,
    TokenType::Parameters,
    TokenType::ExtendsClause,
    TokenType::ImplementsClause,
    TokenType::PermitsClause,
];

/// Class, interface, enum, record and annotation type declarations.
pub(crate) struct ClassDef;

impl ClassDef {
    /// The line holding the type name must not start left of the handler's
    /// level; wrapped header clauses follow the line wrapping indentation.
    fn check_header<'a>(frame: &Frame<'_, 'a>, name: AstNode<'a>) {
        frame.check_line_start(name.line_no(), frame.level());
        frame.check_wrapping(
            name,
            frame
                .node()
                .children()
                .filter(|child| HEADER_CLAUSES.contains(&child.kind())),
        );
    }
}

impl BlockParent for ClassDef {
    fn toplevel<'a>(&self, _frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        None
    }

    fn list_child<'a>(&self, frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        self.body(frame)
    }

    fn nonlist_child<'a>(&self, _frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        None
    }

    fn parens<'a>(&self, _frame: &Frame<'_, 'a>) -> (Option<AstNode<'a>>, Option<AstNode<'a>>) {
        (None, None)
    }

    fn is_checked_child(&self, node: AstNode<'_>) -> bool {
        node.kind() == TokenType::EnumConstant
    }
}

impl IndentHandler for ClassDef {
    fn suggested_child_level<'a>(&self, frame: &Frame<'_, 'a>, _child: Candidate<'a>) -> IndentLevel {
        self.children_expected_level(frame)
    }

    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        let node = frame.node();
        match node.find_first_token(TokenType::Modifiers) {
            Some(modifiers) => frame.check_modifiers(modifiers),
            None => {
                let keyword = frame.require(node.first_child(), "keyword")?;
                let line_start = frame.ctx().line_start(keyword.line_no());
                if !frame.level().is_acceptable(line_start) {
                    frame.log_error(keyword, "ident", line_start);
                }
            }
        }

        let name = frame.require(node.child_by_field_name("name"), "name")?;
        Self::check_header(frame, name);
        self.check_block(frame)
    }
}

/// The body of a type declaration, anonymous class or enum constant.
///
/// Bodies of named types are checked by [`ClassDef`]; this handler only
/// checks the others.
pub(crate) struct ObjectBlock;

impl ObjectBlock {
    fn owner_kind(node: AstNode<'_>) -> Option<TokenType> {
        node.parent().map(|parent| parent.kind())
    }
}

impl BlockParent for ObjectBlock {
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

    fn checks_rcurly(&self, frame: &Frame<'_, '_>) -> bool {
        Self::owner_kind(frame.node()) != Some(TokenType::EnumConstant)
    }

    fn is_checked_child(&self, node: AstNode<'_>) -> bool {
        node.kind() == TokenType::EnumConstant
    }
}

impl IndentHandler for ObjectBlock {
    fn level<'a>(&self, parent: &Frame<'_, 'a>, candidate: Candidate<'a>) -> IndentLevel {
        match Self::owner_kind(candidate.node) {
            Some(TokenType::LiteralNew) => parent
                .level()
                .combine(&parent.suggested_child_level(candidate)),
            Some(TokenType::EnumConstant) => parent.suggested_child_level(candidate),
            _ => parent.level().clone(),
        }
    }

    fn suggested_child_level<'a>(&self, frame: &Frame<'_, 'a>, _child: Candidate<'a>) -> IndentLevel {
        self.children_expected_level(frame)
    }

    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        match Self::owner_kind(frame.node()) {
            Some(TokenType::LiteralNew | TokenType::EnumConstant) => self.check_block(frame),
            _ => Ok(()),
        }
    }
}
