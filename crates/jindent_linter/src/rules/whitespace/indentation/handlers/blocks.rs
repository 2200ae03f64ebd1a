//! Plain blocks and the small statements built around one.

use jindent_java_ast::{AstNode, TokenType};

use super::super::indent_level::IndentLevel;
use super::block_parent::BlockParent;
use super::{Candidate, CheckResult, Frame, HandlerKind, IndentHandler};

/// Parent kinds that check a block's curlies and statements themselves.
fn is_block_parent(kind: TokenType) -> bool {
    matches!(
        kind,
        TokenType::LiteralIf
            | TokenType::LiteralElse
            | TokenType::LiteralFor
            | TokenType::ForEach
            | TokenType::LiteralWhile
            | TokenType::LiteralDo
            | TokenType::LiteralTry
            | TokenType::LiteralCatch
            | TokenType::LiteralFinally
            | TokenType::LiteralSynchronized
            | TokenType::MethodDef
            | TokenType::CtorDef
            | TokenType::StaticInit
    )
}

/// A `{ ... }` statement list.
pub(crate) struct Slist;

impl Slist {
    fn has_block_parent(node: AstNode<'_>) -> bool {
        node.parent().is_some_and(|parent| is_block_parent(parent.kind()))
    }
}

impl BlockParent for Slist {
    fn toplevel<'a>(&self, _frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        None
    }

    fn body<'a>(&self, frame: &Frame<'_, 'a>) -> Option<AstNode<'a>> {
        Some(frame.node())
    }

    fn parens<'a>(&self, _frame: &Frame<'_, 'a>) -> (Option<AstNode<'a>>, Option<AstNode<'a>>) {
        (None, None)
    }
}

impl IndentHandler for Slist {
    /// A block owned by a statement or method is transparent: its
    /// statements get the level the owner expects.
    fn suggested_child_level<'a>(&self, frame: &Frame<'_, 'a>, child: Candidate<'a>) -> IndentLevel {
        match frame.parent() {
            Some(parent) if Self::has_block_parent(frame.node()) => {
                parent.suggested_child_level(child)
            }
            Some(parent) if parent.kind() == HandlerKind::Case && child.kind == HandlerKind::Slist => {
                parent.suggested_child_level(child)
            }
            _ => self.children_expected_level(frame),
        }
    }

    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        if Self::has_block_parent(frame.node()) {
            return Ok(());
        }
        self.check_block(frame)
    }
}

/// `static { ... }`.
pub(crate) struct StaticInit;

impl BlockParent for StaticInit {}

impl IndentHandler for StaticInit {
    fn suggested_child_level<'a>(&self, frame: &Frame<'_, 'a>, _child: Candidate<'a>) -> IndentLevel {
        self.children_expected_level(frame)
    }

    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        self.check_block(frame)
    }
}

/// `synchronized (lock) { ... }`.
pub(crate) struct Synchronized;

impl BlockParent for Synchronized {}

impl IndentHandler for Synchronized {
    fn suggested_child_level<'a>(&self, frame: &Frame<'_, 'a>, _child: Candidate<'a>) -> IndentLevel {
        self.children_expected_level(frame)
    }

    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        let node = frame.node();
        let lock = frame.require(node.find_first_token(TokenType::ParenExpr), "lock")?;
        frame.check_expression_nodes(
            super::frame::inside_parens(lock),
            &frame.offset_level(),
            false,
            false,
        );
        self.check_block(frame)
    }
}

/// `name: statement`. Labels sit one offset left of the statements around
/// them, or level with them.
pub(crate) struct Label;

impl IndentHandler for Label {
    fn level<'a>(&self, parent: &Frame<'_, 'a>, candidate: Candidate<'a>) -> IndentLevel {
        let suggested = parent.suggested_child_level(candidate);
        suggested
            .with_offset(-parent.ctx().basic_offset())
            .combine(&suggested)
    }

    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult {
        let node = frame.node();
        let name = frame.require(node.find_first_token(TokenType::Ident), "name")?;
        frame.check_expression_subtree(name, frame.level(), true, false);

        if let Some(statement) = node.last_child()
            && statement.line_no() > name.line_no()
        {
            frame.check_expression_subtree(statement, &frame.offset_level(), true, false);
        }
        Ok(())
    }
}
