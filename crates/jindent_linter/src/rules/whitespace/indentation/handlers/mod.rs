//! Indentation handlers, one per kind of Java construct.
//!
//! Handlers form a tree that mirrors the nesting of the constructs they
//! check. Each handler knows its expected level on creation and answers
//! what level it expects from the handlers nested inside it.

mod base;
mod block_parent;
mod blocks;
mod class_def;
mod expressions;
mod frame;
mod if_else;
mod loops;
mod method_call;
mod method_def;
mod switch_case;
mod top_level;
mod try_catch;

pub use base::{HandlerContext, IndentationChildError, IndentationError};
pub(crate) use frame::Frame;
pub(crate) use method_call::chained_object;

use jindent_java_ast::{AstNode, TokenType};
use thiserror::Error;

use super::indent_level::IndentLevel;

/// A construct the handlers expected but the tree does not contain,
/// usually because the source has syntax errors.
#[derive(Debug, Error)]
pub enum MalformedAst {
    #[error("{construct} at line {line} has no {part}")]
    MissingPart {
        construct: &'static str,
        part: &'static str,
        line: usize,
    },
}

pub type CheckResult = Result<(), MalformedAst>;

/// Index of a handler in its [`HandlerTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Primordial,
    PackageDef,
    Import,
    ClassDef,
    ObjectBlock,
    MethodDef,
    MemberDef,
    Slist,
    StaticInit,
    If,
    Else,
    For,
    While,
    DoWhile,
    Try,
    Catch,
    Finally,
    Switch,
    Case,
    Synchronized,
    Label,
    Assign,
    ArrayInit,
    MethodCall,
    New,
}

impl HandlerKind {
    /// The handler kind responsible for `node`, if any.
    pub fn for_node(node: AstNode<'_>) -> Option<Self> {
        let kind = match node.kind() {
            TokenType::PackageDef => Self::PackageDef,
            TokenType::Import => Self::Import,
            kind if kind.is_type_def() => Self::ClassDef,
            TokenType::ObjBlock => Self::ObjectBlock,
            TokenType::MethodDef | TokenType::CtorDef | TokenType::AnnotationFieldDef => {
                Self::MethodDef
            }
            TokenType::FieldDef | TokenType::VariableDef => Self::MemberDef,
            TokenType::Slist => Self::Slist,
            TokenType::StaticInit => Self::StaticInit,
            TokenType::LiteralIf => Self::If,
            TokenType::LiteralElse if node.has_children() => Self::Else,
            TokenType::LiteralFor | TokenType::ForEach => Self::For,
            TokenType::LiteralWhile => Self::While,
            TokenType::LiteralDo => Self::DoWhile,
            TokenType::LiteralTry => Self::Try,
            TokenType::LiteralCatch => Self::Catch,
            TokenType::LiteralFinally => Self::Finally,
            TokenType::LiteralSwitch => Self::Switch,
            TokenType::CaseGroup | TokenType::SwitchRule => Self::Case,
            TokenType::LiteralSynchronized => Self::Synchronized,
            TokenType::LabeledStat => Self::Label,
            TokenType::Assign => Self::Assign,
            TokenType::VariableDeclarator if node.child_by_field_name("value").is_some() => {
                Self::Assign
            }
            TokenType::ArrayInit => Self::ArrayInit,
            TokenType::MethodCall | TokenType::CtorCall => Self::MethodCall,
            TokenType::LiteralNew | TokenType::ArrayCreation => Self::New,
            _ => return None,
        };
        Some(kind)
    }

    /// Name used in violation messages.
    pub fn display_name(self, node: AstNode<'_>) -> &'static str {
        match self {
            Self::Primordial => "primordial",
            Self::PackageDef => "package def",
            Self::Import => "import",
            Self::ClassDef => match node.kind() {
                TokenType::InterfaceDef => "interface def",
                TokenType::EnumDef => "enum def",
                TokenType::AnnotationDef => "annotation def",
                TokenType::RecordDef => "record def",
                _ => "class def",
            },
            Self::ObjectBlock => "object def",
            Self::MethodDef => match node.kind() {
                TokenType::CtorDef => "ctor def",
                TokenType::AnnotationFieldDef => "annotation field def",
                _ => "method def",
            },
            Self::MemberDef => "member def",
            Self::Slist => "block",
            Self::StaticInit => "static initialization",
            Self::If => "if",
            Self::Else => "else",
            Self::For => "for",
            Self::While => "while",
            Self::DoWhile => "do..while",
            Self::Try => "try",
            Self::Catch => "catch",
            Self::Finally => "finally",
            Self::Switch => "switch",
            Self::Case => "case",
            Self::Synchronized => "synchronized",
            Self::Label => "label",
            Self::Assign => "assign",
            Self::ArrayInit => "array initialization",
            Self::MethodCall => match node.kind() {
                TokenType::CtorCall => "ctor call",
                _ => "method call",
            },
            Self::New => "new",
        }
    }

    pub(crate) fn behavior(self) -> &'static dyn IndentHandler {
        match self {
            Self::Primordial => &top_level::Primordial,
            Self::PackageDef => &top_level::PackageDef,
            Self::Import => &top_level::Import,
            Self::ClassDef => &class_def::ClassDef,
            Self::ObjectBlock => &class_def::ObjectBlock,
            Self::MethodDef => &method_def::MethodDef,
            Self::MemberDef => &method_def::MemberDef,
            Self::Slist => &blocks::Slist,
            Self::StaticInit => &blocks::StaticInit,
            Self::If => &if_else::If,
            Self::Else => &if_else::Else,
            Self::For => &loops::For,
            Self::While => &loops::While,
            Self::DoWhile => &loops::DoWhile,
            Self::Try => &try_catch::Try,
            Self::Catch => &try_catch::Catch,
            Self::Finally => &try_catch::Finally,
            Self::Switch => &switch_case::Switch,
            Self::Case => &switch_case::Case,
            Self::Synchronized => &blocks::Synchronized,
            Self::Label => &blocks::Label,
            Self::Assign => &expressions::Assign,
            Self::ArrayInit => &expressions::ArrayInit,
            Self::MethodCall => &method_call::MethodCall,
            Self::New => &method_call::New,
        }
    }
}

/// A handler about to be created: what it is and which node it covers.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub kind: HandlerKind,
    pub node: AstNode<'a>,
}

/// Behavior shared by all handlers of one kind.
pub(crate) trait IndentHandler: Sync {
    /// Expected level of a new handler nested in `parent`.
    fn level<'a>(&self, parent: &Frame<'_, 'a>, candidate: Candidate<'a>) -> IndentLevel {
        parent.suggested_child_level(candidate)
    }

    /// Level this handler expects from a handler nested inside it.
    fn suggested_child_level<'a>(&self, frame: &Frame<'_, 'a>, _child: Candidate<'a>) -> IndentLevel {
        frame.level().with_offset(frame.ctx().basic_offset())
    }

    /// Whether wrapped lines of this construct go one offset deeper when the
    /// wrapped region starts below the construct's first line.
    fn should_increase_indent(&self) -> bool {
        true
    }

    fn check_indentation(&self, frame: &Frame<'_, '_>) -> CheckResult;
}

#[derive(Debug)]
pub(crate) struct Handler<'a> {
    pub(crate) kind: HandlerKind,
    pub(crate) node: AstNode<'a>,
    pub(crate) parent: Option<HandlerId>,
    pub(crate) level: IndentLevel,
}

/// Arena of the handlers created for one file.
#[derive(Debug, Default)]
pub(crate) struct HandlerTree<'a> {
    handlers: Vec<Handler<'a>>,
}

impl<'a> HandlerTree<'a> {
    /// Creates a handler, computing its level from `parent`.
    ///
    /// A handler without a parent is the root of the tree and sits at level 0.
    pub(crate) fn insert(
        &mut self,
        ctx: &HandlerContext<'a>,
        kind: HandlerKind,
        node: AstNode<'a>,
        parent: Option<HandlerId>,
    ) -> HandlerId {
        let level = match parent {
            Some(parent) => {
                let frame = Frame::new(ctx, self, parent);
                kind.behavior().level(&frame, Candidate { kind, node })
            }
            None => IndentLevel::new(0),
        };
        self.handlers.push(Handler {
            kind,
            node,
            parent,
            level,
        });
        HandlerId(self.handlers.len() - 1)
    }

    pub(crate) fn get(&self, id: HandlerId) -> &Handler<'a> {
        &self.handlers[id.0]
    }

    pub(crate) fn len(&self) -> usize {
        self.handlers.len()
    }
}
