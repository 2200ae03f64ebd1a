//! Arena syntax tree for Java compilation units.
//!
//! The tree is built once from a tree-sitter parse and then navigated through
//! cheap [`AstNode`] handles. Each node carries a [`TokenType`], a 1-based
//! line and a 0-based byte column, plus parent / first-child / next-sibling
//! links. Comments are not part of the tree.

mod ast;
mod builder;
mod token_type;
mod walk;

pub use ast::{Ast, AstNode, NodeId};
pub use token_type::TokenType;
pub use walk::{Events, Preorder, WalkEvent};
