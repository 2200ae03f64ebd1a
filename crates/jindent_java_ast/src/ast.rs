use std::fmt;

use jindent_java_parser::JavaParser;

use crate::TokenType;
use crate::builder::AstBuilder;
use crate::walk::{Events, Preorder};

/// Stable index of a node inside its [`Ast`].
///
/// Ids are assigned in document order, so comparing two ids compares the
/// positions where the nodes start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(u32::try_from(index).expect("syntax tree exceeds u32::MAX nodes"))
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: TokenType,
    pub(crate) grammar_kind: &'static str,
    pub(crate) field: Option<&'static str>,
    pub(crate) line: usize,
    pub(crate) column: usize,
    pub(crate) end_line: usize,
    pub(crate) end_column: usize,
    pub(crate) parent: Option<NodeId>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) last_child: Option<NodeId>,
    pub(crate) next_sibling: Option<NodeId>,
    pub(crate) prev_sibling: Option<NodeId>,
}

/// A Java syntax tree stored as a flat arena.
#[derive(Debug, Clone)]
pub struct Ast {
    pub(crate) nodes: Vec<NodeData>,
}

impl Ast {
    /// Parses `source` and builds its tree. Returns `None` if tree-sitter
    /// produced no tree at all.
    pub fn parse(source: &str) -> Option<Self> {
        let mut parser = JavaParser::new();
        let result = parser.parse(source)?;
        Some(Self::from_tree(&result.tree))
    }

    /// Builds the arena from an existing tree-sitter tree.
    pub fn from_tree(tree: &tree_sitter::Tree) -> Self {
        AstBuilder::default().build(tree.root_node())
    }

    pub fn root(&self) -> AstNode<'_> {
        AstNode {
            ast: self,
            id: NodeId(0),
        }
    }

    pub fn node(&self, id: NodeId) -> AstNode<'_> {
        AstNode { ast: self, id }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in document order.
    pub fn preorder(&self) -> Preorder<'_> {
        self.root().preorder()
    }
}

/// A cheap, copyable handle to one node of an [`Ast`].
#[derive(Clone, Copy)]
pub struct AstNode<'a> {
    ast: &'a Ast,
    id: NodeId,
}

impl<'a> AstNode<'a> {
    fn data(&self) -> &'a NodeData {
        &self.ast.nodes[self.id.index()]
    }

    fn with_id(&self, id: Option<NodeId>) -> Option<AstNode<'a>> {
        id.map(|id| AstNode { ast: self.ast, id })
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> TokenType {
        self.data().kind
    }

    /// The tree-sitter kind this node was built from, e.g. `"if_statement"` or `"while"`.
    pub fn grammar_kind(&self) -> &'static str {
        self.data().grammar_kind
    }

    /// The grammar field under which this node appears in its parent, if any.
    pub fn field_name(&self) -> Option<&'static str> {
        self.data().field
    }

    /// 1-based line where the node starts.
    pub fn line_no(&self) -> usize {
        self.data().line
    }

    /// 0-based byte column where the node starts.
    pub fn column_no(&self) -> usize {
        self.data().column
    }

    /// 1-based line where the node ends.
    pub fn end_line_no(&self) -> usize {
        self.data().end_line
    }

    /// 0-based byte column just past the node's last character.
    pub fn end_column_no(&self) -> usize {
        self.data().end_column
    }

    /// The first token of the node: the node itself when it has no
    /// children.
    pub fn first_token(&self) -> AstNode<'a> {
        let mut token = *self;
        while let Some(child) = token.first_child() {
            token = child;
        }
        token
    }

    pub fn parent(&self) -> Option<AstNode<'a>> {
        self.with_id(self.data().parent)
    }

    pub fn first_child(&self) -> Option<AstNode<'a>> {
        self.with_id(self.data().first_child)
    }

    pub fn last_child(&self) -> Option<AstNode<'a>> {
        self.with_id(self.data().last_child)
    }

    pub fn next_sibling(&self) -> Option<AstNode<'a>> {
        self.with_id(self.data().next_sibling)
    }

    pub fn previous_sibling(&self) -> Option<AstNode<'a>> {
        self.with_id(self.data().prev_sibling)
    }

    pub fn has_children(&self) -> bool {
        self.data().first_child.is_some()
    }

    pub fn children(&self) -> impl Iterator<Item = AstNode<'a>> + use<'a> {
        std::iter::successors(self.first_child(), AstNode::next_sibling)
    }

    /// First direct child of the given kind.
    pub fn find_first_token(&self, kind: TokenType) -> Option<AstNode<'a>> {
        self.children().find(|child| child.kind() == kind)
    }

    /// First direct child attached under the grammar field `name`.
    pub fn child_by_field_name(&self, name: &str) -> Option<AstNode<'a>> {
        self.children().find(|child| child.field_name() == Some(name))
    }

    /// True for a keyword or punctuation token spelled `text`.
    pub fn is_token(&self, text: &str) -> bool {
        self.grammar_kind() == text && !self.has_children()
    }

    /// The node and all of its descendants in document order.
    pub fn preorder(&self) -> Preorder<'a> {
        Preorder::new(*self)
    }

    /// Enter/leave events for the node's subtree.
    pub fn events(&self) -> Events<'a> {
        Events::new(*self)
    }
}

impl PartialEq for AstNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.ast, other.ast) && self.id == other.id
    }
}

impl Eq for AstNode<'_> {}

impl fmt::Debug for AstNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}({}) @ {}:{}",
            self.kind(),
            self.grammar_kind(),
            self.line_no(),
            self.column_no()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Ast {
        Ast::parse(source).expect("parse")
    }

    #[test]
    fn test_positions_are_one_based_lines_zero_based_columns() {
        let ast = parse("class Foo {\n    int x;\n}\n");
        let root = ast.root();
        assert_eq!(root.kind(), TokenType::CompilationUnit);

        let class = root.find_first_token(TokenType::ClassDef).unwrap();
        assert_eq!(class.line_no(), 1);
        assert_eq!(class.column_no(), 0);

        let body = class.child_by_field_name("body").unwrap();
        assert_eq!(body.kind(), TokenType::ObjBlock);
        let field = body.find_first_token(TokenType::FieldDef).unwrap();
        assert_eq!(field.line_no(), 2);
        assert_eq!(field.column_no(), 4);

        let rcurly = body.last_child().unwrap();
        assert_eq!(rcurly.kind(), TokenType::RCurly);
        assert_eq!(rcurly.line_no(), 3);
    }

    #[test]
    fn test_navigation_links() {
        let ast = parse("class Foo { void a() {} void b() {} }");
        let body = ast
            .root()
            .find_first_token(TokenType::ClassDef)
            .and_then(|c| c.child_by_field_name("body"))
            .unwrap();
        let methods: Vec<_> = body
            .children()
            .filter(|c| c.kind() == TokenType::MethodDef)
            .collect();
        assert_eq!(methods.len(), 2);
        assert_eq!(methods[0].parent(), Some(body));
        assert_eq!(methods[1].previous_sibling().map(|n| n.kind()), Some(TokenType::MethodDef));
        assert!(methods[0].id() < methods[1].id());
    }

    fn method_defs(body: AstNode<'_>) -> impl Iterator<Item = AstNode<'_>> {
        body.children().filter(|c| c.kind() == TokenType::MethodDef)
    }

    #[test]
    fn test_children_outlive_the_node_handle() {
        let ast = parse("class Foo { void a() {} int x; void b() {} }");
        let body = ast
            .root()
            .find_first_token(TokenType::ClassDef)
            .and_then(|c| c.child_by_field_name("body"))
            .unwrap();
        let names: Vec<_> = method_defs(body)
            .filter_map(|m| m.child_by_field_name("name"))
            .map(|name| name.column_no())
            .collect();
        assert_eq!(names, vec![17, 36]);
    }

    #[test]
    fn test_first_token_and_end_column() {
        let ast = parse("class Foo {\n    int x = (1 + 2);\n}\n");
        let paren = ast
            .preorder()
            .find(|n| n.kind() == TokenType::ParenExpr)
            .unwrap();
        assert_eq!(paren.end_column_no(), 19);

        let lparen = paren.first_token();
        assert_eq!(lparen.kind(), TokenType::LParen);
        assert_eq!((lparen.column_no(), lparen.end_column_no()), (12, 13));
    }

    #[test]
    fn test_comments_are_skipped() {
        let ast = parse("class Foo {\n    // note\n    /* block */ int x;\n}");
        assert!(ast.preorder().all(|n| !n.grammar_kind().ends_with("comment")));
    }

    #[test]
    fn test_keyword_tokens() {
        let ast = parse("class Foo { void f() { do { } while (x); } }");
        let do_stmt = ast
            .preorder()
            .find(|n| n.kind() == TokenType::LiteralDo)
            .unwrap();
        let while_kw = do_stmt.children().find(|c| c.is_token("while")).unwrap();
        assert_eq!(while_kw.kind(), TokenType::Keyword);
        assert_eq!(
            do_stmt.child_by_field_name("condition").map(|c| c.kind()),
            Some(TokenType::ParenExpr)
        );
    }
}
