//! Services every handler uses to inspect and report on its construct.

use std::collections::BTreeMap;

use jindent_java_ast::{AstNode, TokenType};

use super::super::indent_level::IndentLevel;
use super::super::line_set::LineSet;
use super::{Candidate, CheckResult, Handler, HandlerContext, HandlerId, HandlerKind, HandlerTree, MalformedAst};

/// A handler seen from inside the tree: its own data plus access to its
/// ancestors and the file being checked.
#[derive(Clone, Copy)]
pub(crate) struct Frame<'f, 'a> {
    ctx: &'f HandlerContext<'a>,
    tree: &'f HandlerTree<'a>,
    id: HandlerId,
}

impl<'f, 'a> Frame<'f, 'a> {
    pub(crate) fn new(ctx: &'f HandlerContext<'a>, tree: &'f HandlerTree<'a>, id: HandlerId) -> Self {
        Self { ctx, tree, id }
    }

    fn handler(&self) -> &'f Handler<'a> {
        self.tree.get(self.id)
    }

    pub(crate) fn ctx(&self) -> &'f HandlerContext<'a> {
        self.ctx
    }

    pub(crate) fn kind(&self) -> HandlerKind {
        self.handler().kind
    }

    pub(crate) fn node(&self) -> AstNode<'a> {
        self.handler().node
    }

    pub(crate) fn level(&self) -> &'f IndentLevel {
        &self.handler().level
    }

    pub(crate) fn parent(&self) -> Option<Frame<'f, 'a>> {
        self.handler()
            .parent
            .map(|parent| Frame::new(self.ctx, self.tree, parent))
    }

    pub(crate) fn name(&self) -> &'static str {
        self.kind().display_name(self.node())
    }

    /// Own level shifted by the basic offset.
    pub(crate) fn offset_level(&self) -> IndentLevel {
        self.level().with_offset(self.ctx.basic_offset())
    }

    pub(crate) fn suggested_child_level(&self, child: Candidate<'a>) -> IndentLevel {
        self.kind().behavior().suggested_child_level(self, child)
    }

    pub(crate) fn check(&self) -> CheckResult {
        self.kind().behavior().check_indentation(self)
    }

    /// Turns a missing part of the construct into an error.
    pub(crate) fn require<T>(&self, part: Option<T>, name: &'static str) -> Result<T, MalformedAst> {
        part.ok_or(MalformedAst::MissingPart {
            construct: self.name(),
            part: name,
            line: self.node().line_no(),
        })
    }

    pub(crate) fn column_of(&self, node: AstNode<'_>) -> i32 {
        self.ctx.column_of(node)
    }

    pub(crate) fn starts_line(&self, node: AstNode<'_>) -> bool {
        self.ctx.starts_line(node)
    }

    pub(crate) fn log_error(&self, node: AstNode<'_>, subtype: &str, actual: i32) {
        self.log_error_expected(node, subtype, actual, self.level());
    }

    pub(crate) fn log_error_expected(
        &self,
        node: AstNode<'_>,
        subtype: &str,
        actual: i32,
        expected: &IndentLevel,
    ) {
        let element = if subtype.is_empty() {
            self.name().to_string()
        } else {
            format!("{} {subtype}", self.name())
        };
        self.ctx.log_error(node, element, actual, expected);
    }

    fn log_child_error(&self, line: usize, actual: i32, expected: &IndentLevel) {
        self.ctx.log_child_error(line, self.name(), actual, expected);
    }

    /// Reports `node` when it is not at one of `level`'s columns. Unless
    /// `must_start_line` is set, a node that does not begin its line is
    /// left alone.
    pub(crate) fn check_token(
        &self,
        node: AstNode<'_>,
        subtype: &str,
        level: &IndentLevel,
        must_start_line: bool,
    ) {
        let column = self.column_of(node);
        if !level.is_acceptable(column) && (must_start_line || self.starts_line(node)) {
            self.log_error_expected(node, subtype, column, level);
        }
    }

    /// Each modifier or annotation that begins a line must sit at the
    /// handler's level.
    pub(crate) fn check_modifiers(&self, modifiers: AstNode<'_>) {
        for modifier in modifiers.children() {
            self.check_token(modifier, "modifier", self.level(), false);
        }
    }

    pub(crate) fn check_lparen(&self, lparen: Option<AstNode<'_>>) {
        if let Some(lparen) = lparen {
            self.check_token(lparen, "lparen", self.level(), false);
        }
    }

    /// A `)` that begins its line must sit at the handler's level, unless it
    /// directly follows the `(`.
    pub(crate) fn check_rparen(&self, lparen: Option<AstNode<'_>>, rparen: Option<AstNode<'_>>) {
        let (Some(lparen), Some(rparen)) = (lparen, rparen) else {
            return;
        };
        let column = self.column_of(rparen);
        if column != self.column_of(lparen) + 1
            && !self.level().is_acceptable(column)
            && self.starts_line(rparen)
        {
            self.log_error(rparen, "rparen", column);
        }
    }

    pub(crate) fn check_expression_subtree(
        &self,
        tree: AstNode<'a>,
        level: &IndentLevel,
        first_line_matches: bool,
        allow_nesting: bool,
    ) {
        self.check_expression_nodes([tree], level, first_line_matches, allow_nesting);
    }

    /// Checks the lines spanned by `nodes`, given in document order, as one
    /// region. Nested constructs with handlers of their own are skipped.
    ///
    /// With `first_line_matches` the first line must start exactly at
    /// `level`; later lines only need to start at or right of `level` plus
    /// the basic offset.
    pub(crate) fn check_expression_nodes(
        &self,
        nodes: impl IntoIterator<Item = AstNode<'a>>,
        level: &IndentLevel,
        first_line_matches: bool,
        allow_nesting: bool,
    ) {
        let mut lines = LineSet::new();
        let mut first = None;
        for node in nodes {
            first.get_or_insert(node);
            self.find_subtree_lines(&mut lines, node);
        }
        let Some(first) = first else {
            return;
        };
        if first_line_matches && !allow_nesting {
            lines.add_line_and_col(first.line_no(), self.column_of(first));
        }
        self.check_lines_indent(&lines, level, first_line_matches, first.line_no(), allow_nesting);
    }

    /// Checks `check_expression_subtree` on each child of `parent` that
    /// `filter` selects.
    pub(crate) fn check_children(
        &self,
        parent: AstNode<'a>,
        filter: impl Fn(AstNode<'a>) -> bool,
        level: &IndentLevel,
        first_line_matches: bool,
        allow_nesting: bool,
    ) {
        for child in parent.children().filter(|child| filter(*child)) {
            self.check_expression_subtree(child, level, first_line_matches, allow_nesting);
        }
    }

    /// Records the leftmost column of every line in `tree`, not descending
    /// into nodes that have a handler of their own.
    pub(crate) fn find_subtree_lines(&self, lines: &mut LineSet, tree: AstNode<'a>) {
        let mut walk = tree.preorder();
        while let Some(node) = walk.next() {
            if HandlerKind::for_node(node).is_some() {
                walk.skip_subtree(node);
                continue;
            }
            lines.add_line_and_col(node.line_no(), self.column_of(node));
        }
    }

    fn check_lines_indent(
        &self,
        lines: &LineSet,
        level: &IndentLevel,
        first_line_matches: bool,
        first_line: usize,
        allow_nesting: bool,
    ) {
        if lines.is_empty() {
            return;
        }
        let (Some(start_line), Some(last_line)) = (lines.first_line(), lines.last_line()) else {
            return;
        };
        let mut start_col = lines.start_column(start_line).unwrap_or_default();
        let real_start_col = self.ctx.line_start(start_line);
        if first_line_matches && !allow_nesting {
            start_col = real_start_col;
        }
        if real_start_col == start_col {
            self.check_line_indent(start_line, start_col, level, first_line_matches);
        }

        let wrapped = if first_line_matches
            || (first_line > self.node().line_no() && self.kind().behavior().should_increase_indent())
        {
            level.with_offset(self.ctx.basic_offset())
        } else {
            level.clone()
        };
        for line in start_line + 1..=last_line {
            if let Some(column) = lines.start_column(line) {
                self.check_line_indent(line, column, &wrapped, false);
            }
        }
    }

    fn check_line_indent(&self, line: usize, column: i32, level: &IndentLevel, must_match: bool) {
        let start = self.ctx.line_start(line);
        let misplaced = if must_match {
            !level.is_acceptable(start)
        } else {
            column == start && level.is_greater_than(start)
        };
        if misplaced {
            self.log_child_error(line, start, level);
        }
    }

    /// Reports `line` when it starts left of `level`.
    pub(crate) fn check_line_start(&self, line: usize, level: &IndentLevel) {
        let start = self.ctx.line_start(line);
        if level.is_greater_than(start) {
            self.log_child_error(line, start, level);
        }
    }

    /// Checks the lines a wrapped declaration or header spans, from the
    /// line of `first` through the end of `parts`.
    ///
    /// The first line is left to the caller. Every later line must start
    /// `lineWrappingIndentation` right of where the first line starts; a
    /// line led by `)` lines up with the first line instead. Lines led by
    /// braces, `new` or an array initializer are not checked, and the
    /// bodies of lambdas and anonymous classes are skipped apart from their
    /// closing brace.
    pub(crate) fn check_wrapping(
        &self,
        first: AstNode<'a>,
        parts: impl IntoIterator<Item = AstNode<'a>>,
    ) {
        let mut first_nodes: BTreeMap<usize, AstNode<'a>> = BTreeMap::new();
        let mut record = |node: AstNode<'a>| {
            let leftmost = first_nodes
                .get(&node.line_no())
                .is_none_or(|existing| self.column_of(node) < self.column_of(*existing));
            if leftmost {
                first_nodes.insert(node.line_no(), node);
            }
        };
        record(first);
        for part in parts {
            let mut walk = part.preorder();
            while let Some(node) = walk.next() {
                if matches!(node.kind(), TokenType::ObjBlock | TokenType::Slist) {
                    walk.skip_subtree(node);
                    if let Some(rcurly) = node.last_child() {
                        record(rcurly);
                    }
                    continue;
                }
                record(node);
            }
        }

        let first_indent = self.ctx.line_start(first.line_no());
        let wrapped = IndentLevel::new(first_indent + self.ctx.line_wrapping_indentation());
        let aligned = IndentLevel::new(first_indent);
        for (_, node) in first_nodes.range(first.line_no() + 1..) {
            let expected = match node.kind() {
                TokenType::RParen => &aligned,
                kind if WRAP_EXEMPT.contains(&kind) => continue,
                _ => &wrapped,
            };
            let column = self.column_of(*node);
            if !self.ctx.is_wrap_acceptable(column, expected) {
                let token = node.first_token();
                self.ctx
                    .log_error(token, self.ctx.token_text(token).to_string(), column, expected);
            }
        }
    }
}

/// Tokens that may lead a wrapped line at any column.
const WRAP_EXEMPT: &[TokenType] = &[
    TokenType::LCurly,
    TokenType::RCurly,
    TokenType::LiteralNew,
    TokenType::ArrayCreation,
    TokenType::ArrayInit,
];

pub(crate) fn are_on_same_line(a: AstNode<'_>, b: AstNode<'_>) -> bool {
    a.line_no() == b.line_no()
}

/// The `(` and `)` that delimit a parenthesized node's contents.
pub(crate) fn parens<'a>(node: AstNode<'a>) -> (Option<AstNode<'a>>, Option<AstNode<'a>>) {
    let lparen = node.children().find(|c| c.kind() == TokenType::LParen);
    let rparen = node
        .children()
        .filter(|c| c.kind() == TokenType::RParen)
        .last();
    (lparen, rparen)
}

/// Children of a parenthesized node, without the parens themselves.
pub(crate) fn inside_parens<'a>(node: AstNode<'a>) -> impl Iterator<Item = AstNode<'a>> + 'a {
    node.children()
        .filter(|c| !matches!(c.kind(), TokenType::LParen | TokenType::RParen))
}
