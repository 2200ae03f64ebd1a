//! Indentation rule implementation.
//!
//! Checks that every Java construct starts at the column its enclosing
//! constructs call for. The work is done by a tree of handlers built during
//! a single walk over the syntax tree: entering a node with a handler kind
//! creates its handler, nested under the handler of the nearest enclosing
//! handled node, and runs its checks; leaving the node pops it again.

mod handler_factory;
pub mod handlers;
pub mod indent_level;
pub mod line_set;

use jindent_diagnostics::Diagnostic;
use jindent_java_ast::{AstNode, TokenType, WalkEvent};

use crate::{CheckContext, FromConfig, Properties, Rule};

use handler_factory::HandlerFactory;
use handlers::{Frame, HandlerKind, HandlerTree};

pub use handlers::{HandlerContext, IndentationChildError, IndentationError, MalformedAst};
pub use indent_level::IndentLevel;
pub use line_set::LineSet;

/// Default indentation amount (matches checkstyle).
const DEFAULT_INDENTATION: i32 = 4;

/// Checkstyle's default tab width.
const DEFAULT_TAB_WIDTH: usize = 8;

/// Configuration for Indentation rule.
#[derive(Debug, Clone)]
pub struct Indentation {
    /// How far a nested construct is indented relative to its parent.
    pub basic_offset: i32,
    /// Extra indentation of a brace that starts its line.
    pub brace_adjustment: i32,
    /// How far case labels are indented relative to their switch.
    pub case_indent: i32,
    /// How far a wrapped throws clause is indented.
    pub throws_indent: i32,
    /// How far array initializer elements are indented.
    pub array_init_indent: i32,
    /// How far wrapped lines of a declaration or condition are indented.
    pub line_wrapping_indentation: i32,
    /// Wrapped lines must sit exactly at the line wrapping indentation
    /// instead of at it or beyond.
    pub force_strict_condition: bool,
    /// Columns a tab advances to a multiple of.
    pub tab_width: usize,
}

impl Default for Indentation {
    fn default() -> Self {
        Self {
            basic_offset: DEFAULT_INDENTATION,
            brace_adjustment: 0,
            case_indent: DEFAULT_INDENTATION,
            throws_indent: DEFAULT_INDENTATION,
            array_init_indent: DEFAULT_INDENTATION,
            line_wrapping_indentation: DEFAULT_INDENTATION,
            force_strict_condition: false,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

fn parse_property<T: std::str::FromStr>(properties: &Properties, name: &str, default: T) -> T {
    match properties.get(name).map(|value| value.trim().parse()) {
        Some(Ok(value)) => value,
        Some(Err(_)) => {
            log::warn!("Indentation: ignoring invalid {name} value, using default");
            default
        }
        None => default,
    }
}

impl FromConfig for Indentation {
    const MODULE_NAME: &'static str = "Indentation";

    fn from_config(properties: &Properties) -> Self {
        Self {
            basic_offset: parse_property(properties, "basicOffset", DEFAULT_INDENTATION),
            brace_adjustment: parse_property(properties, "braceAdjustment", 0),
            case_indent: parse_property(properties, "caseIndent", DEFAULT_INDENTATION),
            throws_indent: parse_property(properties, "throwsIndent", DEFAULT_INDENTATION),
            array_init_indent: parse_property(properties, "arrayInitIndent", DEFAULT_INDENTATION),
            line_wrapping_indentation: parse_property(
                properties,
                "lineWrappingIndentation",
                DEFAULT_INDENTATION,
            ),
            force_strict_condition: parse_property(properties, "forceStrictCondition", false),
            tab_width: parse_property(properties, "tabWidth", DEFAULT_TAB_WIDTH),
        }
    }
}

impl Rule for Indentation {
    fn name(&self) -> &'static str {
        "Indentation"
    }

    fn check(&self, ctx: &CheckContext, node: &AstNode) -> Vec<Diagnostic> {
        // The whole file is checked in one go from the root.
        if node.kind() != TokenType::CompilationUnit {
            return vec![];
        }

        let handler_ctx = HandlerContext::new(ctx.source_code(), self);
        check_tree(&handler_ctx, *node);
        handler_ctx.take_diagnostics()
    }
}

/// Walks the whole tree once, creating and checking a handler for every
/// handled node.
fn check_tree<'a>(ctx: &HandlerContext<'a>, root: AstNode<'a>) {
    let mut tree = HandlerTree::default();
    let mut factory = HandlerFactory::default();
    let primordial = tree.insert(ctx, HandlerKind::Primordial, root, None);
    let mut stack = vec![primordial];

    for event in root.events() {
        match event {
            WalkEvent::Enter(node) => {
                let Some(kind) = HandlerKind::for_node(node) else {
                    continue;
                };
                let parent = stack.last().copied().unwrap_or(primordial);
                let id = factory.get_handler(ctx, &mut tree, kind, node, parent);
                stack.push(id);
                if let Err(err) = Frame::new(ctx, &tree, id).check() {
                    log::debug!("skipping construct: {err}");
                }
            }
            WalkEvent::Leave(node) => {
                if stack.len() > 1 && stack.last().is_some_and(|&top| tree.get(top).node == node) {
                    stack.pop();
                }
            }
        }
    }
    log::debug!("indentation: {} handlers", tree.len());
}
