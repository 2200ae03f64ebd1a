use tree_sitter::Node;

use crate::TokenType;
use crate::ast::{Ast, NodeData, NodeId};

/// One pending tree-sitter node waiting to be copied into the arena.
struct Pending<'tree> {
    node: Node<'tree>,
    field: Option<&'static str>,
    parent: Option<NodeId>,
    /// Node re-parented under this one instead of its grammar parent.
    adopted: Option<(Node<'tree>, Option<&'static str>)>,
}

#[derive(Default)]
pub(crate) struct AstBuilder {
    nodes: Vec<NodeData>,
}

impl AstBuilder {
    /// Copies the tree rooted at `root` into an arena in document order.
    ///
    /// The walk uses an explicit stack so deeply nested expressions cannot
    /// overflow the call stack.
    pub(crate) fn build(mut self, root: Node<'_>) -> Ast {
        let mut stack = vec![Pending {
            node: root,
            field: None,
            parent: None,
            adopted: None,
        }];

        while let Some(pending) = stack.pop() {
            let id = self.push_node(pending.node, pending.field, pending.parent);

            if let Some((adopted, field)) = pending.adopted {
                stack.push(Pending {
                    node: adopted,
                    field,
                    parent: Some(id),
                    adopted: None,
                });
                continue;
            }

            let children = collect_children(pending.node);
            let is_if = pending.node.kind() == "if_statement";
            let mut queued = Vec::with_capacity(children.len());
            let mut iter = children.into_iter().peekable();
            while let Some((child, field)) = iter.next() {
                // The else branch hangs under the `else` token, so that an
                // `else if` chain reads as Else -> If.
                let adopted = if is_if && !child.is_named() && child.kind() == "else" {
                    iter.next_if(|(_, f)| *f == Some("alternative"))
                } else {
                    None
                };
                queued.push(Pending {
                    node: child,
                    field,
                    parent: Some(id),
                    adopted,
                });
            }
            stack.extend(queued.into_iter().rev());
        }

        Ast { nodes: self.nodes }
    }

    fn push_node(&mut self, node: Node<'_>, field: Option<&'static str>, parent: Option<NodeId>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        let start = node.start_position();
        let end = node.end_position();

        let mut prev_sibling = None;
        if let Some(parent) = parent {
            let parent_data = &mut self.nodes[parent.index()];
            prev_sibling = parent_data.last_child;
            if parent_data.first_child.is_none() {
                parent_data.first_child = Some(id);
            }
            parent_data.last_child = Some(id);
        }
        if let Some(prev) = prev_sibling {
            self.nodes[prev.index()].next_sibling = Some(id);
        }

        self.nodes.push(NodeData {
            kind: TokenType::from_grammar_kind(node.kind(), node.is_named()),
            grammar_kind: node.kind(),
            field,
            line: start.row + 1,
            column: start.column,
            end_line: end.row + 1,
            end_column: end.column,
            parent,
            first_child: None,
            last_child: None,
            next_sibling: None,
            prev_sibling,
        });
        id
    }
}

/// Direct children of `node` with their field names, minus comments and
/// zero-width tokens inserted by error recovery.
fn collect_children(node: Node<'_>) -> Vec<(Node<'_>, Option<&'static str>)> {
    let mut children = Vec::with_capacity(node.child_count());
    let mut cursor = node.walk();
    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            if !child.is_extra() && !child.is_missing() {
                children.push((child, cursor.field_name()));
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }
    children
}
