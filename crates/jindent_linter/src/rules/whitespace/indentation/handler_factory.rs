//! Creates handlers for the nodes the driver visits.

use std::collections::HashMap;

use jindent_java_ast::{AstNode, NodeId};

use super::handlers::{HandlerContext, HandlerId, HandlerKind, HandlerTree, chained_object};

/// Builds handlers for one file.
///
/// Calls on the receiver side of a chain (`a.b()` in `a.b().c()`) get their
/// handler before the outer call, so the outer call can nest inside it.
/// Those handlers are remembered and reused when the traversal reaches them.
#[derive(Debug, Default)]
pub(crate) struct HandlerFactory {
    created: HashMap<NodeId, HandlerId>,
}

impl HandlerFactory {
    pub(crate) fn get_handler<'a>(
        &mut self,
        ctx: &HandlerContext<'a>,
        tree: &mut HandlerTree<'a>,
        kind: HandlerKind,
        node: AstNode<'a>,
        parent: HandlerId,
    ) -> HandlerId {
        if let Some(&id) = self.created.get(&node.id()) {
            return id;
        }
        if kind == HandlerKind::MethodCall {
            return self.create_method_call_handler(ctx, tree, node, parent);
        }
        tree.insert(ctx, kind, node, Some(parent))
    }

    fn create_method_call_handler<'a>(
        &mut self,
        ctx: &HandlerContext<'a>,
        tree: &mut HandlerTree<'a>,
        call: AstNode<'a>,
        parent: HandlerId,
    ) -> HandlerId {
        // Innermost receiver last.
        let mut chain = vec![call];
        let mut parent = parent;
        let mut current = call;
        while let Some(receiver) = chained_object(current) {
            if let Some(&id) = self.created.get(&receiver.id()) {
                parent = id;
                break;
            }
            match HandlerKind::for_node(receiver) {
                Some(HandlerKind::MethodCall) => {
                    chain.push(receiver);
                    current = receiver;
                }
                Some(kind) => {
                    parent = tree.insert(ctx, kind, receiver, Some(parent));
                    self.created.insert(receiver.id(), parent);
                    break;
                }
                None => break,
            }
        }

        for node in chain.into_iter().rev() {
            parent = tree.insert(ctx, HandlerKind::MethodCall, node, Some(parent));
            if node != call {
                self.created.insert(node.id(), parent);
            }
        }
        parent
    }
}
