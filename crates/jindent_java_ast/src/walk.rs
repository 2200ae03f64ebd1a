use crate::AstNode;

/// Document-order iterator over a subtree, root included.
pub struct Preorder<'a> {
    root: AstNode<'a>,
    next: Option<AstNode<'a>>,
}

impl<'a> Preorder<'a> {
    pub(crate) fn new(root: AstNode<'a>) -> Self {
        Self {
            root,
            next: Some(root),
        }
    }

    /// Skips the descendants of the node returned last.
    pub fn skip_subtree(&mut self, current: AstNode<'a>) {
        self.next = self.successor_outside(current);
    }

    fn successor_outside(&self, node: AstNode<'a>) -> Option<AstNode<'a>> {
        let mut node = node;
        loop {
            if node == self.root {
                return None;
            }
            if let Some(sibling) = node.next_sibling() {
                return Some(sibling);
            }
            node = node.parent()?;
        }
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = AstNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current
            .first_child()
            .or_else(|| self.successor_outside(current));
        Some(current)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEvent<'a> {
    Enter(AstNode<'a>),
    Leave(AstNode<'a>),
}

/// Enter and leave events for every node of a subtree.
pub struct Events<'a> {
    root: AstNode<'a>,
    next: Option<WalkEvent<'a>>,
}

impl<'a> Events<'a> {
    pub(crate) fn new(root: AstNode<'a>) -> Self {
        Self {
            root,
            next: Some(WalkEvent::Enter(root)),
        }
    }
}

impl<'a> Iterator for Events<'a> {
    type Item = WalkEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let event = self.next?;
        self.next = match event {
            WalkEvent::Enter(node) => Some(
                node.first_child()
                    .map_or(WalkEvent::Leave(node), WalkEvent::Enter),
            ),
            WalkEvent::Leave(node) if node == self.root => None,
            WalkEvent::Leave(node) => match node.next_sibling() {
                Some(sibling) => Some(WalkEvent::Enter(sibling)),
                None => node.parent().map(WalkEvent::Leave),
            },
        };
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Ast, TokenType, WalkEvent};

    #[test]
    fn test_events_are_balanced() {
        let ast = Ast::parse("class A { void f() { int x = 1; } }").unwrap();
        let mut depth = 0i32;
        let mut enters = 0;
        for event in ast.root().events() {
            match event {
                WalkEvent::Enter(_) => {
                    depth += 1;
                    enters += 1;
                }
                WalkEvent::Leave(_) => depth -= 1,
            }
            assert!(depth >= 0);
        }
        assert_eq!(depth, 0);
        assert_eq!(enters, ast.len());
    }

    #[test]
    fn test_preorder_stays_inside_subtree() {
        let ast = Ast::parse("class A { void f() { g(); } int y; }").unwrap();
        let method = ast
            .preorder()
            .find(|n| n.kind() == TokenType::MethodDef)
            .unwrap();
        assert!(method.preorder().all(|n| n.kind() != TokenType::FieldDef));
        assert!(method.preorder().any(|n| n.kind() == TokenType::MethodCall));
    }

    #[test]
    fn test_skip_subtree() {
        let ast = Ast::parse("class A { void f() { g(); } int y; }").unwrap();
        let mut walk = ast.preorder();
        let mut seen = Vec::new();
        while let Some(node) = walk.next() {
            seen.push(node.kind());
            if node.kind() == TokenType::MethodDef {
                walk.skip_subtree(node);
            }
        }
        assert!(seen.contains(&TokenType::FieldDef));
        assert!(!seen.contains(&TokenType::MethodCall));
    }
}
