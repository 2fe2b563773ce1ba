//! Tree walks.
//!
//! [`Tree::walk`](crate::Tree::walk) hands the root to a [`Visitor`] once.
//! Visitors recurse on their own through [`NodeRef::left`] and
//! [`NodeRef::right`] and handle the absent-node case themselves, so a
//! visitor chooses its own traversal order.

use std::fmt;

use crate::types::{Color, RbNode};

/// Borrowed handle to one node of a tree.
pub struct NodeRef<'a, K, V> {
    arena: &'a [RbNode<K, V>],
    index: u32,
}

impl<K, V> Clone for NodeRef<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for NodeRef<'_, K, V> {}

impl<'a, K, V> NodeRef<'a, K, V> {
    pub(crate) fn new(arena: &'a [RbNode<K, V>], index: Option<u32>) -> Option<Self> {
        index.map(|index| Self { arena, index })
    }

    fn node(&self) -> &'a RbNode<K, V> {
        &self.arena[self.index as usize]
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn key(&self) -> &'a K {
        &self.node().k
    }

    pub fn value(&self) -> &'a V {
        &self.node().v
    }

    pub fn color(&self) -> Color {
        self.node().color
    }

    pub fn left(&self) -> Option<Self> {
        Self::new(self.arena, self.node().l)
    }

    pub fn right(&self) -> Option<Self> {
        Self::new(self.arena, self.node().r)
    }

    pub fn parent(&self) -> Option<Self> {
        Self::new(self.arena, self.node().p)
    }
}

pub trait Visitor<K, V> {
    fn visit(&mut self, node: Option<NodeRef<'_, K, V>>);
}

/// Something a [`Visitor`] can walk.
pub trait Visitable<K, V> {
    fn walk<W: Visitor<K, V>>(&self, visitor: &mut W);
}

/// Counts nodes.
#[derive(Clone, Debug, Default)]
pub struct CountingVisitor {
    count: usize,
}

impl CountingVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl<K, V> Visitor<K, V> for CountingVisitor {
    fn visit(&mut self, node: Option<NodeRef<'_, K, V>>) {
        let Some(node) = node else {
            return;
        };
        self.visit(node.left());
        self.count += 1;
        self.visit(node.right());
    }
}

/// Builds the in-order fingerprint of a tree: `(` left key right `)` for
/// each node and `.` for each absent child. `7` with a left child `3`
/// renders as `((.3.)7.)`.
///
/// The buffer accumulates across walks; use a fresh visitor per walk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InorderVisitor {
    buffer: String,
}

impl InorderVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl fmt::Display for InorderVisitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

impl<K: fmt::Display, V> Visitor<K, V> for InorderVisitor {
    fn visit(&mut self, node: Option<NodeRef<'_, K, V>>) {
        let Some(node) = node else {
            self.buffer.push('.');
            return;
        };
        self.buffer.push('(');
        self.visit(node.left());
        self.buffer.push_str(&node.key().to_string());
        self.visit(node.right());
        self.buffer.push(')');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Vec<RbNode<i32, &'static str>> {
        let mut arena = vec![
            RbNode::new(7, "a"),
            RbNode::new(3, "b"),
            RbNode::new(8, "c"),
        ];
        arena[0].l = Some(1);
        arena[0].r = Some(2);
        arena[1].p = Some(0);
        arena[2].p = Some(0);
        arena
    }

    #[test]
    fn counts_and_fingerprints() {
        let arena = arena();
        let root = NodeRef::new(&arena, Some(0));

        let mut counter = CountingVisitor::new();
        counter.visit(root);
        assert_eq!(counter.count(), 3);

        let mut inorder = InorderVisitor::new();
        inorder.visit(root);
        assert_eq!(inorder.as_str(), "((.3.)7(.8.))");
        assert_eq!(inorder.to_string(), "((.3.)7(.8.))");
    }

    #[test]
    fn absent_root() {
        let mut counter = CountingVisitor::new();
        Visitor::<i32, ()>::visit(&mut counter, None);
        assert_eq!(counter.count(), 0);

        let mut inorder = InorderVisitor::new();
        Visitor::<i32, ()>::visit(&mut inorder, None);
        assert_eq!(inorder.as_str(), ".");
    }

    #[test]
    fn node_ref_navigation() {
        let arena = arena();
        let root = NodeRef::new(&arena, Some(0)).unwrap();
        let left = root.left().unwrap();
        assert_eq!(*left.key(), 3);
        assert_eq!(*left.value(), "b");
        assert_eq!(left.color(), Color::Red);
        assert_eq!(left.parent().map(|p| p.index()), Some(0));
        assert!(left.left().is_none());
        assert_eq!(*root.right().unwrap().key(), 8);
    }

    #[test]
    fn fingerprints_compare_equal() {
        let arena = arena();
        let mut a = InorderVisitor::new();
        let mut b = InorderVisitor::new();
        a.visit(NodeRef::new(&arena, Some(0)));
        b.visit(NodeRef::new(&arena, Some(0)));
        assert_eq!(a, b);
        let mut c = InorderVisitor::new();
        c.visit(NodeRef::new(&arena, Some(1)));
        assert_ne!(a, c);
    }
}
