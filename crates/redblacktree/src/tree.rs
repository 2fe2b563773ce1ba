//! The [`Tree`] facade: owns the node arena, the root and the comparator.

use std::fmt::{Debug, Display};

use tracing::{debug, Dispatch};

use crate::comparator::default_comparator;
use crate::red_black::{self, internal_lookup, Lookup};
use crate::types::{Color, Direction, RbNode};
use crate::util::{set_l, set_p, set_r};
use crate::visitor::{CountingVisitor, InorderVisitor, NodeRef, Visitable, Visitor};

/// Runs `f` with `dispatch` as the current subscriber, if there is one.
fn scoped<R>(dispatch: Option<&Dispatch>, f: impl FnOnce() -> R) -> R {
    match dispatch {
        Some(dispatch) => tracing::dispatcher::with_default(dispatch, f),
        None => f(),
    }
}

/// Index the next pushed node gets in an arena of `len` nodes.
fn next_index(len: usize) -> u32 {
    u32::try_from(len).expect("arena index fits in u32")
}

/// Red-black tree map ordered by a three-way comparator.
///
/// Nodes are kept in an arena and addressed by `u32` indices, which
/// [`get_node`](Self::get_node), [`get_parent`](Self::get_parent) and
/// [`root_index`](Self::root_index) expose. An index stays valid until the
/// next [`delete`](Self::delete), which reclaims its slot by moving the
/// last arena node into it.
///
/// Indices are `u32`, so a tree holds at most 2^32 entries; `put` panics
/// past that.
///
/// A tree is used by one owner at a time; share it across threads behind a
/// lock.
///
/// ```
/// use redblacktree::Tree;
///
/// let mut tree = Tree::new();
/// tree.put(7, "payload7");
/// tree.put(3, "payload3");
/// tree.put(1, "payload1");
///
/// assert_eq!(tree.size(), 3);
/// assert_eq!(tree.fingerprint(), "((.1.)3(.7.))");
/// assert_eq!(tree.get(&3), Some(&"payload3"));
///
/// tree.delete(&1);
/// assert!(!tree.has(&1));
/// ```
pub struct Tree<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: Vec<RbNode<K, V>>,
    root: Option<u32>,
    comparator: C,
    dispatch: Option<Dispatch>,
}

impl<K, V> Tree<K, V, fn(&K, &K) -> i32>
where
    K: Ord,
{
    /// Empty tree ordered by `K`'s natural order.
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V> Default for Tree<K, V, fn(&K, &K) -> i32>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> Tree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            comparator,
            dispatch: None,
        }
    }

    /// Routes this tree's trace events to `dispatch` instead of the
    /// current default subscriber.
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn node(&self, idx: u32) -> Option<&RbNode<K, V>> {
        self.arena.get(idx as usize)
    }

    /// Inserts `value` under `key`, replacing the payload if the key is
    /// already present.
    pub fn put(&mut self, key: K, value: V) {
        let dispatch = self.dispatch.clone();
        scoped(dispatch.as_ref(), || self.insert(key, value));
    }

    fn alloc(&mut self, key: K, value: V) -> u32 {
        let idx = next_index(self.arena.len());
        self.arena.push(RbNode::new(key, value));
        idx
    }

    fn insert(&mut self, key: K, value: V) {
        let Some(root) = self.root else {
            let idx = self.alloc(key, value);
            self.arena[idx as usize].color = Color::Black;
            self.root = Some(idx);
            debug!(node = idx, "added root node");
            return;
        };

        let found = internal_lookup(
            &self.arena,
            None,
            Some(root),
            &key,
            Direction::None,
            &self.comparator,
        );
        if let Some(idx) = found.node(&self.arena, self.root) {
            debug!(node = idx, dir = %found.dir, "overwrite payload");
            self.arena[idx as usize].v = value;
            return;
        }

        let parent = found
            .parent
            .expect("a miss below an existing root has a parent");
        let idx = self.alloc(key, value);
        set_p(&mut self.arena, idx, Some(parent));
        if found.dir == Direction::Left {
            set_l(&mut self.arena, parent, Some(idx));
        } else {
            set_r(&mut self.arena, parent, Some(idx));
        }
        debug!(node = idx, parent, dir = %found.dir, "added node");
        self.root = red_black::insert_fixup(&mut self.arena, self.root, idx);
    }

    /// Locates `key`: whether it is present, the node above it and the side
    /// it hangs on. On a miss, `parent`/`dir` name the slot it would take.
    pub fn get_parent(&self, key: &K) -> Lookup {
        if self.root.is_none() {
            return Lookup::NOT_FOUND;
        }
        internal_lookup(
            &self.arena,
            None,
            self.root,
            key,
            Direction::None,
            &self.comparator,
        )
    }

    pub fn get_node(&self, key: &K) -> Option<u32> {
        self.get_parent(key).node(&self.arena, self.root)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_node(key).map(|i| &self.arena[i as usize].v)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.get_node(key)?;
        Some(&mut self.arena[idx as usize].v)
    }

    pub fn has(&self, key: &K) -> bool {
        self.get_parent(key).found
    }

    /// Removes `key`, returning its payload. Absent keys are a no-op.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let z = self.get_node(key)?;
        let dispatch = self.dispatch.clone();
        let removed = scoped(dispatch.as_ref(), || {
            debug!(node = z, "delete");
            let (root, removed) = red_black::remove(&mut self.arena, self.root, z);
            self.root = root;
            removed
        });
        Some(removed.v)
    }

    /// Number of entries, counted by walking the tree.
    pub fn size(&self) -> usize {
        let mut counter = CountingVisitor::new();
        self.walk(&mut counter);
        counter.count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Hands the root (or `None` for an empty tree) to `visitor`.
    pub fn walk<W: Visitor<K, V>>(&self, visitor: &mut W) {
        visitor.visit(NodeRef::new(&self.arena, self.root));
    }

    /// Rotates the node at `x` to the left. No-op when `x` is `None`, names
    /// no live node, or has no right child.
    ///
    /// This is the raw primitive; it does not recolor, so calling it
    /// directly can leave the tree unbalanced.
    pub fn rotate_left(&mut self, x: Option<u32>) {
        let dispatch = self.dispatch.clone();
        self.root = scoped(dispatch.as_ref(), || {
            red_black::rotate_left(&mut self.arena, self.root, x)
        });
    }

    /// Mirror of [`rotate_left`](Self::rotate_left).
    pub fn rotate_right(&mut self, y: Option<u32>) {
        let dispatch = self.dispatch.clone();
        self.root = scoped(dispatch.as_ref(), || {
            red_black::rotate_right(&mut self.arena, self.root, y)
        });
    }

    /// Checks every red-black invariant.
    pub fn assert_valid(&self) -> Result<(), String> {
        red_black::assert_red_black_tree(&self.arena, self.root, &self.comparator)
    }
}

impl<K, V, C> Tree<K, V, C>
where
    K: Display,
    C: Fn(&K, &K) -> i32,
{
    /// In-order fingerprint, see [`InorderVisitor`].
    pub fn fingerprint(&self) -> String {
        let mut visitor = InorderVisitor::new();
        self.walk(&mut visitor);
        visitor.into_string()
    }
}

impl<K, V, C> Tree<K, V, C>
where
    K: Debug,
    V: Debug,
    C: Fn(&K, &K) -> i32,
{
    pub fn print(&self) -> String {
        red_black::print(&self.arena, self.root, "")
    }
}

impl<K, V, C> Visitable<K, V> for Tree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn walk<W: Visitor<K, V>>(&self, visitor: &mut W) {
        Tree::walk(self, visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::{bytes_comparator, Comparator};

    #[test]
    fn empty_tree() {
        let tree = Tree::<i32, &str>::new();
        assert!(tree.is_empty());
        assert_eq!(tree.size(), 0);
        assert_eq!(tree.fingerprint(), ".");
        assert_eq!(tree.get(&1), None);
        assert!(!tree.has(&1));
        assert_eq!(tree.get_parent(&1), Lookup::NOT_FOUND);
        assert_eq!(tree.root_index(), None);
        tree.assert_valid().unwrap();
    }

    #[test]
    fn root_is_black_and_children_red() {
        let mut tree = Tree::new();
        tree.put(7, "payload7");
        tree.put(3, "payload3");
        tree.put(8, "payload8");
        let root = tree.node(tree.root_index().unwrap()).unwrap();
        assert_eq!(root.color(), Color::Black);
        let l = tree.node(root.left().unwrap()).unwrap();
        let r = tree.node(root.right().unwrap()).unwrap();
        assert!(l.is_red());
        assert!(r.is_red());
        assert_eq!(l.parent(), tree.root_index());
    }

    #[test]
    fn get_parent_reports_side() {
        let mut tree = Tree::new();
        tree.put(7, ());
        tree.put(3, ());
        tree.put(8, ());

        let at_root = tree.get_parent(&7);
        assert!(at_root.found);
        assert_eq!(at_root.parent, None);
        assert_eq!(at_root.dir, Direction::None);

        let left = tree.get_parent(&3);
        assert!(left.found);
        assert_eq!(left.parent, tree.root_index());
        assert_eq!(left.dir, Direction::Left);

        let miss = tree.get_parent(&9);
        assert!(!miss.found);
        assert_eq!(miss.parent, tree.get_node(&8));
        assert_eq!(miss.dir, Direction::Right);
    }

    #[test]
    fn get_mut_and_delete_return_payloads() {
        let mut tree = Tree::new();
        tree.put(1, String::from("one"));
        tree.get_mut(&1).unwrap().push('!');
        assert_eq!(tree.get(&1).map(String::as_str), Some("one!"));
        assert_eq!(tree.delete(&1), Some(String::from("one!")));
        assert_eq!(tree.delete(&1), None);
        assert!(tree.is_empty());
    }

    #[test]
    fn clear_resets() {
        let mut tree = Tree::new();
        for i in 0..10 {
            tree.put(i, i);
        }
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.fingerprint(), ".");
    }

    #[test]
    fn boxed_byte_comparator() {
        let cmp: Box<Comparator<String>> = Box::new(bytes_comparator::<String>);
        let mut tree = Tree::with_comparator(cmp);
        for k in ["pear", "apple", "Zebra", "fig"] {
            tree.put(k.to_string(), k.len());
        }
        assert_eq!(tree.fingerprint(), "((.Zebra.)apple((.fig.)pear.))");
        assert_eq!(tree.get(&"fig".to_string()), Some(&3));
        tree.assert_valid().unwrap();
    }

    #[test]
    fn next_index_at_u32_limit() {
        assert_eq!(next_index(0), 0);
        assert_eq!(next_index(u32::MAX as usize), u32::MAX);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    #[should_panic(expected = "arena index fits in u32")]
    fn next_index_past_u32_panics() {
        next_index(u32::MAX as usize + 1);
    }

    #[test]
    fn print_dump() {
        let mut tree = Tree::new();
        tree.put(2, 'b');
        assert_eq!(tree.print(), "Node[0] Black { 2 = 'b' }\nL=∅\nR=∅");
    }
}
