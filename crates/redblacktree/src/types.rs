//! Node, color and direction types.
//!
//! Nodes live in a `Vec`-backed arena owned by the tree. Each link is an
//! `Option<u32>` index into that arena, so the parent back-reference never
//! owns anything and the node graph has no reference cycles.

use std::fmt;

/// Node color. New nodes are red.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("Red"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// Side of a parent a node hangs from.
///
/// `None` is reported for the root, which hangs from no parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    #[default]
    None,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => f.write_str("left"),
            Direction::Right => f.write_str("right"),
            Direction::None => f.write_str("center"),
        }
    }
}

impl Direction {
    /// Mirror side. `None` stays `None`.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::None => Direction::None,
        }
    }
}

/// Parent / left / right links of an arena node.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// A stored `(key, payload)` pair plus its position and color.
#[derive(Clone, Debug)]
pub struct RbNode<K, V> {
    pub(crate) p: Option<u32>,
    pub(crate) l: Option<u32>,
    pub(crate) r: Option<u32>,
    pub(crate) k: K,
    pub(crate) v: V,
    pub(crate) color: Color,
}

impl<K, V> RbNode<K, V> {
    pub fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
            color: Color::Red,
        }
    }

    pub fn key(&self) -> &K {
        &self.k
    }

    pub fn value(&self) -> &V {
        &self.v
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub fn parent(&self) -> Option<u32> {
        self.p
    }

    pub fn left(&self) -> Option<u32> {
        self.l
    }

    pub fn right(&self) -> Option<u32> {
        self.r
    }
}

impl<K, V> Node for RbNode<K, V> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K: fmt::Debug, V> fmt::Display for RbNode<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?} : {})", self.k, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_red_and_unlinked() {
        let n = RbNode::new(7, "payload7");
        assert!(n.is_red());
        assert_eq!(n.parent(), None);
        assert_eq!(n.left(), None);
        assert_eq!(n.right(), None);
        assert_eq!(n.to_string(), "(7 : Red)");
    }

    #[test]
    fn display_names() {
        assert_eq!(Color::Black.to_string(), "Black");
        assert_eq!(Color::default(), Color::Red);
        assert_eq!(Direction::Left.to_string(), "left");
        assert_eq!(Direction::Right.to_string(), "right");
        assert_eq!(Direction::None.to_string(), "center");
    }
}
