//! Red-black tree algorithms over a node arena.
//!
//! Every function takes the arena plus the current root and returns the new
//! root; the [`Tree`](crate::Tree) facade owns both.

pub mod assert;
pub mod insert;
pub mod lookup;
pub mod print;
pub mod remove;
pub mod rotate;

pub use assert::assert_red_black_tree;
pub use insert::insert_fixup;
pub use lookup::{internal_lookup, Lookup};
pub use print::print;
pub use remove::{delete_fixup, remove, transplant};
pub use rotate::{rotate_left, rotate_right};

use crate::types::{Color, RbNode};

/// Absent children are black.
#[inline]
pub(crate) fn is_red<K, V>(arena: &[RbNode<K, V>], i: Option<u32>) -> bool {
    i.is_some_and(|i| arena[i as usize].is_red())
}

#[inline]
pub(crate) fn set_color<K, V>(arena: &mut [RbNode<K, V>], i: u32, color: Color) {
    arena[i as usize].color = color;
}
