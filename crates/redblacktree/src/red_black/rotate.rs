//! Left and right rotations.
//!
//! A rotation rewires the pivot, its child on the opposite side and the one
//! subtree that moves between them. In-order key sequence is preserved and
//! colors are left alone; recoloring belongs to the fixups.

use tracing::trace;

use crate::types::{Direction, RbNode};
use crate::util::{get_l, get_p, get_r, replace_child, set_l, set_p, set_r};

/// Rotates `x` down to the left; its right child takes its place.
///
/// No-op when `x` is absent, out of the arena, or has no right child.
pub fn rotate_left<K, V>(
    arena: &mut [RbNode<K, V>],
    root: Option<u32>,
    x: Option<u32>,
) -> Option<u32> {
    let Some(x) = x.filter(|&x| (x as usize) < arena.len()) else {
        trace!(pivot = ?x, "rotate left: no pivot, noop");
        return root;
    };
    let Some(y) = get_r(arena, x) else {
        trace!(pivot = x, "rotate left: pivot has no right subtree, noop");
        return root;
    };
    trace!(pivot = x, "rotate left");

    let yl = get_l(arena, y);
    set_r(arena, x, yl);
    if let Some(yl) = yl {
        set_p(arena, yl, Some(x));
    }
    let xp = get_p(arena, x);
    set_p(arena, y, xp);
    let root = replace_child(arena, root, xp, x, Some(y));
    set_l(arena, y, Some(x));
    set_p(arena, x, Some(y));
    root
}

/// Rotates `y` down to the right; its left child takes its place. Inverse
/// of [`rotate_left`].
///
/// No-op when `y` is absent, out of the arena, or has no left child.
pub fn rotate_right<K, V>(
    arena: &mut [RbNode<K, V>],
    root: Option<u32>,
    y: Option<u32>,
) -> Option<u32> {
    let Some(y) = y.filter(|&y| (y as usize) < arena.len()) else {
        trace!(pivot = ?y, "rotate right: no pivot, noop");
        return root;
    };
    let Some(x) = get_l(arena, y) else {
        trace!(pivot = y, "rotate right: pivot has no left subtree, noop");
        return root;
    };
    trace!(pivot = y, "rotate right");

    let xr = get_r(arena, x);
    set_l(arena, y, xr);
    if let Some(xr) = xr {
        set_p(arena, xr, Some(y));
    }
    let yp = get_p(arena, y);
    set_p(arena, x, yp);
    let root = replace_child(arena, root, yp, y, Some(x));
    set_r(arena, x, Some(y));
    set_p(arena, y, Some(x));
    root
}

/// Rotates `pivot` down towards `dir`.
#[inline]
pub(crate) fn rotate<K, V>(
    arena: &mut [RbNode<K, V>],
    root: Option<u32>,
    pivot: u32,
    dir: Direction,
) -> Option<u32> {
    match dir {
        Direction::Left => rotate_left(arena, root, Some(pivot)),
        Direction::Right => rotate_right(arena, root, Some(pivot)),
        Direction::None => root,
    }
}
