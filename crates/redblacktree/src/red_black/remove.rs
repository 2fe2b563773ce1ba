//! Node removal with transplant and the double-black fixup
//! (Cormen et al., RB-DELETE / RB-DELETE-FIXUP).

use tracing::trace;

use super::rotate::rotate;
use super::{is_red, set_color};
use crate::types::{Color, Direction, RbNode};
use crate::util::{
    child, get_l, get_p, get_r, minimum, replace_child, set_l, set_p, set_r,
};

/// Puts `v` in the place `u` occupies under its parent (or at the root).
///
/// `v` may be absent. `u`'s own links are left as they were.
pub fn transplant<K, V>(
    arena: &mut [RbNode<K, V>],
    root: Option<u32>,
    u: u32,
    v: Option<u32>,
) -> Option<u32> {
    let up = get_p(arena, u);
    let root = replace_child(arena, root, up, u, v);
    if let Some(v) = v {
        set_p(arena, v, up);
    }
    root
}

/// Unlinks `z`, rebalances, and frees its arena slot.
///
/// Returns the new root and the removed node. The slot is reclaimed by
/// moving the last arena node into it, so that node's index changes to `z`.
pub fn remove<K, V>(
    arena: &mut Vec<RbNode<K, V>>,
    mut root: Option<u32>,
    z: u32,
) -> (Option<u32>, RbNode<K, V>) {
    let zl = get_l(arena, z);
    let zr = get_r(arena, z);
    let mut removed_color = arena[z as usize].color;
    let x: Option<u32>;
    let x_parent: Option<u32>;

    match (zl, zr) {
        (None, _) => {
            trace!(node = z, "remove: no left child");
            x = zr;
            x_parent = get_p(arena, z);
            root = transplant(arena, root, z, zr);
        }
        (Some(l), None) => {
            trace!(node = z, "remove: no right child");
            x = Some(l);
            x_parent = get_p(arena, z);
            root = transplant(arena, root, z, Some(l));
        }
        (Some(l), Some(r)) => {
            let y = minimum(arena, r);
            trace!(node = z, successor = y, "remove: two children");
            removed_color = arena[y as usize].color;
            x = get_r(arena, y);
            if get_p(arena, y) == Some(z) {
                x_parent = Some(y);
                if let Some(x) = x {
                    set_p(arena, x, Some(y));
                }
            } else {
                x_parent = get_p(arena, y);
                root = transplant(arena, root, y, x);
                set_r(arena, y, Some(r));
                set_p(arena, r, Some(y));
            }
            root = transplant(arena, root, z, Some(y));
            set_l(arena, y, Some(l));
            set_p(arena, l, Some(y));
            let z_color = arena[z as usize].color;
            set_color(arena, y, z_color);
        }
    }

    if removed_color == Color::Black {
        root = delete_fixup(arena, root, x, x_parent);
    }

    release(arena, root, z)
}

/// Restores the red-black properties after a black node was removed.
///
/// `x` carries the extra black. It may be absent (the nil leaf that took the
/// removed node's place), in which case `x_parent` says where it hangs.
/// Cases are written once for `x` on `side` of its parent; `w` is the
/// sibling:
///
/// 1. `w` red: recolor, rotate the parent towards `x`, refresh `w`.
/// 2. both of `w`'s children black: recolor `w` red, move up.
/// 3. `w`'s far child black, near child red: recolor, rotate `w` away from
///    `x`, refresh `w`. Turns into case 4.
/// 4. `w`'s far child red: recolor, rotate the parent towards `x`. Done.
///
/// `x` is colored black on the way out.
pub fn delete_fixup<K, V>(
    arena: &mut [RbNode<K, V>],
    mut root: Option<u32>,
    mut x: Option<u32>,
    mut x_parent: Option<u32>,
) -> Option<u32> {
    trace!(node = ?x, parent = ?x_parent, "delete fixup");
    while x != root && !is_red(arena, x) {
        let Some(p) = x_parent else {
            break;
        };
        let side = if get_l(arena, p) == x {
            Direction::Left
        } else {
            Direction::Right
        };
        let far = side.opposite();
        trace!(parent = p, %side, "x side");

        let mut w = child(arena, p, far).expect("double-black node has a sibling");
        if is_red(arena, Some(w)) {
            trace!("case 1");
            set_color(arena, w, Color::Black);
            set_color(arena, p, Color::Red);
            root = rotate(arena, root, p, side);
            w = child(arena, p, far).expect("case 1 leaves a sibling");
        }

        let near_child = child(arena, w, side);
        let far_child = child(arena, w, far);
        if !is_red(arena, near_child) && !is_red(arena, far_child) {
            trace!("case 2");
            set_color(arena, w, Color::Red);
            x = Some(p);
            x_parent = get_p(arena, p);
            continue;
        }

        if !is_red(arena, far_child) {
            trace!("case 3");
            let near_child = near_child.expect("case 3 near child is red");
            set_color(arena, near_child, Color::Black);
            set_color(arena, w, Color::Red);
            root = rotate(arena, root, w, far);
            w = child(arena, p, far).expect("case 3 leaves a sibling");
        }

        trace!("case 4");
        let parent_color = arena[p as usize].color;
        set_color(arena, w, parent_color);
        set_color(arena, p, Color::Black);
        if let Some(fc) = child(arena, w, far) {
            set_color(arena, fc, Color::Black);
        }
        root = rotate(arena, root, p, side);
        x = root;
        x_parent = None;
    }
    trace!("=> bye");

    if let Some(x) = x {
        set_color(arena, x, Color::Black);
    }
    root
}

/// Drops the unlinked node at `z`, moving the last arena node into its slot
/// and pointing its neighbours at the new index.
fn release<K, V>(
    arena: &mut Vec<RbNode<K, V>>,
    mut root: Option<u32>,
    z: u32,
) -> (Option<u32>, RbNode<K, V>) {
    let last = (arena.len() - 1) as u32;
    let node = arena.swap_remove(z as usize);
    if z == last {
        return (root, node);
    }

    let p = get_p(arena, z);
    root = match p {
        Some(p) => {
            if get_l(arena, p) == Some(last) {
                set_l(arena, p, Some(z));
            } else {
                set_r(arena, p, Some(z));
            }
            root
        }
        None => Some(z),
    };
    if let Some(l) = get_l(arena, z) {
        set_p(arena, l, Some(z));
    }
    if let Some(r) = get_r(arena, z) {
        set_p(arena, r, Some(z));
    }
    (root, node)
}
