//! Insertion fixup (Cormen et al., RB-INSERT-FIXUP).

use tracing::trace;

use super::rotate::rotate;
use super::{is_red, set_color};
use crate::types::{Color, Direction, RbNode};
use crate::util::{child, get_l, get_p};

/// Restores the red-black properties after `z` was linked as a red leaf.
///
/// The loop runs while `z`'s parent is red. The cases are written once for
/// the parent hanging on `side` of the grandparent; the other side is the
/// same with directions swapped:
///
/// 1. uncle red: recolor parent and uncle black, grandparent red, move up.
/// 2. uncle black, `z` is the inner grandchild: rotate the parent away from
///    `z`, which turns it into case 3.
/// 3. uncle black, `z` is the outer grandchild: recolor and rotate the
///    grandparent the other way. The loop ends here.
///
/// The root is colored black on the way out.
pub fn insert_fixup<K, V>(
    arena: &mut [RbNode<K, V>],
    mut root: Option<u32>,
    mut z: u32,
) -> Option<u32> {
    trace!(node = z, "fixup new node");
    loop {
        let Some(p) = get_p(arena, z) else {
            trace!("=> bye, no parent");
            break;
        };
        if !is_red(arena, Some(p)) {
            trace!("=> bye, parent is black");
            break;
        }
        // The root is always black, so a red parent is not the root.
        let g = get_p(arena, p).expect("red parent has a parent");

        let side = if get_l(arena, g) == Some(p) {
            Direction::Left
        } else {
            Direction::Right
        };
        let uncle = child(arena, g, side.opposite());
        trace!(parent = p, grandparent = g, %side, "parent side");

        if let Some(u) = uncle.filter(|&u| is_red(arena, Some(u))) {
            trace!("case 1");
            set_color(arena, p, Color::Black);
            set_color(arena, u, Color::Black);
            set_color(arena, g, Color::Red);
            z = g;
            continue;
        }

        if child(arena, p, side.opposite()) == Some(z) {
            trace!("case 2");
            z = p;
            root = rotate(arena, root, z, side);
        }

        trace!("case 3");
        let p = get_p(arena, z).expect("case 3 node has a parent");
        set_color(arena, p, Color::Black);
        set_color(arena, g, Color::Red);
        root = rotate(arena, root, g, side.opposite());
    }

    if let Some(r) = root {
        set_color(arena, r, Color::Black);
    }
    root
}
