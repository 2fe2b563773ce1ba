use crate::types::{Direction, RbNode};
use crate::util::{child, get_l, get_r};

/// Outcome of a key search.
///
/// `parent` is the last node visited above the match (or above the empty
/// slot the key would occupy), and `dir` is the side of `parent` that was
/// descended into. A match at the root has no parent and direction
/// [`Direction::None`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lookup {
    pub found: bool,
    pub parent: Option<u32>,
    pub dir: Direction,
}

impl Lookup {
    pub const NOT_FOUND: Lookup = Lookup {
        found: false,
        parent: None,
        dir: Direction::None,
    };

    /// Index of the matched node.
    pub fn node<K, V>(&self, arena: &[RbNode<K, V>], root: Option<u32>) -> Option<u32> {
        if !self.found {
            return None;
        }
        match self.parent {
            None => root,
            Some(p) => child(arena, p, self.dir),
        }
    }
}

/// Descends from `node` towards `key`.
///
/// Pass `None`/[`Direction::None`] as `parent`/`dir` when starting at the
/// root.
pub fn internal_lookup<K, V, C>(
    arena: &[RbNode<K, V>],
    mut parent: Option<u32>,
    mut node: Option<u32>,
    key: &K,
    mut dir: Direction,
    comparator: &C,
) -> Lookup
where
    C: Fn(&K, &K) -> i32 + ?Sized,
{
    while let Some(i) = node {
        let cmp = comparator(key, arena[i as usize].key());
        if cmp == 0 {
            return Lookup {
                found: true,
                parent,
                dir,
            };
        }
        parent = Some(i);
        if cmp < 0 {
            node = get_l(arena, i);
            dir = Direction::Left;
        } else {
            node = get_r(arena, i);
            dir = Direction::Right;
        }
    }
    Lookup {
        found: false,
        parent,
        dir,
    }
}
