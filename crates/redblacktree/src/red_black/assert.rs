use crate::types::RbNode;
use crate::util::{first, next};

/// Checks every red-black tree invariant, returning the first violation.
///
/// - the root has no parent and is black
/// - every child points back at its parent
/// - no red node has a red child
/// - all paths from a node down to an absent child see the same number of
///   black nodes
/// - keys strictly increase in order
pub fn assert_red_black_tree<K, V, C>(
    arena: &[RbNode<K, V>],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), String>
where
    C: Fn(&K, &K) -> i32 + ?Sized,
{
    let Some(root) = root else {
        return Ok(());
    };

    if arena[root as usize].p.is_some() {
        return Err("Root has parent".to_string());
    }
    if !arena[root as usize].is_black() {
        return Err("Root is not black".to_string());
    }

    fn black_height<K, V>(arena: &[RbNode<K, V>], node: Option<u32>) -> Result<usize, String> {
        let Some(node) = node else {
            return Ok(0);
        };

        let n = &arena[node as usize];
        for (side, c) in [("left", n.l), ("right", n.r)] {
            let Some(c) = c else {
                continue;
            };
            if arena[c as usize].p != Some(node) {
                return Err(format!("Broken parent link on {side} child of node {node}"));
            }
            if n.is_red() && arena[c as usize].is_red() {
                return Err(format!("Red node {node} has red {side} child"));
            }
        }

        let lh = black_height(arena, n.l)?;
        let rh = black_height(arena, n.r)?;
        if lh != rh {
            return Err(format!("Black height mismatch at node {node}: {lh} != {rh}"));
        }

        Ok(lh + usize::from(n.is_black()))
    }

    black_height(arena, Some(root))?;

    let mut curr = first(arena, Some(root));
    let mut prev: Option<u32> = None;
    let mut seen = 0usize;
    while let Some(i) = curr {
        if let Some(prev) = prev {
            let cmp = comparator(arena[prev as usize].key(), arena[i as usize].key());
            if cmp >= 0 {
                return Err(format!("Node order violated between {prev} and {i}"));
            }
        }
        seen += 1;
        prev = Some(i);
        curr = next(arena, i);
    }
    if seen != arena.len() {
        return Err(format!(
            "Reachable nodes ({seen}) differ from arena size ({})",
            arena.len()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::default_comparator;
    use crate::types::Color;

    fn linked(colors: [Color; 3], keys: [i32; 3]) -> Vec<RbNode<i32, ()>> {
        let mut arena: Vec<_> = keys
            .into_iter()
            .zip(colors)
            .map(|(k, c)| {
                let mut n = RbNode::new(k, ());
                n.color = c;
                n
            })
            .collect();
        arena[0].l = Some(1);
        arena[0].r = Some(2);
        arena[1].p = Some(0);
        arena[2].p = Some(0);
        arena
    }

    #[test]
    fn accepts_valid_tree() {
        let arena = linked([Color::Black, Color::Red, Color::Red], [5, 3, 8]);
        assert_red_black_tree(&arena, Some(0), &default_comparator::<i32>).unwrap();
        let empty: Vec<RbNode<i32, ()>> = Vec::new();
        assert_red_black_tree(&empty, None, &default_comparator::<i32>).unwrap();
    }

    #[test]
    fn rejects_each_violation() {
        let cmp = default_comparator::<i32>;

        let red_root = linked([Color::Red, Color::Black, Color::Black], [5, 3, 8]);
        assert_eq!(
            assert_red_black_tree(&red_root, Some(0), &cmp),
            Err("Root is not black".to_string())
        );

        let uneven = linked([Color::Black, Color::Black, Color::Red], [5, 3, 8]);
        assert!(assert_red_black_tree(&uneven, Some(0), &cmp)
            .unwrap_err()
            .starts_with("Black height mismatch"));

        let unordered = linked([Color::Black, Color::Red, Color::Red], [5, 8, 3]);
        assert!(assert_red_black_tree(&unordered, Some(0), &cmp)
            .unwrap_err()
            .starts_with("Node order violated"));

        let mut broken = linked([Color::Black, Color::Red, Color::Red], [5, 3, 8]);
        broken[2].p = None;
        assert!(assert_red_black_tree(&broken, Some(0), &cmp)
            .unwrap_err()
            .starts_with("Broken parent link"));

        let mut red_red = linked([Color::Black, Color::Red, Color::Black], [5, 3, 8]);
        red_red[1].l = Some(2);
        red_red[0].r = None;
        red_red[2].p = Some(1);
        red_red[2].k = 1;
        red_red[2].color = Color::Red;
        assert!(assert_red_black_tree(&red_red, Some(0), &cmp)
            .unwrap_err()
            .starts_with("Red node 1 has red left child"));
    }
}
