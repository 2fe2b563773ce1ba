use std::fmt::Debug;

use crate::types::RbNode;

/// Debug dump of the subtree at `node`, one node per line with its color,
/// key and payload.
pub fn print<K: Debug, V: Debug>(arena: &[RbNode<K, V>], node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let child_tab = format!("{tab}  ");
            let left = print(arena, n.l, &child_tab);
            let right = print(arena, n.r, &child_tab);
            format!(
                "Node[{i}] {} {{ {:?} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.color, n.k, n.v
            )
        }
    }
}
