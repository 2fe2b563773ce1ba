//! `rbt-demo`: build a tree from integer keys and show its shape.
//!
//! Usage:
//!   rbt-demo [KEY...]
//!
//! Keys are inserted in the order given (default `7 3 1`), each mapped to
//! `payload<KEY>`. Prints the size and in-order fingerprint, then deletes
//! the first key. Set `RUST_LOG=redblacktree=trace` to watch the fixups.

use redblacktree::Tree;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let keys: Vec<i64> = if args.is_empty() {
        vec![7, 3, 1]
    } else {
        match args.iter().map(|a| a.parse::<i64>()).collect::<Result<Vec<_>, _>>() {
            Ok(keys) => keys,
            Err(e) => {
                eprintln!("Keys must be integers: {e}");
                std::process::exit(1);
            }
        }
    };

    let mut tree = Tree::new();
    println!("tree.has({}) = {}", keys[0], tree.has(&keys[0]));
    for &k in &keys {
        tree.put(k, format!("payload{k}"));
    }

    println!("size = {}", tree.size());
    println!("tree = {}", tree.fingerprint());
    if let Some(payload) = tree.get(&keys[0]) {
        println!("{} is mapped to {payload}", keys[0]);
    }

    tree.delete(&keys[0]);
    println!("tree.has({}) = {}", keys[0], tree.has(&keys[0]));
    println!("tree = {}", tree.fingerprint());

    if let Err(e) = tree.assert_valid() {
        eprintln!("invariant violated: {e}");
        std::process::exit(1);
    }
}
