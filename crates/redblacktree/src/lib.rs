//! Red-black tree map after Cormen et al. (*Introduction to Algorithms*,
//! 3rd ed.), with a pluggable three-way comparator.
//!
//! Nodes live in a `Vec` arena owned by the tree; child and parent "pointers"
//! are `Option<u32>` indices into it, so the parent back-reference never
//! creates an ownership cycle.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`RbNode`], [`Color`], [`Direction`] |
//! | [`comparator`] | [`Comparator`] and the stock integer / byte comparators |
//! | [`key`] | [`KeyShape`] and [`must_be_valid_key`] |
//! | [`red_black`] | lookup, rotations, insertion and deletion fixups, invariant checker |
//! | [`visitor`] | [`Visitor`], [`CountingVisitor`], [`InorderVisitor`] |
//! | [`tree`] | the [`Tree`] facade |
//! | [`checked`] | [`CheckedTree`], which rejects nil and reference-like keys |
//!
//! Trace output goes through `tracing`. Attach a subscriber to a single tree
//! with [`Tree::with_dispatch`], or install a global one.

pub mod checked;
pub mod comparator;
pub mod error;
pub mod key;
pub mod red_black;
pub mod tree;
pub mod types;
mod util;
pub mod visitor;

pub use checked::CheckedTree;
pub use comparator::{bytes_comparator, default_comparator, int_comparator, str_comparator, Comparator};
pub use error::{Result, TreeError};
pub use key::{must_be_valid_key, KeyKind, KeyShape};
pub use red_black::Lookup;
pub use tree::Tree;
pub use types::{Color, Direction, RbNode};
pub use visitor::{CountingVisitor, InorderVisitor, NodeRef, Visitable, Visitor};
