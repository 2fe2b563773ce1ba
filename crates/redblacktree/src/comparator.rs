//! Three-way comparators.
//!
//! A comparator returns `-1`, `0` or `1` for `a < b`, `a == b`, `a > b`. The
//! tree performs no ordering of its own; it only looks at the sign.

use std::cmp::Ordering;

/// Comparator used by [`Tree`](crate::Tree).
pub type Comparator<K> = dyn Fn(&K, &K) -> i32;

#[inline]
fn sign(ord: Ordering) -> i32 {
    match ord {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Natural order of any `Ord` key. This is the default for integer keys.
pub fn default_comparator<K: Ord>(a: &K, b: &K) -> i32 {
    sign(a.cmp(b))
}

pub fn int_comparator(a: &i64, b: &i64) -> i32 {
    sign(a.cmp(b))
}

/// Lexicographic byte-sequence order.
pub fn bytes_comparator<T: AsRef<[u8]> + ?Sized>(a: &T, b: &T) -> i32 {
    sign(a.as_ref().cmp(b.as_ref()))
}

pub fn str_comparator(a: &String, b: &String) -> i32 {
    bytes_comparator(a.as_str(), b.as_str())
}
