//! Key-validating wrapper around [`Tree`].
//!
//! [`CheckedTree`] only stores keys that pass [`must_be_valid_key`].
//! Mutation reports a bad key as an error; the lookups treat it as a key
//! that is not there:
//!
//! | operation | invalid key |
//! |-----------|-------------|
//! | `put` | `Err(KeyIsNil)` / `Err(KeyDisallowed(_))` |
//! | `get`, `has`, `get_parent` | not found |
//! | `delete` | no-op |
//! | `try_get`, `try_has` | `Err(..)` |

use std::fmt::Display;

use tracing::debug;

use crate::comparator::default_comparator;
use crate::error::Result;
use crate::key::{must_be_valid_key, KeyShape};
use crate::red_black::Lookup;
use crate::tree::Tree;
use crate::visitor::{Visitable, Visitor};

pub struct CheckedTree<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    inner: Tree<K, V, C>,
}

impl<K, V> CheckedTree<K, V, fn(&K, &K) -> i32>
where
    K: KeyShape + Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V> Default for CheckedTree<K, V, fn(&K, &K) -> i32>
where
    K: KeyShape + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> CheckedTree<K, V, C>
where
    K: KeyShape,
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            inner: Tree::with_comparator(comparator),
        }
    }

    pub fn with_dispatch(self, dispatch: tracing::Dispatch) -> Self {
        Self {
            inner: self.inner.with_dispatch(dispatch),
        }
    }

    pub fn inner(&self) -> &Tree<K, V, C> {
        &self.inner
    }

    pub fn into_inner(self) -> Tree<K, V, C> {
        self.inner
    }

    pub fn put(&mut self, key: K, value: V) -> Result<()> {
        must_be_valid_key(&key)?;
        self.inner.put(key, value);
        Ok(())
    }

    /// `None` for missing and for invalid keys alike.
    pub fn get(&self, key: &K) -> Option<&V> {
        if !valid(key) {
            return None;
        }
        self.inner.get(key)
    }

    pub fn has(&self, key: &K) -> bool {
        valid(key) && self.inner.has(key)
    }

    pub fn get_parent(&self, key: &K) -> Lookup {
        if !valid(key) {
            return Lookup::NOT_FOUND;
        }
        self.inner.get_parent(key)
    }

    /// Like [`get`](Self::get), but reports an invalid key.
    pub fn try_get(&self, key: &K) -> Result<Option<&V>> {
        must_be_valid_key(key)?;
        Ok(self.inner.get(key))
    }

    /// Like [`has`](Self::has), but reports an invalid key.
    pub fn try_has(&self, key: &K) -> Result<bool> {
        must_be_valid_key(key)?;
        Ok(self.inner.has(key))
    }

    pub fn delete(&mut self, key: &K) -> Option<V> {
        if !self.has(key) {
            return None;
        }
        self.inner.delete(key)
    }

    pub fn size(&self) -> usize {
        self.inner.size()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn walk<W: Visitor<K, V>>(&self, visitor: &mut W) {
        self.inner.walk(visitor)
    }

    pub fn assert_valid(&self) -> std::result::Result<(), String> {
        self.inner.assert_valid()
    }
}

impl<K, V, C> CheckedTree<K, V, C>
where
    K: KeyShape + Display,
    C: Fn(&K, &K) -> i32,
{
    pub fn fingerprint(&self) -> String {
        self.inner.fingerprint()
    }
}

impl<K, V, C> Visitable<K, V> for CheckedTree<K, V, C>
where
    K: KeyShape,
    C: Fn(&K, &K) -> i32,
{
    fn walk<W: Visitor<K, V>>(&self, visitor: &mut W) {
        self.inner.walk(visitor)
    }
}

fn valid<K: KeyShape>(key: &K) -> bool {
    match must_be_valid_key(key) {
        Ok(()) => true,
        Err(err) => {
            debug!(%err, "query with invalid key");
            false
        }
    }
}
