//! Key shape validation for [`CheckedTree`](crate::CheckedTree).
//!
//! The generic [`Tree`](crate::Tree) accepts any key its comparator can
//! order. The checked wrapper additionally insists that keys are plain
//! values: scalars, strings and aggregates of them. An absent key
//! (`Option::None`) is rejected as nil. Handles whose identity is a location
//! or behavior rather than a value (owning pointers, raw pointers, function
//! pointers, collections, channels, trait objects) are rejected as
//! disallowed.
//!
//! Classification looks at the outermost shape only: a tuple is an aggregate
//! whatever it contains.

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, Sender, SyncSender};
use std::sync::Arc;

use crate::error::{Result, TreeError};

/// Runtime shape of a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Nil,
    Bool,
    Int,
    Uint,
    Float,
    Char,
    String,
    Aggregate,
    Pointer,
    Func,
    Map,
    Slice,
    Chan,
    Interface,
}

impl KeyKind {
    pub fn is_allowed(self) -> bool {
        !matches!(
            self,
            KeyKind::Nil
                | KeyKind::Pointer
                | KeyKind::Func
                | KeyKind::Map
                | KeyKind::Slice
                | KeyKind::Chan
                | KeyKind::Interface
        )
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            KeyKind::Nil => "nil",
            KeyKind::Bool => "bool",
            KeyKind::Int => "int",
            KeyKind::Uint => "uint",
            KeyKind::Float => "float",
            KeyKind::Char => "char",
            KeyKind::String => "string",
            KeyKind::Aggregate => "aggregate",
            KeyKind::Pointer => "ptr",
            KeyKind::Func => "func",
            KeyKind::Map => "map",
            KeyKind::Slice => "slice",
            KeyKind::Chan => "chan",
            KeyKind::Interface => "interface",
        };
        f.write_str(s)
    }
}

/// Reports the [`KeyKind`] of a value.
///
/// Implement this for your own struct keys returning
/// [`KeyKind::Aggregate`].
pub trait KeyShape {
    fn kind(&self) -> KeyKind;
}

/// Fails with [`TreeError::KeyIsNil`] or [`TreeError::KeyDisallowed`] unless
/// `key` is a plain value.
pub fn must_be_valid_key<K: KeyShape + ?Sized>(key: &K) -> Result<()> {
    match key.kind() {
        KeyKind::Nil => Err(TreeError::KeyIsNil),
        kind if !kind.is_allowed() => Err(TreeError::KeyDisallowed(kind)),
        _ => Ok(()),
    }
}

macro_rules! impl_kind {
    ($kind:expr => $($t:ty),+ $(,)?) => {
        $(
            impl KeyShape for $t {
                fn kind(&self) -> KeyKind {
                    $kind
                }
            }
        )+
    };
}

impl_kind!(KeyKind::Bool => bool);
impl_kind!(KeyKind::Int => i8, i16, i32, i64, i128, isize);
impl_kind!(KeyKind::Uint => u8, u16, u32, u64, u128, usize);
impl_kind!(KeyKind::Float => f32, f64);
impl_kind!(KeyKind::Char => char);
impl_kind!(KeyKind::String => String, str);
impl_kind!(KeyKind::Aggregate => ());
impl_kind!(KeyKind::Interface => dyn Any, dyn Any + Send, dyn Any + Send + Sync);

impl<T: KeyShape> KeyShape for Option<T> {
    fn kind(&self) -> KeyKind {
        match self {
            Some(v) => v.kind(),
            None => KeyKind::Nil,
        }
    }
}

/// A shared borrow is a view of the value it points at.
impl<T: KeyShape + ?Sized> KeyShape for &T {
    fn kind(&self) -> KeyKind {
        (**self).kind()
    }
}

macro_rules! impl_generic_kind {
    ($kind:expr => $($t:ident),+ $(,)?) => {
        $(
            impl<T: ?Sized> KeyShape for $t<T> {
                fn kind(&self) -> KeyKind {
                    $kind
                }
            }
        )+
    };
}

impl_generic_kind!(KeyKind::Pointer => Box, Rc, Arc);

impl<T: ?Sized> KeyShape for *const T {
    fn kind(&self) -> KeyKind {
        KeyKind::Pointer
    }
}

impl<T: ?Sized> KeyShape for *mut T {
    fn kind(&self) -> KeyKind {
        KeyKind::Pointer
    }
}

impl<T> KeyShape for Vec<T> {
    fn kind(&self) -> KeyKind {
        KeyKind::Slice
    }
}

impl<T> KeyShape for VecDeque<T> {
    fn kind(&self) -> KeyKind {
        KeyKind::Slice
    }
}

impl<T> KeyShape for [T] {
    fn kind(&self) -> KeyKind {
        KeyKind::Slice
    }
}

impl<K, V> KeyShape for BTreeMap<K, V> {
    fn kind(&self) -> KeyKind {
        KeyKind::Map
    }
}

impl<K, V, S> KeyShape for HashMap<K, V, S> {
    fn kind(&self) -> KeyKind {
        KeyKind::Map
    }
}

impl<T> KeyShape for BTreeSet<T> {
    fn kind(&self) -> KeyKind {
        KeyKind::Map
    }
}

impl<T, S> KeyShape for HashSet<T, S> {
    fn kind(&self) -> KeyKind {
        KeyKind::Map
    }
}

impl<T> KeyShape for Sender<T> {
    fn kind(&self) -> KeyKind {
        KeyKind::Chan
    }
}

impl<T> KeyShape for SyncSender<T> {
    fn kind(&self) -> KeyKind {
        KeyKind::Chan
    }
}

impl<T> KeyShape for Receiver<T> {
    fn kind(&self) -> KeyKind {
        KeyKind::Chan
    }
}

impl<T, const N: usize> KeyShape for [T; N] {
    fn kind(&self) -> KeyKind {
        KeyKind::Aggregate
    }
}

macro_rules! impl_fn_kind {
    ($(($($arg:ident),*)),+ $(,)?) => {
        $(
            impl<R, $($arg),*> KeyShape for fn($($arg),*) -> R {
                fn kind(&self) -> KeyKind {
                    KeyKind::Func
                }
            }
        )+
    };
}

impl_fn_kind!((), (A), (A, B), (A, B, C));

macro_rules! impl_tuple_kind {
    ($(($($t:ident),+)),+ $(,)?) => {
        $(
            impl<$($t),+> KeyShape for ($($t,)+) {
                fn kind(&self) -> KeyKind {
                    KeyKind::Aggregate
                }
            }
        )+
    };
}

impl_tuple_kind!((A), (A, B), (A, B, C), (A, B, C, D));
