use std::rc::Rc;

use redblacktree::{CheckedTree, Direction, KeyKind, KeyShape, TreeError};

fn add(a: i64, b: i64) -> i64 {
    a + b
}

#[test]
fn nil_key_matrix() {
    let mut tree = CheckedTree::<Option<&str>, &str>::new();
    assert_eq!(tree.put(None, "x"), Err(TreeError::KeyIsNil));
    assert!(tree.is_empty());

    assert_eq!(tree.get(&None), None);
    assert!(!tree.has(&None));
    let lookup = tree.get_parent(&None);
    assert!(!lookup.found);
    assert_eq!(lookup.dir, Direction::None);
}

#[test]
fn function_key_matrix() {
    let mut tree = CheckedTree::<fn(i64, i64) -> i64, &str>::new();
    let f: fn(i64, i64) -> i64 = add;
    assert_eq!(
        tree.put(f, "x"),
        Err(TreeError::KeyDisallowed(KeyKind::Func))
    );
    assert_eq!(tree.get(&f), None);
    assert!(!tree.has(&f));
    assert!(!tree.get_parent(&f).found);
    assert_eq!(tree.delete(&f), None);
    assert_eq!(tree.size(), 0);
}

#[test]
fn pointer_and_slice_keys_matrix() {
    let mut boxed = CheckedTree::<Box<i32>, ()>::new();
    assert_eq!(
        boxed.put(Box::new(1), ()),
        Err(TreeError::KeyDisallowed(KeyKind::Pointer))
    );

    let mut shared = CheckedTree::<Rc<i32>, ()>::new();
    assert_eq!(
        shared.put(Rc::new(1), ()),
        Err(TreeError::KeyDisallowed(KeyKind::Pointer))
    );

    let mut sliced = CheckedTree::<Vec<u8>, ()>::new();
    assert_eq!(
        sliced.put(vec![1, 2], ()),
        Err(TreeError::KeyDisallowed(KeyKind::Slice))
    );
    assert_eq!(
        sliced.try_has(&vec![1, 2]),
        Err(TreeError::KeyDisallowed(KeyKind::Slice))
    );
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Point {
    x: i32,
    y: i32,
}

impl KeyShape for Point {
    fn kind(&self) -> KeyKind {
        KeyKind::Aggregate
    }
}

#[test]
fn aggregate_keys_matrix() {
    let mut tree = CheckedTree::new();
    tree.put(Point { x: 1, y: 2 }, "a").unwrap();
    tree.put(Point { x: 0, y: 9 }, "b").unwrap();
    tree.put(Point { x: 1, y: 0 }, "c").unwrap();
    assert_eq!(tree.get(&Point { x: 1, y: 0 }), Some(&"c"));
    assert_eq!(tree.size(), 3);
    tree.assert_valid().unwrap();

    let mut tuples = CheckedTree::new();
    tuples.put((2, 'b'), 2).unwrap();
    tuples.put((1, 'z'), 1).unwrap();
    assert_eq!(tuples.try_get(&(1, 'z')), Ok(Some(&1)));
}

#[test]
fn string_keys_with_byte_order_matrix() {
    let mut tree = CheckedTree::with_comparator(redblacktree::str_comparator);
    for k in ["pear", "apple", "Zebra", "fig"] {
        tree.put(k.to_string(), k.len()).unwrap();
    }
    assert_eq!(tree.fingerprint(), "((.Zebra.)apple((.fig.)pear.))");
    assert_eq!(tree.delete(&"apple".to_string()), Some(5));
    assert!(!tree.has(&"apple".to_string()));
    tree.assert_valid().unwrap();
}

#[test]
fn insert_rotate_delete_through_wrapper_matrix() {
    let mut tree = CheckedTree::new();
    tree.put(7i64, "payload7").unwrap();
    assert_eq!(tree.fingerprint(), "(.7.)");
    tree.put(3, "payload3").unwrap();
    assert_eq!(tree.fingerprint(), "((.3.)7.)");
    tree.put(1, "payload1").unwrap();
    assert_eq!(tree.fingerprint(), "((.1.)3(.7.))");
    assert_eq!(tree.get(&3), Some(&"payload3"));
    assert_eq!(tree.delete(&1), Some("payload1"));
    assert!(!tree.has(&1));
}
