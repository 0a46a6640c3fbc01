use std::collections::HashMap;

use dynval_core::Value;
use dynval_store::Store;

#[test]
fn set_has_match_remove_round_trip() {
    let mut store = Store::new();
    store.set("day", "build");
    assert!(store.has(&"day"));
    assert!(store.has_match(&"day", &"build"));
    assert!(!store.has_match(&"day", &"rest"));
    store.remove(&"day");
    assert!(!store.has(&"day"));
}

#[test]
fn last_write_wins() {
    let mut store = Store::new();
    store.set("k", 1);
    store.set("k", 2);
    assert_eq!(store.get(&"k"), Some(&2));
    assert_eq!(store.len(), 1);
}

#[test]
fn get_and_remove_report_absence() {
    let mut store: Store<&str, u32> = Store::new();
    assert_eq!(store.get(&"missing"), None);
    assert_eq!(store.remove(&"missing"), None);
    assert!(!store.has_match(&"missing", &1));
    assert!(store.is_empty());
}

#[test]
fn clone_from_store_copies_every_entry() {
    let mut src = Store::new();
    src.set("a", 1);
    src.set("b", 2);

    let mut dst = Store::new();
    dst.set("b", 0);
    dst.set("c", 3);
    dst.clone_from_store(&src);

    assert_eq!(dst.len(), 3);
    assert_eq!(dst.get(&"a"), Some(&1));
    assert_eq!(dst.get(&"b"), Some(&2));
    assert_eq!(dst.get(&"c"), Some(&3));
}

#[test]
fn raw_map_conversions() {
    let mut raw = HashMap::new();
    raw.insert("a", 1);

    let mut store = Store::from(raw.clone());
    assert!(store.has(&"a"));

    raw.insert("b", 2);
    store.extend_from_map(raw);
    assert_eq!(store.len(), 2);
    assert_eq!(store.as_map().get(&"b"), Some(&2));

    let collected: Store<_, _> = [("x", 1), ("y", 2)].into_iter().collect();
    assert_eq!(collected.len(), 2);
}

#[test]
fn stored_values_match_by_native_equality_only() {
    // The store compares with PartialEq, not the width-agnostic comparator:
    // an i32 entry does not match an i64 probe of the same number.
    let mut store = Store::new();
    store.set("n", Value::I32(5));
    assert!(store.has_match(&"n", &Value::I32(5)));
    assert!(!store.has_match(&"n", &Value::I64(5)));
}

#[test]
fn iteration_sees_every_entry() {
    let mut store = Store::new();
    store.set(1, "one");
    store.set(2, "two");

    let mut seen: Vec<_> = store.iter().map(|(k, v)| (*k, *v)).collect();
    seen.sort();
    assert_eq!(seen, [(1, "one"), (2, "two")]);

    let mut seen: Vec<_> = (&store).into_iter().map(|(k, v)| (*k, *v)).collect();
    seen.sort();
    assert_eq!(seen, [(1, "one"), (2, "two")]);
}
