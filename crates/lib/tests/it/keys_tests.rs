//! Recursive key rewriting and null pruning.

use grove::tree::{List, Map, Value};

fn identity(key: &str) -> String {
    key.to_string()
}

#[test]
fn test_identity_rewrite_prunes_nulls() {
    // {:x 1, :y nil} with an always-true predicate and identity keyFn
    // yields {:x 1}
    let map = Map::new().with("x", 1).with("y", Value::Null);

    let result = map.update_keys(|_, _| true, identity);
    assert_eq!(result, Map::new().with("x", 1));
}

#[test]
fn test_always_false_predicate_only_prunes() {
    let map = Map::new()
        .with("keep", "value")
        .with("dead", Value::Null)
        .with("nested", Map::new().with("inner", Value::Null).with("n", 1));

    let result = map.update_keys(|_, _| false, str::to_uppercase);

    // No key was rewritten anywhere
    assert!(result.contains_key("keep"));
    assert!(result.contains_key("nested"));
    // Null-valued entries are pruned at every level regardless
    assert!(!result.contains_key("dead"));
    let nested = result.get("nested").unwrap().as_map().unwrap();
    assert!(!nested.contains_key("inner"));
    assert_eq!(nested.get("n"), Some(&Value::Int(1)));
}

#[test]
fn test_rewrite_applies_everywhere_by_default() {
    let map = Map::new()
        .with("outer", Map::new().with("inner", 1))
        .with("plain", 2);

    let result = map.update_keys(|_, _| true, str::to_uppercase);

    assert_eq!(result.get_at(&grove::path!("OUTER.INNER")), Some(&Value::Int(1)));
    assert_eq!(result.get("PLAIN"), Some(&Value::Int(2)));
    assert!(!result.contains_key("outer"));
}

#[test]
fn test_parent_key_context_gates_rewrites() {
    let map = Map::new()
        .with("config", Map::new().with("x", 1))
        .with("other", Map::new().with("x", 2));

    // Rewrite only keys whose parent is "config"; top-level keys have no
    // parent and are left alone.
    let result = map.update_keys(|_, parent| parent == Some("config"), str::to_uppercase);

    assert_eq!(
        result.get("config").unwrap().as_map().unwrap().get("X"),
        Some(&Value::Int(1))
    );
    assert_eq!(
        result.get("other").unwrap().as_map().unwrap().get("x"),
        Some(&Value::Int(2))
    );
}

#[test]
fn test_lists_are_recursed_but_not_rekeyed() {
    let mut items = List::new();
    items.push(Map::new().with("label", "a").with("gone", Value::Null));
    items.push(Value::Null);
    let map = Map::new().with("items", Value::List(items));

    let result = map.update_keys(|_, _| true, str::to_uppercase);

    let items = result.get("ITEMS").unwrap().as_list().unwrap();
    // Null list elements are not entries, so they survive
    assert_eq!(items.len(), 2);
    assert_eq!(items.get(1), Some(&Value::Null));

    // Maps inside the list are rewritten with the list's key as parent
    let first = items.get(0).unwrap().as_map().unwrap();
    assert_eq!(first.get("LABEL"), Some(&Value::Text("a".to_string())));
    assert!(!first.contains_key("GONE"));
    assert!(!first.contains_key("gone"));
}

#[test]
fn test_parent_context_flows_through_lists() {
    let mut items = List::new();
    items.push(Map::new().with("x", 1));
    let map = Map::new().with("wrapped", Value::List(items));

    // The map element's keys see "wrapped" as their parent key
    let result = map.update_keys(|_, parent| parent == Some("wrapped"), str::to_uppercase);

    let items = result.get("wrapped").unwrap().as_list().unwrap();
    let element = items.get(0).unwrap().as_map().unwrap();
    assert_eq!(element.get("X"), Some(&Value::Int(1)));
}

#[test]
fn test_deep_nesting_and_mixed_pruning() {
    let map = Map::new().with(
        "a",
        Map::new()
            .with("b", Map::new().with("c", Value::Null))
            .with("d", 4),
    );

    let result = map.update_keys(|_, _| false, identity);

    // c is pruned; its parent b remains (it is a map, not null)
    let b = result
        .get("a")
        .unwrap()
        .as_map()
        .unwrap()
        .get("b")
        .unwrap()
        .as_map()
        .unwrap();
    assert!(b.is_empty());
    assert_eq!(result.get_at(&grove::path!("a.d")), Some(&Value::Int(4)));
}
