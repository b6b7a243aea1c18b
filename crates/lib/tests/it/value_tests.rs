//! The Value node type: conversions, comparisons, rendering.

use grove::tree::{List, Map, TreeError, Value};

#[test]
fn test_shape_predicates() {
    assert!(Value::Null.is_scalar());
    assert!(Value::Int(1).is_scalar());
    assert!(Value::Map(Map::new()).is_container());
    assert!(Value::List(List::new()).is_container());
    assert!(Value::Null.is_null());
    assert!(!Value::Bool(false).is_null());
}

#[test]
fn test_type_names() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::Bool(true).type_name(), "bool");
    assert_eq!(Value::Int(1).type_name(), "int");
    assert_eq!(Value::Float(1.5).type_name(), "float");
    assert_eq!(Value::Text("s".to_string()).type_name(), "text");
    assert_eq!(Value::Map(Map::new()).type_name(), "map");
    assert_eq!(Value::List(List::new()).type_name(), "list");
}

#[test]
fn test_from_conversions() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(42i64), Value::Int(42));
    assert_eq!(Value::from(42i32), Value::Int(42));
    assert_eq!(Value::from(2.5f64), Value::Float(2.5));
    assert_eq!(Value::from("hi"), Value::Text("hi".to_string()));
    assert_eq!(Value::from(String::from("hi")), Value::Text("hi".to_string()));
}

#[test]
fn test_primitive_comparisons() {
    let text = Value::Text("hello".to_string());
    let number = Value::Int(42);
    let flag = Value::Bool(true);

    assert!(text == "hello");
    assert!("hello" == text);
    assert!(number == 42);
    assert!(42 == number);
    assert!(flag == true);

    assert!(!(text == 42));
    assert!(!(number == "hello"));
}

#[test]
fn test_typed_extraction() {
    let map = Map::new()
        .with("name", "Alice")
        .with("age", 30)
        .with("active", true);

    assert_eq!(map.get_as::<&str>("name"), Some("Alice"));
    assert_eq!(map.get_as::<String>("name"), Some("Alice".to_string()));
    assert_eq!(map.get_as::<i64>("age"), Some(30));
    assert_eq!(map.get_as::<bool>("active"), Some(true));

    // Wrong shape and missing key both read as absent
    assert_eq!(map.get_as::<i64>("name"), None);
    assert_eq!(map.get_as::<i64>("missing"), None);
}

#[test]
fn test_try_from_reports_type_mismatch() {
    let value = Value::Int(1);
    let err = <&str>::try_from(&value).unwrap_err();
    assert!(matches!(err, TreeError::TypeMismatch { .. }));
    assert!(err.is_type_error());

    let err: grove::Error = err.into();
    assert!(err.is_type_error());
    assert_eq!(err.module(), "tree");
}

#[test]
fn test_map_basic_operations() {
    let mut map = Map::new();
    assert!(map.is_empty());

    assert!(map.set("k", 1).is_none());
    assert_eq!(map.set("k", 2), Some(Value::Int(1)));
    assert_eq!(map.len(), 1);
    assert!(map.contains_key("k"));

    assert_eq!(map.remove("k"), Some(Value::Int(2)));
    assert!(map.remove("k").is_none());
    assert!(map.is_empty());
}

#[test]
fn test_list_basic_operations() {
    let mut list = List::new();
    assert_eq!(list.push("a"), 0);
    assert_eq!(list.push("b"), 1);
    list.insert(1, "between");

    assert_eq!(list.len(), 3);
    assert_eq!(list.get(1), Some(&Value::Text("between".to_string())));
    assert_eq!(list.position_of(&Value::Text("b".to_string())), Some(2));

    assert_eq!(list.remove(0), Some(Value::Text("a".to_string())));
    assert_eq!(list.remove(9), None);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_json_round_trip() {
    let original = Value::Map(
        Map::new()
            .with("n", 1)
            .with("x", 2.5)
            .with("s", "text")
            .with("flag", false)
            .with("nothing", Value::Null)
            .with("nested", Map::new().with("deep", 9))
            .with("items", {
                let mut list = List::new();
                list.push(1);
                list.push("two");
                Value::List(list)
            }),
    );

    let json = original.to_json();
    let back = Value::from(json);
    assert_eq!(back, original);
}

#[test]
fn test_to_json_string() {
    assert_eq!(Value::Text("hello".to_string()).to_json_string(), "\"hello\"");
    assert_eq!(Value::Null.to_json_string(), "null");
    assert_eq!(Value::Int(3).to_json_string(), "3");
    assert_eq!(
        Map::new().with("k", 1).to_json_string(),
        "{\"k\":1}"
    );
}

#[test]
fn test_serde_round_trip() {
    let original = Value::Map(Map::new().with("a", 1).with("b", Map::new().with("c", true)));

    let encoded = serde_json::to_string(&original).expect("serialize");
    let decoded: Value = serde_json::from_str(&encoded).expect("deserialize");
    assert_eq!(decoded, original);
}

#[test]
fn test_display() {
    assert_eq!(Value::Int(5).to_string(), "5");
    assert_eq!(Value::Text("s".to_string()).to_string(), "s");
    assert_eq!(Map::new().with("k", 1).to_string(), "{k: 1}");

    let mut list = List::new();
    list.push(1);
    list.push(2);
    assert_eq!(Value::List(list).to_string(), "[1, 2]");
}

#[test]
fn test_from_iterators() {
    let map: Map = vec![("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("b"), Some(&Value::Int(2)));

    let list: List = vec![1, 2, 3].into_iter().collect();
    assert_eq!(list.len(), 3);
}

#[test]
fn test_deep_merge_recurses_into_maps() {
    let base = Map::new()
        .with("scalar", 1)
        .with(
            "nested",
            Map::new().with("keep", "old").with("replace", "old"),
        )
        .with("clobbered", Map::new().with("x", 1));
    let overlay = Map::new()
        .with("nested", Map::new().with("replace", "new").with("extra", 9))
        .with("clobbered", "flat")
        .with("added", true);

    let merged = base.deep_merge(&overlay);

    // Untouched and added keys both survive
    assert_eq!(merged.get("scalar"), Some(&Value::Int(1)));
    assert_eq!(merged.get("added"), Some(&Value::Bool(true)));

    // Nested maps merge key by key
    let nested = merged.get("nested").unwrap().as_map().unwrap();
    assert_eq!(nested.get("keep"), Some(&Value::Text("old".to_string())));
    assert_eq!(nested.get("replace"), Some(&Value::Text("new".to_string())));
    assert_eq!(nested.get("extra"), Some(&Value::Int(9)));

    // A non-map value on either side replaces wholesale
    assert_eq!(merged.get("clobbered"), Some(&Value::Text("flat".to_string())));
}

#[test]
fn test_deep_merge_with_empty_maps() {
    let map = Map::new().with("a", 1);
    assert_eq!(map.deep_merge(&Map::new()), map);
    assert_eq!(Map::new().deep_merge(&map), map);
}

#[test]
fn test_builder_methods() {
    let map = Map::new()
        .with_bool("flag", true)
        .with_int("n", 7)
        .with_float("x", 0.5)
        .with_text("s", "v")
        .with_list("items", List::new())
        .with_map("inner", Map::new());

    assert_eq!(map.len(), 6);
    assert_eq!(map.get("n"), Some(&Value::Int(7)));
    assert_eq!(map.get("inner"), Some(&Value::Map(Map::new())));
}
