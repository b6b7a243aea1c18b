//! Recursive map-key rewriting.
//!
//! [`Map::update_keys`] rewrites keys throughout a nested tree, guided by a
//! predicate over the current key and its parent key, and prunes entries
//! whose value is null.

use super::value::Value;
use crate::tree::Map;

impl Map {
    /// Recursively rewrites keys in this map and every nested map.
    ///
    /// For each entry, nested containers are transformed first, with the
    /// entry's key as the parent-key context for the level below (`None` at
    /// the root). The key itself is then passed through `key_fn` when
    /// `should_update(key, parent_key)` holds, and kept as-is otherwise.
    /// Lists are walked element-wise; no keys exist at that level, but maps
    /// inside them are still rewritten.
    ///
    /// Entries whose value is null after recursion are dropped entirely.
    /// This applies both to values that were null in the input and to values
    /// that reduced to null during the rewrite; callers rely on null meaning
    /// "remove this entry". Null elements inside lists are kept, since they
    /// are not entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::tree::{Map, Value};
    ///
    /// let map = Map::new().with("x", 1).with("y", Value::Null);
    /// let result = map.update_keys(|_, _| true, str::to_uppercase);
    ///
    /// assert_eq!(result.get("X"), Some(&Value::Int(1)));
    /// assert!(!result.contains_key("Y")); // null entry pruned
    /// ```
    pub fn update_keys<P, F>(&self, should_update: P, key_fn: F) -> Map
    where
        P: Fn(&str, Option<&str>) -> bool,
        F: Fn(&str) -> String,
    {
        update_map_keys(self, None, &should_update, &key_fn)
    }
}

fn update_map_keys<P, F>(map: &Map, parent_key: Option<&str>, should_update: &P, key_fn: &F) -> Map
where
    P: Fn(&str, Option<&str>) -> bool,
    F: Fn(&str) -> String,
{
    map.iter()
        .filter_map(|(key, value)| {
            let rewritten = update_value_keys(value, key, should_update, key_fn);
            if rewritten.is_null() {
                return None;
            }
            let new_key = if should_update(key, parent_key) {
                key_fn(key)
            } else {
                key.clone()
            };
            Some((new_key, rewritten))
        })
        .collect()
}

fn update_value_keys<P, F>(value: &Value, parent_key: &str, should_update: &P, key_fn: &F) -> Value
where
    P: Fn(&str, Option<&str>) -> bool,
    F: Fn(&str) -> String,
{
    match value {
        Value::Map(map) => Value::Map(update_map_keys(
            map,
            Some(parent_key),
            should_update,
            key_fn,
        )),
        Value::List(list) => Value::List(
            list.iter()
                .map(|element| update_value_keys(element, parent_key, should_update, key_fn))
                .collect(),
        ),
        scalar => scalar.clone(),
    }
}
