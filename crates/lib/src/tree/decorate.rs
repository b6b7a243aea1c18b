//! Path decoration.
//!
//! Annotates every map in a tree with the path used to reach it, under the
//! reserved [`PATH_KEY`] key. Built entirely on [`walk`](super::walk::walk).

use super::{
    list::List,
    path::{Path, Segment},
    value::Value,
    walk::{Parent, walk},
};
use crate::tree::Map;

/// Reserved key holding a map's path from the root.
///
/// Existing entries under this key are overwritten by decoration.
pub const PATH_KEY: &str = "@path";

/// Annotates every map in the tree with its path from the root.
///
/// The path is stored under [`PATH_KEY`] as a list of segments: map keys as
/// text, list positions as integers. Only maps are decorated; lists and
/// scalars pass through untouched (though maps nested inside them are still
/// reached). Descending into a map entry extends the path with the key;
/// descending into a list element extends it with the element's position
/// only when the element is itself a container.
///
/// Decoration is deterministic: re-decorating a decorated tree overwrites
/// the reserved key rather than stacking, so the result equals decorating
/// the original.
///
/// # Examples
///
/// ```
/// use grove::tree::{decorate, Map, Value, PATH_KEY};
///
/// let root = Value::Map(Map::new().with("inner", Map::new().with("leaf", 1)));
/// let decorated = decorate(&root);
///
/// let inner = decorated.as_map().unwrap().get("inner").unwrap();
/// let path = inner.as_map().unwrap().get(PATH_KEY).unwrap();
/// assert_eq!(path.as_list().unwrap().get(0), Some(&Value::Text("inner".to_string())));
/// ```
pub fn decorate(root: &Value) -> Value {
    walk(root, Path::new(), extend_path, attach_path)
}

impl Map {
    /// Decorates this map and every nested map with its path from here.
    ///
    /// See [`decorate`].
    pub fn decorate(&self) -> Map {
        match decorate(&Value::Map(self.clone())) {
            Value::Map(map) => map,
            _ => unreachable!("decorating a map yields a map"),
        }
    }
}

fn extend_path(state: &Path, parent: Parent<'_>, node: &Value) -> Path {
    match parent {
        Parent::Key(_, key) => state.clone().push_segment(Segment::Key(key.to_string())),
        Parent::Index(_, index) if node.is_container() => {
            state.clone().push_segment(Segment::Index(index))
        }
        _ => state.clone(),
    }
}

fn attach_path(state: &Path, node: &Value) -> Value {
    match node {
        Value::Map(map) => {
            let mut decorated = map.clone();
            decorated.set(PATH_KEY, path_value(state));
            Value::Map(decorated)
        }
        other => other.clone(),
    }
}

fn path_value(path: &Path) -> Value {
    let segments: List = path
        .segments()
        .map(|segment| match segment {
            Segment::Key(key) => Value::Text(key.clone()),
            Segment::Index(index) => Value::Int(*index as i64),
            Segment::Wildcard => Value::Text("*".to_string()),
        })
        .collect();
    Value::List(segments)
}
