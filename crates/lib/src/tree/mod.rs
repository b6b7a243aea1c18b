//! Path-addressed nested data.
//!
//! This module is the core of the crate: a polymorphic tree value type and
//! the operations that address, walk, and transform it. [`Map`] is the entry
//! point for the path-addressed operations; [`Value`] is the node type every
//! operation consumes and produces.
//!
//! # Design
//!
//! All operations are purely functional: they take a root by reference and
//! return a new root, aliasing-by-value whatever they did not touch. Nothing
//! is mutated in place, which makes every operation trivially safe to run
//! concurrently over shared inputs.
//!
//! Paths may contain a wildcard segment that fans an operation out to every
//! entry at that level; see [`path`](self::path) for the grammar.
//!
//! # Usage
//!
//! ```
//! use grove::{path, tree::Map};
//!
//! let map = Map::new().with(
//!     "servers",
//!     Map::new()
//!         .with("alpha", Map::new().with("port", 80))
//!         .with("beta", Map::new().with("port", 443)),
//! );
//!
//! // Fan out over every server and bump its port.
//! let shifted = map
//!     .update_at(&path!("servers.*.port"), |port| match port {
//!         grove::tree::Value::Int(n) => grove::tree::Value::Int(n + 8000),
//!         other => other,
//!     })
//!     .unwrap();
//!
//! assert_eq!(shifted.get_at(&path!("servers.alpha.port")).unwrap().as_int(), Some(8080));
//! ```

use std::{collections::HashMap, fmt};

// Submodules
pub mod decorate;
pub mod errors;
pub mod keys;
pub mod list;
pub mod path;
pub mod value;
pub mod walk;

// Convenience re-exports for core tree types
pub use decorate::{PATH_KEY, decorate};
pub use errors::TreeError;
pub use list::List;
pub use path::{Path, Segment};
pub use value::Value;
pub use walk::{Parent, walk};

// Re-export the macro from crate root
pub use crate::path;

/// The keyed container and entry point for path operations.
///
/// `Map` holds string-keyed [`Value`]s with no meaningful ordering: no
/// operation in this crate may observe or depend on iteration order. Beyond
/// plain key-value access it carries the path-addressed operation family:
/// [`get_at`](Map::get_at), [`update_at`](Map::update_at),
/// [`delete_at`](Map::delete_at), [`delete_and_clean`](Map::delete_and_clean)
/// and friends, all of which interpret wildcard-capable [`Path`]s against the
/// nested structure.
///
/// # Examples
///
/// ## Basic Operations
/// ```
/// # use grove::tree::Map;
/// let mut map = Map::new();
/// map.set("name", "Alice");
/// map.set("age", 30);
///
/// assert_eq!(map.get_as::<&str>("name"), Some("Alice"));
/// assert_eq!(map.get_as::<i64>("age"), Some(30));
/// ```
///
/// ## Path Operations
/// ```
/// # use grove::{path, tree::Map};
/// let map = Map::new().with("user", Map::new().with("name", "Alice"));
///
/// let trimmed = map.delete_at(&path!("user.name")).unwrap();
/// assert!(trimmed.get_at(&path!("user.name")).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Map {
    /// Entries indexed by string keys
    entries: HashMap<String, Value>,
}

impl Map {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the map contains the given key
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.entries.contains_key(key.as_ref())
    }

    /// Gets a value by key (immutable reference)
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
        self.entries.get(key.as_ref())
    }

    /// Gets a mutable reference to a value by key
    pub fn get_mut(&mut self, key: impl AsRef<str>) -> Option<&mut Value> {
        self.entries.get_mut(key.as_ref())
    }

    /// Gets a value by key with automatic type conversion using TryFrom.
    ///
    /// Returns `Some(T)` if the value exists and converts; `None` when the
    /// key is absent or the shape does not match.
    ///
    /// ```
    /// # use grove::tree::Map;
    /// let map = Map::new().with("age", 30);
    /// assert_eq!(map.get_as::<i64>("age"), Some(30));
    /// assert_eq!(map.get_as::<&str>("age"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, key: impl AsRef<str>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = TreeError>,
    {
        let value = self.get(key)?;
        T::try_from(value).ok()
    }

    /// Sets a value at the given key, returning the old value if present
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes a value by key, returning it if present
    pub fn remove(&mut self, key: impl AsRef<str>) -> Option<Value> {
        self.entries.remove(key.as_ref())
    }

    /// Returns an iterator over all key-value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Returns a mutable iterator over all key-value pairs
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Value)> {
        self.entries.iter_mut()
    }

    /// Returns an iterator over all keys
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Returns an iterator over all values
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Returns a mutable iterator over all values
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.entries.values_mut()
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Converts to a JSON string for human-readable output
    pub fn to_json_string(&self) -> String {
        Value::Map(self.clone()).to_json_string()
    }
}

// Builder pattern methods
impl Map {
    /// Builder method to set a value and return self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder method to set a boolean value
    pub fn with_bool(self, key: impl Into<String>, value: bool) -> Self {
        self.with(key, Value::Bool(value))
    }

    /// Builder method to set an integer value
    pub fn with_int(self, key: impl Into<String>, value: i64) -> Self {
        self.with(key, Value::Int(value))
    }

    /// Builder method to set a float value
    pub fn with_float(self, key: impl Into<String>, value: f64) -> Self {
        self.with(key, Value::Float(value))
    }

    /// Builder method to set a text value
    pub fn with_text(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(key, Value::Text(value.into()))
    }

    /// Builder method to set a list value
    pub fn with_list(self, key: impl Into<String>, value: impl Into<List>) -> Self {
        self.with(key, Value::List(value.into()))
    }

    /// Builder method to set a nested map
    pub fn with_map(self, key: impl Into<String>, value: impl Into<Map>) -> Self {
        self.with(key, Value::Map(value.into()))
    }
}

// Path-addressed operations
impl Map {
    /// Gets the value at a fully concrete path.
    ///
    /// Concrete segments narrow to one child per level: map children by key
    /// (index segments address their decimal spelling), list children by
    /// position. A wildcard addresses no single location and yields `None`,
    /// as does any missing key or shape mismatch along the way.
    pub fn get_at(&self, path: &Path) -> Option<&Value> {
        let mut segments = path.segments();
        let first = segments.next()?;
        let mut current = self.entries.get(first.map_key()?.as_ref())?;

        for segment in segments {
            match current {
                Value::Map(map) => {
                    current = map.entries.get(segment.map_key()?.as_ref())?;
                }
                Value::List(list) => {
                    // Positional descent; key segments may still address a
                    // list if they spell an index
                    let index = match segment {
                        Segment::Index(index) => *index,
                        Segment::Key(key) => key.parse().ok()?,
                        Segment::Wildcard => return None,
                    };
                    current = list.get(index)?;
                }
                _ => return None,
            }
        }

        Some(current)
    }

    /// Applies `f` to the value(s) addressed by `path`, returning the new map.
    ///
    /// Descent through non-terminal segments touches nothing else: a missing
    /// key anywhere along the path leaves the map unchanged (absence is not
    /// an error), while a non-map value where further descent is required
    /// fails with [`TreeError::NotAMap`]. A wildcard segment recurses
    /// independently into every entry at its level; every original key is
    /// retained and no entry is ever added.
    ///
    /// # Examples
    ///
    /// ```
    /// # use grove::{path, tree::{Map, Value}};
    /// let map = Map::new().with("a", 1).with("b", 2);
    /// let bumped = map
    ///     .update_at(&path!("*"), |v| match v {
    ///         Value::Int(n) => Value::Int(n + 1),
    ///         other => other,
    ///     })
    ///     .unwrap();
    ///
    /// assert_eq!(bumped.get("a"), Some(&Value::Int(2)));
    /// assert_eq!(bumped.get("b"), Some(&Value::Int(3)));
    /// ```
    pub fn update_at<F>(&self, path: &Path, f: F) -> Result<Map, TreeError>
    where
        F: Fn(Value) -> Value,
    {
        let segments: Vec<&Segment> = path.segments().collect();
        if segments.is_empty() {
            return Err(TreeError::EmptyPath);
        }
        update_segments(self, &segments, &f, path)
    }

    /// Conditional [`update_at`](Map::update_at).
    ///
    /// When `condition` is false the map is returned unchanged without
    /// evaluating `f` or inspecting the path.
    pub fn update_at_if<F>(&self, condition: bool, path: &Path, f: F) -> Result<Map, TreeError>
    where
        F: Fn(Value) -> Value,
    {
        if !condition {
            return Ok(self.clone());
        }
        self.update_at(path, f)
    }

    /// Removes the value(s) addressed by `path`, returning the new map.
    ///
    /// A terminal concrete segment removes exactly that key; every sibling
    /// survives exactly once. A terminal wildcard empties the container at
    /// that level. Missing keys along the way are a silent no-op; a non-map
    /// at a non-terminal segment fails with [`TreeError::NotAMap`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use grove::{path, tree::Map};
    /// let map = Map::new().with(
    ///     "a",
    ///     Map::new().with("b", Map::new().with("c", 1).with("d", 2)),
    /// );
    ///
    /// let trimmed = map.delete_at(&path!("a.b.c")).unwrap();
    /// assert!(trimmed.get_at(&path!("a.b.c")).is_none());
    /// assert_eq!(trimmed.get_at(&path!("a.b.d")).unwrap().as_int(), Some(2));
    /// ```
    pub fn delete_at(&self, path: &Path) -> Result<Map, TreeError> {
        self.delete_at_when(path, |_| true)
    }

    /// Predicate-gated [`delete_at`](Map::delete_at).
    ///
    /// Only entries whose value satisfies `pred` are removed; others are
    /// retained unchanged. Under a terminal wildcard the predicate is
    /// evaluated independently per entry.
    pub fn delete_at_when<P>(&self, path: &Path, pred: P) -> Result<Map, TreeError>
    where
        P: Fn(&Value) -> bool,
    {
        let segments: Vec<&Segment> = path.segments().collect();
        if segments.is_empty() {
            return Err(TreeError::EmptyPath);
        }
        delete_segments(self, &segments, &pred, path)
    }

    /// [`delete_at`](Map::delete_at) plus structural cleanup.
    ///
    /// After the deletion, any ancestor container along the path that was
    /// left empty is removed from its own parent, cascading up to (and
    /// including) entries of the root. Containers that were already empty
    /// before the call and untouched by it are left alone.
    ///
    /// # Examples
    ///
    /// ```
    /// # use grove::{path, tree::Map};
    /// let map = Map::new().with("a", Map::new().with("b", Map::new().with("d", 2)));
    ///
    /// // Deleting the only leaf cascades all the way to the root.
    /// let cleaned = map.delete_and_clean(&path!("a.b.d")).unwrap();
    /// assert!(cleaned.is_empty());
    /// ```
    pub fn delete_and_clean(&self, path: &Path) -> Result<Map, TreeError> {
        let mut current = self.delete_at(path)?;
        let mut prefix = path.parent();

        while let Some(parent_path) = prefix {
            match current.get_at(&parent_path) {
                Some(Value::Map(map)) if map.is_empty() => {
                    tracing::trace!(path = %parent_path, "removing container emptied by deletion");
                    current = current.delete_at(&parent_path)?;
                    prefix = parent_path.parent();
                }
                _ => break,
            }
        }

        // The root itself has no parent entry to drop; an emptied root is
        // simply the empty map.
        Ok(current)
    }
}

// Merging
impl Map {
    /// Deep-merges `other` into this map, returning the merged map.
    ///
    /// Keys present in only one map are carried over. When both maps hold a
    /// nested map under the same key the two merge recursively; any other
    /// collision resolves to `other`'s value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use grove::{path, tree::Map};
    /// let base = Map::new()
    ///     .with("kept", 1)
    ///     .with("nested", Map::new().with("a", 1).with("b", 2));
    /// let overlay = Map::new()
    ///     .with("added", 3)
    ///     .with("nested", Map::new().with("b", 20));
    ///
    /// let merged = base.deep_merge(&overlay);
    /// assert_eq!(merged.get_at(&path!("nested.a")).unwrap().as_int(), Some(1));
    /// assert_eq!(merged.get_at(&path!("nested.b")).unwrap().as_int(), Some(20));
    /// assert_eq!(merged.get("kept").unwrap().as_int(), Some(1));
    /// assert_eq!(merged.get("added").unwrap().as_int(), Some(3));
    /// ```
    pub fn deep_merge(&self, other: &Map) -> Map {
        let mut merged = self.clone();
        for (key, theirs) in other.iter() {
            match (merged.get(key), theirs) {
                (Some(Value::Map(ours)), Value::Map(incoming)) => {
                    let combined = ours.deep_merge(incoming);
                    merged.set(key.clone(), Value::Map(combined));
                }
                _ => {
                    merged.set(key.clone(), theirs.clone());
                }
            }
        }
        merged
    }
}

fn update_segments<F>(
    map: &Map,
    segments: &[&Segment],
    f: &F,
    full_path: &Path,
) -> Result<Map, TreeError>
where
    F: Fn(Value) -> Value,
{
    match segments {
        [] => Ok(map.clone()),

        // Terminal segment: apply the update here
        [Segment::Wildcard] => Ok(map
            .iter()
            .map(|(key, value)| (key.clone(), f(value.clone())))
            .collect()),
        [segment] => {
            let key = match segment.map_key() {
                Some(key) => key,
                None => return Ok(map.clone()),
            };
            match map.get(key.as_ref()) {
                Some(value) => {
                    let mut updated = map.clone();
                    updated.set(key.into_owned(), f(value.clone()));
                    Ok(updated)
                }
                None => Ok(map.clone()),
            }
        }

        // Non-terminal wildcard: fan out into every entry
        [Segment::Wildcard, rest @ ..] => map
            .iter()
            .map(|(key, value)| match value {
                Value::Map(child) => Ok((
                    key.clone(),
                    Value::Map(update_segments(child, rest, f, full_path)?),
                )),
                other => Err(not_a_map(full_path, other)),
            })
            .collect(),

        // Non-terminal concrete segment: descend into one child
        [segment, rest @ ..] => {
            let key = match segment.map_key() {
                Some(key) => key,
                None => return Ok(map.clone()),
            };
            match map.get(key.as_ref()) {
                None => Ok(map.clone()),
                Some(Value::Map(child)) => {
                    let mut updated = map.clone();
                    updated.set(
                        key.into_owned(),
                        Value::Map(update_segments(child, rest, f, full_path)?),
                    );
                    Ok(updated)
                }
                Some(other) => Err(not_a_map(full_path, other)),
            }
        }
    }
}

fn delete_segments<P>(
    map: &Map,
    segments: &[&Segment],
    pred: &P,
    full_path: &Path,
) -> Result<Map, TreeError>
where
    P: Fn(&Value) -> bool,
{
    match segments {
        [] => Ok(map.clone()),

        // Terminal wildcard: drop every entry the predicate admits
        [Segment::Wildcard] => Ok(map
            .iter()
            .filter(|&(_, value)| !pred(value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()),

        // Terminal concrete segment: drop that one key
        [segment] => {
            let key = match segment.map_key() {
                Some(key) => key,
                None => return Ok(map.clone()),
            };
            match map.get(key.as_ref()) {
                Some(value) if pred(value) => {
                    let mut trimmed = map.clone();
                    trimmed.remove(key.as_ref());
                    Ok(trimmed)
                }
                _ => Ok(map.clone()),
            }
        }

        // Non-terminal wildcard: fan out into every entry
        [Segment::Wildcard, rest @ ..] => map
            .iter()
            .map(|(key, value)| match value {
                Value::Map(child) => Ok((
                    key.clone(),
                    Value::Map(delete_segments(child, rest, pred, full_path)?),
                )),
                other => Err(not_a_map(full_path, other)),
            })
            .collect(),

        // Non-terminal concrete segment: descend into one child
        [segment, rest @ ..] => {
            let key = match segment.map_key() {
                Some(key) => key,
                None => return Ok(map.clone()),
            };
            match map.get(key.as_ref()) {
                None => Ok(map.clone()),
                Some(Value::Map(child)) => {
                    let mut trimmed = map.clone();
                    trimmed.set(
                        key.into_owned(),
                        Value::Map(delete_segments(child, rest, pred, full_path)?),
                    );
                    Ok(trimmed)
                }
                Some(other) => Err(not_a_map(full_path, other)),
            }
        }
    }
}

fn not_a_map(path: &Path, found: &Value) -> TreeError {
    tracing::debug!(path = %path, found = found.type_name(), "path descent hit a non-map value");
    TreeError::NotAMap {
        path: path.clone(),
        actual: found.type_name(),
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl<K, V> FromIterator<(K, V)> for Map
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
