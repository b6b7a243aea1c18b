//! Generic stateful tree traversal.
//!
//! [`walk`] is the primitive the higher-level transformations (path
//! decoration in particular) are built on: a depth-first, pre-order
//! traversal that threads caller-defined state from parent to child and
//! applies a replacement function at every node.
//!
//! The traversal context is explicit. Instead of callbacks closing over
//! mutable ambient state, each visit receives a [`Parent`] describing the
//! node's immediate structural parent and the edge taken into it, and the
//! state value computed for that node.

use super::{list::List, value::Value};
use crate::tree::Map;

/// The structural parent of a visited node, plus the edge leading to it.
///
/// Sequence children are identified by their integer position, map children
/// by their key. The root has no parent.
#[derive(Clone, Copy, Debug)]
pub enum Parent<'a> {
    /// The visited node is the traversal root
    Root,
    /// The visited node is the value of `key` within the given map
    Key(&'a Map, &'a str),
    /// The visited node is the element at `index` within the given list
    Index(&'a List, usize),
}

impl<'a> Parent<'a> {
    /// Returns true at the traversal root
    pub fn is_root(&self) -> bool {
        matches!(self, Parent::Root)
    }

    /// The map key leading to the visited node, if its parent is a map
    pub fn key(&self) -> Option<&'a str> {
        match self {
            Parent::Key(_, key) => Some(key),
            _ => None,
        }
    }

    /// The position of the visited node, if its parent is a list
    pub fn index(&self) -> Option<usize> {
        match self {
            Parent::Index(_, index) => Some(*index),
            _ => None,
        }
    }
}

/// Walks a tree depth-first, threading state top-down and rewriting nodes.
///
/// At every node, `next_state` derives the node's state from its parent's
/// state, the [`Parent`] context, and the node itself; `replace` then maps
/// the node to its replacement. When the replacement is a container, the
/// walk recurses into each of its children with the updated state and the
/// replacement as parent, and the container is rebuilt from the recursed
/// children. Scalar replacements end the recursion at that branch.
///
/// Every node reachable through containers is visited exactly once, parents
/// before children. Both callbacks must be pure with respect to sibling
/// order: visitation order among siblings is unspecified.
///
/// # Examples
///
/// ```
/// use grove::tree::{walk, Map, Value};
///
/// // Count nesting depth into every node's state and negate integers.
/// let root = Value::Map(Map::new().with("a", 1).with("b", Map::new().with("c", 2)));
/// let result = walk(
///     &root,
///     0usize,
///     |depth, parent, _node| depth + usize::from(!parent.is_root()),
///     |_depth, node| match node {
///         Value::Int(n) => Value::Int(-n),
///         other => other.clone(),
///     },
/// );
///
/// let map = result.as_map().unwrap();
/// assert_eq!(map.get("a"), Some(&Value::Int(-1)));
/// ```
pub fn walk<S, N, R>(root: &Value, state: S, next_state: N, replace: R) -> Value
where
    N: Fn(&S, Parent<'_>, &Value) -> S,
    R: Fn(&S, &Value) -> Value,
{
    walk_at(Parent::Root, &state, &next_state, &replace, root)
}

fn walk_at<S, N, R>(
    parent: Parent<'_>,
    state: &S,
    next_state: &N,
    replace: &R,
    node: &Value,
) -> Value
where
    N: Fn(&S, Parent<'_>, &Value) -> S,
    R: Fn(&S, &Value) -> Value,
{
    let state = next_state(state, parent, node);
    match replace(&state, node) {
        Value::Map(map) => {
            let rebuilt = map
                .iter()
                .map(|(key, child)| {
                    (
                        key.clone(),
                        walk_at(Parent::Key(&map, key), &state, next_state, replace, child),
                    )
                })
                .collect();
            Value::Map(rebuilt)
        }
        Value::List(list) => {
            let rebuilt = list
                .iter()
                .enumerate()
                .map(|(index, child)| {
                    walk_at(
                        Parent::Index(&list, index),
                        &state,
                        next_state,
                        replace,
                        child,
                    )
                })
                .collect();
            Value::List(rebuilt)
        }
        scalar => scalar,
    }
}
