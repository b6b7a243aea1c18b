//! Path types for addressing locations in nested trees.
//!
//! A [`Path`] is an ordered sequence of [`Segment`]s. Each segment either
//! names one child (a map key or a list index) or is the [`Segment::Wildcard`]
//! marker, which fans an operation out to every entry at that level.
//!
//! Paths parse from dot notation, where `*` is the wildcard and all-digit
//! components are positional indices:
//!
//! ```
//! use grove::tree::{Path, Segment};
//! use std::str::FromStr;
//!
//! let path = Path::from_str("users.*.name").unwrap();
//! assert_eq!(path.len(), 3);
//! assert_eq!(path.last(), Some(&Segment::Key("name".to_string())));
//!
//! // Build incrementally (infallible)
//! let path = Path::new().push("users").push("0").push("name");
//! assert_eq!(path.to_string(), "users.0.name");
//! ```

use std::{fmt, str::FromStr};

/// One element of a [`Path`].
///
/// The wildcard is a dedicated variant rather than a reserved key value, so a
/// real key can never be mistaken for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A concrete map key
    Key(String),
    /// A concrete position within a list
    Index(usize),
    /// Matches every entry at this level
    Wildcard,
}

impl Segment {
    /// Creates a key segment
    pub fn key(key: impl Into<String>) -> Self {
        Segment::Key(key.into())
    }

    /// Creates an index segment
    pub fn index(index: usize) -> Self {
        Segment::Index(index)
    }

    /// Returns true if this is the wildcard marker
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard)
    }

    /// Returns the key if this is a key segment
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Segment::Key(key) => Some(key),
            _ => None,
        }
    }

    /// Returns the position if this is an index segment
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Segment::Index(index) => Some(*index),
            _ => None,
        }
    }

    /// The map key this segment addresses, if it addresses exactly one.
    ///
    /// Index segments address the key spelled as their decimal form, matching
    /// the parse that produced them. The wildcard addresses no single key.
    pub fn map_key(&self) -> Option<std::borrow::Cow<'_, str>> {
        match self {
            Segment::Key(key) => Some(std::borrow::Cow::Borrowed(key)),
            Segment::Index(index) => Some(std::borrow::Cow::Owned(index.to_string())),
            Segment::Wildcard => None,
        }
    }

    fn parse_component(component: &str) -> Segment {
        if component == "*" {
            return Segment::Wildcard;
        }
        if component.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = component.parse::<usize>() {
                // Round-trip check keeps keys like "007" out of index space
                if index.to_string() == component {
                    return Segment::Index(index);
                }
            }
        }
        Segment::Key(component.to_string())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => write!(f, "{key}"),
            Segment::Index(index) => write!(f, "{index}"),
            Segment::Wildcard => write!(f, "*"),
        }
    }
}

/// An ordered sequence of segments addressing locations in a tree.
///
/// Concrete segments narrow to exactly one child; a wildcard fans out to
/// every entry at its level, so a path with wildcards addresses a set of
/// locations rather than one.
///
/// Construction is infallible: parsing normalizes dot strings by dropping
/// empty components (`"a..b"` and `".a.b."` both become `a.b`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Creates a new empty path
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Appends a dot-notation fragment to the end of this path.
    ///
    /// The fragment is normalized the same way [`FromStr`] normalizes whole
    /// paths, so pushing `"a.b"` appends two segments and pushing `""`
    /// appends none.
    pub fn push(mut self, fragment: impl AsRef<str>) -> Self {
        for component in fragment.as_ref().split('.') {
            if !component.is_empty() {
                self.segments.push(Segment::parse_component(component));
            }
        }
        self
    }

    /// Appends a single segment
    pub fn push_segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    /// Joins this path with another path
    pub fn join(mut self, other: impl AsRef<Path>) -> Self {
        self.segments
            .extend(other.as_ref().segments.iter().cloned());
        self
    }

    /// Returns an iterator over the segments
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Returns the number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the path has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the path minus its last segment, or `None` at the root.
    ///
    /// A single-segment path has no parent: its target lives directly in the
    /// root container.
    pub fn parent(&self) -> Option<Path> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(Path {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Returns the last segment, or `None` if empty
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Returns true if any segment is the wildcard
    pub fn has_wildcard(&self) -> bool {
        self.segments.iter().any(Segment::is_wildcard)
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl FromStr for Path {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Path::new().push(s))
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<T: IntoIterator<Item = Segment>>(iter: T) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "(empty path)");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Constructs a [`Path`] from dot-notation fragments.
///
/// Each argument is converted to a string and normalized, so literals,
/// integers, and runtime values mix freely:
///
/// ```
/// use grove::path;
///
/// let a = path!("users.*.name");
/// let b = path!("users", "*", "name");
/// assert_eq!(a, b);
///
/// let index = 3;
/// let c = path!("items", index);
/// assert_eq!(c.to_string(), "items.3");
///
/// let empty = path!();
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::tree::Path::new()
    };

    ($($part:expr),+ $(,)?) => {{
        let mut path = $crate::tree::Path::new();
        $(
            path = path.push($part.to_string());
        )+
        path
    }};
}
