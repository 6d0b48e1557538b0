//! Key paths for hierarchical value access.
//!
//! A [`KeyPath`] is an ordered list of string segments addressing a location
//! inside nested maps and lists. The string form separates segments with
//! dots:
//!
//! ```rust
//! use anyvalue::KeyPath;
//!
//! let path = KeyPath::parse("user.addresses.0.city");
//! assert_eq!(path.len(), 4);
//!
//! // Build incrementally
//! let path = KeyPath::new().push("user").push("addresses").push("0");
//! assert_eq!(path.to_string(), "user.addresses.0");
//! ```
//!
//! # Keys containing dots
//!
//! The dotted string form has no escape mechanism: `"a.b"` is always two
//! segments. Keys that contain a literal `.` are addressed by building the
//! path from explicit segments with [`KeyPath::from_segments`] or the
//! [`key_path!`](crate::key_path) macro, which never split their input.
//!
//! ```rust
//! use anyvalue::{KeyPath, key_path};
//!
//! let path = key_path!("hosts", "example.com", "port");
//! assert_eq!(path.len(), 3);
//! assert_eq!(path.segments()[1], "example.com");
//! ```

use std::{convert::Infallible, fmt, str::FromStr};

/// An owned, ordered list of path segments.
///
/// Splitting is naive: empty input yields an empty path, and consecutive
/// dots produce empty segments (`"a..b"` has three segments, the middle one
/// empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parses a dot-delimited path string.
    ///
    /// ```rust
    /// # use anyvalue::KeyPath;
    /// assert!(KeyPath::parse("").is_empty());
    /// assert_eq!(KeyPath::parse("a.b").segments(), ["a", "b"]);
    /// assert_eq!(KeyPath::parse("a..b").segments(), ["a", "", "b"]);
    /// ```
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Self::new();
        }
        Self {
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    /// Creates a path from explicit segments, without splitting on dots.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the segments of this path.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the number of segments in the path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Splits off the first segment.
    ///
    /// Returns `None` for an empty path, otherwise the first segment and a
    /// path made of the remaining segments.
    ///
    /// ```rust
    /// # use anyvalue::KeyPath;
    /// let path = KeyPath::parse("a.b.c");
    /// let (head, tail) = path.head_and_tail().unwrap();
    /// assert_eq!(head, "a");
    /// assert_eq!(tail, KeyPath::parse("b.c"));
    /// assert!(KeyPath::new().head_and_tail().is_none());
    /// ```
    pub fn head_and_tail(&self) -> Option<(&str, KeyPath)> {
        let (head, tail) = self.segments.split_first()?;
        Some((head.as_str(), KeyPath::from_segments(tail.iter().cloned())))
    }

    /// Adds a single segment to the end of this path.
    ///
    /// The segment is taken verbatim, dots included.
    pub fn push(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Appends all segments of `other` to this path.
    pub fn join(mut self, other: &KeyPath) -> Self {
        self.segments.extend(other.segments.iter().cloned());
        self
    }

    /// Returns the parent path, or `None` if this path is empty.
    pub fn parent(&self) -> Option<KeyPath> {
        let (_, parent) = self.segments.split_last()?;
        Some(KeyPath::from_segments(parent.iter().cloned()))
    }

    /// Returns the last segment of the path, or `None` if empty.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl FromStr for KeyPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for KeyPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<String> for KeyPath {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl From<&String> for KeyPath {
    fn from(path: &String) -> Self {
        Self::parse(path)
    }
}

impl From<&KeyPath> for KeyPath {
    fn from(path: &KeyPath) -> Self {
        path.clone()
    }
}

impl From<Vec<String>> for KeyPath {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

/// Builds a [`KeyPath`] from explicit segments.
///
/// Every argument becomes exactly one segment via `ToString`, so numeric
/// indices and keys containing dots can be mixed freely.
///
/// ```rust
/// use anyvalue::key_path;
///
/// let path = key_path!("items", 3, "name");
/// assert_eq!(path.to_string(), "items.3.name");
/// assert!(key_path!().is_empty());
/// ```
#[macro_export]
macro_rules! key_path {
    () => {
        $crate::KeyPath::new()
    };

    ($($segment:expr),+ $(,)?) => {
        $crate::KeyPath::from_segments([$(::std::string::ToString::to_string(&$segment)),+])
    };
}
