//! Pointer paths for addressing locations in a document tree.
//!
//! A [`Path`] is an ordered sequence of string segments. Segments are stored
//! verbatim: whether a segment means a mapping key or a sequence index is
//! decided during navigation, by the kind of the node it is applied to.
//! The segment `"-"` (see [`APPEND`]) is the append sentinel within a
//! sequence context.
//!
//! Paths can be built from pointer strings (`"/users/0/name"`), from
//! pre-split segment sequences, or with the [`path!`](crate::path!) macro.
//! No escape decoding is performed; segments are used exactly as given
//! (the `~0`/`~1` escapes of RFC 6901 are not interpreted).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The append sentinel segment.
///
/// Within a sequence, `-` addresses the position after the last element for
/// `add`, and the last element for `retrieve`, `remove`, and `replace`.
pub const APPEND: &str = "-";

/// A pointer path into a document.
///
/// The empty path addresses the document root.
///
/// # Examples
///
/// ```
/// use pathdoc::{path, Path};
///
/// let p = Path::from("/users/0/name");
/// assert_eq!(p.len(), 3);
/// assert_eq!(p, path!("users", 0, "name"));
/// assert_eq!(p.to_string(), "/users/0/name");
///
/// assert!(Path::root().is_root());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path(Vec<String>);

impl Path {
    /// Create the root path (no segments).
    #[inline]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Create a path from a vector of segments, used verbatim.
    #[inline]
    pub fn from_segments(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Parse a pointer string.
    ///
    /// Exactly one leading `/` is stripped if present; a string without one
    /// is treated as already-relative. An empty remainder denotes the root.
    /// Otherwise the remainder is split on `/`, preserving empty segments
    /// (`"/a//b"` contains a zero-length mapping key).
    pub fn parse(pointer: &str) -> Self {
        let rest = pointer.strip_prefix('/').unwrap_or(pointer);
        if rest.is_empty() {
            return Self::root();
        }
        Self(rest.split('/').map(str::to_owned).collect())
    }

    /// Get the segments of this path.
    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Check if this path addresses the document root.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if this path has no segments (alias for [`Path::is_root`]).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of segments in this path.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get the last segment, if any.
    #[inline]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Split into the parent segments and the final segment.
    ///
    /// Returns `None` for the root path. The parent is the path truncated by
    /// exactly one segment; it addresses the container holding the target.
    #[inline]
    pub fn split_last(&self) -> Option<(&[String], &str)> {
        self.0
            .split_last()
            .map(|(last, rest)| (rest, last.as_str()))
    }

    /// Get the parent path, or `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<Path> {
        self.split_last()
            .map(|(rest, _)| Path(rest.to_vec()))
    }

    /// Append a segment (mutating).
    #[inline]
    pub fn push(&mut self, segment: impl Into<String>) {
        self.0.push(segment.into());
    }

    /// Append a segment and return the path (builder pattern).
    #[inline]
    pub fn seg(mut self, segment: impl Into<String>) -> Self {
        self.0.push(segment.into());
        self
    }

    /// Join this path with another, returning a new path.
    #[inline]
    pub fn join(&self, other: &Path) -> Path {
        let mut joined = self.clone();
        joined.0.extend(other.0.iter().cloned());
        joined
    }

    /// Iterate over the segments.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for Path {
    /// Renders the path in pointer-string form: `/a/b/0`. The root path
    /// renders as the empty string. Used for diagnostics; segments that
    /// themselves contain `/` render ambiguously.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.0 {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Path {
    fn from(pointer: &str) -> Self {
        Self::parse(pointer)
    }
}

impl From<String> for Path {
    fn from(pointer: String) -> Self {
        Self::parse(&pointer)
    }
}

impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl From<&[&str]> for Path {
    fn from(segments: &[&str]) -> Self {
        Self(segments.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Path {
    fn from(segments: [&str; N]) -> Self {
        Self(segments.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl FromIterator<String> for Path {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Path {
    /// Serializes to the pointer-string form.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    /// Deserializes from either a pointer string (`"/a/b"`) or a pre-split
    /// segment array (`["a", "b"]`), mirroring the two accepted path input
    /// forms of the in-memory API.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Pointer(String),
            Segments(Vec<String>),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Pointer(s) => Path::parse(&s),
            Repr::Segments(segments) => Path::from_segments(segments),
        })
    }
}

/// Construct a [`Path`] from a sequence of segments.
///
/// Each argument is converted to a string segment with `to_string`, so
/// numeric literals become index-like segments.
///
/// # Examples
///
/// ```
/// use pathdoc::path;
///
/// let p = path!("users", 0, "name");
/// assert_eq!(p.to_string(), "/users/0/name");
///
/// let root = path!();
/// assert!(root.is_root());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($($seg:expr),+ $(,)?) => {
        $crate::Path::from_segments(vec![$($seg.to_string()),+])
    };
}
