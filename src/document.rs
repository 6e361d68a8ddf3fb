//! Path-addressed document editing.
//!
//! [`PathDocument`] owns a single mutable JSON tree and exposes the five
//! JSON-Patch-like primitives (`add`, `remove`, `replace`, `move`, `copy`)
//! plus pointer-path retrieval and a [`transform`](PathDocument::transform)
//! dispatcher for operation descriptors.
//!
//! Addressing convention: for a non-root path the final segment is the local
//! key or index within its parent container, and the parent is found by
//! navigating the path truncated by exactly that one segment. Whether a
//! segment is a key or an index is decided by the kind of the node it is
//! applied to: sequences parse the segment as a base-10 index (or accept the
//! `-` append sentinel), mappings use it verbatim as a key.

use crate::{DocError, DocResult, Op, Patch, Path, APPEND};
use serde_json::{Map, Value};
use tracing::trace;

/// Owner of one mutable JSON tree with path-addressed operations.
///
/// All operations are synchronous and complete on the calling thread; the
/// type has no internal locking, so concurrent callers must serialize
/// externally.
///
/// # Examples
///
/// ```
/// use pathdoc::{Op, PathDocument};
/// use serde_json::json;
///
/// let mut doc = PathDocument::from_value(json!({"planets": ["mercury", "venus"]}));
///
/// doc.add("/planets/-", json!("earth"))?;
/// doc.replace("/planets/0", json!("Mercury"))?;
/// assert_eq!(doc.retrieve("/planets")?, &json!(["Mercury", "venus", "earth"]));
///
/// doc.transform(&Op::move_value("/planets", "/bodies"))?;
/// assert!(doc.retrieve("/planets").is_err());
/// assert_eq!(doc.retrieve("/bodies/2")?, &json!("earth"));
/// # Ok::<(), pathdoc::DocError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PathDocument {
    root: Value,
}

impl PathDocument {
    /// Create a document owning an empty mapping.
    pub fn new() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    /// Create a document owning the given tree.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Replace the owned tree wholesale.
    pub fn reset(&mut self, root: impl Into<Value>) {
        self.root = root.into();
    }

    /// Reset the owned tree to an empty mapping.
    pub fn clear(&mut self) {
        self.root = Value::Object(Map::new());
    }

    /// Borrow the root of the owned tree.
    #[inline]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Clone the current tree.
    pub fn snapshot(&self) -> Value {
        self.root.clone()
    }

    /// Consume the document and return the owned tree.
    pub fn into_inner(self) -> Value {
        self.root
    }

    /// Check whether a path currently resolves to a value.
    pub fn contains(&self, path: impl Into<Path>) -> bool {
        self.retrieve(path).is_ok()
    }

    /// Resolve a path to a reference into the owned tree.
    ///
    /// The root path returns the whole document and cannot fail. Within a
    /// sequence, `-` resolves to the last element (absent for an empty
    /// sequence). A segment that does not parse as an index where one is
    /// required resolves to nothing.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::PathNotFound`] carrying the full path when any
    /// segment fails to resolve.
    pub fn retrieve(&self, path: impl Into<Path>) -> DocResult<&Value> {
        let path = path.into();
        let mut current = &self.root;
        for segment in path.segments() {
            current = descend(current, segment)
                .ok_or_else(|| DocError::path_not_found(path.clone()))?;
        }
        Ok(current)
    }

    /// Insert `value` at `path`.
    ///
    /// The root path replaces the whole document. In a sequence parent, `-`
    /// appends and a numeric index inserts before position `i`, shifting
    /// later elements right; an index equal to the length is the append
    /// position, anything greater fails. In a mapping parent the key is
    /// created or overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::PathNotFound`] when the parent does not resolve,
    /// when the parent is a scalar, or when a sequence index is out of
    /// bounds or unparseable.
    pub fn add(&mut self, path: impl Into<Path>, value: impl Into<Value>) -> DocResult<()> {
        let path = path.into();
        let value = value.into();
        let Some((parent_segments, local)) = path.split_last() else {
            self.root = value;
            return Ok(());
        };

        let parent = resolve_parent(&mut self.root, parent_segments)?;
        match parent {
            Value::Array(seq) => {
                if local == APPEND {
                    seq.push(value);
                } else {
                    let index = parse_index(local)
                        .filter(|i| *i <= seq.len())
                        .ok_or_else(|| DocError::path_not_found(path.clone()))?;
                    seq.insert(index, value);
                }
            }
            Value::Object(map) => {
                map.insert(local.to_owned(), value);
            }
            _ => return Err(DocError::path_not_found(path.clone())),
        }
        Ok(())
    }

    /// Detach and return the value at `path`.
    ///
    /// The root path resets the document to an empty mapping and returns the
    /// previous tree. In a sequence parent, `-` removes the last element and
    /// a numeric index splices out that element, shifting later elements
    /// left. In a mapping parent the key is deleted.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::PathNotFound`] when the addressed element or key
    /// does not already exist (including `-` against an empty sequence).
    pub fn remove(&mut self, path: impl Into<Path>) -> DocResult<Value> {
        let path = path.into();
        let Some((parent_segments, local)) = path.split_last() else {
            return Ok(std::mem::replace(
                &mut self.root,
                Value::Object(Map::new()),
            ));
        };

        let parent = resolve_parent(&mut self.root, parent_segments)?;
        match parent {
            Value::Array(seq) => {
                let index = if local == APPEND {
                    seq.len().checked_sub(1)
                } else {
                    parse_index(local).filter(|i| *i < seq.len())
                }
                .ok_or_else(|| DocError::path_not_found(path.clone()))?;
                Ok(seq.remove(index))
            }
            Value::Object(map) => map
                .remove(local)
                .ok_or_else(|| DocError::path_not_found(path.clone())),
            _ => Err(DocError::path_not_found(path.clone())),
        }
    }

    /// Overwrite the value at `path` in place.
    ///
    /// Mirrors [`remove`](PathDocument::remove)'s traversal and absence
    /// checks but assigns instead of deleting; sequence elements do not
    /// shift. The root path replaces the whole document. `-` overwrites the
    /// last element of a sequence.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::PathNotFound`] when the addressed element or key
    /// does not already exist.
    pub fn replace(&mut self, path: impl Into<Path>, value: impl Into<Value>) -> DocResult<()> {
        let path = path.into();
        let value = value.into();
        let Some((parent_segments, local)) = path.split_last() else {
            self.root = value;
            return Ok(());
        };

        let parent = resolve_parent(&mut self.root, parent_segments)?;
        let slot = match parent {
            Value::Array(seq) => {
                if local == APPEND {
                    seq.last_mut()
                } else {
                    parse_index(local).and_then(|i| seq.get_mut(i))
                }
            }
            Value::Object(map) => map.get_mut(local),
            _ => None,
        }
        .ok_or_else(|| DocError::path_not_found(path.clone()))?;
        *slot = value;
        Ok(())
    }

    /// Detach the value at `from` and insert it at `to`.
    ///
    /// Not atomic: when `from` does not resolve, the document is untouched,
    /// but if the insertion at `to` fails after detachment the document is
    /// left without the value at either location.
    pub fn move_value(&mut self, from: impl Into<Path>, to: impl Into<Path>) -> DocResult<()> {
        let detached = self.remove(from)?;
        self.add(to, detached)
    }

    /// Duplicate the value at `from` into `to`.
    ///
    /// The subtree is deep-cloned: later mutation through one path is not
    /// observable through the other.
    pub fn copy(&mut self, from: impl Into<Path>, to: impl Into<Path>) -> DocResult<()> {
        let duplicated = self.retrieve(from)?.clone();
        self.add(to, duplicated)
    }

    /// Apply a single operation descriptor.
    pub fn transform(&mut self, op: &Op) -> DocResult<()> {
        trace!(op = op.name(), path = %op.path(), "applying operation");
        match op {
            Op::Add { path, value } => self.add(path, value.clone()),
            Op::Remove { path } => self.remove(path).map(drop),
            Op::Replace { path, value } => self.replace(path, value.clone()),
            Op::Move { from, path } => self.move_value(from, path),
            Op::Copy { from, path } => self.copy(from, path),
        }
    }

    /// Apply a patch, one operation at a time.
    ///
    /// Stops at the first failing operation; earlier operations remain
    /// applied.
    pub fn apply(&mut self, patch: &Patch) -> DocResult<()> {
        for op in patch {
            self.transform(op)?;
        }
        Ok(())
    }
}

impl Default for PathDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Value> for PathDocument {
    fn from(root: Value) -> Self {
        Self::from_value(root)
    }
}

/// Resolve one segment against a node, per node kind.
fn descend<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Array(seq) => {
            if segment == APPEND {
                seq.last()
            } else {
                parse_index(segment).and_then(|i| seq.get(i))
            }
        }
        Value::Object(map) => map.get(segment),
        _ => None,
    }
}

/// Navigate to the parent container of a mutation target.
///
/// On failure the error carries the parent path, the portion that could not
/// be resolved.
fn resolve_parent<'a>(root: &'a mut Value, segments: &[String]) -> DocResult<&'a mut Value> {
    descend_mut(root, segments)
        .ok_or_else(|| DocError::path_not_found(segments.to_vec()))
}

fn descend_mut<'a>(current: &'a mut Value, segments: &[String]) -> Option<&'a mut Value> {
    match segments {
        [] => Some(current),
        [segment, rest @ ..] => {
            let next = match current {
                Value::Array(seq) => {
                    if segment == APPEND {
                        seq.last_mut()
                    } else {
                        parse_index(segment).and_then(|i| seq.get_mut(i))
                    }
                }
                Value::Object(map) => map.get_mut(segment.as_str()),
                _ => None,
            }?;
            descend_mut(next, rest)
        }
    }
}

/// Strict base-10 sequence index. Anything `usize::from_str` rejects
/// (signs, whitespace, trailing garbage) resolves to nothing.
#[inline]
fn parse_index(segment: &str) -> Option<usize> {
    segment.parse().ok()
}
