//! Patch operations for modifying documents.
//!
//! Each operation describes a single change addressed by a pointer path.
//! The serde representation is tagged by the `op` field and matches the
//! JSON-Patch wire layout (`{"op": "add", "path": "/a", "value": 1}`).
//! Unrecognized `op` discriminants are rejected at deserialization time.

use crate::Path;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single patch operation.
///
/// Operations are the atomic units of change. Each targets a path in the
/// document; `move` and `copy` additionally carry a source path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Op {
    /// Insert or set a value at the path.
    ///
    /// In a sequence parent, inserts at the index (or appends for `-`),
    /// shifting later elements right. In a mapping parent, creates or
    /// overwrites the key.
    Add {
        /// Target path.
        path: Path,
        /// Value to insert.
        value: Value,
    },

    /// Remove the value at the path.
    ///
    /// Fails if the path does not already resolve.
    Remove {
        /// Target path.
        path: Path,
    },

    /// Overwrite the value at the path in place.
    ///
    /// Fails if the path does not already resolve; no elements shift.
    Replace {
        /// Target path.
        path: Path,
        /// Replacement value.
        value: Value,
    },

    /// Detach the value at `from` and insert it at `path`.
    Move {
        /// Source path.
        from: Path,
        /// Destination path.
        path: Path,
    },

    /// Duplicate the value at `from` into `path`.
    Copy {
        /// Source path.
        from: Path,
        /// Destination path.
        path: Path,
    },
}

impl Op {
    /// Create an Add operation.
    #[inline]
    pub fn add(path: impl Into<Path>, value: impl Into<Value>) -> Self {
        Op::Add {
            path: path.into(),
            value: value.into(),
        }
    }

    /// Create a Remove operation.
    #[inline]
    pub fn remove(path: impl Into<Path>) -> Self {
        Op::Remove { path: path.into() }
    }

    /// Create a Replace operation.
    #[inline]
    pub fn replace(path: impl Into<Path>, value: impl Into<Value>) -> Self {
        Op::Replace {
            path: path.into(),
            value: value.into(),
        }
    }

    /// Create a Move operation.
    #[inline]
    pub fn move_value(from: impl Into<Path>, path: impl Into<Path>) -> Self {
        Op::Move {
            from: from.into(),
            path: path.into(),
        }
    }

    /// Create a Copy operation.
    #[inline]
    pub fn copy(from: impl Into<Path>, path: impl Into<Path>) -> Self {
        Op::Copy {
            from: from.into(),
            path: path.into(),
        }
    }

    /// Get the target path of this operation.
    #[inline]
    pub fn path(&self) -> &Path {
        match self {
            Op::Add { path, .. } => path,
            Op::Remove { path } => path,
            Op::Replace { path, .. } => path,
            Op::Move { path, .. } => path,
            Op::Copy { path, .. } => path,
        }
    }

    /// Get the source path, for `move` and `copy`.
    #[inline]
    pub fn from(&self) -> Option<&Path> {
        match self {
            Op::Move { from, .. } | Op::Copy { from, .. } => Some(from),
            _ => None,
        }
    }

    /// Get the operation name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Op::Add { .. } => "add",
            Op::Remove { .. } => "remove",
            Op::Replace { .. } => "replace",
            Op::Move { .. } => "move",
            Op::Copy { .. } => "copy",
        }
    }
}
