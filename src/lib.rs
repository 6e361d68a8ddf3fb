//! Path-addressed structural editing for JSON documents.
//!
//! `pathdoc` owns a dynamically-typed JSON tree and mutates it through
//! pointer-addressed operations in the JSON-Patch style: `add`, `remove`,
//! `replace`, `move`, and `copy`, dispatched either directly or through
//! serialized operation descriptors.
//!
//! # Core Concepts
//!
//! - **[`PathDocument`]**: owner of one mutable tree, the mutation engine
//! - **[`Path`]**: a slash-delimited pointer or pre-split segment sequence
//! - **[`Op`]**: a single operation descriptor (JSON-Patch wire layout)
//! - **[`Patch`]**: an ordered list of operations, applied sequentially
//!
//! Segments are interpreted by the node they are applied to: a sequence
//! parses the segment as an index (or takes `-` as the append sentinel), a
//! mapping uses it verbatim as a key. Mutations address their target through
//! its immediate parent, found by dropping the final path segment.
//!
//! # Quick Start
//!
//! ```
//! use pathdoc::{Patch, PathDocument};
//! use serde_json::json;
//!
//! let mut doc = PathDocument::from_value(json!({"user": {"name": "Alice"}}));
//!
//! // Direct primitives
//! doc.add("/user/tags", json!(["admin"]))?;
//! doc.add("/user/tags/-", json!("ops"))?;
//! assert_eq!(doc.retrieve("/user/tags/1")?, &json!("ops"));
//!
//! // Or descriptor-driven, e.g. deserialized from a JSON-Patch payload
//! let patch: Patch = serde_json::from_value(json!([
//!     {"op": "replace", "path": "/user/name", "value": "Bob"},
//!     {"op": "move", "from": "/user/tags", "path": "/roles"},
//! ]))?;
//! doc.apply(&patch)?;
//!
//! assert_eq!(doc.retrieve("/user/name")?, &json!("Bob"));
//! assert_eq!(doc.retrieve("/roles")?, &json!(["admin", "ops"]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Error Handling
//!
//! Every failure is [`DocError::PathNotFound`], carrying the path that could
//! not be resolved in pointer-string form. Errors propagate synchronously;
//! nothing is caught or rolled back internally. In particular `move` is not
//! atomic: if the insertion at the destination fails after the source was
//! detached, the document is left in that intermediate state.

mod document;
mod error;
mod op;
mod patch;
mod path;

pub use document::PathDocument;
pub use error::{DocError, DocResult};
pub use op::Op;
pub use patch::Patch;
pub use path::{Path, APPEND};

// Re-export serde_json::Value for convenience
pub use serde_json::Value;
