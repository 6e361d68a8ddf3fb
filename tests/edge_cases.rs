//! Edge case tests for pathdoc.

use pathdoc::{path, DocError, Op, Patch, PathDocument};
use serde_json::json;

// ============================================================================
// Pointer parsing edge cases
// ============================================================================

#[test]
fn test_empty_segment_is_a_valid_mapping_key() {
    let mut doc = PathDocument::from_value(json!({"a": {"": 1}}));
    // "/a//" would be ambiguous to read, but "//" after "/a" is the empty key.
    assert_eq!(doc.retrieve("/a/").unwrap(), &json!(1));
    doc.replace("/a/", json!(2)).unwrap();
    assert_eq!(doc.root(), &json!({"a": {"": 2}}));
}

#[test]
fn test_no_escape_decoding() {
    // RFC 6901 escapes are not interpreted; "~0" is a literal key.
    let doc = PathDocument::from_value(json!({"~0": 1, "~": 2}));
    assert_eq!(doc.retrieve("/~0").unwrap(), &json!(1));
    assert_eq!(doc.retrieve("/~").unwrap(), &json!(2));
}

#[test]
fn test_relative_pointer_without_leading_slash() {
    let doc = PathDocument::from_value(json!({"a": {"b": 1}}));
    assert_eq!(doc.retrieve("a/b").unwrap(), doc.retrieve("/a/b").unwrap());
}

// ============================================================================
// Index interpretation
// ============================================================================

#[test]
fn test_non_numeric_segment_against_sequence_fails() {
    let doc = PathDocument::from_value(json!({"a": [1, 2]}));
    let err = doc.retrieve("/a/first").unwrap_err();
    let DocError::PathNotFound { path } = err;
    assert_eq!(path, path!("a", "first"));
}

#[test]
fn test_index_with_trailing_garbage_fails() {
    let mut doc = PathDocument::from_value(json!({"a": [1, 2]}));
    assert!(doc.retrieve("/a/1x").is_err());
    assert!(doc.add("/a/1x", json!(0)).is_err());
    assert!(doc.replace("/a/+1", json!(0)).is_err());
}

#[test]
fn test_numeric_segment_against_mapping_is_a_key() {
    let mut doc = PathDocument::from_value(json!({"0": "zero"}));
    doc.replace("/0", json!("ZERO")).unwrap();
    assert_eq!(doc.root(), &json!({"0": "ZERO"}));

    // add creates the key "7"; it does not grow a sequence.
    doc.add("/7", json!("seven")).unwrap();
    assert_eq!(doc.retrieve("/7").unwrap(), &json!("seven"));
}

// ============================================================================
// Scalar parents
// ============================================================================

#[test]
fn test_mutations_through_scalar_parent_fail() {
    let mut doc = PathDocument::from_value(json!({"n": 5}));
    assert!(doc.add("/n/x", json!(1)).is_err());
    assert!(doc.remove("/n/x").is_err());
    assert!(doc.replace("/n/x", json!(1)).is_err());
    assert_eq!(doc.root(), &json!({"n": 5}));
}

#[test]
fn test_scalar_root_with_single_segment_path_fails() {
    let mut doc = PathDocument::from_value(json!(42));
    assert!(doc.add("/a", json!(1)).is_err());
    assert!(doc.remove("/a").is_err());
    // Root operations still work on a scalar document.
    doc.replace(pathdoc::Path::root(), json!({"a": 1})).unwrap();
    assert_eq!(doc.root(), &json!({"a": 1}));
}

#[test]
fn test_sequence_root_with_single_segment_path() {
    // Parent resolution is uniform: the root itself can be a sequence.
    let mut doc = PathDocument::from_value(json!([1, 2]));
    doc.add("/-", json!(3)).unwrap();
    doc.remove("/0").unwrap();
    assert_eq!(doc.root(), &json!([2, 3]));
}

// ============================================================================
// Move partial failure
// ============================================================================

#[test]
fn test_move_is_not_atomic_on_destination_failure() {
    let mut doc = PathDocument::from_value(json!({"a": 5, "list": [1, 2]}));
    // Source resolves, destination index is out of bounds.
    let err = doc.move_value("/a", "/list/9").unwrap_err();
    let DocError::PathNotFound { path } = err;
    assert_eq!(path, path!("list", 9));
    // Documented partial-failure state: the value is gone from the source
    // and was never inserted at the destination.
    assert_eq!(doc.root(), &json!({"list": [1, 2]}));
}

// ============================================================================
// Nested sequence addressing
// ============================================================================

#[test]
fn test_append_sentinel_in_intermediate_position() {
    let mut doc = PathDocument::from_value(json!({"rows": [[1], [2, 3]]}));
    // "-" navigates to the last row, then appends within it.
    doc.add("/rows/-/-", json!(4)).unwrap();
    assert_eq!(doc.retrieve("/rows").unwrap(), &json!([[1], [2, 3, 4]]));
}

#[test]
fn test_deeply_nested_mixed_containers() {
    let mut doc = PathDocument::from_value(json!({
        "users": [
            {"name": "Alice", "roles": ["admin"]},
            {"name": "Bob", "roles": []}
        ]
    }));

    doc.add("/users/1/roles/0", json!("viewer")).unwrap();
    doc.replace("/users/0/name", json!("Alicia")).unwrap();
    doc.remove("/users/0/roles/-").unwrap();

    assert_eq!(
        doc.root(),
        &json!({
            "users": [
                {"name": "Alicia", "roles": []},
                {"name": "Bob", "roles": ["viewer"]}
            ]
        })
    );
}

// ============================================================================
// Wire payloads
// ============================================================================

#[test]
fn test_patch_from_json_patch_payload_with_mixed_path_forms() {
    let patch: Patch = serde_json::from_value(json!([
        {"op": "add", "path": "/a", "value": [1]},
        {"op": "add", "path": ["a", "-"], "value": 2},
        {"op": "copy", "from": "/a/0", "path": "/first"},
    ]))
    .unwrap();

    let mut doc = PathDocument::new();
    doc.apply(&patch).unwrap();
    assert_eq!(doc.root(), &json!({"a": [1, 2], "first": 1}));
}

#[test]
fn test_transform_replace_descriptor() {
    let mut doc = PathDocument::from_value(json!({"a": 1}));
    let op: Op =
        serde_json::from_value(json!({"op": "replace", "path": "/a", "value": 7})).unwrap();
    doc.transform(&op).unwrap();
    assert_eq!(doc.root(), &json!({"a": 7}));
}
