mod common;

use common::fixtures::*;
use common::{TestResult, assert_bounds, layout_json};
use serde_json::json;
use std::io::Write;
use trellis::document::parse_extent;
use trellis::{LayoutDocument, LayoutError, Thickness, TrellisError};

#[test]
fn test_load_from_file() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "{}", padded_stack())?;

    let mut loaded = LayoutDocument::from_path(file.path())?.build()?;
    loaded.layout()?;

    assert_bounds(&loaded, "b", 20.0, 75.0, 260.0, 30.0);
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = LayoutDocument::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, TrellisError::Io(_)));
}

#[test]
fn test_malformed_json_is_reported() {
    let err = LayoutDocument::from_json("{ \"root\": ").unwrap_err();
    assert!(matches!(err, TrellisError::Json(_)));
}

#[test]
fn test_defaults_and_shorthands() -> TestResult {
    let doc = LayoutDocument::from_value(json!({
        "config": { "memoize": false },
        "root": {
            "layout": { "type": "stack" },
            "padding": "10 20",
            "margin": { "top": 1, "left": 2 },
            "children": [{ "name": "leaf" }]
        }
    }))?;

    assert!(!doc.config.memoize);
    assert_eq!(doc.config.measure_cache_capacity, 4);
    assert_eq!(doc.root.padding, Thickness::symmetric(10.0, 20.0));
    assert_eq!(doc.root.margin, Thickness::new(1.0, 0.0, 0.0, 2.0));
    assert!(doc.root.children[0].visible);
    assert!(doc.available.width.is_none());
    Ok(())
}

#[test]
fn test_unbounded_available_uses_desired_size() -> TestResult {
    let root = container(
        "root",
        json!({ "type": "stack", "spacing": 10 }),
        vec![leaf("a", 50.0, 20.0), leaf("b", 80.0, 30.0)],
    );
    let doc = layout_json(json!({ "available": { "width": 200 }, "root": root }))?;

    assert_bounds(&doc, "root", 0.0, 0.0, 200.0, 60.0);
    Ok(())
}

#[test]
fn test_duplicate_names_are_rejected() {
    let root = container(
        "root",
        json!({ "type": "stack" }),
        vec![leaf("twin", 1.0, 1.0), leaf("twin", 1.0, 1.0)],
    );
    let err = layout_json(document(10.0, 10.0, root)).err().unwrap();
    assert!(matches!(err, TrellisError::DuplicateName(name) if name == "twin"));
}

#[test]
fn test_unknown_sibling_reference() {
    let root = container(
        "root",
        json!({ "type": "relative" }),
        vec![with(
            leaf("a", 1.0, 1.0),
            json!({ "relative": [{ "target": "x", "sibling": "ghost", "property": "x" }] }),
        )],
    );
    let err = layout_json(document(10.0, 10.0, root)).err().unwrap();
    match err {
        TrellisError::UnknownReference { node, reference } => {
            assert_eq!(node, "a");
            assert_eq!(reference, "ghost");
        }
        other => panic!("expected an unknown reference, got {:?}", other),
    }
}

#[test]
fn test_attachment_must_match_parent() {
    let root = container(
        "root",
        json!({ "type": "stack" }),
        vec![with(leaf("cell", 1.0, 1.0), json!({ "grid": { "row": 0 } }))],
    );
    let err = layout_json(document(10.0, 10.0, root)).err().unwrap();
    assert!(matches!(err, TrellisError::Layout(LayoutError::InvalidTree(_))));
}

#[test]
fn test_conflicting_attachments() {
    let root = container(
        "root",
        json!({ "type": "grid" }),
        vec![with(
            leaf("cell", 1.0, 1.0),
            json!({ "grid": { "row": 0 }, "flex": { "grow": 1 } }),
        )],
    );
    let err = layout_json(document(10.0, 10.0, root)).err().unwrap();
    assert!(matches!(err, TrellisError::Document(_)));
}

#[test]
fn test_children_under_leaf() {
    let root = with(leaf("solo", 1.0, 1.0), json!({ "children": [leaf("inner", 1.0, 1.0)] }));
    let err = layout_json(document(10.0, 10.0, root)).err().unwrap();
    assert!(matches!(err, TrellisError::Layout(LayoutError::InvalidTree(_))));
}

#[test]
fn test_relative_cycle_surfaces_as_layout_error() {
    let root = container(
        "root",
        json!({ "type": "relative" }),
        vec![
            with(
                leaf("a", 1.0, 1.0),
                json!({ "relative": [{ "target": "y", "sibling": "b", "property": "height" }] }),
            ),
            with(
                leaf("b", 1.0, 1.0),
                json!({ "relative": [{ "target": "height", "sibling": "a", "property": "y" }] }),
            ),
        ],
    );
    let err = layout_json(document(10.0, 10.0, root)).err().unwrap();
    assert!(matches!(err, TrellisError::Layout(LayoutError::Cycle { .. })));
}

#[test]
fn test_parse_extent() -> TestResult {
    assert_eq!(parse_extent("300")?, 300.0);
    assert_eq!(parse_extent(" 120.5px ")?, 120.5);
    assert!(parse_extent("auto")?.is_infinite());
    assert!(matches!(parse_extent("wide"), Err(TrellisError::Style(_))));
    Ok(())
}
