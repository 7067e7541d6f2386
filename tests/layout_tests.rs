mod common;

use common::fixtures::*;
use common::{TestResult, assert_bounds, layout_json};
use serde_json::json;

#[test]
fn test_padded_vertical_stack() -> TestResult {
    let doc = layout_json(padded_stack())?;

    let desired = doc.tree.node(doc.root)?.desired_size().ok_or("root not measured")?;
    assert_eq!((desired.width, desired.height), (240.0, 125.0));
    assert_bounds(&doc, "root", 0.0, 0.0, 300.0, 400.0);
    assert_bounds(&doc, "a", 20.0, 20.0, 260.0, 40.0);
    assert_bounds(&doc, "b", 20.0, 75.0, 260.0, 30.0);
    Ok(())
}

#[test]
fn test_stack_child_alignment_shorthand() -> TestResult {
    let root = container(
        "root",
        json!({ "type": "stack", "spacing": 0 }),
        vec![
            with(leaf("centered", 100.0, 20.0), json!({ "horizontal": "center" })),
            with(leaf("grow", 100.0, 20.0), json!({ "vertical": "fill-and-expand" })),
            with(leaf("end", 100.0, 20.0), json!({ "horizontal": { "alignment": "end" } })),
        ],
    );
    let doc = layout_json(document(300.0, 200.0, root))?;

    assert_bounds(&doc, "centered", 100.0, 0.0, 100.0, 20.0);
    assert_bounds(&doc, "grow", 0.0, 20.0, 300.0, 160.0);
    assert_bounds(&doc, "end", 200.0, 180.0, 100.0, 20.0);
    Ok(())
}

#[test]
fn test_grid_with_shorthand_tracks() -> TestResult {
    let root = container(
        "grid",
        json!({
            "type": "grid",
            "rows": "auto",
            "columns": "auto, *",
            "rowSpacing": 0,
            "columnSpacing": 0
        }),
        vec![
            leaf("label", 60.0, 20.0),
            with(leaf("value", 10.0, 30.0), json!({ "grid": { "column": 1 } })),
        ],
    );
    let doc = layout_json(document(200.0, 100.0, root))?;

    assert_bounds(&doc, "label", 0.0, 0.0, 60.0, 30.0);
    assert_bounds(&doc, "value", 60.0, 0.0, 140.0, 30.0);
    Ok(())
}

#[test]
fn test_flex_space_between() -> TestResult {
    let root = container(
        "row",
        json!({ "type": "flex", "justifyContent": "space-between" }),
        vec![
            leaf("one", 50.0, 20.0),
            leaf("two", 50.0, 20.0),
            leaf("three", 50.0, 20.0),
        ],
    );
    let doc = layout_json(document(300.0, 50.0, root))?;

    assert_bounds(&doc, "one", 0.0, 0.0, 50.0, 50.0);
    assert_bounds(&doc, "two", 125.0, 0.0, 50.0, 50.0);
    assert_bounds(&doc, "three", 250.0, 0.0, 50.0, 50.0);
    Ok(())
}

#[test]
fn test_flex_row_reverse_starts_at_end() -> TestResult {
    let root = container(
        "row",
        json!({ "type": "flex", "direction": "row-reverse" }),
        vec![
            leaf("one", 50.0, 20.0),
            leaf("two", 50.0, 20.0),
            leaf("three", 50.0, 20.0),
        ],
    );
    let doc = layout_json(document(300.0, 50.0, root))?;

    assert_bounds(&doc, "one", 250.0, 0.0, 50.0, 50.0);
    assert_bounds(&doc, "two", 200.0, 0.0, 50.0, 50.0);
    assert_bounds(&doc, "three", 150.0, 0.0, 50.0, 50.0);
    Ok(())
}

#[test]
fn test_flex_grow_factors() -> TestResult {
    let root = container(
        "row",
        json!({ "type": "flex" }),
        vec![
            with(
                leaf("narrow", 10.0, 20.0),
                json!({ "flex": { "basis": { "fixed": 100 }, "grow": 1 } }),
            ),
            with(
                leaf("wide", 10.0, 20.0),
                json!({ "flex": { "basis": { "fixed": 100 }, "grow": 3 } }),
            ),
        ],
    );
    let doc = layout_json(document(600.0, 100.0, root))?;

    assert_bounds(&doc, "narrow", 0.0, 0.0, 200.0, 100.0);
    assert_bounds(&doc, "wide", 200.0, 0.0, 400.0, 100.0);
    Ok(())
}

#[test]
fn test_absolute_mixed_units() -> TestResult {
    let root = container(
        "canvas",
        json!({ "type": "absolute" }),
        vec![
            // X and width proportional, y and height absolute.
            with(
                leaf("banner", 10.0, 10.0),
                json!({ "absolute": {
                    "x": 0.5, "y": 0, "width": 0.5, "height": 20,
                    "flags": "X_PROPORTIONAL | WIDTH_PROPORTIONAL"
                } }),
            ),
            with(leaf("badge", 16.0, 16.0), json!({ "absolute": { "x": 4, "y": 4 } })),
        ],
    );
    let doc = layout_json(document(200.0, 100.0, root))?;

    assert_bounds(&doc, "banner", 100.0, 0.0, 100.0, 20.0);
    assert_bounds(&doc, "badge", 4.0, 4.0, 16.0, 16.0);
    Ok(())
}

#[test]
fn test_relative_sibling_by_name() -> TestResult {
    let root = container(
        "form",
        json!({ "type": "relative" }),
        vec![
            with(
                leaf("a", 40.0, 20.0),
                json!({ "relative": [
                    { "target": "x", "constant": 10 },
                    { "target": "width", "property": "width", "factor": 0.5 }
                ] }),
            ),
            with(
                leaf("b", 30.0, 15.0),
                json!({ "relative": [
                    { "target": "x", "sibling": "a", "property": "width", "constant": 20 }
                ] }),
            ),
        ],
    );
    let doc = layout_json(document(200.0, 100.0, root))?;

    assert_bounds(&doc, "a", 10.0, 0.0, 100.0, 20.0);
    assert_bounds(&doc, "b", 120.0, 0.0, 30.0, 15.0);
    Ok(())
}

#[test]
fn test_hidden_nodes_are_not_reported() -> TestResult {
    let root = container(
        "root",
        json!({ "type": "stack", "spacing": 10 }),
        vec![
            leaf("a", 50.0, 20.0),
            with(leaf("b", 50.0, 30.0), json!({ "visible": false })),
            leaf("c", 50.0, 10.0),
        ],
    );
    let doc = layout_json(document(300.0, 400.0, root))?;

    let named = doc.named_bounds();
    assert!(!named.contains_key("b"));
    assert_eq!(named.keys().collect::<Vec<_>>(), vec!["a", "c", "root"]);
    assert_bounds(&doc, "c", 0.0, 30.0, 300.0, 10.0);
    Ok(())
}

#[test]
fn test_nested_containers() -> TestResult {
    let toolbar = container(
        "toolbar",
        json!({ "type": "stack", "orientation": "horizontal", "spacing": 5 }),
        vec![leaf("back", 30.0, 30.0), leaf("title", 120.0, 20.0)],
    );
    let root = with(
        container(
            "page",
            json!({ "type": "stack", "spacing": 0 }),
            vec![
                with(toolbar, json!({ "vertical": "start", "margin": "0 0 10 0" })),
                with(leaf("body", 10.0, 10.0), json!({ "vertical": "fill-and-expand" })),
            ],
        ),
        json!({ "padding": "10 20" }),
    );
    let doc = layout_json(document(400.0, 300.0, root))?;

    assert_bounds(&doc, "toolbar", 20.0, 10.0, 360.0, 30.0);
    assert_bounds(&doc, "back", 20.0, 10.0, 30.0, 30.0);
    assert_bounds(&doc, "title", 55.0, 10.0, 120.0, 30.0);
    assert_bounds(&doc, "body", 20.0, 50.0, 360.0, 240.0);
    Ok(())
}
