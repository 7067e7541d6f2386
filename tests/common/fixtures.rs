use serde_json::{Value, json};

/// A leaf with a fixed intrinsic size.
pub fn leaf(name: &str, width: f32, height: f32) -> Value {
    json!({
        "name": name,
        "intrinsic": { "width": width, "height": height }
    })
}

/// Merges extra properties into a node.
pub fn with(mut node: Value, extra: Value) -> Value {
    if let (Some(target), Some(source)) = (node.as_object_mut(), extra.as_object()) {
        for (k, v) in source {
            target.insert(k.clone(), v.clone());
        }
    }
    node
}

pub fn container(name: &str, layout: Value, children: Vec<Value>) -> Value {
    json!({
        "name": name,
        "layout": layout,
        "children": children
    })
}

pub fn document(width: f32, height: f32, root: Value) -> Value {
    json!({
        "available": { "width": width, "height": height },
        "root": root
    })
}

/// The padded two-leaf vertical stack used across several tests.
pub fn padded_stack() -> Value {
    let root = with(
        container(
            "root",
            json!({ "type": "stack", "orientation": "vertical", "spacing": 15 }),
            vec![leaf("a", 200.0, 40.0), leaf("b", 150.0, 30.0)],
        ),
        json!({ "padding": 20 }),
    );
    document(300.0, 400.0, root)
}
