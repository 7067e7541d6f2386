pub mod fixtures;

use serde_json::Value;
use trellis::{LayoutDocument, LoadedDocument, Rect, TrellisError};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Builds and lays out a JSON document.
pub fn layout_json(document: Value) -> Result<LoadedDocument, TrellisError> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut loaded = LayoutDocument::from_value(document)?.build()?;
    loaded.layout()?;
    Ok(loaded)
}

pub fn assert_bounds(doc: &LoadedDocument, name: &str, x: f32, y: f32, width: f32, height: f32) {
    let actual = doc
        .bounds(name)
        .unwrap_or_else(|| panic!("'{}' should have bounds", name));
    let expected = Rect::new(x, y, width, height);
    let close = [
        (actual.x, expected.x),
        (actual.y, expected.y),
        (actual.width, expected.width),
        (actual.height, expected.height),
    ]
    .iter()
    .all(|(a, e)| (a - e).abs() < 1e-3);
    assert!(close, "'{}': expected {:?}, got {:?}", name, expected, actual);
}
