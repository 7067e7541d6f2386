use trellis_types::geometry::EPSILON;
use trellis_types::{Rect, Size};

/// Tolerant comparison for layout results (track sizes, rect components).
pub fn float_slices_fuzzy_eq(a: &[f32], b: &[f32]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < EPSILON)
}

pub fn sizes_fuzzy_eq(a: Size, b: Size) -> bool {
    float_slices_fuzzy_eq(&[a.width, a.height], &[b.width, b.height])
}

pub fn rects_fuzzy_eq(a: Rect, b: Rect) -> bool {
    float_slices_fuzzy_eq(
        &[a.x, a.y, a.width, a.height],
        &[b.x, b.y, b.width, b.height],
    )
}
