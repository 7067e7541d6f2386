//! Alignment resolution and validation of the numeric properties every
//! strategy shares.

use crate::LayoutError;
use crate::node::NodeId;
use trellis_style::{Alignment, LayoutOptions};
use trellis_types::{Axis, Rect, Size, Thickness};

/// Places an item of `natural` extent inside the span
/// `[offered_start, offered_start + offered_extent]`.
///
/// Returns `(start, extent)`. Non-fill items keep their natural extent,
/// capped to the offered one.
pub fn align(
    options: LayoutOptions,
    offered_start: f32,
    offered_extent: f32,
    natural: f32,
) -> (f32, f32) {
    let offered_extent = offered_extent.max(0.0);
    let extent = natural.max(0.0).min(offered_extent);
    match options.alignment {
        Alignment::Fill => (offered_start, offered_extent),
        Alignment::Start => (offered_start, extent),
        Alignment::Center => (offered_start + (offered_extent - extent) / 2.0, extent),
        Alignment::End => (offered_start + offered_extent - extent, extent),
    }
}

/// Aligns `natural` inside `slot` on both axes.
pub fn align_in_rect(
    slot: Rect,
    horizontal: LayoutOptions,
    vertical: LayoutOptions,
    natural: Size,
) -> Rect {
    let (x, width) = align(horizontal, slot.x, slot.width, natural.width);
    let (y, height) = align(vertical, slot.y, slot.height, natural.height);
    Rect::new(x, y, width, height)
}

/// Aligns along `axis` only; the other axis keeps the slot's span.
pub fn align_on_axis(slot: Rect, axis: Axis, options: LayoutOptions, natural: f32) -> Rect {
    let (start, extent) = align(options, slot.start(axis), slot.extent(axis), natural);
    let cross = axis.cross();
    Rect::from_axes(axis, start, extent, slot.start(cross), slot.extent(cross))
}

pub fn validate_thickness(
    node: NodeId,
    what: &str,
    thickness: &Thickness,
) -> Result<(), LayoutError> {
    if thickness.is_valid() {
        Ok(())
    } else {
        Err(LayoutError::Configuration {
            node,
            reason: format!("{} must be finite and non-negative, got {:?}", what, thickness),
        })
    }
}

pub fn validate_spacing(node: NodeId, what: &str, spacing: f32) -> Result<(), LayoutError> {
    if spacing.is_finite() && spacing >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::Configuration {
            node,
            reason: format!("{} must be finite and non-negative, got {}", what, spacing),
        })
    }
}

/// Total gap taken by `count` items separated by `spacing`.
pub fn total_spacing(spacing: f32, count: usize) -> f32 {
    spacing * count.saturating_sub(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_modes() {
        assert_eq!(align(LayoutOptions::FILL, 10.0, 100.0, 30.0), (10.0, 100.0));
        assert_eq!(align(LayoutOptions::START, 10.0, 100.0, 30.0), (10.0, 30.0));
        assert_eq!(align(LayoutOptions::CENTER, 10.0, 100.0, 30.0), (45.0, 30.0));
        assert_eq!(align(LayoutOptions::END, 10.0, 100.0, 30.0), (80.0, 30.0));
        // `expands` does not change placement inside a given span.
        assert_eq!(
            align(LayoutOptions::END_AND_EXPAND, 10.0, 100.0, 30.0),
            (80.0, 30.0)
        );
    }

    #[test]
    fn test_align_caps_natural_to_offered() {
        assert_eq!(align(LayoutOptions::CENTER, 0.0, 20.0, 50.0), (0.0, 20.0));
    }

    #[test]
    fn test_align_in_rect() {
        let slot = Rect::new(0.0, 0.0, 100.0, 50.0);
        let placed = align_in_rect(
            slot,
            LayoutOptions::END,
            LayoutOptions::CENTER,
            Size::new(20.0, 10.0),
        );
        assert_eq!(placed, Rect::new(80.0, 20.0, 20.0, 10.0));

        let placed = align_on_axis(slot, Axis::Vertical, LayoutOptions::START, 10.0);
        assert_eq!(placed, Rect::new(0.0, 0.0, 100.0, 10.0));
    }

    #[test]
    fn test_total_spacing() {
        assert_eq!(total_spacing(6.0, 0), 0.0);
        assert_eq!(total_spacing(6.0, 1), 0.0);
        assert_eq!(total_spacing(6.0, 3), 12.0);
    }
}
