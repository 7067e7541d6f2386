use serde::{Deserialize, Serialize};
use trellis_types::{Axis, Rect};

/// One of the four bound components of a node.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum LayoutProperty {
    X,
    Y,
    Width,
    Height,
}

impl LayoutProperty {
    pub const ALL: [LayoutProperty; 4] = [
        LayoutProperty::X,
        LayoutProperty::Y,
        LayoutProperty::Width,
        LayoutProperty::Height,
    ];

    pub fn axis(self) -> Axis {
        match self {
            LayoutProperty::X | LayoutProperty::Width => Axis::Horizontal,
            LayoutProperty::Y | LayoutProperty::Height => Axis::Vertical,
        }
    }

    pub fn is_position(self) -> bool {
        matches!(self, LayoutProperty::X | LayoutProperty::Y)
    }

    /// Reads this component from a rectangle.
    pub fn read(self, rect: &Rect) -> f32 {
        match self {
            LayoutProperty::X => rect.x,
            LayoutProperty::Y => rect.y,
            LayoutProperty::Width => rect.width,
            LayoutProperty::Height => rect.height,
        }
    }
}
