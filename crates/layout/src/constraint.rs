//! Linear constraint expressions attached to children of a Relative container.

use crate::node::NodeId;
use trellis_style::LayoutProperty;
use trellis_types::Rect;

/// What a constraint expression reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintSource {
    /// The Relative container's content rectangle, in local coordinates.
    Container,
    /// A sibling under the same Relative container.
    Sibling(NodeId),
}

/// Binds `target` of the owning child to
/// `factor * source.property + constant`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintExpression {
    pub target: LayoutProperty,
    pub source: ConstraintSource,
    pub property: LayoutProperty,
    pub factor: f32,
    pub constant: f32,
}

impl ConstraintExpression {
    pub fn container(
        target: LayoutProperty,
        property: LayoutProperty,
        factor: f32,
        constant: f32,
    ) -> Self {
        Self {
            target,
            source: ConstraintSource::Container,
            property,
            factor,
            constant,
        }
    }

    pub fn sibling(
        target: LayoutProperty,
        sibling: NodeId,
        property: LayoutProperty,
        factor: f32,
        constant: f32,
    ) -> Self {
        Self {
            target,
            source: ConstraintSource::Sibling(sibling),
            property,
            factor,
            constant,
        }
    }

    /// Pins `target` to a fixed value.
    pub fn fixed(target: LayoutProperty, value: f32) -> Self {
        Self::container(target, LayoutProperty::X, 0.0, value)
    }

    pub fn sibling_id(&self) -> Option<NodeId> {
        match self.source {
            ConstraintSource::Sibling(id) => Some(id),
            ConstraintSource::Container => None,
        }
    }

    pub fn evaluate(&self, source: &Rect) -> f32 {
        self.factor * self.property.read(source) + self.constant
    }

    pub fn is_finite(&self) -> bool {
        self.factor.is_finite() && self.constant.is_finite()
    }
}
