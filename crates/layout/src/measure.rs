//! The content-measurement collaborator consulted for Leaf nodes.

use crate::node::{LayoutNode, NodeId};
use std::collections::HashMap;
use trellis_types::{Size, SizeConstraint};

/// Supplies the intrinsic size of Leaf content (text, images, widgets).
///
/// `constraint` is the space left after the leaf's own padding; the
/// returned size should not include padding.
pub trait ContentMeasurer {
    fn intrinsic_size(&self, id: NodeId, node: &LayoutNode, constraint: SizeConstraint) -> Size;
}

impl<F> ContentMeasurer for F
where
    F: Fn(NodeId, &LayoutNode, SizeConstraint) -> Size,
{
    fn intrinsic_size(&self, id: NodeId, node: &LayoutNode, constraint: SizeConstraint) -> Size {
        self(id, node, constraint)
    }
}

/// Fixed intrinsic sizes keyed by node. Leaves without an entry measure as
/// zero.
#[derive(Debug, Clone, Default)]
pub struct IntrinsicSizes {
    sizes: HashMap<NodeId, Size>,
}

impl IntrinsicSizes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: NodeId, size: Size) {
        self.sizes.insert(id, size);
    }

    pub fn get(&self, id: NodeId) -> Option<Size> {
        self.sizes.get(&id).copied()
    }
}

impl ContentMeasurer for IntrinsicSizes {
    fn intrinsic_size(&self, id: NodeId, node: &LayoutNode, _constraint: SizeConstraint) -> Size {
        self.get(id).unwrap_or_else(|| {
            log::trace!("No intrinsic size for leaf '{}', using zero", node.display_name());
            Size::zero()
        })
    }
}
