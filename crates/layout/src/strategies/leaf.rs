use super::LayoutAlgorithm;
use crate::LayoutError;
use crate::context::LayoutContext;
use crate::node::NodeId;
use trellis_types::{Rect, Size, SizeConstraint};

/// Content nodes: sized by the [`ContentMeasurer`](crate::ContentMeasurer),
/// nothing to arrange.
pub struct LeafLayout;

impl LayoutAlgorithm for LeafLayout {
    fn measure(
        &self,
        ctx: &mut LayoutContext<'_>,
        node: NodeId,
        constraint: SizeConstraint,
    ) -> Result<Size, LayoutError> {
        let leaf = ctx.tree.node(node)?;
        Ok(ctx.measurer.intrinsic_size(node, leaf, constraint))
    }

    fn arrange(
        &self,
        _ctx: &mut LayoutContext<'_>,
        _node: NodeId,
        _content: Rect,
    ) -> Result<(), LayoutError> {
        Ok(())
    }
}
