use super::LayoutAlgorithm;
use crate::LayoutError;
use crate::context::LayoutContext;
use crate::node::{Attached, ChildEntry, NodeId};
use trellis_style::{AbsoluteBounds, LayoutProperty};
use trellis_types::{AxisConstraint, Point, Rect, Size, SizeConstraint};

/// Children at explicit coordinates, absolute or proportional to the
/// container. Children may overflow.
pub struct AbsoluteLayout<'c> {
    children: &'c [ChildEntry],
}

impl<'c> AbsoluteLayout<'c> {
    pub fn new(children: &'c [ChildEntry]) -> Self {
        Self { children }
    }

    fn bounds(entry: &ChildEntry) -> Result<AbsoluteBounds, LayoutError> {
        let bounds = match &entry.attached {
            Attached::Absolute(b) => *b,
            Attached::None => AbsoluteBounds::default(),
            other => {
                return Err(LayoutError::InvalidTree(format!(
                    "absolute child {:?} carries a {} attachment",
                    entry.id,
                    other.variant_name()
                )));
            }
        };
        bounds
            .validate()
            .map_err(|reason| LayoutError::Configuration {
                node: entry.id,
                reason,
            })?;
        Ok(bounds)
    }

    /// Resolves each child's rectangle.
    ///
    /// Proportional components scale the content extent and are placed from
    /// `content.origin`; absolute positions are taken from `bounds_origin`
    /// (the container's own origin, before padding). Returns
    /// `(id, visible, rect)` for every child.
    fn resolve(
        &self,
        ctx: &mut LayoutContext<'_>,
        content: Rect,
        bounds_origin: Point,
    ) -> Result<Vec<(NodeId, bool, Rect)>, LayoutError> {
        let mut out = Vec::with_capacity(self.children.len());
        for entry in self.children {
            let bounds = Self::bounds(entry)?;
            let flags = bounds.flags;

            let extent = |property: LayoutProperty, value: Option<f32>| {
                value.map(|v| {
                    if flags.is_proportional(property) {
                        v * content.extent(property.axis())
                    } else {
                        v
                    }
                })
            };
            let width = extent(LayoutProperty::Width, bounds.width);
            let height = extent(LayoutProperty::Height, bounds.height);

            let child_constraint = SizeConstraint::new(
                width.map_or(AxisConstraint::Unconstrained, AxisConstraint::Exact),
                height.map_or(AxisConstraint::Unconstrained, AxisConstraint::Exact),
            );
            let natural = ctx.measure_child(entry.id, child_constraint)?;
            let size = Size::new(
                width.unwrap_or(natural.width),
                height.unwrap_or(natural.height),
            );

            let x = if flags.is_proportional(LayoutProperty::X) {
                content.x + bounds.x * content.width
            } else {
                bounds_origin.x + bounds.x
            };
            let y = if flags.is_proportional(LayoutProperty::Y) {
                content.y + bounds.y * content.height
            } else {
                bounds_origin.y + bounds.y
            };

            let visible = ctx.is_visible(entry.id)?;
            out.push((entry.id, visible, Rect::from_origin_size(Point::new(x, y), size)));
        }
        Ok(out)
    }
}

impl LayoutAlgorithm for AbsoluteLayout<'_> {
    fn measure(
        &self,
        ctx: &mut LayoutContext<'_>,
        node: NodeId,
        constraint: SizeConstraint,
    ) -> Result<Size, LayoutError> {
        let padding = ctx.properties(node)?.padding;
        // Work in content-local coordinates; the container origin then sits
        // at (-left, -top).
        let content = Rect::from_size(constraint.bounded_size());
        let origin = Point::new(-padding.left, -padding.top);
        let resolved = self.resolve(ctx, content, origin)?;

        let (right, bottom) = resolved
            .iter()
            .filter(|(_, visible, _)| *visible)
            .fold((0.0f32, 0.0f32), |(r, b), (_, _, rect)| {
                (r.max(rect.right()), b.max(rect.bottom()))
            });
        Ok(Size::new(right, bottom))
    }

    fn arrange(
        &self,
        ctx: &mut LayoutContext<'_>,
        node: NodeId,
        content: Rect,
    ) -> Result<(), LayoutError> {
        let origin = ctx
            .tree
            .node(node)?
            .bounds()
            .map(|b| b.origin())
            .unwrap_or_else(|| content.origin());
        let resolved = self.resolve(ctx, content, origin)?;
        for (id, visible, rect) in resolved {
            if visible {
                ctx.arrange_child(id, rect)?;
            }
        }
        Ok(())
    }
}
