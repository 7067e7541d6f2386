use super::LayoutAlgorithm;
use crate::LayoutError;
use crate::context::LayoutContext;
use crate::node::{ChildEntry, NodeId, NodeProperties};
use crate::resolve::{align, total_spacing, validate_spacing};
use trellis_style::StackConfig;
use trellis_types::{Axis, AxisConstraint, Rect, Size, SizeConstraint};

/// Children one after another along the orientation axis.
pub struct StackLayout<'c> {
    config: &'c StackConfig,
    children: &'c [ChildEntry],
}

struct StackItem {
    id: NodeId,
    footprint: Size,
    props: NodeProperties,
}

impl<'c> StackLayout<'c> {
    pub fn new(config: &'c StackConfig, children: &'c [ChildEntry]) -> Self {
        Self { config, children }
    }

    fn main_axis(&self) -> Axis {
        self.config.orientation.main_axis()
    }

    /// Measures every child (hidden ones included, so their caches stay
    /// warm) and returns the visible ones in order.
    fn measure_children(
        &self,
        ctx: &mut LayoutContext<'_>,
        cross_limit: AxisConstraint,
    ) -> Result<Vec<StackItem>, LayoutError> {
        let axis = self.main_axis();
        let child_constraint =
            SizeConstraint::from_axes(axis, AxisConstraint::Unconstrained, cross_limit);

        let mut items = Vec::with_capacity(self.children.len());
        for entry in self.children {
            let footprint = ctx.measure_child(entry.id, child_constraint)?;
            let props = ctx.properties(entry.id)?;
            if props.visible {
                items.push(StackItem {
                    id: entry.id,
                    footprint,
                    props,
                });
            }
        }
        Ok(items)
    }
}

impl LayoutAlgorithm for StackLayout<'_> {
    fn measure(
        &self,
        ctx: &mut LayoutContext<'_>,
        node: NodeId,
        constraint: SizeConstraint,
    ) -> Result<Size, LayoutError> {
        validate_spacing(node, "stack spacing", self.config.spacing)?;
        let axis = self.main_axis();
        let cross = axis.cross();

        let items = self.measure_children(ctx, constraint.along(cross).loosen())?;
        let main: f32 = items.iter().map(|it| it.footprint.along(axis)).sum::<f32>()
            + total_spacing(self.config.spacing, items.len());
        let cross_extent = items
            .iter()
            .map(|it| it.footprint.along(cross))
            .fold(0.0f32, f32::max);

        Ok(Size::from_axes(axis, main, cross_extent))
    }

    fn arrange(
        &self,
        ctx: &mut LayoutContext<'_>,
        node: NodeId,
        content: Rect,
    ) -> Result<(), LayoutError> {
        validate_spacing(node, "stack spacing", self.config.spacing)?;
        let axis = self.main_axis();
        let cross = axis.cross();
        let spacing = self.config.spacing;

        let items = self.measure_children(ctx, AxisConstraint::at_most(content.extent(cross)))?;

        let natural: f32 = items.iter().map(|it| it.footprint.along(axis)).sum();
        let expanders = items
            .iter()
            .filter(|it| it.props.options(axis).expands)
            .count();
        let leftover =
            (content.extent(axis) - natural - total_spacing(spacing, items.len())).max(0.0);
        let share = if expanders > 0 {
            leftover / expanders as f32
        } else {
            0.0
        };

        let mut cursor = content.start(axis);
        for item in &items {
            let natural_main = item.footprint.along(axis);
            let main_options = item.props.options(axis);
            let slot = if main_options.expands {
                natural_main + share
            } else {
                natural_main
            };

            let (main_start, main_extent) = align(main_options, cursor, slot, natural_main);
            let (cross_start, cross_extent) = align(
                item.props.options(cross),
                content.start(cross),
                content.extent(cross),
                item.footprint.along(cross),
            );
            ctx.arrange_child(
                item.id,
                Rect::from_axes(axis, main_start, main_extent, cross_start, cross_extent),
            )?;
            cursor += slot + spacing;
        }
        Ok(())
    }
}
