use super::LayoutAlgorithm;
use crate::LayoutError;
use crate::algorithms::flexible::{FlexFactors, break_lines, justify, resolve_line};
use crate::context::LayoutContext;
use crate::node::{Attached, ChildEntry, NodeId, NodeProperties};
use crate::resolve::{align, total_spacing, validate_spacing};
use itertools::Itertools;
use trellis_style::{FlexBasis, FlexConfig, FlexItem, FlexWrap};
use trellis_types::{Axis, AxisConstraint, Rect, Size, SizeConstraint};

/// Children flowed along a main axis, grown or shrunk to fit each line,
/// optionally wrapping onto further lines.
pub struct FlexLayout<'c> {
    config: &'c FlexConfig,
    children: &'c [ChildEntry],
}

struct PlannedItem {
    id: NodeId,
    props: NodeProperties,
    main: f32,
    cross: f32,
    grows: bool,
}

struct PlannedLine {
    items: Vec<PlannedItem>,
    cross: f32,
}

impl PlannedLine {
    fn used_main(&self, spacing: f32) -> f32 {
        self.items.iter().map(|it| it.main).sum::<f32>() + total_spacing(spacing, self.items.len())
    }
}

impl<'c> FlexLayout<'c> {
    pub fn new(config: &'c FlexConfig, children: &'c [ChildEntry]) -> Self {
        Self { config, children }
    }

    fn axis(&self) -> Axis {
        self.config.direction.main_axis()
    }

    fn validate(&self, node: NodeId) -> Result<(), LayoutError> {
        validate_spacing(node, "flex spacing", self.config.spacing)?;
        validate_spacing(node, "flex line spacing", self.config.line_spacing)
    }

    fn item(entry: &ChildEntry) -> Result<FlexItem, LayoutError> {
        let item = match &entry.attached {
            Attached::Flex(item) => *item,
            Attached::None => FlexItem::default(),
            other => {
                return Err(LayoutError::InvalidTree(format!(
                    "flex child {:?} carries a {} attachment",
                    entry.id,
                    other.variant_name()
                )));
            }
        };
        let invalid = |reason: String| LayoutError::Configuration {
            node: entry.id,
            reason,
        };
        if !item.grow.is_finite() || item.grow < 0.0 {
            return Err(invalid(format!("flex grow must be non-negative, got {}", item.grow)));
        }
        if !item.shrink.is_finite() || item.shrink < 0.0 {
            return Err(invalid(format!(
                "flex shrink must be non-negative, got {}",
                item.shrink
            )));
        }
        match item.basis {
            FlexBasis::Fixed(v) if !v.is_finite() || v < 0.0 => {
                return Err(invalid(format!("fixed flex basis must be non-negative, got {}", v)));
            }
            FlexBasis::Relative(f) if !f.is_finite() || !(0.0..=1.0).contains(&f) => {
                return Err(invalid(format!("relative flex basis must lie in [0, 1], got {}", f)));
            }
            _ => {}
        }
        Ok(item)
    }

    /// Measures children, breaks them into lines and resolves main sizes.
    fn plan(
        &self,
        ctx: &mut LayoutContext<'_>,
        constraint: SizeConstraint,
    ) -> Result<Vec<PlannedLine>, LayoutError> {
        let axis = self.axis();
        let cross = axis.cross();
        let main_available = constraint.along(axis).bound();
        let cross_limit = constraint.along(cross).loosen();
        let natural_constraint =
            SizeConstraint::from_axes(axis, AxisConstraint::Unconstrained, cross_limit);

        let mut visible = Vec::with_capacity(self.children.len());
        for entry in self.children {
            let item = Self::item(entry)?;
            let natural = ctx.measure_child(entry.id, natural_constraint)?;
            let props = ctx.properties(entry.id)?;
            if !props.visible {
                continue;
            }
            let basis = match item.basis {
                FlexBasis::Auto => natural.along(axis),
                FlexBasis::Fixed(v) => v,
                FlexBasis::Relative(f) => f * main_available.unwrap_or(0.0),
            };
            // An expanding node with no explicit growth still claims space.
            let grow = if item.grow == 0.0 && props.options(axis).expands {
                1.0
            } else {
                item.grow
            };
            visible.push((
                entry.id,
                props,
                FlexFactors {
                    basis,
                    grow,
                    shrink: item.shrink,
                },
            ));
        }

        let bases = visible.iter().map(|(_, _, f)| f.basis).collect_vec();
        let ranges = break_lines(
            &bases,
            self.config.spacing,
            main_available,
            self.config.wrap == FlexWrap::Wrap,
        );

        let mut lines = Vec::with_capacity(ranges.len());
        for range in ranges {
            let members = &visible[range];
            let factors = members.iter().map(|(_, _, f)| *f).collect_vec();
            let sizes = resolve_line(&factors, self.config.spacing, main_available);

            let mut items = Vec::with_capacity(members.len());
            for ((id, props, factors), main) in members.iter().zip(sizes) {
                let sized = SizeConstraint::from_axes(axis, AxisConstraint::Exact(main), cross_limit);
                let footprint = ctx.measure_child(*id, sized)?;
                items.push(PlannedItem {
                    id: *id,
                    props: *props,
                    main,
                    cross: footprint.along(cross),
                    grows: factors.grow > 0.0,
                });
            }
            let line_cross = items.iter().map(|it| it.cross).fold(0.0f32, f32::max);
            lines.push(PlannedLine {
                items,
                cross: line_cross,
            });
        }
        Ok(lines)
    }

    /// A single non-wrapping line stretches to a bounded cross axis, so a
    /// parent measuring this flex sees the full cross bound, not the line's
    /// own extent.
    fn single_line_fills_cross(&self, lines: &[PlannedLine]) -> bool {
        self.config.wrap == FlexWrap::NoWrap && lines.len() == 1
    }
}

impl LayoutAlgorithm for FlexLayout<'_> {
    fn measure(
        &self,
        ctx: &mut LayoutContext<'_>,
        node: NodeId,
        constraint: SizeConstraint,
    ) -> Result<Size, LayoutError> {
        self.validate(node)?;
        let axis = self.axis();
        let cross = axis.cross();
        let lines = self.plan(ctx, constraint)?;

        let main = lines
            .iter()
            .map(|line| line.used_main(self.config.spacing))
            .fold(0.0f32, f32::max);
        let cross_extent = match constraint.along(cross).bound() {
            Some(bound) if self.single_line_fills_cross(&lines) => bound,
            _ => {
                lines.iter().map(|line| line.cross).sum::<f32>()
                    + total_spacing(self.config.line_spacing, lines.len())
            }
        };
        Ok(Size::from_axes(axis, main, cross_extent))
    }

    fn arrange(
        &self,
        ctx: &mut LayoutContext<'_>,
        node: NodeId,
        content: Rect,
    ) -> Result<(), LayoutError> {
        self.validate(node)?;
        let axis = self.axis();
        let cross = axis.cross();
        let spacing = self.config.spacing;
        let reversed = self.config.direction.is_reversed();

        let mut lines = self.plan(ctx, SizeConstraint::loose(content.size()))?;
        if self.single_line_fills_cross(&lines) {
            if let Some(line) = lines.first_mut() {
                line.cross = content.extent(cross);
            }
        }

        let main_start = content.start(axis);
        let main_end = main_start + content.extent(axis);
        let mut cross_cursor = content.start(cross);

        for line in &lines {
            let free = content.extent(axis) - line.used_main(spacing);
            let (leading, between) = if line.items.iter().any(|it| it.grows) {
                (0.0, 0.0)
            } else {
                justify(self.config.justify_content, free, line.items.len())
            };

            let mut cursor = if reversed {
                main_end - leading
            } else {
                main_start + leading
            };
            for item in &line.items {
                let item_start = if reversed { cursor - item.main } else { cursor };
                let (cross_start, cross_extent) = align(
                    item.props.options(cross),
                    cross_cursor,
                    line.cross,
                    item.cross,
                );
                ctx.arrange_child(
                    item.id,
                    Rect::from_axes(axis, item_start, item.main, cross_start, cross_extent),
                )?;
                let step = item.main + spacing + between;
                cursor = if reversed { cursor - step } else { cursor + step };
            }
            cross_cursor += line.cross + self.config.line_spacing;
        }
        Ok(())
    }
}
