use super::LayoutAlgorithm;
use crate::LayoutError;
use crate::algorithms::toposort::topological_order;
use crate::constraint::{ConstraintExpression, ConstraintSource};
use crate::context::LayoutContext;
use crate::node::{Attached, ChildEntry, NodeId};
use std::collections::HashMap;
use trellis_style::LayoutProperty;
use trellis_types::{AxisConstraint, Rect, Size, SizeConstraint};

/// Children positioned by linear expressions over the container and their
/// siblings.
pub struct RelativeLayout<'c> {
    children: &'c [ChildEntry],
}

impl<'c> RelativeLayout<'c> {
    pub fn new(children: &'c [ChildEntry]) -> Self {
        Self { children }
    }

    fn expressions(entry: &'c ChildEntry) -> Result<&'c [ConstraintExpression], LayoutError> {
        match &entry.attached {
            Attached::Relative(exprs) => Ok(exprs.as_slice()),
            Attached::None => Ok(&[]),
            other => Err(LayoutError::InvalidTree(format!(
                "relative child {:?} carries a {} attachment",
                entry.id,
                other.variant_name()
            ))),
        }
    }

    /// Child indices in evaluation order.
    fn order(&self, container: NodeId) -> Result<Vec<usize>, LayoutError> {
        let index: HashMap<NodeId, usize> = self
            .children
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id, i))
            .collect();

        let mut dependencies = Vec::with_capacity(self.children.len());
        for entry in self.children {
            let mut deps = Vec::new();
            for expr in Self::expressions(entry)? {
                if !expr.is_finite() {
                    return Err(LayoutError::Configuration {
                        node: entry.id,
                        reason: format!("constraint on {:?} has a non-finite term", expr.target),
                    });
                }
                if let Some(sibling) = expr.sibling_id() {
                    let Some(&i) = index.get(&sibling) else {
                        return Err(LayoutError::Configuration {
                            node: entry.id,
                            reason: format!(
                                "constraint on {:?} references {:?}, which is not a sibling",
                                expr.target, sibling
                            ),
                        });
                    };
                    deps.push(i);
                }
            }
            dependencies.push(deps);
        }

        topological_order(self.children.len(), &dependencies).map_err(|stuck| {
            LayoutError::Cycle {
                container,
                nodes: stuck.into_iter().map(|i| self.children[i].id).collect(),
            }
        })
    }

    /// Resolves every child's rectangle in container-local coordinates
    /// (content origin at zero). Returns `(id, visible, rect)` in child
    /// order.
    fn resolve(
        &self,
        ctx: &mut LayoutContext<'_>,
        container: NodeId,
        extent: Size,
        constraint: SizeConstraint,
    ) -> Result<Vec<(NodeId, bool, Rect)>, LayoutError> {
        let order = self.order(container)?;
        let container_rect = Rect::from_size(extent);
        let mut rects: Vec<Option<Rect>> = vec![None; self.children.len()];
        let index: HashMap<NodeId, usize> = self
            .children
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id, i))
            .collect();

        for &i in &order {
            let entry = &self.children[i];
            let exprs = Self::expressions(entry)?;

            // x, y, width, height; the last expression for a property wins.
            let mut bound: [Option<f32>; 4] = [None; 4];
            for expr in exprs {
                let source = match expr.source {
                    ConstraintSource::Container => container_rect,
                    ConstraintSource::Sibling(id) => index
                        .get(&id)
                        .and_then(|&j| rects[j])
                        .ok_or(LayoutError::NotMeasured(id))?,
                };
                let slot = match expr.target {
                    LayoutProperty::X => 0,
                    LayoutProperty::Y => 1,
                    LayoutProperty::Width => 2,
                    LayoutProperty::Height => 3,
                };
                bound[slot] = Some(expr.evaluate(&source));
            }
            let [x, y, width, height] = bound;

            let width = width.map(|w| w.max(0.0));
            let height = height.map(|h| h.max(0.0));
            let child_constraint = SizeConstraint::new(
                width.map_or(constraint.width, AxisConstraint::Exact),
                height.map_or(constraint.height, AxisConstraint::Exact),
            );
            let natural = ctx.measure_child(entry.id, child_constraint)?;
            rects[i] = Some(Rect::new(
                x.unwrap_or(0.0),
                y.unwrap_or(0.0),
                width.unwrap_or(natural.width),
                height.unwrap_or(natural.height),
            ));
        }

        let mut out = Vec::with_capacity(self.children.len());
        for (entry, rect) in self.children.iter().zip(rects) {
            let visible = ctx.is_visible(entry.id)?;
            out.push((entry.id, visible, rect.unwrap_or_default()));
        }
        Ok(out)
    }
}

impl LayoutAlgorithm for RelativeLayout<'_> {
    fn measure(
        &self,
        ctx: &mut LayoutContext<'_>,
        node: NodeId,
        constraint: SizeConstraint,
    ) -> Result<Size, LayoutError> {
        let resolved = self.resolve(ctx, node, constraint.bounded_size(), constraint.loosen())?;
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
        let resolved = self.resolve(
            ctx,
            node,
            content.size(),
            SizeConstraint::loose(content.size()),
        )?;
        for (id, visible, rect) in resolved {
            if visible {
                ctx.arrange_child(id, rect.translate(content.x, content.y))?;
            }
        }
        Ok(())
    }
}
