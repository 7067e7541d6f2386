use super::LayoutAlgorithm;
use crate::LayoutError;
use crate::algorithms::tracks::{TrackItem, TrackSolver, spanned_extent, track_offsets};
use crate::context::LayoutContext;
use crate::node::{Attached, ChildEntry, NodeId, NodeProperties};
use crate::resolve::{align_in_rect, total_spacing, validate_spacing};
use trellis_style::{GridDefinition, GridPlacement};
use trellis_types::{Axis, AxisConstraint, Rect, Size, SizeConstraint};

/// Children placed in cells of row and column tracks.
pub struct GridLayout<'c> {
    definition: &'c GridDefinition,
    children: &'c [ChildEntry],
}

struct Cell {
    id: NodeId,
    placement: GridPlacement,
    props: NodeProperties,
    footprint: Size,
}

/// Resolved tracks plus the visible children measured against them.
struct GridSolution {
    columns: Vec<f32>,
    rows: Vec<f32>,
    cells: Vec<Cell>,
}

impl<'c> GridLayout<'c> {
    pub fn new(definition: &'c GridDefinition, children: &'c [ChildEntry]) -> Self {
        Self {
            definition,
            children,
        }
    }

    fn solver(&self, axis: Axis) -> TrackSolver<'c> {
        TrackSolver::new(self.definition.tracks(axis), self.definition.spacing(axis))
    }

    fn validate(&self, node: NodeId) -> Result<(), LayoutError> {
        validate_spacing(node, "row spacing", self.definition.row_spacing)?;
        validate_spacing(node, "column spacing", self.definition.column_spacing)?;
        for axis in [Axis::Horizontal, Axis::Vertical] {
            self.solver(axis)
                .validate()
                .map_err(|reason| LayoutError::Configuration { node, reason })?;
        }
        Ok(())
    }

    fn placement(&self, entry: &ChildEntry) -> Result<GridPlacement, LayoutError> {
        let placement = match &entry.attached {
            Attached::Grid(p) => *p,
            Attached::None => GridPlacement::default(),
            other => {
                return Err(LayoutError::InvalidTree(format!(
                    "grid child {:?} carries a {} attachment",
                    entry.id,
                    other.variant_name()
                )));
            }
        };
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let item = TrackItem::new(placement.start(axis), placement.span(axis), 0.0);
            self.solver(axis)
                .check_item(&item)
                .map_err(|reason| LayoutError::Configuration {
                    node: entry.id,
                    reason: format!("grid placement {:?}: {}", placement, reason),
                })?;
        }
        Ok(placement)
    }

    fn items(cells: &[Cell], axis: Axis) -> Vec<TrackItem> {
        cells
            .iter()
            .map(|c| {
                TrackItem::new(
                    c.placement.start(axis),
                    c.placement.span(axis),
                    c.footprint.along(axis),
                )
            })
            .collect()
    }

    /// Columns first from natural widths, then every child is re-measured
    /// at its cell width so rows see heights that match the final columns.
    fn solve(
        &self,
        ctx: &mut LayoutContext<'_>,
        constraint: SizeConstraint,
    ) -> Result<GridSolution, LayoutError> {
        let loose = constraint.loosen();
        let mut cells = Vec::with_capacity(self.children.len());
        for entry in self.children {
            let placement = self.placement(entry)?;
            let footprint = ctx.measure_child(entry.id, loose)?;
            let props = ctx.properties(entry.id)?;
            if props.visible {
                cells.push(Cell {
                    id: entry.id,
                    placement,
                    props,
                    footprint,
                });
            }
        }

        let column_spacing = self.definition.column_spacing;
        let columns = self
            .solver(Axis::Horizontal)
            .resolve(constraint.width.bound(), &Self::items(&cells, Axis::Horizontal));

        for cell in &mut cells {
            let cell_width = spanned_extent(
                &columns,
                cell.placement.column,
                cell.placement.column_span,
                column_spacing,
            );
            let cell_constraint = SizeConstraint::new(
                AxisConstraint::at_most(cell_width),
                loose.height,
            );
            cell.footprint = ctx.measure_child(cell.id, cell_constraint)?;
        }

        let rows = self
            .solver(Axis::Vertical)
            .resolve(constraint.height.bound(), &Self::items(&cells, Axis::Vertical));

        Ok(GridSolution {
            columns,
            rows,
            cells,
        })
    }
}

impl LayoutAlgorithm for GridLayout<'_> {
    fn measure(
        &self,
        ctx: &mut LayoutContext<'_>,
        node: NodeId,
        constraint: SizeConstraint,
    ) -> Result<Size, LayoutError> {
        self.validate(node)?;
        let solution = self.solve(ctx, constraint)?;
        let width = solution.columns.iter().sum::<f32>()
            + total_spacing(self.definition.column_spacing, solution.columns.len());
        let height = solution.rows.iter().sum::<f32>()
            + total_spacing(self.definition.row_spacing, solution.rows.len());
        Ok(Size::new(width, height))
    }

    fn arrange(
        &self,
        ctx: &mut LayoutContext<'_>,
        node: NodeId,
        content: Rect,
    ) -> Result<(), LayoutError> {
        self.validate(node)?;
        let solution = self.solve(ctx, SizeConstraint::loose(content.size()))?;
        let column_spacing = self.definition.column_spacing;
        let row_spacing = self.definition.row_spacing;
        let xs = track_offsets(content.x, &solution.columns, column_spacing);
        let ys = track_offsets(content.y, &solution.rows, row_spacing);

        for cell in &solution.cells {
            let p = cell.placement;
            let slot = Rect::new(
                xs[p.column],
                ys[p.row],
                spanned_extent(&solution.columns, p.column, p.column_span, column_spacing),
                spanned_extent(&solution.rows, p.row, p.row_span, row_spacing),
            );
            let rect = align_in_rect(slot, cell.props.horizontal, cell.props.vertical, cell.footprint);
            ctx.arrange_child(cell.id, rect)?;
        }
        Ok(())
    }
}
