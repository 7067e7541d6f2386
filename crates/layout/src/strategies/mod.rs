//! The layout strategies a container can use.
//!
//! Each strategy borrows its configuration and child list for the duration
//! of one node's measure or arrange step; the engine dispatches through the
//! closed [`Strategy`](crate::Strategy) enum.

use crate::LayoutError;
use crate::context::LayoutContext;
use crate::node::NodeId;
use trellis_types::{Rect, Size, SizeConstraint};

mod absolute;
mod flex;
mod grid;
mod leaf;
mod relative;
mod stack;

pub use absolute::AbsoluteLayout;
pub use flex::FlexLayout;
pub use grid::GridLayout;
pub use leaf::LeafLayout;
pub use relative::RelativeLayout;
pub use stack::StackLayout;

pub trait LayoutAlgorithm {
    /// Computes the content size of `node` (padding excluded) under
    /// `constraint`, which has already had the padding removed.
    fn measure(
        &self,
        ctx: &mut LayoutContext<'_>,
        node: NodeId,
        constraint: SizeConstraint,
    ) -> Result<Size, LayoutError>;

    /// Positions the children of `node` inside its content rectangle.
    fn arrange(
        &self,
        ctx: &mut LayoutContext<'_>,
        node: NodeId,
        content: Rect,
    ) -> Result<(), LayoutError>;
}
