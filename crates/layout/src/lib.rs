use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid configuration on {node:?}: {reason}")]
    Configuration { node: NodeId, reason: String },
    #[error("Constraint cycle in relative container {container:?} between {nodes:?}")]
    Cycle { container: NodeId, nodes: Vec<NodeId> },
    #[error("Node {0:?} does not exist in this tree.")]
    NodeNotFound(NodeId),
    #[error("Invalid tree operation: {0}")]
    InvalidTree(String),
    #[error("Node {0:?} must be measured before it can be arranged.")]
    NotMeasured(NodeId),
}

pub mod algorithms;
pub mod cache;
pub mod config;
pub mod constraint;
pub mod context;
pub mod measure;
pub mod node;
pub mod node_kind;
pub mod perf;
pub mod resolve;
pub mod strategies;
pub mod tree;
pub mod util;

pub(crate) mod engine;
pub use self::engine::LayoutEngine;

pub use self::cache::MeasureCache;
pub use self::config::LayoutConfig;
pub use self::constraint::{ConstraintExpression, ConstraintSource};
pub use self::context::LayoutContext;
pub use self::measure::{ContentMeasurer, IntrinsicSizes};
pub use self::node::{Attached, ChildEntry, LayoutNode, NodeId, NodeProperties, Strategy};
pub use self::node_kind::StrategyKind;
pub use self::perf::{DebugProfiler, NoOpProfiler, ProfileSummary, Profiler};
pub use self::tree::LayoutTree;

// Re-export geometry types so callers don't need a direct dependency on the
// types crate.
pub use trellis_types::geometry::{Axis, AxisConstraint, Point, Rect, Size, SizeConstraint, Thickness};

#[cfg(test)]
mod test_utils;
