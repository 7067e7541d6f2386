//! Trellis lays out trees of Stack, Grid, Absolute, Flex and Relative
//! containers with a two-phase measure/arrange pass.
//!
//! The engine lives in `trellis-layout`; this crate re-exports it together
//! with the property vocabulary and adds JSON layout documents.

pub mod document;
pub mod error;

pub use document::{LayoutDocument, LoadedDocument, NodeSpec, StrategySpec};
pub use error::TrellisError;

pub use trellis_layout::{
    Attached, ChildEntry, ConstraintExpression, ConstraintSource, ContentMeasurer, DebugProfiler,
    IntrinsicSizes, LayoutConfig, LayoutEngine, LayoutError, LayoutNode, LayoutTree, NodeId,
    NodeProperties, NoOpProfiler, ProfileSummary, Profiler, Strategy, StrategyKind,
};
pub use trellis_style::{
    AbsoluteBounds, AbsoluteLayoutFlags, Alignment, FlexBasis, FlexConfig, FlexDirection,
    FlexItem, FlexWrap, GridDefinition, GridLength, GridPlacement, JustifyContent, LayoutOptions,
    LayoutProperty, Paint, StackConfig, StackOrientation,
};
pub use trellis_types::{Axis, AxisConstraint, Color, Point, Rect, Size, SizeConstraint, Thickness};
