//! Node storage types: the arena key, per-node properties, the strategy a
//! container lays its children out with, and the data a child carries for
//! its container.

use crate::cache::MeasureCache;
use crate::constraint::ConstraintExpression;
use crate::node_kind::StrategyKind;
use slotmap::new_key_type;
use trellis_style::{
    AbsoluteBounds, FlexConfig, FlexItem, GridDefinition, GridPlacement, LayoutOptions, Paint,
    StackConfig,
};
use trellis_types::{Axis, Rect, Size, Thickness};

new_key_type! {
    /// Opaque identifier for a node stored in a [`LayoutTree`](crate::LayoutTree).
    pub struct NodeId;
}

/// How a container arranges its children. A `Leaf` has no children and
/// takes its size from the [`ContentMeasurer`](crate::ContentMeasurer).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Strategy {
    Stack(StackConfig),
    Grid(GridDefinition),
    Absolute,
    Flex(FlexConfig),
    Relative,
    #[default]
    Leaf,
}

impl Strategy {
    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Stack(_) => StrategyKind::Stack,
            Strategy::Grid(_) => StrategyKind::Grid,
            Strategy::Absolute => StrategyKind::Absolute,
            Strategy::Flex(_) => StrategyKind::Flex,
            Strategy::Relative => StrategyKind::Relative,
            Strategy::Leaf => StrategyKind::Leaf,
        }
    }

    /// Attached data given to a child added with [`Attached::None`].
    pub fn default_attachment(&self) -> Attached {
        match self {
            Strategy::Grid(_) => Attached::Grid(GridPlacement::default()),
            Strategy::Flex(_) => Attached::Flex(FlexItem::default()),
            Strategy::Absolute => Attached::Absolute(AbsoluteBounds::default()),
            Strategy::Relative => Attached::Relative(Vec::new()),
            Strategy::Stack(_) | Strategy::Leaf => Attached::None,
        }
    }

    /// Whether a child carrying `attached` may live under this strategy.
    pub fn accepts(&self, attached: &Attached) -> bool {
        matches!(
            (self, attached),
            (Strategy::Stack(_), Attached::None)
                | (Strategy::Grid(_), Attached::Grid(_))
                | (Strategy::Flex(_), Attached::Flex(_))
                | (Strategy::Absolute, Attached::Absolute(_))
                | (Strategy::Relative, Attached::Relative(_))
        )
    }
}

/// Per-child data interpreted by the parent's strategy.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Attached {
    #[default]
    None,
    Grid(GridPlacement),
    Flex(FlexItem),
    Absolute(AbsoluteBounds),
    Relative(Vec<ConstraintExpression>),
}

impl Attached {
    pub fn variant_name(&self) -> &'static str {
        match self {
            Attached::None => "None",
            Attached::Grid(_) => "Grid",
            Attached::Flex(_) => "Flex",
            Attached::Absolute(_) => "Absolute",
            Attached::Relative(_) => "Relative",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChildEntry {
    pub id: NodeId,
    pub attached: Attached,
}

/// Layout-affecting properties shared by every node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeProperties {
    pub padding: Thickness,
    pub margin: Thickness,
    pub horizontal: LayoutOptions,
    pub vertical: LayoutOptions,
    pub visible: bool,
    pub width_request: Option<f32>,
    pub height_request: Option<f32>,
    /// Carried for the renderer; never read by layout.
    pub paint: Paint,
}

impl Default for NodeProperties {
    fn default() -> Self {
        Self {
            padding: Thickness::ZERO,
            margin: Thickness::ZERO,
            horizontal: LayoutOptions::FILL,
            vertical: LayoutOptions::FILL,
            visible: true,
            width_request: None,
            height_request: None,
            paint: Paint::default(),
        }
    }
}

impl NodeProperties {
    pub fn options(&self, axis: Axis) -> LayoutOptions {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    pub fn size_request(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.width_request,
            Axis::Vertical => self.height_request,
        }
    }
}

/// A node in the layout arena.
///
/// Geometry (`desired_size`, `bounds`) is written by the engine; everything
/// else is configured before insertion with the `with_*` builders or
/// afterwards through the [`LayoutTree`](crate::LayoutTree) setters, which
/// take care of invalidation.
#[derive(Debug, Clone, Default)]
pub struct LayoutNode {
    pub name: Option<String>,
    pub strategy: Strategy,
    pub properties: NodeProperties,
    pub(crate) children: Vec<ChildEntry>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) desired_size: Option<Size>,
    pub(crate) bounds: Option<Rect>,
    pub(crate) cache: MeasureCache,
}

impl LayoutNode {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Default::default()
        }
    }

    pub fn leaf() -> Self {
        Self::new(Strategy::Leaf)
    }

    pub fn stack(config: StackConfig) -> Self {
        Self::new(Strategy::Stack(config))
    }

    pub fn grid(definition: GridDefinition) -> Self {
        Self::new(Strategy::Grid(definition))
    }

    pub fn flex(config: FlexConfig) -> Self {
        Self::new(Strategy::Flex(config))
    }

    pub fn absolute() -> Self {
        Self::new(Strategy::Absolute)
    }

    pub fn relative() -> Self {
        Self::new(Strategy::Relative)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_padding(mut self, padding: Thickness) -> Self {
        self.properties.padding = padding;
        self
    }

    pub fn with_margin(mut self, margin: Thickness) -> Self {
        self.properties.margin = margin;
        self
    }

    pub fn with_options(mut self, horizontal: LayoutOptions, vertical: LayoutOptions) -> Self {
        self.properties.horizontal = horizontal;
        self.properties.vertical = vertical;
        self
    }

    pub fn with_horizontal(mut self, options: LayoutOptions) -> Self {
        self.properties.horizontal = options;
        self
    }

    pub fn with_vertical(mut self, options: LayoutOptions) -> Self {
        self.properties.vertical = options;
        self
    }

    pub fn with_size_request(mut self, width: Option<f32>, height: Option<f32>) -> Self {
        self.properties.width_request = width;
        self.properties.height_request = height;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.properties.visible = visible;
        self
    }

    pub fn with_paint(mut self, paint: Paint) -> Self {
        self.properties.paint = paint;
        self
    }

    pub fn children(&self) -> &[ChildEntry] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Size computed by the last measure pass, `None` when invalidated.
    pub fn desired_size(&self) -> Option<Size> {
        self.desired_size
    }

    /// Rectangle assigned by the last arrange pass, in root coordinates.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn is_visible(&self) -> bool {
        self.properties.visible
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.strategy.kind().as_str())
    }
}
