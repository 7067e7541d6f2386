//! Per-pass state and the node-level measure/arrange steps shared by every
//! strategy: size requests, padding, margin, caching and dispatch.

use crate::config::LayoutConfig;
use crate::measure::ContentMeasurer;
use crate::node::{ChildEntry, NodeId, NodeProperties, Strategy};
use crate::perf::Profiler;
use crate::resolve::validate_thickness;
use crate::strategies::{
    AbsoluteLayout, FlexLayout, GridLayout, LayoutAlgorithm, LeafLayout, RelativeLayout,
    StackLayout,
};
use crate::tree::LayoutTree;
use crate::LayoutError;
use trellis_types::{AxisConstraint, Rect, Size, SizeConstraint};

/// Everything a strategy needs while one pass runs.
pub struct LayoutContext<'a> {
    pub tree: &'a mut LayoutTree,
    pub measurer: &'a dyn ContentMeasurer,
    pub profiler: &'a dyn Profiler,
    pub config: &'a LayoutConfig,
}

impl<'a> LayoutContext<'a> {
    pub fn new(
        tree: &'a mut LayoutTree,
        measurer: &'a dyn ContentMeasurer,
        profiler: &'a dyn Profiler,
        config: &'a LayoutConfig,
    ) -> Self {
        Self {
            tree,
            measurer,
            profiler,
            config,
        }
    }

    pub fn properties(&self, id: NodeId) -> Result<NodeProperties, LayoutError> {
        Ok(self.tree.node(id)?.properties)
    }

    pub fn is_visible(&self, id: NodeId) -> Result<bool, LayoutError> {
        Ok(self.tree.node(id)?.properties.visible)
    }

    /// Measures `id` under `constraint` and records its desired size.
    ///
    /// Size requests pin the matching axis before the cache lookup; padding
    /// is removed from the constraint handed to the strategy and added back
    /// to its result.
    pub fn measure_node(
        &mut self,
        id: NodeId,
        constraint: SizeConstraint,
    ) -> Result<Size, LayoutError> {
        let node = self.tree.node(id)?;
        let props = node.properties;
        let constraint = apply_size_requests(&props, constraint);

        if self.config.memoize {
            if let Some(size) = node.cache.get(&constraint) {
                self.profiler.count_hit();
                log::trace!("Measure cache hit for '{}': {:?}", node.display_name(), size);
                self.tree.node_mut(id)?.desired_size = Some(size);
                return Ok(size);
            }
        }
        self.profiler.count_miss();

        validate_thickness(id, "padding", &props.padding)?;
        validate_thickness(id, "margin", &props.margin)?;

        let strategy = node.strategy.clone();
        let children = node.children.clone();
        let name = node.display_name().to_string();
        let inner = constraint.deflate(&props.padding);

        let content = match &strategy {
            Strategy::Stack(config) => StackLayout::new(config, &children).measure(self, id, inner),
            Strategy::Grid(definition) => {
                GridLayout::new(definition, &children).measure(self, id, inner)
            }
            Strategy::Absolute => AbsoluteLayout::new(&children).measure(self, id, inner),
            Strategy::Flex(config) => FlexLayout::new(config, &children).measure(self, id, inner),
            Strategy::Relative => RelativeLayout::new(&children).measure(self, id, inner),
            Strategy::Leaf => LeafLayout.measure(self, id, inner),
        }?;

        let mut size = content.inflate(&props.padding);
        // A request already pinned the constraint to an exact extent.
        if props.width_request.is_some_and(f32::is_finite) {
            size.width = constraint.width.min();
        }
        if props.height_request.is_some_and(f32::is_finite) {
            size.height = constraint.height.min();
        }
        if !size.is_sane() {
            log::debug!("Clamping desired size {:?} of '{}' to zero", size, name);
            size = size.sanitized();
        }
        let size = constraint.constrain(size).sanitized();
        log::trace!("Measured '{}' under {:?}: {:?}", name, constraint, size);

        let capacity = self.config.measure_cache_capacity;
        let memoize = self.config.memoize;
        let node = self.tree.node_mut(id)?;
        if memoize {
            node.cache.insert(constraint, size, capacity);
        }
        node.desired_size = Some(size);
        Ok(size)
    }

    /// Measures a child and returns its footprint: desired size plus margin.
    pub fn measure_child(
        &mut self,
        id: NodeId,
        constraint: SizeConstraint,
    ) -> Result<Size, LayoutError> {
        let margin = self.properties(id)?.margin;
        validate_thickness(id, "margin", &margin)?;
        let size = self.measure_node(id, constraint.deflate(&margin))?;
        Ok(size.inflate(&margin))
    }

    /// Assigns `rect` to `id` and lays out its children. Hidden nodes are
    /// skipped and keep whatever bounds they had.
    pub fn arrange_node(&mut self, id: NodeId, rect: Rect) -> Result<(), LayoutError> {
        let node = self.tree.node(id)?;
        if !node.properties.visible {
            log::trace!("Skipping arrange of hidden '{}'", node.display_name());
            return Ok(());
        }
        if node.desired_size.is_none() {
            return Err(LayoutError::NotMeasured(id));
        }

        let props = node.properties;
        let strategy = node.strategy.clone();
        let children = node.children.clone();
        let rect = rect.sanitized();
        log::trace!("Arranging '{}' at {:?}", node.display_name(), rect);
        self.tree.node_mut(id)?.bounds = Some(rect);

        let content = rect.deflate(&props.padding);
        let kind = strategy.kind();
        match &strategy {
            Strategy::Stack(config) => StackLayout::new(config, &children).arrange(self, id, content),
            Strategy::Grid(definition) => {
                GridLayout::new(definition, &children).arrange(self, id, content)
            }
            Strategy::Absolute => AbsoluteLayout::new(&children).arrange(self, id, content),
            Strategy::Flex(config) => FlexLayout::new(config, &children).arrange(self, id, content),
            Strategy::Relative => RelativeLayout::new(&children).arrange(self, id, content),
            Strategy::Leaf => LeafLayout.arrange(self, id, content),
        }?;

        if self.config.check_bounds && !kind.allows_overflow() {
            self.check_child_bounds(id, content, &children);
        }
        Ok(())
    }

    /// Hands a child the rectangle it was allocated, minus its margin.
    pub fn arrange_child(&mut self, id: NodeId, allocated: Rect) -> Result<(), LayoutError> {
        let margin = self.properties(id)?.margin;
        self.arrange_node(id, allocated.deflate(&margin))
    }

    fn check_child_bounds(&self, container: NodeId, content: Rect, children: &[ChildEntry]) {
        for entry in children {
            let Some(child) = self.tree.get(entry.id) else {
                continue;
            };
            if !child.properties.visible {
                continue;
            }
            if let Some(bounds) = child.bounds {
                if !content.contains(&bounds) {
                    log::warn!(
                        "'{}' at {:?} leaves the content area {:?} of {:?}",
                        child.display_name(),
                        bounds,
                        content,
                        container
                    );
                }
            }
        }
    }
}

/// An explicit width/height request replaces that axis with an exact
/// constraint, clamped to what the parent allows.
fn apply_size_requests(props: &NodeProperties, constraint: SizeConstraint) -> SizeConstraint {
    let mut constraint = constraint;
    if let Some(w) = props.width_request.filter(|w| w.is_finite()) {
        constraint.width = AxisConstraint::Exact(constraint.width.constrain(w.max(0.0)));
    }
    if let Some(h) = props.height_request.filter(|h| h.is_finite()) {
        constraint.height = AxisConstraint::Exact(constraint.height.constrain(h.max(0.0)));
    }
    constraint
}
