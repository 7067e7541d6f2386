//! The public driver for measure and arrange passes.

use crate::LayoutError;
use crate::config::LayoutConfig;
use crate::context::LayoutContext;
use crate::measure::ContentMeasurer;
use crate::node::NodeId;
use crate::perf::{NoOpProfiler, Profiler};
use crate::tree::LayoutTree;
use std::time::Instant;
use trellis_types::{Rect, Size, SizeConstraint};

/// Runs layout passes over a [`LayoutTree`].
///
/// The engine holds no per-tree state; one engine can lay out any number of
/// trees.
pub struct LayoutEngine {
    config: LayoutConfig,
    profiler: Box<dyn Profiler>,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self::with_profiler(config, Box::new(NoOpProfiler))
    }

    pub fn with_profiler(config: LayoutConfig, profiler: Box<dyn Profiler>) -> Self {
        Self { config, profiler }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn profiler(&self) -> &dyn Profiler {
        self.profiler.as_ref()
    }

    /// Measures `root` with `available` as the loose upper bound. Infinite
    /// components leave that axis unconstrained.
    pub fn measure(
        &self,
        tree: &mut LayoutTree,
        root: NodeId,
        available: Size,
        measurer: &dyn ContentMeasurer,
    ) -> Result<Size, LayoutError> {
        let start = Instant::now();
        log::debug!("Measure pass starting at {:?} with {:?}", root, available);

        let mut ctx = LayoutContext::new(tree, measurer, self.profiler.as_ref(), &self.config);
        let size = ctx.measure_node(root, SizeConstraint::loose(available))?;

        self.profiler.record("LayoutEngine::measure", start.elapsed());
        log::debug!("Measure pass finished: {:?}", size);
        Ok(size)
    }

    /// Arranges `root` into `final_rect`. The root must have been measured.
    pub fn arrange(
        &self,
        tree: &mut LayoutTree,
        root: NodeId,
        final_rect: Rect,
        measurer: &dyn ContentMeasurer,
    ) -> Result<(), LayoutError> {
        if tree.node(root)?.desired_size().is_none() {
            return Err(LayoutError::NotMeasured(root));
        }
        let start = Instant::now();
        log::debug!("Arrange pass starting at {:?} into {:?}", root, final_rect);

        let mut ctx = LayoutContext::new(tree, measurer, self.profiler.as_ref(), &self.config);
        ctx.arrange_node(root, final_rect)?;
        tree.mark_laid_out();

        self.profiler.record("LayoutEngine::arrange", start.elapsed());
        log::debug!("Arrange pass finished");
        Ok(())
    }

    /// Measures, then arranges at the origin. Each bounded axis of
    /// `available` is used in full; unbounded axes get the desired extent.
    pub fn layout(
        &self,
        tree: &mut LayoutTree,
        root: NodeId,
        available: Size,
        measurer: &dyn ContentMeasurer,
    ) -> Result<Size, LayoutError> {
        let desired = self.measure(tree, root, available, measurer)?;
        let extent = |avail: f32, wanted: f32| if avail.is_finite() { avail } else { wanted };
        let final_rect = Rect::from_size(Size::new(
            extent(available.width, desired.width),
            extent(available.height, desired.height),
        ));
        self.arrange(tree, root, final_rect, measurer)?;
        Ok(desired)
    }

    /// Runs [`layout`](Self::layout) only when something was invalidated
    /// since the last completed arrange. Returns whether a pass ran.
    pub fn layout_if_needed(
        &self,
        tree: &mut LayoutTree,
        root: NodeId,
        available: Size,
        measurer: &dyn ContentMeasurer,
    ) -> Result<bool, LayoutError> {
        if !tree.needs_layout() {
            log::trace!("Layout is clean; skipping pass");
            return Ok(false);
        }
        self.layout(tree, root, available, measurer)?;
        Ok(true)
    }

    pub fn invalidate(&self, tree: &mut LayoutTree, node: NodeId) -> Result<(), LayoutError> {
        tree.invalidate(node)
    }
}
