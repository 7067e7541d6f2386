use crate::engine::LayoutEngine;
use crate::measure::IntrinsicSizes;
use crate::node::{Attached, LayoutNode, NodeId};
use crate::perf::DebugProfiler;
use crate::tree::LayoutTree;
use crate::{LayoutConfig, LayoutError};
use trellis_types::{Rect, Size};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A tree plus the intrinsic sizes of its leaves.
pub struct TestTree {
    pub tree: LayoutTree,
    pub sizes: IntrinsicSizes,
}

impl TestTree {
    pub fn new() -> Self {
        init_logger();
        Self {
            tree: LayoutTree::new(),
            sizes: IntrinsicSizes::new(),
        }
    }

    pub fn root(&mut self, node: LayoutNode) -> NodeId {
        self.tree.new_node(node)
    }

    /// Adds a container or pre-configured node under `parent`.
    pub fn child(&mut self, parent: NodeId, node: LayoutNode, attached: Attached) -> NodeId {
        let id = self.tree.new_node(node);
        self.tree
            .add_child(parent, id, attached)
            .expect("child should attach");
        id
    }

    /// Adds a leaf with a fixed intrinsic size.
    pub fn leaf(&mut self, parent: NodeId, name: &str, width: f32, height: f32) -> NodeId {
        self.leaf_with(parent, LayoutNode::leaf().with_name(name), Attached::None, width, height)
    }

    pub fn leaf_with(
        &mut self,
        parent: NodeId,
        node: LayoutNode,
        attached: Attached,
        width: f32,
        height: f32,
    ) -> NodeId {
        let id = self.child(parent, node, attached);
        self.sizes.insert(id, Size::new(width, height));
        id
    }

    pub fn layout(&mut self, root: NodeId, width: f32, height: f32) -> Result<Size, LayoutError> {
        create_test_engine().layout(&mut self.tree, root, Size::new(width, height), &self.sizes)
    }

    pub fn bounds(&self, id: NodeId) -> Rect {
        self.tree
            .node(id)
            .expect("node exists")
            .bounds()
            .expect("node should be arranged")
    }

    pub fn desired(&self, id: NodeId) -> Size {
        self.tree
            .node(id)
            .expect("node exists")
            .desired_size()
            .expect("node should be measured")
    }
}

/// Creates a default layout engine for testing purposes.
pub fn create_test_engine() -> LayoutEngine {
    LayoutEngine::new(LayoutConfig::default())
}

pub fn create_profiled_engine() -> LayoutEngine {
    LayoutEngine::with_profiler(LayoutConfig::default(), Box::new(DebugProfiler::new()))
}

pub fn assert_rect(actual: Rect, x: f32, y: f32, width: f32, height: f32) {
    let expected = Rect::new(x, y, width, height);
    assert!(
        crate::util::rects_fuzzy_eq(actual, expected),
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

pub fn assert_size(actual: Size, width: f32, height: f32) {
    let expected = Size::new(width, height);
    assert!(
        crate::util::sizes_fuzzy_eq(actual, expected),
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}
