//! The node arena and every mutation that can change geometry.

use crate::LayoutError;
use crate::node::{Attached, ChildEntry, LayoutNode, NodeId, Strategy};
use slotmap::SlotMap;
use trellis_style::{LayoutOptions, Paint};
use trellis_types::{Axis, Thickness};

/// Owns every [`LayoutNode`] of one layout tree.
///
/// Children are owned through their parent's [`ChildEntry`] list; the
/// `parent` back-reference is only used for upward invalidation walks.
#[derive(Debug, Default)]
pub struct LayoutTree {
    nodes: SlotMap<NodeId, LayoutNode>,
    needs_layout: bool,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a detached node. Any parent/child links or geometry on the
    /// passed value are discarded.
    pub fn new_node(&mut self, mut node: LayoutNode) -> NodeId {
        node.children.clear();
        node.parent = None;
        node.desired_size = None;
        node.bounds = None;
        node.cache.clear();
        self.needs_layout = true;
        self.nodes.insert(node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&LayoutNode> {
        self.nodes.get(id)
    }

    pub fn node(&self, id: NodeId) -> Result<&LayoutNode, LayoutError> {
        self.nodes.get(id).ok_or(LayoutError::NodeNotFound(id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut LayoutNode, LayoutError> {
        self.nodes.get_mut(id).ok_or(LayoutError::NodeNotFound(id))
    }

    pub fn children(&self, id: NodeId) -> Result<&[ChildEntry], LayoutError> {
        Ok(self.node(id)?.children())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    /// First node carrying `name`, in arena order.
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, node)| node.name.as_deref() == Some(name))
            .map(|(id, _)| id)
    }

    /// `id` and all of its descendants, depth first in child order.
    pub fn descendants(&self, id: NodeId) -> Result<Vec<NodeId>, LayoutError> {
        self.node(id)?;
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            if let Some(node) = self.nodes.get(current) {
                stack.extend(node.children.iter().rev().map(|c| c.id));
            }
        }
        Ok(out)
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, of: NodeId) -> bool {
        let mut current = Some(of);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Appends `child` to `parent`'s children.
    ///
    /// `Attached::None` is replaced by the parent strategy's default
    /// attachment; any other variant must match the parent's strategy.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        child: NodeId,
        attached: Attached,
    ) -> Result<(), LayoutError> {
        let parent_node = self.node(parent)?;
        let child_node = self.node(child)?;

        if matches!(parent_node.strategy, Strategy::Leaf) {
            return Err(LayoutError::InvalidTree(format!(
                "leaf '{}' cannot have children",
                parent_node.display_name()
            )));
        }
        if child_node.parent.is_some() {
            return Err(LayoutError::InvalidTree(format!(
                "'{}' already has a parent",
                child_node.display_name()
            )));
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(LayoutError::InvalidTree(format!(
                "adding '{}' under '{}' would create a cycle",
                child_node.display_name(),
                parent_node.display_name()
            )));
        }

        let attached = match attached {
            Attached::None => parent_node.strategy.default_attachment(),
            other => other,
        };
        if !parent_node.strategy.accepts(&attached) {
            return Err(LayoutError::InvalidTree(format!(
                "{} attachment is not valid under a {} container",
                attached.variant_name(),
                parent_node.strategy.kind().as_str()
            )));
        }

        self.node_mut(parent)?
            .children
            .push(ChildEntry { id: child, attached });
        self.node_mut(child)?.parent = Some(parent);
        self.invalidate(parent)
    }

    /// Detaches `child` from `parent` and destroys its whole subtree.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), LayoutError> {
        let parent_node = self.node_mut(parent)?;
        let index = parent_node
            .children
            .iter()
            .position(|c| c.id == child)
            .ok_or_else(|| {
                LayoutError::InvalidTree(format!("{:?} is not a child of {:?}", child, parent))
            })?;
        parent_node.children.remove(index);

        let doomed = self.descendants(child)?;
        log::trace!("Removing {} node(s) rooted at {:?}", doomed.len(), child);
        for id in doomed {
            self.nodes.remove(id);
        }
        self.invalidate(parent)
    }

    /// Replaces the attached data of `child` under `parent`.
    pub fn set_attached(
        &mut self,
        parent: NodeId,
        child: NodeId,
        attached: Attached,
    ) -> Result<(), LayoutError> {
        let parent_node = self.node_mut(parent)?;
        let attached = match attached {
            Attached::None => parent_node.strategy.default_attachment(),
            other => other,
        };
        if !parent_node.strategy.accepts(&attached) {
            return Err(LayoutError::InvalidTree(format!(
                "{} attachment is not valid under a {} container",
                attached.variant_name(),
                parent_node.strategy.kind().as_str()
            )));
        }
        let entry = parent_node
            .children
            .iter_mut()
            .find(|c| c.id == child)
            .ok_or_else(|| {
                LayoutError::InvalidTree(format!("{:?} is not a child of {:?}", child, parent))
            })?;
        entry.attached = attached;
        self.invalidate(parent)
    }

    /// Swaps the node's strategy. Existing children must carry attachments
    /// the new strategy accepts.
    pub fn set_strategy(&mut self, id: NodeId, strategy: Strategy) -> Result<(), LayoutError> {
        let node = self.node_mut(id)?;
        if matches!(strategy, Strategy::Leaf) && !node.children.is_empty() {
            return Err(LayoutError::InvalidTree(format!(
                "'{}' has children and cannot become a leaf",
                node.display_name()
            )));
        }
        if let Some(bad) = node.children.iter().find(|c| !strategy.accepts(&c.attached)) {
            return Err(LayoutError::InvalidTree(format!(
                "child {:?} carries a {} attachment, not valid under {}",
                bad.id,
                bad.attached.variant_name(),
                strategy.kind().as_str()
            )));
        }
        node.strategy = strategy;
        self.invalidate(id)
    }

    pub fn set_padding(&mut self, id: NodeId, padding: Thickness) -> Result<(), LayoutError> {
        self.node_mut(id)?.properties.padding = padding;
        self.invalidate(id)
    }

    pub fn set_margin(&mut self, id: NodeId, margin: Thickness) -> Result<(), LayoutError> {
        self.node_mut(id)?.properties.margin = margin;
        self.invalidate(id)
    }

    pub fn set_options(
        &mut self,
        id: NodeId,
        axis: Axis,
        options: LayoutOptions,
    ) -> Result<(), LayoutError> {
        let props = &mut self.node_mut(id)?.properties;
        match axis {
            Axis::Horizontal => props.horizontal = options,
            Axis::Vertical => props.vertical = options,
        }
        self.invalidate(id)
    }

    pub fn set_size_request(
        &mut self,
        id: NodeId,
        width: Option<f32>,
        height: Option<f32>,
    ) -> Result<(), LayoutError> {
        let props = &mut self.node_mut(id)?.properties;
        props.width_request = width;
        props.height_request = height;
        self.invalidate(id)
    }

    /// Visibility does not change the node's own measurement, so only its
    /// ancestors are invalidated.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> Result<(), LayoutError> {
        let node = self.node_mut(id)?;
        if node.properties.visible == visible {
            return Ok(());
        }
        node.properties.visible = visible;
        let parent = node.parent;
        match parent {
            Some(parent) => self.invalidate(parent),
            None => {
                self.needs_layout = true;
                Ok(())
            }
        }
    }

    /// Paint never affects geometry; no invalidation.
    pub fn set_paint(&mut self, id: NodeId, paint: Paint) -> Result<(), LayoutError> {
        self.node_mut(id)?.properties.paint = paint;
        Ok(())
    }

    /// Clears the measure cache and computed geometry of `id` and every
    /// ancestor, and flags the tree as needing a layout pass.
    pub fn invalidate(&mut self, id: NodeId) -> Result<(), LayoutError> {
        self.node(id)?;
        let mut current = Some(id);
        while let Some(node_id) = current {
            let Some(node) = self.nodes.get_mut(node_id) else {
                break;
            };
            node.cache.clear();
            node.desired_size = None;
            node.bounds = None;
            current = node.parent;
        }
        self.needs_layout = true;
        Ok(())
    }

    /// Set by any invalidation, cleared by a completed arrange pass.
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    pub(crate) fn mark_laid_out(&mut self) {
        self.needs_layout = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_style::{GridDefinition, GridPlacement, StackConfig};
    use trellis_types::Size;

    fn stack_with_two_leaves(tree: &mut LayoutTree) -> (NodeId, NodeId, NodeId) {
        let root = tree.new_node(LayoutNode::stack(StackConfig::default()));
        let a = tree.new_node(LayoutNode::leaf().with_name("a"));
        let b = tree.new_node(LayoutNode::leaf().with_name("b"));
        tree.add_child(root, a, Attached::None).unwrap();
        tree.add_child(root, b, Attached::None).unwrap();
        (root, a, b)
    }

    #[test]
    fn test_add_child_links_both_directions() {
        let mut tree = LayoutTree::new();
        let (root, a, b) = stack_with_two_leaves(&mut tree);
        let ids: Vec<_> = tree.children(root).unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(tree.parent(a), Some(root));
        assert_eq!(tree.find_by_name("b"), Some(b));
        assert_eq!(tree.descendants(root).unwrap(), vec![root, a, b]);
    }

    #[test]
    fn test_add_child_rejects_invalid_structures() {
        let mut tree = LayoutTree::new();
        let (root, a, _) = stack_with_two_leaves(&mut tree);

        let orphan = tree.new_node(LayoutNode::leaf());
        assert!(matches!(
            tree.add_child(a, orphan, Attached::None),
            Err(LayoutError::InvalidTree(_))
        ));
        assert!(matches!(
            tree.add_child(root, orphan, Attached::Grid(GridPlacement::default())),
            Err(LayoutError::InvalidTree(_))
        ));
        // Already parented.
        assert!(tree.add_child(root, a, Attached::None).is_err());

        let inner = tree.new_node(LayoutNode::stack(StackConfig::default()));
        tree.add_child(root, inner, Attached::None).unwrap();
        let outer = tree.new_node(LayoutNode::stack(StackConfig::default()));
        tree.add_child(outer, root, Attached::None).unwrap();
        // `outer` is an ancestor of `inner`; re-parenting it there is a cycle.
        let err = tree.add_child(inner, outer, Attached::None);
        assert!(matches!(err, Err(LayoutError::InvalidTree(_))));
    }

    #[test]
    fn test_none_attachment_becomes_strategy_default() {
        let mut tree = LayoutTree::new();
        let grid = tree.new_node(LayoutNode::grid(GridDefinition::default()));
        let cell = tree.new_node(LayoutNode::leaf());
        tree.add_child(grid, cell, Attached::None).unwrap();
        assert_eq!(
            tree.children(grid).unwrap()[0].attached,
            Attached::Grid(GridPlacement::default())
        );
    }

    #[test]
    fn test_remove_child_destroys_subtree() {
        let mut tree = LayoutTree::new();
        let (root, a, _) = stack_with_two_leaves(&mut tree);
        let inner = tree.new_node(LayoutNode::stack(StackConfig::default()));
        let deep = tree.new_node(LayoutNode::leaf());
        tree.add_child(root, inner, Attached::None).unwrap();
        tree.add_child(inner, deep, Attached::None).unwrap();

        tree.remove_child(root, inner).unwrap();
        assert!(!tree.contains(inner));
        assert!(!tree.contains(deep));
        assert!(tree.contains(a));
        assert_eq!(tree.children(root).unwrap().len(), 2);
        assert!(tree.remove_child(root, inner).is_err());
    }

    #[test]
    fn test_invalidate_walks_to_root() {
        let mut tree = LayoutTree::new();
        let (root, a, b) = stack_with_two_leaves(&mut tree);
        for id in [root, a, b] {
            let node = tree.node_mut(id).unwrap();
            node.desired_size = Some(Size::new(1.0, 1.0));
            node.cache
                .insert(Default::default(), Size::new(1.0, 1.0), 4);
        }
        tree.mark_laid_out();

        tree.invalidate(a).unwrap();
        assert!(tree.needs_layout());
        assert!(tree.node(a).unwrap().desired_size().is_none());
        assert!(tree.node(root).unwrap().cache.is_empty());
        // Siblings keep their measurement.
        assert!(tree.node(b).unwrap().desired_size().is_some());
    }

    #[test]
    fn test_set_visible_keeps_own_cache() {
        let mut tree = LayoutTree::new();
        let (root, a, _) = stack_with_two_leaves(&mut tree);
        for id in [root, a] {
            tree.node_mut(id)
                .unwrap()
                .cache
                .insert(Default::default(), Size::new(1.0, 1.0), 4);
        }
        tree.set_visible(a, false).unwrap();
        assert!(!tree.node(a).unwrap().cache.is_empty());
        assert!(tree.node(root).unwrap().cache.is_empty());
    }

    #[test]
    fn test_set_strategy_checks_attachments() {
        let mut tree = LayoutTree::new();
        let (root, _, _) = stack_with_two_leaves(&mut tree);
        assert!(tree.set_strategy(root, Strategy::Leaf).is_err());
        assert!(
            tree.set_strategy(root, Strategy::Grid(GridDefinition::default()))
                .is_err()
        );
        assert!(
            tree.set_strategy(root, Strategy::Stack(StackConfig::horizontal(0.0)))
                .is_ok()
        );
    }
}
