//! JSON layout documents: a node tree with resolved properties, leaf
//! intrinsic sizes and the space to lay it out in.

use crate::error::TrellisError;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use trellis_layout::{
    Attached, ConstraintExpression, IntrinsicSizes, LayoutConfig, LayoutEngine, LayoutNode,
    LayoutTree, NodeId, Rect, Size, Strategy,
};
use trellis_style::dimension::deserialize_thickness;
use trellis_style::parsers::{parse_length, run_parser};
use trellis_style::{
    AbsoluteBounds, FlexConfig, FlexItem, GridDefinition, GridPlacement, LayoutOptions,
    LayoutProperty, Paint, StackConfig,
};
use trellis_types::Thickness;

/// The layout strategy of a node, tagged by `"type"`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StrategySpec {
    Stack(StackConfig),
    Grid(GridDefinition),
    Absolute,
    Flex(FlexConfig),
    Relative,
    #[default]
    Leaf,
}

impl From<StrategySpec> for Strategy {
    fn from(spec: StrategySpec) -> Self {
        match spec {
            StrategySpec::Stack(config) => Strategy::Stack(config),
            StrategySpec::Grid(definition) => Strategy::Grid(definition),
            StrategySpec::Absolute => Strategy::Absolute,
            StrategySpec::Flex(config) => Strategy::Flex(config),
            StrategySpec::Relative => Strategy::Relative,
            StrategySpec::Leaf => Strategy::Leaf,
        }
    }
}

/// One relational constraint of a Relative child.
///
/// Without `property` the target is pinned to `constant`. Without
/// `sibling` the source is the container.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintSpec {
    pub target: LayoutProperty,
    #[serde(default)]
    pub sibling: Option<String>,
    #[serde(default)]
    pub property: Option<LayoutProperty>,
    #[serde(default = "default_factor")]
    pub factor: f32,
    #[serde(default)]
    pub constant: f32,
}

fn default_factor() -> f32 {
    1.0
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeSpec {
    pub name: Option<String>,
    pub layout: StrategySpec,
    #[serde(deserialize_with = "deserialize_thickness")]
    pub padding: Thickness,
    #[serde(deserialize_with = "deserialize_thickness")]
    pub margin: Thickness,
    pub horizontal: LayoutOptions,
    pub vertical: LayoutOptions,
    pub visible: bool,
    pub width_request: Option<f32>,
    pub height_request: Option<f32>,
    pub paint: Paint,
    /// Intrinsic content size; only consulted for leaves.
    pub intrinsic: Option<Size>,
    pub grid: Option<GridPlacement>,
    pub flex: Option<FlexItem>,
    pub absolute: Option<AbsoluteBounds>,
    pub relative: Vec<ConstraintSpec>,
    pub children: Vec<NodeSpec>,
}

impl Default for NodeSpec {
    fn default() -> Self {
        Self {
            name: None,
            layout: StrategySpec::Leaf,
            padding: Thickness::ZERO,
            margin: Thickness::ZERO,
            horizontal: LayoutOptions::FILL,
            vertical: LayoutOptions::FILL,
            visible: true,
            width_request: None,
            height_request: None,
            paint: Paint::default(),
            intrinsic: None,
            grid: None,
            flex: None,
            absolute: None,
            relative: Vec::new(),
            children: Vec::new(),
        }
    }
}

impl NodeSpec {
    fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| "<unnamed>".to_string())
    }

    /// Attached data for this node under its parent. Relative expressions
    /// reference siblings by name, so they are filled in once the whole
    /// tree exists.
    fn attachment(&self) -> Result<Attached, TrellisError> {
        let mut found = Vec::new();
        if let Some(p) = self.grid {
            found.push(Attached::Grid(p));
        }
        if let Some(f) = self.flex {
            found.push(Attached::Flex(f));
        }
        if let Some(b) = self.absolute {
            found.push(Attached::Absolute(b));
        }
        if !self.relative.is_empty() {
            found.push(Attached::Relative(Vec::new()));
        }
        match found.len() {
            0 => Ok(Attached::None),
            1 => Ok(found.remove(0)),
            _ => Err(TrellisError::Document(format!(
                "'{}' carries attached data for more than one container kind",
                self.label()
            ))),
        }
    }

    fn to_node(&self) -> LayoutNode {
        let mut node = LayoutNode::new(self.layout.clone().into())
            .with_padding(self.padding)
            .with_margin(self.margin)
            .with_options(self.horizontal, self.vertical)
            .with_size_request(self.width_request, self.height_request)
            .with_visible(self.visible)
            .with_paint(self.paint);
        if let Some(name) = &self.name {
            node = node.with_name(name.clone());
        }
        node
    }
}

/// Available space. A missing component leaves that axis unbounded.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct AvailableSpec {
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
}

impl AvailableSpec {
    pub fn size(&self) -> Size {
        Size::new(
            self.width.unwrap_or(f32::INFINITY),
            self.height.unwrap_or(f32::INFINITY),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDocument {
    #[serde(default)]
    pub available: AvailableSpec,
    #[serde(default)]
    pub config: LayoutConfig,
    pub root: NodeSpec,
}

struct PendingRelative<'d> {
    parent: NodeId,
    child: NodeId,
    label: String,
    constraints: &'d [ConstraintSpec],
}

impl LayoutDocument {
    pub fn from_json(json: &str) -> Result<Self, TrellisError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, TrellisError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TrellisError> {
        let path = path.as_ref();
        log::debug!("Loading layout document from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Builds the node tree described by the document.
    pub fn build(&self) -> Result<LoadedDocument, TrellisError> {
        let mut loaded = LoadedDocument {
            tree: LayoutTree::new(),
            root: NodeId::default(),
            sizes: IntrinsicSizes::new(),
            available: self.available.size(),
            config: self.config,
            names: HashMap::new(),
        };
        let mut pending = Vec::new();
        loaded.root = loaded.add_node(&self.root, None, &mut pending)?;

        for p in pending {
            let mut exprs = Vec::with_capacity(p.constraints.len());
            for c in p.constraints {
                exprs.push(loaded.expression(c, &p.label)?);
            }
            loaded
                .tree
                .set_attached(p.parent, p.child, Attached::Relative(exprs))?;
        }
        log::debug!("Built layout tree with {} node(s)", loaded.tree.len());
        Ok(loaded)
    }
}

/// A built document, ready to lay out.
pub struct LoadedDocument {
    pub tree: LayoutTree,
    pub root: NodeId,
    pub sizes: IntrinsicSizes,
    pub available: Size,
    pub config: LayoutConfig,
    names: HashMap<String, NodeId>,
}

impl LoadedDocument {
    fn add_node<'d>(
        &mut self,
        spec: &'d NodeSpec,
        parent: Option<NodeId>,
        pending: &mut Vec<PendingRelative<'d>>,
    ) -> Result<NodeId, TrellisError> {
        let id = self.tree.new_node(spec.to_node());
        if let Some(name) = &spec.name {
            if self.names.insert(name.clone(), id).is_some() {
                return Err(TrellisError::DuplicateName(name.clone()));
            }
        }
        if let Some(size) = spec.intrinsic {
            self.sizes.insert(id, size);
        }

        match parent {
            Some(parent) => {
                self.tree.add_child(parent, id, spec.attachment()?)?;
                if !spec.relative.is_empty() {
                    pending.push(PendingRelative {
                        parent,
                        child: id,
                        label: spec.label(),
                        constraints: &spec.relative,
                    });
                }
            }
            None if !matches!(spec.attachment()?, Attached::None) => {
                return Err(TrellisError::Document(format!(
                    "root '{}' cannot carry attached data",
                    spec.label()
                )));
            }
            None => {}
        }

        for child in &spec.children {
            self.add_node(child, Some(id), pending)?;
        }
        Ok(id)
    }

    fn expression(
        &self,
        spec: &ConstraintSpec,
        label: &str,
    ) -> Result<ConstraintExpression, TrellisError> {
        let Some(property) = spec.property else {
            return Ok(ConstraintExpression::fixed(spec.target, spec.constant));
        };
        match &spec.sibling {
            None => Ok(ConstraintExpression::container(
                spec.target,
                property,
                spec.factor,
                spec.constant,
            )),
            Some(reference) => {
                let sibling = self.node_id(reference).ok_or_else(|| {
                    TrellisError::UnknownReference {
                        node: label.to_string(),
                        reference: reference.clone(),
                    }
                })?;
                Ok(ConstraintExpression::sibling(
                    spec.target,
                    sibling,
                    property,
                    spec.factor,
                    spec.constant,
                ))
            }
        }
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    pub fn engine(&self) -> LayoutEngine {
        LayoutEngine::new(self.config)
    }

    /// Measures and arranges the whole tree in the document's available
    /// space.
    pub fn layout(&mut self) -> Result<Size, TrellisError> {
        let engine = self.engine();
        self.layout_with(&engine)
    }

    pub fn layout_with(&mut self, engine: &LayoutEngine) -> Result<Size, TrellisError> {
        Ok(engine.layout(&mut self.tree, self.root, self.available, &self.sizes)?)
    }

    pub fn bounds(&self, name: &str) -> Option<Rect> {
        self.node_id(name)
            .and_then(|id| self.tree.get(id))
            .and_then(|node| node.bounds())
    }

    /// Bounds of every arranged, named node, ordered by name.
    pub fn named_bounds(&self) -> BTreeMap<String, Rect> {
        self.names
            .iter()
            .filter_map(|(name, id)| {
                let bounds = self.tree.get(*id)?.bounds()?;
                Some((name.clone(), bounds))
            })
            .collect()
    }
}

/// Parses one available-space extent: a length such as `300` or `300px`,
/// or `auto` for an unbounded axis.
pub fn parse_extent(input: &str) -> Result<f32, TrellisError> {
    if input.trim().eq_ignore_ascii_case("auto") {
        return Ok(f32::INFINITY);
    }
    Ok(run_parser(parse_length, input)?)
}
