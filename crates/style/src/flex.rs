//! Flex container configuration and per-item factors.
use serde::{Deserialize, Serialize};
use trellis_types::Axis;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    pub fn main_axis(self) -> Axis {
        match self {
            FlexDirection::Row | FlexDirection::RowReverse => Axis::Horizontal,
            FlexDirection::Column | FlexDirection::ColumnReverse => Axis::Vertical,
        }
    }

    /// Items flow from the main-axis end towards the start.
    pub fn is_reversed(self) -> bool {
        matches!(self, FlexDirection::RowReverse | FlexDirection::ColumnReverse)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
}

/// Distribution of leftover main-axis space on a line nobody grows into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum JustifyContent {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Preferred main-axis size of a flex item before growing or shrinking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub enum FlexBasis {
    /// The item's natural main-axis extent.
    #[default]
    Auto,
    Fixed(f32),
    /// Fraction in `[0, 1]` of the container's main-axis content extent.
    Relative(f32),
}

/// Attached flex data for one child.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlexItem {
    pub basis: FlexBasis,
    pub grow: f32,
    pub shrink: f32,
}

impl Default for FlexItem {
    fn default() -> Self {
        Self {
            basis: FlexBasis::Auto,
            grow: 0.0,
            shrink: 1.0,
        }
    }
}

impl FlexItem {
    pub fn new(basis: FlexBasis, grow: f32, shrink: f32) -> Self {
        Self {
            basis,
            grow,
            shrink,
        }
    }

    pub fn growing(grow: f32) -> Self {
        Self {
            grow,
            ..Default::default()
        }
    }
}

/// Configuration of a Flex container.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct FlexConfig {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify_content: JustifyContent,
    /// Gap between items on a line. Defaults to `0.0`.
    pub spacing: f32,
    /// Gap between wrapped lines. Defaults to `0.0`.
    pub line_spacing: f32,
}

impl FlexConfig {
    pub fn row() -> Self {
        Self::default()
    }

    pub fn column() -> Self {
        Self {
            direction: FlexDirection::Column,
            ..Default::default()
        }
    }

    pub fn wrapping(mut self) -> Self {
        self.wrap = FlexWrap::Wrap;
        self
    }

    pub fn with_spacing(mut self, spacing: f32, line_spacing: f32) -> Self {
        self.spacing = spacing;
        self.line_spacing = line_spacing;
        self
    }
}
