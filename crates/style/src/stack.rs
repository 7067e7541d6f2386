use serde::{Deserialize, Serialize};
use trellis_types::Axis;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StackOrientation {
    #[default]
    Vertical,
    Horizontal,
}

impl StackOrientation {
    pub fn main_axis(self) -> Axis {
        match self {
            StackOrientation::Vertical => Axis::Vertical,
            StackOrientation::Horizontal => Axis::Horizontal,
        }
    }
}

/// Configuration of a Stack container.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StackConfig {
    /// Defaults to [`StackOrientation::Vertical`].
    pub orientation: StackOrientation,
    /// Gap between consecutive visible children. Defaults to `6.0`.
    pub spacing: f32,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            orientation: StackOrientation::Vertical,
            spacing: 6.0,
        }
    }
}

impl StackConfig {
    pub fn vertical(spacing: f32) -> Self {
        Self {
            orientation: StackOrientation::Vertical,
            spacing,
        }
    }

    pub fn horizontal(spacing: f32) -> Self {
        Self {
            orientation: StackOrientation::Horizontal,
            spacing,
        }
    }
}
