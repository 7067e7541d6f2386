//! Alignment-and-expansion options shared by every layout strategy.
use crate::parsers::parse_layout_options;
use serde::{Deserialize, Deserializer, Serialize, de};

/// Placement of a child inside the span its container offers on one axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum Alignment {
    Start,
    Center,
    End,
    /// Take the whole offered extent regardless of natural size.
    #[default]
    Fill,
}

/// An [`Alignment`] paired with the independent "wants extra space" flag.
///
/// `expands` only matters on the main axis of a Stack or Flex container,
/// where it earns the node a share of leftover space. `alignment` governs
/// placement within whatever extent the node ends up with.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub struct LayoutOptions {
    pub alignment: Alignment,
    pub expands: bool,
}

impl<'de> Deserialize<'de> for LayoutOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum LayoutOptionsDef {
            Str(String),
            Map {
                #[serde(default)]
                alignment: Alignment,
                #[serde(default)]
                expands: bool,
            },
        }

        match LayoutOptionsDef::deserialize(deserializer)? {
            LayoutOptionsDef::Str(s) => parse_layout_options(&s).map_err(de::Error::custom),
            LayoutOptionsDef::Map { alignment, expands } => Ok(Self { alignment, expands }),
        }
    }
}

impl LayoutOptions {
    pub const START: LayoutOptions = LayoutOptions::new(Alignment::Start, false);
    pub const CENTER: LayoutOptions = LayoutOptions::new(Alignment::Center, false);
    pub const END: LayoutOptions = LayoutOptions::new(Alignment::End, false);
    pub const FILL: LayoutOptions = LayoutOptions::new(Alignment::Fill, false);
    pub const START_AND_EXPAND: LayoutOptions = LayoutOptions::new(Alignment::Start, true);
    pub const CENTER_AND_EXPAND: LayoutOptions = LayoutOptions::new(Alignment::Center, true);
    pub const END_AND_EXPAND: LayoutOptions = LayoutOptions::new(Alignment::End, true);
    pub const FILL_AND_EXPAND: LayoutOptions = LayoutOptions::new(Alignment::Fill, true);

    pub const fn new(alignment: Alignment, expands: bool) -> Self {
        Self { alignment, expands }
    }

    pub fn is_fill(&self) -> bool {
        self.alignment == Alignment::Fill
    }
}
