use serde::{Deserialize, Serialize};
use trellis_types::Color;

fn default_opacity() -> f32 {
    1.0
}

/// Visual attributes carried on a node for the renderer. Layout passes them
/// through untouched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Paint {
    #[serde(default)]
    pub background: Option<Color>,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            background: None,
            opacity: 1.0,
        }
    }
}

impl Paint {
    pub fn with_background(background: Color) -> Self {
        Self {
            background: Some(background),
            ..Default::default()
        }
    }
}
