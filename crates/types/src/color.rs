use serde::{Deserialize, Deserializer, Serialize, de};
use std::hash::{Hash, Hasher};

fn default_one() -> f32 {
    1.0
}

fn is_one(num: &f32) -> bool {
    *num == 1.0
}

/// An RGBA color. The layout engine never interprets it; it is carried on
/// nodes for the rendering side.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(skip_serializing_if = "is_one", default = "default_one")]
    pub a: f32,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.hash(state);
        self.g.hash(state);
        self.b.hash(state);
        self.a.to_bits().hash(state);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl Color {
    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(s: &str) -> Result<Color, String> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| format!("Color must start with #, got: {}", s.trim()))?;
        if !hex.is_ascii() {
            return Err(format!("Invalid hex color: {}", s));
        }
        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|e| format!("Invalid color component '{}': {}", digits, e))
        };

        match hex.len() {
            3 => Ok(Color::rgb(
                channel(&hex[0..1].repeat(2))?,
                channel(&hex[1..2].repeat(2))?,
                channel(&hex[2..3].repeat(2))?,
            )),
            6 => Ok(Color::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            8 => Ok(Color::rgba(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                f32::from(channel(&hex[6..8])?) / 255.0,
            )),
            n => Err(format!("Invalid hex color length: expected 3, 6 or 8, got {}", n)),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "default_one")]
                a: f32,
            },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::from_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b, a } => Ok(Color { r, g, b, a }),
        }
    }
}
