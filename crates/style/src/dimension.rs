//! Serde helpers for insets written in shorthand form.
use crate::parsers::parse_thickness;
use serde::{Deserializer, de};
use trellis_types::Thickness;

/// Deserializes a [`Thickness`] from a number (all sides), a shorthand
/// string (`"10"`, `"10 20"`, `"1 2 3 4"`) or a `{top,right,bottom,left}` map.
pub fn deserialize_thickness<'de, D>(deserializer: D) -> Result<Thickness, D::Error>
where
    D: Deserializer<'de>,
{
    struct ThicknessVisitor;
    impl<'de> de::Visitor<'de> for ThicknessVisitor {
        type Value = Thickness;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a number, a string like '10 20', or a map")
        }

        fn visit_f64<E>(self, value: f64) -> Result<Thickness, E>
        where
            E: de::Error,
        {
            Ok(Thickness::all(value as f32))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Thickness, E>
        where
            E: de::Error,
        {
            Ok(Thickness::all(value as f32))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Thickness, E>
        where
            E: de::Error,
        {
            Ok(Thickness::all(value as f32))
        }

        fn visit_str<E>(self, value: &str) -> Result<Thickness, E>
        where
            E: de::Error,
        {
            parse_thickness(value).map_err(E::custom)
        }

        fn visit_map<A>(self, mut map: A) -> Result<Thickness, A::Error>
        where
            A: de::MapAccess<'de>,
        {
            let mut thickness = Thickness::ZERO;
            while let Some(key) = map.next_key::<String>()? {
                match key.as_str() {
                    "top" => thickness.top = map.next_value()?,
                    "right" => thickness.right = map.next_value()?,
                    "bottom" => thickness.bottom = map.next_value()?,
                    "left" => thickness.left = map.next_value()?,
                    other => return Err(de::Error::unknown_field(other, &["top", "right", "bottom", "left"])),
                }
            }
            Ok(thickness)
        }
    }
    deserializer.deserialize_any(ThicknessVisitor)
}
