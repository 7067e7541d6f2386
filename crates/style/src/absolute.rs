//! Attached bounds for children of an Absolute container.
use crate::relative::LayoutProperty;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Marks which bound components are proportional factors in `[0, 1]`
    /// rather than absolute units.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct AbsoluteLayoutFlags: u8 {
        const X_PROPORTIONAL = 0b0001;
        const Y_PROPORTIONAL = 0b0010;
        const WIDTH_PROPORTIONAL = 0b0100;
        const HEIGHT_PROPORTIONAL = 0b1000;
        const POSITION_PROPORTIONAL = Self::X_PROPORTIONAL.bits() | Self::Y_PROPORTIONAL.bits();
        const SIZE_PROPORTIONAL = Self::WIDTH_PROPORTIONAL.bits() | Self::HEIGHT_PROPORTIONAL.bits();
        const ALL = Self::POSITION_PROPORTIONAL.bits() | Self::SIZE_PROPORTIONAL.bits();
    }
}

impl AbsoluteLayoutFlags {
    pub fn is_proportional(self, property: LayoutProperty) -> bool {
        let flag = match property {
            LayoutProperty::X => AbsoluteLayoutFlags::X_PROPORTIONAL,
            LayoutProperty::Y => AbsoluteLayoutFlags::Y_PROPORTIONAL,
            LayoutProperty::Width => AbsoluteLayoutFlags::WIDTH_PROPORTIONAL,
            LayoutProperty::Height => AbsoluteLayoutFlags::HEIGHT_PROPORTIONAL,
        };
        self.contains(flag)
    }
}

/// Requested bounds of an Absolute child.
///
/// `width`/`height` of `None` mean "use the child's natural size".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AbsoluteBounds {
    pub x: f32,
    pub y: f32,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub flags: AbsoluteLayoutFlags,
}

impl AbsoluteBounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: Some(width),
            height: Some(height),
            flags: AbsoluteLayoutFlags::empty(),
        }
    }

    /// Positioned at `(x, y)` with the child's natural size.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..Default::default()
        }
    }

    pub fn with_flags(mut self, flags: AbsoluteLayoutFlags) -> Self {
        self.flags = flags;
        self
    }

    /// The requested value of one component, `None` when auto-sized.
    pub fn component(&self, property: LayoutProperty) -> Option<f32> {
        match property {
            LayoutProperty::X => Some(self.x),
            LayoutProperty::Y => Some(self.y),
            LayoutProperty::Width => self.width,
            LayoutProperty::Height => self.height,
        }
    }

    /// Checks the bounds/flags combination, returning a description of the
    /// first problem found.
    pub fn validate(&self) -> Result<(), String> {
        for property in LayoutProperty::ALL {
            let proportional = self.flags.is_proportional(property);
            match self.component(property) {
                None if proportional => {
                    return Err(format!(
                        "{:?} is flagged proportional but has no value",
                        property
                    ));
                }
                None => {}
                Some(v) if !v.is_finite() => {
                    return Err(format!("{:?} is not finite ({})", property, v));
                }
                Some(v) if proportional && !(0.0..=1.0).contains(&v) => {
                    return Err(format!(
                        "proportional {:?} must lie in [0, 1], got {}",
                        property, v
                    ));
                }
                Some(v) if !property.is_position() && v < 0.0 => {
                    return Err(format!("{:?} must not be negative, got {}", property, v));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_combinations() {
        let flags = AbsoluteLayoutFlags::POSITION_PROPORTIONAL;
        assert!(flags.is_proportional(LayoutProperty::X));
        assert!(flags.is_proportional(LayoutProperty::Y));
        assert!(!flags.is_proportional(LayoutProperty::Width));
        assert_eq!(
            AbsoluteLayoutFlags::ALL,
            AbsoluteLayoutFlags::POSITION_PROPORTIONAL | AbsoluteLayoutFlags::SIZE_PROPORTIONAL
        );
    }

    #[test]
    fn test_validate_rejects_malformed_bounds() {
        assert!(AbsoluteBounds::new(10.0, 10.0, 50.0, 50.0).validate().is_ok());
        assert!(
            AbsoluteBounds::new(0.5, 0.5, 50.0, 50.0)
                .with_flags(AbsoluteLayoutFlags::POSITION_PROPORTIONAL)
                .validate()
                .is_ok()
        );

        let out_of_range = AbsoluteBounds::new(1.5, 0.0, 10.0, 10.0)
            .with_flags(AbsoluteLayoutFlags::X_PROPORTIONAL);
        assert!(out_of_range.validate().is_err());

        let auto_but_proportional =
            AbsoluteBounds::at(0.0, 0.0).with_flags(AbsoluteLayoutFlags::WIDTH_PROPORTIONAL);
        assert!(auto_but_proportional.validate().is_err());

        assert!(AbsoluteBounds::new(0.0, 0.0, -1.0, 10.0).validate().is_err());
        // Negative absolute positions are legal.
        assert!(AbsoluteBounds::new(-5.0, -5.0, 1.0, 1.0).validate().is_ok());
    }

    #[test]
    fn test_deserialize_flags_by_name() {
        let bounds: AbsoluteBounds = serde_json::from_str(
            r#"{ "x": 0.5, "y": 0.25, "width": 100, "flags": "X_PROPORTIONAL | Y_PROPORTIONAL" }"#,
        )
        .unwrap();
        assert_eq!(bounds.flags, AbsoluteLayoutFlags::POSITION_PROPORTIONAL);
        assert_eq!(bounds.width, Some(100.0));
        assert_eq!(bounds.height, None);
    }
}
