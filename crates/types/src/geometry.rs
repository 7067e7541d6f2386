//! Geometric primitives shared by every layout strategy.
//!
//! All values are logical units in `f32`. Rectangles are expressed in the
//! coordinate space of the tree root.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Tolerance used when comparing computed geometry.
pub const EPSILON: f32 = 0.01;

/// Replaces NaN and negative values with zero.
#[inline]
pub fn non_negative(value: f32) -> f32 {
    if value.is_nan() || value < 0.0 { 0.0 } else { value }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn cross(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Builds a size from main/cross extents along `axis`.
    pub fn from_axes(axis: Axis, main: f32, cross: f32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }

    pub fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Clamps NaN and negative components to zero.
    pub fn sanitized(self) -> Self {
        Self {
            width: non_negative(self.width),
            height: non_negative(self.height),
        }
    }

    pub fn is_sane(self) -> bool {
        !self.width.is_nan() && !self.height.is_nan() && self.width >= 0.0 && self.height >= 0.0
    }

    pub fn inflate(self, thickness: &Thickness) -> Self {
        Self {
            width: self.width + thickness.horizontal(),
            height: self.height + thickness.vertical(),
        }
    }

    pub fn deflate(self, thickness: &Thickness) -> Self {
        Self {
            width: non_negative(self.width - thickness.horizontal()),
            height: non_negative(self.height - thickness.vertical()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Builds a rectangle from per-axis start/extent pairs.
    pub fn from_axes(
        axis: Axis,
        main_start: f32,
        main_extent: f32,
        cross_start: f32,
        cross_extent: f32,
    ) -> Self {
        match axis {
            Axis::Horizontal => Self::new(main_start, cross_start, main_extent, cross_extent),
            Axis::Vertical => Self::new(cross_start, main_start, cross_extent, main_extent),
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn start(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    pub fn extent(&self, axis: Axis) -> f32 {
        self.size().along(axis)
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Shrinks the rectangle by an inset. Extents never go below zero.
    pub fn deflate(&self, thickness: &Thickness) -> Self {
        Self {
            x: self.x + thickness.left,
            y: self.y + thickness.top,
            width: non_negative(self.width - thickness.horizontal()),
            height: non_negative(self.height - thickness.vertical()),
        }
    }

    /// Whether `other` lies within `self`, allowing for rounding noise.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x - EPSILON
            && other.y >= self.y - EPSILON
            && other.right() <= self.right() + EPSILON
            && other.bottom() <= self.bottom() + EPSILON
    }

    /// Replaces NaN coordinates with zero and clamps negative extents.
    pub fn sanitized(&self) -> Self {
        let finite_or_zero = |v: f32| if v.is_nan() { 0.0 } else { v };
        Self {
            x: finite_or_zero(self.x),
            y: finite_or_zero(self.y),
            width: non_negative(self.width),
            height: non_negative(self.height),
        }
    }
}

/// A four-sided inset, used for both padding and margin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Thickness {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Thickness {
    pub const ZERO: Thickness = Thickness {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Total inset along `axis`.
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.horizontal(),
            Axis::Vertical => self.vertical(),
        }
    }

    pub fn start(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    pub fn end(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    /// All four sides finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Constraint on a single axis.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisConstraint {
    Exact(f32),
    Range { min: f32, max: f32 },
    /// `min = 0`, `max = +inf`.
    #[default]
    Unconstrained,
}

impl AxisConstraint {
    /// `[0, max]`, or unconstrained when `max` is not finite.
    pub fn at_most(max: f32) -> Self {
        if max.is_finite() {
            AxisConstraint::Range {
                min: 0.0,
                max: non_negative(max),
            }
        } else {
            AxisConstraint::Unconstrained
        }
    }

    pub fn min(self) -> f32 {
        match self {
            AxisConstraint::Exact(v) => v,
            AxisConstraint::Range { min, .. } => min,
            AxisConstraint::Unconstrained => 0.0,
        }
    }

    pub fn max(self) -> f32 {
        match self {
            AxisConstraint::Exact(v) => v,
            AxisConstraint::Range { max, .. } => max,
            AxisConstraint::Unconstrained => f32::INFINITY,
        }
    }

    pub fn is_bounded(self) -> bool {
        self.max().is_finite()
    }

    /// The finite upper bound, if any.
    pub fn bound(self) -> Option<f32> {
        let max = self.max();
        max.is_finite().then_some(max)
    }

    pub fn constrain(self, value: f32) -> f32 {
        value.max(self.min()).min(self.max())
    }

    pub fn deflate(self, amount: f32) -> Self {
        match self {
            AxisConstraint::Exact(v) => AxisConstraint::Exact(non_negative(v - amount)),
            AxisConstraint::Range { min, max } => AxisConstraint::Range {
                min: non_negative(min - amount),
                max: non_negative(max - amount),
            },
            AxisConstraint::Unconstrained => AxisConstraint::Unconstrained,
        }
    }

    /// Drops the lower bound, keeping the upper one.
    pub fn loosen(self) -> Self {
        match self {
            AxisConstraint::Exact(v) | AxisConstraint::Range { max: v, .. } => {
                AxisConstraint::at_most(v)
            }
            AxisConstraint::Unconstrained => AxisConstraint::Unconstrained,
        }
    }
}

// Equality is bit-exact so constraints can key the measure cache.
impl PartialEq for AxisConstraint {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AxisConstraint::Exact(a), AxisConstraint::Exact(b)) => a.to_bits() == b.to_bits(),
            (
                AxisConstraint::Range { min: a0, max: a1 },
                AxisConstraint::Range { min: b0, max: b1 },
            ) => a0.to_bits() == b0.to_bits() && a1.to_bits() == b1.to_bits(),
            (AxisConstraint::Unconstrained, AxisConstraint::Unconstrained) => true,
            _ => false,
        }
    }
}

impl Eq for AxisConstraint {}

impl Hash for AxisConstraint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            AxisConstraint::Exact(v) => {
                0u8.hash(state);
                v.to_bits().hash(state);
            }
            AxisConstraint::Range { min, max } => {
                1u8.hash(state);
                min.to_bits().hash(state);
                max.to_bits().hash(state);
            }
            AxisConstraint::Unconstrained => 2u8.hash(state),
        }
    }
}

/// Per-axis size constraint handed from a container to a child.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeConstraint {
    pub width: AxisConstraint,
    pub height: AxisConstraint,
}

impl SizeConstraint {
    pub fn new(width: AxisConstraint, height: AxisConstraint) -> Self {
        Self { width, height }
    }

    pub fn unconstrained() -> Self {
        Self::default()
    }

    pub fn exact(size: Size) -> Self {
        Self {
            width: AxisConstraint::Exact(size.width),
            height: AxisConstraint::Exact(size.height),
        }
    }

    /// `[0, size]` on both axes; infinite components become unconstrained.
    pub fn loose(size: Size) -> Self {
        Self {
            width: AxisConstraint::at_most(size.width),
            height: AxisConstraint::at_most(size.height),
        }
    }

    pub fn from_axes(axis: Axis, main: AxisConstraint, cross: AxisConstraint) -> Self {
        match axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }

    pub fn along(&self, axis: Axis) -> AxisConstraint {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    pub fn with_axis(mut self, axis: Axis, constraint: AxisConstraint) -> Self {
        match axis {
            Axis::Horizontal => self.width = constraint,
            Axis::Vertical => self.height = constraint,
        }
        self
    }

    pub fn deflate(&self, thickness: &Thickness) -> Self {
        Self {
            width: self.width.deflate(thickness.horizontal()),
            height: self.height.deflate(thickness.vertical()),
        }
    }

    pub fn loosen(&self) -> Self {
        Self {
            width: self.width.loosen(),
            height: self.height.loosen(),
        }
    }

    pub fn constrain(&self, size: Size) -> Size {
        Size {
            width: self.width.constrain(size.width),
            height: self.height.constrain(size.height),
        }
    }

    /// Finite upper bounds, or zero where unconstrained.
    pub fn bounded_size(&self) -> Size {
        Size {
            width: self.width.bound().unwrap_or(0.0),
            height: self.height.bound().unwrap_or(0.0),
        }
    }
}
