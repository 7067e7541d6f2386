pub mod color;
pub mod geometry;

pub use color::Color;
pub use geometry::{Axis, AxisConstraint, Point, Rect, Size, SizeConstraint, Thickness};
