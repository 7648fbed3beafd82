//! Spatial types for representing axes and axis-labelled points.
//!
//! Point coordinates are stored in nalgebra vectors; the axis list gives
//! each coordinate its meaning.

pub mod axis;
pub mod point;

pub use axis::{validate_axes, Axis};
pub use point::Point;
