//! Transform types and operations.
//!
//! This module provides the transform trait and the transformation
//! primitives that can be registered between coordinate systems.

pub mod trait_;
pub mod identity;
pub mod map_axis;
pub mod translation;
pub mod scale;
pub mod affine;
pub mod sequence;
pub mod transformation;
mod matrix;

pub use trait_::Transform;
pub use identity::Identity;
pub use map_axis::MapAxis;
pub use translation::Translation;
pub use scale::Scale;
pub use affine::Affine;
pub use sequence::Sequence;
pub use transformation::Transformation;
