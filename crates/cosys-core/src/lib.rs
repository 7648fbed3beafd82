pub mod error;
pub mod spatial;
pub mod transform;

pub use error::{Result, TransformError};
pub use spatial::{Axis, Point};
pub use transform::{Transform, Transformation};
