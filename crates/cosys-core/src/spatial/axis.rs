//! Axis labels.
//!
//! Coordinates are addressed by axis name rather than by position, so the same
//! transformation can be rendered for any ordering of the axes it touches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TransformError};

/// A named spatial or channel axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Channel axis.
    C,
    X,
    Y,
    Z,
}

impl Axis {
    /// Axis name as used in axis lists (`"c"`, `"x"`, `"y"`, `"z"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::C => "c",
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "c" => Ok(Axis::C),
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            other => Err(TransformError::axis_mismatch(format!("unknown axis {:?}", other))),
        }
    }
}

/// Ensure an axis list contains no duplicates.
pub fn validate_axes(axes: &[Axis]) -> Result<()> {
    for (i, axis) in axes.iter().enumerate() {
        if axes[..i].contains(axis) {
            return Err(TransformError::DuplicateAxis(*axis));
        }
    }
    Ok(())
}

/// Position of `axis` in `axes`, if present.
pub fn position(axes: &[Axis], axis: Axis) -> Option<usize> {
    axes.iter().position(|a| *a == axis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_round_trip_through_str() {
        for axis in [Axis::C, Axis::X, Axis::Y, Axis::Z] {
            assert_eq!(axis.as_str().parse::<Axis>().unwrap(), axis);
        }
        assert!("t".parse::<Axis>().is_err());
    }

    #[test]
    fn test_validate_axes() {
        assert!(validate_axes(&[Axis::X, Axis::Y, Axis::Z]).is_ok());
        assert!(validate_axes(&[]).is_ok());
        assert_eq!(
            validate_axes(&[Axis::X, Axis::Y, Axis::X]),
            Err(TransformError::DuplicateAxis(Axis::X))
        );
    }

    #[test]
    fn test_position() {
        let axes = [Axis::C, Axis::Y, Axis::X];
        assert_eq!(position(&axes, Axis::X), Some(2));
        assert_eq!(position(&axes, Axis::Z), None);
    }
}
