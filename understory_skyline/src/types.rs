// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive input and output types.

use crate::error::SkylineError;

/// An axis-aligned building standing on the ground line.
///
/// A valid building has `left < right` and `height > 0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Building {
    /// Left edge (inclusive).
    pub left: i64,
    /// Right edge, where the building drops back to the ground.
    pub right: i64,
    /// Roof height.
    pub height: i64,
}

impl Building {
    /// Create a new building from its edges and height.
    pub const fn new(left: i64, right: i64, height: i64) -> Self {
        Self {
            left,
            right,
            height,
        }
    }

    /// Whether the building has positive width and height.
    pub const fn is_valid(&self) -> bool {
        self.left < self.right && self.height > 0
    }

    /// Check the building, reporting it as the `index`th input on failure.
    pub fn validate(&self, index: usize) -> Result<(), SkylineError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(SkylineError::InvalidBuilding {
                index,
                building: *self,
            })
        }
    }
}

impl From<(i64, i64, i64)> for Building {
    fn from((left, right, height): (i64, i64, i64)) -> Self {
        Self::new(left, right, height)
    }
}

/// A coordinate where the skyline height changes.
///
/// The height holds from `x` up to the next key point's `x`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyPoint {
    /// Horizontal position.
    pub x: i64,
    /// Height starting at `x`.
    pub height: i64,
}

impl KeyPoint {
    /// Create a key point.
    pub const fn new(x: i64, height: i64) -> Self {
        Self { x, height }
    }
}

impl From<(i64, i64)> for KeyPoint {
    fn from((x, height): (i64, i64)) -> Self {
        Self::new(x, height)
    }
}

impl From<KeyPoint> for (i64, i64) {
    fn from(p: KeyPoint) -> Self {
        (p.x, p.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_buildings_are_rejected() {
        assert!(Building::new(0, 1, 1).validate(0).is_ok());
        assert_eq!(
            Building::new(3, 3, 5).validate(4),
            Err(SkylineError::InvalidBuilding {
                index: 4,
                building: Building::new(3, 3, 5),
            })
        );
        assert!(Building::new(5, 2, 5).validate(0).is_err());
        assert!(Building::new(0, 2, 0).validate(0).is_err());
        assert!(Building::new(0, 2, -3).validate(0).is_err());
    }

    #[test]
    fn tuple_conversions() {
        assert_eq!(Building::from((2, 9, 10)), Building::new(2, 9, 10));
        let p = KeyPoint::from((7, 12));
        assert_eq!(<(i64, i64)>::from(p), (7, 12));
    }
}
