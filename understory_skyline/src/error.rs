// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported for rejected input.

use core::fmt;

use crate::types::Building;

/// Reasons a skyline computation is refused.
///
/// Every variant is a deterministic precondition failure: the whole computation
/// is abandoned and no partial skyline is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkylineError {
    /// More buildings (or key points) than the scratch storage can hold.
    CapacityExceeded {
        /// Slots or buildings the operation needed.
        requested: usize,
        /// Slots or buildings available.
        capacity: usize,
    },
    /// A building with `left >= right` or `height <= 0`.
    InvalidBuilding {
        /// Position of the building in the input.
        index: usize,
        /// The offending building.
        building: Building,
    },
    /// Building `index` starts to the left of its predecessor.
    UnsortedInput {
        /// Position of the first out-of-order building.
        index: usize,
    },
    /// A point sequence breaks strictly increasing `x`, repeats a height, or
    /// has a negative height at `index`.
    MalformedSkyline {
        /// Position of the first offending point.
        index: usize,
    },
}

impl fmt::Display for SkylineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                capacity,
            } => write!(
                f,
                "scratch capacity exceeded: requested {requested}, capacity {capacity}"
            ),
            Self::InvalidBuilding { index, building } => write!(
                f,
                "building {index} is degenerate: left={} right={} height={}",
                building.left, building.right, building.height
            ),
            Self::UnsortedInput { index } => {
                write!(f, "building {index} is not sorted by ascending left edge")
            }
            Self::MalformedSkyline { index } => {
                write!(f, "key point {index} violates skyline ordering")
            }
        }
    }
}

impl core::error::Error for SkylineError {}
