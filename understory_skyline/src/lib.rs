// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Skyline: the upper contour of a set of axis-aligned buildings.
//!
//! Given buildings as `(left, right, height)` triples standing on a common ground line,
//! a skyline is the minimal ordered list of `(x, height)` key points describing the outline of their union.
//!
//! - [`SkylineBuilder`] computes skylines by divide and conquer over the building list.
//! - [`Skyline`] is the owned result; it can also be merged, queried, and validated on its own.
//! - [`PointSink`] and [`merge_into`] expose the building blocks for custom storage.
//!
//! The builder halves the input recursively. Each half writes its skyline into a region of one of
//! two scratch arenas, alternating arenas by depth, and the parent merges both halves with a
//! coordinate sweep into its own region. Once the arenas are sized no further allocation happens,
//! and every write is bounds-checked.
//!
//! # Example
//!
//! ```rust
//! use understory_skyline::{Building, SkylineBuilder};
//!
//! let buildings = [
//!     Building::new(2, 9, 10),
//!     Building::new(3, 7, 15),
//!     Building::new(5, 12, 12),
//!     Building::new(15, 20, 10),
//!     Building::new(19, 24, 8),
//! ];
//!
//! let mut builder = SkylineBuilder::new();
//! let skyline = builder.build(&buildings).unwrap();
//!
//! let pairs: Vec<(i64, i64)> = skyline.iter().map(|p| (p.x, p.height)).collect();
//! assert_eq!(
//!     pairs,
//!     [(2, 10), (3, 15), (7, 12), (12, 0), (15, 10), (20, 8), (24, 0)]
//! );
//! assert_eq!(skyline.height_at(10), 12);
//! ```
//!
//! ## Input rules
//!
//! Every building must have `left < right` and `height > 0`, and by default the list must be
//! sorted by ascending `left`. Violations are reported as [`SkylineError`] before any work is done.
//!
//! ## Capacity
//!
//! A default builder accepts up to [`DEFAULT_MAX_BUILDINGS`] buildings and reports
//! [`SkylineError::CapacityExceeded`] beyond that. Use [`Capacity::Growable`] to size the
//! scratch arenas to each input instead:
//!
//! ```rust
//! use understory_skyline::{BuilderConfig, Building, Capacity, SkylineBuilder};
//!
//! let mut builder =
//!     SkylineBuilder::with_config(BuilderConfig::default().with_capacity(Capacity::Growable));
//! let buildings: Vec<Building> = (0..2000).map(|i| Building::new(i, i + 1, 1 + i % 4)).collect();
//! let skyline = builder.build(&buildings).unwrap();
//! assert!(skyline.is_well_formed());
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to optional dependencies.
//! - `libm`: `no_std` math for Kurbo.
//! - `kurbo`: [`Skyline::to_bez_path`] and [`Building::to_rect`] for rendering.
//! - `tracing`: debug spans around each build and events for rejected input.

#![no_std]

extern crate alloc;

pub mod builder;
pub mod config;
pub mod error;
pub mod merge;
#[cfg(feature = "kurbo")]
pub mod outline;
pub mod scratch;
pub mod sink;
pub mod skyline;
pub mod types;

pub use builder::SkylineBuilder;
pub use config::{BuilderConfig, Capacity, DEFAULT_MAX_BUILDINGS};
pub use error::SkylineError;
pub use merge::merge_into;
pub use scratch::{BufferId, Placement, Region, ScratchBuffers};
pub use sink::{PointSink, project};
pub use skyline::Skyline;
pub use types::{Building, KeyPoint};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn builder_agrees_with_pairwise_merges() {
        let input = [
            Building::new(1, 5, 11),
            Building::new(2, 7, 6),
            Building::new(3, 9, 13),
            Building::new(12, 16, 7),
            Building::new(14, 25, 3),
            Building::new(19, 22, 18),
            Building::new(23, 29, 13),
            Building::new(24, 28, 4),
        ];
        let folded = input
            .iter()
            .map(Skyline::from_building)
            .fold(Skyline::new(), |acc, s| acc.merge(&s));

        let mut builder = SkylineBuilder::new();
        let built = builder.build(&input).unwrap();
        assert_eq!(built, folded);

        let pairs: Vec<(i64, i64)> = built.into_iter().map(Into::into).collect();
        assert_eq!(
            pairs,
            [
                (1, 11),
                (3, 13),
                (9, 0),
                (12, 7),
                (16, 3),
                (19, 18),
                (22, 3),
                (23, 13),
                (29, 0)
            ]
        );
    }

    #[test]
    fn rejected_input_leaves_builder_usable() {
        let mut builder = SkylineBuilder::new();
        assert!(builder.build(&[Building::new(4, 1, 1)]).is_err());
        let s = builder.build(&[Building::new(1, 4, 1)]).unwrap();
        assert_eq!(s.points(), &[KeyPoint::new(1, 1), KeyPoint::new(4, 0)]);
    }
}
