// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Divide-and-conquer skyline driver.

use crate::config::{BuilderConfig, Capacity};
use crate::error::SkylineError;
use crate::merge::merge_into;
use crate::scratch::{Region, RegionWriter, ScratchBuffers, read_prefix};
use crate::sink::project;
use crate::skyline::Skyline;
use crate::types::{Building, KeyPoint};

/// Computes skylines, reusing its scratch arenas across calls.
///
/// The building range is halved recursively; each leaf projects one building,
/// and each inner call merges its halves' skylines. Outputs alternate between
/// the two arenas by depth, so nothing is allocated once the arenas are sized.
#[derive(Debug, Default)]
pub struct SkylineBuilder {
    config: BuilderConfig,
    scratch: ScratchBuffers,
}

impl SkylineBuilder {
    /// A builder with the default configuration (at most
    /// [`DEFAULT_MAX_BUILDINGS`](crate::DEFAULT_MAX_BUILDINGS) sorted buildings).
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder with the given configuration.
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            config,
            scratch: ScratchBuffers::new(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// The scratch arenas, as left by the last build.
    pub fn scratch(&self) -> &ScratchBuffers {
        &self.scratch
    }

    /// Compute the skyline of `buildings`.
    pub fn build(&mut self, buildings: &[Building]) -> Result<Skyline, SkylineError> {
        let points = self.build_in_place(buildings)?;
        Ok(Skyline::from_points_unchecked(points.to_vec()))
    }

    /// Compute the skyline of `buildings`, borrowing the result from the
    /// builder's first arena instead of copying it out.
    pub fn build_in_place(&mut self, buildings: &[Building]) -> Result<&[KeyPoint], SkylineError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("skyline_build", buildings = buildings.len()).entered();

        if let Err(err) = self.validate(buildings) {
            #[cfg(feature = "tracing")]
            tracing::debug!(%err, "rejected building set");
            return Err(err);
        }
        let Some(last) = buildings.len().checked_sub(1) else {
            return Ok(&[]);
        };

        let root = Region::root(buildings.len());
        self.scratch.ensure_slots(root.capacity);
        let len = Pass {
            buildings,
            scratch: &mut self.scratch,
        }
        .run(0, last, root)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(points = len, "skyline built");

        self.scratch
            .read(root, len)
            .ok_or(SkylineError::CapacityExceeded {
                requested: len,
                capacity: root.capacity,
            })
    }

    /// Check `buildings` against the builder's preconditions without building.
    pub fn validate(&self, buildings: &[Building]) -> Result<(), SkylineError> {
        let n = buildings.len();
        match self.config.capacity {
            Capacity::Fixed(max) if n > max => {
                return Err(SkylineError::CapacityExceeded {
                    requested: n,
                    capacity: max,
                });
            }
            Capacity::Growable if n.checked_mul(2).is_none() => {
                return Err(SkylineError::CapacityExceeded {
                    requested: n,
                    capacity: usize::MAX / 2,
                });
            }
            _ => {}
        }
        for (i, b) in buildings.iter().enumerate() {
            b.validate(i)?;
            if self.config.check_order && i > 0 && b.left < buildings[i - 1].left {
                return Err(SkylineError::UnsortedInput { index: i });
            }
        }
        Ok(())
    }
}

/// One top-level build: the input and the arenas threaded through recursion.
struct Pass<'a> {
    buildings: &'a [Building],
    scratch: &'a mut ScratchBuffers,
}

impl Pass<'_> {
    /// Write the skyline of `buildings[first..=last]` to `out`, returning its
    /// length.
    fn run(&mut self, first: usize, last: usize, out: Region) -> Result<usize, SkylineError> {
        if first == last {
            let (arena, _) = self.scratch.split_mut(out.buffer);
            let mut w = RegionWriter::new(arena, out)?;
            project(&self.buildings[first], &mut w)?;
            return Ok(w.len());
        }

        let mid = first + (last - first) / 2;
        let (left, right) = out.child_regions(mid - first + 1);
        let left_len = self.run(first, mid, left)?;
        let right_len = self.run(mid + 1, last, right)?;

        let (arena, children) = self.scratch.split_mut(out.buffer);
        let lhs = read_prefix(children, left, left_len).ok_or_else(|| overrun(left, left_len))?;
        let rhs =
            read_prefix(children, right, right_len).ok_or_else(|| overrun(right, right_len))?;
        let mut w = RegionWriter::new(arena, out)?;
        merge_into(lhs, rhs, &mut w)?;
        Ok(w.len())
    }
}

fn overrun(region: Region, len: usize) -> SkylineError {
    SkylineError::CapacityExceeded {
        requested: len,
        capacity: region.capacity,
    }
}
