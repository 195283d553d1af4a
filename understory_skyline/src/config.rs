// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builder configuration.

/// Buildings a default builder accepts: 1024 key point slots per arena.
pub const DEFAULT_MAX_BUILDINGS: usize = 512;

/// How much input a builder accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Capacity {
    /// Reject building sets larger than this many buildings.
    Fixed(usize),
    /// Size the arenas to each input before the build starts.
    Growable,
}

impl Capacity {
    /// Largest accepted building count, if bounded.
    pub const fn max_buildings(self) -> Option<usize> {
        match self {
            Self::Fixed(n) => Some(n),
            Self::Growable => None,
        }
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::Fixed(DEFAULT_MAX_BUILDINGS)
    }
}

/// Options for [`SkylineBuilder`](crate::SkylineBuilder).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Input size limit.
    pub capacity: Capacity,
    /// Reject buildings that are not sorted by ascending `left`.
    ///
    /// The merge is correct for overlapping halves, so turning this off yields
    /// the same skyline for unsorted input; it only skips the check.
    pub check_order: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            capacity: Capacity::default(),
            check_order: true,
        }
    }
}

impl BuilderConfig {
    /// Replace the capacity policy.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: Capacity) -> Self {
        self.capacity = capacity;
        self
    }

    /// Enable or disable the sorted-input check.
    #[must_use]
    pub const fn with_check_order(mut self, check_order: bool) -> Self {
        self.check_order = check_order;
        self
    }
}
