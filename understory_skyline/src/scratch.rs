// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ping-pong scratch buffers and region assignment.
//!
//! The builder owns two arenas of key point slots. A recursive call writes its
//! output into a [`Region`] of one arena; its two children write into adjacent,
//! disjoint regions at the same offset of the *other* arena. The parent can
//! then read both children while it merges into its own region, and no write
//! ever lands on data that is still needed.
//!
//! Every building contributes at most two key points, so a call covering `n`
//! buildings reserves `2 * n` slots: the left child takes the first
//! `2 * left_size`, the right child the rest.

use alloc::vec::Vec;
use core::ops::Range;

use crate::error::SkylineError;
use crate::sink::PointSink;
use crate::types::KeyPoint;

/// Which of the two scratch arenas a region lives in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BufferId {
    /// The first arena; the root of every build writes here.
    One,
    /// The second arena.
    Two,
}

impl BufferId {
    /// The arena that is not `self`.
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

/// A contiguous run of slots inside one arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    /// Arena holding the slots.
    pub buffer: BufferId,
    /// First slot.
    pub offset: usize,
    /// Number of slots.
    pub capacity: usize,
}

impl Region {
    /// Create a region.
    pub const fn new(buffer: BufferId, offset: usize, capacity: usize) -> Self {
        Self {
            buffer,
            offset,
            capacity,
        }
    }

    /// The region a top-level build over `building_count` buildings writes to.
    pub const fn root(building_count: usize) -> Self {
        Self::new(BufferId::One, 0, building_count.saturating_mul(2))
    }

    /// One past the last slot.
    pub const fn end(&self) -> usize {
        self.offset.saturating_add(self.capacity)
    }

    /// Slot indices covered by the region.
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    /// The same slots in the other arena.
    pub const fn sibling(self) -> Self {
        Self::new(self.buffer.other(), self.offset, self.capacity)
    }

    /// Whether the two regions share at least one slot.
    pub const fn overlaps(&self, other: &Self) -> bool {
        matches!(
            (self.buffer, other.buffer),
            (BufferId::One, BufferId::One) | (BufferId::Two, BufferId::Two)
        ) && self.capacity > 0
            && other.capacity > 0
            && self.offset < other.end()
            && other.offset < self.end()
    }

    /// Output regions for the two halves of a call writing to `self`.
    ///
    /// Both live in the other arena: the left half at `self.offset` with
    /// `2 * left_size` slots, the right half immediately after it with the
    /// remaining slots.
    pub const fn child_regions(self, left_size: usize) -> (Self, Self) {
        let other = self.sibling();
        let left_slots = left_size.saturating_mul(2);
        let left = Self::new(other.buffer, other.offset, left_slots);
        let right = Self::new(
            other.buffer,
            other.offset.saturating_add(left_slots),
            other.capacity.saturating_sub(left_slots),
        );
        (left, right)
    }
}

/// Where one recursive call of a build writes its output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// First building index covered.
    pub first: usize,
    /// Last building index covered (inclusive).
    pub last: usize,
    /// Recursion depth; the root is 0.
    pub depth: usize,
    /// Output region of the call.
    pub region: Region,
}

/// The pair of key point arenas used by a build.
#[derive(Clone, Default)]
pub struct ScratchBuffers {
    buffers: [Vec<KeyPoint>; 2],
}

impl core::fmt::Debug for ScratchBuffers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScratchBuffers")
            .field("slots", &self.slots())
            .finish_non_exhaustive()
    }
}

impl ScratchBuffers {
    /// Create empty arenas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create arenas holding `slots` key points each.
    pub fn with_slots(slots: usize) -> Self {
        let mut s = Self::new();
        s.ensure_slots(slots);
        s
    }

    /// Slots per arena.
    pub fn slots(&self) -> usize {
        self.buffers[0].len()
    }

    /// Grow both arenas to at least `slots` key points. Never shrinks.
    pub fn ensure_slots(&mut self, slots: usize) {
        if self.slots() < slots {
            for b in &mut self.buffers {
                b.resize(slots, KeyPoint::default());
            }
        }
    }

    /// The first `len` points written to `region`, or `None` if they fall
    /// outside the arena or the region.
    pub fn read(&self, region: Region, len: usize) -> Option<&[KeyPoint]> {
        read_prefix(self.buffer(region.buffer), region, len)
    }

    /// Region assignment for every recursive call of a build over
    /// `building_count` buildings, in call order.
    ///
    /// This walks the same split the builder uses, without touching any
    /// arena.
    pub fn layout(building_count: usize) -> Vec<Placement> {
        let mut out = Vec::new();
        if building_count > 0 {
            plan(0, building_count - 1, 0, Region::root(building_count), &mut out);
        }
        out
    }

    fn buffer(&self, id: BufferId) -> &[KeyPoint] {
        match id {
            BufferId::One => &self.buffers[0],
            BufferId::Two => &self.buffers[1],
        }
    }

    /// Borrow the arena `write` mutably and the other arena shared.
    pub(crate) fn split_mut(&mut self, write: BufferId) -> (&mut [KeyPoint], &[KeyPoint]) {
        let [one, two] = &mut self.buffers;
        match write {
            BufferId::One => (one.as_mut_slice(), two.as_slice()),
            BufferId::Two => (two.as_mut_slice(), one.as_slice()),
        }
    }
}

fn plan(first: usize, last: usize, depth: usize, region: Region, out: &mut Vec<Placement>) {
    out.push(Placement {
        first,
        last,
        depth,
        region,
    });
    if first < last {
        let mid = first + (last - first) / 2;
        let (left, right) = region.child_regions(mid - first + 1);
        plan(first, mid, depth + 1, left, out);
        plan(mid + 1, last, depth + 1, right, out);
    }
}

pub(crate) fn read_prefix(arena: &[KeyPoint], region: Region, len: usize) -> Option<&[KeyPoint]> {
    if len > region.capacity {
        return None;
    }
    arena.get(region.offset..region.offset.checked_add(len)?)
}

/// Bounds-checked appender over the slots of one region.
#[derive(Debug)]
pub(crate) struct RegionWriter<'a> {
    slots: &'a mut [KeyPoint],
    len: usize,
}

impl<'a> RegionWriter<'a> {
    /// Start an empty sequence at the beginning of `region`.
    pub(crate) fn new(arena: &'a mut [KeyPoint], region: Region) -> Result<Self, SkylineError> {
        let capacity = arena.len();
        let slots = arena
            .get_mut(region.range())
            .ok_or(SkylineError::CapacityExceeded {
                requested: region.end(),
                capacity,
            })?;
        Ok(Self { slots, len: 0 })
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

impl PointSink for RegionWriter<'_> {
    type Error = SkylineError;

    fn last(&self) -> Option<KeyPoint> {
        self.len.checked_sub(1).map(|i| self.slots[i])
    }

    fn push_point(&mut self, point: KeyPoint) -> Result<(), SkylineError> {
        let capacity = self.slots.len();
        let slot = self
            .slots
            .get_mut(self.len)
            .ok_or(SkylineError::CapacityExceeded {
                requested: self.len + 1,
                capacity,
            })?;
        *slot = point;
        self.len += 1;
        Ok(())
    }
}
