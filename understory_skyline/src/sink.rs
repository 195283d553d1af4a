// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key point sinks: the appender and the building projector.

use crate::types::{Building, KeyPoint};

/// A growing sequence of key points that only accepts height changes.
///
/// Implementors provide storage; [`PointSink::append`] keeps the
/// no-consecutive-equal-heights invariant incrementally, so skylines never need
/// a cleanup pass.
pub trait PointSink {
    /// Error raised when storage runs out. Unbounded sinks use
    /// [`core::convert::Infallible`].
    type Error;

    /// The most recently stored point, if any.
    fn last(&self) -> Option<KeyPoint>;

    /// Store a point unconditionally.
    fn push_point(&mut self, point: KeyPoint) -> Result<(), Self::Error>;

    /// Append `(x, height)` unless it repeats the last stored height.
    fn append(&mut self, x: i64, height: i64) -> Result<(), Self::Error> {
        if self.last().is_some_and(|p| p.height == height) {
            return Ok(());
        }
        self.push_point(KeyPoint::new(x, height))
    }
}

/// Append the rise and fall of one building: `(left, height)` then `(right, 0)`.
pub fn project<S: PointSink + ?Sized>(building: &Building, sink: &mut S) -> Result<(), S::Error> {
    sink.append(building.left, building.height)?;
    sink.append(building.right, 0)
}
