// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-pointer merge of skylines.

use crate::sink::PointSink;
use crate::types::KeyPoint;

/// Merge two well-formed skylines into `out` by sweeping x left to right.
///
/// Each side keeps the height of the last point consumed from it; every step
/// emits the larger of the two running heights at the smaller pending `x`.
///
/// The two "advance" tests are deliberately *not* an `if`/`else`: when both
/// sides have a point at the same `x`, both are consumed in the same step and a
/// single key point is emitted there. Turning this into `if`/`else` emits two
/// points at one `x` and breaks strict ordering.
///
/// Once one side is exhausted its running height is 0 (well-formed skylines end
/// on the ground), so the rest of the other side is copied through unchanged.
pub fn merge_into<S: PointSink + ?Sized>(
    left: &[KeyPoint],
    right: &[KeyPoint],
    out: &mut S,
) -> Result<(), S::Error> {
    let (mut i1, mut i2) = (0, 0);
    let (mut h1, mut h2) = (0, 0);

    while i1 < left.len() && i2 < right.len() {
        let x1 = left[i1].x;
        let x2 = right[i2].x;
        let mut x = x1;
        if x1 <= x2 {
            h1 = left[i1].height;
            i1 += 1;
        }
        if x2 <= x1 {
            h2 = right[i2].height;
            x = x2;
            i2 += 1;
        }
        out.append(x, h1.max(h2))?;
    }

    for p in left[i1..].iter().chain(&right[i2..]) {
        out.append(p.x, p.height)?;
    }
    Ok(())
}
