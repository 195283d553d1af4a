// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned skyline type.

use alloc::vec::Vec;
use core::convert::Infallible;

use crate::error::SkylineError;
use crate::merge::merge_into;
use crate::sink::{PointSink, project};
use crate::types::{Building, KeyPoint};

/// An ordered outline of key points.
///
/// Invariants: `x` strictly increases, consecutive points never share a height,
/// heights are non-negative, and a non-empty skyline ends on the ground
/// (height 0).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Skyline {
    points: Vec<KeyPoint>,
}

impl Skyline {
    /// Create an empty skyline.
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create an empty skyline with room for `n` points.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            points: Vec::with_capacity(n),
        }
    }

    /// The two-point skyline of a single building.
    ///
    /// The building is not validated; use [`Building::validate`] first for
    /// untrusted input.
    pub fn from_building(building: &Building) -> Self {
        let mut s = Self::with_capacity(2);
        let Ok(()) = project(building, &mut s);
        s
    }

    /// Adopt a point sequence, checking the skyline invariants.
    pub fn from_points(points: Vec<KeyPoint>) -> Result<Self, SkylineError> {
        if let Some(index) = first_violation(&points) {
            return Err(SkylineError::MalformedSkyline { index });
        }
        Ok(Self { points })
    }

    pub(crate) fn from_points_unchecked(points: Vec<KeyPoint>) -> Self {
        debug_assert!(
            first_violation(&points).is_none(),
            "builder produced a malformed skyline"
        );
        Self { points }
    }

    /// Merge two skylines into a new one.
    pub fn merge(&self, other: &Self) -> Self {
        let mut out = Self::with_capacity(self.len() + other.len());
        let Ok(()) = merge_into(&self.points, &other.points, &mut out);
        out
    }

    /// Height of the outline at `x`; 0 outside every building.
    pub fn height_at(&self, x: i64) -> i64 {
        let k = self.points.partition_point(|p| p.x <= x);
        if k == 0 { 0 } else { self.points[k - 1].height }
    }

    /// Whether the invariants listed on [`Skyline`] hold.
    pub fn is_well_formed(&self) -> bool {
        first_violation(&self.points).is_none()
    }

    /// The key points in ascending `x`.
    pub fn points(&self) -> &[KeyPoint] {
        &self.points
    }

    /// Number of key points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if there are no key points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the key points.
    pub fn iter(&self) -> core::slice::Iter<'_, KeyPoint> {
        self.points.iter()
    }

    /// Consume the skyline, returning its points.
    pub fn into_points(self) -> Vec<KeyPoint> {
        self.points
    }

    /// Remove all points, keeping the allocation.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl PointSink for Skyline {
    type Error = Infallible;

    fn last(&self) -> Option<KeyPoint> {
        self.points.last().copied()
    }

    fn push_point(&mut self, point: KeyPoint) -> Result<(), Infallible> {
        self.points.push(point);
        Ok(())
    }
}

impl IntoIterator for Skyline {
    type Item = KeyPoint;
    type IntoIter = alloc::vec::IntoIter<KeyPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Skyline {
    type Item = &'a KeyPoint;
    type IntoIter = core::slice::Iter<'a, KeyPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl AsRef<[KeyPoint]> for Skyline {
    fn as_ref(&self) -> &[KeyPoint] {
        &self.points
    }
}

fn first_violation(points: &[KeyPoint]) -> Option<usize> {
    for (i, p) in points.iter().enumerate() {
        if p.height < 0 {
            return Some(i);
        }
        if i > 0 {
            let prev = points[i - 1];
            if p.x <= prev.x || p.height == prev.height {
                return Some(i);
            }
        }
    }
    match points.last() {
        Some(p) if p.height != 0 => Some(points.len() - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn pts(points: &[(i64, i64)]) -> Vec<KeyPoint> {
        points.iter().copied().map(KeyPoint::from).collect()
    }

    #[test]
    fn from_points_checks_invariants() {
        assert!(Skyline::from_points(Vec::new()).is_ok());
        assert!(Skyline::from_points(pts(&[(1, 3), (3, 0)])).is_ok());
        assert_eq!(
            Skyline::from_points(pts(&[(1, 3), (1, 0)])),
            Err(SkylineError::MalformedSkyline { index: 1 })
        );
        assert_eq!(
            Skyline::from_points(pts(&[(1, 3), (2, 3), (4, 0)])),
            Err(SkylineError::MalformedSkyline { index: 1 })
        );
        assert_eq!(
            Skyline::from_points(pts(&[(1, -1), (2, 0)])),
            Err(SkylineError::MalformedSkyline { index: 0 })
        );
        assert_eq!(
            Skyline::from_points(pts(&[(1, 3), (2, 4)])),
            Err(SkylineError::MalformedSkyline { index: 1 })
        );
    }

    #[test]
    fn height_lookup() {
        let s = Skyline::from_points(pts(&[(2, 10), (3, 15), (7, 12), (12, 0)])).unwrap();
        assert_eq!(s.height_at(0), 0);
        assert_eq!(s.height_at(2), 10);
        assert_eq!(s.height_at(6), 15);
        assert_eq!(s.height_at(7), 12);
        assert_eq!(s.height_at(12), 0);
        assert_eq!(s.height_at(100), 0);
        assert_eq!(Skyline::new().height_at(5), 0);
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let s = Skyline::from_building(&Building::new(2, 9, 10));
        assert_eq!(s.merge(&Skyline::new()), s);
        assert_eq!(Skyline::new().merge(&s), s);
        assert!(Skyline::new().merge(&Skyline::new()).is_empty());
    }

    #[test]
    fn merge_two_buildings() {
        let a = Skyline::from_building(&Building::new(1, 3, 3));
        let b = Skyline::from_building(&Building::new(5, 7, 4));
        let m = a.merge(&b);
        assert_eq!(m.points(), &pts(&[(1, 3), (3, 0), (5, 4), (7, 0)])[..]);
        assert!(m.is_well_formed());
    }

    #[test]
    fn iteration_and_conversion() {
        let s = Skyline::from_building(&Building::new(0, 4, 2));
        let xs: Vec<i64> = s.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0, 4]);
        let pairs: Vec<(i64, i64)> = s.clone().into_iter().map(Into::into).collect();
        assert_eq!(pairs, vec![(0, 2), (4, 0)]);
        let mut s = s;
        s.clear();
        assert!(s.is_empty());
    }
}
