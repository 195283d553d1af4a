// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kurbo geometry for buildings and skylines.
//!
//! Coordinates map directly: `x` to `x`, height to `y`. Flip with an
//! [`Affine`](kurbo::Affine) for y-down canvases.

use kurbo::{BezPath, Point, Rect};

use crate::skyline::Skyline;
use crate::types::Building;

impl Building {
    /// The building's footprint from the ground line to its roof.
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.left as f64,
            0.0,
            self.right as f64,
            self.height as f64,
        )
    }
}

impl Skyline {
    /// A closed path tracing the outline along the ground line.
    ///
    /// Each key point becomes a vertical step; the path is empty when the
    /// skyline is.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some(first) = self.points().first() else {
            return path;
        };
        path.move_to(Point::new(first.x as f64, 0.0));
        let mut height = 0;
        for p in self.points() {
            let x = p.x as f64;
            path.line_to(Point::new(x, height as f64));
            path.line_to(Point::new(x, p.height as f64));
            height = p.height;
        }
        path.close_path();
        path
    }
}
