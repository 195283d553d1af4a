// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skyline outline.
//!
//! Turn a skyline into a Kurbo path for rendering, and compare its area to the
//! buildings' combined footprint.
//!
//! Run:
//! - `cargo run -p understory_demos --example skyline_outline`

use kurbo::{Affine, Shape};
use understory_skyline::{Building, SkylineBuilder};

fn main() {
    let buildings = [
        Building::new(1, 5, 11),
        Building::new(2, 7, 6),
        Building::new(3, 9, 13),
        Building::new(12, 16, 7),
        Building::new(14, 25, 3),
        Building::new(19, 22, 18),
        Building::new(23, 29, 13),
        Building::new(24, 28, 4),
    ];

    let mut builder = SkylineBuilder::new();
    let skyline = builder.build(&buildings).expect("buildings are valid and sorted");

    let path = skyline.to_bez_path();
    let footprint: f64 = buildings.iter().map(|b| b.to_rect().area()).sum();
    println!("outline area: {}", path.area().abs());
    println!("sum of footprints: {footprint}");
    println!("bounds: {:?}", path.bounding_box());

    // Canvas coordinates grow downward; flip around a 20-unit baseline.
    let canvas = Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, 20.0]) * path;
    println!("svg: {}", canvas.to_svg());
}
