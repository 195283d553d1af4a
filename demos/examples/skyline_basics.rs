// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skyline basics.
//!
//! Build a skyline, query heights, merge with another skyline, and handle rejected input.
//!
//! Run:
//! - `cargo run -p understory_demos --example skyline_basics`
//! - `RUST_LOG=understory_skyline=trace cargo run -p understory_demos --example skyline_basics`

use tracing_subscriber::EnvFilter;
use understory_skyline::{Building, Skyline, SkylineBuilder};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let buildings = [
        Building::new(2, 9, 10),
        Building::new(3, 7, 15),
        Building::new(5, 12, 12),
        Building::new(15, 20, 10),
        Building::new(19, 24, 8),
    ];

    let mut builder = SkylineBuilder::new();
    let skyline = builder.build(&buildings).expect("buildings are valid and sorted");
    println!("skyline: {:?}", skyline.points());

    for x in [0, 4, 8, 13, 19] {
        println!("height at {x}: {}", skyline.height_at(x));
    }

    // Merge with a separately computed skyline.
    let tower = Skyline::from_building(&Building::new(10, 16, 30));
    let merged = skyline.merge(&tower);
    println!("with tower: {:?}", merged.points());

    // Degenerate and unsorted input is rejected up front.
    match builder.build(&[Building::new(4, 4, 1)]) {
        Ok(_) => unreachable!("zero-width building accepted"),
        Err(e) => println!("rejected: {e}"),
    }
    match builder.build(&[Building::new(5, 8, 1), Building::new(1, 3, 1)]) {
        Ok(_) => unreachable!("unsorted input accepted"),
        Err(e) => println!("rejected: {e}"),
    }
}
