// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_skyline::{BuilderConfig, Building, Capacity, Skyline, SkylineBuilder};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: u64) -> i64 {
        (self.next_u64() % n) as i64
    }
}

/// Overlapping buildings with random widths and heights, sorted by left edge.
fn gen_random_buildings(count: usize, span: u64, max_w: u64, max_h: u64) -> Vec<Building> {
    let mut rng = Rng::new(0x5EED_5C1E_B00C_0001);
    let mut out: Vec<Building> = (0..count)
        .map(|_| {
            let left = rng.below(span);
            let width = 1 + rng.below(max_w);
            let height = 1 + rng.below(max_h);
            Building::new(left, left + width, height)
        })
        .collect();
    out.sort_by_key(|b| b.left);
    out
}

/// Non-overlapping buildings: every key point survives the merge.
fn gen_disjoint_buildings(count: usize) -> Vec<Building> {
    (0..count as i64)
        .map(|i| Building::new(3 * i, 3 * i + 2, 1 + i % 11))
        .collect()
}

fn growable() -> SkylineBuilder {
    SkylineBuilder::with_config(BuilderConfig::default().with_capacity(Capacity::Growable))
}

fn bench_divide_and_conquer(c: &mut Criterion) {
    let mut group = c.benchmark_group("divide_and_conquer");
    for &n in &[64usize, 512, 4096] {
        let random = gen_random_buildings(n, 10 * n as u64, 40, 100);
        let disjoint = gen_disjoint_buildings(n);
        group.throughput(Throughput::Elements(n as u64));

        let mut builder = growable();
        group.bench_function(format!("random_reused_n{}", n), |b| {
            b.iter(|| {
                let points = builder.build_in_place(black_box(&random)).unwrap();
                black_box(points.len())
            });
        });
        group.bench_function(format!("random_fresh_n{}", n), |b| {
            b.iter_batched(
                growable,
                |mut builder| black_box(builder.build(&random).unwrap()),
                BatchSize::SmallInput,
            );
        });
        let mut builder = growable();
        group.bench_function(format!("disjoint_reused_n{}", n), |b| {
            b.iter(|| {
                let points = builder.build_in_place(black_box(&disjoint)).unwrap();
                black_box(points.len())
            });
        });
    }
    group.finish();
}

fn bench_sequential_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_fold");
    for &n in &[64usize, 512] {
        let random = gen_random_buildings(n, 10 * n as u64, 40, 100);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("random_n{}", n), |b| {
            b.iter(|| {
                let s = black_box(&random)
                    .iter()
                    .map(Skyline::from_building)
                    .fold(Skyline::new(), |acc, s| acc.merge(&s));
                black_box(s.len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_divide_and_conquer, bench_sequential_fold);
criterion_main!(benches);
