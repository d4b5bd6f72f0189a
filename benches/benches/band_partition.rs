// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use understory_band_index::{Band, BandPartition};

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
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// A page-like layout: a few tall containers plus `lines` text lines of ten
/// inline boxes each, stacked down a `height` pixel page.
fn gen_page_rects(lines: usize, height: f64) -> Vec<Rect> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = vec![
        Rect::new(0.0, 0.0, 1000.0, height),
        Rect::new(100.0, 0.0, 900.0, height),
    ];
    let pitch = height / lines as f64;
    for line in 0..lines {
        let top = line as f64 * pitch;
        out.push(Rect::new(100.0, top, 900.0, top + pitch * 0.8));
        let mut x = 100.0;
        for _ in 0..10 {
            let w = 20.0 + rng.next_f64() * 60.0;
            out.push(Rect::new(x, top + 1.0, x + w, top + pitch * 0.8 - 1.0));
            x += w + 4.0;
        }
    }
    out
}

fn gen_points(count: usize, height: f64) -> Vec<(f64, f64)> {
    let mut rng = Rng::new(0x81FD_BEE7_94F0_AF1A);
    (0..count)
        .map(|_| (rng.next_f64() * 1000.0, rng.next_f64() * height))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("band_partition_build");
    for &lines in &[50_usize, 200, 800] {
        let height = lines as f64 * 24.0;
        let rects = gen_page_rects(lines, height);
        group.throughput(Throughput::Elements(rects.len() as u64));
        group.bench_function(BenchmarkId::from_parameter(rects.len()), |b| {
            b.iter(|| {
                let part = BandPartition::build(0..rects.len(), Band::new(0.0, height), |i| {
                    rects[i]
                });
                black_box(part.node_count())
            });
        });
    }
    group.finish();
}

fn bench_query_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("band_partition_query_point");
    for &lines in &[50_usize, 200, 800] {
        let height = lines as f64 * 24.0;
        let rects = gen_page_rects(lines, height);
        let points = gen_points(256, height);
        let part = BandPartition::build(0..rects.len(), Band::new(0.0, height), |i| rects[i]);
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(BenchmarkId::new("partition", rects.len()), |b| {
            b.iter(|| {
                let mut hits = 0_usize;
                for &(x, y) in &points {
                    part.visit_point(x, y, |i| rects[i], |_| hits += 1);
                }
                black_box(hits)
            });
        });
        group.bench_function(BenchmarkId::new("linear_scan", rects.len()), |b| {
            b.iter(|| {
                let mut hits = 0_usize;
                for &(x, y) in &points {
                    let pt = kurbo::Point::new(x, y);
                    hits += rects
                        .iter()
                        .filter(|r| understory_band_index::strictly_contains(**r, pt))
                        .count();
                }
                black_box(hits)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_query_point);
criterion_main!(benches);
