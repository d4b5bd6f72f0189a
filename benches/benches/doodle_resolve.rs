// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use understory_doodle::{ElementResolver, Page, Stroke};

/// body > article > paragraphs > words, `paras` paragraphs of four lines.
fn build_page(paras: usize) -> Page {
    let mut page = Page::new();
    let height = paras as f64 * 120.0 + 200.0;
    let body = page.insert(None, Rect::new(0.0, 0.0, 1000.0, height));
    let article = page.insert(Some(body), Rect::new(100.0, 100.0, 900.0, height - 100.0));
    for p in 0..paras {
        let top = 100.0 + p as f64 * 120.0;
        let para = page.insert(Some(article), Rect::new(100.0, top, 900.0, top + 100.0));
        for line in 0..4 {
            let y = top + line as f64 * 25.0;
            let mut x = 100.0;
            for w in 0..8 {
                let width = 40.0 + (w * 7 % 5) as f64 * 10.0;
                page.insert(Some(para), Rect::new(x, y + 2.0, x + width, y + 22.0));
                x += width + 8.0;
            }
        }
    }
    page
}

fn bench_build_resolver(c: &mut Criterion) {
    let mut group = c.benchmark_group("doodle_resolver_build");
    for &paras in &[10_usize, 100, 400] {
        let page = build_page(paras);
        group.throughput(Throughput::Elements(page.len() as u64));
        group.bench_function(BenchmarkId::from_parameter(page.len()), |b| {
            b.iter(|| {
                let resolver = ElementResolver::new(&page, None).unwrap();
                black_box(resolver.element_count())
            });
        });
    }
    group.finish();
}

fn bench_resolve_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("doodle_resolve_line");
    for &paras in &[10_usize, 100, 400] {
        let page = build_page(paras);
        let resolver = ElementResolver::new(&page, None).unwrap();
        // A 64-point underline across the middle paragraph's second line.
        let y = 100.0 + (paras / 2) as f64 * 120.0 + 25.0 + 12.0;
        let stroke = Stroke::default().with_points((0..64).map(|k| (110.0 + f64::from(k) * 4.0, y)));
        group.throughput(Throughput::Elements(stroke.len() as u64));
        group.bench_function(BenchmarkId::from_parameter(page.len()), |b| {
            b.iter(|| black_box(resolver.resolve_line(black_box(&stroke))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_resolver, bench_resolve_line);
criterion_main!(benches);
