// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use vecdiagram::{DiagramSurface, RecordingCanvas, VectorStyle};

fn surface_with(count: usize) -> DiagramSurface {
    let mut surface = DiagramSurface::default();
    surface.on_layout(Size::new(1024.0, 768.0));
    for i in 0..count {
        let angle = (i as f64 * 7.3) % 360.0;
        let length = 50 + (i % 400) as i32;
        surface
            .add_vector(format!("v{i:05}"), angle, length, VectorStyle::default())
            .unwrap();
    }
    surface
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame/render");

    for count in [8usize, 64, 512, 4_096] {
        let surface = surface_with(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("recording", count), &surface, |b, surface| {
            let mut canvas = RecordingCanvas::new(Size::new(1024.0, 768.0));
            b.iter(|| {
                canvas.clear();
                surface.render(&mut canvas);
                black_box(canvas.commands().len());
            });
        });

        group.bench_with_input(BenchmarkId::new("geometry_only", count), &surface, |b, surface| {
            b.iter(|| black_box(surface.frame_geometry()));
        });
    }

    group.finish();
}

fn bench_snapshot_after_upsert(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame/snapshot_after_upsert");

    // Each upsert invalidates the cached snapshot; the next list() re-sorts.
    for count in [64usize, 1_024] {
        let mut surface = surface_with(count);
        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            let mut tick = 0_i32;
            b.iter(|| {
                tick = (tick + 1) % 360;
                surface
                    .add_vector("v00000", f64::from(tick), 100, VectorStyle::default())
                    .unwrap();
                black_box(surface.vectors().len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render, bench_snapshot_after_upsert);
criterion_main!(benches);
