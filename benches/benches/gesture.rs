// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use vecdiagram::{DiagramSurface, PointerEvent};

const STEPS: u64 = 256;

fn laid_out() -> DiagramSurface {
    let mut surface = DiagramSurface::default();
    surface.on_layout(Size::new(1024.0, 768.0));
    surface
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/drag");
    group.throughput(Throughput::Elements(STEPS));

    group.bench_function("one_finger", |b| {
        b.iter_batched(
            laid_out,
            |mut surface| {
                let mut host = || {};
                surface.handle_pointer(PointerEvent::down(0, Point::new(100.0, 100.0), 0), &mut host);
                for i in 1..=STEPS {
                    let p = Point::new(100.0 + i as f64, 100.0 + (i % 7) as f64);
                    surface.handle_pointer(PointerEvent::moved(0, p, i), &mut host);
                }
                surface.handle_pointer(PointerEvent::up(0, Point::ORIGIN, STEPS + 1), &mut host);
                black_box(surface.view().origin());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_pinch(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/pinch");
    group.throughput(Throughput::Elements(STEPS));

    group.bench_function("two_finger", |b| {
        b.iter_batched(
            laid_out,
            |mut surface| {
                let mut host = || {};
                surface.handle_pointer(PointerEvent::down(0, Point::new(462.0, 384.0), 0), &mut host);
                surface.handle_pointer(PointerEvent::down(1, Point::new(562.0, 384.0), 0), &mut host);
                for i in 1..=STEPS {
                    // Oscillate between spreading and squeezing.
                    let spread = 50.0 + (i % 32) as f64;
                    surface.handle_pointer(
                        PointerEvent::moved(1, Point::new(512.0 + spread, 384.0), i),
                        &mut host,
                    );
                }
                black_box(surface.view().scale());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_drag, bench_pinch);
criterion_main!(benches);
