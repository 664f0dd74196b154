// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_wheel_picker::{VisibleRows, WheelConfig, WheelGeometry, WheelPicker, pad_labels};

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("wheel_picker/resolve");

    for len in [16usize, 1_024, 65_536] {
        let geometry = WheelGeometry::new(len, 36.0, VisibleRows::TWO);
        let max = geometry.max_offset();
        // Sweep across the whole range, including some overscroll on both ends.
        let offsets: Vec<f64> = (0..1_024)
            .map(|i| -40.0 + (max + 80.0) * f64::from(i) / 1_023.0)
            .collect();
        group.throughput(Throughput::Elements(offsets.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &offsets, |b, offsets| {
            b.iter(|| {
                for &offset in offsets {
                    let _ = black_box(geometry.resolve(black_box(offset)));
                }
            });
        });
    }

    group.finish();
}

fn bench_pad_labels(c: &mut Criterion) {
    let mut group = c.benchmark_group("wheel_picker/pad_labels");

    for len in [16usize, 1_024, 65_536] {
        let items: Vec<String> = (0..len).map(|i| format!("item {i}")).collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &items, |b, items| {
            b.iter(|| black_box(pad_labels(items, VisibleRows::THREE)));
        });
    }

    group.finish();
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("wheel_picker/gestures");
    let items: Vec<u32> = (0..1_024).collect();

    // Drag release that settles on its own.
    group.bench_function("drag_release", |b| {
        b.iter_batched(
            || WheelPicker::new(items.clone(), WheelConfig::new(40.0)),
            |mut picker| {
                let mut now = 0;
                for step in 0..64_u32 {
                    black_box(picker.on_drag_end(f64::from(step) * 37.0, now));
                    now += 1_000;
                    black_box(picker.poll(now));
                }
                picker
            },
            BatchSize::SmallInput,
        );
    });

    // Drag release overtaken by momentum.
    group.bench_function("drag_then_momentum", |b| {
        b.iter_batched(
            || WheelPicker::new(items.clone(), WheelConfig::new(40.0)),
            |mut picker| {
                let mut now = 0;
                for step in 0..64_u32 {
                    let offset = f64::from(step) * 37.0;
                    black_box(picker.on_drag_end(offset, now));
                    picker.on_momentum_begin();
                    black_box(picker.on_momentum_end(offset + 11.0, now + 50));
                    now += 1_000;
                    black_box(picker.poll(now));
                }
                picker
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_pad_labels, bench_gestures);
criterion_main!(benches);
