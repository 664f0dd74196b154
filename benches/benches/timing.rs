// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_timing::TimerQueue;

fn bench_schedule_and_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing/schedule_drain");

    for len in [8usize, 64, 512] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                TimerQueue::<usize>::new,
                |mut queue| {
                    // Interleaved deadlines so inserts land in the middle.
                    for i in 0..len {
                        queue.schedule(((i * 7919) % 1_000) as u64, i);
                    }
                    while let Some(timer) = queue.pop_due(u64::MAX) {
                        black_box(timer);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_cancel(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing/cancel");

    for len in [8usize, 64, 512] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || {
                    let mut queue = TimerQueue::new();
                    let ids: Vec<_> = (0..len).map(|i| queue.schedule(i as u64, i)).collect();
                    (queue, ids)
                },
                |(mut queue, ids)| {
                    for id in ids.into_iter().rev() {
                        black_box(queue.cancel(id));
                    }
                    queue
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_schedule_and_drain, bench_cancel);
criterion_main!(benches);
