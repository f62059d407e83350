use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use ingest_buffer::{OverflowPolicy, RingBuffer, SyncRingBuffer};

const CAPACITY: usize = 3_000;
const APPENDS: u64 = 100_000;

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    group.throughput(Throughput::Elements(APPENDS));

    group.bench_function("core_evicting", |b| {
        b.iter_batched(
            || RingBuffer::with_default(CAPACITY, 0u64).unwrap(),
            |mut ring| {
                for i in 0..APPENDS {
                    ring.append(black_box(i)).unwrap();
                }
                ring
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("sync_evicting", |b| {
        b.iter_batched(
            || SyncRingBuffer::new(CAPACITY, OverflowPolicy::EvictOldest).unwrap(),
            |ring| {
                for i in 0..APPENDS {
                    ring.append(black_box(i)).unwrap();
                }
                ring
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut ring = RingBuffer::evicting(CAPACITY).unwrap();
    for i in 0..(CAPACITY as u64 + 123) {
        ring.append(i).unwrap();
    }
    c.bench_function("to_vec_wrapped", |b| b.iter(|| black_box(ring.to_vec())));
}

criterion_group!(benches, bench_append, bench_snapshot);
criterion_main!(benches);
