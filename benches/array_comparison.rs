// Comparative benchmark suite: GrowableArray against std Vec
//
// - push: sequential appends from an empty array (growth dominated)
// - remove_front: repeated removal at index 0 (shift dominated)
// - sort: random integers

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use growable::GrowableArray;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn random_items(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.r#gen()).collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("GrowableArray", size), &size, |b, &size| {
            b.iter(|| {
                let mut array = GrowableArray::new();
                for i in 0..size {
                    array.push(i);
                }
                black_box(array.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::with_capacity(10);
                for i in 0..size {
                    vec.push(i);
                }
                black_box(vec.len())
            });
        });
    }

    group.finish();
}

fn bench_remove_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_front");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("GrowableArray", size), &size, |b, &size| {
            b.iter(|| {
                let mut array: GrowableArray<usize> = (0..size).collect();
                let mut sum = 0;
                while let Ok(item) = array.remove(0) {
                    sum += item;
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec: Vec<usize> = (0..size).collect();
                let mut sum = 0;
                while !vec.is_empty() {
                    sum += vec.remove(0);
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in SIZES {
        let items = random_items(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("GrowableArray", size), &items, |b, items| {
            b.iter(|| {
                let mut array: GrowableArray<u64> = items.iter().copied().collect();
                array.sort();
                black_box(array.first().copied())
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &items, |b, items| {
            b.iter(|| {
                let mut vec = items.clone();
                vec.sort();
                black_box(vec.first().copied())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(benches, bench_push, bench_remove_front, bench_sort);

criterion_main!(benches);
