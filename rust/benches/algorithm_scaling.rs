use complexity_lab::algorithms::{
    array_access, binary_search, find_all_pairs_with_sum, linear_search_with_counter,
};
use complexity_lab::DataGenerator;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// Doubling sizes so criterion's per-size estimates line up with the ratio tables
const SIZES: [usize; 4] = [1_000, 2_000, 4_000, 8_000];
const PAIR_SIZES: [usize; 4] = [50, 100, 200, 400];

fn bench_constant_and_logarithmic(c: &mut Criterion) {
    let mut group = c.benchmark_group("sublinear");
    let mut generator = DataGenerator::seeded(17, 1..=1000);

    for &size in &SIZES {
        let data = generator.random(size);
        group.bench_with_input(BenchmarkId::new("array_access", size), &data, |b, data| {
            b.iter(|| black_box(array_access(data, black_box(size / 2))))
        });

        let sorted = generator.sorted(size);
        let target = sorted[size * 3 / 4];
        group.bench_with_input(BenchmarkId::new("binary_search", size), &sorted, |b, sorted| {
            b.iter(|| black_box(binary_search(sorted, black_box(&target))))
        });
    }

    group.finish();
}

fn bench_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear");
    let mut generator = DataGenerator::seeded(17, 1..=1000);

    for &size in &SIZES {
        let data = generator.random(size);
        // absent value: every element is examined
        let target = 0;
        group.bench_with_input(BenchmarkId::new("linear_search", size), &data, |b, data| {
            b.iter(|| black_box(linear_search_with_counter(data, black_box(&target))))
        });
    }

    group.finish();
}

fn bench_quadratic(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadratic");
    let mut generator = DataGenerator::seeded(17, 1..=1000);

    for &size in &PAIR_SIZES {
        let data = generator.random(size);
        let target = data[0] + data[1];
        group.bench_with_input(BenchmarkId::new("find_all_pairs", size), &data, |b, data| {
            b.iter(|| black_box(find_all_pairs_with_sum(data, black_box(target))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_constant_and_logarithmic, bench_linear, bench_quadratic);
criterion_main!(benches);
