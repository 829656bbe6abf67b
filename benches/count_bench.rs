use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ksum_core::{
    merge_sort, selection_sort, three_sum_brute_force, two_sum_brute_force, two_sum_hash_table,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// 均匀分布在 [-range, range] 内的数据，允许重复
fn gen_random_vec(n: usize, range: i64, rng: &mut StdRng) -> Vec<i64> {
    (0..n).map(|_| rng.gen_range(-range..=range)).collect()
}

fn bench_two_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_sum");

    for &n in &[100, 1_000, 4_000] {
        // 固定种子 + n，保证每个规模的数据稳定
        let mut rng = StdRng::seed_from_u64(n as u64);
        let data = gen_random_vec(n, 100, &mut rng);

        group.bench_with_input(BenchmarkId::new("brute_force", n), &data, |b, data| {
            b.iter(|| black_box(two_sum_brute_force(black_box(data))));
        });

        group.bench_with_input(BenchmarkId::new("hash_table", n), &data, |b, data| {
            b.iter(|| black_box(two_sum_hash_table(black_box(data))));
        });
    }

    group.finish();
}

fn bench_three_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("three_sum");
    group.sample_size(10);

    for &n in &[50, 100, 200] {
        let mut rng = StdRng::seed_from_u64(54321 ^ n as u64);
        let data = gen_random_vec(n, 100, &mut rng);

        group.bench_with_input(BenchmarkId::new("brute_force", n), &data, |b, data| {
            b.iter(|| black_box(three_sum_brute_force(black_box(data))));
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for &n in &[100, 1_000] {
        let mut rng = StdRng::seed_from_u64(3609218026 ^ n as u64);
        let data = gen_random_vec(n, n as i64 * 10, &mut rng);

        // 两个排序都返回新向量，不修改输入，无需每次克隆
        group.bench_with_input(BenchmarkId::new("selection", n), &data, |b, data| {
            b.iter(|| black_box(selection_sort(black_box(data))));
        });

        group.bench_with_input(BenchmarkId::new("merge", n), &data, |b, data| {
            b.iter(|| black_box(merge_sort(black_box(data))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_two_sum, bench_three_sum, bench_sort);
criterion_main!(benches);
