use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use freqtree::IndexedFrequencyTree;

// Baseline: recompute sums from the raw values on every query.
struct NaivePrefixSums {
    values: Vec<i64>,
}

impl NaivePrefixSums {
    fn new(size: usize) -> Self {
        Self {
            values: vec![1; size],
        }
    }

    fn update(&mut self, index: usize, value: i64) {
        self.values[index] = value;
    }

    fn prefix_sum(&self, index: usize) -> i64 {
        self.values[..=index].iter().sum()
    }
}

fn filled_tree(size: usize) -> IndexedFrequencyTree {
    std::iter::repeat(1i64).take(size).collect()
}

fn bench_fenwick_tree(c: &mut Criterion) {
    let size = 100_000;
    let ops = 1000;

    let mut group = c.benchmark_group("FenwickTree");
    group.throughput(Throughput::Elements(ops as u64));

    group.bench_function("Append", |b| {
        b.iter_batched(
            || IndexedFrequencyTree::<i64>::with_capacity(ops),
            |mut ft| {
                for i in 0..ops {
                    ft.append(black_box(i as i64));
                }
                ft
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("Naive Update", |b| {
        b.iter_batched(
            || NaivePrefixSums::new(size),
            |mut naive| {
                for i in 0..ops {
                    naive.update(black_box(i * 7 % size), 2);
                }
                naive
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("Update", |b| {
        b.iter_batched(
            || filled_tree(size),
            |mut ft| {
                for i in 0..ops {
                    ft.update(black_box((i * 7 % size) as isize), 2).unwrap();
                }
                ft
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("Naive Query", |b| {
        let naive = NaivePrefixSums::new(size);
        b.iter(|| {
            for i in 0..ops {
                black_box(naive.prefix_sum(black_box(i * 97 % size)));
            }
        })
    });

    group.bench_function("Query", |b| {
        let ft = filled_tree(size);
        b.iter(|| {
            for i in 0..ops {
                black_box(ft.prefix_sum(black_box((i * 97 % size) as isize)).unwrap());
            }
        })
    });

    group.bench_function("Range Query", |b| {
        let ft = filled_tree(size);
        b.iter(|| {
            for i in 0..ops {
                let start = (i * 31 % size) as isize;
                black_box(ft.range_sum(start, start + 64isize.min(size as isize - 1 - start)).unwrap());
            }
        })
    });

    group.bench_function("Find Prefix", |b| {
        let ft = filled_tree(size);
        b.iter(|| {
            for i in 0..ops {
                black_box(ft.find_prefix(black_box((i * 89 % size) as i64)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_fenwick_tree);
criterion_main!(benches);
