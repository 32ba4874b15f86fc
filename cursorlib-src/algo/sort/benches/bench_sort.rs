use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId,
    Criterion,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use slice_cursor::cursor_mut;
use sort::{sort, stable_sort};

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    let mut rng = ChaCha20Rng::from_seed([
        0x3B, 0x0D, 0x9E, 0x42, 0xC7, 0x15, 0x88, 0xF1, 0x6A, 0x27, 0xD4, 0x90,
        0x5E, 0xB3, 0x01, 0x7C, 0xE8, 0x4F, 0x36, 0xA2, 0x19, 0xCB, 0x70, 0x8D,
        0x24, 0xF6, 0x5B, 0x93, 0x0E, 0xAD, 0x61, 0xC2,
    ]);

    for &(n, max) in &[(1000, 1 << 30), (1000, 10), (100000, 1 << 30)] {
        let a: Vec<u32> = (0..n).map(|_| rng.gen_range(0..max)).collect();
        let param = format!("{n}/{max}");
        group
            .bench_with_input(BenchmarkId::new("sort", &param), &a, |b, a| {
                b.iter_batched_ref(
                    || a.clone(),
                    |v| {
                        sort(cursor_mut(black_box(v)));
                    },
                    BatchSize::SmallInput,
                )
            })
            .bench_with_input(
                BenchmarkId::new("stable_sort", &param),
                &a,
                |b, a| {
                    b.iter_batched_ref(
                        || a.clone(),
                        |v| {
                            stable_sort(cursor_mut(black_box(v)));
                        },
                        BatchSize::SmallInput,
                    )
                },
            )
            .bench_with_input(
                BenchmarkId::new("slice-sort_unstable", &param),
                &a,
                |b, a| {
                    b.iter_batched_ref(
                        || a.clone(),
                        |v| black_box(v).sort_unstable(),
                        BatchSize::SmallInput,
                    )
                },
            );
    }
    group.finish();
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
