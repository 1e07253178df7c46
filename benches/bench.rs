use criterion::{Criterion, criterion_group, criterion_main};
use impossible_puzzle::sum_product::analysis::verify;
use impossible_puzzle::sum_product::filter::{
    filter_step1, filter_step2, filter_step3, filter_step4, generate,
};
use impossible_puzzle::sum_product::solve;
use std::hint::black_box;

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve - range");

    for max in [5_i64, 10, 15, 20] {
        group.bench_function(format!("max {max}"), |b| {
            b.iter(|| black_box(solve(black_box(max))));
        });
    }

    group.finish();
}

fn bench_rounds(c: &mut Criterion) {
    let initial = generate(20);
    let step1 = filter_step1(&initial);
    let step2 = filter_step2(&initial, &step1);
    let step3 = filter_step3(&step2);

    let mut group = c.benchmark_group("solve - rounds");

    group.bench_function("generate", |b| b.iter(|| black_box(generate(20))));
    group.bench_function("step 1", |b| b.iter(|| black_box(filter_step1(&initial))));
    group.bench_function("step 2", |b| {
        b.iter(|| black_box(filter_step2(&initial, &step1)));
    });
    group.bench_function("step 3", |b| b.iter(|| black_box(filter_step3(&step2))));
    group.bench_function("step 4", |b| b.iter(|| black_box(filter_step4(&step3))));

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let steps = solve(20);
    c.bench_function("verify - max 20", |b| b.iter(|| black_box(verify(&steps))));
}

criterion_group!(benches, bench_solve, bench_rounds, bench_verify);

criterion_main!(benches);
