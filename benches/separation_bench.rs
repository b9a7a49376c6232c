use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use venn_overlap::{
    max_overlap, DiseaseTest, OverlapRequest, SeparationSolver, VennConfig, VennLayout,
};

fn generate_requests(n: usize) -> Vec<OverlapRequest> {
    (0..n)
        .map(|i| {
            let rb = 10.0 + (i % 240) as f64;
            let frac = ((i * 7) % 100) as f64 / 100.0;
            OverlapRequest::new(250.0, rb, frac * max_overlap(250.0, rb))
        })
        .collect()
}

fn bench_solve(c: &mut Criterion) {
    let solver = SeparationSolver::new();
    let mut group = c.benchmark_group("separation");

    group.bench_function("single", |b| {
        let req = OverlapRequest::new(250.0, 150.0, 10000.0);
        b.iter(|| solver.solve(&req).unwrap());
    });

    for size in [100, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("batch", size), size, |b, &size| {
            let requests = generate_requests(size);
            b.iter(|| solver.solve_batch(&requests));
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let breakdown = DiseaseTest::from_percentages(100_000.0, 1.0, 90.0).unwrap().breakdown();
    let config = VennConfig::new();
    c.bench_function("venn_layout", |b| {
        b.iter(|| VennLayout::compute(&breakdown, &config).unwrap());
    });
}

criterion_group!(benches, bench_solve, bench_layout);
criterion_main!(benches);
