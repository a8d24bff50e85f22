use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use oneseismic_geometry::{CubePoint, Gvt};

/// Benchmarks plane enumeration on a survey-sized cube.
fn bench_slice(c: &mut Criterion) {
    let gvt = Gvt::new([2048, 2048, 4096], [64, 64, 64]);
    let nfrags = gvt.fragment_count(gvt.mkdim(1)) * gvt.fragment_count(gvt.mkdim(2));

    let mut group = c.benchmark_group("slice");
    group.throughput(Throughput::Elements(nfrags as u64));
    group.bench_function(format!("frags/{nfrags}"), |b| {
        b.iter(|| {
            let ids = gvt.slice(gvt.mkdim(0), black_box(999)).unwrap();
            black_box(ids);
        });
    });
    group.finish();
}

/// Benchmarks the per-sample fragment lookup used in curtain planning.
fn bench_frag_id(c: &mut Criterion) {
    let gvt = Gvt::new([2048, 2048, 4096], [64, 64, 64]);
    const TOTAL_POINTS: usize = 4096;

    let mut group = c.benchmark_group("frag_id");
    group.throughput(Throughput::Elements(TOTAL_POINTS as u64));
    group.bench_function(format!("points/{TOTAL_POINTS}"), |b| {
        b.iter(|| {
            for i in 0..TOTAL_POINTS {
                let p = CubePoint([i % 2048, (i * 7) % 2048, 0]);
                black_box(gvt.frag_id(black_box(p)).unwrap());
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_slice, bench_frag_id);
criterion_main!(benches);
