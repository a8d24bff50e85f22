use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use oneseismic_plan::mkschedule;
use serde_json::json;

/// A survey-sized manifest: 512 x 512 lines, 1024 samples deep.
fn manifest_doc() -> String {
    let labels = |n: i32| (0..n).collect::<Vec<_>>();
    json!({
        "dimensions": [labels(512), labels(512), labels(1024)],
    })
    .to_string()
}

fn request(function: &str, params: serde_json::Value) -> Vec<u8> {
    let mut doc = json!({
        "pid": "bench",
        "token": "token",
        "guid": "guid",
        "storage_endpoint": "https://storage.example.com",
        "manifest": manifest_doc(),
        "function": function,
        "shape": [64, 64, 64],
        "shape_cube": [],
    });
    doc.as_object_mut()
        .expect("object")
        .extend(params.as_object().expect("object").clone());
    doc.to_string().into_bytes()
}

fn bench_slice_schedule(c: &mut Criterion) {
    let doc = request("slice", json!({ "dim": 0, "lineno": 42 }));
    // 8 x 16 fragments in the plane
    let mut group = c.benchmark_group("mkschedule/slice");
    group.throughput(Throughput::Elements(8 * 16));
    group.bench_function("frags/128", |b| {
        b.iter(|| {
            let scheduled = mkschedule(black_box(&doc), black_box(10)).unwrap();
            black_box(scheduled);
        });
    });
    group.finish();
}

fn bench_curtain_schedule(c: &mut Criterion) {
    let dim0s: Vec<i32> = (0..256).collect();
    let dim1s: Vec<i32> = (0..256).rev().collect();
    let doc = request("curtain", json!({ "dim0s": dim0s, "dim1s": dim1s }));

    let mut group = c.benchmark_group("mkschedule/curtain");
    group.throughput(Throughput::Elements(256));
    group.bench_function("traces/256", |b| {
        b.iter(|| {
            let scheduled = mkschedule(black_box(&doc), black_box(10)).unwrap();
            black_box(scheduled);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_slice_schedule, bench_curtain_schedule);
criterion_main!(benches);
