//! Criterion micro-benchmarks for keyed/bare observation conversion.

use criterion::{criterion_group, criterion_main, Criterion};
use obskit_bench::{image_space, reference_obs, reference_space};
use obskit_io::{print_mapping, DebugMap, DebugValue};
use obskit_obs::{copy_obs_dict, dict_to_obs, obs_to_dict};

/// Benchmark: deep-copy an 8-field dict observation.
fn bench_copy_dict(c: &mut Criterion) {
    let obs = reference_obs(&reference_space());
    c.bench_function("copy_obs_dict_8x64", |b| {
        b.iter(|| {
            let copy = copy_obs_dict(&obs);
            std::hint::black_box(&copy);
        });
    });
}

/// Benchmark: deep-copy a single 84x84x4 frame stack.
fn bench_copy_image(c: &mut Criterion) {
    let obs = reference_obs(&image_space());
    c.bench_function("copy_obs_dict_image", |b| {
        b.iter(|| {
            let copy = copy_obs_dict(&obs);
            std::hint::black_box(&copy);
        });
    });
}

/// Benchmark: collapse then re-wrap a sentinel-only dict.
fn bench_wrap_collapse(c: &mut Criterion) {
    let obs = reference_obs(&image_space());
    c.bench_function("collapse_wrap_round_trip", |b| {
        b.iter_batched(
            || obs.clone(),
            |dict| {
                let wrapped = obs_to_dict(dict_to_obs(dict));
                std::hint::black_box(wrapped);
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

/// Benchmark: print a 2-level debug mapping to an in-memory buffer.
fn bench_print_mapping(c: &mut Criterion) {
    let mut map = DebugMap::new();
    for i in 0..16 {
        let mut inner = DebugMap::new();
        inner.insert("mean".into(), (i as f64 * 0.5).into());
        inner.insert("count".into(), i64::from(i).into());
        map.insert(format!("metric_{i}"), DebugValue::Map(inner));
    }
    c.bench_function("print_mapping_16", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(1024);
            print_mapping(&mut out, &map).unwrap();
            std::hint::black_box(out);
        });
    });
}

criterion_group!(
    benches,
    bench_copy_dict,
    bench_copy_image,
    bench_wrap_collapse,
    bench_print_mapping
);
criterion_main!(benches);
