//! Color transform benchmarks
//!
//! Measures construction and evaluation of the transforms a compositor
//! builds per output.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use wpcm_core::{ColorTransform, NamedPrimaries, simd};

fn generate_rgb_data(count: usize) -> Vec<f32> {
    (0..count)
        .flat_map(|i| {
            let t = i as f32 / count as f32;
            [t, (t * 2.0) % 1.0, (t * 3.0) % 1.0]
        })
        .collect()
}

fn bench_init(c: &mut Criterion) {
    let mut group = c.benchmark_group("init_srgb");

    for primaries in [NamedPrimaries::Srgb, NamedPrimaries::Bt2020, NamedPrimaries::DciP3] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{primaries:?}")),
            &primaries,
            |b, &p| b.iter(|| ColorTransform::init_srgb(black_box(p))),
        );
    }

    group.finish();
}

fn bench_apply_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_batch");
    let transform = match ColorTransform::init_srgb(NamedPrimaries::Bt2020) {
        Ok(t) => t,
        Err(e) => panic!("transform: {e}"),
    };

    for count in [256, 4096, 65536] {
        let data = generate_rgb_data(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("bt2020", count), &data, |b, data| {
            let mut buf = data.clone();
            b.iter(|| {
                buf.copy_from_slice(data);
                transform.apply_batch(black_box(&mut buf))
            })
        });
    }

    group.finish();
}

fn bench_apply_single(c: &mut Criterion) {
    let icc = match lcms2::Profile::new_srgb().icc() {
        Ok(icc) => icc,
        Err(e) => panic!("sRGB profile: {e}"),
    };
    let transform = match ColorTransform::init_linear_to_icc(NamedPrimaries::DisplayP3, &icc) {
        Ok(t) => t,
        Err(e) => panic!("transform: {e}"),
    };

    c.bench_function("apply_icc_single", |b| {
        b.iter(|| transform.apply(black_box([0.31, 0.52, 0.77])))
    });
}

fn bench_srgb_encode(c: &mut Criterion) {
    let mut data = generate_rgb_data(4096);
    println!("SIMD: {}", simd::active_features());

    c.bench_function("srgb_encode_batch_f32", |b| {
        b.iter(|| simd::srgb_encode_batch_f32(black_box(&mut data)))
    });
}

criterion_group!(
    benches,
    bench_init,
    bench_apply_batch,
    bench_apply_single,
    bench_srgb_encode
);
criterion_main!(benches);
