use criterion::{criterion_group, criterion_main, Criterion};
use nalgebra::Vector3;
use so3_sampling::fundamental_zone::FundamentalZoneReducer;
use so3_sampling::sampling::{cube_to_quaternion, CubochoricGrid, SamplerGrid};
use so3_sampling::symmetries::{generate_symmetry_operations, ProperPointGroup};
use so3_sampling::{sample_fundamental, uniform_so3_sample, Density, SampleRequest, SamplingMethod};
use std::hint::black_box;

/// Per-point cost of the cubochoric projection and the zone reduction, plus full requests.
/// Run with --no-default-features to compare against the sequential reducer.
fn bench_sampling(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut group = c.benchmark_group("so3_sampling");

    let point = Vector3::new(0.31, -0.52, 0.77);
    group.bench_function("cube_to_quaternion", |b| {
        b.iter(|| cube_to_quaternion(black_box(&point)))
    });

    for method in SamplingMethod::ALL {
        group.bench_function(format!("uniform_so3_{}_10deg", method), |b| {
            b.iter(|| uniform_so3_sample(black_box(method), black_box(Density::Resolution(10.0))))
        });
    }

    let cubic = FundamentalZoneReducer::new(&generate_symmetry_operations(ProperPointGroup::O))
        .expect("432 operators are a valid group");
    let grid = CubochoricGrid::new(30).expect("valid grid");
    group.bench_function("reduce_grid_432_n30", |b| {
        b.iter(|| cubic.reduce_grid(black_box(&grid)))
    });

    let hexagonal = FundamentalZoneReducer::new(&generate_symmetry_operations(ProperPointGroup::D6))
        .expect("622 operators are a valid group");
    let euler = SamplerGrid::new(SamplingMethod::HaarEuler, 60).expect("valid grid");
    group.bench_function("reduce_grid_622_haar_euler_n60", |b| {
        b.iter(|| hexagonal.reduce_grid(black_box(&euler)))
    });

    group.sample_size(10);
    group.bench_function("sample_fundamental_m-3m_3deg", |b| {
        let request = SampleRequest::for_point_group("m-3m").with_resolution(3.0);
        b.iter(|| sample_fundamental(black_box(&request)))
    });

    group.finish();
}

criterion_group!(sampling_benches, bench_sampling);
criterion_main!(sampling_benches);
