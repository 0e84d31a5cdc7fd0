//! Criterion benchmarks for the scattering models.
//!
//! The paracrystal powder average is the heavy kernel (22500
//! structure-factor evaluations per point); the magnetic decomposer and
//! shape models characterise the per-point cost of the lighter paths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sas_core::math::vec3::Vec3;
use sas_models::magnetic::{fq_core_shell, mag_sld, SpinWeights};
use sas_models::paracrystal::BccParacrystal;
use sas_models::shapes::Cylinder;
use sas_models::sweep::iq_profile;

/// Benchmark the magnetic per-point kernels.
fn bench_magnetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("magnetic");

    group.bench_function("mag_sld", |b| {
        let q_dir = Vec3::new(0.3, -0.1, 0.9);
        let m_real = Vec3::new(1e-6, 2e-6, 3e-6);
        let m_imag = Vec3::new(-1e-6, 0.5e-6, 0.0);
        b.iter(|| {
            mag_sld(
                black_box(q_dir),
                black_box(m_real),
                black_box(m_imag),
                black_box(2e-6),
            )
        });
    });

    group.bench_function("spin_weights", |b| {
        b.iter(|| SpinWeights::from_efficiencies(black_box(0.95), black_box(0.9)));
    });

    group.bench_function("fq_core_shell_3_shells", |b| {
        let slds = [2e-6, 3e-6, 4e-6];
        let thicknesses = [10.0, 8.0, 6.0];
        b.iter(|| {
            fq_core_shell(
                black_box(0.02),
                1e-6,
                30.0,
                6.3e-6,
                3.0,
                &slds,
                &thicknesses,
            )
        });
    });

    group.finish();
}

/// Benchmark the BCC paracrystal structure factor and averages.
fn bench_bcc(c: &mut Criterion) {
    let mut group = c.benchmark_group("bcc_paracrystal");
    let model = BccParacrystal::new(220.0, 0.06, 40.0, 4e-6, 1e-6).unwrap();

    group.bench_function("structure_factor", |b| {
        b.iter(|| model.structure_factor(black_box(0.02), black_box(0.03), black_box(0.01)));
    });

    group.bench_function("iqxy", |b| {
        b.iter(|| model.iqxy(black_box(0.03), black_box(0.02), 20.0, 35.0, 50.0));
    });

    // The 150x150 powder average: few samples, it is 22500 evaluations
    group.sample_size(20);
    group.bench_function("iq_powder", |b| {
        b.iter(|| model.iq(black_box(0.05)));
    });

    group.finish();
}

/// Benchmark 1D profiles over growing grids.
fn bench_profiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("profiles");
    let cylinder = Cylinder::new(20.0, 400.0, 4e-6, 1e-6).unwrap();

    for size in [64, 256, 1024] {
        let grid: Vec<f64> = (1..=size).map(|i| i as f64 * 3e-4).collect();
        group.bench_with_input(
            BenchmarkId::new("cylinder_iq_profile", size),
            &grid,
            |b, grid| {
                b.iter(|| iq_profile(&cylinder, black_box(grid)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_magnetic, bench_bcc, bench_profiles);
criterion_main!(benches);
