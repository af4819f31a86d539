// -------------------------------------------------------------------------
// QGrav -- Formula Library Benchmark
// Per-call cost of the closed-form evaluations and the 4x4 dust tensor.
// -------------------------------------------------------------------------

use criterion::{criterion_group, criterion_main, Criterion};
use qgrav_core::black_hole::bekenstein_hawking_entropy;
use qgrav_core::gup::Gup3d;
use qgrav_core::quantum::{infinite_well_energy, relativistic_energy};
use qgrav_core::relativity::{dust_stress_energy, schwarzschild_metric};
use qgrav_types::constants::{AU, M_ELECTRON, M_SUN};
use qgrav_types::PhysicalConstants;
use std::hint::black_box;

fn bench_scalar_formulas(c: &mut Criterion) {
    let k = PhysicalConstants::si2019();
    c.bench_function("infinite_well_energy", |b| {
        b.iter(|| infinite_well_energy(&k, black_box(3), black_box(1e-9), M_ELECTRON))
    });
    c.bench_function("relativistic_energy", |b| {
        b.iter(|| relativistic_energy(&k, black_box(1e-24), M_ELECTRON))
    });
    c.bench_function("bekenstein_hawking_entropy", |b| {
        b.iter(|| bekenstein_hawking_entropy(&k, black_box(5.0 * M_SUN)))
    });
    c.bench_function("schwarzschild_metric", |b| {
        b.iter(|| schwarzschild_metric(&k, black_box(AU), black_box(M_SUN)))
    });
}

fn bench_tensor_and_gup(c: &mut Criterion) {
    let k = PhysicalConstants::si2019();
    let u = [1.2, 0.3, -0.4, 0.5];
    c.bench_function("dust_stress_energy", |b| {
        b.iter(|| dust_stress_energy(black_box(1.0), black_box(&u)))
    });
    let gup = Gup3d::new(&k, 0.6);
    c.bench_function("gup_spatial_commutator_estimate", |b| {
        b.iter(|| gup.spatial_commutator_estimate(black_box(6.5e-30)))
    });
}

criterion_group!(benches, bench_scalar_formulas, bench_tensor_and_gup);
criterion_main!(benches);
