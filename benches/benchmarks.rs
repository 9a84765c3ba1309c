/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zeff_rs::atoms::{configuration_for, ElementId, PeriodicTable};
use zeff_rs::screening::{clementi_zeff, slater_zeff_all, ClementiTable};
use zeff_rs::{CalculationConfig, ZeffCalculator};

fn screening_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Screening");
    let lookup = PeriodicTable::new();
    let configs: Vec<_> = (1..=118u32)
        .map(|z| configuration_for(&lookup, &z.into()).unwrap())
        .collect();
    let clementi = ClementiTable::bundled().unwrap();
    let valence: Vec<_> = configs
        .iter()
        .take(36)
        .map(|c| (c.atomic_number(), c.orbitals()[c.orbitals().len() - 1].label()))
        .collect();

    group.bench_function("slater_all_elements", |b| {
        b.iter(|| {
            for config in &configs {
                black_box(slater_zeff_all(black_box(config)).unwrap());
            }
        })
    });

    group.bench_function("clementi_valence_lookup", |b| {
        b.iter(|| {
            for (z, orbital) in &valence {
                black_box(clementi_zeff(clementi, black_box(*z), *orbital).unwrap());
            }
        })
    });

    group.finish();
}

fn batch_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch");
    let clementi = ClementiTable::bundled().unwrap();
    let ids: Vec<ElementId> = (1..=118u32).map(ElementId::from).collect();

    group.bench_function("sequential", |b| {
        let calculator = ZeffCalculator::new(clementi);
        b.iter(|| black_box(calculator.calculate(black_box(&ids)).unwrap()))
    });

    group.bench_function("parallel", |b| {
        let calculator =
            ZeffCalculator::new(clementi).with_config(CalculationConfig::default().parallel(true));
        b.iter(|| black_box(calculator.calculate(black_box(&ids)).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, screening_benchmark, batch_benchmark);
criterion_main!(benches);
