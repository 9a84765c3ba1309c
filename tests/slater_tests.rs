/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use approx::assert_relative_eq;
use rstest::rstest;
use zeff_rs::atoms::{configuration_for, ElectronConfiguration, PeriodicTable};
use zeff_rs::screening::{
    groups_for, slater_weight, slater_zeff, slater_zeff_all, ElectronKind, GroupRelation,
    ScreeningError,
};

fn config(symbol: &str) -> ElectronConfiguration {
    configuration_for(&PeriodicTable::new(), &symbol.into()).unwrap()
}

#[rstest]
#[case::hydrogen("H", "1s", 0.0, 1.0)]
#[case::helium("He", "1s", 0.30, 1.70)]
#[case::lithium("Li", "2s", 1.70, 1.30)]
#[case::beryllium("Be", "2s", 2.05, 1.95)]
#[case::carbon("C", "2p", 2.75, 3.25)]
#[case::oxygen("O", "2p", 3.45, 4.55)]
#[case::sodium("Na", "3s", 8.80, 2.20)]
#[case::potassium("K", "4s", 16.80, 2.20)]
#[case::iron_3d("Fe", "3d", 19.75, 6.25)]
#[case::iron_4s("Fe", "4s", 22.25, 3.75)]
#[case::gadolinium_4f("Gd", "4f", 48.10, 15.90)]
#[case::tungsten_6s("W", "6s", 70.55, 3.45)]
#[case::gold_6s("Au", "6s", 75.30, 3.70)]
fn test_slater_values(
    #[case] symbol: &str,
    #[case] orbital: &str,
    #[case] shielding: f64,
    #[case] zeff: f64,
) {
    let result = slater_zeff(&config(symbol), orbital.parse().unwrap()).unwrap();
    assert_relative_eq!(result.shielding(), shielding, epsilon = 1e-10);
    assert_relative_eq!(result.effective_charge(), zeff, epsilon = 1e-10);
}

#[test]
fn test_sodium_breakdown() {
    // 3s is alone in its group: 8 x 0.85 from (2s,2p) plus 2 x 1.00 from 1s
    let na = config("Na");
    let result = slater_zeff(&na, "3s".parse().unwrap()).unwrap();
    assert_relative_eq!(result.shielding(), 8.0 * 0.85 + 2.0 * 1.00, epsilon = 1e-10);
    assert_eq!(result.atomic_number(), 11);
    assert_eq!(result.symbol(), "Na");
}

#[test]
fn test_f_electron_breakdown() {
    // Gd [Xe] 4f7 5d1 6s2: 4f sees 6 x 0.35 from its own group and the 46
    // electrons of 1s..4d at 1.00; 5s, 5p, 5d and 6s are outside
    let gd = config("Gd");
    let result = slater_zeff(&gd, "4f".parse().unwrap()).unwrap();
    assert_relative_eq!(result.shielding(), 6.0 * 0.35 + 46.0, epsilon = 1e-10);

    // Au [Xe] 4f14 5d10 6s1: 5s, 5p and 5d shield at 0.85, the 4f14 shell
    // and everything below at 1.00
    let au = config("Au");
    let result = slater_zeff(&au, "6s".parse().unwrap()).unwrap();
    assert_relative_eq!(result.shielding(), 18.0 * 0.85 + 60.0, epsilon = 1e-10);
}

#[test]
fn test_same_group_weight_branches() {
    assert_eq!(
        slater_weight(ElectronKind::SP, GroupRelation::SameGroup, true),
        0.30
    );
    assert_eq!(
        slater_weight(ElectronKind::SP, GroupRelation::SameGroup, false),
        0.35
    );
    assert_eq!(
        slater_weight(ElectronKind::DF, GroupRelation::SameGroup, false),
        0.35
    );
}

#[rstest]
#[case(ElectronKind::SP, GroupRelation::NextShell, 0.85)]
#[case(ElectronKind::SP, GroupRelation::DeepShell, 1.00)]
#[case(ElectronKind::SP, GroupRelation::Outer, 0.0)]
#[case(ElectronKind::DF, GroupRelation::NextShell, 1.00)]
#[case(ElectronKind::DF, GroupRelation::DeepShell, 1.00)]
#[case(ElectronKind::DF, GroupRelation::Outer, 0.0)]
fn test_inner_and_outer_weights(
    #[case] kind: ElectronKind,
    #[case] relation: GroupRelation,
    #[case] weight: f64,
) {
    assert_eq!(slater_weight(kind, relation, false), weight);
}

#[test]
fn test_orbital_not_in_configuration() {
    let err = slater_zeff(&config("H"), "2p".parse().unwrap()).unwrap_err();
    assert!(matches!(err, ScreeningError::InvalidOrbital { .. }));
}

#[test]
fn test_grouping_is_stable() {
    let pb = config("Pb");
    let first = groups_for(&pb).unwrap();
    let second = groups_for(&pb).unwrap();
    assert_eq!(first, second);

    let indices: Vec<usize> = first.iter().map(|g| g.index).collect();
    let mut sorted = indices.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(indices, sorted);
}

#[test]
fn test_zeff_bounded_for_every_element() {
    let lookup = PeriodicTable::new();
    for z in 1..=118u32 {
        let config = configuration_for(&lookup, &z.into()).unwrap();
        let table = slater_zeff_all(&config).unwrap();
        assert_eq!(table.len(), config.orbitals().len());
        for row in &table {
            let s = row.shielding().unwrap();
            let zeff = row.effective_charge().unwrap();
            assert!(s >= 0.0, "Z = {} {}: S = {}", z, row.orbital(), s);
            assert!(zeff <= z as f64);
            assert!(zeff > 0.0);
        }
    }
}
