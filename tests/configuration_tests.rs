/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use rstest::rstest;
use zeff_rs::atoms::{
    configuration_for, AtomError, ElementId, ElementLookup, ElementRecord, OrbitalOrder,
    PeriodicTable,
};

#[test]
fn test_every_neutral_atom_balances() {
    let lookup = PeriodicTable::new();
    for z in 1..=118u32 {
        let config = configuration_for(&lookup, &ElementId::from(z)).unwrap();
        assert_eq!(config.total_electrons(), z, "{}", config.symbol());
        assert_eq!(config.atomic_number(), z);
    }
}

#[rstest]
#[case("H", "1s1")]
#[case("Na", "1s2 2s2 2p6 3s1")]
#[case("Cr", "1s2 2s2 2p6 3s2 3p6 4s1 3d5")]
#[case("Cu", "1s2 2s2 2p6 3s2 3p6 4s1 3d10")]
#[case("Pd", "1s2 2s2 2p6 3s2 3p6 4s2 3d10 4p6 4d10")]
fn test_ground_states(#[case] symbol: &str, #[case] expected: &str) {
    let config = configuration_for(&PeriodicTable::new(), &symbol.into()).unwrap();
    assert_eq!(config.to_string(), expected);
}

#[rstest]
#[case("Fe")]
#[case("fe")]
#[case("Iron")]
#[case("26")]
fn test_identifier_forms(#[case] text: &str) {
    let id: ElementId = text.parse().unwrap();
    let record = PeriodicTable::new().resolve(&id).unwrap();
    assert_eq!(record.atomic_number, 26);
    assert_eq!(record.symbol, "Fe");
    assert_eq!(record.name, "Iron");
}

#[rstest]
#[case("Xx")]
#[case("0")]
#[case("119")]
fn test_unknown_identifiers(#[case] text: &str) {
    let id: ElementId = text.parse().unwrap();
    assert!(matches!(
        configuration_for(&PeriodicTable::new(), &id),
        Err(AtomError::UnknownElement(_))
    ));
}

#[test]
fn test_shell_order() {
    let config = configuration_for(&PeriodicTable::new(), &"Zn".into()).unwrap();
    let labels: Vec<String> = config
        .ordered(OrbitalOrder::Shell)
        .iter()
        .map(|o| o.label().to_string())
        .collect();
    assert_eq!(labels, ["1s", "2s", "2p", "3s", "3p", "3d", "4s"]);
}

/// Lookup that hands out a sodium cation
struct IonLookup;

impl ElementLookup for IonLookup {
    fn resolve(&self, _id: &ElementId) -> zeff_rs::atoms::Result<ElementRecord> {
        Ok(ElementRecord {
            atomic_number: 11,
            symbol: "Na".to_string(),
            name: "Sodium".to_string(),
            ground_state: vec![
                ("1s".parse()?, 2),
                ("2s".parse()?, 2),
                ("2p".parse()?, 6),
            ],
        })
    }
}

#[test]
fn test_ionic_configuration_rejected() {
    let err = configuration_for(&IonLookup, &"Na".into()).unwrap_err();
    assert!(matches!(err, AtomError::InvalidConfiguration(_)));
}
