/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Electron configuration model
//!
//! An `ElectronConfiguration` is the ordered list of occupied subshells of
//! one neutral atom in its ground state. Configurations only come out of an
//! [`ElementLookup`], so every instance satisfies:
//!
//! * the occupancies sum to the atomic number,
//! * each subshell appears once and is within its capacity,
//! * subshells are ordered by the Madelung rule (n + l, then n).

use super::errors::{AtomError, Result};
use super::lookup::{ElementId, ElementLookup};
use super::orbital::{AngularMomentum, Orbital, OrbitalLabel};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest principal quantum number reached by any known element
const MAX_PRINCIPAL: u32 = 7;

/// Noble-gas cores usable in `[X]` notation
const NOBLE_GAS_CORES: [(&str, u32); 7] = [
    ("He", 2),
    ("Ne", 10),
    ("Ar", 18),
    ("Kr", 36),
    ("Xe", 54),
    ("Rn", 86),
    ("Og", 118),
];

/// Row ordering for per-orbital output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrbitalOrder {
    /// Madelung filling order: 1s 2s 2p 3s 3p 4s 3d ...
    #[default]
    Filling,
    /// Shell order, increasing n then l: 1s 2s 2p 3s 3p 3d 4s ...
    Shell,
}

/// Ground-state electron configuration of a neutral atom
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElectronConfiguration {
    atomic_number: u32,
    symbol: String,
    orbitals: Vec<Orbital>,
}

impl ElectronConfiguration {
    /// Normalize raw (label, occupancy) data into a configuration
    pub(crate) fn from_raw(
        atomic_number: u32,
        symbol: &str,
        raw: &[(OrbitalLabel, u32)],
    ) -> Result<Self> {
        let mut orbitals = Vec::with_capacity(raw.len());
        for &(label, occupancy) in raw {
            if orbitals.iter().any(|o: &Orbital| o.label() == label) {
                return Err(AtomError::InvalidConfiguration(format!(
                    "{} appears more than once for {}",
                    label, symbol
                )));
            }
            orbitals.push(Orbital::new(label, occupancy)?);
        }
        orbitals.sort_by_key(|o| o.label().filling_key());

        let total: u32 = orbitals.iter().map(|o| o.occupancy()).sum();
        if total != atomic_number {
            return Err(AtomError::InvalidConfiguration(format!(
                "{} has {} electrons but Z = {}; only neutral atoms are supported",
                symbol, total, atomic_number
            )));
        }

        Ok(Self {
            atomic_number,
            symbol: symbol.to_string(),
            orbitals,
        })
    }

    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Occupied subshells in filling order
    pub fn orbitals(&self) -> &[Orbital] {
        &self.orbitals
    }

    /// Occupied subshells in the requested order
    pub fn ordered(&self, order: OrbitalOrder) -> Vec<Orbital> {
        let mut orbitals = self.orbitals.clone();
        if order == OrbitalOrder::Shell {
            orbitals.sort_by_key(|o| o.label().shell_key());
        }
        orbitals
    }

    /// Find an occupied subshell by label
    pub fn get(&self, label: OrbitalLabel) -> Option<&Orbital> {
        self.orbitals.iter().find(|o| o.label() == label)
    }

    pub fn contains(&self, label: OrbitalLabel) -> bool {
        self.get(label).is_some()
    }

    pub fn total_electrons(&self) -> u32 {
        self.orbitals.iter().map(|o| o.occupancy()).sum()
    }
}

impl fmt::Display for ElectronConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.orbitals.iter().map(|o| o.to_string()).collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// Resolve an element and return its ground-state configuration
pub fn configuration_for<L>(lookup: &L, id: &ElementId) -> Result<ElectronConfiguration>
where
    L: ElementLookup + ?Sized,
{
    let record = lookup.resolve(id)?;
    ElectronConfiguration::from_raw(record.atomic_number, &record.symbol, &record.ground_state)
}

/// Subshells up to 7p in Madelung order
fn madelung_sequence() -> Vec<OrbitalLabel> {
    let mut labels: Vec<OrbitalLabel> = (1..=MAX_PRINCIPAL)
        .flat_map(|n| {
            [
                AngularMomentum::S,
                AngularMomentum::P,
                AngularMomentum::D,
                AngularMomentum::F,
            ]
            .into_iter()
            .filter(move |l| l.l() < n)
            .map(move |l| OrbitalLabel { n, l })
        })
        .collect();
    labels.sort_by_key(|label| label.filling_key());
    labels
}

/// Fill `electrons` electrons following the Madelung rule
pub(crate) fn madelung_filling(electrons: u32) -> Vec<(OrbitalLabel, u32)> {
    let mut remaining = electrons;
    let mut filled = Vec::new();
    for label in madelung_sequence() {
        if remaining == 0 {
            break;
        }
        let occupancy = remaining.min(label.l.capacity());
        filled.push((label, occupancy));
        remaining -= occupancy;
    }
    filled
}

/// Parse configuration notation such as `[Ar] 3d5 4s1` or `1s2 2s2 2p1`
pub(crate) fn parse_notation(notation: &str) -> Result<Vec<(OrbitalLabel, u32)>> {
    let mut raw = Vec::new();
    for token in notation.split_whitespace() {
        if let Some(core) = token.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            let electrons = NOBLE_GAS_CORES
                .iter()
                .find(|(symbol, _)| symbol.eq_ignore_ascii_case(core))
                .map(|(_, electrons)| *electrons)
                .ok_or_else(|| AtomError::ParseError(format!("unknown core [{}]", core)))?;
            raw.extend(madelung_filling(electrons));
            continue;
        }

        let split = token
            .char_indices()
            .find(|(_, c)| c.is_ascii_alphabetic())
            .map(|(i, c)| i + c.len_utf8())
            .ok_or_else(|| AtomError::ParseError(format!("invalid subshell '{}'", token)))?;
        let label: OrbitalLabel = token[..split].parse()?;
        let occupancy = token[split..]
            .parse::<u32>()
            .map_err(|_| AtomError::ParseError(format!("invalid occupancy in '{}'", token)))?;
        raw.push((label, occupancy));
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::lookup::PeriodicTable;

    fn ground_state(id: impl Into<ElementId>) -> ElectronConfiguration {
        configuration_for(&PeriodicTable::new(), &id.into()).unwrap()
    }

    #[test]
    fn test_madelung_sequence_start() {
        let labels: Vec<String> = madelung_sequence()
            .iter()
            .take(8)
            .map(|l| l.to_string())
            .collect();
        assert_eq!(labels, ["1s", "2s", "2p", "3s", "3p", "4s", "3d", "4p"]);
    }

    #[test]
    fn test_madelung_sequence_holds_118_electrons() {
        let capacity: u32 = madelung_sequence().iter().map(|l| l.l.capacity()).sum();
        assert!(capacity >= 118);
        let filled = madelung_filling(118);
        assert_eq!(filled.last().unwrap().0.to_string(), "7p");
    }

    #[test]
    fn test_parse_notation_with_core() {
        let raw = parse_notation("[Ne] 3s1").unwrap();
        let text: Vec<String> = raw.iter().map(|(l, o)| format!("{}{}", l, o)).collect();
        assert_eq!(text, ["1s2", "2s2", "2p6", "3s1"]);
    }

    #[test]
    fn test_parse_notation_errors() {
        assert!(parse_notation("[Xx] 1s1").is_err());
        assert!(parse_notation("1s").is_err());
        assert!(parse_notation("1x2").is_err());
        assert!(parse_notation("22").is_err());
    }

    #[test]
    fn test_hydrogen_and_carbon() {
        assert_eq!(ground_state("H").to_string(), "1s1");
        assert_eq!(ground_state("Carbon").to_string(), "1s2 2s2 2p2");
    }

    #[test]
    fn test_iron_filling_order() {
        let fe = ground_state(26u32);
        assert_eq!(fe.to_string(), "1s2 2s2 2p6 3s2 3p6 4s2 3d6");
        let shell: Vec<String> = fe
            .ordered(OrbitalOrder::Shell)
            .iter()
            .map(|o| o.label().to_string())
            .collect();
        assert_eq!(shell, ["1s", "2s", "2p", "3s", "3p", "3d", "4s"]);
    }

    #[test]
    fn test_chromium_exception() {
        let cr = ground_state("Cr");
        assert_eq!(cr.to_string(), "1s2 2s2 2p6 3s2 3p6 4s1 3d5");
    }

    #[test]
    fn test_every_element_is_neutral() {
        for z in 1..=118u32 {
            let config = ground_state(z);
            assert_eq!(config.total_electrons(), z, "Z = {}", z);
            assert_eq!(config.atomic_number(), z);
        }
    }

    #[test]
    fn test_from_raw_rejects_ions_and_duplicates() {
        let s1: OrbitalLabel = "1s".parse().unwrap();
        assert!(ElectronConfiguration::from_raw(2, "He", &[(s1, 1)]).is_err());
        assert!(ElectronConfiguration::from_raw(2, "He", &[(s1, 1), (s1, 1)]).is_err());
        assert!(ElectronConfiguration::from_raw(2, "He", &[(s1, 2)]).is_ok());
    }
}
