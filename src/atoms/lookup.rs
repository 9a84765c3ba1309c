/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Element resolution by symbol, name or atomic number

use super::database::{
    atomic_number_from_name, atomic_number_from_symbol, aufbau_exception, element_name,
    element_symbol, MAX_ATOMIC_NUMBER,
};
use super::electron_config::{madelung_filling, parse_notation};
use super::errors::{AtomError, Result};
use super::orbital::OrbitalLabel;
use std::fmt;
use std::str::FromStr;

/// How a caller names an element
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementId {
    AtomicNumber(u32),
    /// Element symbol or English name, matched case-insensitively
    Symbol(String),
}

impl From<u32> for ElementId {
    fn from(atomic_number: u32) -> Self {
        ElementId::AtomicNumber(atomic_number)
    }
}

impl From<&str> for ElementId {
    fn from(symbol: &str) -> Self {
        ElementId::Symbol(symbol.to_string())
    }
}

impl FromStr for ElementId {
    type Err = AtomError;

    /// Numeric strings become atomic numbers, anything else a symbol or name
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AtomError::UnknownElement(String::new()));
        }
        match s.parse::<u32>() {
            Ok(z) => Ok(ElementId::AtomicNumber(z)),
            Err(_) => Ok(ElementId::Symbol(s.to_string())),
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementId::AtomicNumber(z) => write!(f, "Z={}", z),
            ElementId::Symbol(symbol) => write!(f, "{}", symbol),
        }
    }
}

/// Reference data for one element as returned by a lookup service
///
/// The configuration is raw (label, occupancy) data in whatever order the
/// service keeps it; `ElectronConfiguration` normalizes it.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementRecord {
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
    pub ground_state: Vec<(OrbitalLabel, u32)>,
}

/// Periodic-table lookup service
pub trait ElementLookup {
    /// Resolve an identifier, failing with `AtomError::UnknownElement`
    fn resolve(&self, id: &ElementId) -> Result<ElementRecord>;
}

/// Built-in periodic table covering Z = 1..=118
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodicTable;

impl PeriodicTable {
    pub fn new() -> Self {
        Self
    }

    fn atomic_number(&self, id: &ElementId) -> Result<u32> {
        let z = match id {
            ElementId::AtomicNumber(z) => Some(*z),
            ElementId::Symbol(text) => {
                atomic_number_from_symbol(text).or_else(|| atomic_number_from_name(text))
            }
        };
        match z {
            Some(z) if (1..=MAX_ATOMIC_NUMBER).contains(&z) => Ok(z),
            _ => Err(AtomError::UnknownElement(id.to_string())),
        }
    }
}

impl ElementLookup for PeriodicTable {
    fn resolve(&self, id: &ElementId) -> Result<ElementRecord> {
        let z = self.atomic_number(id)?;
        let unknown = || AtomError::UnknownElement(id.to_string());
        let symbol = element_symbol(z).ok_or_else(unknown)?;
        let name = element_name(z).ok_or_else(unknown)?;

        let ground_state = match aufbau_exception(z) {
            Some(notation) => parse_notation(notation)?,
            None => madelung_filling(z),
        };

        Ok(ElementRecord {
            atomic_number: z,
            symbol: symbol.to_string(),
            name: name.to_string(),
            ground_state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_id_parsing() {
        assert_eq!("26".parse::<ElementId>().unwrap(), ElementId::AtomicNumber(26));
        assert_eq!(
            "Fe".parse::<ElementId>().unwrap(),
            ElementId::Symbol("Fe".to_string())
        );
        assert!("  ".parse::<ElementId>().is_err());
    }

    #[test]
    fn test_resolve_by_symbol_name_and_number() {
        let table = PeriodicTable::new();
        let by_symbol = table.resolve(&"H".into()).unwrap();
        let by_name = table.resolve(&"Hydrogen".into()).unwrap();
        let by_number = table.resolve(&1u32.into()).unwrap();
        assert_eq!(by_symbol, by_name);
        assert_eq!(by_symbol, by_number);
        assert_eq!(by_symbol.symbol, "H");
        assert_eq!(by_symbol.name, "Hydrogen");
    }

    #[test]
    fn test_resolve_unknown() {
        let table = PeriodicTable::new();
        for id in [
            ElementId::AtomicNumber(0),
            ElementId::AtomicNumber(119),
            ElementId::from("Uo"),
            ElementId::from("Unobtainium"),
        ] {
            assert!(matches!(table.resolve(&id), Err(AtomError::UnknownElement(_))));
        }
    }

    #[test]
    fn test_exception_used_for_copper() {
        let table = PeriodicTable::new();
        let cu = table.resolve(&"Cu".into()).unwrap();
        let s4 = "4s".parse::<OrbitalLabel>().unwrap();
        let d3 = "3d".parse::<OrbitalLabel>().unwrap();
        assert!(cu.ground_state.contains(&(s4, 1)));
        assert!(cu.ground_state.contains(&(d3, 10)));
    }
}
