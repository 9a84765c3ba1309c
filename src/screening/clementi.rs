/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Clementi-Raimondi screening constants
//!
//! Screening constants fitted to SCF wavefunctions are looked up from a
//! read-only table. The bundled table is parsed once on first use; a table
//! with the same JSON layout can also be loaded from disk:
//!
//! ```json
//! { "source": "...", "screening": { "7": { "1s": 0.335, "2s": 3.153 } } }
//! ```
//!
//! A (Z, orbital) pair missing from the table is unsupported; it is never
//! treated as zero shielding.

use super::errors::{Result, ScreeningError};
use super::model::ScreeningModel;
use super::result::{ModelKind, ScreeningResult};
use crate::atoms::database::{element_symbol, MAX_ATOMIC_NUMBER};
use crate::atoms::{configuration_for, ElectronConfiguration, OrbitalLabel, PeriodicTable};
use crate::table::ResultTable;
use log::{debug, info};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Heaviest element the Clementi-Raimondi fits cover
pub const CLEMENTI_MAX_ATOMIC_NUMBER: u32 = 86;

const BUNDLED_DATASET: &str = include_str!("../../data/clementi_raimondi.json");

static BUNDLED_TABLE: Lazy<std::result::Result<ClementiTable, String>> = Lazy::new(|| {
    let table = ClementiTable::from_json(BUNDLED_DATASET).map_err(|e| e.to_string());
    if let Ok(table) = &table {
        info!(
            "Loaded bundled Clementi-Raimondi table: {} entries, Z <= {}",
            table.len(),
            table.max_atomic_number()
        );
    }
    table
});

#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(default)]
    source: String,
    screening: BTreeMap<String, BTreeMap<String, f64>>,
}

/// Read-only (Z, orbital) -> screening constant table
#[derive(Debug, Clone, PartialEq)]
pub struct ClementiTable {
    source: String,
    constants: HashMap<(u32, OrbitalLabel), f64>,
    max_atomic_number: u32,
}

impl ClementiTable {
    /// The table compiled into the crate (Z = 1..=36)
    pub fn bundled() -> Result<&'static ClementiTable> {
        (*BUNDLED_TABLE)
            .as_ref()
            .map_err(|msg| ScreeningError::ReferenceDataLoad(msg.clone()))
    }

    /// Parse a table from its JSON representation
    pub fn from_json(text: &str) -> Result<Self> {
        let file: DatasetFile = serde_json::from_str(text)
            .map_err(|e| ScreeningError::ReferenceDataLoad(e.to_string()))?;

        let mut constants = HashMap::new();
        let mut max_atomic_number = 0;
        for (z_key, orbitals) in &file.screening {
            let z = z_key
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|z| (1..=MAX_ATOMIC_NUMBER).contains(z))
                .ok_or_else(|| {
                    ScreeningError::ReferenceDataLoad(format!("invalid atomic number '{}'", z_key))
                })?;
            if z > CLEMENTI_MAX_ATOMIC_NUMBER {
                return Err(ScreeningError::ReferenceDataLoad(format!(
                    "Z = {} is beyond the Clementi-Raimondi range (Z <= {})",
                    z, CLEMENTI_MAX_ATOMIC_NUMBER
                )));
            }

            for (label_key, &shielding) in orbitals {
                let label: OrbitalLabel = label_key.parse().map_err(|e| {
                    ScreeningError::ReferenceDataLoad(format!("Z = {}: {}", z, e))
                })?;
                if !shielding.is_finite() || shielding < 0.0 || shielding > z as f64 {
                    return Err(ScreeningError::ReferenceDataLoad(format!(
                        "Z = {} {}: screening constant {} outside [0, Z]",
                        z, label, shielding
                    )));
                }
                constants.insert((z, label), shielding);
            }
            max_atomic_number = max_atomic_number.max(z);
        }

        Ok(Self {
            source: file.source,
            constants,
            max_atomic_number,
        })
    }

    /// Load a table from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ScreeningError::ReferenceDataLoad(format!("{}: {}", path.display(), e))
        })?;
        let table = Self::from_json(&text)?;
        info!(
            "Loaded Clementi-Raimondi table from {}: {} entries",
            path.display(),
            table.len()
        );
        Ok(table)
    }

    /// Tabulated screening constant, if any
    pub fn screening(&self, atomic_number: u32, orbital: OrbitalLabel) -> Option<f64> {
        self.constants.get(&(atomic_number, orbital)).copied()
    }

    /// Citation of the dataset
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Heaviest element with at least one tabulated constant
    pub fn max_atomic_number(&self) -> u32 {
        self.max_atomic_number
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}

/// Clementi-Raimondi lookup as a screening model
#[derive(Debug, Clone, Copy)]
pub struct ClementiModel<'a> {
    table: &'a ClementiTable,
}

impl<'a> ClementiModel<'a> {
    pub fn new(table: &'a ClementiTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a ClementiTable {
        self.table
    }

    /// Shielding constant and Zeff for `orbital` of element `atomic_number`
    pub fn zeff(&self, atomic_number: u32, orbital: OrbitalLabel) -> Result<ScreeningResult> {
        let unsupported = || ScreeningError::UnsupportedOrbital {
            atomic_number,
            orbital,
        };
        let shielding = self
            .table
            .screening(atomic_number, orbital)
            .ok_or_else(unsupported)?;
        let symbol = element_symbol(atomic_number).ok_or_else(unsupported)?;

        debug!("Clementi {} {}: S = {:.4}", symbol, orbital, shielding);
        Ok(ScreeningResult::new(
            atomic_number,
            symbol,
            orbital,
            ModelKind::Clementi,
            shielding,
        ))
    }

    /// Results for every occupied subshell of the ground-state atom
    pub fn zeff_all(&self, atomic_number: u32) -> Result<ResultTable> {
        let config = configuration_for(&PeriodicTable::new(), &atomic_number.into())?;
        Ok(ResultTable::from_results(self.screen_all(&config)?))
    }
}

impl ScreeningModel for ClementiModel<'_> {
    fn kind(&self) -> ModelKind {
        ModelKind::Clementi
    }

    fn screen(
        &self,
        config: &ElectronConfiguration,
        orbital: OrbitalLabel,
    ) -> Result<ScreeningResult> {
        if !config.contains(orbital) {
            return Err(ScreeningError::InvalidOrbital {
                symbol: config.symbol().to_string(),
                orbital,
            });
        }
        self.zeff(config.atomic_number(), orbital)
    }
}

/// Look up the Clementi-Raimondi Zeff for one orbital
pub fn clementi_zeff(
    table: &ClementiTable,
    atomic_number: u32,
    orbital: OrbitalLabel,
) -> Result<ScreeningResult> {
    ClementiModel::new(table).zeff(atomic_number, orbital)
}

/// Look up the Clementi-Raimondi Zeff for every occupied subshell
pub fn clementi_zeff_all(table: &ClementiTable, atomic_number: u32) -> Result<ResultTable> {
    ClementiModel::new(table).zeff_all(atomic_number)
}
