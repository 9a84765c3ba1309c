/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Cross-atom and cross-model comparisons
//!
//! `align` lines up the same orbital across several atoms so a trend can be
//! plotted per orbital. `element_summary` puts the Slater and Clementi values
//! for one element side by side.

use super::projection::{Cell, Column, Projection};
use super::ResultTable;
use crate::atoms::{
    configuration_for, ElectronConfiguration, ElementId, ElementLookup, OrbitalLabel, OrbitalOrder,
};
use crate::screening::{
    ClementiModel, ClementiTable, Result, ScreeningError, ScreeningModel, ScreeningResult,
    SlaterModel,
};
use serde::Serialize;

/// One atom's value in an orbital series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub atomic_number: u32,
    pub symbol: String,
    /// `None` when the atom has no row for the orbital or the row has no value
    pub value: Option<f64>,
}

/// Values of one column for one orbital across every atom in a table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitalSeries {
    pub orbital: OrbitalLabel,
    pub points: Vec<SeriesPoint>,
}

impl ResultTable {
    /// Align same-orbital rows across atoms
    ///
    /// One series per orbital in first-appearance order; each series has a
    /// point for every atom, in request order.
    pub fn align(&self, column: Column) -> Vec<OrbitalSeries> {
        let atoms = self.atoms();
        self.orbitals()
            .into_iter()
            .map(|orbital| OrbitalSeries {
                orbital,
                points: atoms
                    .iter()
                    .map(|(z, symbol)| SeriesPoint {
                        atomic_number: *z,
                        symbol: symbol.to_string(),
                        value: self
                            .iter()
                            .find(|row| row.atomic_number() == *z && row.orbital() == orbital)
                            .and_then(|row| row.cell(column).as_f64()),
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Zeff, S and %S from one model
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelValues {
    pub effective_charge: f64,
    pub shielding: f64,
    pub screening_percentage: f64,
}

impl From<&ScreeningResult> for ModelValues {
    fn from(result: &ScreeningResult) -> Self {
        Self {
            effective_charge: result.effective_charge(),
            shielding: result.shielding(),
            screening_percentage: result.screening_percentage(),
        }
    }
}

/// Slater and Clementi values for one orbital
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub orbital: OrbitalLabel,
    pub slater: ModelValues,
    /// `None` where the Clementi-Raimondi table has no constant
    pub clementi: Option<ModelValues>,
}

/// Model summary of one element together with its configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementSummary {
    pub configuration: ElectronConfiguration,
    pub rows: Vec<SummaryRow>,
}

/// Side-by-side Slater and Clementi values for every occupied orbital of
/// an element, sorted by (n, l)
pub fn element_summary<L>(
    lookup: &L,
    clementi: &ClementiTable,
    id: &ElementId,
) -> Result<Vec<SummaryRow>>
where
    L: ElementLookup + ?Sized,
{
    let config = configuration_for(lookup, id)?;
    configuration_summary(clementi, &config)
}

/// Same as [`element_summary`] for an already resolved configuration
pub fn configuration_summary(
    clementi: &ClementiTable,
    config: &ElectronConfiguration,
) -> Result<Vec<SummaryRow>> {
    let clementi = ClementiModel::new(clementi);

    config
        .ordered(OrbitalOrder::Shell)
        .iter()
        .map(|orbital| {
            let label = orbital.label();
            let slater = SlaterModel.screen(config, label)?;
            let clementi = match clementi.screen(config, label) {
                Ok(result) => Some(ModelValues::from(&result)),
                Err(ScreeningError::UnsupportedOrbital { .. }) => None,
                Err(e) => return Err(e),
            };
            Ok(SummaryRow {
                orbital: label,
                slater: ModelValues::from(&slater),
                clementi,
            })
        })
        .collect()
}

/// Tabular view of a model summary, one row per orbital
pub fn summary_projection(rows: &[SummaryRow]) -> Projection {
    let headers = [
        "n",
        "l",
        "l_num",
        "Orbital",
        "Zeff Slater",
        "S Slater",
        "% S Slater",
        "Zeff Clementi",
        "S Clementi",
        "% S Clementi",
    ];
    let values = |model: Option<ModelValues>| match model {
        Some(v) => [
            Cell::Number(v.effective_charge),
            Cell::Number(v.shielding),
            Cell::Number(v.screening_percentage),
        ],
        None => [Cell::Empty, Cell::Empty, Cell::Empty],
    };

    Projection {
        headers: headers.iter().map(|h| h.to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| {
                let mut cells = vec![
                    Cell::Integer(row.orbital.n),
                    Cell::Text(row.orbital.l.letter().to_string()),
                    Cell::Integer(row.orbital.l.l()),
                    Cell::Text(row.orbital.to_string()),
                ];
                cells.extend(values(Some(row.slater)));
                cells.extend(values(row.clementi));
                cells
            })
            .collect(),
    }
}
