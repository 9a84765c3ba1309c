/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Result tables
//!
//! A [`ResultTable`] collects per-orbital rows from either screening model.
//! Rows keep atom-request order and, within an atom, the orbital order the
//! rows were produced in. Rows that a lenient batch could not compute are
//! kept as [`TableRow::Unsupported`] so the table stays rectangular.

pub mod comparison;
pub mod projection;

pub use comparison::{
    configuration_summary, element_summary, summary_projection, ElementSummary, ModelValues,
    OrbitalSeries, SeriesPoint, SummaryRow,
};
pub use projection::{Cell, Column, Projection};

use crate::atoms::OrbitalLabel;
use crate::screening::{ModelKind, ScreeningResult};
use serde::{Deserialize, Serialize};

/// How rows of a multi-atom table are arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    /// Each atom's rows are contiguous, atoms in request order
    #[default]
    Atom,
    /// Rows for the same orbital are contiguous, atoms in request order
    /// within each orbital
    Orbital,
}

/// One table row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TableRow {
    Screened(ScreeningResult),
    /// No value is available for this orbital under the chosen model
    Unsupported {
        atomic_number: u32,
        symbol: String,
        orbital: OrbitalLabel,
        model: ModelKind,
    },
}

impl From<ScreeningResult> for TableRow {
    fn from(result: ScreeningResult) -> Self {
        TableRow::Screened(result)
    }
}

impl TableRow {
    pub fn atomic_number(&self) -> u32 {
        match self {
            TableRow::Screened(result) => result.atomic_number(),
            TableRow::Unsupported { atomic_number, .. } => *atomic_number,
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            TableRow::Screened(result) => result.symbol(),
            TableRow::Unsupported { symbol, .. } => symbol,
        }
    }

    pub fn orbital(&self) -> OrbitalLabel {
        match self {
            TableRow::Screened(result) => result.orbital(),
            TableRow::Unsupported { orbital, .. } => *orbital,
        }
    }

    pub fn model(&self) -> ModelKind {
        match self {
            TableRow::Screened(result) => result.model(),
            TableRow::Unsupported { model, .. } => *model,
        }
    }

    pub fn result(&self) -> Option<&ScreeningResult> {
        match self {
            TableRow::Screened(result) => Some(result),
            TableRow::Unsupported { .. } => None,
        }
    }

    pub fn shielding(&self) -> Option<f64> {
        self.result().map(ScreeningResult::shielding)
    }

    pub fn effective_charge(&self) -> Option<f64> {
        self.result().map(ScreeningResult::effective_charge)
    }

    pub fn screening_percentage(&self) -> Option<f64> {
        self.result().map(ScreeningResult::screening_percentage)
    }

    pub fn is_supported(&self) -> bool {
        self.result().is_some()
    }
}

/// Ordered collection of screening rows
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ResultTable {
    group_by: GroupBy,
    rows: Vec<TableRow>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table of one atom's results, in the order given
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = ScreeningResult>,
    {
        build_table(results, GroupBy::Atom)
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TableRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn group_by(&self) -> GroupBy {
        self.group_by
    }

    /// Distinct atoms as (Z, symbol), in request order
    pub fn atoms(&self) -> Vec<(u32, &str)> {
        let mut atoms: Vec<(u32, &str)> = Vec::new();
        for row in &self.rows {
            if !atoms.iter().any(|(z, _)| *z == row.atomic_number()) {
                atoms.push((row.atomic_number(), row.symbol()));
            }
        }
        atoms
    }

    /// Distinct orbitals in order of first appearance
    pub fn orbitals(&self) -> Vec<OrbitalLabel> {
        let mut orbitals: Vec<OrbitalLabel> = Vec::new();
        for row in &self.rows {
            if !orbitals.contains(&row.orbital()) {
                orbitals.push(row.orbital());
            }
        }
        orbitals
    }

    /// Rows belonging to one atom
    pub fn rows_for(&self, atomic_number: u32) -> Vec<&TableRow> {
        self.rows
            .iter()
            .filter(|row| row.atomic_number() == atomic_number)
            .collect()
    }

    /// Same rows rearranged under a different grouping
    pub fn regroup(&self, group_by: GroupBy) -> Self {
        build_table(self.rows.iter().cloned(), group_by)
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a TableRow;
    type IntoIter = std::slice::Iter<'a, TableRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Assemble rows into a table
///
/// `rows` must arrive in atom-request order with each atom's orbitals in
/// the order they should be shown. Grouping is a stable sort on the
/// first-appearance position of the atom or orbital, so both orders survive.
pub fn build_table<I, R>(rows: I, group_by: GroupBy) -> ResultTable
where
    I: IntoIterator<Item = R>,
    R: Into<TableRow>,
{
    let mut table = ResultTable {
        group_by,
        rows: rows.into_iter().map(Into::into).collect(),
    };

    match group_by {
        GroupBy::Atom => {
            let atoms: Vec<u32> = table.atoms().iter().map(|(z, _)| *z).collect();
            table
                .rows
                .sort_by_key(|row| atoms.iter().position(|z| *z == row.atomic_number()));
        }
        GroupBy::Orbital => {
            let orbitals = table.orbitals();
            table
                .rows
                .sort_by_key(|row| orbitals.iter().position(|o| *o == row.orbital()));
        }
    }
    table
}
