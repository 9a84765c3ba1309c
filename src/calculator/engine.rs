/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Batch Zeff calculations over one or more elements

use super::config::CalculationConfig;
use crate::atoms::{configuration_for, ElectronConfiguration, ElementId, ElementLookup, PeriodicTable};
use crate::errors::Result;
use crate::screening::{
    ClementiModel, ClementiTable, ModelKind, ScreeningError, ScreeningModel, SlaterModel,
};
use crate::table::{
    build_table, configuration_summary, element_summary, ElementSummary, ResultTable, SummaryRow,
    TableRow,
};
use log::{debug, info, warn};
use rayon::prelude::*;

/// Resolves elements and runs the configured screening model over them
///
/// The Clementi-Raimondi table is borrowed, so one loaded table can serve
/// any number of calculators.
#[derive(Debug, Clone)]
pub struct ZeffCalculator<'a, L = PeriodicTable> {
    lookup: L,
    clementi: &'a ClementiTable,
    config: CalculationConfig,
}

impl<'a> ZeffCalculator<'a, PeriodicTable> {
    /// Calculator backed by the built-in periodic table
    pub fn new(clementi: &'a ClementiTable) -> Self {
        Self::with_lookup(PeriodicTable::new(), clementi)
    }
}

impl<'a, L> ZeffCalculator<'a, L>
where
    L: ElementLookup + Sync,
{
    pub fn with_lookup(lookup: L, clementi: &'a ClementiTable) -> Self {
        Self {
            lookup,
            clementi,
            config: CalculationConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CalculationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &CalculationConfig {
        &self.config
    }

    pub fn clementi_table(&self) -> &'a ClementiTable {
        self.clementi
    }

    /// Ground-state configuration of an element
    pub fn configuration(&self, id: &ElementId) -> Result<ElectronConfiguration> {
        Ok(configuration_for(&self.lookup, id)?)
    }

    /// Result table for a single element
    pub fn calculate_one(&self, id: &ElementId) -> Result<ResultTable> {
        self.calculate(std::slice::from_ref(id))
    }

    /// Result table for a batch of elements
    ///
    /// Every identifier is resolved before any screening is done, so an
    /// unknown element fails the whole batch. An element named more than
    /// once is computed once, at its first position. Missing
    /// Clementi-Raimondi constants fail the batch too unless the
    /// configuration is lenient.
    pub fn calculate(&self, ids: &[ElementId]) -> Result<ResultTable> {
        info!(
            "Calculating {} Zeff for {} element(s)",
            self.config.model,
            ids.len()
        );

        let configs = self.resolve_all(ids)?;

        let per_atom: Vec<Vec<TableRow>> = if self.config.parallel {
            configs
                .par_iter()
                .map(|config| self.rows_for(config))
                .collect::<Result<_>>()?
        } else {
            configs
                .iter()
                .map(|config| self.rows_for(config))
                .collect::<Result<_>>()?
        };

        let table = build_table(per_atom.into_iter().flatten(), self.config.group_by);
        info!("Built table with {} row(s)", table.len());
        Ok(table)
    }

    /// Side-by-side Slater and Clementi values for one element
    pub fn summary(&self, id: &ElementId) -> Result<Vec<SummaryRow>> {
        Ok(element_summary(&self.lookup, self.clementi, id)?)
    }

    /// Model summaries for a batch of elements, in request order
    ///
    /// Resolution and de-duplication follow [`calculate`](Self::calculate).
    /// Rows are always in shell order and a missing Clementi-Raimondi
    /// constant is an empty cell, so `order` and `lenient` do not apply.
    pub fn summaries(&self, ids: &[ElementId]) -> Result<Vec<ElementSummary>> {
        let configs = self.resolve_all(ids)?;
        let summarize = |config: ElectronConfiguration| -> Result<ElementSummary> {
            let rows = configuration_summary(self.clementi, &config)?;
            Ok(ElementSummary {
                configuration: config,
                rows,
            })
        };

        if self.config.parallel {
            configs.into_par_iter().map(summarize).collect()
        } else {
            configs.into_iter().map(summarize).collect()
        }
    }

    /// Resolve every identifier, keeping the first request for each element
    fn resolve_all(&self, ids: &[ElementId]) -> Result<Vec<ElectronConfiguration>> {
        let mut configs: Vec<ElectronConfiguration> = Vec::with_capacity(ids.len());
        for id in ids {
            let config = self.configuration(id)?;
            if configs
                .iter()
                .any(|c| c.atomic_number() == config.atomic_number())
            {
                warn!(
                    "{} requested more than once; using the first request",
                    config.symbol()
                );
                continue;
            }
            configs.push(config);
        }
        Ok(configs)
    }

    fn rows_for(&self, config: &ElectronConfiguration) -> Result<Vec<TableRow>> {
        debug!("{}: {}", config.symbol(), config);
        match self.config.model {
            ModelKind::Slater => self.rows_with(&SlaterModel, config),
            ModelKind::Clementi => self.rows_with(&ClementiModel::new(self.clementi), config),
        }
    }

    fn rows_with<M: ScreeningModel>(
        &self,
        model: &M,
        config: &ElectronConfiguration,
    ) -> Result<Vec<TableRow>> {
        let mut rows = Vec::with_capacity(config.orbitals().len());
        for orbital in config.ordered(self.config.order) {
            let label = orbital.label();
            match model.screen(config, label) {
                Ok(result) => rows.push(TableRow::Screened(result)),
                Err(ScreeningError::UnsupportedOrbital { .. }) if self.config.lenient => {
                    warn!(
                        "No {} value for {} {}; recorded as unsupported",
                        model.kind(),
                        config.symbol(),
                        label
                    );
                    rows.push(TableRow::Unsupported {
                        atomic_number: config.atomic_number(),
                        symbol: config.symbol().to_string(),
                        orbital: label,
                        model: model.kind(),
                    });
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(rows)
    }
}
