/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Common interface over screening models

use super::errors::Result;
use super::result::{ModelKind, ScreeningResult};
use crate::atoms::{ElectronConfiguration, OrbitalLabel};

/// A method of computing per-orbital shielding constants
///
/// Implementations produce identically shaped [`ScreeningResult`]s so that
/// tables from different models can be compared row by row.
pub trait ScreeningModel {
    /// Which model this is
    fn kind(&self) -> ModelKind;

    /// Screen a single occupied subshell of `config`
    fn screen(&self, config: &ElectronConfiguration, orbital: OrbitalLabel)
        -> Result<ScreeningResult>;

    /// Screen every occupied subshell in filling order, stopping at the
    /// first failure
    fn screen_all(&self, config: &ElectronConfiguration) -> Result<Vec<ScreeningResult>> {
        config
            .orbitals()
            .iter()
            .map(|orbital| self.screen(config, orbital.label()))
            .collect()
    }
}
