/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Per-orbital screening output shared by every model

use crate::atoms::{ElectronConfiguration, OrbitalLabel};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which screening model produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Slater's empirical rules
    #[default]
    Slater,
    /// Clementi-Raimondi tabulated screening constants
    Clementi,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Slater => write!(f, "Slater"),
            ModelKind::Clementi => write!(f, "Clementi"),
        }
    }
}

/// Shielding constant and effective nuclear charge for one subshell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreeningResult {
    atomic_number: u32,
    symbol: String,
    orbital: OrbitalLabel,
    model: ModelKind,
    shielding: f64,
    effective_charge: f64,
}

impl ScreeningResult {
    pub(crate) fn new(
        atomic_number: u32,
        symbol: &str,
        orbital: OrbitalLabel,
        model: ModelKind,
        shielding: f64,
    ) -> Self {
        Self {
            atomic_number,
            symbol: symbol.to_string(),
            orbital,
            model,
            shielding,
            effective_charge: atomic_number as f64 - shielding,
        }
    }

    pub(crate) fn for_configuration(
        config: &ElectronConfiguration,
        orbital: OrbitalLabel,
        model: ModelKind,
        shielding: f64,
    ) -> Self {
        Self::new(config.atomic_number(), config.symbol(), orbital, model, shielding)
    }

    /// Nuclear charge Z
    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn orbital(&self) -> OrbitalLabel {
        self.orbital
    }

    pub fn model(&self) -> ModelKind {
        self.model
    }

    /// Shielding constant S
    pub fn shielding(&self) -> f64 {
        self.shielding
    }

    /// Effective nuclear charge Zeff = Z - S
    pub fn effective_charge(&self) -> f64 {
        self.effective_charge
    }

    /// Shielding as a percentage of the nuclear charge
    pub fn screening_percentage(&self) -> f64 {
        self.shielding / self.atomic_number as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_effective_charge_and_percentage() {
        let label: OrbitalLabel = "2p".parse().unwrap();
        let result = ScreeningResult::new(7, "N", label, ModelKind::Slater, 3.1);
        assert_relative_eq!(result.effective_charge(), 3.9, epsilon = 1e-12);
        assert_relative_eq!(result.screening_percentage(), 44.2857, epsilon = 1e-4);
        assert_eq!(result.symbol(), "N");
        assert_eq!(result.orbital().to_string(), "2p");
    }
}
