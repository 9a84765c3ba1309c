/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Configuration for batch calculations

use crate::atoms::OrbitalOrder;
use crate::screening::ModelKind;
use crate::table::GroupBy;
use serde::{Deserialize, Serialize};

/// Options controlling a `ZeffCalculator`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationConfig {
    /// Screening model to apply
    pub model: ModelKind,
    /// Record orbitals without a tabulated constant as unsupported rows
    /// instead of failing the batch
    pub lenient: bool,
    /// Orbital order within each atom
    pub order: OrbitalOrder,
    /// Row arrangement for multi-atom tables
    pub group_by: GroupBy,
    /// Compute atoms of a batch on the rayon thread pool
    pub parallel: bool,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            model: ModelKind::Slater,
            lenient: false,
            order: OrbitalOrder::Filling,
            group_by: GroupBy::Atom,
            parallel: false,
        }
    }
}

impl CalculationConfig {
    pub fn with_model(mut self, model: ModelKind) -> Self {
        self.model = model;
        self
    }

    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    pub fn with_order(mut self, order: OrbitalOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_group_by(mut self, group_by: GroupBy) -> Self {
        self.group_by = group_by;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_strict_slater() {
        let config = CalculationConfig::default();
        assert_eq!(config.model, ModelKind::Slater);
        assert!(!config.lenient);
        assert!(!config.parallel);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: CalculationConfig =
            serde_json::from_str(r#"{"model": "clementi", "lenient": true}"#).unwrap();
        assert_eq!(config.model, ModelKind::Clementi);
        assert!(config.lenient);
        assert_eq!(config.group_by, GroupBy::Atom);
    }
}
