/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Slater's rules for shielding constants
//!
//! For a target electron the shielding constant is a weighted count of the
//! other electrons, with the weight chosen from a small decision table keyed
//! by the target's subshell kind and the other electron's group relation:
//!
//! | target | same group        | n / n-1 inner | n-2 and below | outer |
//! |--------|-------------------|---------------|---------------|-------|
//! | s, p   | 0.35 (1s: 0.30)   | 0.85          | 1.00          | 0     |
//! | d, f   | 0.35              | 1.00          | 1.00          | 0     |

use super::errors::{Result, ScreeningError};
use super::grouping::{classify, group_index, GroupRelation};
use super::model::ScreeningModel;
use super::result::{ModelKind, ScreeningResult};
use crate::atoms::{AngularMomentum, ElectronConfiguration, OrbitalLabel};
use crate::table::ResultTable;
use log::debug;

/// Subshell kinds that Slater's rules treat differently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElectronKind {
    /// s or p electron
    SP,
    /// d or f electron
    DF,
}

impl From<AngularMomentum> for ElectronKind {
    fn from(l: AngularMomentum) -> Self {
        match l {
            AngularMomentum::S | AngularMomentum::P => ElectronKind::SP,
            AngularMomentum::D | AngularMomentum::F => ElectronKind::DF,
        }
    }
}

/// Same-group weight when the target sits in the 1s group
pub const INNERMOST_SAME_GROUP_WEIGHT: f64 = 0.30;
pub const SAME_GROUP_WEIGHT: f64 = 0.35;
pub const NEXT_SHELL_WEIGHT: f64 = 0.85;
pub const FULL_WEIGHT: f64 = 1.00;

/// Shielding contributed by one electron
pub fn slater_weight(kind: ElectronKind, relation: GroupRelation, innermost: bool) -> f64 {
    match (kind, relation) {
        (_, GroupRelation::Outer) => 0.0,
        (_, GroupRelation::SameGroup) if innermost => INNERMOST_SAME_GROUP_WEIGHT,
        (_, GroupRelation::SameGroup) => SAME_GROUP_WEIGHT,
        (ElectronKind::SP, GroupRelation::NextShell) => NEXT_SHELL_WEIGHT,
        (ElectronKind::SP, GroupRelation::DeepShell) => FULL_WEIGHT,
        (ElectronKind::DF, GroupRelation::NextShell | GroupRelation::DeepShell) => FULL_WEIGHT,
    }
}

/// Slater's rules as a screening model
#[derive(Debug, Clone, Copy, Default)]
pub struct SlaterModel;

impl SlaterModel {
    pub fn new() -> Self {
        Self
    }
}

impl ScreeningModel for SlaterModel {
    fn kind(&self) -> ModelKind {
        ModelKind::Slater
    }

    fn screen(
        &self,
        config: &ElectronConfiguration,
        orbital: OrbitalLabel,
    ) -> Result<ScreeningResult> {
        slater_zeff(config, orbital)
    }
}

/// Shielding constant and Zeff for an electron in `orbital`
pub fn slater_zeff(
    config: &ElectronConfiguration,
    orbital: OrbitalLabel,
) -> Result<ScreeningResult> {
    let target = config
        .get(orbital)
        .ok_or_else(|| ScreeningError::InvalidOrbital {
            symbol: config.symbol().to_string(),
            orbital,
        })?;

    let kind = ElectronKind::from(target.l());
    let innermost = group_index(orbital) == Some(0);

    let mut shielding = 0.0;
    for other in config.orbitals() {
        let relation = classify(orbital, other.label())?;
        // the target electron does not shield itself
        let count = if other.label() == orbital {
            other.occupancy() - 1
        } else {
            other.occupancy()
        };
        shielding += slater_weight(kind, relation, innermost) * count as f64;
    }

    debug!(
        "Slater {} {}: S = {:.4}",
        config.symbol(),
        orbital,
        shielding
    );

    Ok(ScreeningResult::for_configuration(
        config,
        orbital,
        ModelKind::Slater,
        shielding,
    ))
}

/// Slater results for every occupied subshell, in filling order
pub fn slater_zeff_all(config: &ElectronConfiguration) -> Result<ResultTable> {
    let results = SlaterModel.screen_all(config)?;
    Ok(ResultTable::from_results(results))
}
