/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Shielding constants and effective nuclear charges
//!
//! Two models are provided behind the [`ScreeningModel`] trait: Slater's
//! empirical rules, computed from the Slater grouping of a configuration,
//! and the Clementi-Raimondi screening constants, looked up from a table.

pub mod clementi;
mod errors;
pub mod grouping;
mod model;
mod result;
pub mod slater;

pub use clementi::{
    clementi_zeff, clementi_zeff_all, ClementiModel, ClementiTable, CLEMENTI_MAX_ATOMIC_NUMBER,
};
pub use errors::{Result, ScreeningError};
pub use grouping::{classify, groups_for, GroupRelation, SlaterGroup};
pub use model::ScreeningModel;
pub use result::{ModelKind, ScreeningResult};
pub use slater::{slater_weight, slater_zeff, slater_zeff_all, ElectronKind, SlaterModel};
