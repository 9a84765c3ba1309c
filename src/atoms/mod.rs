/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Atomic reference data and electron configurations
//!
//! This module resolves elements by symbol, name or atomic number and
//! builds their ground-state electron configurations.

pub mod database;
pub mod electron_config;
mod errors;
pub mod lookup;
pub mod orbital;

pub use electron_config::{configuration_for, ElectronConfiguration, OrbitalOrder};
pub use errors::{AtomError, Result};
pub use lookup::{ElementId, ElementLookup, ElementRecord, PeriodicTable};
pub use orbital::{AngularMomentum, Orbital, OrbitalLabel};
