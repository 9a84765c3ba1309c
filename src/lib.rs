/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # zeff-rs
//!
//! Effective nuclear charge (Zeff) and shielding constants for the
//! occupied orbitals of neutral ground-state atoms.
//!
//! Two screening models are available:
//!
//! - Slater's empirical rules, computed from the electron configuration
//! - the Clementi-Raimondi screening constants from self-consistent-field
//!   wavefunctions, looked up from a bundled table
//!
//! ```
//! use zeff_rs::calculator::ZeffCalculator;
//! use zeff_rs::screening::ClementiTable;
//!
//! let clementi = ClementiTable::bundled()?;
//! let table = ZeffCalculator::new(clementi).calculate_one(&"Na".into())?;
//! let valence = table.rows().last().unwrap();
//! assert!((valence.effective_charge().unwrap() - 2.2).abs() < 1e-10);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod atoms;
pub mod calculator;
pub mod cli;
mod errors;
pub mod screening;
pub mod table;

pub use calculator::{CalculationConfig, ZeffCalculator};
pub use errors::{Result, ZeffError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
