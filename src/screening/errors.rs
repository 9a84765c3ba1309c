/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the screening module

use crate::atoms::{AtomError, OrbitalLabel};
use thiserror::Error;

/// Result type for screening operations
pub type Result<T> = std::result::Result<T, ScreeningError>;

/// Screening-specific errors
#[derive(Error, Debug)]
pub enum ScreeningError {
    /// The requested subshell is not occupied in the configuration
    #[error("Invalid orbital: {orbital} is not occupied in {symbol}")]
    InvalidOrbital { symbol: String, orbital: OrbitalLabel },

    /// No tabulated screening constant exists for this (Z, orbital) pair
    #[error("Unsupported orbital: no Clementi-Raimondi constant for {orbital} of Z = {atomic_number}")]
    UnsupportedOrbital {
        atomic_number: u32,
        orbital: OrbitalLabel,
    },

    /// The reference dataset could not be loaded
    #[error("Reference data load error: {0}")]
    ReferenceDataLoad(String),

    /// Error from the atoms module
    #[error("Atom error: {0}")]
    Atom(#[from] AtomError),
}
