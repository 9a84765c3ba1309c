/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Crate-level error type returned by the calculation engine

use crate::atoms::AtomError;
use crate::screening::ScreeningError;
use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, ZeffError>;

#[derive(Error, Debug)]
pub enum ZeffError {
    /// Element resolution or configuration error
    #[error(transparent)]
    Atom(#[from] AtomError),

    /// Shielding calculation or reference data error
    #[error(transparent)]
    Screening(#[from] ScreeningError),
}

impl ZeffError {
    /// True when an element identifier could not be resolved
    pub fn is_unknown_element(&self) -> bool {
        matches!(
            self,
            ZeffError::Atom(AtomError::UnknownElement(_))
                | ZeffError::Screening(ScreeningError::Atom(AtomError::UnknownElement(_)))
        )
    }

    /// True when a Clementi-Raimondi constant was missing
    pub fn is_unsupported_orbital(&self) -> bool {
        matches!(
            self,
            ZeffError::Screening(ScreeningError::UnsupportedOrbital { .. })
        )
    }
}
