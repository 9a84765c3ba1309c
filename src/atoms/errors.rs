/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the atoms module

/// Error types for the atoms module
#[derive(Debug, thiserror::Error)]
pub enum AtomError {
    #[error("Unknown element: {0}")]
    UnknownElement(String),

    #[error("Invalid electron configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Result type for atom operations
pub type Result<T> = std::result::Result<T, AtomError>;
