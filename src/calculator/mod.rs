/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Calculation engine
//!
//! Ties element lookup, the screening models and the table builder
//! together: resolve a list of elements, screen every occupied orbital
//! with the configured model and assemble a [`ResultTable`](crate::table::ResultTable).

mod config;
mod engine;

pub use config::CalculationConfig;
pub use engine::ZeffCalculator;
