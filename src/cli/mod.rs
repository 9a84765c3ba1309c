/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! This module provides the `zeff` command-line front end: it parses the
//! arguments, runs a [`ZeffCalculator`] and renders the resulting table.

use crate::atoms::{ElementId, OrbitalOrder};
use crate::calculator::{CalculationConfig, ZeffCalculator};
use crate::screening::{ClementiTable, ModelKind};
use crate::table::{summary_projection, Cell, Column, ElementSummary, GroupBy, Projection};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

/// Effective nuclear charge from Slater's rules or Clementi-Raimondi constants
#[derive(Parser, Debug)]
#[command(name = "zeff", version, about)]
pub struct Cli {
    /// Elements by symbol, name or atomic number
    #[arg(required = true, value_name = "ELEMENT")]
    pub elements: Vec<String>,

    /// Screening model
    #[arg(short, long, value_enum, default_value_t = ModelArg::Slater)]
    pub model: ModelArg,

    /// Record orbitals without a Clementi-Raimondi constant instead of failing
    /// (always on with `--model both`)
    #[arg(long)]
    pub lenient: bool,

    /// Orbital order within each element (`--model both` always uses shell order)
    #[arg(long, value_enum, default_value_t = OrderArg::Filling)]
    pub order: OrderArg,

    /// Row grouping for several elements (`--model both` always groups by element)
    #[arg(long, value_enum, default_value_t = GroupArg::Atom)]
    pub group_by: GroupArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Number of decimal places for floating-point values
    #[arg(short, long, default_value_t = 4)]
    pub precision: usize,

    /// Clementi-Raimondi dataset in JSON instead of the bundled one
    #[arg(long, value_name = "FILE")]
    pub clementi_data: Option<PathBuf>,

    /// Compute elements in parallel
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModelArg {
    Slater,
    Clementi,
    /// Slater and Clementi side by side, one table per element
    Both,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Filling,
    Shell,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GroupArg {
    Atom,
    Orbital,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Column-aligned text
    Pretty,
    Csv,
    Json,
}

impl Cli {
    fn config(&self) -> CalculationConfig {
        CalculationConfig {
            model: match self.model {
                ModelArg::Clementi => ModelKind::Clementi,
                ModelArg::Slater | ModelArg::Both => ModelKind::Slater,
            },
            lenient: self.lenient,
            order: match self.order {
                OrderArg::Filling => OrbitalOrder::Filling,
                OrderArg::Shell => OrbitalOrder::Shell,
            },
            group_by: match self.group_by {
                GroupArg::Atom => GroupBy::Atom,
                GroupArg::Orbital => GroupBy::Orbital,
            },
            parallel: self.parallel,
        }
    }

    fn render(&self, projection: &Projection) -> anyhow::Result<String> {
        Ok(match self.format {
            OutputFormat::Pretty => projection.to_text(self.precision),
            OutputFormat::Csv => projection.to_csv(self.precision),
            OutputFormat::Json => projection.to_json()? + "\n",
        })
    }
}

/// Run the command and return the rendered output
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let loaded;
    let clementi = match &cli.clementi_data {
        Some(path) => {
            loaded = ClementiTable::from_path(path)?;
            &loaded
        }
        None => ClementiTable::bundled()?,
    };

    let ids = cli
        .elements
        .iter()
        .map(|e| e.parse::<ElementId>())
        .collect::<Result<Vec<_>, _>>()?;

    let calculator = ZeffCalculator::new(clementi).with_config(cli.config());

    if cli.model == ModelArg::Both {
        return render_summaries(cli, &calculator.summaries(&ids)?);
    }

    let table = calculator.calculate(&ids)?;
    let columns = [
        Column::AtomicNumber,
        Column::Symbol,
        Column::Orbital,
        Column::N,
        Column::L,
        Column::Shielding,
        Column::EffectiveCharge,
        Column::ScreeningPercentage,
    ];
    cli.render(&table.project(&columns))
}

/// One element of `--model both` JSON output
#[derive(Serialize)]
struct SummaryOutput<'a> {
    atomic_number: u32,
    symbol: &'a str,
    configuration: String,
    #[serde(flatten)]
    table: Projection,
}

/// Model summaries as one block per element (pretty), one table with
/// leading Z and Element columns (CSV) or one JSON array
fn render_summaries(cli: &Cli, summaries: &[ElementSummary]) -> anyhow::Result<String> {
    match cli.format {
        OutputFormat::Pretty => {
            let mut out = String::new();
            for summary in summaries {
                let config = &summary.configuration;
                out.push_str(&format!(
                    "{} (Z = {}): {}\n",
                    config.symbol(),
                    config.atomic_number(),
                    config
                ));
                out.push_str(&summary_projection(&summary.rows).to_text(cli.precision));
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Csv => {
            let mut combined = Projection {
                headers: vec![
                    Column::AtomicNumber.header().to_string(),
                    Column::Symbol.header().to_string(),
                ],
                rows: Vec::new(),
            };
            combined.headers.extend(summary_projection(&[]).headers);
            for summary in summaries {
                let config = &summary.configuration;
                for row in summary_projection(&summary.rows).rows {
                    let mut cells = vec![
                        Cell::Integer(config.atomic_number()),
                        Cell::Text(config.symbol().to_string()),
                    ];
                    cells.extend(row);
                    combined.rows.push(cells);
                }
            }
            Ok(combined.to_csv(cli.precision))
        }
        OutputFormat::Json => {
            let output: Vec<SummaryOutput> = summaries
                .iter()
                .map(|summary| SummaryOutput {
                    atomic_number: summary.configuration.atomic_number(),
                    symbol: summary.configuration.symbol(),
                    configuration: summary.configuration.to_string(),
                    table: summary_projection(&summary.rows),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&output)? + "\n")
        }
    }
}
