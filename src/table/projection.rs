/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Column projection and export of result tables
//!
//! A [`Projection`] is the rectangular row/column view that plotting or
//! spreadsheet tools consume. It renders as aligned text, CSV or JSON.

use super::{ResultTable, TableRow};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Columns available for projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    AtomicNumber,
    Symbol,
    Model,
    /// Principal quantum number n
    N,
    /// Subshell letter
    L,
    /// Azimuthal quantum number
    LNumber,
    /// "nl" label such as 2p
    Orbital,
    /// Shielding constant S
    Shielding,
    /// Effective nuclear charge Zeff
    EffectiveCharge,
    /// S / Z in percent
    ScreeningPercentage,
}

impl Column {
    /// Every column, in display order
    pub const ALL: [Column; 10] = [
        Column::AtomicNumber,
        Column::Symbol,
        Column::Model,
        Column::N,
        Column::L,
        Column::LNumber,
        Column::Orbital,
        Column::Shielding,
        Column::EffectiveCharge,
        Column::ScreeningPercentage,
    ];

    /// Z, n, l, S and Zeff
    pub const STANDARD: [Column; 6] = [
        Column::AtomicNumber,
        Column::Symbol,
        Column::N,
        Column::L,
        Column::Shielding,
        Column::EffectiveCharge,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::AtomicNumber => "Z",
            Column::Symbol => "Element",
            Column::Model => "Model",
            Column::N => "n",
            Column::L => "l",
            Column::LNumber => "l_num",
            Column::Orbital => "Orbital",
            Column::Shielding => "S",
            Column::EffectiveCharge => "Zeff",
            Column::ScreeningPercentage => "% S",
        }
    }
}

/// One projected value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Integer(u32),
    Number(f64),
    Text(String),
    /// No value (unsupported orbital)
    Empty,
}

impl Cell {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Integer(value) => Some(*value as f64),
            Cell::Number(value) => Some(*value),
            Cell::Text(_) | Cell::Empty => None,
        }
    }

    /// Render with `precision` decimals for numbers
    pub fn render(&self, precision: usize) -> String {
        match self {
            Cell::Integer(value) => value.to_string(),
            Cell::Number(value) => format!("{:.prec$}", value, prec = precision),
            Cell::Text(text) => text.clone(),
            Cell::Empty => String::new(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(4))
    }
}

impl TableRow {
    /// Value of one column for this row
    pub fn cell(&self, column: Column) -> Cell {
        let orbital = self.orbital();
        let number = |value: Option<f64>| value.map(Cell::Number).unwrap_or(Cell::Empty);
        match column {
            Column::AtomicNumber => Cell::Integer(self.atomic_number()),
            Column::Symbol => Cell::Text(self.symbol().to_string()),
            Column::Model => Cell::Text(self.model().to_string()),
            Column::N => Cell::Integer(orbital.n),
            Column::L => Cell::Text(orbital.l.letter().to_string()),
            Column::LNumber => Cell::Integer(orbital.l.l()),
            Column::Orbital => Cell::Text(orbital.to_string()),
            Column::Shielding => number(self.shielding()),
            Column::EffectiveCharge => number(self.effective_charge()),
            Column::ScreeningPercentage => number(self.screening_percentage()),
        }
    }
}

static EMPTY: Cell = Cell::Empty;

/// Rectangular view of a result table
///
/// Rows shorter than `headers` read as empty cells; extra cells are ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ResultTable {
    /// Project the table onto the given columns
    pub fn project(&self, columns: &[Column]) -> Projection {
        Projection {
            headers: columns.iter().map(|c| c.header().to_string()).collect(),
            rows: self
                .iter()
                .map(|row| columns.iter().map(|c| row.cell(*c)).collect())
                .collect(),
        }
    }
}

impl Projection {
    /// Values of one column, if it was projected
    pub fn column(&self, column: Column) -> Option<Vec<&Cell>> {
        self.column_by_header(column.header())
    }

    /// Values of the column with the given header
    pub fn column_by_header(&self, header: &str) -> Option<Vec<&Cell>> {
        let index = self.headers.iter().position(|h| h == header)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(index).unwrap_or(&EMPTY))
                .collect(),
        )
    }

    /// Cells of `row` padded or cut to the header width
    fn cells<'a>(&self, row: &'a [Cell]) -> impl Iterator<Item = &'a Cell> {
        (0..self.headers.len()).map(move |i| row.get(i).unwrap_or(&EMPTY))
    }

    /// Comma-separated values with a header line
    pub fn to_csv(&self, precision: usize) -> String {
        let mut out = self.headers.join(",");
        out.push('\n');
        for row in &self.rows {
            let line: Vec<String> = self
                .cells(row)
                .map(|c| csv_field(&c.render(precision)))
                .collect();
            out.push_str(&line.join(","));
            out.push('\n');
        }
        out
    }

    /// Column-aligned plain text table
    pub fn to_text(&self, precision: usize) -> String {
        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| self.cells(row).map(|c| c.render(precision)).collect())
            .collect();

        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                rendered
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!("{:>w$}", h, w = w))
            .collect();
        out.push_str(&header.join("  "));
        out.push('\n');
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("  "));
        out.push('\n');
        for row in &rendered {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(v, w)| format!("{:>w$}", v, w = w))
                .collect();
            out.push_str(&line.join("  "));
            out.push('\n');
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::{ModelKind, ScreeningResult};
    use crate::table::build_table;

    fn sample() -> ResultTable {
        let na_3s = ScreeningResult::new(11, "Na", "3s".parse().unwrap(), ModelKind::Slater, 8.8);
        let unsupported = TableRow::Unsupported {
            atomic_number: 92,
            symbol: "U".to_string(),
            orbital: "1s".parse().unwrap(),
            model: ModelKind::Clementi,
        };
        build_table(vec![TableRow::from(na_3s), unsupported], Default::default())
    }

    #[test]
    fn test_project_standard_columns() {
        let projection = sample().project(&Column::STANDARD);
        assert_eq!(projection.headers, ["Z", "Element", "n", "l", "S", "Zeff"]);
        assert_eq!(projection.rows[0][0], Cell::Integer(11));
        assert_eq!(projection.rows[0][3], Cell::Text("s".to_string()));
        assert_eq!(projection.rows[1][4], Cell::Empty);
    }

    #[test]
    fn test_column_lookup() {
        let projection = sample().project(&[Column::EffectiveCharge]);
        let zeff = projection.column(Column::EffectiveCharge).unwrap();
        assert!((zeff[0].as_f64().unwrap() - 2.2).abs() < 1e-10);
        assert!(projection.column(Column::Shielding).is_none());
    }

    #[test]
    fn test_csv() {
        let csv = sample().project(&[Column::Symbol, Column::Orbital, Column::Shielding]).to_csv(2);
        assert_eq!(csv, "Element,Orbital,S\nNa,3s,8.80\nU,1s,\n");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
    }

    #[test]
    fn test_text_alignment() {
        let text = sample().project(&[Column::Symbol, Column::Shielding]).to_text(1);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Element    S");
        assert_eq!(lines[2], "     Na  8.8");
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let projection = Projection {
            headers: vec!["a".to_string(), "b".to_string()],
            rows: vec![
                vec![Cell::Integer(1)],
                vec![Cell::Integer(2), Cell::Integer(3), Cell::Integer(4)],
                vec![],
            ],
        };
        let b = projection.column_by_header("b").unwrap();
        assert_eq!(b, vec![&Cell::Empty, &Cell::Integer(3), &Cell::Empty]);
        assert_eq!(projection.to_csv(0), "a,b\n1,\n2,3\n,\n");

        let text = projection.to_text(0);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], "1   ");
        assert_eq!(lines[3], "2  3");
    }

    #[test]
    fn test_json_uses_null_for_missing() {
        let json = sample().project(&[Column::Shielding]).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["rows"][1][0].is_null());
        assert_eq!(value["headers"][0], "S");
    }
}
