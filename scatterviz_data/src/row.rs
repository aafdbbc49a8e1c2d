// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rows and the loaded dataset.

use scatterviz_core::{ColId, TableData, TableId};

use crate::field::{ABBR_COL, Field, STATE_COL};

/// Table id under which a [`Dataset`] publishes its marks.
pub const TABLE_ID: TableId = TableId(1);

/// One state's record.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    /// Full state name.
    pub state: String,
    /// Two-letter abbreviation.
    pub abbr: String,
    /// Share of the population in poverty (%).
    pub poverty: f64,
    /// Median age.
    pub age: f64,
    /// Median household income.
    pub income: f64,
    /// Share lacking healthcare (%).
    pub healthcare: f64,
    /// Share of smokers (%).
    pub smokes: f64,
    /// Share of obese adults (%).
    pub obesity: f64,
}

impl Row {
    /// Value of `field` for this row. May be `NaN` when the source cell was not a number.
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Poverty => self.poverty,
            Field::Age => self.age,
            Field::Income => self.income,
            Field::Healthcare => self.healthcare,
            Field::Smokes => self.smokes,
            Field::Obesity => self.obesity,
        }
    }

    pub(crate) fn set(&mut self, field: Field, value: f64) {
        match field {
            Field::Poverty => self.poverty = value,
            Field::Age => self.age = value,
            Field::Income => self.income = value,
            Field::Healthcare => self.healthcare = value,
            Field::Smokes => self.smokes = value,
            Field::Obesity => self.obesity = value,
        }
    }
}

/// The loaded table, in file order. Read-only once built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    /// Wraps already-typed rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// All rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row at `index`.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the values of one field.
    pub fn values(&self, field: Field) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |r| r.get(field))
    }

    /// Stable per-row keys for mark identity (the row's position in the file).
    pub fn row_keys(&self) -> Vec<u64> {
        (0..self.rows.len() as u64).collect()
    }

    /// Finds a row by abbreviation.
    pub fn find_abbr(&self, abbr: &str) -> Option<(usize, &Row)> {
        self.rows.iter().enumerate().find(|(_, r)| r.abbr == abbr)
    }
}

impl TableData for Dataset {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn f64(&self, row: usize, col: ColId) -> Option<f64> {
        let field = Field::from_col(col)?;
        self.rows.get(row).map(|r| r.get(field))
    }

    fn text(&self, row: usize, col: ColId) -> Option<&str> {
        let r = self.rows.get(row)?;
        match col {
            STATE_COL => Some(&r.state),
            ABBR_COL => Some(&r.abbr),
            _ => None,
        }
    }
}
