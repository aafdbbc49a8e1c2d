// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use thiserror::Error;

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The delimited text could not be read or tokenized.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The underlying reader failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required header column is absent.
    #[error("missing column `{column}`")]
    MissingColumn {
        /// The header name that was expected.
        column: &'static str,
    },

    /// A numeric cell could not be parsed (strict loading only).
    #[error("invalid number {value:?} in column `{column}` on line {line}")]
    InvalidNumber {
        /// 1-based line number of the record.
        line: u64,
        /// Header name of the offending column.
        column: &'static str,
        /// The raw cell text.
        value: String,
    },

    /// The input has a header but no data rows.
    #[error("dataset has no rows")]
    Empty,
}

/// An unknown field name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown field name `{name}`")]
pub struct FieldParseError {
    name: String,
}

impl FieldParseError {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}
