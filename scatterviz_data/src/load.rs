// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading a [`Dataset`] from delimited text.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::LoadError;
use crate::field::Field;
use crate::row::{Dataset, Row};

/// What to do with a numeric cell that is not a number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CoercionPolicy {
    /// Coerce like a browser's unary `+`: blank cells become `0`, anything else that does not
    /// parse becomes `NaN`. Rows holding `NaN` load but are not drawn for that field.
    #[default]
    Coerce,
    /// Fail on the first cell that is not a finite number literal (blank cells included).
    Reject,
}

/// Converts cell text to a number the way a browser's unary `+` does.
///
/// Surrounding whitespace is ignored, blank text is `0`, `Infinity` and `0x`/`0o`/`0b`
/// integer literals are accepted, and everything else that is not a decimal literal is `NaN`.
pub fn coerce_number(text: &str) -> f64 {
    let t = text.trim();
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(v) = parse_prefixed_integer(t) {
        return v;
    }
    let decimal_chars = t
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if decimal_chars {
        t.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn parse_prefixed_integer(t: &str) -> Option<f64> {
    let (radix, digits) = match t.get(..2)? {
        "0x" | "0X" => (16, &t[2..]),
        "0o" | "0O" => (8, &t[2..]),
        "0b" | "0B" => (2, &t[2..]),
        _ => return None,
    };
    Some(
        u64::from_str_radix(digits, radix)
            .map(|v| v as f64)
            .unwrap_or(f64::NAN),
    )
}

struct Columns {
    state: usize,
    abbr: usize,
    fields: [usize; 6],
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or(LoadError::MissingColumn { column })
        };
        let mut fields = [0; 6];
        for (slot, field) in fields.iter_mut().zip(Field::ALL) {
            *slot = find(field.as_str())?;
        }
        Ok(Self {
            state: find("state")?,
            abbr: find("abbr")?,
            fields,
        })
    }
}

/// Reads a dataset from comma-separated text with a header row.
///
/// The header must name `state`, `abbr` and the six [`Field`] columns, in any order; other
/// columns are ignored.
pub fn load_csv<R: Read>(reader: R, policy: CoercionPolicy) -> Result<Dataset, LoadError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::Headers).from_reader(reader);
    let columns = Columns::locate(rdr.headers()?)?;

    let mut rows = Vec::new();
    let mut coerced = 0_usize;
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);
        let cell = |i: usize| record.get(i).unwrap_or_default();

        let mut row = Row {
            state: cell(columns.state).trim().to_string(),
            abbr: cell(columns.abbr).trim().to_string(),
            poverty: 0.0,
            age: 0.0,
            income: 0.0,
            healthcare: 0.0,
            smokes: 0.0,
            obesity: 0.0,
        };
        for (field, &i) in Field::ALL.into_iter().zip(&columns.fields) {
            let text = cell(i);
            let value = coerce_number(text);
            if !value.is_finite() || (policy == CoercionPolicy::Reject && text.trim().is_empty())
            {
                match policy {
                    CoercionPolicy::Reject => {
                        return Err(LoadError::InvalidNumber {
                            line,
                            column: field.as_str(),
                            value: text.to_string(),
                        });
                    }
                    CoercionPolicy::Coerce => {
                        coerced += 1;
                        tracing::warn!(
                            line,
                            column = field.as_str(),
                            text,
                            state = %row.state,
                            "non-numeric value coerced to {value}"
                        );
                    }
                }
            }
            row.set(field, value);
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(LoadError::Empty);
    }
    tracing::info!(rows = rows.len(), coerced, "dataset loaded");
    Ok(Dataset::new(rows))
}

/// Reads a dataset from a file on disk.
pub fn load_path(path: impl AsRef<Path>, policy: CoercionPolicy) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), ?policy, "loading dataset");
    let file = File::open(path)?;
    load_csv(file, policy)
}

impl Dataset {
    /// Parses a dataset from an in-memory string using [`CoercionPolicy::Coerce`].
    pub fn from_csv_str(text: &str) -> Result<Self, LoadError> {
        load_csv(text.as_bytes(), CoercionPolicy::Coerce)
    }
}
