// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The six numeric metrics of a row.

use core::fmt;
use core::str::FromStr;

use scatterviz_core::ColId;

use crate::error::FieldParseError;

/// Column id of the state name.
pub const STATE_COL: ColId = ColId(0);
/// Column id of the state abbreviation.
pub const ABBR_COL: ColId = ColId(1);

/// A numeric metric column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Share of the population in poverty (%).
    Poverty,
    /// Median age.
    Age,
    /// Median household income.
    Income,
    /// Share lacking healthcare (%).
    Healthcare,
    /// Share of smokers (%).
    Smokes,
    /// Share of obese adults (%).
    Obesity,
}

impl Field {
    /// All fields, in column order.
    pub const ALL: [Self; 6] = [
        Self::Poverty,
        Self::Age,
        Self::Income,
        Self::Healthcare,
        Self::Smokes,
        Self::Obesity,
    ];

    /// Header name of this field in the data file.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Poverty => "poverty",
            Self::Age => "age",
            Self::Income => "income",
            Self::Healthcare => "healthcare",
            Self::Smokes => "smokes",
            Self::Obesity => "obesity",
        }
    }

    /// Column id used when reading this field through `TableData`.
    pub const fn col(self) -> ColId {
        ColId(2 + self as u32)
    }

    /// Inverse of [`Field::col`].
    pub fn from_col(col: ColId) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.col() == col)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| FieldParseError::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "wealth".parse::<Field>().unwrap_err();
        assert_eq!(err.to_string(), "unknown field name `wealth`");
        assert!("Poverty".parse::<Field>().is_err());
    }

    #[test]
    fn columns_do_not_collide_with_text_columns() {
        assert_eq!(Field::Poverty.col(), ColId(2));
        assert_eq!(Field::Obesity.col(), ColId(7));
        assert_eq!(Field::from_col(ColId(4)), Some(Field::Income));
        assert_eq!(Field::from_col(STATE_COL), None);
        assert_eq!(Field::from_col(ABBR_COL), None);
    }
}
