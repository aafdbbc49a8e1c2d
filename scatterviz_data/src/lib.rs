// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed access to the state health/poverty/income table.
//!
//! The input is comma-separated text with a header row. Each data row becomes a [`Row`] with
//! a state name, an abbreviation and six numeric metrics ([`Field`]). A [`Dataset`] keeps the
//! rows in file order and implements [`scatterviz_core::TableData`], so chart code can read
//! fields by column id.
//!
//! ```
//! use scatterviz_data::{Dataset, Field};
//!
//! let ds = Dataset::from_csv_str(
//!     "state,abbr,poverty,age,income,healthcare,smokes,obesity\n\
//!      Ohio,OH,14.8,39.4,49308,11.3,21.6,29.2",
//! )
//! .unwrap();
//! assert_eq!(ds.rows()[0].get(Field::Poverty), 14.8);
//! ```

mod error;
mod field;
mod load;
mod row;

pub use error::{FieldParseError, LoadError};
pub use field::{ABBR_COL, Field, STATE_COL};
pub use load::{CoercionPolicy, coerce_number, load_csv, load_path};
pub use row::{Dataset, Row, TABLE_ID};
