// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row-oriented table access.

use core::fmt::Debug;

use crate::ColId;

/// Read access to a table of rows.
///
/// Mark generators read through this trait so they don't depend on a concrete row type.
pub trait TableData: Debug {
    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Numeric value at `(row, col)`, if the column is numeric and the row exists.
    fn f64(&self, row: usize, col: ColId) -> Option<f64>;

    /// Text value at `(row, col)`, if the column is textual and the row exists.
    fn text(&self, row: usize, col: ColId) -> Option<&str> {
        let _ = (row, col);
        None
    }
}
