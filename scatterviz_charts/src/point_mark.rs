// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;
use peniko::{Brush, Color};
use scatterviz_core::{ColId, Mark, MarkId, TableData, TableId};

use crate::scale::ScaleLinear;

/// A circle-per-row point mark derived from a table.
///
/// This generates one [`scatterviz_core::MarkKind::Circle`] mark per row key, centered at
/// `(x_scale(row[x]), y_scale(row[y]))`. Each mark carries a `row` attribute holding the row
/// index so hosts can map pointer events back to data.
#[derive(Clone, Debug)]
pub struct PointMarkSpec {
    /// Source table id.
    pub table: TableId,
    /// Column for x values.
    pub x: ColId,
    /// Column for y values.
    pub y: ColId,
    /// X scale mapping data x into scene x.
    pub x_scale: ScaleLinear,
    /// Y scale mapping data y into scene y.
    pub y_scale: ScaleLinear,
    /// Circle radius in scene coordinates.
    pub radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Class name emitted on every mark.
    pub class: &'static str,
    /// Rendering order hint.
    pub z_index: i32,
}

impl PointMarkSpec {
    /// Creates a point mark spec with a radius of 14.
    pub fn new(
        table: TableId,
        x: ColId,
        y: ColId,
        x_scale: ScaleLinear,
        y_scale: ScaleLinear,
    ) -> Self {
        Self {
            table,
            x,
            y,
            x_scale,
            y_scale,
            radius: 14.0,
            fill: Brush::Solid(Color::from_rgb8(0x89, 0xbd, 0xd3)),
            class: "point",
            z_index: crate::z_order::SERIES_POINTS,
        }
    }

    /// Sets the circle radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the class name.
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Center of the glyph for `row`, or `None` if either value is missing or non-finite.
    pub fn center(&self, data: &dyn TableData, row: usize) -> Option<Point> {
        let x = data.f64(row, self.x).filter(|v| v.is_finite())?;
        let y = data.f64(row, self.y).filter(|v| v.is_finite())?;
        Some(Point::new(self.x_scale.map(x), self.y_scale.map(y)))
    }

    /// Generates marks for the provided row keys (row `i` of `data` is keyed by `row_keys[i]`).
    ///
    /// Mark identity is derived from `(table_id, row_key)` so it stays stable across frames.
    /// Rows without a finite position are skipped.
    pub fn marks(&self, data: &dyn TableData, row_keys: &[u64]) -> Vec<Mark> {
        row_keys
            .iter()
            .copied()
            .enumerate()
            .filter_map(|(row, row_key)| {
                let c = self.center(data, row)?;
                Some(
                    Mark::builder(MarkId::for_row(self.table, row_key))
                        .circle()
                        .z_index(self.z_index)
                        .class(self.class)
                        .attr("row", alloc::format!("{row}"))
                        .x_const(c.x)
                        .y_const(c.y)
                        .radius_const(self.radius)
                        .fill_brush_const(self.fill.clone())
                        .build(),
                )
            })
            .collect()
    }
}
