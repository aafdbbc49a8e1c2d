// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text mark generation.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::{Brush, Color};
use scatterviz_core::{ColId, Mark, MarkId, TableData, TableId, TextAnchor, TextBaseline};

use crate::scale::ScaleLinear;

/// A single text mark spec.
#[derive(Clone, Debug)]
pub struct TextMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Text rotation angle in degrees.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
    /// Class names.
    pub classes: Vec<&'static str>,
    /// Extra attributes.
    pub attrs: Vec<(&'static str, String)>,
    /// Rendering order hint.
    pub z_index: i32,
}

impl TextMarkSpec {
    /// Creates a new text mark spec with default styling.
    pub fn new(id: MarkId, pos: Point, text: impl Into<String>) -> Self {
        Self {
            id,
            pos,
            text: text.into(),
            font_size: 12.0,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
            fill: Brush::Solid(Color::BLACK),
            classes: Vec::new(),
            attrs: Vec::new(),
            z_index: crate::z_order::AXIS_TITLES,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the text rotation angle (degrees).
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Adds a class name.
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    /// Adds an attribute.
    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        let mut b = Mark::builder(self.id)
            .text()
            .z_index(self.z_index)
            .x_const(self.pos.x)
            .y_const(self.pos.y)
            .text_const(self.text.clone())
            .font_size_const(self.font_size)
            .fill_brush_const(self.fill.clone())
            .text_anchor(self.anchor)
            .text_baseline(self.baseline)
            .angle_const(self.angle);
        for &class in &self.classes {
            b = b.class(class);
        }
        for (name, value) in &self.attrs {
            b = b.attr(*name, value.clone());
        }
        b.build()
    }
}

/// One text mark per row, placed by two scales (e.g. abbreviations inside scatter points).
#[derive(Clone, Debug)]
pub struct RowTextMarkSpec {
    /// Source table id.
    pub table: TableId,
    /// Id layer, so these marks don't collide with other per-row marks of the same table.
    pub layer: u8,
    /// Column for x values.
    pub x: ColId,
    /// Column for y values.
    pub y: ColId,
    /// Text column.
    pub text: ColId,
    /// X scale mapping data x into scene x.
    pub x_scale: ScaleLinear,
    /// Y scale mapping data y into scene y.
    pub y_scale: ScaleLinear,
    /// Vertical offset added to the scaled y.
    pub dy: f64,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Class name emitted on every mark.
    pub class: &'static str,
    /// Rendering order hint.
    pub z_index: i32,
}

impl RowTextMarkSpec {
    /// Creates a spec with centered, 12px white text in layer 1.
    pub fn new(
        table: TableId,
        x: ColId,
        y: ColId,
        text: ColId,
        x_scale: ScaleLinear,
        y_scale: ScaleLinear,
    ) -> Self {
        Self {
            table,
            layer: 1,
            x,
            y,
            text,
            x_scale,
            y_scale,
            dy: 0.0,
            font_size: 12.0,
            fill: Brush::Solid(Color::WHITE),
            class: "rowText",
            z_index: crate::z_order::SERIES_LABELS,
        }
    }

    /// Sets the vertical offset.
    pub fn with_dy(mut self, dy: f64) -> Self {
        self.dy = dy;
        self
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the class name.
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }

    /// Sets the id layer.
    pub fn with_layer(mut self, layer: u8) -> Self {
        self.layer = layer;
        self
    }

    /// Generates marks for the provided row keys, skipping rows without a finite position.
    pub fn marks(&self, data: &dyn TableData, row_keys: &[u64]) -> Vec<Mark> {
        row_keys
            .iter()
            .copied()
            .enumerate()
            .filter_map(|(row, row_key)| {
                let x = data.f64(row, self.x).filter(|v| v.is_finite())?;
                let y = data.f64(row, self.y).filter(|v| v.is_finite())?;
                let text = data.text(row, self.text).unwrap_or_default();
                Some(
                    Mark::builder(MarkId::for_row_layer(self.table, self.layer, row_key))
                        .text()
                        .z_index(self.z_index)
                        .class(self.class)
                        .attr("row", alloc::format!("{row}"))
                        .x_const(self.x_scale.map(x))
                        .y_const(self.y_scale.map(y) + self.dy)
                        .text_const(text)
                        .font_size_const(self.font_size)
                        .fill_brush_const(self.fill.clone())
                        .text_anchor_middle()
                        .text_baseline(TextBaseline::Alphabetic)
                        .build(),
                )
            })
            .collect()
    }
}
