// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clickable axis option labels.
//!
//! An axis can offer several candidate fields. Each candidate is drawn as a text label next to
//! the axis; exactly one of them carries the `active` class and the rest carry `inactive`.
//! Hosts route clicks back through [`OptionLabelsSpec::hit_test`].

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, Point, Rect};
use peniko::{Brush, Color};
use scatterviz_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::axis::AxisOrient;
use crate::measure::TextMeasurer;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// One selectable option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionLabel {
    /// Label text shown to the user.
    pub text: String,
    /// Machine value, emitted as the `value` attribute.
    pub value: &'static str,
}

impl OptionLabel {
    /// Creates an option.
    pub fn new(value: &'static str, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}

/// A stack of option labels for one axis.
///
/// Bottom-axis labels are centered under the plot and stacked downwards; left-axis labels
/// are rotated by -90° and stacked leftwards, centered on the plot's vertical midline.
#[derive(Clone, Debug)]
pub struct OptionLabelsSpec {
    /// Stable-id base; label `i` uses `id_base + i`.
    pub id_base: u64,
    /// Axis name emitted as the `axis` attribute (e.g. `"x"`).
    pub axis: &'static str,
    /// Which side of the plot the labels sit on.
    pub orient: AxisOrient,
    /// The options, in display order.
    pub options: Vec<OptionLabel>,
    /// Index of the active option.
    pub active: usize,
    /// Distance from the plot edge to the first label.
    pub offset: f64,
    /// Distance between consecutive labels.
    pub spacing: f64,
    /// Font size.
    pub font_size: f64,
    /// Fill for the active label.
    pub active_fill: Brush,
    /// Fill for the inactive labels.
    pub inactive_fill: Brush,
}

impl OptionLabelsSpec {
    /// Creates a label stack with 20px spacing.
    ///
    /// Bottom labels start 40px below the plot, left labels 40px left of it.
    pub fn new(
        id_base: u64,
        axis: &'static str,
        orient: AxisOrient,
        options: Vec<OptionLabel>,
    ) -> Self {
        Self {
            id_base,
            axis,
            orient,
            options,
            active: 0,
            offset: 40.0,
            spacing: 20.0,
            font_size: 14.0,
            active_fill: Brush::Solid(Color::BLACK),
            inactive_fill: Brush::Solid(Color::from_rgb8(0xaa, 0xaa, 0xaa)),
        }
    }

    /// Sets the active option by index.
    pub fn with_active(mut self, active: usize) -> Self {
        self.active = active;
        self
    }

    /// Sets the active option by value; unknown values leave the selection unchanged.
    pub fn with_active_value(mut self, value: &str) -> Self {
        if let Some(i) = self.options.iter().position(|o| o.value == value) {
            self.active = i;
        }
        self
    }

    /// Sets the distance from the plot edge to the first label.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the distance between consecutive labels.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    fn anchor(&self, plot: Rect, i: usize) -> Point {
        let step = self.offset + self.spacing * i as f64;
        match self.orient {
            AxisOrient::Bottom => Point::new((plot.x0 + plot.x1) * 0.5, plot.y1 + step),
            AxisOrient::Left => Point::new(plot.x0 - step, (plot.y0 + plot.y1) * 0.5),
        }
    }

    fn angle(&self) -> f64 {
        match self.orient {
            AxisOrient::Bottom => 0.0,
            AxisOrient::Left => -90.0,
        }
    }

    fn text_spec(&self, plot: Rect, i: usize, option: &OptionLabel) -> TextMarkSpec {
        let active = i == self.active;
        let spec = TextMarkSpec::new(
            MarkId::from_raw(self.id_base + i as u64),
            self.anchor(plot, i),
            option.text.clone(),
        )
        .with_font_size(self.font_size)
        .with_anchor(TextAnchor::Middle)
        .with_baseline(TextBaseline::Middle)
        .with_angle(self.angle())
        .with_z_index(z_order::AXIS_TITLES)
        .with_class("aText")
        .with_class(if active { "active" } else { "inactive" })
        .with_attr("axis", self.axis)
        .with_attr("value", option.value);
        if active {
            spec.with_fill(self.active_fill.clone())
        } else {
            spec.with_fill(self.inactive_fill.clone())
        }
    }

    /// Generates one text mark per option.
    pub fn marks(&self, plot: Rect) -> Vec<Mark> {
        self.options
            .iter()
            .enumerate()
            .map(|(i, o)| self.text_spec(plot, i, o).mark())
            .collect()
    }

    /// Approximate bounds of option `i`, after rotation.
    pub fn label_bounds(&self, plot: Rect, i: usize, measurer: &dyn TextMeasurer) -> Option<Rect> {
        let option = self.options.get(i)?;
        let (w, h) = measurer.measure(&option.text, self.font_size);
        let local = Rect::new(-0.5 * w, -0.5 * h, 0.5 * w, 0.5 * h);
        let xf = Affine::translate(self.anchor(plot, i).to_vec2())
            * Affine::rotate(self.angle().to_radians());
        Some(xf.transform_rect_bbox(local))
    }

    /// Returns the option under `point`, if any.
    pub fn hit_test(
        &self,
        plot: Rect,
        point: Point,
        measurer: &dyn TextMeasurer,
    ) -> Option<&OptionLabel> {
        (0..self.options.len())
            .find(|&i| {
                self.label_bounds(plot, i, measurer)
                    .is_some_and(|r| r.contains(point))
            })
            .and_then(|i| self.options.get(i))
    }
}
