// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! An axis is a single [`AxisSpec`] with an `orient` of `bottom` or `left`. Marks are placed
//! the way d3's `axisBottom`/`axisLeft` place them: a domain line along the plot edge, outward
//! ticks at each "nice" tick value and a label past each tick.
//!
//! Tick marks are keyed by tick index, so when the domain changes an animator tweens each tick
//! from its old position to its new one.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::{Brush, Color};
use scatterviz_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::format::format_tick_with_step;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::{ScaleLinear, ScaleLinearSpec};
use crate::z_order;

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Paint for the domain line and ticks.
    pub rule: Brush,
    /// Stroke width for the domain line and ticks.
    pub rule_width: f64,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            rule: Brush::Solid(Color::BLACK),
            rule_width: 1.0,
            label_fill: Brush::Solid(Color::BLACK),
            label_font_size: 10.0,
        }
    }
}

/// Axis orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis placed below the plot area.
    Bottom,
    /// A vertical axis placed to the left of the plot area.
    Left,
}

/// An axis specification.
#[derive(Clone, Debug)]
pub struct AxisSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// The axis scale specification.
    pub scale: ScaleLinearSpec,
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Approximate number of ticks.
    pub tick_count: usize,
    /// Tick line length, pointing away from the plot.
    pub tick_size: f64,
    /// Gap between the tick end and its label.
    pub tick_padding: f64,
    /// Axis styling.
    pub style: AxisStyle,
}

impl AxisSpec {
    /// Creates an axis with d3's defaults: ten ticks, size 6, padding 3.
    pub fn new(id_base: u64, scale: ScaleLinearSpec, orient: AxisOrient) -> Self {
        Self {
            id_base,
            scale,
            orient,
            tick_count: 10,
            tick_size: 6.0,
            tick_padding: 3.0,
            style: AxisStyle::default(),
        }
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom(id_base: u64, scale: ScaleLinearSpec) -> Self {
        Self::new(id_base, scale, AxisOrient::Bottom)
    }

    /// Convenience constructor for a `left` axis.
    pub fn left(id_base: u64, scale: ScaleLinearSpec) -> Self {
        Self::new(id_base, scale, AxisOrient::Left)
    }

    /// Set the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Set tick size in scene coordinates.
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Set tick padding in scene coordinates.
    pub fn with_tick_padding(mut self, tick_padding: f64) -> Self {
        self.tick_padding = tick_padding;
        self
    }

    /// Set the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the scale mapping axis values into plot coordinates.
    ///
    /// Vertical axes map the domain bottom-up.
    pub fn scale(&self, plot: Rect) -> ScaleLinear {
        let range = match self.orient {
            AxisOrient::Bottom => (plot.x0, plot.x1),
            AxisOrient::Left => (plot.y1, plot.y0),
        };
        self.scale.instantiate(range)
    }

    /// Tick values and the formatted label for each.
    pub fn tick_labels(&self) -> Vec<(f64, alloc::string::String)> {
        let tmp = ScaleLinear::new(self.scale.domain, (0.0, 1.0));
        let step = tmp.tick_step(self.tick_count);
        tmp.ticks(self.tick_count)
            .into_iter()
            .map(|v| (v, format_tick_with_step(v, step)))
            .collect()
    }

    /// Generate axis marks for the given plot rectangle.
    pub fn marks(&self, plot: Rect) -> Vec<Mark> {
        let scale = self.scale(plot);
        let tick_size = self.tick_size.abs();
        let label_offset = tick_size + self.tick_padding.max(0.0);
        let mut out = Vec::new();

        let domain = match self.orient {
            AxisOrient::Bottom => RuleMarkSpec::horizontal(
                MarkId::from_raw(self.id_base),
                plot.y1,
                plot.x0,
                plot.x1,
            ),
            AxisOrient::Left => {
                RuleMarkSpec::vertical(MarkId::from_raw(self.id_base), plot.x0, plot.y0, plot.y1)
            }
        };
        out.push(
            domain
                .with_stroke(self.style.rule.clone(), self.style.rule_width)
                .with_class("domain")
                .mark(),
        );

        for (i, (v, label)) in self.tick_labels().into_iter().enumerate() {
            let at = scale.map(v);
            let tick_id = MarkId::from_raw(self.id_base + 1 + i as u64);
            let label_id = MarkId::from_raw(self.id_base + 1000 + i as u64);
            let (tick, label_mark) = match self.orient {
                AxisOrient::Bottom => (
                    RuleMarkSpec::vertical(tick_id, at, plot.y1, plot.y1 + tick_size),
                    Mark::builder(label_id)
                        .text()
                        .x_const(at)
                        .y_const(plot.y1 + label_offset)
                        .text_anchor_middle()
                        .text_baseline(TextBaseline::Hanging),
                ),
                AxisOrient::Left => (
                    RuleMarkSpec::horizontal(tick_id, at, plot.x0 - tick_size, plot.x0),
                    Mark::builder(label_id)
                        .text()
                        .x_const(plot.x0 - label_offset)
                        .y_const(at)
                        .text_anchor(TextAnchor::End)
                        .text_baseline(TextBaseline::Middle),
                ),
            };
            out.push(
                tick.with_stroke(self.style.rule.clone(), self.style.rule_width)
                    .with_class("tick")
                    .mark(),
            );
            out.push(
                label_mark
                    .z_index(z_order::AXIS_LABELS)
                    .class("tick")
                    .text_const(label)
                    .font_size_const(self.style.label_font_size)
                    .fill_brush_const(self.style.label_fill.clone())
                    .build(),
            );
        }

        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::String;

    use scatterviz_core::{MarkKind, MarkPayload};

    use super::*;

    fn texts(marks: &[Mark]) -> Vec<String> {
        marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn bottom_axis_places_ticks_below_the_plot() {
        let plot = Rect::new(0.0, 0.0, 100.0, 50.0);
        let axis = AxisSpec::bottom(10, ScaleLinearSpec::new((0.0, 10.0))).with_tick_count(5);
        let marks = axis.marks(plot);

        assert_eq!(texts(&marks), ["0", "2", "4", "6", "8", "10"]);

        let label = marks
            .iter()
            .find(|m| m.id == MarkId::from_raw(10 + 1000 + 1))
            .expect("second tick label");
        let MarkPayload::Text(t) = &label.payload else {
            panic!("expected text");
        };
        assert_eq!(t.pos.x, 20.0);
        assert_eq!(t.pos.y, 50.0 + 6.0 + 3.0);
        assert_eq!(t.anchor, TextAnchor::Middle);

        let tick = marks
            .iter()
            .find(|m| m.id == MarkId::from_raw(10 + 2))
            .expect("second tick");
        assert_eq!(tick.kind(), MarkKind::Path);
        assert!(tick.has_class("tick"));
        let bounds = tick.payload.bounds().expect("path bounds");
        assert_eq!(bounds.y0, 50.0);
        assert_eq!(bounds.y1, 56.0);
    }

    #[test]
    fn left_axis_maps_domain_bottom_up() {
        let plot = Rect::new(0.0, 0.0, 100.0, 50.0);
        let axis = AxisSpec::left(20, ScaleLinearSpec::new((0.0, 10.0))).with_tick_count(5);
        let scale = axis.scale(plot);
        assert_eq!(scale.map(0.0), 50.0);
        assert_eq!(scale.map(10.0), 0.0);

        let marks = axis.marks(plot);
        let domain = marks
            .iter()
            .find(|m| m.has_class("domain"))
            .expect("domain line");
        assert_eq!(domain.id, MarkId::from_raw(20));

        let last_label = marks
            .iter()
            .find(|m| m.id == MarkId::from_raw(20 + 1000 + 5))
            .expect("top tick label");
        let MarkPayload::Text(t) = &last_label.payload else {
            panic!("expected text");
        };
        assert_eq!(t.text, "10");
        assert_eq!(t.pos.x, -9.0);
        assert_eq!(t.pos.y, 0.0);
        assert_eq!(t.anchor, TextAnchor::End);
    }

    #[test]
    fn labels_group_thousands() {
        let axis = AxisSpec::bottom(0, ScaleLinearSpec::new((35_000.0, 80_000.0)));
        let labels: Vec<String> = axis.tick_labels().into_iter().map(|(_, s)| s).collect();
        assert_eq!(labels.first().map(String::as_str), Some("35,000"));
        assert_eq!(labels.last().map(String::as_str), Some("80,000"));
    }
}
