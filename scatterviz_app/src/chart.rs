// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark generation for the whole chart.
//!
//! Everything here is a pure function of `(dataset, config, selection, scales)`; the
//! controller owns the state and diffing.

use kurbo::Point;
use scatterviz_charts::{
    AxisSpec, OptionLabel, OptionLabelsSpec, PointMarkSpec, RowTextMarkSpec, ScaleLinear,
    ScaleLinearSpec, TextMeasurer,
};
use scatterviz_core::{Mark, MarkKind, MarkPayload};
use scatterviz_data::{ABBR_COL, Dataset, TABLE_ID};

use crate::config::ScatterConfig;
use crate::scales::{Orientation, build_scale};
use crate::selection::{Axis, AxisField, Selection, XField, YField};

/// Id base of the x axis marks.
pub const X_AXIS_ID: u64 = 0x10_000;
/// Id base of the y axis marks.
pub const Y_AXIS_ID: u64 = 0x20_000;
/// Id base of the x option labels.
pub const X_LABELS_ID: u64 = 0x30_000;
/// Id base of the y option labels.
pub const Y_LABELS_ID: u64 = 0x30_100;

/// Class of the per-row circles.
pub const CIRCLE_CLASS: &str = "stateCircle";
/// Class of the per-row abbreviation text.
pub const TEXT_CLASS: &str = "stateText";

/// The two scales of the current selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScales {
    /// Horizontal scale.
    pub x: ScaleLinear,
    /// Vertical scale.
    pub y: ScaleLinear,
}

impl ChartScales {
    /// Builds both scales for `selection`.
    pub fn build(dataset: &Dataset, config: &ScatterConfig, selection: Selection) -> Self {
        Self {
            x: axis_scale(dataset, config, selection, Axis::X),
            y: axis_scale(dataset, config, selection, Axis::Y),
        }
    }

    /// Rebuilds the scale of one axis, leaving the other as is.
    pub fn rebuild(
        &mut self,
        dataset: &Dataset,
        config: &ScatterConfig,
        selection: Selection,
        axis: Axis,
    ) {
        let scale = axis_scale(dataset, config, selection, axis);
        match axis {
            Axis::X => self.x = scale,
            Axis::Y => self.y = scale,
        }
    }

    /// The scale of `axis`.
    pub fn get(&self, axis: Axis) -> ScaleLinear {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

fn axis_scale(
    dataset: &Dataset,
    config: &ScatterConfig,
    selection: Selection,
    axis: Axis,
) -> ScaleLinear {
    let field = selection.field(axis);
    match axis {
        Axis::X => build_scale(
            dataset,
            field,
            config.plot_width(),
            config.x_padding.0,
            config.x_padding.1,
            Orientation::Horizontal,
        ),
        Axis::Y => build_scale(
            dataset,
            field,
            config.plot_height(),
            config.y_padding.0,
            config.y_padding.1,
            Orientation::Vertical,
        ),
    }
}

/// The axis spec for `axis` drawn with `scale`.
pub fn axis_spec(axis: Axis, scale: ScaleLinear, config: &ScatterConfig) -> AxisSpec {
    let spec = ScaleLinearSpec::new(scale.domain());
    match axis {
        Axis::X => AxisSpec::bottom(X_AXIS_ID, spec),
        Axis::Y => AxisSpec::left(Y_AXIS_ID, spec),
    }
    .with_tick_count(config.tick_count)
}

/// Domain line, ticks and tick labels of one axis.
pub fn axis_marks(axis: Axis, scales: &ChartScales, config: &ScatterConfig) -> Vec<Mark> {
    axis_spec(axis, scales.get(axis), config).marks(config.plot_rect())
}

/// One circle and one abbreviation per drawable row.
pub fn row_marks(
    dataset: &Dataset,
    config: &ScatterConfig,
    selection: Selection,
    scales: &ChartScales,
) -> Vec<Mark> {
    let keys = dataset.row_keys();
    let x = selection.x.field().col();
    let y = selection.y.field().col();
    let mut marks = PointMarkSpec::new(TABLE_ID, x, y, scales.x, scales.y)
        .with_radius(config.radius)
        .with_class(CIRCLE_CLASS)
        .marks(dataset, &keys);
    marks.extend(
        RowTextMarkSpec::new(TABLE_ID, x, y, ABBR_COL, scales.x, scales.y)
            .with_dy(config.text_offset)
            .with_font_size(config.abbr_font_size)
            .with_class(TEXT_CLASS)
            .marks(dataset, &keys),
    );
    marks
}

/// The option label stack of one axis, with the selected field marked active.
pub fn option_labels(axis: Axis, selection: Selection, config: &ScatterConfig) -> OptionLabelsSpec {
    let (id_base, orient, options, offset) = match axis {
        Axis::X => (
            X_LABELS_ID,
            scatterviz_charts::AxisOrient::Bottom,
            XField::ALL
                .into_iter()
                .map(|x| OptionLabel::new(x.field().as_str(), x.label()))
                .collect::<Vec<_>>(),
            config.x_label_offset,
        ),
        Axis::Y => (
            Y_LABELS_ID,
            scatterviz_charts::AxisOrient::Left,
            YField::ALL
                .into_iter()
                .map(|y| OptionLabel::new(y.field().as_str(), y.label()))
                .collect::<Vec<_>>(),
            config.y_label_offset,
        ),
    };
    OptionLabelsSpec::new(id_base, axis.as_str(), orient, options)
        .with_active_value(selection.field(axis).as_str())
        .with_offset(offset)
        .with_spacing(config.label_spacing)
        .with_font_size(config.label_font_size)
}

/// Every mark of the chart for `selection`, in chart-group coordinates.
pub fn render(
    dataset: &Dataset,
    config: &ScatterConfig,
    selection: Selection,
    scales: &ChartScales,
) -> Vec<Mark> {
    let plot = config.plot_rect();
    let mut marks = axis_marks(Axis::X, scales, config);
    marks.extend(axis_marks(Axis::Y, scales, config));
    marks.extend(row_marks(dataset, config, selection, scales));
    marks.extend(option_labels(Axis::X, selection, config).marks(plot));
    marks.extend(option_labels(Axis::Y, selection, config).marks(plot));
    marks
}

/// Row of the topmost marker containing `point`.
///
/// `marks` must be sorted back to front (as an animation frame is), so the last hit wins.
pub fn row_at(marks: &[Mark], point: Point) -> Option<usize> {
    marks
        .iter()
        .rev()
        .filter(|m| m.kind() == MarkKind::Circle && m.has_class(CIRCLE_CLASS))
        .find(|m| match &m.payload {
            MarkPayload::Circle(c) => c.center.distance(point) <= c.radius,
            _ => false,
        })
        .and_then(|m| m.attr("row")?.parse().ok())
}

/// Option label under `point`, if any.
pub fn label_at(
    config: &ScatterConfig,
    selection: Selection,
    point: Point,
    measurer: &dyn TextMeasurer,
) -> Option<AxisField> {
    let plot = config.plot_rect();
    [Axis::X, Axis::Y].into_iter().find_map(|axis| {
        let labels = option_labels(axis, selection, config);
        let hit = labels.hit_test(plot, point, measurer)?;
        AxisField::from_attrs(axis.as_str(), hit.value).ok()
    })
}
