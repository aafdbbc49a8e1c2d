// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover annotations for markers.

use kurbo::{Point, Vec2};
use scatterviz_data::{Field, Row};

use crate::markup::escape_html;
use crate::selection::Selection;

/// Prefix printed before a field's value in the tooltip.
pub fn field_label(field: Field) -> &'static str {
    match field {
        Field::Poverty => "Poverty %:",
        Field::Age => "Age (Median):",
        Field::Income => "HH Income (Median):",
        Field::Healthcare => "Healthcare %:",
        Field::Smokes => "Smokes %:",
        Field::Obesity => "Obese %:",
    }
}

/// Formats a number the way a browser prints it when concatenated into a string.
///
/// Integral values have no fractional part (`11`), other values use the shortest
/// representation that round-trips (`14.8`), and non-finite values print as `NaN`,
/// `Infinity` or `-Infinity`.
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let abs = v.abs();
    if (1e-6..1e21).contains(&abs) {
        format!("{v}")
    } else {
        // Exponent form, with an explicit `+` on positive exponents.
        let s = format!("{v:e}");
        match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        }
    }
}

/// What the tooltip shows and where.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    /// Markup for the tooltip body.
    pub html: String,
    /// Bottom-center of the tooltip box, in chart-group coordinates.
    pub position: Point,
    /// Row the tooltip describes.
    pub row: usize,
}

/// The marker tooltip.
///
/// It is bound to the current selection so it always labels the plotted fields; binding again
/// replaces the previous labels.
#[derive(Clone, Debug)]
pub struct Tooltip {
    x: Field,
    y: Field,
    offset: Vec2,
    content: Option<TooltipContent>,
}

impl Tooltip {
    /// Creates a hidden tooltip for `selection`, displaced by `offset` from its anchor.
    pub fn new(selection: Selection, offset: Vec2) -> Self {
        Self {
            x: selection.x.field(),
            y: selection.y.field(),
            offset,
            content: None,
        }
    }

    /// Rebinds the tooltip to `selection`.
    ///
    /// A visible tooltip keeps showing its old text until the pointer next enters a marker.
    pub fn bind(&mut self, selection: Selection) {
        self.x = selection.x.field();
        self.y = selection.y.field();
    }

    /// Fields the tooltip currently labels, as `(x, y)`.
    pub fn fields(&self) -> (Field, Field) {
        (self.x, self.y)
    }

    /// Markup for `row`: `"<state><br><x label> <x><br><y label> <y>"`.
    pub fn html(&self, row: &Row) -> String {
        format!(
            "{}<br>{} {}<br>{} {}",
            escape_html(&row.state),
            field_label(self.x),
            format_number(row.get(self.x)),
            field_label(self.y),
            format_number(row.get(self.y)),
        )
    }

    /// Shows the tooltip for row `index` anchored at `anchor` (the top-center of the marker).
    pub fn show(&mut self, index: usize, row: &Row, anchor: Point) -> &TooltipContent {
        let html = self.html(row);
        self.content.insert(TooltipContent {
            html,
            position: anchor + self.offset,
            row: index,
        })
    }

    /// Hides the tooltip.
    pub fn hide(&mut self) {
        self.content = None;
    }

    /// The visible content, if any.
    pub fn content(&self) -> Option<&TooltipContent> {
        self.content.as_ref()
    }
}

/// A hover transition reported by [`PointerTracker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    /// The pointer entered the marker of this row.
    Enter(usize),
    /// The pointer left the marker of this row.
    Leave(usize),
}

/// Turns a stream of "row under the pointer" samples into enter/leave events.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    hovered: Option<usize>,
}

impl PointerTracker {
    /// The row currently hovered.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Records the row under the pointer and returns the resulting events, leave first.
    pub fn update(&mut self, hit: Option<usize>) -> Vec<PointerEvent> {
        if hit == self.hovered {
            return Vec::new();
        }
        let mut events = Vec::with_capacity(2);
        if let Some(prev) = self.hovered {
            events.push(PointerEvent::Leave(prev));
        }
        if let Some(next) = hit {
            events.push(PointerEvent::Enter(next));
        }
        self.hovered = hit;
        events
    }
}
