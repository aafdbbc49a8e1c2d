// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout and behavior knobs.

use kurbo::{Rect, Vec2};

/// Space between the SVG edge and the plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin (holds the x axis and its option labels).
    pub bottom: f64,
    /// Left margin (holds the y axis and its option labels).
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 40.0,
            bottom: 80.0,
            left: 100.0,
        }
    }
}

/// Configuration of the scatter chart.
///
/// Geometry is in SVG user units. All marks are produced in chart-group coordinates, i.e.
/// with the origin at the top-left corner of the plot area; the SVG writer adds the margin
/// translation.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterConfig {
    /// Logical SVG width.
    pub width: f64,
    /// Logical SVG height.
    pub height: f64,
    /// Margins around the plot area.
    pub margin: Margin,
    /// Marker radius.
    pub radius: f64,
    /// Vertical offset of the abbreviation text from the marker center.
    pub text_offset: f64,
    /// Font size of the abbreviation text.
    pub abbr_font_size: f64,
    /// Font size of the axis option labels.
    pub label_font_size: f64,
    /// Distance between stacked option labels.
    pub label_spacing: f64,
    /// Distance from the plot edge to the first x option label.
    pub x_label_offset: f64,
    /// Distance from the plot edge to the first y option label.
    pub y_label_offset: f64,
    /// Approximate tick count for both axes.
    pub tick_count: usize,
    /// Duration of update transitions in milliseconds.
    pub transition_ms: f64,
    /// Offset of the tooltip box from the top-center of the hovered marker.
    pub tooltip_offset: Vec2,
    /// `(low, high)` domain padding factors for the x axis.
    pub x_padding: (f64, f64),
    /// `(low, high)` domain padding factors for the y axis.
    pub y_padding: (f64, f64),
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 500.0,
            margin: Margin::default(),
            radius: 14.0,
            text_offset: 5.0,
            abbr_font_size: 12.0,
            label_font_size: 14.0,
            label_spacing: 20.0,
            x_label_offset: 40.0,
            y_label_offset: 40.0,
            tick_count: 10,
            transition_ms: 1000.0,
            tooltip_offset: Vec2::new(-95.0, 45.0),
            x_padding: (0.9, 1.1),
            y_padding: (0.8, 1.0),
        }
    }
}

impl ScatterConfig {
    /// Sets the logical SVG size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets all margins.
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the bottom margin only.
    pub fn with_bottom_margin(mut self, bottom: f64) -> Self {
        self.margin.bottom = bottom;
        self
    }

    /// Sets the marker radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the transition duration.
    pub fn with_transition_ms(mut self, transition_ms: f64) -> Self {
        self.transition_ms = transition_ms;
        self
    }

    /// Sets the tooltip offset.
    pub fn with_tooltip_offset(mut self, offset: Vec2) -> Self {
        self.tooltip_offset = offset;
        self
    }

    /// Width of the plot area.
    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Height of the plot area.
    pub fn plot_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// The plot area in chart-group coordinates.
    pub fn plot_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.plot_width(), self.plot_height())
    }

    /// Translation from chart-group coordinates to SVG coordinates.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.margin.left, self.margin.top)
    }

    /// Width-to-height ratio of the logical SVG.
    pub fn aspect(&self) -> f64 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plot_area() {
        let c = ScatterConfig::default();
        assert_eq!(c.plot_width(), 820.0);
        assert_eq!(c.plot_height(), 400.0);
        assert_eq!(c.with_bottom_margin(60.0).plot_height(), 420.0);
    }

    #[test]
    fn degenerate_sizes_clamp_to_zero() {
        let c = ScatterConfig::default().with_size(50.0, 50.0);
        assert_eq!(c.plot_rect(), Rect::ZERO);
    }
}
