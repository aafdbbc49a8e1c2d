// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping between container pixels and chart-group coordinates.

use kurbo::{Point, Vec2};
use scatterviz_app::ScatterConfig;

/// How the logical chart is laid out inside its rendered box.
///
/// The SVG scales its `viewBox` uniformly to fit the rendered size, pinned to the left edge
/// and centered vertically (`xMinYMid meet`). Marks live in chart-group coordinates, which
/// are logical coordinates shifted by the margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    scale: f64,
    offset: Vec2,
    origin: Vec2,
}

impl ViewTransform {
    /// Transform for an SVG rendered `width` by `height` pixels.
    pub fn new(config: &ScatterConfig, width: f64, height: f64) -> Self {
        let sx = if config.width > 0.0 { width / config.width } else { 0.0 };
        let sy = if config.height > 0.0 { height / config.height } else { 0.0 };
        let scale = sx.min(sy);
        let offset = Vec2::new(0.0, (height - config.height * scale) / 2.0);
        Self {
            scale,
            offset,
            origin: config.origin(),
        }
    }

    /// Pixels per logical unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Converts a point relative to the SVG's top-left corner to chart-group coordinates.
    ///
    /// A collapsed SVG (zero scale) maps every pixel to negative infinity, away from any mark.
    pub fn to_chart(&self, pixel: Point) -> Point {
        if self.scale <= 0.0 {
            return Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        }
        ((pixel - self.offset).to_vec2() / self.scale - self.origin).to_point()
    }

    /// Converts a chart-group point to pixels relative to the SVG's top-left corner.
    pub fn to_pixels(&self, chart: Point) -> Point {
        ((chart.to_vec2() + self.origin) * self.scale + self.offset).to_point()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn native_size_only_removes_margins() {
        let config = ScatterConfig::default();
        let view = ViewTransform::new(&config, 960.0, 500.0);
        assert_eq!(view.scale(), 1.0);
        assert_eq!(view.to_chart(Point::new(100.0, 20.0)), Point::ZERO);
        assert_eq!(view.to_chart(Point::new(510.0, 480.0)), Point::new(410.0, 460.0));
    }

    #[test]
    fn half_size_scales_back_up() {
        let config = ScatterConfig::default();
        let view = ViewTransform::new(&config, 480.0, 250.0);
        assert_eq!(view.scale(), 0.5);
        assert!(close(view.to_chart(Point::new(255.0, 240.0)), Point::new(410.0, 460.0)));
    }

    #[test]
    fn extra_height_is_split_above_and_below() {
        let config = ScatterConfig::default();
        let view = ViewTransform::new(&config, 480.0, 300.0);
        assert_eq!(view.scale(), 0.5);
        // 50px of slack, 25px of it above the chart.
        assert!(close(view.to_chart(Point::new(50.0, 35.0)), Point::ZERO));
    }

    #[test]
    fn pixels_round_trip() {
        let config = ScatterConfig::default();
        let view = ViewTransform::new(&config, 333.0, 173.0);
        let p = Point::new(123.0, -40.0);
        assert!(close(view.to_chart(view.to_pixels(p)), p));
    }

    #[test]
    fn collapsed_view_hits_nothing() {
        let view = ViewTransform::new(&ScatterConfig::default(), 0.0, 0.0);
        assert!(view.to_chart(Point::new(10.0, 10.0)).x.is_infinite());
    }
}
