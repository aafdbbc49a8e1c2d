// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved marks and their builder.

use alloc::string::String;

use kurbo::{BezPath, Circle, Point, Rect, Shape};
use peniko::{Brush, Color};
use smallvec::SmallVec;

use crate::MarkId;

/// The kind of a mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// Axis-aligned rectangle.
    Rect,
    /// Circle given by center and radius.
    Circle,
    /// Arbitrary path.
    Path,
    /// Unshaped text run.
    Text,
}

/// Horizontal text anchor, matching SVG `text-anchor`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor point.
    #[default]
    Start,
    /// Text is centered on the anchor point.
    Middle,
    /// Text ends at the anchor point.
    End,
}

/// Vertical text baseline, matching SVG `dominant-baseline`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// Alphabetic baseline (SVG default).
    #[default]
    Alphabetic,
    /// Vertically centered.
    Middle,
    /// Hanging baseline (text hangs below the anchor).
    Hanging,
    /// Ideographic baseline.
    Ideographic,
}

/// Rectangle payload.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPayload {
    /// Rectangle in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// Circle payload.
#[derive(Clone, Debug, PartialEq)]
pub struct CirclePayload {
    /// Center in scene coordinates.
    pub center: Point,
    /// Radius in scene coordinates.
    pub radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width; `0` disables the stroke.
    pub stroke_width: f64,
}

/// Path payload.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPayload {
    /// Geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width; `0` disables the stroke.
    pub stroke_width: f64,
}

/// Text payload.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation in degrees around `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// The visual content of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A rectangle.
    Rect(RectPayload),
    /// A circle.
    Circle(CirclePayload),
    /// A path.
    Path(PathPayload),
    /// A text run.
    Text(TextPayload),
}

impl MarkPayload {
    /// Returns the kind of this payload.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Circle(_) => MarkKind::Circle,
            Self::Path(_) => MarkKind::Path,
            Self::Text(_) => MarkKind::Text,
        }
    }

    /// Geometric bounds, if known without text metrics.
    ///
    /// Text returns `None`; callers that need text extents go through a text measurer.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Circle(c) => Some(Circle::new(c.center, c.radius).bounding_box()),
            Self::Path(p) => Some(p.path.bounding_box()),
            Self::Text(_) => None,
        }
    }
}

/// A `data-*` style attribute carried by a mark.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attr {
    /// Attribute name without the `data-` prefix.
    pub name: &'static str,
    /// Attribute value.
    pub value: String,
}

/// A resolved mark.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity.
    pub id: MarkId,
    /// Render order; renderers sort by `(z_index, id)`.
    pub z_index: i32,
    /// Class names (e.g. `"stateCircle"`, `"active"`).
    pub classes: SmallVec<[&'static str; 2]>,
    /// Extra attributes.
    pub attrs: SmallVec<[Attr; 2]>,
    /// Visual content.
    pub payload: MarkPayload,
}

impl Mark {
    /// Starts building a mark. The default kind is [`MarkKind::Rect`].
    pub fn builder(id: MarkId) -> MarkBuilder {
        MarkBuilder::new(id)
    }

    /// Returns the kind of this mark.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }

    /// Returns `true` if the mark carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    /// Returns the value of attribute `name`, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

/// Builder for [`Mark`].
#[derive(Clone, Debug)]
pub struct MarkBuilder {
    id: MarkId,
    kind: MarkKind,
    z_index: i32,
    classes: SmallVec<[&'static str; 2]>,
    attrs: SmallVec<[Attr; 2]>,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    radius: f64,
    path: BezPath,
    text: String,
    font_size: f64,
    angle: f64,
    anchor: TextAnchor,
    baseline: TextBaseline,
    fill: Brush,
    stroke: Brush,
    stroke_width: f64,
}

impl MarkBuilder {
    fn new(id: MarkId) -> Self {
        Self {
            id,
            kind: MarkKind::Rect,
            z_index: 0,
            classes: SmallVec::new(),
            attrs: SmallVec::new(),
            x: 0.0,
            y: 0.0,
            w: 0.0,
            h: 0.0,
            radius: 0.0,
            path: BezPath::new(),
            text: String::new(),
            font_size: 10.0,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            fill: Brush::Solid(Color::BLACK),
            stroke: Brush::Solid(Color::TRANSPARENT),
            stroke_width: 0.0,
        }
    }

    /// Builds a rect mark.
    pub fn rect(mut self) -> Self {
        self.kind = MarkKind::Rect;
        self
    }

    /// Builds a circle mark.
    pub fn circle(mut self) -> Self {
        self.kind = MarkKind::Circle;
        self
    }

    /// Builds a path mark.
    pub fn path(mut self) -> Self {
        self.kind = MarkKind::Path;
        self
    }

    /// Builds a text mark.
    pub fn text(mut self) -> Self {
        self.kind = MarkKind::Text;
        self
    }

    /// Sets the render order.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Adds a class name.
    pub fn class(mut self, class: &'static str) -> Self {
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Adds an attribute.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push(Attr {
            name,
            value: value.into(),
        });
        self
    }

    /// Sets x (rect origin, circle center, text anchor).
    pub fn x_const(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Sets y (rect origin, circle center, text anchor).
    pub fn y_const(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    /// Sets the rect width.
    pub fn w_const(mut self, w: f64) -> Self {
        self.w = w;
        self
    }

    /// Sets the rect height.
    pub fn h_const(mut self, h: f64) -> Self {
        self.h = h;
        self
    }

    /// Sets the circle radius.
    pub fn radius_const(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the path geometry.
    pub fn path_const(mut self, path: BezPath) -> Self {
        self.path = path;
        self
    }

    /// Sets the text content.
    pub fn text_const(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the font size.
    pub fn font_size_const(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the text rotation in degrees.
    pub fn angle_const(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the text anchor.
    pub fn text_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Shorthand for `text_anchor(TextAnchor::Middle)`.
    pub fn text_anchor_middle(self) -> Self {
        self.text_anchor(TextAnchor::Middle)
    }

    /// Sets the text baseline.
    pub fn text_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets a solid fill color.
    pub fn fill_const(self, color: Color) -> Self {
        self.fill_brush_const(Brush::Solid(color))
    }

    /// Sets the fill paint.
    pub fn fill_brush_const(mut self, fill: Brush) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the stroke paint.
    pub fn stroke_brush_const(mut self, stroke: Brush) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the stroke width.
    pub fn stroke_width_const(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        let payload = match self.kind {
            MarkKind::Rect => MarkPayload::Rect(RectPayload {
                rect: Rect::new(self.x, self.y, self.x + self.w, self.y + self.h),
                fill: self.fill,
            }),
            MarkKind::Circle => MarkPayload::Circle(CirclePayload {
                center: Point::new(self.x, self.y),
                radius: self.radius,
                fill: self.fill,
                stroke: self.stroke,
                stroke_width: self.stroke_width,
            }),
            MarkKind::Path => MarkPayload::Path(PathPayload {
                path: self.path,
                fill: self.fill,
                stroke: self.stroke,
                stroke_width: self.stroke_width,
            }),
            MarkKind::Text => MarkPayload::Text(TextPayload {
                pos: Point::new(self.x, self.y),
                text: self.text,
                font_size: self.font_size,
                angle: self.angle,
                anchor: self.anchor,
                baseline: self.baseline,
                fill: self.fill,
            }),
        };
        Mark {
            id: self.id,
            z_index: self.z_index,
            classes: self.classes,
            attrs: self.attrs,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_produces_requested_kind() {
        let m = Mark::builder(MarkId::from_raw(1))
            .circle()
            .x_const(3.0)
            .y_const(4.0)
            .radius_const(2.0)
            .class("dot")
            .attr("row", "5")
            .build();
        assert_eq!(m.kind(), MarkKind::Circle);
        assert!(m.has_class("dot"));
        assert_eq!(m.attr("row"), Some("5"));
        let b = m.payload.bounds().expect("circle has bounds");
        assert_eq!(b, Rect::new(1.0, 2.0, 5.0, 6.0));
    }

    #[test]
    fn text_has_no_intrinsic_bounds() {
        let m = Mark::builder(MarkId::from_raw(2))
            .text()
            .text_const("OH")
            .build();
        assert!(m.payload.bounds().is_none());
    }
}
