// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG serialization of a frame.
//!
//! The chart is written as one `<svg>` with a fixed `viewBox`, holding a group translated by
//! the margins. Marks keep their classes and attributes (as `data-*`), so a stylesheet can
//! target `.stateCircle`, `.aText.active` and friends, and hosts can map DOM events back to
//! rows and option labels.

use peniko::Brush;
use scatterviz_core::{Mark, MarkPayload, TextAnchor, TextBaseline};

use crate::config::ScatterConfig;
use crate::markup::escape_html;

/// `preserveAspectRatio` used by the responsive wrapper.
pub const PRESERVE_ASPECT_RATIO: &str = "xMinYMid";

/// Rendered size of the SVG inside a container `container_width` wide.
///
/// The width follows the container and the height keeps the logical aspect ratio, rounded to
/// whole pixels.
pub fn responsive_size(container_width: f64, aspect: f64) -> (f64, f64) {
    let width = container_width.max(0.0);
    let height = if aspect > 0.0 {
        (width / aspect).round()
    } else {
        0.0
    };
    (width, height)
}

/// Serializes `marks` (chart-group coordinates) into a standalone SVG document.
pub fn to_svg_string(marks: &[Mark], config: &ScatterConfig) -> String {
    let mut out = String::new();
    let origin = config.origin();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="scatter" width="{w}" height="{h}" viewBox="0 0 {w} {h}" preserveAspectRatio="{PRESERVE_ASPECT_RATIO}">"#,
        w = config.width,
        h = config.height,
    ));
    out.push('\n');
    out.push_str(&format!(
        r#"<g class="chartGroup" transform="translate({},{})">"#,
        origin.x, origin.y
    ));
    out.push('\n');

    for mark in marks {
        write_mark(&mut out, mark);
    }

    out.push_str("</g>\n</svg>\n");
    out
}

fn write_mark(out: &mut String, mark: &Mark) {
    match &mark.payload {
        MarkPayload::Rect(r) => {
            out.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                r.rect.x0,
                r.rect.y0,
                r.rect.width(),
                r.rect.height(),
            ));
            write_meta(out, mark);
            write_paint_attr(out, "fill", &r.fill);
            out.push_str("/>\n");
        }
        MarkPayload::Circle(c) => {
            out.push_str(&format!(
                r#"<circle cx="{}" cy="{}" r="{}""#,
                c.center.x, c.center.y, c.radius
            ));
            write_meta(out, mark);
            write_paint_attr(out, "fill", &c.fill);
            if c.stroke_width > 0.0 {
                write_paint_attr(out, "stroke", &c.stroke);
                out.push_str(&format!(r#" stroke-width="{}""#, c.stroke_width));
            }
            out.push_str("/>\n");
        }
        MarkPayload::Text(t) => {
            let baseline = match t.baseline {
                TextBaseline::Middle => "middle",
                TextBaseline::Alphabetic => "alphabetic",
                TextBaseline::Hanging => "hanging",
                TextBaseline::Ideographic => "ideographic",
            };
            out.push_str(&format!(
                r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                t.pos.x, t.pos.y, t.font_size, baseline
            ));
            if t.angle != 0.0 {
                out.push_str(&format!(
                    r#" transform="rotate({} {} {})""#,
                    t.angle, t.pos.x, t.pos.y
                ));
            }
            out.push_str(match t.anchor {
                TextAnchor::Start => r#" text-anchor="start""#,
                TextAnchor::Middle => r#" text-anchor="middle""#,
                TextAnchor::End => r#" text-anchor="end""#,
            });
            write_meta(out, mark);
            write_paint_attr(out, "fill", &t.fill);
            out.push('>');
            out.push_str(&escape_html(&t.text));
            out.push_str("</text>\n");
        }
        MarkPayload::Path(p) => {
            out.push_str(&format!(r#"<path d="{}""#, p.path.to_svg()));
            write_meta(out, mark);
            write_paint_attr(out, "fill", &p.fill);
            if p.stroke_width > 0.0 {
                write_paint_attr(out, "stroke", &p.stroke);
                out.push_str(&format!(r#" stroke-width="{}""#, p.stroke_width));
            }
            out.push_str("/>\n");
        }
    }
}

fn write_meta(out: &mut String, mark: &Mark) {
    if !mark.classes.is_empty() {
        out.push_str(r#" class=""#);
        for (i, class) in mark.classes.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(class);
        }
        out.push('"');
    }
    for attr in &mark.attrs {
        out.push_str(&format!(
            r#" data-{}="{}""#,
            attr.name,
            escape_html(&attr.value)
        ));
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

#[cfg(test)]
mod tests {
    use peniko::Color;
    use scatterviz_core::MarkId;

    use super::*;

    #[test]
    fn document_is_wrapped_for_responsive_scaling() {
        let svg = to_svg_string(&[], &ScatterConfig::default());
        assert!(svg.contains(r#"viewBox="0 0 960 500""#), "{svg}");
        assert!(svg.contains(r#"preserveAspectRatio="xMinYMid""#), "{svg}");
        assert!(svg.contains(r#"transform="translate(100,20)""#), "{svg}");
    }

    #[test]
    fn classes_and_attributes_are_emitted() {
        let mark = Mark::builder(MarkId::from_raw(1))
            .circle()
            .class("stateCircle")
            .attr("row", "4")
            .x_const(10.0)
            .y_const(20.0)
            .radius_const(14.0)
            .fill_const(Color::from_rgb8(0x89, 0xbd, 0xd3))
            .build();
        let svg = to_svg_string(&[mark], &ScatterConfig::default());
        assert!(
            svg.contains(r##"<circle cx="10" cy="20" r="14" class="stateCircle" data-row="4" fill="#89bdd3"/>"##),
            "{svg}"
        );
    }

    #[test]
    fn text_is_escaped_and_rotated() {
        let mark = Mark::builder(MarkId::from_raw(2))
            .text()
            .x_const(-40.0)
            .y_const(200.0)
            .angle_const(-90.0)
            .text_const("A & B")
            .build();
        let svg = to_svg_string(&[mark], &ScatterConfig::default());
        assert!(svg.contains(r#"transform="rotate(-90 -40 200)""#), "{svg}");
        assert!(svg.contains(">A &amp; B</text>"), "{svg}");
    }

    #[test]
    fn responsive_height_keeps_aspect() {
        assert_eq!(responsive_size(480.0, 960.0 / 500.0), (480.0, 250.0));
        assert_eq!(responsive_size(333.0, 1.92), (333.0, 173.0));
        assert_eq!(responsive_size(-5.0, 1.92), (0.0, 0.0));
    }
}
