// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup shared by every host of the chart.

/// Styles for the chart classes (`stateCircle`, `stateText`, `aText`, `d3-tip`).
///
/// The HTML report embeds it in its `<style>` element and the browser front end injects it
/// into the page head when it mounts.
pub const STYLESHEET: &str = r#"
body { font-family: sans-serif; margin: 24px; color: #222; }
section { margin-bottom: 32px; }
.chart { max-width: 960px; }
.chart svg { width: 100%; height: auto; }
.stateCircle { fill: #89bdd3; stroke: #e3e3e3; }
.stateText { font-size: 12px; font-family: sans-serif; fill: #fff; text-anchor: middle; }
.aText { cursor: pointer; transition: fill 0.3s; }
.aText.active { fill: #000; font-weight: bold; }
.aText.inactive { fill: #aaa; }
.aText.inactive:hover { fill: #000; }
.d3-tip { display: inline-block; line-height: 1.3; padding: 8px 12px; background: rgba(0, 0, 0, 0.8); color: #fff; border-radius: 4px; font-size: 12px; text-align: center; }
.chartError { color: #b00020; }
"#;

/// Escapes text for use in HTML/SVG content and double- or single-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_characters_are_escaped() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("Ohio"), "Ohio");
    }

    #[test]
    fn stylesheet_covers_chart_classes() {
        for class in [
            ".stateCircle",
            ".stateText",
            ".aText.active",
            ".aText.inactive",
            ".aText {",
            ".d3-tip",
            ".chartError",
        ] {
            assert!(STYLESHEET.contains(class), "missing {class}");
        }
    }
}
