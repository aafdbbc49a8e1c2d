// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The HTML report: one section per chart snapshot.

use scatterviz_app::{STYLESHEET, escape_html};

/// One report entry.
#[derive(Clone, Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) svg: String,
    /// Tooltip markup captured while hovering a marker.
    pub(crate) tooltip: Option<String>,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    let title = escape_html(title);
    out.push_str("<!DOCTYPE html>\n");
    out.push_str("<html lang=\"en\">\n");
    out.push_str("<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{title}</title>\n"));
    out.push_str(&format!("<style>{STYLESHEET}</style>\n"));
    out.push_str("</head>\n");
    out.push_str("<body>\n");
    out.push_str(&format!("<h1>{title}</h1>\n"));
    for section in sections {
        out.push_str("<section>\n");
        out.push_str(&format!("<h2>{}</h2>\n", escape_html(&section.title)));
        if !section.description.is_empty() {
            out.push_str(&format!("<p>{}</p>\n", escape_html(&section.description)));
        }
        out.push_str("<div class=\"chart\">\n");
        out.push_str(&section.svg);
        out.push_str("</div>\n");
        if let Some(tooltip) = &section.tooltip {
            // Already markup: state names are escaped when the tooltip is built.
            out.push_str(&format!("<div class=\"d3-tip\">{tooltip}</div>\n"));
        }
        out.push_str("</section>\n");
    }
    out.push_str("</body>\n");
    out.push_str("</html>\n");
    out
}
