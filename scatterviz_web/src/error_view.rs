// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use scatterviz_app::escape_html;

/// Markup shown in the chart container when the chart cannot be built.
pub fn error_html(message: &str) -> String {
    format!(
        r#"<p class="chartError" role="alert">Unable to draw the chart: {}</p>"#,
        escape_html(message)
    )
}
