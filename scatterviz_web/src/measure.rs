// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label measurement backed by canvas `measureText`.

use scatterviz_charts::{HeuristicTextMeasurer, TextMeasurer};

/// CSS font family used for chart text.
#[cfg(target_arch = "wasm32")]
const FONT_FAMILY: &str = "sans-serif";

/// A [`TextMeasurer`] backed by an HTML canvas 2D context.
///
/// On non-`wasm32` targets this type is still available but always falls back to
/// [`HeuristicTextMeasurer`].
#[derive(Clone, Debug)]
pub struct WebTextMeasurer {
    #[cfg(target_arch = "wasm32")]
    ctx: web_sys::CanvasRenderingContext2d,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for WebTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl WebTextMeasurer {
    /// Creates a measurer drawing into an offscreen canvas.
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Result<Self, wasm_bindgen::JsValue> {
        use wasm_bindgen::JsCast as _;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("scatterviz_web: missing document"))?;
        let ctx = document
            .create_element("canvas")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?
            .get_context("2d")?
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("scatterviz_web: missing 2d context"))?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Creates a measurer that always uses the heuristic.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl TextMeasurer for WebTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        #[cfg(target_arch = "wasm32")]
        {
            self.ctx.set_font(&format!("{font_size}px {FONT_FAMILY}"));
            match self.ctx.measure_text(text) {
                Ok(m) if m.width() > 0.0 || text.is_empty() => (m.width(), font_size),
                _ => HeuristicTextMeasurer.measure(text, font_size),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        HeuristicTextMeasurer.measure(text, font_size)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_builds_fall_back_to_heuristics() {
        let m = WebTextMeasurer::new();
        assert_eq!(
            m.measure("Smokes (%)", 14.0),
            HeuristicTextMeasurer.measure("Smokes (%)", 14.0)
        );
    }
}
