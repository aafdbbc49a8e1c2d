// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser front end for the scatter chart.
//!
//! On `wasm32` targets this crate fetches the data file, mounts the chart into a container
//! element (`#scatter` by default), and forwards clicks, pointer movement and resizes to a
//! [`scatterviz_app::Controller`]. Transitions are sampled from `requestAnimationFrame`.
//!
//! Mounting also injects [`scatterviz_app::STYLESHEET`] into the page head. The workspace
//! root `index.html` is a host page: it holds the `#scatter` container and loads the
//! `wasm-bindgen` output from `pkg/`.
//!
//! The coordinate mapping and error markup are plain Rust and build on every target.

mod error_view;
mod measure;
mod view;
#[cfg(target_arch = "wasm32")]
mod web;

pub use error_view::error_html;
pub use measure::WebTextMeasurer;
pub use view::ViewTransform;
#[cfg(target_arch = "wasm32")]
pub use web::{mount, start};

/// Id of the element the chart is mounted into.
pub const DEFAULT_CONTAINER_ID: &str = "scatter";

/// Location of the data file, relative to the page.
pub const DEFAULT_DATA_URL: &str = "assets/data/data.csv";

/// Id of the `<style>` element holding the chart stylesheet.
pub const STYLE_ELEMENT_ID: &str = "scatterviz-style";
