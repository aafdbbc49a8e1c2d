// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An interactive scatter plot of state health and income metrics.
//!
//! The chart plots one circle (with the state's abbreviation inside) per row of a
//! [`scatterviz_data::Dataset`]. Below and left of the plot sit clickable option labels; a
//! click swaps the field on that axis and the markers and axis animate to their new places.
//!
//! - [`Selection`] is the whole view state: one [`XField`] and one [`YField`].
//! - [`chart`] turns `(dataset, config, selection, scales)` into marks.
//! - [`Controller`] owns the selection, diffs re-renders into the retained scene, drives
//!   transitions and tooltips, and serializes frames to SVG.
//!
//! Hosts (the browser glue, the demo binary) only forward clicks, pointer moves and a clock.

pub mod chart;
mod config;
mod controller;
#[cfg(test)]
mod controller_tests;
mod markup;
mod scales;
mod selection;
mod svg;
mod tooltip;

pub use chart::ChartScales;
pub use config::{Margin, ScatterConfig};
pub use controller::{ClickOutcome, Controller};
pub use markup::{STYLESHEET, escape_html};
pub use scales::{Orientation, build_scale};
pub use selection::{Axis, AxisField, Selection, SelectionError, XField, YField};
pub use svg::{PRESERVE_ASPECT_RATIO, responsive_size, to_svg_string};
pub use tooltip::{
    PointerEvent, PointerTracker, Tooltip, TooltipContent, field_label, format_number,
};
