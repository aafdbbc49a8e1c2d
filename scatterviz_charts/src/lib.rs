// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for `scatterviz_core`.
//!
//! This crate is a small, reusable layer above `scatterviz_core`:
//! - **Scales** map data values into screen coordinates, with d3-compatible "nice" ticks.
//! - **Guides** (axes, clickable option labels) are built by generating
//!   `scatterviz_core::Mark`s.
//! - **Series** specs turn table rows into stable-identity circles and text.
//!
//! Text shaping and layout are out of scope; text marks store unshaped strings and hit
//! testing goes through a [`TextMeasurer`].

#![no_std]

extern crate alloc;

mod axis;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod measure;
mod option_labels;
mod point_mark;
mod rule_mark;
mod scale;
mod text_mark;
mod z_order;

pub use axis::{AxisOrient, AxisSpec, AxisStyle};
pub use format::format_tick_with_step;
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use option_labels::{OptionLabel, OptionLabelsSpec};
pub use point_mark::PointMarkSpec;
pub use rule_mark::RuleMarkSpec;
pub use scale::{ScaleLinear, ScaleLinearSpec, infer_domain_f64, padded_domain};
pub use text_mark::{RowTextMarkSpec, TextMarkSpec};
pub use z_order::*;
