// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for chart-generated marks.
//!
//! Renderers sort by `(z_index, MarkId)` for a deterministic tie-break.

/// Axis domain line and tick marks.
pub const AXIS_RULES: i32 = 10;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 20;
/// Point series marks.
pub const SERIES_POINTS: i32 = 30;
/// Per-row text drawn on top of the points.
pub const SERIES_LABELS: i32 = 40;
/// Axis option labels (clickable titles).
pub const AXIS_TITLES: i32 = 50;
