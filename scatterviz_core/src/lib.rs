// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal retained mark runtime for scatterviz.
//!
//! This crate is the small layer every renderer sits on:
//! - **Tables** expose row-oriented numeric/text access through [`TableData`].
//! - **Marks** are resolved visual items (rects, circles, paths, text) with a
//!   stable [`MarkId`], CSS-ish classes and `data-*` attributes.
//! - A [`Scene`] keeps the last mark set and turns a new set into
//!   enter/update/exit [`MarkDiff`]s (the data-join shape).
//! - An [`Animator`] consumes diffs and tweens updated marks over time.
//!
//! Nothing here knows about charts, scales or the DOM.

#![no_std]

extern crate alloc;

mod ids;
mod mark;
mod scene;
mod table;
mod transition;

pub use ids::{ColId, MarkId, TableId};
pub use mark::{
    Attr, CirclePayload, Mark, MarkBuilder, MarkKind, MarkPayload, PathPayload, RectPayload,
    TextAnchor, TextBaseline, TextPayload,
};
pub use scene::{MarkDiff, Scene};
pub use table::TableData;
pub use transition::{Animator, Easing, TransitionSpec};
