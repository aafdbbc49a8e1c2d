// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identifier newtypes.

/// Identifies a data table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(pub u32);

/// Identifies a column within a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColId(pub u32);

/// Stable identity of a mark across frames.
///
/// Guide marks (axes, labels) use small raw ids picked by their generator. Per-row marks use
/// [`MarkId::for_row`] / [`MarkId::for_row_layer`], which set the high bit so the two spaces
/// never collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

const ROW_BIT: u64 = 1 << 63;

impl MarkId {
    /// Wraps a raw id.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Id for the mark bound to `row_key` of `table` (layer 0).
    pub fn for_row(table: TableId, row_key: u64) -> Self {
        Self::for_row_layer(table, 0, row_key)
    }

    /// Id for a mark bound to `row_key` of `table` in a given layer.
    ///
    /// Layers let one table drive several marks per row (e.g. a glyph and its label).
    /// Layout: row bit, 7 bits of layer, 24 bits of table id, 32 bits of row key.
    pub fn for_row_layer(table: TableId, layer: u8, row_key: u64) -> Self {
        let layer = u64::from(layer & 0x7f) << 56;
        let table = (u64::from(table.0) & 0x00ff_ffff) << 32;
        Self(ROW_BIT | layer | table | (row_key & 0xffff_ffff))
    }

    /// Returns `true` if this id was produced by [`MarkId::for_row_layer`].
    pub fn is_row(self) -> bool {
        self.0 & ROW_BIT != 0
    }

    /// Returns the row key for per-row ids.
    pub fn row_key(self) -> Option<u64> {
        self.is_row().then_some(self.0 & 0xffff_ffff)
    }
}
