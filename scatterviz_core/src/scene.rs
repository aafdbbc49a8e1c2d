// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained mark set and enter/update/exit diffing.

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use kurbo::Rect;

use crate::{Mark, MarkId, MarkKind};

/// A change to the retained mark set.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark that was not present before.
    Enter {
        /// Mark id.
        id: MarkId,
        /// Mark kind.
        kind: MarkKind,
        /// Render order.
        z_index: i32,
        /// Geometric bounds, if known.
        bounds: Option<Rect>,
        /// The new mark.
        new: Box<Mark>,
    },
    /// A mark whose content changed.
    Update {
        /// Mark id.
        id: MarkId,
        /// New mark kind.
        kind: MarkKind,
        /// Previous render order.
        old_z_index: i32,
        /// New render order.
        new_z_index: i32,
        /// Previous bounds.
        old_bounds: Option<Rect>,
        /// New bounds.
        new_bounds: Option<Rect>,
        /// Previous mark.
        old: Box<Mark>,
        /// New mark.
        new: Box<Mark>,
    },
    /// A mark that is no longer present.
    Exit {
        /// Mark id.
        id: MarkId,
        /// Mark kind.
        kind: MarkKind,
        /// Render order.
        z_index: i32,
        /// Last known bounds.
        bounds: Option<Rect>,
        /// The removed mark.
        old: Box<Mark>,
    },
}

impl MarkDiff {
    /// Returns the id of the affected mark.
    pub fn id(&self) -> MarkId {
        match self {
            Self::Enter { id, .. } | Self::Update { id, .. } | Self::Exit { id, .. } => *id,
        }
    }
}

/// The retained set of marks from the last tick.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, Mark>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of retained marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if no marks are retained.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Looks up a retained mark.
    pub fn mark(&self, id: MarkId) -> Option<&Mark> {
        self.marks.get(&id)
    }

    /// Iterates retained marks in arbitrary order.
    pub fn marks(&self) -> impl Iterator<Item = &Mark> {
        self.marks.values()
    }

    /// Replaces the retained set with `marks` and returns the diffs.
    ///
    /// `marks` is the complete set for this frame: anything retained but absent exits.
    /// Unchanged marks produce no diff. Enter/update diffs follow input order; exits are
    /// ordered by id. If an id repeats, the last mark wins.
    pub fn tick(&mut self, marks: impl IntoIterator<Item = Mark>) -> Vec<MarkDiff> {
        let mut diffs = Vec::new();
        let mut seen: HashSet<MarkId> = HashSet::new();

        for mark in marks {
            let id = mark.id;
            seen.insert(id);
            match self.marks.insert(id, mark.clone()) {
                None => diffs.push(MarkDiff::Enter {
                    id,
                    kind: mark.kind(),
                    z_index: mark.z_index,
                    bounds: mark.payload.bounds(),
                    new: Box::new(mark),
                }),
                Some(old) if old == mark => {}
                Some(old) => diffs.push(MarkDiff::Update {
                    id,
                    kind: mark.kind(),
                    old_z_index: old.z_index,
                    new_z_index: mark.z_index,
                    old_bounds: old.payload.bounds(),
                    new_bounds: mark.payload.bounds(),
                    old: Box::new(old),
                    new: Box::new(mark),
                }),
            }
        }

        let mut gone: Vec<MarkId> = self
            .marks
            .keys()
            .copied()
            .filter(|id| !seen.contains(id))
            .collect();
        gone.sort();
        for id in gone {
            if let Some(old) = self.marks.remove(&id) {
                diffs.push(MarkDiff::Exit {
                    id,
                    kind: old.kind(),
                    z_index: old.z_index,
                    bounds: old.payload.bounds(),
                    old: Box::new(old),
                });
            }
        }

        diffs
    }
}
