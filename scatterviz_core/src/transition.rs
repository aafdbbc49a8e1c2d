// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timed transitions between mark states.
//!
//! The [`Animator`] sits downstream of [`Scene::tick`](crate::Scene::tick): entering marks
//! appear immediately, exiting marks disappear immediately, and updated marks are tweened from
//! what is currently on screen to their new state.
//!
//! An update that arrives while a mark is still animating interrupts the running tween and
//! starts a new one from the mark's interpolated position at that instant, so at most one
//! tween per mark is ever active. Time is supplied by the caller in milliseconds.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{BezPath, PathEl, Point, Rect};

use crate::{Mark, MarkDiff, MarkId, MarkPayload};

/// Easing curve applied to normalized transition time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Cubic ease-in-out (d3's default).
    #[default]
    CubicInOut,
}

impl Easing {
    /// Maps `t` in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                let t2 = t * 2.0;
                if t2 <= 1.0 {
                    t2 * t2 * t2 / 2.0
                } else {
                    let u = t2 - 2.0;
                    (u * u * u + 2.0) / 2.0
                }
            }
        }
    }
}

/// Duration and easing of a transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionSpec {
    /// Duration in milliseconds. `0` disables animation.
    pub duration_ms: f64,
    /// Easing curve.
    pub easing: Easing,
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self {
            duration_ms: 250.0,
            easing: Easing::CubicInOut,
        }
    }
}

impl TransitionSpec {
    /// Creates a spec with the given duration and the default easing.
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms: duration_ms.max(0.0),
            ..Self::default()
        }
    }

    /// Sets the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

#[derive(Clone, Debug)]
struct Tween {
    from: MarkPayload,
    start_ms: f64,
}

/// Tweens marks between their previous and current state.
#[derive(Debug, Default)]
pub struct Animator {
    spec: TransitionSpec,
    targets: HashMap<MarkId, Mark>,
    tweens: HashMap<MarkId, Tween>,
}

impl Animator {
    /// Creates an animator using `spec` for every update.
    pub fn new(spec: TransitionSpec) -> Self {
        Self {
            spec,
            targets: HashMap::new(),
            tweens: HashMap::new(),
        }
    }

    /// Returns the transition spec.
    pub fn spec(&self) -> TransitionSpec {
        self.spec
    }

    /// Applies diffs without animating anything (e.g. the initial render).
    pub fn apply_immediately(&mut self, diffs: &[MarkDiff]) {
        for diff in diffs {
            match diff {
                MarkDiff::Enter { id, new, .. } | MarkDiff::Update { id, new, .. } => {
                    self.tweens.remove(id);
                    self.targets.insert(*id, (**new).clone());
                }
                MarkDiff::Exit { id, .. } => {
                    self.tweens.remove(id);
                    self.targets.remove(id);
                }
            }
        }
    }

    /// Applies diffs at time `now_ms`, starting a tween for every update.
    pub fn apply_diffs(&mut self, diffs: &[MarkDiff], now_ms: f64) {
        if self.spec.duration_ms <= 0.0 {
            self.apply_immediately(diffs);
            return;
        }
        for diff in diffs {
            match diff {
                MarkDiff::Enter { id, new, .. } => {
                    self.tweens.remove(id);
                    self.targets.insert(*id, (**new).clone());
                }
                MarkDiff::Update { id, old, new, .. } => {
                    let from = self
                        .displayed_payload(*id, now_ms)
                        .unwrap_or_else(|| old.payload.clone());
                    self.targets.insert(*id, (**new).clone());
                    self.tweens.insert(
                        *id,
                        Tween {
                            from,
                            start_ms: now_ms,
                        },
                    );
                }
                MarkDiff::Exit { id, .. } => {
                    self.tweens.remove(id);
                    self.targets.remove(id);
                }
            }
        }
    }

    /// Returns `true` while any tween is still running at `now_ms`.
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.tweens
            .values()
            .any(|tw| now_ms < tw.start_ms + self.spec.duration_ms)
    }

    /// Returns the payload currently on screen for `id`.
    pub fn displayed_payload(&self, id: MarkId, now_ms: f64) -> Option<MarkPayload> {
        let target = self.targets.get(&id)?;
        Some(match self.tweens.get(&id) {
            Some(tw) => interpolate(&tw.from, &target.payload, self.progress(tw, now_ms)),
            None => target.payload.clone(),
        })
    }

    /// Samples every mark at `now_ms`, sorted by `(z_index, id)`.
    ///
    /// Finished tweens are dropped.
    pub fn frame(&mut self, now_ms: f64) -> Vec<Mark> {
        let duration = self.spec.duration_ms;
        self.tweens
            .retain(|_, tw| now_ms < tw.start_ms + duration);

        let mut out: Vec<Mark> = self
            .targets
            .values()
            .map(|target| match self.tweens.get(&target.id) {
                Some(tw) => Mark {
                    payload: interpolate(&tw.from, &target.payload, self.progress(tw, now_ms)),
                    ..target.clone()
                },
                None => target.clone(),
            })
            .collect();
        out.sort_by_key(|m| (m.z_index, m.id));
        out
    }

    fn progress(&self, tw: &Tween, now_ms: f64) -> f64 {
        if self.spec.duration_ms <= 0.0 {
            return 1.0;
        }
        let t = (now_ms - tw.start_ms) / self.spec.duration_ms;
        self.spec.easing.apply(t)
    }
}

/// Interpolates geometry between two payloads of the same kind.
///
/// Paint and text content snap to `to`. Mismatched kinds (or paths with different element
/// structure) snap entirely.
fn interpolate(from: &MarkPayload, to: &MarkPayload, t: f64) -> MarkPayload {
    if t >= 1.0 {
        return to.clone();
    }
    match (from, to) {
        (MarkPayload::Circle(a), MarkPayload::Circle(b)) => {
            let mut out = b.clone();
            out.center = a.center.lerp(b.center, t);
            out.radius = lerp(a.radius, b.radius, t);
            MarkPayload::Circle(out)
        }
        (MarkPayload::Text(a), MarkPayload::Text(b)) => {
            let mut out = b.clone();
            out.pos = a.pos.lerp(b.pos, t);
            out.font_size = lerp(a.font_size, b.font_size, t);
            out.angle = lerp(a.angle, b.angle, t);
            MarkPayload::Text(out)
        }
        (MarkPayload::Rect(a), MarkPayload::Rect(b)) => {
            let mut out = b.clone();
            out.rect = Rect::new(
                lerp(a.rect.x0, b.rect.x0, t),
                lerp(a.rect.y0, b.rect.y0, t),
                lerp(a.rect.x1, b.rect.x1, t),
                lerp(a.rect.y1, b.rect.y1, t),
            );
            MarkPayload::Rect(out)
        }
        (MarkPayload::Path(a), MarkPayload::Path(b)) => match lerp_path(&a.path, &b.path, t) {
            Some(path) => {
                let mut out = b.clone();
                out.path = path;
                MarkPayload::Path(out)
            }
            None => to.clone(),
        },
        _ => to.clone(),
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_path(a: &BezPath, b: &BezPath, t: f64) -> Option<BezPath> {
    let (ea, eb) = (a.elements(), b.elements());
    if ea.len() != eb.len() {
        return None;
    }
    let p = |p0: Point, p1: Point| p0.lerp(p1, t);
    let mut out = Vec::with_capacity(ea.len());
    for (x, y) in ea.iter().zip(eb) {
        out.push(match (*x, *y) {
            (PathEl::MoveTo(a0), PathEl::MoveTo(b0)) => PathEl::MoveTo(p(a0, b0)),
            (PathEl::LineTo(a0), PathEl::LineTo(b0)) => PathEl::LineTo(p(a0, b0)),
            (PathEl::QuadTo(a0, a1), PathEl::QuadTo(b0, b1)) => {
                PathEl::QuadTo(p(a0, b0), p(a1, b1))
            }
            (PathEl::CurveTo(a0, a1, a2), PathEl::CurveTo(b0, b1, b2)) => {
                PathEl::CurveTo(p(a0, b0), p(a1, b1), p(a2, b2))
            }
            (PathEl::ClosePath, PathEl::ClosePath) => PathEl::ClosePath,
            _ => return None,
        });
    }
    Some(BezPath::from_vec(out))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::{CirclePayload, Scene};

    fn dot(x: f64) -> Mark {
        Mark::builder(MarkId::from_raw(1))
            .circle()
            .x_const(x)
            .y_const(0.0)
            .radius_const(1.0)
            .build()
    }

    fn center_x(payload: &MarkPayload) -> f64 {
        match payload {
            MarkPayload::Circle(CirclePayload { center, .. }) => center.x,
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn cubic_in_out_hits_endpoints_and_midpoint() {
        let e = Easing::CubicInOut;
        assert_eq!(e.apply(0.0), 0.0);
        assert_eq!(e.apply(1.0), 1.0);
        assert!((e.apply(0.5) - 0.5).abs() < 1e-12);
        assert_eq!(e.apply(2.0), 1.0);
    }

    #[test]
    fn enter_is_immediate_and_update_is_tweened() {
        let mut scene = Scene::new();
        let mut animator = Animator::new(TransitionSpec::new(1000.0).with_easing(Easing::Linear));

        let diffs = scene.tick(vec![dot(0.0)]);
        animator.apply_diffs(&diffs, 0.0);
        assert!(!animator.is_animating(0.0));
        assert_eq!(center_x(&animator.frame(0.0)[0].payload), 0.0);

        let diffs = scene.tick(vec![dot(100.0)]);
        animator.apply_diffs(&diffs, 0.0);
        assert!(animator.is_animating(500.0));
        assert!((center_x(&animator.frame(500.0)[0].payload) - 50.0).abs() < 1e-9);
        assert_eq!(center_x(&animator.frame(1000.0)[0].payload), 100.0);
        assert!(!animator.is_animating(1000.0));
    }

    #[test]
    fn new_update_interrupts_from_displayed_position() {
        let mut scene = Scene::new();
        let mut animator = Animator::new(TransitionSpec::new(1000.0).with_easing(Easing::Linear));
        animator.apply_diffs(&scene.tick(vec![dot(0.0)]), 0.0);
        animator.apply_diffs(&scene.tick(vec![dot(100.0)]), 0.0);

        // Halfway through, retarget back to 0: the new tween starts at 50.
        animator.apply_diffs(&scene.tick(vec![dot(0.0)]), 500.0);
        assert!((center_x(&animator.frame(500.0)[0].payload) - 50.0).abs() < 1e-9);
        assert!((center_x(&animator.frame(1000.0)[0].payload) - 25.0).abs() < 1e-9);
        assert_eq!(center_x(&animator.frame(1500.0)[0].payload), 0.0);
    }

    #[test]
    fn exit_removes_mark_immediately() {
        let mut scene = Scene::new();
        let mut animator = Animator::new(TransitionSpec::new(1000.0));
        animator.apply_diffs(&scene.tick(vec![dot(0.0)]), 0.0);
        animator.apply_diffs(&scene.tick(Vec::new()), 10.0);
        assert!(animator.frame(10.0).is_empty());
    }

    #[test]
    fn paths_with_matching_structure_interpolate() {
        let mut a = BezPath::new();
        a.move_to((0.0, 0.0));
        a.line_to((0.0, 6.0));
        let mut b = BezPath::new();
        b.move_to((10.0, 0.0));
        b.line_to((10.0, 6.0));
        let mid = lerp_path(&a, &b, 0.5).expect("same structure");
        assert_eq!(mid.elements()[0], PathEl::MoveTo(Point::new(5.0, 0.0)));

        let mut c = BezPath::new();
        c.move_to((0.0, 0.0));
        assert!(lerp_path(&a, &c, 0.5).is_none());
    }
}
