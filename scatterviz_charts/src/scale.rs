// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear scale utilities.
//!
//! Tick generation follows d3's `ticks` so axis labels land on the same values a browser
//! chart would show.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use scatterviz_core::{ColId, TableData};

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

/// Specification for a linear scale (domain, no range yet).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinearSpec {
    /// Domain in data units.
    pub domain: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A degenerate domain maps everything to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Returns “nice” tick values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Returns the spacing between the values returned by [`ScaleLinear::ticks`].
    pub fn tick_step(&self, count: usize) -> f64 {
        tick_step(self.domain.0, self.domain.1, count)
    }
}

impl ScaleLinearSpec {
    /// Creates a new linear scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleLinear {
        ScaleLinear::new(self.domain, range)
    }
}

// d3's thresholds for picking a 1/2/5/10 step multiplier.
const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = core::f64::consts::SQRT_2;

/// Integer tick span `(i1, i2, inc)`.
///
/// A negative `inc` means ticks are `i / -inc`, otherwise `i * inc`; this keeps fractional
/// ticks exact (`0.1 * 3` vs `3 / 10`).
fn tick_spec(start: f64, stop: f64, count: usize) -> Option<(f64, f64, f64)> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return None;
    }
    let step = (stop - start) / count as f64;
    if step <= 0.0 || !step.is_finite() {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10_f64.powi(power_i32(power));
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power < 0.0 {
        let inc = 10_f64.powi(power_i32(-power)) / factor;
        let mut i1 = (start * inc).round();
        let mut i2 = (stop * inc).round();
        if i1 / inc < start {
            i1 += 1.0;
        }
        if i2 / inc > stop {
            i2 -= 1.0;
        }
        Some((i1, i2, -inc))
    } else {
        let inc = 10_f64.powi(power_i32(power)) * factor;
        let mut i1 = (start / inc).round();
        let mut i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
        Some((i1, i2, inc))
    }
}

fn power_i32(p: f64) -> i32 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "decimal exponents of finite f64 values fit comfortably in i32"
    )]
    {
        p.clamp(-400.0, 400.0) as i32
    }
}

fn ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    let reverse = min > max;
    if reverse {
        core::mem::swap(&mut min, &mut max);
    }
    let Some((i1, i2, inc)) = tick_spec(min, max, count) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }
    let n = (i2 - i1).min(10_000.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "non-negative and capped at 10k"
    )]
    let n = n as u64;
    let mut out: Vec<f64> = (0..=n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reverse {
        out.reverse();
    }
    out
}

fn tick_step(min: f64, max: f64, count: usize) -> f64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    match tick_spec(lo, hi, count) {
        Some((_, _, inc)) if inc < 0.0 => 1.0 / -inc,
        Some((_, _, inc)) => inc,
        None => 0.0,
    }
}

/// Infer a `(min, max)` domain for a numeric column.
///
/// Non-finite values are ignored. Returns `None` if no finite values are present.
pub fn infer_domain_f64(data: &dyn TableData, col: ColId) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let n = data.row_count();
    for row in 0..n {
        let Some(v) = data.f64(row, col) else {
            continue;
        };
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

/// Multiplies each end of `domain` by its own padding factor.
///
/// `padded_domain((4.0, 20.0), 0.9, 1.1)` is `(3.6, 22.0)`.
pub fn padded_domain(domain: (f64, f64), pad_low: f64, pad_high: f64) -> (f64, f64) {
    (domain.0 * pad_low, domain.1 * pad_high)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn linear_scale_maps_endpoints_to_range() {
        let s = ScaleLinear::new((10.0, 20.0), (0.0, 100.0));
        assert_eq!(s.map(10.0), 0.0);
        assert_eq!(s.map(20.0), 100.0);
        assert_eq!(s.map(15.0), 50.0);
    }

    #[test]
    fn inverted_range_maps_max_to_top() {
        let s = ScaleLinear::new((0.0, 10.0), (420.0, 0.0));
        assert_eq!(s.map(0.0), 420.0);
        assert_eq!(s.map(10.0), 0.0);
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let s = ScaleLinear::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(s.map(5.0), 0.0);
        assert_eq!(s.map(123.0), 0.0);
    }

    #[test]
    fn ticks_match_d3_for_common_domains() {
        assert_eq!(
            ticks(0.0, 10.0, 10),
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]
        );
        assert_eq!(ticks(8.1, 23.1, 10), vec![10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0]);
        assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn ticks_stay_inside_domain() {
        let t = ticks(3.6, 22.0, 10);
        assert!(t.iter().all(|v| (3.6..=22.0).contains(v)), "{t:?}");
    }

    #[test]
    fn tick_step_reports_fractional_steps() {
        assert_eq!(tick_step(0.0, 1.0, 5), 0.2);
        assert_eq!(tick_step(8.1, 23.1, 10), 2.0);
        assert_eq!(tick_step(35_000.0, 80_000.0, 10), 5_000.0);
    }

    #[test]
    fn padded_domain_scales_each_end() {
        let (lo, hi) = padded_domain((10.0, 20.0), 0.8, 1.0);
        assert_eq!(lo, 8.0);
        assert_eq!(hi, 20.0);
    }
}
