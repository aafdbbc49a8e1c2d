// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a tick value the way d3's default linear tick format does.
///
/// The number of decimals is derived from the tick `step` (so a step of `0.5` prints one
/// decimal) and the integer part uses `,` thousands separators: `40000` with step `5000`
/// prints `40,000`.
pub fn format_tick_with_step(v: f64, step: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let precision = precision_for_step(step);
    let s = format!("{v:.precision$}");
    let (sign, digits) = match s.strip_prefix('-') {
        // Avoid "-0" / "-0.0" for values that round to zero.
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => ("", rest),
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };
    let mut out = String::with_capacity(s.len() + int_part.len() / 3);
    out.push_str(sign);
    out.push_str(&group_thousands(int_part));
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the exponent is negated and capped at 20"
)]
fn precision_for_step(step: f64) -> usize {
    let step = if step < 0.0 { -step } else { step };
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    let exponent = step.log10().floor();
    if exponent >= 0.0 {
        return 0;
    }
    (-exponent).min(20.0) as usize
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i != 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn integers_use_no_decimals() {
        assert_eq!(format_tick_with_step(12.0, 2.0), "12");
        assert_eq!(format_tick_with_step(0.0, 1.0), "0");
    }

    #[test]
    fn fractional_steps_set_precision() {
        assert_eq!(format_tick_with_step(0.5, 0.5), "0.5");
        assert_eq!(format_tick_with_step(2.0, 0.5), "2.0");
        assert_eq!(format_tick_with_step(0.25, 0.05), "0.25");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_tick_with_step(40_000.0, 5_000.0), "40,000");
        assert_eq!(format_tick_with_step(1_234_567.0, 1.0), "1,234,567");
        assert_eq!(format_tick_with_step(-45_000.0, 5_000.0), "-45,000");
        assert_eq!(format_tick_with_step(999.0, 1.0), "999");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(format_tick_with_step(-0.0001, 1.0), "0");
    }
}
