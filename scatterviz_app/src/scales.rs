// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales derived from the dataset.

use scatterviz_charts::{ScaleLinear, infer_domain_f64, padded_domain};
use scatterviz_data::{Dataset, Field};

/// Direction of a scale's pixel range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Range `[0, axis_length]`, growing to the right.
    Horizontal,
    /// Range `[axis_length, 0]`, so larger values sit higher up.
    Vertical,
}

/// Builds the linear scale for `field`.
///
/// The domain is `[min * pad_low, max * pad_high]` over the finite values of the field. A
/// field without any finite value gets the domain `(0, 0)`, which maps everything to the
/// start of the range.
pub fn build_scale(
    dataset: &Dataset,
    field: Field,
    axis_length: f64,
    pad_low: f64,
    pad_high: f64,
    orientation: Orientation,
) -> ScaleLinear {
    let domain = match infer_domain_f64(dataset, field.col()) {
        Some(d) => padded_domain(d, pad_low, pad_high),
        None => {
            tracing::warn!(%field, "no finite values; using an empty domain");
            (0.0, 0.0)
        }
    };
    let range = match orientation {
        Orientation::Horizontal => (0.0, axis_length),
        Orientation::Vertical => (axis_length, 0.0),
    };
    tracing::debug!(%field, ?domain, ?range, "built scale");
    ScaleLinear::new(domain, range)
}

#[cfg(test)]
mod tests {
    use scatterviz_data::Row;

    use super::*;

    fn dataset(poverty: &[f64]) -> Dataset {
        Dataset::new(
            poverty
                .iter()
                .enumerate()
                .map(|(i, &p)| Row {
                    state: format!("S{i}"),
                    abbr: format!("S{i}"),
                    poverty: p,
                    age: 30.0,
                    income: 40_000.0,
                    healthcare: 10.0,
                    smokes: 20.0,
                    obesity: 30.0,
                })
                .collect(),
        )
    }

    #[test]
    fn domain_is_padded_min_max() {
        let ds = dataset(&[10.0, 20.0, 15.0]);
        let s = build_scale(&ds, Field::Poverty, 820.0, 0.9, 1.1, Orientation::Horizontal);
        assert_eq!(s.domain(), (9.0, 22.0));
        assert_eq!(s.range(), (0.0, 820.0));
    }

    #[test]
    fn vertical_scales_are_inverted() {
        let ds = dataset(&[10.0, 20.0]);
        let s = build_scale(&ds, Field::Poverty, 420.0, 0.8, 1.0, Orientation::Vertical);
        assert_eq!(s.domain(), (8.0, 20.0));
        assert_eq!(s.map(20.0), 0.0);
        assert_eq!(s.map(8.0), 420.0);
    }

    #[test]
    fn non_finite_values_are_ignored() {
        let ds = dataset(&[f64::NAN, 10.0, 20.0]);
        let s = build_scale(&ds, Field::Poverty, 100.0, 1.0, 1.0, Orientation::Horizontal);
        assert_eq!(s.domain(), (10.0, 20.0));
    }

    #[test]
    fn all_nan_column_gives_empty_domain() {
        let ds = dataset(&[f64::NAN, f64::NAN]);
        let s = build_scale(&ds, Field::Poverty, 100.0, 0.9, 1.1, Orientation::Horizontal);
        assert_eq!(s.domain(), (0.0, 0.0));
        assert_eq!(s.map(5.0), 0.0);
    }
}
