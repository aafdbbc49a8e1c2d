// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which field each axis plots.

use core::fmt;
use core::str::FromStr;

use scatterviz_data::{Field, FieldParseError};
use thiserror::Error;

/// Fields selectable on the horizontal axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum XField {
    /// In poverty (%).
    #[default]
    Poverty,
    /// Median age.
    Age,
    /// Median household income.
    Income,
}

/// Fields selectable on the vertical axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum YField {
    /// Lacks healthcare (%).
    #[default]
    Healthcare,
    /// Smokes (%).
    Smokes,
    /// Obese (%).
    Obesity,
}

impl XField {
    /// Options in display order.
    pub const ALL: [Self; 3] = [Self::Poverty, Self::Age, Self::Income];

    /// The underlying data field.
    pub const fn field(self) -> Field {
        match self {
            Self::Poverty => Field::Poverty,
            Self::Age => Field::Age,
            Self::Income => Field::Income,
        }
    }

    /// Text of the clickable option label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Poverty => "In Poverty (%)",
            Self::Age => "Age (Median)",
            Self::Income => "Household Income (Median)",
        }
    }
}

impl YField {
    /// Options in display order.
    pub const ALL: [Self; 3] = [Self::Healthcare, Self::Smokes, Self::Obesity];

    /// The underlying data field.
    pub const fn field(self) -> Field {
        match self {
            Self::Healthcare => Field::Healthcare,
            Self::Smokes => Field::Smokes,
            Self::Obesity => Field::Obesity,
        }
    }

    /// Text of the clickable option label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Healthcare => "Lacks Healthcare (%)",
            Self::Smokes => "Smokes (%)",
            Self::Obesity => "Obese (%)",
        }
    }
}

impl TryFrom<Field> for XField {
    type Error = SelectionError;

    fn try_from(field: Field) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|x| x.field() == field)
            .ok_or(SelectionError::WrongAxis { field, axis: Axis::X })
    }
}

impl TryFrom<Field> for YField {
    type Error = SelectionError;

    fn try_from(field: Field) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|y| y.field() == field)
            .ok_or(SelectionError::WrongAxis { field, axis: Axis::Y })
    }
}

impl FromStr for XField {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Field>()?.try_into()
    }
}

impl FromStr for YField {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Field>()?.try_into()
    }
}

/// One of the two chart axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl Axis {
    /// Name used in the `axis` attribute of option labels.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            _ => Err(SelectionError::UnknownAxis(s.to_string())),
        }
    }
}

/// A clicked option label: one axis together with the field it offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisField {
    /// An x option.
    X(XField),
    /// A y option.
    Y(YField),
}

impl AxisField {
    /// The axis this option belongs to.
    pub const fn axis(self) -> Axis {
        match self {
            Self::X(_) => Axis::X,
            Self::Y(_) => Axis::Y,
        }
    }

    /// The data field this option selects.
    pub const fn field(self) -> Field {
        match self {
            Self::X(x) => x.field(),
            Self::Y(y) => y.field(),
        }
    }

    /// Parses the `axis`/`value` attribute pair carried by an option label.
    pub fn from_attrs(axis: &str, value: &str) -> Result<Self, SelectionError> {
        match axis.parse::<Axis>()? {
            Axis::X => value.parse().map(Self::X),
            Axis::Y => value.parse().map(Self::Y),
        }
    }
}

impl From<XField> for AxisField {
    fn from(x: XField) -> Self {
        Self::X(x)
    }
}

impl From<YField> for AxisField {
    fn from(y: YField) -> Self {
        Self::Y(y)
    }
}

/// The view state: one field per axis.
///
/// `(Poverty, Healthcare)` by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Field on the horizontal axis.
    pub x: XField,
    /// Field on the vertical axis.
    pub y: YField,
}

impl Selection {
    /// Creates a selection.
    pub const fn new(x: XField, y: YField) -> Self {
        Self { x, y }
    }

    /// All nine combinations, x-major.
    pub fn all() -> impl Iterator<Item = Self> {
        XField::ALL
            .into_iter()
            .flat_map(|x| YField::ALL.into_iter().map(move |y| Self::new(x, y)))
    }

    /// Whether `choice` is the field currently shown on its axis.
    pub fn is_active(&self, choice: AxisField) -> bool {
        match choice {
            AxisField::X(x) => self.x == x,
            AxisField::Y(y) => self.y == y,
        }
    }

    /// Returns the selection with `choice` applied to its axis; the other axis is untouched.
    #[must_use]
    pub fn with(self, choice: AxisField) -> Self {
        match choice {
            AxisField::X(x) => Self { x, ..self },
            AxisField::Y(y) => Self { y, ..self },
        }
    }

    /// The field shown on `axis`.
    pub fn field(&self, axis: Axis) -> Field {
        match axis {
            Axis::X => self.x.field(),
            Axis::Y => self.y.field(),
        }
    }
}

/// Errors from parsing axis or option names.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Not one of the six field names.
    #[error(transparent)]
    UnknownField(#[from] FieldParseError),
    /// Neither `x` nor `y`.
    #[error("unknown axis `{0}`")]
    UnknownAxis(String),
    /// A valid field that the axis does not offer.
    #[error("field `{field}` is not selectable on the {axis} axis")]
    WrongAxis {
        /// The field that was asked for.
        field: Field,
        /// The axis it was asked for on.
        axis: Axis,
    },
}
