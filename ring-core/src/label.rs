//! Fraction and decimal value labels attached to diagram points.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{LayerValue, round_to};

/// A textual `numerator/denominator` annotation.
///
/// The fraction is never reduced: `2/2` and `4/4` are distinct labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FractionLabel {
    pub numerator: LayerValue,
    pub denominator: LayerValue,
}

impl FractionLabel {
    pub const fn new(numerator: LayerValue, denominator: LayerValue) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Label of a ring boundary point: `seed_numerator * layer / layer`.
    pub const fn boundary(seed_numerator: LayerValue, layer: LayerValue) -> Self {
        Self::new(seed_numerator * layer, layer)
    }
}

impl fmt::Display for FractionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Which counter goes on top of an interior label.
///
/// Adjacent seed-vector pairs alternate between the two orders so that the
/// subdivisions flip orientation consistently around the fan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelOrder {
    /// Even pair index: `seed_numerator * value / inner_layer`.
    NumeratorFirst,
    /// Odd pair index: `value / (seed_numerator * inner_layer)`.
    DenominatorFirst,
}

impl LabelOrder {
    /// Picks the order for the pair starting at seed vector `index`.
    pub fn for_pair(index: usize) -> Self {
        if index % 2 == 1 {
            Self::DenominatorFirst
        } else {
            Self::NumeratorFirst
        }
    }

    /// Fraction label of an interior point.
    ///
    /// ### Parameters
    /// - `seed_numerator` - The base seed numerator.
    /// - `value` - The running interior counter of the current pair.
    /// - `inner_layer` - The layer value from before the ring grew.
    pub fn fraction(
        self,
        seed_numerator: LayerValue,
        value: LayerValue,
        inner_layer: LayerValue,
    ) -> FractionLabel {
        match self {
            Self::NumeratorFirst => FractionLabel::new(seed_numerator * value, inner_layer),
            Self::DenominatorFirst => FractionLabel::new(value, seed_numerator * inner_layer),
        }
    }

    /// Decimal value of an interior point, before rounding.
    ///
    /// The denominator-first order evaluates to `seed_numerator * inner_layer / value`,
    /// which is intentionally not the quotient of its fraction label.
    pub fn value(self, seed_numerator: LayerValue, value: LayerValue, inner_layer: LayerValue) -> f64 {
        let n = seed_numerator as f64;
        match self {
            Self::NumeratorFirst => n * value as f64 / inner_layer as f64,
            Self::DenominatorFirst => n * inner_layer as f64 / value as f64,
        }
    }
}

/// Renders a decimal value label.
///
/// The value is rounded to `precision` places; integral results drop the
/// fractional part entirely (`2`, never `2.0`).
pub fn format_value(value: f64, precision: u32) -> String {
    let rounded = round_to(value, precision);
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded}")
    }
}
