use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, point::Point, types::LayerValue, vector::Vector};

/// Largest supported value label precision.
pub const MAX_ROUNDING_PRECISION: u32 = 15;

/// One ray of the seed fan.
///
/// ### Fields
/// - `origin` - Start of the ray, usually the diagram origin.
/// - `angle` - Direction in degrees.
/// - `length` - Initial length; `None` takes the per-circle length increment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeedVector {
    #[serde(default)]
    pub origin: Point,
    #[serde(default)]
    pub angle: f64,
    #[serde(default)]
    pub length: Option<f64>,
}

impl SeedVector {
    pub fn new(angle: f64) -> Self {
        Self {
            origin: Point::ORIGIN,
            angle,
            length: None,
        }
    }

    /// `count` rays from the origin, evenly spaced starting at 0°.
    pub fn fan(count: usize) -> Vec<Self> {
        let step = 360.0 / count.max(1) as f64;
        (0..count).map(|i| Self::new(i as f64 * step)).collect()
    }

    /// Builds the ring-1 [`Vector`] for this ray.
    pub fn to_vector(&self, default_length: f64) -> Vector {
        Vector::new(self.origin, self.angle, self.length.unwrap_or(default_length))
    }
}

/// Parameters of one generation run.
///
/// ### Fields
/// - `vectors` - Seed fan, in drawing order.
/// - `number_of_circles` - Rings after the origin ring.
/// - `length_increment_per_circle` - Length added to every seed vector per ring.
/// - `base_seed_numerator` - Scales every layer label numerator.
/// - `base_seed_denominator` - Layer step; must be at least 1.
/// - `rounding_precision` - Decimal places of interior value labels.
/// - `draw_circle_arcs` - Whether chords between same-ring points are collected.
/// - `draw_circle_lines` - Whether the final spokes are collected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vectors: Vec<SeedVector>,
    pub number_of_circles: usize,
    pub length_increment_per_circle: f64,
    pub base_seed_numerator: i64,
    pub base_seed_denominator: i64,
    pub rounding_precision: u32,
    pub draw_circle_arcs: bool,
    pub draw_circle_lines: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vectors: SeedVector::fan(6),
            number_of_circles: 10,
            length_increment_per_circle: 1.0,
            base_seed_numerator: 1,
            base_seed_denominator: 1,
            rounding_precision: 4,
            draw_circle_arcs: true,
            draw_circle_lines: true,
        }
    }
}

impl Config {
    /// Checks every parameter the engine relies on.
    ///
    /// ### Returns
    /// - `Ok(())` if a run with this config cannot fail.
    /// - `Err` with the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vectors.len() < 2 {
            return Err(ConfigError::TooFewVectors(self.vectors.len()));
        }
        if self.number_of_circles == 0 {
            return Err(ConfigError::NoCircles);
        }
        if self.base_seed_denominator < 1 {
            return Err(ConfigError::InvalidDenominator(self.base_seed_denominator));
        }
        if self.largest_label().is_none() {
            return Err(ConfigError::LabelOverflow {
                numerator: self.base_seed_numerator,
                denominator: self.base_seed_denominator,
                circles: self.number_of_circles,
            });
        }
        if self.rounding_precision > MAX_ROUNDING_PRECISION {
            return Err(ConfigError::RoundingPrecision {
                got: self.rounding_precision,
                max: MAX_ROUNDING_PRECISION,
            });
        }
        if !self.length_increment_per_circle.is_finite() {
            return Err(non_finite("length_increment_per_circle"));
        }
        for (i, seed) in self.vectors.iter().enumerate() {
            if !seed.origin.is_finite() {
                return Err(non_finite(&format!("vectors[{i}].origin")));
            }
            if !seed.angle.is_finite() {
                return Err(non_finite(&format!("vectors[{i}].angle")));
            }
            if seed.length.is_some_and(|l| !l.is_finite()) {
                return Err(non_finite(&format!("vectors[{i}].length")));
            }
        }
        Ok(())
    }

    /// Magnitude of the largest label term a run computes, or `None` on overflow.
    ///
    /// The outermost layer is `denominator * (number_of_circles + 1)`; every
    /// numerator and interior counter is bounded by `|numerator|` times that.
    fn largest_label(&self) -> Option<LayerValue> {
        let layers = LayerValue::try_from(self.number_of_circles)
            .ok()?
            .checked_add(1)?;
        let outer_layer = self.base_seed_denominator.checked_mul(layers)?;
        self.base_seed_numerator
            .checked_abs()?
            .max(1)
            .checked_mul(outer_layer)
    }

    /// Ring-1 vectors for every seed, in order.
    pub fn seed_vectors(&self) -> Vec<Vector> {
        self.vectors
            .iter()
            .map(|s| s.to_vector(self.length_increment_per_circle))
            .collect()
    }
}

fn non_finite(field: &str) -> ConfigError {
    ConfigError::NonFinite {
        field: field.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = Config::default();
        assert_eq!(cfg.vectors.len(), 6);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn fan_is_evenly_spaced() {
        let fan = SeedVector::fan(4);
        let angles: Vec<f64> = fan.iter().map(|s| s.angle).collect();
        assert_eq!(angles, vec![0.0, 90.0, 180.0, 270.0]);
        assert!(fan.iter().all(|s| s.origin == Point::ORIGIN && s.length.is_none()));
    }

    #[test]
    fn missing_length_takes_increment() {
        let mut cfg = Config::default();
        cfg.length_increment_per_circle = 2.5;
        cfg.vectors = vec![
            SeedVector::new(0.0),
            SeedVector {
                length: Some(1.0),
                ..SeedVector::new(90.0)
            },
        ];

        let seeds = cfg.seed_vectors();
        assert_eq!(seeds[0].length(), 2.5);
        assert_eq!(seeds[0].target(), Point::new(2.5, 0.0));
        assert_eq!(seeds[1].length(), 1.0);
    }

    #[test]
    fn rejects_too_few_vectors() {
        let mut cfg = Config::default();
        cfg.vectors.truncate(1);
        assert_eq!(cfg.validate(), Err(ConfigError::TooFewVectors(1)));
    }

    #[test]
    fn rejects_zero_circles() {
        let mut cfg = Config::default();
        cfg.number_of_circles = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::NoCircles));
    }

    #[test]
    fn rejects_non_positive_denominator() {
        let mut cfg = Config::default();
        cfg.base_seed_denominator = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidDenominator(0)));
        cfg.base_seed_denominator = -3;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidDenominator(-3)));
    }

    #[test]
    fn rejects_labels_that_overflow() {
        let mut cfg = Config::default();
        cfg.vectors = SeedVector::fan(4);
        cfg.number_of_circles = 2;
        cfg.base_seed_numerator = i64::MAX / 2;

        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::LabelOverflow { circles: 2, .. })
        ));
        assert!(crate::engine::generate(&cfg).is_err());

        let mut cfg = Config::default();
        cfg.base_seed_numerator = i64::MIN;
        assert!(matches!(cfg.validate(), Err(ConfigError::LabelOverflow { .. })));

        let mut cfg = Config::default();
        cfg.base_seed_denominator = i64::MAX / 3;
        cfg.number_of_circles = 3;
        assert!(matches!(cfg.validate(), Err(ConfigError::LabelOverflow { .. })));
    }

    #[test]
    fn accepts_largest_label_that_fits() {
        let mut cfg = Config::default();
        cfg.number_of_circles = 2;
        cfg.base_seed_numerator = i64::MAX / 3;
        assert_eq!(cfg.validate(), Ok(()));

        let diagram = crate::engine::generate(&cfg).unwrap();
        assert_eq!(
            diagram.base.fraction_labels.last().unwrap().numerator,
            i64::MAX / 3 * 3
        );
    }

    #[test]
    fn rejects_excessive_precision() {
        let mut cfg = Config::default();
        cfg.rounding_precision = 16;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::RoundingPrecision { got: 16, .. })
        ));
    }

    #[test]
    fn rejects_non_finite_numbers() {
        let mut cfg = Config::default();
        cfg.vectors[2].angle = f64::NAN;
        let err = cfg.validate().unwrap_err();
        assert_eq!(err.to_string(), "vectors[2].angle must be finite");

        let mut cfg = Config::default();
        cfg.length_increment_per_circle = f64::INFINITY;
        assert!(matches!(cfg.validate(), Err(ConfigError::NonFinite { .. })));
    }

    #[test]
    fn negative_increment_is_allowed() {
        let mut cfg = Config::default();
        cfg.length_increment_per_circle = -0.5;
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn deserializes_partial_settings() {
        let json = r#"{
            "number_of_circles": 3,
            "base_seed_denominator": 2,
            "vectors": [
                { "angle": 0.0 },
                { "angle": 120.0, "length": 2.0 },
                { "origin": { "x": 1.0 }, "angle": 240.0 }
            ]
        }"#;

        let cfg: Config = serde_json::from_str(json).unwrap();

        assert_eq!(cfg.number_of_circles, 3);
        assert_eq!(cfg.base_seed_denominator, 2);
        assert_eq!(cfg.base_seed_numerator, 1);
        assert_eq!(cfg.rounding_precision, 4);
        assert_eq!(cfg.vectors.len(), 3);
        assert_eq!(cfg.vectors[1].length, Some(2.0));
        assert_eq!(cfg.vectors[2].origin, Point::new(1.0, 0.0));
        assert!(cfg.draw_circle_arcs && cfg.draw_circle_lines);
    }
}
