//! Oriented segments with a derived, always up-to-date target.
//!
//! A [`Vector`] is defined by an origin, an angle in degrees and a length.
//! Its `target` is derived from those three inputs and rebuilt by every
//! setter before it returns, so a caller can never observe a stale target.

use std::ops::Sub;

use glam::DVec2;

use crate::{
    point::Point,
    types::{TARGET_PRECISION, round_to},
};

/// An oriented segment starting at `origin`.
///
/// ### Fields
/// - `origin` - Start point of the segment.
/// - `angle` - Direction in degrees, counter-clockwise from the +x axis.
/// - `length` - Signed length; a negative length points backwards.
/// - `radians` - Cached `angle` in radians.
/// - `target` - `origin + length * (cos, sin)`, rounded to 3 decimals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector {
    origin: Point,
    angle: f64,
    length: f64,
    radians: f64,
    target: Point,
}

impl Default for Vector {
    fn default() -> Self {
        Self::new(Point::ORIGIN, 0.0, 1.0)
    }
}

impl Vector {
    /// Creates a vector and eagerly computes its target.
    pub fn new(origin: Point, angle: f64, length: f64) -> Self {
        let mut v = Self {
            origin,
            angle,
            length,
            radians: 0.0,
            target: origin,
        };
        v.rebuild();
        v
    }

    /// Recomputes the radians cache and the target from the inputs.
    fn rebuild(&mut self) {
        self.radians = self.angle.to_radians();
        let end = DVec2::from(self.origin) + DVec2::from_angle(self.radians) * self.length;
        self.target = Point::new(
            round_to(end.x, TARGET_PRECISION),
            round_to(end.y, TARGET_PRECISION),
        );
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn angle_in_radians(&self) -> f64 {
        self.radians
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn target(&self) -> Point {
        self.target
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
        self.rebuild();
    }

    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
        self.rebuild();
    }

    pub fn set_length(&mut self, length: f64) {
        self.length = length;
        self.rebuild();
    }

    /// Grows the length by `delta` in place.
    pub fn extend_by(&mut self, delta: f64) {
        self.set_length(self.length + delta);
    }

    pub fn with_origin(self, origin: Point) -> Self {
        Self::new(origin, self.angle, self.length)
    }

    pub fn with_angle(self, angle: f64) -> Self {
        Self::new(self.origin, angle, self.length)
    }

    pub fn with_length(self, length: f64) -> Self {
        Self::new(self.origin, self.angle, length)
    }
}

impl Sub for &Vector {
    type Output = Vector;

    /// Builds the vector from `rhs.target` to `self.target`.
    ///
    /// The new origin is `rhs.target`, the angle is `atan2(dy, dx)` in
    /// degrees and the length is the distance between the two targets,
    /// rounded to 3 decimals. Coincident targets give a zero-length vector
    /// with angle `0`.
    fn sub(self, rhs: Self) -> Vector {
        let delta = DVec2::from(self.target) - DVec2::from(rhs.target);
        let angle = if delta == DVec2::ZERO {
            0.0
        } else {
            delta.y.atan2(delta.x).to_degrees()
        };
        let length = round_to(vector_length(delta.x, delta.y), TARGET_PRECISION);
        Vector::new(rhs.target, angle, length)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        &self - &rhs
    }
}

/// Euclidean norm of `(x, y)`.
#[inline]
pub fn vector_length(x: f64, y: f64) -> f64 {
    x.hypot(y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn expected_target(v: &Vector) -> Point {
        let r = v.angle().to_radians();
        Point::new(
            round_to(v.origin().x() + v.length() * r.cos(), 3),
            round_to(v.origin().y() + v.length() * r.sin(), 3),
        )
    }

    #[test]
    fn default_points_along_x_axis() {
        let v = Vector::default();
        assert_eq!(v.origin(), Point::ORIGIN);
        assert_eq!(v.angle(), 0.0);
        assert_eq!(v.length(), 1.0);
        assert_eq!(v.target(), Point::new(1.0, 0.0));
    }

    #[test]
    fn target_is_rounded_to_three_places() {
        let v = Vector::new(Point::ORIGIN, 60.0, 1.0);
        assert_eq!(v.target(), Point::new(0.5, 0.866));

        let v = Vector::new(Point::new(1.0, 1.0), 90.0, 2.0);
        assert_eq!(v.target(), Point::new(1.0, 3.0));
    }

    #[test]
    fn setters_rebuild_target_immediately() {
        let mut v = Vector::new(Point::ORIGIN, 0.0, 1.0);

        v.set_length(3.0);
        assert_eq!(v.target(), Point::new(3.0, 0.0));

        v.set_angle(90.0);
        assert_eq!(v.target(), Point::new(0.0, 3.0));
        assert!((v.angle_in_radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);

        v.set_origin(Point::new(-1.0, 2.0));
        assert_eq!(v.target(), Point::new(-1.0, 5.0));

        v.extend_by(-1.0);
        assert_eq!(v.length(), 2.0);
        assert_eq!(v.target(), Point::new(-1.0, 4.0));
    }

    #[test]
    fn random_mutation_sequences_never_leave_stale_target() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut v = Vector::default();

        for _ in 0..500 {
            match rng.random_range(0..4) {
                0 => v.set_origin(Point::new(
                    rng.random_range(-50.0..50.0),
                    rng.random_range(-50.0..50.0),
                )),
                1 => v.set_angle(rng.random_range(-720.0..720.0)),
                2 => v.set_length(rng.random_range(-20.0..20.0)),
                _ => v.extend_by(rng.random_range(-2.0..2.0)),
            }
            assert_eq!(v.target(), expected_target(&v));
        }
    }

    #[test]
    fn with_builders_leave_original_untouched() {
        let v = Vector::new(Point::ORIGIN, 0.0, 1.0);
        let longer = v.with_length(4.0);
        let turned = v.with_angle(180.0);
        let moved = v.with_origin(Point::new(0.0, 1.0));

        assert_eq!(v.target(), Point::new(1.0, 0.0));
        assert_eq!(longer.target(), Point::new(4.0, 0.0));
        assert_eq!(turned.target(), Point::new(-1.0, 0.0));
        assert_eq!(moved.target(), Point::new(1.0, 1.0));
    }

    #[test]
    fn copy_is_independent() {
        let mut v = Vector::new(Point::ORIGIN, 45.0, 2.0);
        let snapshot = v;
        v.set_length(10.0);

        assert_eq!(snapshot.length(), 2.0);
        assert_eq!(snapshot.target(), expected_target(&snapshot));
        assert_ne!(snapshot.target(), v.target());
    }

    #[test]
    fn subtraction_spans_between_targets() {
        let a = Vector::new(Point::ORIGIN, 90.0, 1.0);
        let b = Vector::new(Point::ORIGIN, 0.0, 1.0);

        let d = &a - &b;

        // From (1, 0) to (0, 1).
        assert_eq!(d.origin(), b.target());
        assert_eq!(d.length(), 1.414);
        assert!((d.angle() - 135.0).abs() < 1e-9);
        assert_eq!(d.target(), Point::new(0.0, 1.0));
    }

    #[test]
    fn subtraction_direction_is_self_minus_other() {
        let a = Vector::new(Point::ORIGIN, 0.0, 2.0);
        let b = Vector::new(Point::ORIGIN, 180.0, 2.0);

        let ab = a - b;
        let ba = b - a;

        assert_eq!(ab.origin(), Point::new(-2.0, 0.0));
        assert_eq!(ab.angle(), 0.0);
        assert_eq!(ba.origin(), Point::new(2.0, 0.0));
        assert!((ba.angle() - 180.0).abs() < 1e-9);
        assert_eq!(ab.length(), ba.length());
    }

    #[test]
    fn subtraction_of_coincident_targets_is_zero_length() {
        let a = Vector::new(Point::new(1.0, 1.0), 30.0, 0.0);
        let b = Vector::new(Point::new(1.0, 1.0), 210.0, 0.0);

        let d = a - b;

        assert_eq!(d.length(), 0.0);
        assert_eq!(d.angle(), 0.0);
        assert_eq!(d.target(), d.origin());
    }

    #[test]
    fn vector_length_is_euclidean() {
        assert_eq!(vector_length(3.0, 4.0), 5.0);
        assert_eq!(vector_length(0.0, 0.0), 0.0);
    }
}
