//! Per-ring steps of the layer algorithm.
//!
//! A generation run looks like:
//! 1. [`origin_ring`] — the single boundary point at `(0, 0)`.
//! 2. [`seed_ring`] — one boundary point per seed vector as given, plus
//!    the chords between neighbouring rays.
//! 3. For every further ring:
//!    - [`growth_ring`] — lengthen every seed vector in place and emit
//!      the new boundary points.
//!    - [`subdivide_ring`] — walk the chord between each pair of
//!      neighbouring boundary points and emit the interior points.

use tracing::trace;

use crate::{
    engine::{BoundaryPoints, InteriorPoints},
    label::{FractionLabel, LabelOrder, format_value},
    point::Point,
    types::LayerValue,
    vector::Vector,
};

/// Label arithmetic shared by all rings of a run.
///
/// ### Fields
/// - `seed_numerator` - Scales every label numerator.
/// - `step` - Amount each layer and interior counter grows by.
/// - `precision` - Decimal places of interior value labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelParams {
    pub seed_numerator: LayerValue,
    pub step: LayerValue,
    pub precision: u32,
}

/// Emits the origin point labelled `seed_numerator * step / step`.
pub fn origin_ring(base: &mut BoundaryPoints, labels: &LabelParams) {
    base.push(
        Point::ORIGIN,
        FractionLabel::boundary(labels.seed_numerator, labels.step),
    );
}

/// Emits the boundary points of the unmodified seed vectors.
///
/// For every seed vector `i` the chord `vectors[i] - vectors[(i + 1) % n]`
/// is pushed into `arcs` when arcs are collected.
///
/// ### Parameters
/// - `vectors` - The seed fan.
/// - `layer` - Current layer value, used for the `n*layer/layer` label.
/// - `labels` - Shared label arithmetic.
/// - `base` - Output list of boundary points.
/// - `arcs` - Output list of chords, or `None` to skip them.
pub fn seed_ring(
    vectors: &[Vector],
    layer: LayerValue,
    labels: &LabelParams,
    base: &mut BoundaryPoints,
    mut arcs: Option<&mut Vec<Vector>>,
) {
    let label = FractionLabel::boundary(labels.seed_numerator, layer);
    for (i, vector) in vectors.iter().enumerate() {
        base.push(vector.target(), label);

        if let Some(arcs) = arcs.as_deref_mut() {
            let next = &vectors[(i + 1) % vectors.len()];
            arcs.push(vector - next);
        }
    }
}

/// Lengthens every seed vector by `increment` and emits its new target.
///
/// The vectors are mutated in place; their targets reflect the new length
/// as soon as [`Vector::extend_by`] returns.
pub fn growth_ring(
    vectors: &mut [Vector],
    increment: f64,
    layer: LayerValue,
    labels: &LabelParams,
    base: &mut BoundaryPoints,
) {
    let label = FractionLabel::boundary(labels.seed_numerator, layer);
    for vector in vectors.iter_mut() {
        vector.extend_by(increment);
        base.push(vector.target(), label);
    }
}

/// Subdivides the chord between every pair of neighbouring rays.
///
/// For each pair `(i, (i + 1) % n)`:
///
/// 1. Pick the [`LabelOrder`] for `i`. Even pairs span from `vectors[i]`
///    to its neighbour (`next - current`), odd pairs span the other way
///    (`current - next`).
/// 2. Push a copy of the chord into `arcs` when arcs are collected.
/// 3. Split the chord into `circle_index + 1` equal segments and walk the
///    first `circle_index` of them. The far end of the last segment is an
///    already emitted boundary point and is skipped.
/// 4. At each step, grow the interior counter by `labels.step` and emit
///    the walked-to point with its fraction and value labels.
///
/// Zero-length chords are legal and repeat the same point.
///
/// ### Parameters
/// - `vectors` - Seed vectors after this ring's growth.
/// - `circle_index` - Growth ring index, starting at 1.
/// - `inner_layer` - Layer value from before this ring grew.
/// - `labels` - Shared label arithmetic.
/// - `middle` - Output list of interior points.
/// - `arcs` - Output list of chords, or `None` to skip them.
pub fn subdivide_ring(
    vectors: &[Vector],
    circle_index: usize,
    inner_layer: LayerValue,
    labels: &LabelParams,
    middle: &mut InteriorPoints,
    mut arcs: Option<&mut Vec<Vector>>,
) {
    let segments = (circle_index + 1) as f64;

    for (i, vector) in vectors.iter().enumerate() {
        let next = &vectors[(i + 1) % vectors.len()];
        let order = LabelOrder::for_pair(i);
        let mut combination = match order {
            LabelOrder::NumeratorFirst => next - vector,
            LabelOrder::DenominatorFirst => vector - next,
        };

        if let Some(arcs) = arcs.as_deref_mut() {
            arcs.push(combination);
        }

        let segment = combination.length() / segments;
        combination.set_length(0.0);

        let mut value: LayerValue = 0;
        for _ in 0..circle_index {
            combination.extend_by(segment);
            value += labels.step;

            let fraction = order.fraction(labels.seed_numerator, value, inner_layer);
            let decimal = order.value(labels.seed_numerator, value, inner_layer);
            trace!(pair = i, %fraction, decimal, "interior point");

            middle.push(
                combination.target(),
                fraction,
                format_value(decimal, labels.precision),
            );
        }
    }
}
