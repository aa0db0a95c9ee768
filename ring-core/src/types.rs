/// Integer value carried by the layer counters.
///
/// Layers start at the base seed denominator and grow by it once per ring,
/// so they are always whole multiples of that denominator.
pub type LayerValue = i64;

/// Number of decimal places kept for every derived [`crate::vector::Vector`] target.
pub const TARGET_PRECISION: u32 = 3;

/// Rounds `value` to `places` decimal places, ties to even.
///
/// ### Parameters
/// - `value` - The number to round.
/// - `places` - Decimal places to keep.
///
/// ### Returns
/// The rounded value. `-0.0` is normalized to `0.0`.
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    let rounded = (value * scale).round_ties_even() / scale;
    if rounded == 0.0 { 0.0 } else { rounded }
}
