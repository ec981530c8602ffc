//! Euclidean distance in RGB channel space.

use num_traits::Float;

use crate::hex::Rgb;

/// Largest possible distance: black to white, `sqrt(3 * 255²)`.
pub const MAX_DISTANCE: f64 = 441.672_955_930_063_7;

/// Euclidean distance between two colors, in `[0, MAX_DISTANCE]`.
pub fn distance(a: Rgb, b: Rgb) -> f64 {
    Float::sqrt(f64::from(distance_squared(a, b)))
}

/// Sum of squared channel differences.
///
/// Exact, and orders colors the same way [`distance`] does. At most
/// `3 * 255² = 195_075`.
pub fn distance_squared(a: Rgb, b: Rgb) -> u32 {
    let sq = |x: u8, y: u8| {
        let d = u32::from(x.abs_diff(y));
        d * d
    };
    sq(a.r, b.r) + sq(a.g, b.g) + sq(a.b, b.b)
}
