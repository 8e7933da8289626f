/// Linear interpolation between two scalars.
///
/// `amount = 0` returns `a` and `amount = 1` returns `b`, both exactly,
/// which the shorter `a + (b - a) * amount` form does not guarantee under
/// floating-point rounding.
#[inline]
pub fn lerp(a: f64, b: f64, amount: f64) -> f64 {
    a * (1.0 - amount) + b * amount
}

/// Linear interpolation between two 2d points.
#[inline]
pub fn lerp_point(a: &[f64; 2], b: &[f64; 2], amount: f64) -> [f64; 2] {
    [lerp(a[0], b[0], amount), lerp(a[1], b[1], amount)]
}

/// Elementwise linear interpolation between two point sets.
///
/// # Panics
///
/// Panics if the two point sets differ in length.
pub fn lerp_points(a: &[[f64; 2]], b: &[[f64; 2]], amount: f64) -> Vec<[f64; 2]> {
    assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(pa, pb)| lerp_point(pa, pb, amount))
        .collect()
}
