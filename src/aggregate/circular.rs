//! Circular statistics for wind direction.

/// Resultant vectors shorter than this count as degenerate.
const RESULTANT_EPSILON: f64 = 1e-9;

/// Circular mean of directions given in degrees.
///
/// Averages the unit vectors of the inputs (S = mean sin, C = mean cos) and
/// returns `atan2(S, C)` mapped into [0, 360). Yields `None` for an empty
/// input and for a zero-length resultant — opposite or uniformly spread
/// directions (e.g. 0°, 90°, 180°, 270°) cancel out and have no meaningful
/// mean.
pub fn circular_mean_deg(degrees: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut sin_sum = 0.0;
    let mut cos_sum = 0.0;
    let mut count = 0u32;
    for deg in degrees {
        let rad = deg.to_radians();
        sin_sum += rad.sin();
        cos_sum += rad.cos();
        count += 1;
    }
    if count == 0 {
        return None;
    }
    let s = sin_sum / f64::from(count);
    let c = cos_sum / f64::from(count);
    if (s * s + c * c).sqrt() < RESULTANT_EPSILON {
        return None;
    }
    Some((s.atan2(c).to_degrees() + 360.0) % 360.0)
}
