//! Shared nonlinear transforms for pillar scores.

/// Signed sigmoid mapping any real delta into (-1, 1).
///
/// Larger `scale` saturates faster, so smaller raw deltas already read as a
/// near-total advantage.
pub fn sigmoid(x: f64, scale: f64) -> f64 {
    2.0 / (1.0 + (-x * scale).exp()) - 1.0
}

/// Power-law stretch that pushes mid-range scores toward the extremes while
/// preserving sign. Powers above 1 steepen the curve.
pub fn amplify(x: f64, power: f64) -> f64 {
    let sign = if x >= 0.0 { 1.0 } else { -1.0 };
    sign * x.abs().powf(power)
}
