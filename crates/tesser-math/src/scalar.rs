//! Scalar helpers shared by the rotation paths.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Reconstruct `cos(angle)` from an already computed `sin(angle)`.
///
/// Uses `sqrt(1 - sin²)` and recovers the sign from the quadrant of `angle`,
/// so a rotation built from `sin` and this value stays consistent with the
/// half-angle it was derived from.
#[inline]
pub fn cos_from_sin(sin: f32, angle: f32) -> f32 {
    let cos = (1.0 - sin * sin).max(0.0).sqrt();
    let shifted = angle + FRAC_PI_2;
    let mut b = shifted - (shifted / TAU).trunc() * TAU;
    if b < 0.0 {
        b += TAU;
    }
    if b >= PI { -cos } else { cos }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_matches_cos_across_quadrants() {
        for i in -16..=16 {
            let angle = i as f32 * 0.4;
            assert_abs_diff_eq!(cos_from_sin(angle.sin(), angle), angle.cos(), epsilon = 1e-3);
        }
    }

    #[test]
    fn test_zero_and_right_angle() {
        assert_eq!(cos_from_sin(0.0, 0.0), 1.0);
        assert_abs_diff_eq!(cos_from_sin(PI.sin(), PI), -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(cos_from_sin(FRAC_PI_2.sin(), FRAC_PI_2), 0.0, epsilon = 1e-3);
    }
}
