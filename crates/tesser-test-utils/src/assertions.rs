//! Float assertions for vectors.

use tesser_math::{Vector4Ops, Vector4View};

/// Largest absolute component difference between two views. NaN anywhere
/// makes the result NaN.
pub fn max_abs_diff(a: &(impl Vector4View + ?Sized), b: &(impl Vector4View + ?Sized)) -> f32 {
    a.to_array()
        .into_iter()
        .zip(b.to_array())
        .map(|(p, q)| (p - q).abs())
        .fold(0.0, |acc: f32, d| if d.is_nan() || d > acc { d } else { acc })
}

/// Assert two vector views agree component-wise within `epsilon`
/// (default `1e-5`).
///
/// ```rust
/// use tesser_math::Vector4;
/// use tesser_test_utils::assert_vec4_near;
///
/// assert_vec4_near!(Vector4::new(1.0, 2.0, 3.0, 4.0), [1.0f32, 2.0, 3.0, 4.000001]);
/// ```
#[macro_export]
macro_rules! assert_vec4_near {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_vec4_near!($left, $right, epsilon = 1e-5)
    };
    ($left:expr, $right:expr, epsilon = $eps:expr $(,)?) => {{
        let left = &$left;
        let right = &$right;
        let diff = $crate::assertions::max_abs_diff(left, right);
        assert!(
            diff <= $eps,
            "vectors differ by {} (epsilon {}): {:?} vs {:?}",
            diff,
            $eps,
            <_ as $crate::tesser_math::Vector4Ops>::to_array(left),
            <_ as $crate::tesser_math::Vector4Ops>::to_array(right),
        );
    }};
}
