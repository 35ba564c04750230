//! Algebraic properties of `Vector4`.
//!
//! These cover the arithmetic round trips, normalization, interpolation
//! boundaries and the equality/hash contract.

use std::collections::HashSet;

use approx::assert_abs_diff_eq;
use tesser_math::{Vector4, Vector4Ops, Vector4View, VectorError};
use tesser_test_utils::assert_vec4_near;

fn samples() -> Vec<Vector4> {
    vec![
        Vector4::new(1.0, 2.0, 3.0, 4.0),
        Vector4::new(-0.5, 0.25, 1e3, -7.0),
        Vector4::new(0.001, -0.002, 0.003, 0.0),
        Vector4::new(12.5, -3.75, 0.0, 1.0),
    ]
}

#[test]
fn test_add_then_sub_round_trips() {
    let offset = Vector4::new(0.3, -1.7, 2.9, 0.01);
    for v in samples() {
        let mut w = v;
        w.add(&offset).sub(&offset);
        assert_vec4_near!(w, v, epsilon = 1e-3);
    }
}

#[test]
fn test_normalize_gives_unit_length() {
    for v in samples() {
        let mut n = v;
        n.normalize();
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn test_normalize_into_leaves_receiver() {
    let v = Vector4::new(0.0, 0.0, 2.0, 0.0);
    let mut dest = Vector4::default();
    v.normalize_into(&mut dest);
    assert_eq!(dest, Vector4::new(0.0, 0.0, 1.0, 0.0));
    assert_eq!(v.z, 2.0);
}

#[test]
fn test_lerp_is_exact_at_endpoints() {
    let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
    let b = Vector4::new(5.0, -6.0, 7.5, 0.0);
    let mut dest = Vector4::default();

    a.lerp_into(&b, 0.0, &mut dest);
    assert_eq!(dest, a);
    a.lerp_into(&b, 1.0, &mut dest);
    assert_eq!(dest, b);

    let mut mid = a;
    mid.lerp(&b, 0.5);
    assert_eq!(mid, Vector4::new(3.0, -2.0, 5.25, 2.0));
}

#[test]
fn test_lerp_extrapolates() {
    let a = Vector4::ZERO;
    let b = Vector4::ONE;
    let mut dest = Vector4::default();
    a.lerp_into(&b, 2.0, &mut dest);
    assert_eq!(dest, Vector4::splat(2.0));
    a.lerp_into(&b, -1.0, &mut dest);
    assert_eq!(dest, Vector4::splat(-1.0));
}

#[test]
fn test_smooth_step_endpoints_and_midpoint() {
    let a = Vector4::new(0.0, 2.0, -4.0, 1.0);
    let b = Vector4::new(8.0, 2.0, 4.0, 0.0);
    let mut dest = Vector4::default();

    a.smooth_step_into(&b, 0.0, &mut dest);
    assert_vec4_near!(dest, a);
    a.smooth_step_into(&b, 1.0, &mut dest);
    assert_vec4_near!(dest, b);
    a.smooth_step_into(&b, 0.5, &mut dest);
    assert_vec4_near!(dest, Vector4::new(4.0, 2.0, 0.0, 0.5));
    a.smooth_step_into(&b, 0.25, &mut dest);
    // 3t^2 - 2t^3 at t = 0.25 is 0.15625
    assert_abs_diff_eq!(dest.x, 8.0 * 0.15625, epsilon = 1e-5);
}

#[test]
fn test_hermite_matches_smooth_step_with_flat_tangents() {
    let a = Vector4::new(1.0, -1.0, 3.0, 0.0);
    let b = Vector4::new(-2.0, 5.0, 3.0, 1.0);
    let flat = Vector4::ZERO;
    let mut hermite = Vector4::default();
    let mut smooth = Vector4::default();
    for i in 0..=8 {
        let t = i as f32 / 8.0;
        a.hermite_into(&flat, &b, &flat, t, &mut hermite);
        a.smooth_step_into(&b, t, &mut smooth);
        assert_vec4_near!(hermite, smooth);
    }
}

#[test]
fn test_hermite_endpoints_and_tangent() {
    let p0 = Vector4::new(0.0, 0.0, 0.0, 0.0);
    let p1 = Vector4::new(1.0, 1.0, 1.0, 1.0);
    let m0 = Vector4::new(1.0, 0.0, 0.0, 0.0);
    let m1 = Vector4::new(1.0, 0.0, 0.0, 0.0);
    let mut dest = Vector4::default();

    p0.hermite_into(&m0, &p1, &m1, 0.0, &mut dest);
    assert_vec4_near!(dest, p0);
    p0.hermite_into(&m0, &p1, &m1, 1.0, &mut dest);
    assert_vec4_near!(dest, p1);

    // x follows the straight line p(t) = t since the tangents agree with it
    p0.hermite_into(&m0, &p1, &m1, 0.3, &mut dest);
    assert_abs_diff_eq!(dest.x, 0.3, epsilon = 1e-5);
}

#[test]
fn test_dot_length_distance() {
    let a = Vector4::new(1.0, 2.0, 2.0, 4.0);
    let b = Vector4::new(1.0, 0.0, 0.0, 0.0);
    assert_eq!(a.dot(&b), 1.0);
    assert_eq!(a.dot_xyzw(0.0, 1.0, 1.0, 1.0), 8.0);
    assert_eq!(a.length_squared(), 25.0);
    assert_eq!(a.length(), 5.0);
    assert_eq!(a.distance(&b), 24.0f32.sqrt());
    assert_eq!(a.distance_xyzw(1.0, 2.0, 2.0, 0.0), 4.0);
    assert_eq!(a.distance_squared(&b), 24.0);
}

#[test]
fn test_angle_is_clamped() {
    let v = Vector4::new(0.1, 0.7, 0.3, 0.9);
    let scaled = Vector4::new(0.3, 2.1, 0.9, 2.7);
    let angle = v.angle(&scaled);
    assert!(!angle.is_nan());
    assert_abs_diff_eq!(angle, 0.0, epsilon = 1e-3);

    let mut opposite = scaled;
    opposite.negate();
    assert_abs_diff_eq!(v.angle(&opposite), std::f32::consts::PI, epsilon = 1e-3);
}

#[test]
fn test_angle_between_orthogonal_vectors() {
    let a = Vector4::new(1.0, 0.0, 0.0, 0.0);
    let b = Vector4::new(0.0, 0.0, 0.0, 3.0);
    assert_eq!(a.angle_cos(&b), 0.0);
    assert_abs_diff_eq!(a.angle(&b), std::f32::consts::FRAC_PI_2, epsilon = 1e-6);
}

#[test]
fn test_angle_of_zero_vector_is_nan() {
    assert!(Vector4::ZERO.angle(&Vector4::ONE).is_nan());
}

#[test]
fn test_fma_scalar() {
    let mut v = Vector4::new(1.0, 1.0, 1.0, 1.0);
    v.fma_scalar(2.0, &Vector4::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(v, Vector4::new(3.0, 5.0, 7.0, 9.0));
}

#[test]
fn test_equal_literals_are_equal_and_hash_equal() {
    let a = Vector4::new(1.0, f32::NAN, -3.0, 0.5);
    let b = Vector4::new(1.0, f32::NAN, -3.0, 0.5);
    assert_eq!(a, b);
    assert_eq!(a.hash_code(), b.hash_code());

    let mut set = HashSet::new();
    set.insert(a);
    assert!(set.contains(&b));

    let mut fast = ahash::AHashSet::new();
    fast.insert(a);
    assert!(fast.contains(&b));
}

#[test]
fn test_signed_zero_is_not_equal() {
    let positive = Vector4::new(0.0, 1.0, 2.0, 3.0);
    let negative = Vector4::new(-0.0, 1.0, 2.0, 3.0);
    assert_ne!(positive, negative);
    assert_ne!(positive.hash_code(), negative.hash_code());
}

#[test]
fn test_component_index_out_of_range() {
    let mut v = Vector4::default();
    for bad in [4, 5, usize::MAX] {
        assert!(matches!(
            v.get(bad),
            Err(VectorError::InvalidComponent { index }) if index == bad
        ));
        assert!(v.set_component(bad, 1.0).is_err());
    }
    for i in 0..4 {
        v.set_component(i, i as f32 * 10.0).unwrap();
        assert_eq!(v.get(i).unwrap(), i as f32 * 10.0);
    }
}

#[test]
fn test_consumers_can_take_dyn_views() {
    fn sum(views: &[&dyn Vector4View]) -> Vector4 {
        let mut total = Vector4::ZERO;
        for view in views {
            total.add(*view);
        }
        total
    }

    let concrete = Vector4::new(1.0, 2.0, 3.0, 4.0);
    let array = [0.5f32, 0.5, 0.5, 0.5];
    assert_eq!(sum(&[&concrete, &array]), Vector4::new(1.5, 2.5, 3.5, 4.5));

    #[cfg(feature = "glam")]
    {
        let g = glam::Vec4::new(1.0, 0.0, 0.0, 0.0);
        assert_eq!(sum(&[&concrete, &g]), Vector4::new(2.0, 2.0, 3.0, 4.0));
    }
}
