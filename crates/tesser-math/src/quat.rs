//! The quaternion collaborator used by [`Vector4Ops::rotate_into`].
//!
//! [`Vector4Ops::rotate_into`]: crate::Vector4Ops::rotate_into

use crate::Vector4;

/// A rotation quaternion that can rotate a vector.
///
/// Vectors delegate general quaternion rotation here instead of doing the
/// math themselves.
pub trait QuaternionView {
    /// Rotate the `x, y, z` part of `v` into `dest` and return `dest`.
    ///
    /// `w` is carried over from `v` unchanged.
    fn transform<'d>(&self, v: &Vector4, dest: &'d mut Vector4) -> &'d mut Vector4;
}

impl<Q: QuaternionView + ?Sized> QuaternionView for &Q {
    fn transform<'d>(&self, v: &Vector4, dest: &'d mut Vector4) -> &'d mut Vector4 {
        (**self).transform(v, dest)
    }
}

#[cfg(feature = "glam")]
impl QuaternionView for glam::Quat {
    fn transform<'d>(&self, v: &Vector4, dest: &'d mut Vector4) -> &'d mut Vector4 {
        let w = v.w;
        let rotated = self.mul_vec3(glam::Vec3::new(v.x, v.y, v.z));
        dest.set(rotated.x, rotated.y, rotated.z, w)
    }
}

#[cfg(all(test, feature = "glam"))]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_glam_quat_keeps_w() {
        let q = glam::Quat::from_rotation_z(FRAC_PI_2);
        let v = Vector4::new(1.0, 0.0, 0.0, 0.25);
        let mut dest = Vector4::default();
        q.transform(&v, &mut dest);
        assert_abs_diff_eq!(dest.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(dest.y, 1.0, epsilon = 1e-6);
        assert_eq!(dest.w, 0.25);
    }
}
