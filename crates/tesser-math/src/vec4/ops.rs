use crate::format::NumberFormat;
use crate::matrix::{Matrix4View, MatrixStructure};
use crate::profiling::profile_function;
use crate::quat::QuaternionView;
use crate::scalar::cos_from_sin;
use crate::{Vector4, Vector4View, VectorBuffer, VectorResult};

/// Pure operations over any [`Vector4View`].
///
/// Nothing here mutates the receiver. Every `*_into` method computes its
/// result into `dest` and returns `dest`; the in-place forms on [`Vector4`]
/// are these same methods with the receiver passed as `dest`.
///
/// Implementations read every input component into locals before the first
/// write to `dest`. Only the accessors of [`Vector4View`] are used.
///
/// # Example
///
/// ```
/// use tesser_math::{Vector4, Vector4Ops};
///
/// let a = Vector4::new(1.0, 2.0, 3.0, 1.0);
/// let b = [0.5f32, 0.5, 0.5, 0.0];
/// let mut sum = Vector4::default();
/// a.add_into(&b, &mut sum);
/// assert_eq!(sum, Vector4::new(1.5, 2.5, 3.5, 1.0));
/// ```
pub trait Vector4Ops: Vector4View {
    #[inline]
    fn to_array(&self) -> [f32; 4] {
        [self.x(), self.y(), self.z(), self.w()]
    }

    /// Write `x, y, z, w` at the buffer's current position without moving it.
    fn store<B: VectorBuffer + ?Sized>(&self, buffer: &mut B) -> VectorResult<()> {
        let index = buffer.position();
        buffer.write_f32x4(index, self.to_array())
    }

    /// Write `x, y, z, w` at an absolute index. The cursor is left alone.
    fn store_at<B: VectorBuffer + ?Sized>(&self, index: usize, buffer: &mut B) -> VectorResult<()> {
        buffer.write_f32x4(index, self.to_array())
    }

    fn add_into<'d>(&self, v: &(impl Vector4View + ?Sized), dest: &'d mut Vector4) -> &'d mut Vector4 {
        self.add_xyzw_into(v.x(), v.y(), v.z(), v.w(), dest)
    }

    fn add_xyzw_into<'d>(&self, x: f32, y: f32, z: f32, w: f32, dest: &'d mut Vector4) -> &'d mut Vector4 {
        let [sx, sy, sz, sw] = self.to_array();
        dest.set(sx + x, sy + y, sz + z, sw + w)
    }

    fn sub_into<'d>(&self, v: &(impl Vector4View + ?Sized), dest: &'d mut Vector4) -> &'d mut Vector4 {
        self.sub_xyzw_into(v.x(), v.y(), v.z(), v.w(), dest)
    }

    fn sub_xyzw_into<'d>(&self, x: f32, y: f32, z: f32, w: f32, dest: &'d mut Vector4) -> &'d mut Vector4 {
        let [sx, sy, sz, sw] = self.to_array();
        dest.set(sx - x, sy - y, sz - z, sw - w)
    }

    /// `self + a * b`, component-wise.
    fn fma_into<'d>(
        &self,
        a: &(impl Vector4View + ?Sized),
        b: &(impl Vector4View + ?Sized),
        dest: &'d mut Vector4,
    ) -> &'d mut Vector4 {
        let [sx, sy, sz, sw] = self.to_array();
        let [ax, ay, az, aw] = a.to_array();
        let [bx, by, bz, bw] = b.to_array();
        dest.set(sx + ax * bx, sy + ay * by, sz + az * bz, sw + aw * bw)
    }

    /// `self + a * b` with a scalar `a`.
    fn fma_scalar_into<'d>(&self, a: f32, b: &(impl Vector4View + ?Sized), dest: &'d mut Vector4) -> &'d mut Vector4 {
        let [sx, sy, sz, sw] = self.to_array();
        let [bx, by, bz, bw] = b.to_array();
        dest.set(sx + a * bx, sy + a * by, sz + a * bz, sw + a * bw)
    }

    /// Component-wise product.
    fn mul_into<'d>(&self, v: &(impl Vector4View + ?Sized), dest: &'d mut Vector4) -> &'d mut Vector4 {
        self.mul_xyzw_into(v.x(), v.y(), v.z(), v.w(), dest)
    }

    fn mul_scalar_into<'d>(&self, scalar: f32, dest: &'d mut Vector4) -> &'d mut Vector4 {
        self.mul_xyzw_into(scalar, scalar, scalar, scalar, dest)
    }

    fn mul_xyzw_into<'d>(&self, x: f32, y: f32, z: f32, w: f32, dest: &'d mut Vector4) -> &'d mut Vector4 {
        let [sx, sy, sz, sw] = self.to_array();
        dest.set(sx * x, sy * y, sz * z, sw * w)
    }

    /// Component-wise quotient.
    fn div_into<'d>(&self, v: &(impl Vector4View + ?Sized), dest: &'d mut Vector4) -> &'d mut Vector4 {
        self.div_xyzw_into(v.x(), v.y(), v.z(), v.w(), dest)
    }

    /// Multiplies by `1 / scalar`, so results may differ from direct
    /// division in the last bit.
    fn div_scalar_into<'d>(&self, scalar: f32, dest: &'d mut Vector4) -> &'d mut Vector4 {
        self.mul_scalar_into(scalar.recip(), dest)
    }

    fn div_xyzw_into<'d>(&self, x: f32, y: f32, z: f32, w: f32, dest: &'d mut Vector4) -> &'d mut Vector4 {
        let [sx, sy, sz, sw] = self.to_array();
        dest.set(sx / x, sy / y, sz / z, sw / w)
    }

    /// `M * self`, taking the affine shortcut when the matrix allows it.
    fn mul_matrix_into<'d>(&self, m: &(impl Matrix4View + ?Sized), dest: &'d mut Vector4) -> &'d mut Vector4 {
        profile_function!();
        match m.structure() {
            MatrixStructure::Affine => {
                tracing::trace!("vector transform: affine path");
                self.mul_affine_into(m, dest)
            }
            MatrixStructure::Generic => {
                tracing::trace!("vector transform: generic path");
                mul_generic(self, m, dest)
            }
        }
    }

    /// `M * self` assuming the bottom row of `m` is `(0, 0, 0, 1)`.
    ///
    /// Row 3 of the matrix is never read and `w` passes through.
    fn mul_affine_into<'d>(&self, m: &(impl Matrix4View + ?Sized), dest: &'d mut Vector4) -> &'d mut Vector4 {
        let [x, y, z, w] = self.to_array();
        let rx = m.get(0, 0) * x + m.get(1, 0) * y + m.get(2, 0) * z + m.get(3, 0) * w;
        let ry = m.get(0, 1) * x + m.get(1, 1) * y + m.get(2, 1) * z + m.get(3, 1) * w;
        let rz = m.get(0, 2) * x + m.get(1, 2) * y + m.get(2, 2) * z + m.get(3, 2) * w;
        dest.set(rx, ry, rz, w)
    }

    /// `M * self` followed by the perspective divide; the result has `w = 1`.
    ///
    /// A transformed `w` of zero yields infinities or NaN.
    fn mul_project_into<'d>(&self, m: &(impl Matrix4View + ?Sized), dest: &'d mut Vector4) -> &'d mut Vector4 {
        profile_function!();
        let mut projected = Vector4::ZERO;
        mul_generic(self, m, &mut projected);
        let inv_w = projected.w.recip();
        dest.set(projected.x * inv_w, projected.y * inv_w, projected.z * inv_w, 1.0)
    }

    /// Rotate by a quaternion. The rotation itself is the quaternion's job.
    fn rotate_into<'d>(&self, quat: &(impl QuaternionView + ?Sized), dest: &'d mut Vector4) -> &'d mut Vector4 {
        let source = Vector4::from_view(self);
        quat.transform(&source, dest)
    }

    /// Rotate `x, y, z` by `angle` radians about the axis `(ax, ay, az)`,
    /// which must be normalized.
    ///
    /// Only `dest.x`, `dest.y` and `dest.z` are written; `dest.w` keeps
    /// whatever it held.
    fn rotate_axis_into<'d>(&self, angle: f32, ax: f32, ay: f32, az: f32, dest: &'d mut Vector4) -> &'d mut Vector4 {
        profile_function!();
        let [x, y, z, _] = self.to_array();
        let half = angle * 0.5;
        let sin = half.sin();
        let (qx, qy, qz) = (ax * sin, ay * sin, az * sin);
        let qw = cos_from_sin(sin, half);

        let (w2, x2, y2, z2) = (qw * qw, qx * qx, qy * qy, qz * qz);
        let (xy, xz, yz) = (qx * qy, qx * qz, qy * qz);
        let (xw, yw, zw) = (qx * qw, qy * qw, qz * qw);

        let nx = (w2 + x2 - z2 - y2) * x + 2.0 * (xy - zw) * y + 2.0 * (xz + yw) * z;
        let ny = 2.0 * (xy + zw) * x + (y2 - z2 + w2 - x2) * y + 2.0 * (yz - xw) * z;
        let nz = 2.0 * (xz - yw) * x + 2.0 * (yz + xw) * y + (z2 - y2 - x2 + w2) * z;
        dest.x = nx;
        dest.y = ny;
        dest.z = nz;
        dest
    }

    /// Right-handed rotation about the X axis.
    fn rotate_x_into<'d>(&self, angle: f32, dest: &'d mut Vector4) -> &'d mut Vector4 {
        let [x, y, z, w] = self.to_array();
        let sin = angle.sin();
        let cos = cos_from_sin(sin, angle);
        dest.set(x, y * cos - z * sin, y * sin + z * cos, w)
    }

    /// Right-handed rotation about the Y axis.
    fn rotate_y_into<'d>(&self, angle: f32, dest: &'d mut Vector4) -> &'d mut Vector4 {
        let [x, y, z, w] = self.to_array();
        let sin = angle.sin();
        let cos = cos_from_sin(sin, angle);
        dest.set(x * cos + z * sin, y, -x * sin + z * cos, w)
    }

    /// Right-handed rotation about the Z axis.
    fn rotate_z_into<'d>(&self, angle: f32, dest: &'d mut Vector4) -> &'d mut Vector4 {
        let [x, y, z, w] = self.to_array();
        let sin = angle.sin();
        let cos = cos_from_sin(sin, angle);
        dest.set(x * cos - y * sin, x * sin + y * cos, z, w)
    }

    #[inline]
    fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    #[inline]
    fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Scale to unit length. A zero vector yields NaN components.
    fn normalize_into<'d>(&self, dest: &'d mut Vector4) -> &'d mut Vector4 {
        self.mul_scalar_into(self.length().recip(), dest)
    }

    /// Scale to `length`.
    fn normalize_to_into<'d>(&self, length: f32, dest: &'d mut Vector4) -> &'d mut Vector4 {
        self.mul_scalar_into(self.length().recip() * length, dest)
    }

    /// Divide all four components by the length of `x, y, z` alone.
    fn normalize3_into<'d>(&self, dest: &'d mut Vector4) -> &'d mut Vector4 {
        let [x, y, z, _] = self.to_array();
        let inv = (x * x + y * y + z * z).sqrt().recip();
        self.mul_scalar_into(inv, dest)
    }

    fn distance(&self, v: &(impl Vector4View + ?Sized)) -> f32 {
        self.distance_squared(v).sqrt()
    }

    fn distance_xyzw(&self, x: f32, y: f32, z: f32, w: f32) -> f32 {
        self.distance(&[x, y, z, w])
    }

    fn distance_squared(&self, v: &(impl Vector4View + ?Sized)) -> f32 {
        let dx = self.x() - v.x();
        let dy = self.y() - v.y();
        let dz = self.z() - v.z();
        let dw = self.w() - v.w();
        dx * dx + dy * dy + dz * dz + dw * dw
    }

    fn dot(&self, v: &(impl Vector4View + ?Sized)) -> f32 {
        self.dot_xyzw(v.x(), v.y(), v.z(), v.w())
    }

    fn dot_xyzw(&self, x: f32, y: f32, z: f32, w: f32) -> f32 {
        self.x() * x + self.y() * y + self.z() * z + self.w() * w
    }

    /// Cosine of the angle between `self` and `v`, computed in `f64`.
    fn angle_cos(&self, v: &(impl Vector4View + ?Sized)) -> f32 {
        let a = self.to_array().map(f64::from);
        let b = v.to_array().map(f64::from);
        let length1_squared: f64 = a.iter().map(|c| c * c).sum();
        let length2_squared: f64 = b.iter().map(|c| c * c).sum();
        let dot: f64 = a.iter().zip(&b).map(|(p, q)| p * q).sum();
        (dot / (length1_squared * length2_squared).sqrt()) as f32
    }

    /// Angle in radians between `self` and `v`.
    fn angle(&self, v: &(impl Vector4View + ?Sized)) -> f32 {
        // rounding can push the cosine just outside [-1, 1]
        self.angle_cos(v).clamp(-1.0, 1.0).acos()
    }

    fn negate_into<'d>(&self, dest: &'d mut Vector4) -> &'d mut Vector4 {
        let [x, y, z, w] = self.to_array();
        dest.set(-x, -y, -z, -w)
    }

    /// Component-wise minimum. Where `self` holds NaN the operand wins.
    fn min_into<'d>(&self, v: &(impl Vector4View + ?Sized), dest: &'d mut Vector4) -> &'d mut Vector4 {
        let a = self.to_array();
        let b = v.to_array();
        dest.set_array(std::array::from_fn(|i| if a[i] < b[i] { a[i] } else { b[i] }))
    }

    /// Component-wise maximum. Where `self` holds NaN the operand wins.
    fn max_into<'d>(&self, v: &(impl Vector4View + ?Sized), dest: &'d mut Vector4) -> &'d mut Vector4 {
        let a = self.to_array();
        let b = v.to_array();
        dest.set_array(std::array::from_fn(|i| if a[i] > b[i] { a[i] } else { b[i] }))
    }

    /// Smoothstep from `self` (at `t = 0`) to `v` (at `t = 1`).
    fn smooth_step_into<'d>(&self, v: &(impl Vector4View + ?Sized), t: f32, dest: &'d mut Vector4) -> &'d mut Vector4 {
        let a = self.to_array();
        let b = v.to_array();
        let t2 = t * t;
        let t3 = t2 * t;
        dest.set_array(std::array::from_fn(|i| {
            (a[i] + a[i] - b[i] - b[i]) * t3 + (3.0 * b[i] - 3.0 * a[i]) * t2 + a[i]
        }))
    }

    /// Cubic Hermite spline from `self` with tangent `t0` to `v1` with
    /// tangent `t1`.
    fn hermite_into<'d>(
        &self,
        t0: &(impl Vector4View + ?Sized),
        v1: &(impl Vector4View + ?Sized),
        t1: &(impl Vector4View + ?Sized),
        t: f32,
        dest: &'d mut Vector4,
    ) -> &'d mut Vector4 {
        let p0 = self.to_array();
        let m0 = t0.to_array();
        let p1 = v1.to_array();
        let m1 = t1.to_array();
        let t2 = t * t;
        let t3 = t2 * t;
        dest.set_array(std::array::from_fn(|i| {
            (p0[i] + p0[i] + m0[i] - p1[i] - p1[i] + m1[i]) * t3
                + (3.0 * p1[i] - 3.0 * p0[i] - m0[i] - m0[i] - m1[i]) * t2
                + m0[i] * t
                + p0[i]
        }))
    }

    /// `self + (other - self) * t`. `t` is not clamped.
    fn lerp_into<'d>(&self, other: &(impl Vector4View + ?Sized), t: f32, dest: &'d mut Vector4) -> &'d mut Vector4 {
        let a = self.to_array();
        let b = other.to_array();
        dest.set_array(std::array::from_fn(|i| a[i] + (b[i] - a[i]) * t))
    }

    /// Render as `(x y z w)` with each component passed through `format`.
    fn to_string_with(&self, format: &(impl NumberFormat + ?Sized)) -> String {
        format!(
            "({} {} {} {})",
            format.format(self.x()),
            format.format(self.y()),
            format.format(self.z()),
            format.format(self.w())
        )
    }
}

impl<T: Vector4View + ?Sized> Vector4Ops for T {}

fn mul_generic<'d>(
    v: &(impl Vector4View + ?Sized),
    m: &(impl Matrix4View + ?Sized),
    dest: &'d mut Vector4,
) -> &'d mut Vector4 {
    let [x, y, z, w] = v.to_array();
    let rx = m.get(0, 0) * x + m.get(1, 0) * y + m.get(2, 0) * z + m.get(3, 0) * w;
    let ry = m.get(0, 1) * x + m.get(1, 1) * y + m.get(2, 1) * z + m.get(3, 1) * w;
    let rz = m.get(0, 2) * x + m.get(1, 2) * y + m.get(2, 2) * z + m.get(3, 2) * w;
    let rw = m.get(0, 3) * x + m.get(1, 3) * y + m.get(2, 3) * z + m.get(3, 3) * w;
    dest.set(rx, ry, rz, rw)
}
