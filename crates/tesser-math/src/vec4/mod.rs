//! The homogeneous 4-component vector.
//!
//! [`Vector4`] is the owned, mutable value. [`Vector4View`] is the read-only
//! capability and [`Vector4Ops`] the pure operations available on every view.
//!
//! Every operation exists in two forms:
//!
//! - `op_into(&self, .., dest)` on [`Vector4Ops`] writes into `dest` and
//!   returns it, leaving the receiver alone;
//! - `op(&mut self, ..)` on [`Vector4`] mutates and returns the receiver.
//!
//! ```
//! use tesser_math::{Vector4, Vector4Ops};
//!
//! let mut v = Vector4::new(3.0, 0.0, 4.0, 0.0);
//! let mut unit = Vector4::default();
//! v.normalize_into(&mut unit);
//! assert_eq!(v.length(), 5.0);
//!
//! v.normalize();
//! assert_eq!(v, unit);
//! ```

mod io;
mod ops;
mod view;

pub use ops::Vector4Ops;
pub use view::Vector4View;

use std::hash::{Hash, Hasher};

use bytemuck::{Pod, Zeroable};

use crate::matrix::Matrix4View;
use crate::quat::QuaternionView;
use crate::vec3::Vector3View;
use crate::{VectorBuffer, VectorError, VectorResult};

/// A vector of four `f32` components.
///
/// `w` is the homogeneous coordinate: points carry `w = 1`, directions
/// `w = 0`. [`Default`] is therefore `(0, 0, 0, 1)`.
///
/// # Memory Layout
///
/// ```text
/// Offset | Field | Size
/// -------|-------|------
/// 0      | x     | 4 bytes (f32)
/// 4      | y     | 4 bytes (f32)
/// 8      | z     | 4 bytes (f32)
/// 12     | w     | 4 bytes (f32)
/// Total: 16 bytes
/// ```
///
/// Equality compares bit patterns: all NaNs are equal to each other and
/// `0.0 != -0.0`. This keeps [`Eq`] and [`Hash`] lawful.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

static_assertions::assert_eq_size!(Vector4, [f32; 4]);
static_assertions::assert_eq_align!(Vector4, f32);

impl Default for Vector4 {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

impl Vector4 {
    /// All components zero, `w` included.
    pub const ZERO: Self = Self::splat(0.0);
    /// All components one.
    pub const ONE: Self = Self::splat(1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// All four components set to `value`.
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    #[inline]
    pub const fn from_array(values: [f32; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }

    /// Copy any view. A view backed by a [`Vector4`] is copied in one go.
    pub fn from_view(v: &(impl Vector4View + ?Sized)) -> Self {
        match v.as_vector4() {
            Some(concrete) => *concrete,
            None => Self::new(v.x(), v.y(), v.z(), v.w()),
        }
    }

    /// Extend a 3-component vector with `w`.
    pub fn from_vec3(v: &(impl Vector3View + ?Sized), w: f32) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
    }

    /// Read from the buffer's current position. The cursor does not move.
    pub fn from_buffer<B: VectorBuffer + ?Sized>(buffer: &B) -> VectorResult<Self> {
        Self::from_buffer_at(buffer.position(), buffer)
    }

    /// Read from an absolute index in the buffer's unit.
    pub fn from_buffer_at<B: VectorBuffer + ?Sized>(index: usize, buffer: &B) -> VectorResult<Self> {
        buffer.read_f32x4(index).map(Self::from_array)
    }

    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
        self
    }

    #[inline]
    pub fn set_array(&mut self, values: [f32; 4]) -> &mut Self {
        let [x, y, z, w] = values;
        self.set(x, y, z, w)
    }

    /// Copy the components of another view.
    pub fn set_from(&mut self, v: &(impl Vector4View + ?Sized)) -> &mut Self {
        *self = Self::from_view(v);
        self
    }

    pub fn set_vec3(&mut self, v: &(impl Vector3View + ?Sized), w: f32) -> &mut Self {
        self.set(v.x(), v.y(), v.z(), w)
    }

    /// Broadcast `value` to all four components.
    pub fn set_scalar(&mut self, value: f32) -> &mut Self {
        self.set(value, value, value, value)
    }

    pub fn set_from_buffer<B: VectorBuffer + ?Sized>(&mut self, buffer: &B) -> VectorResult<&mut Self> {
        let values = buffer.read_f32x4(buffer.position())?;
        Ok(self.set_array(values))
    }

    pub fn set_from_buffer_at<B: VectorBuffer + ?Sized>(
        &mut self,
        index: usize,
        buffer: &B,
    ) -> VectorResult<&mut Self> {
        let values = buffer.read_f32x4(index)?;
        Ok(self.set_array(values))
    }

    /// Set a component by index: `0..=3` map to `x, y, z, w`.
    pub fn set_component(&mut self, component: usize, value: f32) -> VectorResult<&mut Self> {
        match component {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            3 => self.w = value,
            index => return Err(VectorError::InvalidComponent { index }),
        }
        Ok(self)
    }

    /// Run a destination-form operation with `self` as both source and
    /// destination. The source is a snapshot, so the operation may write
    /// `dest` in any order.
    #[inline]
    fn apply(&mut self, op: impl FnOnce(&Vector4, &mut Vector4)) -> &mut Self {
        let receiver = *self;
        op(&receiver, self);
        self
    }

    pub fn add(&mut self, v: &(impl Vector4View + ?Sized)) -> &mut Self {
        self.apply(|this, dest| {
            this.add_into(v, dest);
        })
    }

    pub fn add_xyzw(&mut self, x: f32, y: f32, z: f32, w: f32) -> &mut Self {
        self.apply(|this, dest| {
            this.add_xyzw_into(x, y, z, w, dest);
        })
    }

    pub fn sub(&mut self, v: &(impl Vector4View + ?Sized)) -> &mut Self {
        self.apply(|this, dest| {
            this.sub_into(v, dest);
        })
    }

    pub fn sub_xyzw(&mut self, x: f32, y: f32, z: f32, w: f32) -> &mut Self {
        self.apply(|this, dest| {
            this.sub_xyzw_into(x, y, z, w, dest);
        })
    }

    /// `self += a * b`, component-wise.
    pub fn fma(&mut self, a: &(impl Vector4View + ?Sized), b: &(impl Vector4View + ?Sized)) -> &mut Self {
        self.apply(|this, dest| {
            this.fma_into(a, b, dest);
        })
    }

    /// `self += a * b` with a scalar `a`.
    pub fn fma_scalar(&mut self, a: f32, b: &(impl Vector4View + ?Sized)) -> &mut Self {
        self.apply(|this, dest| {
            this.fma_scalar_into(a, b, dest);
        })
    }

    /// Component-wise product.
    pub fn mul(&mut self, v: &(impl Vector4View + ?Sized)) -> &mut Self {
        self.apply(|this, dest| {
            this.mul_into(v, dest);
        })
    }

    pub fn mul_scalar(&mut self, scalar: f32) -> &mut Self {
        self.apply(|this, dest| {
            this.mul_scalar_into(scalar, dest);
        })
    }

    pub fn mul_xyzw(&mut self, x: f32, y: f32, z: f32, w: f32) -> &mut Self {
        self.apply(|this, dest| {
            this.mul_xyzw_into(x, y, z, w, dest);
        })
    }

    /// Component-wise quotient.
    pub fn div(&mut self, v: &(impl Vector4View + ?Sized)) -> &mut Self {
        self.apply(|this, dest| {
            this.div_into(v, dest);
        })
    }

    pub fn div_scalar(&mut self, scalar: f32) -> &mut Self {
        self.apply(|this, dest| {
            this.div_scalar_into(scalar, dest);
        })
    }

    pub fn div_xyzw(&mut self, x: f32, y: f32, z: f32, w: f32) -> &mut Self {
        self.apply(|this, dest| {
            this.div_xyzw_into(x, y, z, w, dest);
        })
    }

    /// Transform by `m`; see [`Vector4Ops::mul_matrix_into`].
    pub fn mul_matrix(&mut self, m: &(impl Matrix4View + ?Sized)) -> &mut Self {
        self.apply(|this, dest| {
            this.mul_matrix_into(m, dest);
        })
    }

    pub fn mul_affine(&mut self, m: &(impl Matrix4View + ?Sized)) -> &mut Self {
        self.apply(|this, dest| {
            this.mul_affine_into(m, dest);
        })
    }

    pub fn mul_project(&mut self, m: &(impl Matrix4View + ?Sized)) -> &mut Self {
        self.apply(|this, dest| {
            this.mul_project_into(m, dest);
        })
    }

    pub fn rotate(&mut self, quat: &(impl QuaternionView + ?Sized)) -> &mut Self {
        self.apply(|this, dest| {
            this.rotate_into(quat, dest);
        })
    }

    /// Rotate `x, y, z` about a normalized axis; `w` is unchanged.
    pub fn rotate_axis(&mut self, angle: f32, ax: f32, ay: f32, az: f32) -> &mut Self {
        self.apply(|this, dest| {
            this.rotate_axis_into(angle, ax, ay, az, dest);
        })
    }

    pub fn rotate_x(&mut self, angle: f32) -> &mut Self {
        self.apply(|this, dest| {
            this.rotate_x_into(angle, dest);
        })
    }

    pub fn rotate_y(&mut self, angle: f32) -> &mut Self {
        self.apply(|this, dest| {
            this.rotate_y_into(angle, dest);
        })
    }

    pub fn rotate_z(&mut self, angle: f32) -> &mut Self {
        self.apply(|this, dest| {
            this.rotate_z_into(angle, dest);
        })
    }

    pub fn normalize(&mut self) -> &mut Self {
        self.apply(|this, dest| {
            this.normalize_into(dest);
        })
    }

    pub fn normalize_to(&mut self, length: f32) -> &mut Self {
        self.apply(|this, dest| {
            this.normalize_to_into(length, dest);
        })
    }

    pub fn normalize3(&mut self) -> &mut Self {
        self.apply(|this, dest| {
            this.normalize3_into(dest);
        })
    }

    pub fn negate(&mut self) -> &mut Self {
        self.apply(|this, dest| {
            this.negate_into(dest);
        })
    }

    /// Set every component, `w` included, to zero.
    pub fn zero(&mut self) -> &mut Self {
        *self = Self::zeroed();
        self
    }

    pub fn min(&mut self, v: &(impl Vector4View + ?Sized)) -> &mut Self {
        self.apply(|this, dest| {
            this.min_into(v, dest);
        })
    }

    pub fn max(&mut self, v: &(impl Vector4View + ?Sized)) -> &mut Self {
        self.apply(|this, dest| {
            this.max_into(v, dest);
        })
    }

    pub fn lerp(&mut self, other: &(impl Vector4View + ?Sized), t: f32) -> &mut Self {
        self.apply(|this, dest| {
            this.lerp_into(other, t, dest);
        })
    }

    /// Java-style hash: `31`-multiplier fold over `w, x, y, z`.
    pub fn hash_code(&self) -> i32 {
        [self.w, self.x, self.y, self.z]
            .into_iter()
            .fold(1i32, |acc, c| acc.wrapping_mul(31).wrapping_add(canonical_bits(c) as i32))
    }
}

/// Bit pattern with every NaN collapsed to the canonical quiet NaN.
#[inline]
fn canonical_bits(value: f32) -> u32 {
    if value.is_nan() {
        0x7fc0_0000
    } else {
        value.to_bits()
    }
}

impl PartialEq for Vector4 {
    fn eq(&self, other: &Self) -> bool {
        canonical_bits(self.w) == canonical_bits(other.w)
            && canonical_bits(self.x) == canonical_bits(other.x)
            && canonical_bits(self.y) == canonical_bits(other.y)
            && canonical_bits(self.z) == canonical_bits(other.z)
    }
}

impl Eq for Vector4 {}

impl Hash for Vector4 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in [self.w, self.x, self.y, self.z] {
            state.write_u32(canonical_bits(c));
        }
    }
}

impl From<[f32; 4]> for Vector4 {
    fn from(values: [f32; 4]) -> Self {
        Self::from_array(values)
    }
}

impl From<Vector4> for [f32; 4] {
    fn from(v: Vector4) -> Self {
        v.to_array()
    }
}

impl From<(f32, f32, f32, f32)> for Vector4 {
    fn from((x, y, z, w): (f32, f32, f32, f32)) -> Self {
        Self::new(x, y, z, w)
    }
}

#[cfg(feature = "glam")]
impl From<glam::Vec4> for Vector4 {
    fn from(v: glam::Vec4) -> Self {
        Self::from_array(v.to_array())
    }
}

#[cfg(feature = "glam")]
impl From<Vector4> for glam::Vec4 {
    fn from(v: Vector4) -> Self {
        glam::Vec4::new(v.x, v.y, v.z, v.w)
    }
}

#[cfg(feature = "mint")]
impl From<mint::Vector4<f32>> for Vector4 {
    fn from(v: mint::Vector4<f32>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

#[cfg(feature = "mint")]
impl From<Vector4> for mint::Vector4<f32> {
    fn from(v: Vector4) -> Self {
        mint::Vector4 {
            x: v.x,
            y: v.y,
            z: v.z,
            w: v.w,
        }
    }
}

/// Run a destination-form operation into a fresh vector.
#[inline]
fn produce(op: impl FnOnce(&mut Vector4)) -> Vector4 {
    let mut out = Vector4::ZERO;
    op(&mut out);
    out
}

impl std::ops::Add for Vector4 {
    type Output = Vector4;

    fn add(self, rhs: Vector4) -> Vector4 {
        produce(|out| {
            self.add_into(&rhs, out);
        })
    }
}

impl std::ops::Sub for Vector4 {
    type Output = Vector4;

    fn sub(self, rhs: Vector4) -> Vector4 {
        produce(|out| {
            self.sub_into(&rhs, out);
        })
    }
}

impl std::ops::Mul for Vector4 {
    type Output = Vector4;

    fn mul(self, rhs: Vector4) -> Vector4 {
        produce(|out| {
            self.mul_into(&rhs, out);
        })
    }
}

impl std::ops::Div for Vector4 {
    type Output = Vector4;

    fn div(self, rhs: Vector4) -> Vector4 {
        produce(|out| {
            self.div_into(&rhs, out);
        })
    }
}

impl std::ops::Mul<f32> for Vector4 {
    type Output = Vector4;

    fn mul(self, rhs: f32) -> Vector4 {
        produce(|out| {
            self.mul_scalar_into(rhs, out);
        })
    }
}

impl std::ops::Div<f32> for Vector4 {
    type Output = Vector4;

    fn div(self, rhs: f32) -> Vector4 {
        produce(|out| {
            self.div_scalar_into(rhs, out);
        })
    }
}

impl std::ops::Neg for Vector4 {
    type Output = Vector4;

    fn neg(self) -> Vector4 {
        produce(|out| {
            self.negate_into(out);
        })
    }
}

impl std::ops::AddAssign for Vector4 {
    fn add_assign(&mut self, rhs: Vector4) {
        Vector4::add(self, &rhs);
    }
}

impl std::ops::SubAssign for Vector4 {
    fn sub_assign(&mut self, rhs: Vector4) {
        Vector4::sub(self, &rhs);
    }
}

impl std::ops::MulAssign<f32> for Vector4 {
    fn mul_assign(&mut self, rhs: f32) {
        self.mul_scalar(rhs);
    }
}

impl std::ops::DivAssign<f32> for Vector4 {
    fn div_assign(&mut self, rhs: f32) {
        self.div_scalar(rhs);
    }
}
