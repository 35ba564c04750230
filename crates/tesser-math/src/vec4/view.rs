use crate::{Vector4, VectorError, VectorResult};

/// Read-only capability over a 4-component vector.
///
/// Only accessors live here. Everything that can be computed from them is
/// provided by [`Vector4Ops`](crate::Vector4Ops), which is implemented for
/// every view, including `dyn Vector4View`. Consumers that only read vectors
/// should take this trait instead of [`Vector4`].
pub trait Vector4View {
    fn x(&self) -> f32;
    fn y(&self) -> f32;
    fn z(&self) -> f32;
    fn w(&self) -> f32;

    /// Component by index: `0..=3` map to `x, y, z, w`.
    fn get(&self, component: usize) -> VectorResult<f32> {
        match component {
            0 => Ok(self.x()),
            1 => Ok(self.y()),
            2 => Ok(self.z()),
            3 => Ok(self.w()),
            index => Err(VectorError::InvalidComponent { index }),
        }
    }

    /// The concrete value behind this view, when there is one.
    ///
    /// Enables the bulk copy in [`Vector4::from_view`]. Other views keep the
    /// default and are copied accessor by accessor.
    fn as_vector4(&self) -> Option<&Vector4> {
        None
    }
}

impl<V: Vector4View + ?Sized> Vector4View for &V {
    fn x(&self) -> f32 {
        (**self).x()
    }
    fn y(&self) -> f32 {
        (**self).y()
    }
    fn z(&self) -> f32 {
        (**self).z()
    }
    fn w(&self) -> f32 {
        (**self).w()
    }
    fn get(&self, component: usize) -> VectorResult<f32> {
        (**self).get(component)
    }
    fn as_vector4(&self) -> Option<&Vector4> {
        (**self).as_vector4()
    }
}

impl Vector4View for Vector4 {
    #[inline]
    fn x(&self) -> f32 {
        self.x
    }
    #[inline]
    fn y(&self) -> f32 {
        self.y
    }
    #[inline]
    fn z(&self) -> f32 {
        self.z
    }
    #[inline]
    fn w(&self) -> f32 {
        self.w
    }
    fn as_vector4(&self) -> Option<&Vector4> {
        Some(self)
    }
}

impl Vector4View for [f32; 4] {
    fn x(&self) -> f32 {
        self[0]
    }
    fn y(&self) -> f32 {
        self[1]
    }
    fn z(&self) -> f32 {
        self[2]
    }
    fn w(&self) -> f32 {
        self[3]
    }
}

#[cfg(feature = "glam")]
impl Vector4View for glam::Vec4 {
    fn x(&self) -> f32 {
        self.x
    }
    fn y(&self) -> f32 {
        self.y
    }
    fn z(&self) -> f32 {
        self.z
    }
    fn w(&self) -> f32 {
        self.w
    }
}

#[cfg(feature = "mint")]
impl Vector4View for mint::Vector4<f32> {
    fn x(&self) -> f32 {
        self.x
    }
    fn y(&self) -> f32 {
        self.y
    }
    fn z(&self) -> f32 {
        self.z
    }
    fn w(&self) -> f32 {
        self.w
    }
}
