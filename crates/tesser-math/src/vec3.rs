//! The 3-component vector collaborator used to build homogeneous vectors.

/// Read-only access to a 3-component single-precision vector.
pub trait Vector3View {
    fn x(&self) -> f32;
    fn y(&self) -> f32;
    fn z(&self) -> f32;
}

impl<V: Vector3View + ?Sized> Vector3View for &V {
    fn x(&self) -> f32 {
        (**self).x()
    }
    fn y(&self) -> f32 {
        (**self).y()
    }
    fn z(&self) -> f32 {
        (**self).z()
    }
}

impl Vector3View for [f32; 3] {
    fn x(&self) -> f32 {
        self[0]
    }
    fn y(&self) -> f32 {
        self[1]
    }
    fn z(&self) -> f32 {
        self[2]
    }
}

macro_rules! impl_vector3_view_for_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Vector3View for $ty {
                fn x(&self) -> f32 {
                    self.x
                }
                fn y(&self) -> f32 {
                    self.y
                }
                fn z(&self) -> f32 {
                    self.z
                }
            }
        )*
    };
}

#[cfg(feature = "glam")]
impl_vector3_view_for_fields!(glam::Vec3, glam::Vec3A);

#[cfg(feature = "mint")]
impl_vector3_view_for_fields!(mint::Vector3<f32>, mint::Point3<f32>);
