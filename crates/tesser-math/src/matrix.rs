//! The 4x4 matrix collaborator consumed by vector transforms.
//!
//! Matrices are addressed as `(column, row)`, and a vector is treated as a
//! column: component `i` of `M * v` is the sum over `k` of `M(k, i) * v[k]`.

use bitflags::bitflags;

bitflags! {
    /// Structural properties a matrix can report about itself.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MatrixProperties: u8 {
        /// The matrix is a perspective projection.
        const PERSPECTIVE = 1 << 0;
        /// The bottom row is `(0, 0, 0, 1)`.
        const AFFINE = 1 << 1;
        /// The matrix is the identity.
        const IDENTITY = 1 << 2;
        /// The matrix only translates (implies `AFFINE`).
        const TRANSLATION = 1 << 3;
        /// The upper-left 3x3 is orthonormal.
        const ORTHONORMAL = 1 << 4;
    }
}

/// Which transform path a matrix allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixStructure {
    /// Bottom row is the homogeneous identity row, so `w` passes through.
    Affine,
    /// Anything else; needs the full 4x4 product.
    Generic,
}

impl From<MatrixProperties> for MatrixStructure {
    fn from(properties: MatrixProperties) -> Self {
        if properties.intersects(
            MatrixProperties::AFFINE | MatrixProperties::IDENTITY | MatrixProperties::TRANSLATION,
        ) {
            MatrixStructure::Affine
        } else {
            MatrixStructure::Generic
        }
    }
}

/// Read-only access to a 4x4 single-precision matrix.
///
/// Implementations must never require mutation to answer these queries.
pub trait Matrix4View {
    /// Element at `column`, `row`, both in `0..4`.
    fn get(&self, column: usize, row: usize) -> f32;

    /// Properties known about this matrix.
    fn properties(&self) -> MatrixProperties;

    /// Transform path selected by [`properties`](Self::properties).
    fn structure(&self) -> MatrixStructure {
        MatrixStructure::from(self.properties())
    }
}

impl<M: Matrix4View + ?Sized> Matrix4View for &M {
    fn get(&self, column: usize, row: usize) -> f32 {
        (**self).get(column, row)
    }

    fn properties(&self) -> MatrixProperties {
        (**self).properties()
    }

    fn structure(&self) -> MatrixStructure {
        (**self).structure()
    }
}

/// Column-major `[[f32; 4]; 4]`, as uploaded to shaders. Properties are
/// derived from the elements on every query, like `glam::Mat4`.
impl Matrix4View for [[f32; 4]; 4] {
    fn get(&self, column: usize, row: usize) -> f32 {
        self[column][row]
    }

    fn properties(&self) -> MatrixProperties {
        properties_of(self)
    }
}

/// Derive properties by inspecting the elements.
pub fn properties_of(m: &(impl Matrix4View + ?Sized)) -> MatrixProperties {
    let mut properties = MatrixProperties::empty();
    let bottom_is_identity =
        m.get(0, 3) == 0.0 && m.get(1, 3) == 0.0 && m.get(2, 3) == 0.0 && m.get(3, 3) == 1.0;
    if !bottom_is_identity {
        if m.get(3, 3) == 0.0 {
            properties |= MatrixProperties::PERSPECTIVE;
        }
        return properties;
    }
    properties |= MatrixProperties::AFFINE;

    let mut linear_is_identity = true;
    for column in 0..3 {
        for row in 0..3 {
            let expected = if column == row { 1.0 } else { 0.0 };
            if m.get(column, row) != expected {
                linear_is_identity = false;
            }
        }
    }
    if linear_is_identity {
        properties |= MatrixProperties::TRANSLATION | MatrixProperties::ORTHONORMAL;
        if m.get(3, 0) == 0.0 && m.get(3, 1) == 0.0 && m.get(3, 2) == 0.0 {
            properties |= MatrixProperties::IDENTITY;
        }
    }
    properties
}

#[cfg(feature = "glam")]
mod glam_impls {
    use super::{Matrix4View, MatrixProperties, properties_of};

    /// Properties are derived from the elements on every query, which costs
    /// up to sixteen reads and compares per transform. For per-frame affine
    /// work prefer [`glam::Affine3A`], which reports `AFFINE` for free.
    impl Matrix4View for glam::Mat4 {
        fn get(&self, column: usize, row: usize) -> f32 {
            self.col(column)[row]
        }

        fn properties(&self) -> MatrixProperties {
            properties_of(self)
        }
    }

    /// Always affine; row 3 reads as `(0, 0, 0, 1)`.
    impl Matrix4View for glam::Affine3A {
        fn get(&self, column: usize, row: usize) -> f32 {
            match (column, row) {
                (0..=2, 3) => 0.0,
                (3, 3) => 1.0,
                (3, _) => self.translation[row],
                _ => self.matrix3.col(column)[row],
            }
        }

        fn properties(&self) -> MatrixProperties {
            MatrixProperties::AFFINE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY: [[f32; 4]; 4] = [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ];

    #[test]
    fn test_identity_properties() {
        let props = IDENTITY.properties();
        assert!(props.contains(MatrixProperties::IDENTITY | MatrixProperties::AFFINE));
        assert_eq!(IDENTITY.structure(), MatrixStructure::Affine);
    }

    #[test]
    fn test_translation_properties() {
        let mut m = IDENTITY;
        m[3] = [5.0, -2.0, 1.0, 1.0];
        let props = m.properties();
        assert!(props.contains(MatrixProperties::TRANSLATION));
        assert!(!props.contains(MatrixProperties::IDENTITY));
    }

    #[test]
    fn test_perspective_is_generic() {
        let mut m = IDENTITY;
        m[2][3] = -1.0;
        m[3][3] = 0.0;
        assert!(m.properties().contains(MatrixProperties::PERSPECTIVE));
        assert_eq!(m.structure(), MatrixStructure::Generic);
    }

    #[test]
    fn test_structure_from_empty_properties() {
        assert_eq!(
            MatrixStructure::from(MatrixProperties::empty()),
            MatrixStructure::Generic
        );
        assert_eq!(
            MatrixStructure::from(MatrixProperties::TRANSLATION),
            MatrixStructure::Affine
        );
    }

    #[cfg(feature = "glam")]
    #[test]
    fn test_glam_affine_reads_translation() {
        let affine = glam::Affine3A::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(affine.get(3, 0), 1.0);
        assert_eq!(affine.get(3, 2), 3.0);
        assert_eq!(affine.get(0, 3), 0.0);
        assert_eq!(affine.get(3, 3), 1.0);
        assert_eq!(affine.get(1, 1), 1.0);
        assert_eq!(affine.structure(), MatrixStructure::Affine);
    }

    #[cfg(feature = "glam")]
    #[test]
    fn test_glam_mat4_matches_columns() {
        let m = glam::Mat4::from_cols_array(&[
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0,
            16.0,
        ]);
        assert_eq!(m.get(0, 3), 4.0);
        assert_eq!(m.get(3, 0), 13.0);
        assert_eq!(m.structure(), MatrixStructure::Generic);
    }
}
