//! Tesser Math
//!
//! A single-precision homogeneous 4D vector for transform pipelines.
//!
//! - [`Vector4`]: the mutable value, `(0, 0, 0, 1)` by default
//! - [`Vector4View`] / [`Vector4Ops`]: the read-only capability and the pure
//!   operations every view gets
//! - [`Matrix4View`], [`QuaternionView`], [`Vector3View`]: the collaborators
//!   vectors are transformed by or built from
//! - [`ByteBuffer`] / [`FloatBuffer`]: cursor-carrying buffers vectors are
//!   marshalled through
//!
//! ```
//! use tesser_math::{Vector4, Vector4Ops};
//!
//! let translate = glam::Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
//! let mut point = Vector4::default();
//! point.mul_matrix(&translate);
//! assert_eq!(point, Vector4::new(1.0, 2.0, 3.0, 1.0));
//!
//! let direction = Vector4::new(1.0, 0.0, 0.0, 0.0);
//! let mut moved = Vector4::default();
//! direction.mul_matrix_into(&translate, &mut moved);
//! assert_eq!(moved, direction);
//! ```

pub mod buffer;
pub mod error;
pub mod format;
pub mod logging;
pub mod matrix;
pub mod profiling;
pub mod quat;
pub mod scalar;
pub mod vec3;
pub mod vec4;

pub use buffer::{ByteBuffer, ByteOrder, FloatBuffer, VectorBuffer};
pub use error::{VectorError, VectorResult};
pub use format::{DecimalFormat, Notation, NumberFormat};
pub use matrix::{Matrix4View, MatrixProperties, MatrixStructure};
pub use quat::QuaternionView;
pub use vec3::Vector3View;
pub use vec4::{Vector4, Vector4Ops, Vector4View};

/// Everything needed to call vector operations.
pub mod prelude {
    pub use crate::{
        Matrix4View, QuaternionView, Vector3View, Vector4, Vector4Ops, Vector4View, VectorBuffer,
    };
}
