//! Recording collaborators for testing vector transforms.
//!
//! These wrap a real matrix or quaternion and record every query made
//! against them, so tests can check which path a vector operation took.

use parking_lot::Mutex;
use tesser_math::{Matrix4View, MatrixProperties, QuaternionView, Vector4};

/// A query recorded by [`RecordingMatrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixCall {
    Get { column: usize, row: usize },
    Properties,
}

/// Matrix wrapper that records element reads and property queries.
///
/// # Borrow Checking Pattern: Interior Mutability
///
/// [`Matrix4View`] takes `&self`, but recording needs mutation, so calls
/// go into a `Mutex<Vec<MatrixCall>>`. `parking_lot::Mutex` keeps the
/// wrapper `Sync` without poisoning.
///
/// # Example
///
/// ```rust
/// use tesser_math::{Vector4, Vector4Ops};
/// use tesser_test_utils::RecordingMatrix;
///
/// let identity: [[f32; 4]; 4] = [
///     [1.0, 0.0, 0.0, 0.0],
///     [0.0, 1.0, 0.0, 0.0],
///     [0.0, 0.0, 1.0, 0.0],
///     [0.0, 0.0, 0.0, 1.0],
/// ];
/// let m = RecordingMatrix::new(identity);
/// let mut v = Vector4::default();
/// v.mul_matrix(&m);
///
/// assert!(!m.read_row(3));
/// ```
#[derive(Debug)]
pub struct RecordingMatrix<M> {
    inner: M,
    properties: Option<MatrixProperties>,
    calls: Mutex<Vec<MatrixCall>>,
}

impl<M: Matrix4View> RecordingMatrix<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            properties: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Report `properties` instead of the wrapped matrix's own.
    pub fn with_properties(mut self, properties: MatrixProperties) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Get a copy of all recorded calls.
    pub fn calls(&self) -> Vec<MatrixCall> {
        self.calls.lock().clone()
    }

    /// Count element reads.
    pub fn count_element_reads(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, MatrixCall::Get { .. }))
            .count()
    }

    /// Count property queries.
    pub fn count_property_queries(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, MatrixCall::Properties))
            .count()
    }

    /// Whether any element of `row` was read.
    pub fn read_row(&self, row: usize) -> bool {
        self.calls
            .lock()
            .iter()
            .any(|call| matches!(call, MatrixCall::Get { row: r, .. } if *r == row))
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }
}

impl<M: Matrix4View> Matrix4View for RecordingMatrix<M> {
    fn get(&self, column: usize, row: usize) -> f32 {
        self.calls.lock().push(MatrixCall::Get { column, row });
        self.inner.get(column, row)
    }

    fn properties(&self) -> MatrixProperties {
        self.calls.lock().push(MatrixCall::Properties);
        self.properties.unwrap_or_else(|| self.inner.properties())
    }
}

/// Quaternion wrapper that records the vectors it was asked to transform.
#[derive(Debug)]
pub struct RecordingQuaternion<Q> {
    inner: Q,
    transformed: Mutex<Vec<Vector4>>,
}

impl<Q: QuaternionView> RecordingQuaternion<Q> {
    pub fn new(inner: Q) -> Self {
        Self {
            inner,
            transformed: Mutex::new(Vec::new()),
        }
    }

    /// Inputs of every `transform` call, in order.
    pub fn transformed(&self) -> Vec<Vector4> {
        self.transformed.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.transformed.lock().len()
    }
}

impl<Q: QuaternionView> QuaternionView for RecordingQuaternion<Q> {
    fn transform<'d>(&self, v: &Vector4, dest: &'d mut Vector4) -> &'d mut Vector4 {
        self.transformed.lock().push(*v);
        self.inner.transform(v, dest)
    }
}
