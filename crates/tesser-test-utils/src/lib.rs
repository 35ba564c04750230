//! Test utilities for tesser.
//!
//! This crate provides testing infrastructure for `tesser-math`: recording
//! stand-ins for the matrix and quaternion collaborators, and float
//! assertions for vectors.
//!
//! # Overview
//!
//! - [`RecordingMatrix`] - wraps any [`Matrix4View`](tesser_math::Matrix4View)
//!   and records element reads and property queries
//! - [`RecordingQuaternion`] - wraps any
//!   [`QuaternionView`](tesser_math::QuaternionView) and records the vectors
//!   it transforms
//! - [`assert_vec4_near!`] - component-wise comparison with an epsilon

pub mod assertions;
pub mod recording;

pub use recording::{MatrixCall, RecordingMatrix, RecordingQuaternion};

#[doc(hidden)]
pub use tesser_math;
