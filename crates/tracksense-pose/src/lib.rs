#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # tracksense-pose
//!
//! Pure numeric routines shared by tracking-sensor adapters: quaternion
//! component-order conversion between device and scene conventions, fast
//! quaternion vector rotation, extrinsic (sensor-to-reference) pose
//! transforms, and repacking of vendor row-major pose matrices into
//! column-major homogeneous matrices.
//!
//! All functions are total over value types, allocation-free, and safe to
//! call from any thread.
//!
//! ## Example
//!
//! ```rust
//! use glam::Vec3;
//! use tracksense_pose::convention::quat_from_device;
//! use tracksense_pose::extrinsic::ExtrinsicPose;
//!
//! // raw tracking sample from a device, in device component order
//! let orientation = quat_from_device(&[0.0, 1.0, 0.0, 0.0]);
//! let pose = ExtrinsicPose::new(Vec3::new(0.0, 1.2, 0.0), orientation);
//!
//! // map a sensor-space point into the reference frame
//! let world = pose.to_reference(Vec3::new(0.0, 1.2, 2.0));
//! ```

/// Vendor pose matrix to column-major homogeneous matrix conversion.
pub mod affine;

/// Quaternion component-order conversion between device and scene conventions.
pub mod convention;

/// Extrinsic sensor-to-reference pose transform.
pub mod extrinsic;

/// Quaternion vector rotation operators.
pub mod rotation;
