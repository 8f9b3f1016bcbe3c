#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # tracksense-depth
//!
//! Maps depth-sensor pixels into reference-frame 3D points through a pinhole
//! model, an optional lens-rectification field, and an extrinsic sensor pose.
//! The per-pixel routine is pure and total; frame kernels process whole depth
//! buffers with one output point per pixel (zero-fill on invalid depth, so
//! downstream buffers are always fully written).

/// Pinhole calibration parameters and rectification-map generation.
pub mod calibration;

/// Errors produced by the frame kernels.
mod error;

/// Depth-to-world reprojection routines.
pub mod reproject;

pub use calibration::CalibrationParams;
pub use error::DepthError;
pub use reproject::{reproject_frame, reproject_frame_aligned, reproject_pixel};
