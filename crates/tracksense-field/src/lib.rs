#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # tracksense-field
//!
//! A dense width x height grid of vector-valued cells ([`Field2D`]) with
//! edge-clamped bilinear sampling, used for lens-rectification maps and other
//! per-pixel correction lookups. The backing store is allocated once and
//! overwritten in place on each update; sampling is read-only and total.

/// Bilinear sampling over a field.
pub mod bilinear;

/// Errors produced when constructing or refilling a field.
mod error;

/// The 2D grid container.
pub mod field;

pub use bilinear::Lerp;
pub use error::FieldError;
pub use field::Field2D;
