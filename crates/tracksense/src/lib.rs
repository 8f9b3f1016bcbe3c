#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use tracksense_pose as pose;

#[doc(inline)]
pub use tracksense_field as field;

#[doc(inline)]
pub use tracksense_depth as depth;
