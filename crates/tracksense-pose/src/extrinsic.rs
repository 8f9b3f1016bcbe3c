use glam::{Quat, Vec3};

use crate::rotation::{quat_rotate, quat_unrotate};

/// Placement of a sensor within a reference frame.
///
/// `position` and `orientation` describe the sensor's pose *within* the
/// reference frame. The struct is a plain value; adapters overwrite their
/// copy from tracking or configuration messages and pass it by reference on
/// each use.
///
/// PRECONDITION: `orientation` is unit-norm (see
/// [`quat_rotate`](crate::rotation::quat_rotate)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrinsicPose {
    /// Sensor position in the reference frame.
    pub position: Vec3,
    /// Sensor orientation in the reference frame.
    pub orientation: Quat,
}

impl ExtrinsicPose {
    /// The identity placement: sensor frame equals reference frame.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    /// Create a pose from a position and an orientation.
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Map a sensor-space point into the reference frame.
    ///
    /// The position is subtracted before the rotation compensation is
    /// applied: `quat_unrotate(orientation, p - position)`.
    #[inline]
    pub fn to_reference(&self, p: Vec3) -> Vec3 {
        quat_unrotate(&self.orientation, p - self.position)
    }

    /// Map a reference-frame point into sensor space.
    ///
    /// Exact inverse of [`to_reference`](Self::to_reference):
    /// `quat_rotate(orientation, p) + position`.
    #[inline]
    pub fn from_reference(&self, p: Vec3) -> Vec3 {
        quat_rotate(&self.orientation, p) + self.position
    }
}

impl Default for ExtrinsicPose {
    fn default() -> Self {
        Self::IDENTITY
    }
}
