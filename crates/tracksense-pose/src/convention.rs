use glam::Quat;

// scene convention is xyzw (glam component order)
// the tracking device packs the same components as [z, w, x, y]

/// Relabel a raw device-convention quaternion into scene convention.
///
/// The device transmits quaternion components in `[z, w, x, y]` order; this
/// reorders them into a scene-convention [`Quat`]. Pure relabeling, no
/// arithmetic, exact for all inputs.
#[inline]
pub fn quat_from_device(raw: &[f32; 4]) -> Quat {
    Quat::from_xyzw(raw[2], raw[3], raw[0], raw[1])
}

/// Relabel a scene-convention quaternion into the device component order.
///
/// Exact componentwise inverse of [`quat_from_device`] for all inputs.
#[inline]
pub fn quat_to_device(q: &Quat) -> [f32; 4] {
    [q.z, q.w, q.x, q.y]
}
