use glam::{Quat, Vec3};
use rand::Rng;

/// Rotate a vector by a unit quaternion.
///
/// Computes `q * (v, 0) * q⁻¹` through the reduced sandwich-product
/// expansion, without building a rotation matrix or performing a general
/// quaternion multiply.
///
/// PRECONDITION: `q` is unit-norm. The expansion substitutes the conjugate
/// for the inverse, so a non-unit quaternion scales the result. Not checked;
/// this runs once per frame per tracked point.
#[inline]
pub fn quat_rotate(q: &Quat, v: Vec3) -> Vec3 {
    // p = q * (v, 0)
    let px = q.w * v.x + q.y * v.z - q.z * v.y;
    let py = q.w * v.y + q.z * v.x - q.x * v.z;
    let pz = q.w * v.z + q.x * v.y - q.y * v.x;
    let pw = -q.x * v.x - q.y * v.y - q.z * v.z;

    // (p * conj(q)).xyz
    Vec3::new(
        px * q.w - pw * q.x - py * q.z + pz * q.y,
        py * q.w - pw * q.y - pz * q.x + px * q.z,
        pz * q.w - pw * q.z - px * q.y + py * q.x,
    )
}

/// Rotate a vector by the inverse of a unit quaternion.
///
/// Computes `q⁻¹ * (v, 0) * q`, equivalent to `quat_rotate` with the
/// conjugate quaternion.
///
/// PRECONDITION: `q` is unit-norm, as for [`quat_rotate`].
#[inline]
pub fn quat_unrotate(q: &Quat, v: Vec3) -> Vec3 {
    // p = conj(q) * (v, 0)
    let px = q.w * v.x - q.y * v.z + q.z * v.y;
    let py = q.w * v.y - q.z * v.x + q.x * v.z;
    let pz = q.w * v.z - q.x * v.y + q.y * v.x;
    let pw = q.x * v.x + q.y * v.y + q.z * v.z;

    // (p * q).xyz
    Vec3::new(
        pw * q.x + px * q.w + py * q.z - pz * q.y,
        pw * q.y + py * q.w + pz * q.x - px * q.z,
        pw * q.z + pz * q.w + px * q.y - py * q.x,
    )
}

/// Draw a random unit quaternion, uniform over the rotation group.
pub fn random_unit_quaternion() -> Quat {
    let mut rng = rand::rng();

    let r1: f32 = rng.random();
    let r2: f32 = rng.random();
    let r3: f32 = rng.random();

    let w = (1.0 - r1).sqrt() * (2.0 * std::f32::consts::PI * r2).sin();
    let x = (1.0 - r1).sqrt() * (2.0 * std::f32::consts::PI * r2).cos();
    let y = r1.sqrt() * (2.0 * std::f32::consts::PI * r3).sin();
    let z = r1.sqrt() * (2.0 * std::f32::consts::PI * r3).cos();

    Quat::from_xyzw(x, y, z, w)
}
