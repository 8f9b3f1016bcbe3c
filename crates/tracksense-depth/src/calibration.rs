use glam::{Vec2, Vec3};
use tracksense_field::Field2D;

/// Pinhole calibration of a depth or color camera.
///
/// Immutable per capture session; supplied by the adapter from vendor
/// calibration data or deduced with [`CalibrationParams::from_unit_probe`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationParams {
    /// The focal length in pixels (fx, fy).
    pub focal_length: Vec2,
    /// The principal point in pixels (cx, cy).
    pub principal_point: Vec2,
    /// The radial distortion coefficients (k1, k2, k3).
    pub radial: Vec3,
    /// The tangential distortion coefficients (p1, p2).
    pub tangential: Vec2,
}

impl CalibrationParams {
    /// Create calibration parameters from focal length, principal point, and
    /// distortion coefficients.
    pub fn new(focal_length: Vec2, principal_point: Vec2, radial: Vec3, tangential: Vec2) -> Self {
        Self {
            focal_length,
            principal_point,
            radial,
            tangential,
        }
    }

    /// Deduce focal length and principal point from two projected probe
    /// points.
    ///
    /// `origin_px` is the pixel the sensor projects the camera-space point
    /// (0, 0, 1) to, and `unit_px` the pixel for (1, 1, 1). The principal
    /// point is the first projection; the focal length is the pixel offset
    /// between the two, with the image-row direction flipped so both focal
    /// components come out positive for a camera with Y up. Distortion
    /// coefficients are left at zero.
    pub fn from_unit_probe(origin_px: Vec2, unit_px: Vec2) -> Self {
        let fx = unit_px.x - origin_px.x;
        let fy = -(unit_px.y - origin_px.y);
        Self {
            focal_length: Vec2::new(fx, fy),
            principal_point: origin_px,
            radial: Vec3::ZERO,
            tangential: Vec2::ZERO,
        }
    }

    /// Forward lens-distortion displacement for a normalized focal-plane
    /// coordinate (Brown-Conrady radial plus tangential terms).
    ///
    /// Returns the delta to add to `v` to distort it; negate for a
    /// first-order undistortion correction.
    pub fn distortion_delta(&self, v: Vec2) -> Vec2 {
        let (x, y) = (v.x, v.y);
        let (k1, k2, k3) = (self.radial.x, self.radial.y, self.radial.z);
        let (p1, p2) = (self.tangential.x, self.tangential.y);

        let r2 = x * x + y * y;
        let r4 = r2 * r2;
        let r6 = r2 * r2 * r2;
        let radial = k1 * r2 + k2 * r4 + k3 * r6;

        Vec2::new(
            x * radial + 2.0 * p1 * x * y + p2 * (r2 + 2.0 * x * x),
            y * radial + 2.0 * p2 * x * y + p1 * (r2 + 2.0 * y * y),
        )
    }

    /// Populate a rectification field with first-order undistortion deltas.
    ///
    /// Each cell receives the negated forward displacement for the
    /// normalized coordinate that samples back to that cell, so adding the
    /// sampled delta to a focal-plane coordinate approximates undistortion
    /// without a closed-form inverse model. The field spans the sampler's
    /// unit domain (cell centers on the domain corners).
    pub fn fill_rectify_map(&self, field: &mut Field2D<Vec2>) {
        let (w, h) = (field.width(), field.height());
        let inv_dim = Vec2::new(
            if w > 1 { 1.0 / (w as f32 - 1.0) } else { 0.0 },
            if h > 1 { 1.0 / (h as f32 - 1.0) } else { 0.0 },
        );

        for (i, cell) in field.as_slice_mut().iter_mut().enumerate() {
            let uv = Vec2::new((i % w) as f32, (i / w) as f32) * inv_dim;
            *cell = -self.distortion_delta(uv);
        }
    }
}
