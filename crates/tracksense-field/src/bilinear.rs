use glam::{Vec2, Vec3};

use crate::field::Field2D;

/// Cell types that support scalar-weighted linear blending.
pub trait Lerp: Copy {
    /// Blend toward `other` by fraction `f`: `self + f * (other - self)`.
    fn mix(self, other: Self, f: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn mix(self, other: Self, f: f32) -> Self {
        self + f * (other - self)
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn mix(self, other: Self, f: f32) -> Self {
        self + f * (other - self)
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn mix(self, other: Self, f: f32) -> Self {
        self + f * (other - self)
    }
}

impl<T: Lerp> Field2D<T> {
    /// Sample the field at a normalized coordinate with bilinear filtering.
    ///
    /// `uv` spans the unit square with (0, 0) at the first cell and (1, 1)
    /// at the last: the coordinate is scaled by `(dimension - 1)` per axis,
    /// so cell centers sit on the corners of the domain. The four cell reads
    /// are clamped independently to the field edges, then blended along x
    /// and y with the fractional weights.
    ///
    /// Total over all inputs: coordinates outside [0, 1] degenerate to the
    /// nearest edge cell.
    pub fn sample(&self, uv: Vec2) -> T {
        let t = uv * Vec2::new(self.width() as f32 - 1.0, self.height() as f32 - 1.0);
        let t0 = t.floor();
        let ta = t - t0;

        let (x0, y0) = (t0.x as i32, t0.y as i32);
        let v00 = *self.get_clamped(x0, y0);
        let v01 = *self.get_clamped(x0 + 1, y0);
        let v10 = *self.get_clamped(x0, y0 + 1);
        let v11 = *self.get_clamped(x0 + 1, y0 + 1);

        v00.mix(v01, ta.x).mix(v10.mix(v11, ta.x), ta.y)
    }
}
