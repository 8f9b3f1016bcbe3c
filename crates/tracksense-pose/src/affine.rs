use glam::Mat4;

/// Repack a row-major vendor 3x4 pose matrix into a column-major [`Mat4`].
///
/// Tracking runtimes hand out device-to-reference poses as row-major 3x4
/// blocks (rotation in columns 0..3, translation in column 3). The scene
/// graph consumes column-major homogeneous matrices, so the storage order is
/// transposed while every element keeps its mathematical position: the
/// translation stays in output column 3 and the bottom row is fixed to
/// (0, 0, 0, 1). Exact copy, no arithmetic.
#[inline]
pub fn mat4_from_rows_3x4(m: &[[f32; 4]; 3]) -> Mat4 {
    Mat4::from_cols_array(&[
        m[0][0], m[1][0], m[2][0], 0.0, //
        m[0][1], m[1][1], m[2][1], 0.0, //
        m[0][2], m[1][2], m[2][2], 0.0, //
        m[0][3], m[1][3], m[2][3], 1.0,
    ])
}

/// Repack a row-major vendor 4x4 matrix into a column-major [`Mat4`].
///
/// Same storage transposition as [`mat4_from_rows_3x4`] with the bottom row
/// copied through (used for projection matrices as well as poses).
#[inline]
pub fn mat4_from_rows_4x4(m: &[[f32; 4]; 4]) -> Mat4 {
    Mat4::from_cols_array(&[
        m[0][0], m[1][0], m[2][0], m[3][0], //
        m[0][1], m[1][1], m[2][1], m[3][1], //
        m[0][2], m[1][2], m[2][2], m[3][2], //
        m[0][3], m[1][3], m[2][3], m[3][3],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    #[test]
    fn test_identity_3x4() {
        let m = [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
        ];
        assert_eq!(mat4_from_rows_3x4(&m), Mat4::IDENTITY);
    }

    #[test]
    fn test_translation_column() {
        let m = [
            [1.0, 0.0, 0.0, 4.0],
            [0.0, 1.0, 0.0, 5.0],
            [0.0, 0.0, 1.0, 6.0],
        ];
        let out = mat4_from_rows_3x4(&m);
        assert_eq!(out.w_axis, Vec4::new(4.0, 5.0, 6.0, 1.0));
        assert_eq!(out.transform_point3(Vec3::ZERO), Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_4x4_keeps_element_positions() {
        let m = [
            [0.0, 1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0, 7.0],
            [8.0, 9.0, 10.0, 11.0],
            [12.0, 13.0, 14.0, 15.0],
        ];
        let out = mat4_from_rows_4x4(&m);
        // row i, column j of the vendor matrix stays at row i, column j
        for (i, row) in m.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                assert_eq!(out.col(j)[i], v);
            }
        }
    }
}
