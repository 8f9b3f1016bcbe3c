use glam::{IVec2, Vec2, Vec3};
use rayon::prelude::*;

use tracksense_field::Field2D;
use tracksense_pose::extrinsic::ExtrinsicPose;

use crate::calibration::CalibrationParams;
use crate::error::DepthError;

const MM_TO_M: f32 = 0.001;

/// Reproject a single depth pixel into the reference frame.
///
/// # Arguments
///
/// * `pixel` - The pixel coordinate (column, row) in the depth image.
/// * `depth_mm` - The raw depth reading in millimeters.
/// * `calibration` - The pinhole calibration of the sensor.
/// * `pose` - The sensor placement within the reference frame.
/// * `rectify` - Optional lens-rectification field sampled at the
///   focal-plane coordinate.
///
/// The pixel is unprojected to the idealized focal plane, corrected by the
/// sampled rectification delta if one is supplied, scaled by depth in meters
/// (with the image-row axis flipped so camera Y points up), and placed into
/// the reference frame through the extrinsic pose.
///
/// A non-positive depth yields the zero point passed through the extrinsic
/// pose, never a skipped output.
pub fn reproject_pixel(
    pixel: Vec2,
    depth_mm: f32,
    calibration: &CalibrationParams,
    pose: &ExtrinsicPose,
    rectify: Option<&Field2D<Vec2>>,
) -> Vec3 {
    if depth_mm <= 0.0 {
        return pose.to_reference(Vec3::ZERO);
    }

    // unproject from the pixel plane to the idealized focal plane
    let mut xy = (pixel - calibration.principal_point) / calibration.focal_length;

    if let Some(map) = rectify {
        xy += map.sample(xy);
    }

    // project into 3D by depth; rows grow downward, camera Y grows upward
    let z = depth_mm * MM_TO_M;
    pose.to_reference(Vec3::new(xy.x * z, -xy.y * z, z))
}

/// Reproject a whole depth frame into a point cloud buffer.
///
/// Writes one reference-frame point per depth pixel into `cloud`, rows in
/// parallel. Invalid depth readings produce the zero-depth point so the
/// output buffer is always fully written.
///
/// # Errors
///
/// The depth and cloud buffers must share the same dimensions.
pub fn reproject_frame(
    depth: &Field2D<u16>,
    calibration: &CalibrationParams,
    pose: &ExtrinsicPose,
    rectify: Option<&Field2D<Vec2>>,
    cloud: &mut Field2D<Vec3>,
) -> Result<(), DepthError> {
    if depth.width() != cloud.width() || depth.height() != cloud.height() {
        return Err(DepthError::SizeMismatch(
            depth.width(),
            depth.height(),
            cloud.width(),
            cloud.height(),
        ));
    }

    let width = depth.width();
    cloud
        .as_slice_mut()
        .par_chunks_exact_mut(width)
        .zip(depth.as_slice().par_chunks_exact(width))
        .enumerate()
        .for_each(|(r, (cloud_row, depth_row))| {
            for (c, (out, &d)) in cloud_row.iter_mut().zip(depth_row.iter()).enumerate() {
                *out = reproject_pixel(
                    Vec2::new(c as f32, r as f32),
                    d as f32,
                    calibration,
                    pose,
                    rectify,
                );
            }
        });

    Ok(())
}

/// Reproject a depth frame aligned to the color image through a per-pixel
/// color-coordinate map.
///
/// For every depth pixel, `color_map` names the color-image pixel it lands
/// on (as produced by the sensor's registration API). The depth value is
/// scattered to that output cell along with its reprojected point, so the
/// cloud and `aligned_depth` line up with the color image. Map entries
/// outside the image are skipped; output cells are pre-filled with the
/// zero-depth point and zero depth before scattering.
///
/// # Errors
///
/// All four buffers must share the same dimensions.
pub fn reproject_frame_aligned(
    depth: &Field2D<u16>,
    color_map: &Field2D<IVec2>,
    calibration: &CalibrationParams,
    pose: &ExtrinsicPose,
    rectify: Option<&Field2D<Vec2>>,
    cloud: &mut Field2D<Vec3>,
    aligned_depth: &mut Field2D<u16>,
) -> Result<(), DepthError> {
    for (w, h) in [
        (color_map.width(), color_map.height()),
        (cloud.width(), cloud.height()),
        (aligned_depth.width(), aligned_depth.height()),
    ] {
        if depth.width() != w || depth.height() != h {
            return Err(DepthError::SizeMismatch(
                depth.width(),
                depth.height(),
                w,
                h,
            ));
        }
    }

    let (w, h) = (depth.width() as i32, depth.height() as i32);

    aligned_depth.fill(0);
    cloud.fill(pose.to_reference(Vec3::ZERO));

    for (&d, &cr) in depth.as_slice().iter().zip(color_map.as_slice().iter()) {
        if cr.x < 0 || cr.x >= w || cr.y < 0 || cr.y >= h {
            continue;
        }
        let idx = (cr.y * w + cr.x) as usize;
        if d > 0 {
            aligned_depth.as_slice_mut()[idx] = d;
            cloud.as_slice_mut()[idx] = reproject_pixel(
                Vec2::new(cr.x as f32, cr.y as f32),
                d as f32,
                calibration,
                pose,
                rectify,
            );
        }
    }

    Ok(())
}
