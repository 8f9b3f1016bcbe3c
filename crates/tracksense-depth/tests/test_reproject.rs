use glam::{Quat, Vec2, Vec3};

use tracksense_depth::{reproject_frame, reproject_pixel, CalibrationParams, DepthError};
use tracksense_field::Field2D;
use tracksense_pose::extrinsic::ExtrinsicPose;
use tracksense_pose::rotation::random_unit_quaternion;

fn synthetic_calibration() -> CalibrationParams {
    CalibrationParams::new(
        Vec2::new(580.0, 580.0),
        Vec2::new(320.0, 240.0),
        Vec3::ZERO,
        Vec2::ZERO,
    )
}

#[test]
fn test_pixel_round_trip_through_pinhole() {
    let calib = synthetic_calibration();
    // a point 2 meters out, half a meter right and a quarter meter up
    let expected = Vec3::new(0.5, 0.25, 2.0);

    // project manually: column right of center, row above center
    let col = 320.0 + 580.0 * (expected.x / expected.z);
    let row = 240.0 - 580.0 * (expected.y / expected.z);

    let out = reproject_pixel(
        Vec2::new(col, row),
        2000.0,
        &calib,
        &ExtrinsicPose::IDENTITY,
        None,
    );
    assert!((out - expected).length() < 1e-5);
}

#[test]
fn test_zero_rectification_matches_unrectified() {
    let calib = synthetic_calibration();
    let mut rectify = Field2D::from_val(8, 8, Vec2::ONE).unwrap();
    calib.fill_rectify_map(&mut rectify);

    let pose = ExtrinsicPose::new(Vec3::new(0.2, 1.0, -0.4), random_unit_quaternion());
    for pixel in [Vec2::new(0.0, 0.0), Vec2::new(320.0, 240.0), Vec2::new(639.0, 479.0)] {
        let plain = reproject_pixel(pixel, 1234.0, &calib, &pose, None);
        let rectified = reproject_pixel(pixel, 1234.0, &calib, &pose, Some(&rectify));
        assert!((plain - rectified).length() < 1e-6);
    }
}

#[test]
fn test_rectification_shifts_focal_plane_point() {
    let calib = synthetic_calibration();
    // constant half-normalized-unit shift along x
    let rectify = Field2D::from_val(2, 2, Vec2::new(0.5, 0.0)).unwrap();

    let out = reproject_pixel(
        Vec2::new(320.0, 240.0),
        1000.0,
        &calib,
        &ExtrinsicPose::IDENTITY,
        Some(&rectify),
    );
    assert!((out - Vec3::new(0.5, 0.0, 1.0)).length() < 1e-6);
}

#[test]
fn test_frame_against_per_pixel() -> Result<(), DepthError> {
    let calib = synthetic_calibration();
    let pose = ExtrinsicPose::new(Vec3::new(0.0, 0.8, 0.0), Quat::IDENTITY);

    let mut depth = Field2D::from_val(4, 3, 0u16).unwrap();
    for (i, d) in depth.as_slice_mut().iter_mut().enumerate() {
        *d = (i as u16) * 700;
    }

    let mut cloud = Field2D::from_val(4, 3, Vec3::ZERO).unwrap();
    reproject_frame(&depth, &calib, &pose, None, &mut cloud)?;

    for r in 0..3 {
        for c in 0..4 {
            let i = r * 4 + c;
            let expected = reproject_pixel(
                Vec2::new(c as f32, r as f32),
                depth.as_slice()[i] as f32,
                &calib,
                &pose,
                None,
            );
            assert_eq!(cloud.as_slice()[i], expected);
        }
    }
    Ok(())
}
