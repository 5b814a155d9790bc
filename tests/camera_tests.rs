// Host-side tests for the orbit camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod camera {
    include!("../src/camera.rs");
}

use camera::*;
use glam::Vec3;

const FOVY: f32 = 75.0 * std::f32::consts::PI / 180.0;
const MAX_POLAR: f32 = std::f32::consts::PI / 6.0;

fn make_camera() -> OrbitCamera {
    OrbitCamera::looking_from(
        Vec3::new(0.0, 22.0, 5.0),
        Vec3::ZERO,
        MAX_POLAR,
        FOVY,
        0.1,
        100.0,
    )
}

#[test]
fn looking_from_round_trips_the_eye_position() {
    let cam = make_camera();
    let eye = cam.eye();
    assert!((eye - Vec3::new(0.0, 22.0, 5.0)).length() < 1e-3, "eye {eye:?}");
}

#[test]
fn initial_pose_is_within_the_polar_clamp() {
    let cam = make_camera();
    assert!(cam.polar <= MAX_POLAR);
    assert!(cam.polar > 0.0);
}

#[test]
fn orbit_clamps_the_polar_angle() {
    let mut cam = make_camera();
    cam.orbit(0.0, 10.0);
    assert!((cam.polar - MAX_POLAR).abs() < 1e-6);

    cam.orbit(0.0, -20.0);
    assert!(cam.polar > 0.0, "polar collapsed to the pole");
}

#[test]
fn orbit_preserves_the_distance_to_the_target() {
    let mut cam = make_camera();
    let radius = cam.radius;
    cam.orbit(1.3, 0.1);
    cam.orbit(-2.7, -0.05);
    let eye = cam.eye();
    assert!(((eye - cam.target).length() - radius).abs() < 1e-3);
}

#[test]
fn yaw_wraps_without_changing_height() {
    let mut cam = make_camera();
    let y0 = cam.eye().y;
    cam.orbit(std::f32::consts::PI, 0.0);
    assert!((cam.eye().y - y0).abs() < 1e-3);
}

#[test]
fn center_ray_points_at_the_target() {
    let cam = make_camera();
    let (ro, rd) = cam.screen_to_world_ray(800.0, 600.0, 400.0, 300.0);
    assert!((ro - cam.eye()).length() < 1e-3);
    let expected = (cam.target - cam.eye()).normalize();
    assert!(
        rd.dot(expected) > 0.999,
        "center ray {rd:?} not toward target (expected {expected:?})"
    );
}

#[test]
fn corner_rays_diverge_from_the_center_ray() {
    let cam = make_camera();
    let (_, center) = cam.screen_to_world_ray(800.0, 600.0, 400.0, 300.0);
    let (_, corner) = cam.screen_to_world_ray(800.0, 600.0, 0.0, 0.0);
    assert!(center.dot(corner) < 0.999);
    assert!((corner.length() - 1.0).abs() < 1e-4);
}

#[test]
fn matrices_are_finite() {
    let cam = make_camera();
    let vp = cam.projection_matrix(800.0 / 600.0) * cam.view_matrix();
    for v in vp.to_cols_array() {
        assert!(v.is_finite());
    }
}
