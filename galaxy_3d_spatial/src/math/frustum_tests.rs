use glam::{Mat4, Vec3};
use super::*;

fn camera_frustum(fov: f32, far: f32) -> Frustum {
    let projection = Mat4::perspective_rh(fov, 1.0, 0.1, far);
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    Frustum::from_view_projection(&(projection * view))
}

// ============================================================================
// Frustum::from_view_projection
// ============================================================================

#[test]
fn test_planes_are_normalized() {
    for frustum in [
        Frustum::from_view_projection(&Mat4::IDENTITY),
        camera_frustum(std::f32::consts::FRAC_PI_4, 100.0),
        Frustum::from_view_projection(&Mat4::orthographic_rh(-10.0, 10.0, -10.0, 10.0, 0.1, 100.0)),
    ] {
        for plane in &frustum.planes {
            assert!((plane.truncate().length() - 1.0).abs() < 1e-4, "plane normal should be unit length");
        }
    }
}

#[test]
fn test_orthographic_left_plane_faces_inward() {
    let frustum = Frustum::from_view_projection(
        &Mat4::orthographic_rh(-10.0, 10.0, -10.0, 10.0, 0.1, 100.0),
    );
    assert!(frustum.planes[PLANE_LEFT].x > 0.9);
    assert!(frustum.planes[PLANE_RIGHT].x < -0.9);
}

// ============================================================================
// Frustum::intersects_aabb
// ============================================================================

#[test]
fn test_aabb_inside_frustum() {
    let frustum = camera_frustum(std::f32::consts::FRAC_PI_2, 100.0);
    assert!(frustum.intersects_aabb(&AABB::cube(Vec3::ZERO, 1.0)));
}

#[test]
fn test_aabb_outside_frustum() {
    let frustum = camera_frustum(std::f32::consts::FRAC_PI_4, 100.0);
    let aabb = AABB::new(Vec3::splat(100.0), Vec3::splat(101.0));
    assert!(!frustum.intersects_aabb(&aabb));
}

#[test]
fn test_aabb_behind_camera() {
    let frustum = camera_frustum(std::f32::consts::FRAC_PI_2, 100.0);
    let aabb = AABB::new(Vec3::new(-1.0, -1.0, 10.0), Vec3::new(1.0, 1.0, 12.0));
    assert!(!frustum.intersects_aabb(&aabb));
}

#[test]
fn test_perspective_rejects_aabb_between_camera_and_near_plane() {
    // Camera at z = 5 with near = 0.1: view depth 0.06..0.08 sits in front of the eye
    // but short of the near plane
    let frustum = camera_frustum(std::f32::consts::FRAC_PI_2, 100.0);
    let too_close = AABB::new(Vec3::new(-0.001, -0.001, 4.92), Vec3::new(0.001, 0.001, 4.94));
    let past_near = AABB::new(Vec3::new(-0.001, -0.001, 4.7), Vec3::new(0.001, 0.001, 4.8));
    assert!(!frustum.intersects_aabb(&too_close));
    assert!(frustum.intersects_aabb(&past_near));
}

#[test]
fn test_orthographic_rejects_aabb_behind_camera() {
    let frustum = Frustum::from_view_projection(
        &Mat4::orthographic_rh(-1.0, 1.0, -1.0, 1.0, 0.1, 100.0),
    );
    let behind = AABB::cube(Vec3::new(0.0, 0.0, 50.0), 0.5);
    let in_front = AABB::cube(Vec3::new(0.0, 0.0, -50.0), 0.5);
    let before_near = AABB::new(Vec3::new(-0.5, -0.5, -0.09), Vec3::new(0.5, 0.5, -0.01));
    assert!(!frustum.intersects_aabb(&behind));
    assert!(!frustum.intersects_aabb(&before_near));
    assert!(frustum.intersects_aabb(&in_front));
}

#[test]
fn test_near_plane_sits_at_near_distance() {
    let frustum = Frustum::from_view_projection(
        &Mat4::orthographic_rh(-1.0, 1.0, -1.0, 1.0, 0.5, 100.0),
    );
    let near = frustum.planes[PLANE_NEAR];
    // Inward normal looks down -Z, plane passes through z = -0.5
    assert!((near.truncate() - Vec3::NEG_Z).length() < 1e-5);
    assert!((near.w + 0.5).abs() < 1e-5);

    let far = frustum.planes[PLANE_FAR];
    assert!((far.truncate() - Vec3::Z).length() < 1e-5);
    assert!((far.w - 100.0).abs() < 1e-3);
}

#[test]
fn test_aabb_beyond_far_plane() {
    let frustum = camera_frustum(std::f32::consts::FRAC_PI_2, 10.0);
    let aabb = AABB::new(Vec3::new(-1.0, -1.0, -20.0), Vec3::new(1.0, 1.0, -18.0));
    assert!(!frustum.intersects_aabb(&aabb));
}

// ============================================================================
// Frustum::classify_aabb
// ============================================================================

#[test]
fn test_classify_inside_partial_outside() {
    let frustum = Frustum::from_view_projection(
        &Mat4::orthographic_rh(-5.0, 5.0, -5.0, 5.0, 0.1, 100.0),
    );

    let inside = AABB::new(Vec3::new(-1.0, -1.0, -10.0), Vec3::new(1.0, 1.0, -5.0));
    let straddling = AABB::new(Vec3::new(4.0, 0.0, -10.0), Vec3::new(6.0, 1.0, -5.0));
    let outside = AABB::new(Vec3::new(20.0, 0.0, -10.0), Vec3::new(21.0, 1.0, -5.0));

    assert_eq!(frustum.classify_aabb(&inside), FrustumTest::Inside);
    assert_eq!(frustum.classify_aabb(&straddling), FrustumTest::Partial);
    assert_eq!(frustum.classify_aabb(&outside), FrustumTest::Outside);
    assert!(frustum.intersects_aabb(&straddling));
}
