use glam::Vec3;
use super::*;

fn root() -> AABB {
    AABB::cube(Vec3::ZERO, 100.0)
}

// ============================================================================
// compute_slot_for_position
// ============================================================================

#[test]
fn test_slot_for_each_octant() {
    let c = Vec3::ZERO;
    assert_eq!(compute_slot_for_position(Vec3::new(1.0, 1.0, 1.0), c), X_POS_Y_POS_Z_POS);
    assert_eq!(compute_slot_for_position(Vec3::new(1.0, 1.0, -1.0), c), X_POS_Y_POS_Z_NEG);
    assert_eq!(compute_slot_for_position(Vec3::new(1.0, -1.0, 1.0), c), X_POS_Y_NEG_Z_POS);
    assert_eq!(compute_slot_for_position(Vec3::new(1.0, -1.0, -1.0), c), X_POS_Y_NEG_Z_NEG);
    assert_eq!(compute_slot_for_position(Vec3::new(-1.0, 1.0, 1.0), c), X_NEG_Y_POS_Z_POS);
    assert_eq!(compute_slot_for_position(Vec3::new(-1.0, 1.0, -1.0), c), X_NEG_Y_POS_Z_NEG);
    assert_eq!(compute_slot_for_position(Vec3::new(-1.0, -1.0, 1.0), c), X_NEG_Y_NEG_Z_POS);
    assert_eq!(compute_slot_for_position(Vec3::new(-1.0, -1.0, -1.0), c), X_NEG_Y_NEG_Z_NEG);
}

#[test]
fn test_slot_ties_route_to_positive_half() {
    assert_eq!(compute_slot_for_position(Vec3::ZERO, Vec3::ZERO), X_POS_Y_POS_Z_POS);
    assert_eq!(
        compute_slot_for_position(Vec3::new(-5.0, 0.0, 0.0), Vec3::ZERO),
        X_NEG_Y_POS_Z_POS
    );
}

#[test]
fn test_slot_relative_to_offset_center() {
    let center = Vec3::new(50.0, -50.0, 50.0);
    assert_eq!(compute_slot_for_position(Vec3::new(60.0, -60.0, 40.0), center), X_POS_Y_NEG_Z_NEG);
}

// ============================================================================
// octant_bounds
// ============================================================================

#[test]
fn test_octant_bounds_are_half_extent() {
    for slot in 0..SECTOR_DIVISION as u8 {
        let octant = octant_bounds(&root(), slot);
        assert_eq!(octant.size(), Vec3::splat(100.0));
        assert!(root().contains(&octant));
    }
}

#[test]
fn test_octant_bounds_match_slot_bits() {
    let positive = octant_bounds(&root(), X_POS_Y_POS_Z_POS);
    assert_eq!(positive, AABB::new(Vec3::ZERO, Vec3::splat(100.0)));

    let negative = octant_bounds(&root(), X_NEG_Y_NEG_Z_NEG);
    assert_eq!(negative, AABB::new(Vec3::splat(-100.0), Vec3::ZERO));

    let mixed = octant_bounds(&root(), X_NEG_Y_POS_Z_NEG);
    assert_eq!(mixed, AABB::new(Vec3::new(-100.0, 0.0, -100.0), Vec3::new(0.0, 100.0, 0.0)));
}

#[test]
fn test_point_lands_in_octant_of_its_slot() {
    let points = [
        Vec3::new(12.0, -3.0, 77.0),
        Vec3::new(-99.0, 99.0, -1.0),
        Vec3::new(0.0, -0.5, 0.0),
    ];
    for point in points {
        let slot = compute_slot_for_position(point, root().center());
        assert!(octant_bounds(&root(), slot).contains_point(point));
    }
}

#[test]
fn test_axis_bits() {
    assert_eq!(Axis::X.slot_bit() | Axis::Y.slot_bit() | Axis::Z.slot_bit(), 7);
    assert!(is_negative_half(X_NEG_Y_POS_Z_POS, Axis::X));
    assert!(!is_negative_half(X_NEG_Y_POS_Z_POS, Axis::Y));
    assert!(is_negative_half(X_POS_Y_POS_Z_NEG, Axis::Z));
}
