/// Axis-aligned bounding box.
///
/// Used both as the volume owned by an octree sector and as the
/// world-space primitive of volume-placed elements. All tests are
/// inclusive: boxes sharing a face, an edge or a corner intersect.

use glam::Vec3;

/// Relative tolerance used by `is_cube`.
const CUBE_TOLERANCE: f32 = 1e-4;

/// Axis-Aligned Bounding Box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Build a box from its two corners (component-wise ordered).
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Build a cube from its center and half edge length.
    pub fn cube(center: Vec3, half_size: f32) -> Self {
        Self::new(center - Vec3::splat(half_size), center + Vec3::splat(half_size))
    }

    /// A zero-volume box around a single point.
    pub fn from_point(point: Vec3) -> Self {
        Self { min: point, max: point }
    }

    /// Center point of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths along X, Y and Z.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Finite corners with `min <= max` on every axis.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min.cmple(self.max).all()
    }

    /// Non-degenerate box whose three edges have the same length.
    pub fn is_cube(&self) -> bool {
        if !self.is_valid() {
            return false;
        }
        let size = self.size();
        let longest = size.max_element();
        if longest <= 0.0 {
            return false;
        }
        (longest - size.min_element()) <= longest * CUBE_TOLERANCE
    }

    /// Test if this AABB fully contains another AABB.
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.cmple(other.min).all() && self.max.cmpge(other.max).all()
    }

    /// Test if a point lies inside or on the boundary of this AABB.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.min.cmple(point).all() && self.max.cmpge(point).all()
    }

    /// Test if this AABB intersects (overlaps or touches) another AABB.
    pub fn intersects(&self, other: &AABB) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &AABB) -> AABB {
        AABB {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Closest point of the box to `point` (the point itself when inside).
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
