/// Bounding sphere used as a query primitive (proximity and blast radius
/// queries from the physics side).

use glam::Vec3;
use super::AABB;

/// Sphere in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center of the sphere
    pub center: Vec3,
    /// Radius (negative values are treated as zero)
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius: radius.max(0.0) }
    }

    /// Tight axis-aligned box around the sphere.
    pub fn aabb(&self) -> AABB {
        AABB::cube(self.center, self.radius)
    }

    /// Closest-point test: the sphere touches the box when the point of the
    /// box nearest to the center lies within `radius`.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        let closest = aabb.closest_point(self.center);
        closest.distance_squared(self.center) <= self.radius * self.radius
    }
}
