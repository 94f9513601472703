/// Query primitives accepted by octree traversals.
///
/// The octree only ever asks one question of a primitive: does it reach
/// a sector's box? Points, boxes, spheres and frustums all answer it, so
/// `for_touched_sector` and `query` stay generic over this trait.
/// Primitives that can also tell when they swallow a whole box override
/// `classify_aabb`, letting traversals stop testing below that sector.

use glam::Vec3;
use super::{AABB, Frustum, FrustumTest, Sphere};

/// Primitive that can be tested against an axis-aligned sector volume.
pub trait SectorPrimitive {
    /// `true` when the primitive overlaps or touches `aabb`.
    fn intersects_aabb(&self, aabb: &AABB) -> bool;

    /// 3-way test against `aabb`.
    ///
    /// Never reports `Inside` unless overridden.
    fn classify_aabb(&self, aabb: &AABB) -> FrustumTest {
        if self.intersects_aabb(aabb) {
            FrustumTest::Partial
        } else {
            FrustumTest::Outside
        }
    }
}

impl SectorPrimitive for Vec3 {
    fn intersects_aabb(&self, aabb: &AABB) -> bool {
        aabb.contains_point(*self)
    }
}

impl SectorPrimitive for AABB {
    fn intersects_aabb(&self, aabb: &AABB) -> bool {
        self.intersects(aabb)
    }
}

impl SectorPrimitive for Sphere {
    fn intersects_aabb(&self, aabb: &AABB) -> bool {
        Sphere::intersects_aabb(self, aabb)
    }
}

impl SectorPrimitive for Frustum {
    fn intersects_aabb(&self, aabb: &AABB) -> bool {
        Frustum::intersects_aabb(self, aabb)
    }

    fn classify_aabb(&self, aabb: &AABB) -> FrustumTest {
        Frustum::classify_aabb(self, aabb)
    }
}

impl<P: SectorPrimitive + ?Sized> SectorPrimitive for &P {
    fn intersects_aabb(&self, aabb: &AABB) -> bool {
        (**self).intersects_aabb(aabb)
    }

    fn classify_aabb(&self, aabb: &AABB) -> FrustumTest {
        (**self).classify_aabb(aabb)
    }
}

#[cfg(test)]
#[path = "primitive_tests.rs"]
mod tests;
