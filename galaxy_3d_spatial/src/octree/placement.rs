/// Placement primitive selection.
///
/// Decides, per element, which primitive is tested against sectors:
/// the world position, or the world AABB of the collision model. The
/// choice is a type parameter of the octree so the rendering and the
/// physics octrees share one implementation.

use glam::Vec3;
use crate::math::{AABB, SectorPrimitive};
use super::element::Locatable;
use super::slot::compute_slot_for_position;

/// Primitive recorded for an element at its last insert/update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Routed into exactly one child per level
    Point(Vec3),
    /// Registered in every sector the box touches
    Volume(AABB),
}

impl Placement {
    /// Test against the root volume (inclusive).
    pub fn touches_root(&self, bounds: &AABB) -> bool {
        match self {
            Placement::Point(position) => bounds.contains_point(*position),
            Placement::Volume(aabb) => bounds.intersects(aabb),
        }
    }

    /// Test against octant `slot` of a parent sector.
    ///
    /// A point must also be routed to `slot` by `compute_slot_for_position`,
    /// so a point sitting on a split plane belongs to one child only.
    pub fn touches_octant(&self, parent_bounds: &AABB, slot: u8, child_bounds: &AABB) -> bool {
        match self {
            Placement::Point(position) => {
                child_bounds.contains_point(*position)
                    && compute_slot_for_position(*position, parent_bounds.center()) == slot
            }
            Placement::Volume(aabb) => child_bounds.intersects(aabb),
        }
    }

    /// Box view of the primitive (degenerate for points).
    pub fn aabb(&self) -> AABB {
        match self {
            Placement::Point(position) => AABB::from_point(*position),
            Placement::Volume(aabb) => *aabb,
        }
    }

    pub fn is_point(&self) -> bool {
        matches!(self, Placement::Point(_))
    }
}

impl SectorPrimitive for Placement {
    fn intersects_aabb(&self, aabb: &AABB) -> bool {
        match self {
            Placement::Point(position) => aabb.contains_point(*position),
            Placement::Volume(volume) => volume.intersects(aabb),
        }
    }
}

/// Compile-time placement strategy of an octree.
pub trait PlacementMode {
    /// `true` when elements may span several sectors.
    const VOLUMETRIC: bool;

    fn placement<E: Locatable + ?Sized>(element: &E) -> Placement;
}

/// Rendering octree strategy: every element is a point.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointPlacement;

impl PlacementMode for PointPlacement {
    const VOLUMETRIC: bool = false;

    fn placement<E: Locatable + ?Sized>(element: &E) -> Placement {
        Placement::Point(element.world_position())
    }
}

/// Physics octree strategy: elements with a volume use their world AABB.
///
/// Spheres, cuboids and capsules all use the looser box; exact shape
/// tests belong to the narrow phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct VolumePlacement;

impl PlacementMode for VolumePlacement {
    const VOLUMETRIC: bool = true;

    fn placement<E: Locatable + ?Sized>(element: &E) -> Placement {
        let position = element.world_position();
        element
            .collision_model()
            .and_then(|model| model.world_aabb(position, element.world_orientation()))
            .map_or(Placement::Point(position), Placement::Volume)
    }
}

#[cfg(test)]
#[path = "placement_tests.rs"]
mod tests;
