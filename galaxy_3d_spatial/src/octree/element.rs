/// Element contract consumed by the octree.
///
/// The octree never owns elements. It keeps their identity (a small
/// `Copy` key, typically a slotmap key from the scene) and asks the
/// element for its world position and optional collision model whenever
/// it is inserted or updated.

use std::fmt::Debug;
use std::hash::Hash;
use glam::{Quat, Vec3};
use crate::math::AABB;

/// Identity usable as a set key inside every sector.
pub trait ElementId: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> ElementId for T {}

/// Shape attached to an element for physics broad phase.
///
/// Shapes are expressed in the element's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionModel {
    /// No volume, placed by position only
    Point,
    /// Sphere centered on the element position
    Sphere {
        radius: f32,
    },
    /// Axis-aligned box relative to the element position (rotation ignored)
    Cuboid {
        local: AABB,
    },
    /// Segment swept by a sphere, end points rotated by the element orientation
    Capsule {
        start: Vec3,
        end: Vec3,
        radius: f32,
    },
}

impl CollisionModel {
    /// Cuboid model with the same half extent on each axis.
    pub fn cube(half_extent: f32) -> Self {
        CollisionModel::Cuboid {
            local: AABB::cube(Vec3::ZERO, half_extent),
        }
    }

    /// Whether the model has no volume.
    pub fn is_point(&self) -> bool {
        matches!(self, CollisionModel::Point)
    }

    /// World-space box enclosing the model, `None` for `Point`.
    pub fn world_aabb(&self, position: Vec3, orientation: Quat) -> Option<AABB> {
        match *self {
            CollisionModel::Point => None,
            CollisionModel::Sphere { radius } => Some(AABB::cube(position, radius.abs())),
            CollisionModel::Cuboid { local } => Some(AABB::new(local.min + position, local.max + position)),
            CollisionModel::Capsule { start, end, radius } => {
                let start = position + orientation * start;
                let end = position + orientation * end;
                let padding = Vec3::splat(radius.abs());
                Some(AABB::new(start.min(end) - padding, start.max(end) + padding))
            }
        }
    }
}

/// Anything the octree can index.
///
/// # Example
///
/// ```
/// use galaxy_3d_spatial::galaxy3d::octree::{Locatable, CollisionModel};
/// use galaxy_3d_spatial::glam::Vec3;
///
/// struct Crate {
///     id: u32,
///     position: Vec3,
/// }
///
/// impl Locatable for Crate {
///     type Id = u32;
///     fn id(&self) -> u32 { self.id }
///     fn world_position(&self) -> Vec3 { self.position }
///     fn collision_model(&self) -> Option<CollisionModel> {
///         Some(CollisionModel::cube(0.5))
///     }
/// }
/// ```
pub trait Locatable {
    /// Stable identity of the element
    type Id: ElementId;

    fn id(&self) -> Self::Id;

    /// Current world position
    fn world_position(&self) -> Vec3;

    /// Current world orientation, used to orient capsule models
    fn world_orientation(&self) -> Quat {
        Quat::IDENTITY
    }

    /// Bounding volume descriptor, `None` for pure points
    fn collision_model(&self) -> Option<CollisionModel> {
        None
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
