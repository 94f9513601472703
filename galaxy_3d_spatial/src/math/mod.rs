//! Math module - geometric primitives tested against octree sectors.
//!
//! Every query primitive implements `SectorPrimitive`, the
//! `intersects_aabb` test the octree needs to prune its branches, and
//! optionally a 3-way `classify_aabb` (only `Frustum` refines it).

mod aabb;
mod frustum;
mod primitive;
mod sphere;

pub use aabb::AABB;
pub use frustum::{
    Frustum, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use primitive::SectorPrimitive;
pub use sphere::Sphere;
