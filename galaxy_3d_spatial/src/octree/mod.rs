//! Octree module
//!
//! Provides the adaptive octree, its read-only sector views, the element
//! contract and the point / volume placement strategies.

mod broad_phase;
mod config;
mod element;
mod neighbor;
mod octree;
mod placement;
mod sector;
mod slot;
mod traversal;

pub use config::{OctreeConfig, DEFAULT_SECTOR_ELEMENT_LIMIT, MAX_DEPTH};
pub use element::{CollisionModel, ElementId, Locatable};
pub use octree::{Octree, PhysicsOctree, RenderingOctree};
pub use placement::{Placement, PlacementMode, PointPlacement, VolumePlacement};
pub use sector::{SectorKey, SectorView};
pub use slot::{
    compute_slot_for_position, is_negative_half, octant_bounds, Axis, SECTOR_DIVISION,
    X_POS_Y_POS_Z_POS, X_POS_Y_POS_Z_NEG, X_POS_Y_NEG_Z_POS, X_POS_Y_NEG_Z_NEG,
    X_NEG_Y_POS_Z_POS, X_NEG_Y_POS_Z_NEG, X_NEG_Y_NEG_Z_POS, X_NEG_Y_NEG_Z_NEG,
};
