/*!
# Galaxy 3D Spatial

Adaptive octree spatial index for the Galaxy 3D engine.

One generic octree serves two consumers:

- **Rendering**: `RenderingOctree<K>` indexes element positions and answers
  frustum queries for culling.
- **Physics**: `PhysicsOctree<K>` indexes element volumes (world AABB of the
  collision model) and produces broad-phase candidate pairs.

## Architecture

- **Octree**: root of the tree, owner of every sector (slotmap arena)
- **SectorView**: borrowed read-only handle for traversal and neighbor lookup
- **Locatable**: contract implemented by indexed elements
- **PlacementMode**: compile-time choice between point and volume placement
- **SectorPrimitive**: query primitives (point, AABB, sphere, frustum)

The octree is not thread-safe by itself; callers serialize access.
*/

// Internal modules
mod error;
mod diagnostics;
pub mod log;
pub mod math;
pub mod octree;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Process-wide logger
    pub use crate::diagnostics::Diagnostics;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: spatial_* macros are NOT re-exported here - they are internal only
    }

    // Geometry sub-module
    pub mod math {
        pub use crate::math::*;
    }

    // Octree sub-module
    pub mod octree {
        pub use crate::octree::*;
    }
}

// Re-export math library at crate root
pub use glam;
