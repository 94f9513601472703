/// Frustum - six clipping planes for visibility culling.
///
/// Each plane is represented as a Vec4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing normal
/// - D is the signed distance
/// - A point P is inside the frustum if dot(plane, P_homogeneous) >= 0 for all planes
///
/// The renderer computes the frustum and hands it to the rendering octree,
/// which prunes every sector the frustum does not reach.

use glam::{Mat4, Vec3, Vec4};
use super::AABB;

/// Result of a 3-way frustum/AABB classification.
///
/// - `Outside` → skip the entire subtree
/// - `Inside` → every element below is visible without further testing
/// - `Partial` → keep descending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// AABB is entirely outside the frustum
    Outside,
    /// AABB is entirely inside the frustum
    Inside,
    /// AABB partially overlaps the frustum
    Partial,
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes for culling.
///
/// Works with both perspective and orthographic projections.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Gribb & Hartmann method, planes normalized so that (A, B, C) is a unit vector.
    /// Expects glam's `*_rh` projections, whose clip depth is [0, 1].
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row2 = vp.row(2);
        let row3 = vp.row(3);

        let mut planes = [
            row3 + row0, // left
            row3 - row0, // right
            row3 + row1, // bottom
            row3 - row1, // top
            row2,        // near: z_clip >= 0
            row3 - row2, // far
        ];

        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Corner of `aabb` furthest along `normal` (positive vertex).
    fn positive_vertex(normal: Vec3, aabb: &AABB) -> Vec3 {
        Vec3::select(normal.cmpge(Vec3::ZERO), aabb.max, aabb.min)
    }

    /// Corner of `aabb` furthest against `normal` (negative vertex).
    fn negative_vertex(normal: Vec3, aabb: &AABB) -> Vec3 {
        Vec3::select(normal.cmpge(Vec3::ZERO), aabb.min, aabb.max)
    }

    /// Test if an AABB intersects this frustum.
    ///
    /// Conservative: may return false positives near frustum edges,
    /// never false negatives.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        self.planes.iter().all(|plane| {
            let normal = plane.truncate();
            normal.dot(Self::positive_vertex(normal, aabb)) + plane.w >= 0.0
        })
    }

    /// Classify an AABB against the frustum (3-way test).
    pub fn classify_aabb(&self, aabb: &AABB) -> FrustumTest {
        let mut all_inside = true;

        for plane in &self.planes {
            let normal = plane.truncate();

            if normal.dot(Self::positive_vertex(normal, aabb)) + plane.w < 0.0 {
                return FrustumTest::Outside;
            }

            if normal.dot(Self::negative_vertex(normal, aabb)) + plane.w < 0.0 {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
