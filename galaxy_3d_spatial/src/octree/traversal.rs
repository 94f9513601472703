/// Primitive-driven traversals and point descent.
///
/// Traversals prune a branch as soon as its sector is empty or missed by
/// the primitive, so their cost depends on the sectors actually touched,
/// not on the size of the tree. Once a primitive reports a sector as
/// fully inside, the subtree below it is walked without further tests.

use glam::Vec3;
use rustc_hash::FxHashSet;
use crate::math::{FrustumTest, SectorPrimitive};
use super::element::ElementId;
use super::octree::Octree;
use super::placement::PlacementMode;
use super::sector::{SectorKey, SectorView};
use super::slot::compute_slot_for_position;

impl<'a, K: ElementId, M: PlacementMode> SectorView<'a, K, M> {
    /// Visit every non-empty leaf of this subtree touched by `primitive`.
    pub fn for_touched_sector<P, F>(&self, primitive: &P, mut visitor: F)
    where
        P: SectorPrimitive + ?Sized,
        F: FnMut(SectorView<'a, K, M>),
    {
        self.visit_touched(primitive, &mut visitor);
    }

    /// Visit every non-empty leaf of this subtree.
    pub fn for_leaf_sectors<F>(&self, mut visitor: F)
    where
        F: FnMut(SectorView<'a, K, M>),
    {
        self.visit_leaves(&mut visitor);
    }

    fn visit_touched<P, F>(&self, primitive: &P, visitor: &mut F)
    where
        P: SectorPrimitive + ?Sized,
        F: FnMut(SectorView<'a, K, M>),
    {
        if self.is_empty() {
            return;
        }
        match primitive.classify_aabb(&self.bounds()) {
            FrustumTest::Outside => {}
            FrustumTest::Inside => self.visit_leaves(visitor),
            FrustumTest::Partial => match self.children() {
                None => visitor(*self),
                Some(children) => {
                    for child in children {
                        child.visit_touched(primitive, visitor);
                    }
                }
            },
        }
    }

    fn visit_leaves<F>(&self, visitor: &mut F)
    where
        F: FnMut(SectorView<'a, K, M>),
    {
        if self.is_empty() {
            return;
        }
        match self.children() {
            None => visitor(*self),
            Some(children) => {
                for child in children {
                    child.visit_leaves(visitor);
                }
            }
        }
    }
}

impl<K: ElementId, M: PlacementMode> Octree<K, M> {
    /// Visit every non-empty leaf touched by `primitive`.
    ///
    /// Used for frustum culling (`Frustum`) and for broad-phase gathering
    /// around a body (`AABB`, `Sphere`).
    pub fn for_touched_sector<'a, P, F>(&'a self, primitive: &P, visitor: F)
    where
        P: SectorPrimitive + ?Sized,
        F: FnMut(SectorView<'a, K, M>),
    {
        self.root().for_touched_sector(primitive, visitor);
    }

    /// Visit every non-empty leaf.
    pub fn for_leaf_sectors<'a, F>(&'a self, visitor: F)
    where
        F: FnMut(SectorView<'a, K, M>),
    {
        self.root().for_leaf_sectors(visitor);
    }

    /// Collect the elements whose placement intersects `primitive`.
    ///
    /// Each element is pushed once, even when it spans several leaves.
    /// `results` is appended to, not cleared.
    pub fn query<P>(&self, primitive: &P, results: &mut Vec<K>)
    where
        P: SectorPrimitive + ?Sized,
    {
        let mut seen = FxHashSet::default();
        self.for_touched_sector(primitive, |sector| {
            for &id in sector.elements() {
                if !seen.insert(id) {
                    continue;
                }
                let hit = self
                    .placements
                    .get(&id)
                    .is_some_and(|placement| primitive.intersects_aabb(&placement.aabb()));
                if hit {
                    results.push(id);
                }
            }
        });
    }

    /// Deepest sector reached by slot descent from the root.
    ///
    /// `None` when `position` is outside the root volume.
    pub fn deepest_sector_for_position(&self, position: Vec3) -> Option<SectorView<'_, K, M>> {
        if !self.bounds().contains_point(position) {
            return None;
        }
        Some(SectorView::new(self, self.deepest_key_for_position(position)))
    }

    /// Smallest sector holding every registration of `id`.
    ///
    /// For a point this is the leaf at the end of its path. A volume
    /// spanning several children stops at their common parent.
    pub fn deepest_sector_of(&self, id: K) -> Option<SectorView<'_, K, M>> {
        if !self.contains(id) {
            return None;
        }
        let mut key = self.root;
        while let Some(children) = self.sectors[key].children {
            let mut holders = children
                .into_iter()
                .filter(|&child| self.sectors[child].elements.contains(&id));
            match (holders.next(), holders.next()) {
                (Some(only), None) => key = only,
                _ => break,
            }
        }
        Some(SectorView::new(self, key))
    }

    pub(super) fn deepest_key_for_position(&self, position: Vec3) -> SectorKey {
        let mut key = self.root;
        while let Some(children) = self.sectors[key].children {
            let slot = compute_slot_for_position(position, self.sectors[key].bounds.center());
            key = children[slot as usize];
        }
        key
    }
}
