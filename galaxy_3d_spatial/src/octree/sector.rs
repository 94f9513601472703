/// Sector storage and the read-only sector handle.
///
/// Sectors live in the octree's slotmap arena. A child refers to its
/// parent through a plain `SectorKey` (non-owning), and the parent is the
/// only owner of its children: collapsing a sector removes the whole
/// subtree from the arena.

use std::fmt;
use rustc_hash::FxHashSet;
use slotmap::new_key_type;
use glam::Vec3;
use crate::math::AABB;
use super::element::ElementId;
use super::octree::Octree;
use super::placement::PlacementMode;
use super::slot::SECTOR_DIVISION;

new_key_type! {
    /// Stable handle of a sector inside its octree.
    ///
    /// A key becomes stale once its sector is collapsed away.
    pub struct SectorKey;
}

/// One node of the octree.
pub(crate) struct Sector<K> {
    /// Cubic volume owned by this sector
    pub(crate) bounds: AABB,
    /// `None` exactly for the root
    pub(crate) parent: Option<SectorKey>,
    /// Octant index inside the parent, `None` for the root
    pub(crate) slot: Option<u8>,
    /// Either all eight children or none
    pub(crate) children: Option<[SectorKey; SECTOR_DIVISION]>,
    /// Elements registered at this level (a superset of every child's set)
    pub(crate) elements: FxHashSet<K>,
    /// Levels between this sector and the root
    pub(crate) distance: u32,
}

impl<K> Sector<K> {
    pub(crate) fn root(bounds: AABB) -> Self {
        Self {
            bounds,
            parent: None,
            slot: None,
            children: None,
            elements: FxHashSet::default(),
            distance: 0,
        }
    }

    pub(crate) fn child(bounds: AABB, parent: SectorKey, slot: u8, distance: u32) -> Self {
        Self {
            bounds,
            parent: Some(parent),
            slot: Some(slot),
            children: None,
            elements: FxHashSet::default(),
            distance,
        }
    }
}

// ===== SECTOR VIEW =====

/// Borrowed, read-only view of one sector.
///
/// Handed to traversal visitors and returned by neighbor lookups. The
/// borrow on the octree guarantees no structural mutation happens while
/// a view is alive.
pub struct SectorView<'a, K, M> {
    pub(super) octree: &'a Octree<K, M>,
    pub(super) key: SectorKey,
}

impl<K, M> Clone for SectorView<'_, K, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, M> Copy for SectorView<'_, K, M> {}

impl<K, M> PartialEq for SectorView<'_, K, M> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.octree, other.octree) && self.key == other.key
    }
}

impl<K, M> Eq for SectorView<'_, K, M> {}

impl<'a, K: ElementId, M: PlacementMode> SectorView<'a, K, M> {
    pub(super) fn new(octree: &'a Octree<K, M>, key: SectorKey) -> Self {
        Self { octree, key }
    }

    fn sector(&self) -> &'a Sector<K> {
        &self.octree.sectors[self.key]
    }

    pub fn key(&self) -> SectorKey {
        self.key
    }

    pub fn bounds(&self) -> AABB {
        self.sector().bounds
    }

    pub fn center(&self) -> Vec3 {
        self.sector().bounds.center()
    }

    /// Octant index inside the parent (`None` for the root).
    pub fn slot(&self) -> Option<u8> {
        self.sector().slot
    }

    pub fn is_root(&self) -> bool {
        self.sector().parent.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.sector().children.is_none()
    }

    pub fn is_expanded(&self) -> bool {
        self.sector().children.is_some()
    }

    /// No element at this level, hence none in the whole subtree.
    pub fn is_empty(&self) -> bool {
        self.sector().elements.is_empty()
    }

    pub fn element_count(&self) -> usize {
        self.sector().elements.len()
    }

    /// Elements registered at this level, in no particular order.
    pub fn elements(&self) -> impl Iterator<Item = &'a K> {
        self.sector().elements.iter()
    }

    pub fn contains(&self, id: K) -> bool {
        self.sector().elements.contains(&id)
    }

    /// Levels between this sector and the root (0 for the root).
    pub fn depth(&self) -> u32 {
        self.sector().distance
    }

    /// Longest chain of subdivisions below this sector (0 for a leaf).
    pub fn subtree_depth(&self) -> u32 {
        match self.children() {
            None => 0,
            Some(children) => 1 + children.iter().map(|child| child.subtree_depth()).max().unwrap_or(0),
        }
    }

    /// This sector plus all of its descendants.
    pub fn sector_count(&self) -> usize {
        match self.children() {
            None => 1,
            Some(children) => 1 + children.iter().map(|child| child.sector_count()).sum::<usize>(),
        }
    }

    pub fn parent(&self) -> Option<SectorView<'a, K, M>> {
        self.sector().parent.map(|key| SectorView::new(self.octree, key))
    }

    pub fn root(&self) -> SectorView<'a, K, M> {
        self.octree.root()
    }

    pub fn children(&self) -> Option<[SectorView<'a, K, M>; SECTOR_DIVISION]> {
        let octree = self.octree;
        self.sector()
            .children
            .map(|keys| keys.map(|key| SectorView::new(octree, key)))
    }

    /// Child occupying octant `slot`, if this sector is expanded.
    pub fn child(&self, slot: u8) -> Option<SectorView<'a, K, M>> {
        let children = self.sector().children?;
        children
            .get(slot as usize)
            .map(|&key| SectorView::new(self.octree, key))
    }
}

impl<K: ElementId, M: PlacementMode> fmt::Debug for SectorView<'_, K, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectorView")
            .field("key", &self.key)
            .field("bounds", &self.bounds())
            .field("depth", &self.depth())
            .field("slot", &self.slot())
            .field("elements", &self.element_count())
            .field("leaf", &self.is_leaf())
            .finish()
    }
}
