/// Octree: adaptive, all-levels spatial index.
///
/// Every element is registered in each sector its placement touches, from
/// the root down to the leaves. A sector with an empty element set is
/// therefore guaranteed to have empty descendants, which lets traversals
/// prune whole branches without descending.
///
/// Sectors subdivide once they hold more than `max_elements_per_sector`
/// elements (up to `MAX_DEPTH` levels), and optionally merge their children
/// back when they drop under half of that threshold.
///
/// The placement primitive (point or volume) is chosen at compile time
/// through the `M: PlacementMode` parameter:
/// - `RenderingOctree<K>`: elements are points, routed into exactly one
///   child per level
/// - `PhysicsOctree<K>`: elements with a collision model use their world
///   AABB and may span several sectors

use std::fmt;
use std::marker::PhantomData;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use crate::error::{Error, Result};
use crate::math::AABB;
use super::config::{OctreeConfig, MAX_DEPTH};
use super::element::{ElementId, Locatable};
use super::placement::{Placement, PlacementMode, PointPlacement, VolumePlacement};
use super::sector::{Sector, SectorKey, SectorView};
use super::slot::{octant_bounds, SECTOR_DIVISION};

pub(super) const SOURCE: &str = "galaxy3d::Octree";

/// Octree indexing element positions (frustum culling).
pub type RenderingOctree<K> = Octree<K, PointPlacement>;

/// Octree indexing element volumes (physics broad phase).
pub type PhysicsOctree<K> = Octree<K, VolumePlacement>;

/// Root of an octree and owner of all its sectors.
///
/// All mutating operations go through the root, so updating a sector in
/// isolation cannot be expressed.
pub struct Octree<K, M = PointPlacement> {
    /// Sector arena, children are freed together with their parent
    pub(super) sectors: SlotMap<SectorKey, Sector<K>>,
    /// Root sector key (replaced by `clear` and `rebuild`)
    pub(super) root: SectorKey,
    /// Last placement of every registered element
    pub(super) placements: FxHashMap<K, Placement>,
    /// Effective configuration (threshold already clamped)
    pub(super) config: OctreeConfig,
    mode: PhantomData<fn() -> M>,
}

impl<K: ElementId, M: PlacementMode> Octree<K, M> {
    /// Create an octree covering `bounds`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidBounds` when `bounds` is not a finite, non-degenerate cube.
    pub fn new(bounds: AABB, config: OctreeConfig) -> Result<Self> {
        validate_bounds(&bounds)?;

        let mut sectors = SlotMap::with_key();
        let root = sectors.insert(Sector::root(bounds));

        Ok(Self {
            sectors,
            root,
            placements: FxHashMap::default(),
            config: config.clamped(),
            mode: PhantomData,
        })
    }

    /// Create an octree with the default configuration.
    pub fn with_defaults(bounds: AABB) -> Result<Self> {
        Self::new(bounds, OctreeConfig::default())
    }

    // ===== ELEMENTS =====

    /// Register an element.
    ///
    /// Returns `false` when the element lies outside the root volume or is
    /// already registered.
    pub fn insert<E: Locatable<Id = K> + ?Sized>(&mut self, element: &E) -> bool {
        self.insert_placement(element.id(), M::placement(element))
    }

    /// Move an element to its current placement.
    ///
    /// Sectors the element left lose it (with their whole subtree), sectors
    /// it entered gain it. An element that left the root volume stays
    /// registered at the root, so it comes back on a later update without
    /// a new insert; `false` is returned while it is outside.
    ///
    /// An unregistered element is inserted.
    pub fn update<E: Locatable<Id = K> + ?Sized>(&mut self, element: &E) -> bool {
        let id = element.id();
        let placement = M::placement(element);

        let Some(previous) = self.placements.get(&id).copied() else {
            return self.insert_placement(id, placement);
        };

        // A point that stays in the same deepest sector touches exactly the same path
        if let (Placement::Point(old), Placement::Point(new)) = (previous, placement) {
            let bounds = self.bounds();
            if bounds.contains_point(old)
                && bounds.contains_point(new)
                && self.deepest_key_for_position(old) == self.deepest_key_for_position(new)
            {
                self.placements.insert(id, placement);
                return true;
            }
        }

        self.placements.insert(id, placement);
        self.check_overlap(self.root, id, &placement)
    }

    /// `update` for registered elements, `insert` otherwise.
    pub fn update_or_insert<E: Locatable<Id = K> + ?Sized>(&mut self, element: &E) -> bool {
        if self.contains(element.id()) {
            self.update(element)
        } else {
            self.insert(element)
        }
    }

    /// Remove an element from every sector.
    ///
    /// Erasing an unknown element is a no-op that logs a warning.
    pub fn erase(&mut self, id: K) -> bool {
        if !self.erase_at(self.root, id) {
            crate::spatial_warn!(SOURCE, "Element {:?} is not part of the octree", id);
            return false;
        }
        self.placements.remove(&id);
        true
    }

    pub fn contains(&self, id: K) -> bool {
        self.sectors[self.root].elements.contains(&id)
    }

    pub fn element_count(&self) -> usize {
        self.sectors[self.root].elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors[self.root].elements.is_empty()
    }

    /// Placement recorded at the last insert/update of `id`.
    pub fn placement_of(&self, id: K) -> Option<Placement> {
        self.placements.get(&id).copied()
    }

    // ===== STRUCTURE =====

    /// Pre-subdivide every leaf down to `depth` levels below the root.
    ///
    /// Already expanded sectors are kept as they are. Sectors at
    /// `MAX_DEPTH` are never expanded.
    ///
    /// # Errors
    ///
    /// `Error::ReserveWithAutoCollapse` when auto-collapse is enabled. The
    /// tree is left untouched.
    pub fn reserve(&mut self, depth: u32) -> Result<()> {
        if self.config.auto_collapse {
            crate::spatial_warn!(
                SOURCE,
                "reserve({}) rejected: auto-collapse would drop the reserved sectors",
                depth
            );
            return Err(Error::ReserveWithAutoCollapse);
        }
        self.reserve_at(self.root, depth);
        Ok(())
    }

    /// Drop every element and every sector but a new root leaf.
    pub fn clear(&mut self) {
        let bounds = self.bounds();
        self.sectors.clear();
        self.placements.clear();
        self.root = self.sectors.insert(Sector::root(bounds));
    }

    /// Replace the root volume, keeping the configuration.
    ///
    /// With `keep_elements`, every element is registered again from its
    /// last placement. Elements outside the new volume are dropped.
    pub fn rebuild(&mut self, bounds: AABB, keep_elements: bool) -> Result<()> {
        validate_bounds(&bounds)?;

        let placements = std::mem::take(&mut self.placements);
        self.sectors.clear();
        self.root = self.sectors.insert(Sector::root(bounds));

        if keep_elements {
            let mut dropped = 0usize;
            for (id, placement) in placements {
                if !self.insert_placement(id, placement) {
                    dropped += 1;
                }
            }
            if dropped > 0 {
                crate::spatial_info!(
                    SOURCE,
                    "Rebuild dropped {} element(s) outside of the new bounds",
                    dropped
                );
            }
        }
        Ok(())
    }

    // ===== INTROSPECTION =====

    pub fn root(&self) -> SectorView<'_, K, M> {
        SectorView::new(self, self.root)
    }

    /// View of a sector, `None` for a stale key.
    pub fn sector(&self, key: SectorKey) -> Option<SectorView<'_, K, M>> {
        self.sectors
            .contains_key(key)
            .then(|| SectorView::new(self, key))
    }

    pub fn config(&self) -> &OctreeConfig {
        &self.config
    }

    pub fn bounds(&self) -> AABB {
        self.sectors[self.root].bounds
    }

    /// Number of live sectors, root included.
    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    /// Deepest subdivision level (0 while the root is a leaf).
    pub fn depth(&self) -> u32 {
        self.root().subtree_depth()
    }

    // ===== INTERNAL =====

    fn insert_placement(&mut self, id: K, placement: Placement) -> bool {
        if self.placements.contains_key(&id) || !placement.touches_root(&self.bounds()) {
            return false;
        }
        // Recorded first: expansion redistributes from this registry
        self.placements.insert(id, placement);
        self.insert_at(self.root, id, &placement)
    }

    fn touches(&self, key: SectorKey, placement: &Placement) -> bool {
        let sector = &self.sectors[key];
        match (sector.parent, sector.slot) {
            (Some(parent), Some(slot)) => {
                placement.touches_octant(&self.sectors[parent].bounds, slot, &sector.bounds)
            }
            _ => placement.touches_root(&sector.bounds),
        }
    }

    fn insert_at(&mut self, key: SectorKey, id: K, placement: &Placement) -> bool {
        if !self.touches(key, placement) {
            return false;
        }
        if !self.sectors[key].elements.insert(id) {
            return false;
        }
        if let Some(children) = self.subdivide_if_needed(key) {
            for child in children {
                self.insert_at(child, id, placement);
            }
        }
        true
    }

    fn erase_at(&mut self, key: SectorKey, id: K) -> bool {
        let Some(sector) = self.sectors.get_mut(key) else {
            return false;
        };
        if !sector.elements.remove(&id) {
            return false;
        }
        let children = if self.config.auto_collapse {
            self.collapse_if_needed(key)
        } else {
            self.sectors[key].children
        };
        if let Some(children) = children {
            for child in children {
                self.erase_at(child, id);
            }
        }
        true
    }

    fn check_overlap(&mut self, key: SectorKey, id: K, placement: &Placement) -> bool {
        if !self.touches(key, placement) {
            if key == self.root {
                // Lost element: kept at the root only
                if let Some(children) = self.sectors[key].children {
                    for child in children {
                        self.erase_at(child, id);
                    }
                }
            } else {
                self.erase_at(key, id);
            }
            return false;
        }

        if !self.sectors[key].elements.contains(&id) {
            return self.insert_at(key, id, placement);
        }

        if let Some(children) = self.sectors[key].children {
            for child in children {
                self.check_overlap(child, id, placement);
            }
        }
        true
    }

    /// Children to descend into after an insertion, expanding a full leaf.
    fn subdivide_if_needed(&mut self, key: SectorKey) -> Option<[SectorKey; SECTOR_DIVISION]> {
        let sector = &self.sectors[key];
        if sector.children.is_some() {
            return sector.children;
        }

        let count = sector.elements.len();
        let limit = self.config.max_elements_per_sector;
        if count <= limit {
            return None;
        }
        if sector.distance >= MAX_DEPTH {
            if count == limit + 1 {
                crate::spatial_debug!(
                    SOURCE,
                    "Sector {:?} reached depth {} with {} elements, not subdivided",
                    key,
                    sector.distance,
                    count
                );
            }
            return None;
        }
        Some(self.expand(key))
    }

    /// Children to descend into after a removal, collapsing a sparse sector.
    fn collapse_if_needed(&mut self, key: SectorKey) -> Option<[SectorKey; SECTOR_DIVISION]> {
        let sector = &self.sectors[key];
        let children = sector.children?;
        if sector.elements.len() < self.config.collapse_threshold() {
            self.collapse(key);
            return None;
        }
        Some(children)
    }

    fn expand(&mut self, key: SectorKey) -> [SectorKey; SECTOR_DIVISION] {
        let (bounds, distance) = {
            let sector = &self.sectors[key];
            (sector.bounds, sector.distance)
        };

        let sectors = &mut self.sectors;
        let children: [SectorKey; SECTOR_DIVISION] = std::array::from_fn(|slot| {
            let slot = slot as u8;
            sectors.insert(Sector::child(octant_bounds(&bounds, slot), key, slot, distance + 1))
        });
        self.sectors[key].children = Some(children);

        // Snapshot: children insertion may expand again
        let ids: Vec<K> = self.sectors[key].elements.iter().copied().collect();
        crate::spatial_trace!(
            SOURCE,
            "Expanding sector {:?} at depth {} ({} elements)",
            key,
            distance,
            ids.len()
        );

        for id in ids {
            let Some(placement) = self.placements.get(&id).copied() else {
                continue;
            };
            for child in children {
                self.insert_at(child, id, &placement);
            }
        }
        children
    }

    fn collapse(&mut self, key: SectorKey) {
        if let Some(children) = self.sectors[key].children.take() {
            crate::spatial_trace!(
                SOURCE,
                "Collapsing sector {:?} ({} elements)",
                key,
                self.sectors[key].elements.len()
            );
            for child in children {
                self.free_subtree(child);
            }
        }
    }

    fn free_subtree(&mut self, key: SectorKey) {
        if let Some(sector) = self.sectors.remove(key) {
            if let Some(children) = sector.children {
                for child in children {
                    self.free_subtree(child);
                }
            }
        }
    }

    fn reserve_at(&mut self, key: SectorKey, depth: u32) {
        if depth == 0 {
            return;
        }
        let (children, distance) = {
            let sector = &self.sectors[key];
            (sector.children, sector.distance)
        };
        let children = match children {
            Some(children) => children,
            None if distance < MAX_DEPTH => self.expand(key),
            None => return,
        };
        for child in children {
            self.reserve_at(child, depth - 1);
        }
    }
}

impl<K: ElementId, M: PlacementMode> fmt::Debug for Octree<K, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Octree")
            .field("bounds", &self.bounds())
            .field("config", &self.config)
            .field("volumetric", &M::VOLUMETRIC)
            .field("elements", &self.element_count())
            .field("sectors", &self.sector_count())
            .finish()
    }
}

fn validate_bounds(bounds: &AABB) -> Result<()> {
    if !bounds.is_valid() {
        crate::spatial_error!(SOURCE, "Rejected octree bounds {:?}: not finite or min > max", bounds);
        return Err(Error::InvalidBounds(format!(
            "{:?}: corners must be finite with min <= max",
            bounds
        )));
    }
    if !bounds.is_cube() {
        crate::spatial_error!(SOURCE, "Rejected octree bounds {:?}: not a cube", bounds);
        return Err(Error::InvalidBounds(format!(
            "{:?}: edges must have the same non-zero length",
            bounds
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "octree_tests.rs"]
mod tests;
