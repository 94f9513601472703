/// Moore neighborhood lookup.
///
/// Neighbors are resolved on slot bits only: moving along an axis flips
/// that axis' bit. When the move leaves the parent, the parent's own
/// neighbor along the crossing axes (the "uncle") is resolved first and
/// the flipped slot is taken inside it. Cost is O(depth), no coordinate
/// comparison is involved.

use super::element::ElementId;
use super::octree::Octree;
use super::placement::PlacementMode;
use super::sector::{SectorKey, SectorView};
use super::slot::{is_negative_half, Axis};

impl<'a, K: ElementId, M: PlacementMode> SectorView<'a, K, M> {
    /// Sector of the same depth adjacent in direction `(dx, dy, dz)`.
    ///
    /// Only the sign of each component is used. Returns `None` at the edge
    /// of the root volume, or when the adjacent region is not subdivided
    /// down to this depth. `(0, 0, 0)` returns the sector itself.
    pub fn neighbor(&self, dx: i32, dy: i32, dz: i32) -> Option<SectorView<'a, K, M>> {
        let direction = [dx.signum(), dy.signum(), dz.signum()];
        self.octree
            .neighbor_key(self.key, direction)
            .map(|key| SectorView::new(self.octree, key))
    }

    /// Visit each existing neighbor among the 26 directions.
    pub fn for_surrounding_sectors<F>(&self, include_self: bool, mut visitor: F)
    where
        F: FnMut(SectorView<'a, K, M>),
    {
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    if dx == 0 && dy == 0 && dz == 0 {
                        if include_self {
                            visitor(*self);
                        }
                        continue;
                    }
                    if let Some(neighbor) = self.neighbor(dx, dy, dz) {
                        visitor(neighbor);
                    }
                }
            }
        }
    }

    pub fn surrounding_sectors(&self, include_self: bool) -> Vec<SectorView<'a, K, M>> {
        let mut sectors = Vec::with_capacity(27);
        self.for_surrounding_sectors(include_self, |sector| sectors.push(sector));
        sectors
    }

    /// Whether any face of this sector lies on a face of the root.
    pub fn is_touching_root_border(&self) -> bool {
        Axis::ALL.into_iter().any(|axis| {
            self.is_touching_root_border_on_axis(axis, true)
                || self.is_touching_root_border_on_axis(axis, false)
        })
    }

    /// Whether this sector touches the root face on the `negative` (or
    /// positive) side of `axis`.
    ///
    /// True for the root itself.
    pub fn is_touching_root_border_on_axis(&self, axis: Axis, negative: bool) -> bool {
        let mut current = *self;
        while let (Some(slot), Some(parent)) = (current.slot(), current.parent()) {
            if is_negative_half(slot, axis) != negative {
                return false;
            }
            current = parent;
        }
        true
    }
}

impl<K: ElementId, M: PlacementMode> Octree<K, M> {
    pub(super) fn neighbor_key(&self, key: SectorKey, direction: [i32; 3]) -> Option<SectorKey> {
        if direction == [0, 0, 0] {
            return Some(key);
        }

        let sector = &self.sectors[key];
        let (parent, slot) = match (sector.parent, sector.slot) {
            (Some(parent), Some(slot)) => (parent, slot),
            // The root has no neighbor
            _ => return None,
        };

        let mut target_slot = slot;
        let mut crossing = [0; 3];
        for axis in Axis::ALL {
            let step = direction[axis.index()];
            if step == 0 {
                continue;
            }
            target_slot ^= axis.slot_bit();
            // Moving toward the positive side from the positive half leaves the parent
            if (step > 0) != is_negative_half(slot, axis) {
                crossing[axis.index()] = step;
            }
        }

        let uncle = if crossing == [0, 0, 0] {
            parent
        } else {
            self.neighbor_key(parent, crossing)?
        };

        self.sectors[uncle]
            .children
            .map(|children| children[target_slot as usize])
    }
}

#[cfg(test)]
#[path = "neighbor_tests.rs"]
mod tests;
