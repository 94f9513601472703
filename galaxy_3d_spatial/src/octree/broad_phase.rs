/// Broad-phase pair gathering for physics octrees.
///
/// Two elements are candidates when they share at least one leaf. The
/// narrow phase decides whether their shapes really collide.

use rustc_hash::FxHashSet;
use crate::math::SectorPrimitive;
use super::element::ElementId;
use super::octree::Octree;
use super::placement::PlacementMode;

impl<K: ElementId, M: PlacementMode> Octree<K, M> {
    /// Unordered pairs of distinct elements sharing a leaf, each reported once.
    ///
    /// Elements left outside the root volume are skipped, even while the
    /// root is still the leaf holding them.
    pub fn candidate_pairs(&self) -> Vec<(K, K)> {
        let mut tested: FxHashSet<(K, K)> = FxHashSet::default();
        let mut pairs = Vec::new();
        let mut ids: Vec<K> = Vec::new();

        self.for_leaf_sectors(|sector| {
            let bounds = sector.bounds();
            ids.clear();
            ids.extend(sector.elements().copied().filter(|id| {
                self.placements
                    .get(id)
                    .is_some_and(|placement| placement.intersects_aabb(&bounds))
            }));
            for (i, &a) in ids.iter().enumerate() {
                for &b in &ids[i + 1..] {
                    if tested.contains(&(b, a)) || !tested.insert((a, b)) {
                        continue;
                    }
                    pairs.push((a, b));
                }
            }
        });
        pairs
    }

    /// Candidate pairs whose recorded placements overlap.
    pub fn overlapping_pairs(&self) -> Vec<(K, K)> {
        self.candidate_pairs()
            .into_iter()
            .filter(|(a, b)| match (self.placements.get(a), self.placements.get(b)) {
                (Some(pa), Some(pb)) => pa.aabb().intersects(&pb.aabb()),
                _ => false,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "broad_phase_tests.rs"]
mod tests;
