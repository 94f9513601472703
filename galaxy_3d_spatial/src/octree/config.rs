//! Octree configuration, fixed at root construction and shared by
//! every sector of the tree.

/// Default subdivision threshold, also the lowest accepted value.
pub const DEFAULT_SECTOR_ELEMENT_LIMIT: usize = 8;

/// Hard depth cap. A sector at this distance from the root stays an
/// overfull leaf instead of subdividing, which bounds the recursion
/// when many elements share the same position.
pub const MAX_DEPTH: u32 = 16;

/// Octree configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OctreeConfig {
    /// A leaf holding more elements than this subdivides (clamped to >= 8)
    pub max_elements_per_sector: usize,
    /// Collapse children once a sector holds fewer than half the threshold
    pub auto_collapse: bool,
}

impl OctreeConfig {
    pub fn new(max_elements_per_sector: usize, auto_collapse: bool) -> Self {
        Self {
            max_elements_per_sector,
            auto_collapse,
        }
    }

    pub fn with_max_elements_per_sector(mut self, max_elements_per_sector: usize) -> Self {
        self.max_elements_per_sector = max_elements_per_sector;
        self
    }

    pub fn with_auto_collapse(mut self, auto_collapse: bool) -> Self {
        self.auto_collapse = auto_collapse;
        self
    }

    /// Copy with the threshold raised to the minimum where needed.
    pub fn clamped(self) -> Self {
        Self {
            max_elements_per_sector: self.max_elements_per_sector.max(DEFAULT_SECTOR_ELEMENT_LIMIT),
            ..self
        }
    }

    /// Element count under which an expanded sector collapses.
    pub fn collapse_threshold(&self) -> usize {
        self.max_elements_per_sector / 2
    }
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self {
            max_elements_per_sector: DEFAULT_SECTOR_ELEMENT_LIMIT,
            auto_collapse: false,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
