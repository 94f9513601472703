/// Octant arithmetic shared by placement, expansion and neighbor lookup.
///
/// Slot bit layout (3 bits): bit 2 = X, bit 1 = Y, bit 0 = Z.
/// A cleared bit selects the positive half of the axis, a set bit the
/// negative half. Slot 0 is therefore the (+X, +Y, +Z) octant and slot 7
/// the (-X, -Y, -Z) octant.

use glam::Vec3;
use crate::math::AABB;

/// Number of children of an expanded sector.
pub const SECTOR_DIVISION: usize = 8;

pub const X_POS_Y_POS_Z_POS: u8 = 0;
pub const X_POS_Y_POS_Z_NEG: u8 = 1;
pub const X_POS_Y_NEG_Z_POS: u8 = 2;
pub const X_POS_Y_NEG_Z_NEG: u8 = 3;
pub const X_NEG_Y_POS_Z_POS: u8 = 4;
pub const X_NEG_Y_POS_Z_NEG: u8 = 5;
pub const X_NEG_Y_NEG_Z_POS: u8 = 6;
pub const X_NEG_Y_NEG_Z_NEG: u8 = 7;

/// World axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Bit of this axis inside a slot index.
    pub const fn slot_bit(self) -> u8 {
        match self {
            Axis::X => 4,
            Axis::Y => 2,
            Axis::Z => 1,
        }
    }

    /// Component index in a `Vec3`.
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Whether `slot` lies in the negative half of `axis`.
#[inline]
pub fn is_negative_half(slot: u8, axis: Axis) -> bool {
    slot & axis.slot_bit() != 0
}

/// Child slot containing `position` relative to the parent `center`.
///
/// Coordinates exactly equal to the center route to the positive half.
#[inline]
pub fn compute_slot_for_position(position: Vec3, center: Vec3) -> u8 {
    let mut slot = 0;
    if position.x < center.x {
        slot |= Axis::X.slot_bit();
    }
    if position.y < center.y {
        slot |= Axis::Y.slot_bit();
    }
    if position.z < center.z {
        slot |= Axis::Z.slot_bit();
    }
    slot
}

/// Bounds of octant `slot` of `parent`, split at the parent center.
pub fn octant_bounds(parent: &AABB, slot: u8) -> AABB {
    let center = parent.center();
    let mut min = center;
    let mut max = center;
    for axis in Axis::ALL {
        let i = axis.index();
        if is_negative_half(slot, axis) {
            min[i] = parent.min[i];
        } else {
            max[i] = parent.max[i];
        }
    }
    AABB { min, max }
}

#[cfg(test)]
#[path = "slot_tests.rs"]
mod tests;
