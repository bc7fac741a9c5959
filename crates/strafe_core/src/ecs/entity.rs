//! Entity handle
//!
//! An entity is nothing more than a slot index into the world's tables; the
//! mask stored at that slot is its entire identity. Slots are recycled by
//! clearing the mask, so a handle to a destroyed entity simply stops
//! satisfying queries instead of dangling.

/// Index of one entity slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity(u32);

impl Entity {
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Slot index in the world's tables.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}
