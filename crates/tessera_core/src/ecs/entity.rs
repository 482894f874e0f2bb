//! # Entity Ids and Component Masks
//!
//! Entities are bare 32-bit indices. There is no generation counter: once an
//! id is destroyed and recycled, an old copy of it refers to the new entity.
//! Callers that keep ids across frames must drop them when they destroy the
//! entity.

use std::fmt;

/// Width of a [`ComponentMask`], and the hard cap on component types.
pub const MAX_COMPONENT_TYPES: usize = u64::BITS as usize;

/// Unique identifier for a live entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct EntityId(u32);

impl EntityId {
    /// Null/invalid entity ID. Never returned by entity creation.
    pub const NULL: Self = Self(u32::MAX);

    /// Wraps a raw index.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw index.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the id as an index into per-entity arrays.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Checks if this entity ID is null/invalid.
    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == u32::MAX
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("null")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Bitset of attached component types, one bit per registered type index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ComponentMask(u64);

impl ComponentMask {
    /// Mask with no components.
    pub const EMPTY: Self = Self(0);

    /// Checks if the bit for `index` is set.
    #[inline]
    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        index < MAX_COMPONENT_TYPES && (self.0 & (1 << index)) != 0
    }

    /// Sets the bit for `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`MAX_COMPONENT_TYPES`].
    #[inline]
    pub fn insert(&mut self, index: usize) {
        assert!(index < MAX_COMPONENT_TYPES, "component index {index} out of range");
        self.0 |= 1 << index;
    }

    /// Clears the bit for `index`.
    #[inline]
    pub fn remove(&mut self, index: usize) {
        if index < MAX_COMPONENT_TYPES {
            self.0 &= !(1 << index);
        }
    }

    /// Returns true if no bit is set.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of set bits.
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates over the indices of set bits, lowest first.
    #[inline]
    pub fn iter(self) -> MaskIter {
        MaskIter(self.0)
    }
}

/// Iterator over the set bits of a [`ComponentMask`].
#[derive(Clone, Debug)]
pub struct MaskIter(u64);

impl Iterator for MaskIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as usize;
        // Clear the lowest set bit.
        self.0 &= self.0 - 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.0.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MaskIter {}
