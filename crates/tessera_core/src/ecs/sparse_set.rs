//! # Sparse Set
//!
//! Per-component storage keyed by [`EntityId`].
//!
//! Two layers:
//! - **Sparse**: paged `entity id -> dense position` index. Pages are
//!   allocated on first write within their range, so a handful of entities
//!   with huge ids costs a few pages, not one giant array.
//! - **Dense**: the values packed contiguously, with a parallel array naming
//!   the entity that owns each slot.
//!
//! Removal swaps the last dense slot into the hole, so dense order is NOT
//! insertion order and changes whenever something is removed.

use super::entity::EntityId;
use crate::config::DEFAULT_PAGE_SIZE;

/// Sparse-layer entry meaning "no dense slot".
const TOMBSTONE: usize = usize::MAX;

/// Lazy sequence of the entity ids stored in a pool, in dense order.
pub type Entities<'a> = std::iter::Copied<std::slice::Iter<'a, EntityId>>;

/// Paged sparse layer.
#[derive(Clone, Debug)]
pub(crate) struct SparsePages {
    pages: Vec<Option<Box<[usize]>>>,
    page_size: usize,
}

impl SparsePages {
    fn new(page_size: usize) -> Self {
        Self {
            pages: Vec::new(),
            page_size,
        }
    }

    #[inline]
    fn locate(&self, id: EntityId) -> (usize, usize) {
        let index = id.index();
        (index / self.page_size, index % self.page_size)
    }

    /// Dense position of `id`, if it has one.
    #[inline]
    pub(crate) fn get(&self, id: EntityId) -> Option<usize> {
        let (page, slot) = self.locate(id);
        match self.pages.get(page) {
            Some(Some(entries)) if entries[slot] != TOMBSTONE => Some(entries[slot]),
            _ => None,
        }
    }

    fn set(&mut self, id: EntityId, position: usize) {
        let (page, slot) = self.locate(id);
        if page >= self.pages.len() {
            self.pages.resize_with(page + 1, || None);
        }
        let page_size = self.page_size;
        let entries = self.pages[page]
            .get_or_insert_with(|| vec![TOMBSTONE; page_size].into_boxed_slice());
        entries[slot] = position;
    }

    fn reset(&mut self, id: EntityId) {
        let (page, slot) = self.locate(id);
        if let Some(Some(entries)) = self.pages.get_mut(page) {
            entries[slot] = TOMBSTONE;
        }
    }

    fn clear(&mut self) {
        self.pages.clear();
    }

    fn allocated(&self) -> usize {
        self.pages.iter().filter(|page| page.is_some()).count()
    }
}

/// Sparse-set storage for a single component type.
///
/// This storage guarantees:
/// - O(1) insert, lookup, and removal by entity id
/// - Cache-friendly iteration over a contiguous value array
/// - A bijection between stored ids and dense positions
///
/// # Example
///
/// ```rust
/// use tessera_core::{EntityId, SparseSet};
///
/// let mut set = SparseSet::new();
/// set.insert(EntityId::from_raw(3), "three");
/// assert_eq!(set.get(EntityId::from_raw(3)), Some(&"three"));
/// assert!(!set.contains(EntityId::from_raw(4)));
/// ```
#[derive(Clone, Debug)]
pub struct SparseSet<T> {
    sparse: SparsePages,
    entities: Vec<EntityId>,
    dense: Vec<T>,
}

impl<T> Default for SparseSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SparseSet<T> {
    /// Creates an empty set with the default page size.
    #[must_use]
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Creates an empty set whose sparse layer uses `page_size` slots per page.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        assert!(page_size > 0, "Page size must be greater than zero");
        Self {
            sparse: SparsePages::new(page_size),
            entities: Vec::new(),
            dense: Vec::new(),
        }
    }

    /// Returns the sparse-layer page size.
    #[inline]
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.sparse.page_size
    }

    /// Inserts or overwrites the value for `id`.
    ///
    /// Overwriting drops the previous value and keeps its dense slot.
    ///
    /// # Panics
    ///
    /// Panics if `id` is [`EntityId::NULL`].
    #[inline]
    pub fn insert(&mut self, id: EntityId, value: T) -> &mut T {
        self.insert_with(id, || value)
    }

    /// Like [`SparseSet::insert`], building the value only once it is stored.
    ///
    /// # Panics
    ///
    /// Panics if `id` is [`EntityId::NULL`].
    pub fn insert_with(&mut self, id: EntityId, make: impl FnOnce() -> T) -> &mut T {
        assert!(!id.is_null(), "the null entity cannot own a component");
        if let Some(position) = self.sparse.get(id) {
            let slot = &mut self.dense[position];
            *slot = make();
            return slot;
        }

        let value = make();
        let position = self.dense.len();
        self.sparse.set(id, position);
        self.entities.push(id);
        self.dense.push(value);
        &mut self.dense[position]
    }

    /// Gets the value for `id`.
    #[inline]
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.sparse.get(id).map(|position| &self.dense[position])
    }

    /// Gets the value for `id` mutably.
    #[inline]
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.sparse.get(id).map(|position| &mut self.dense[position])
    }

    /// Removes and returns the value for `id`. No-op if absent.
    ///
    /// The last dense entry is moved into the freed slot.
    pub fn remove(&mut self, id: EntityId) -> Option<T> {
        let position = self.sparse.get(id)?;
        let last = self.dense.len() - 1;

        self.entities.swap_remove(position);
        let value = self.dense.swap_remove(position);
        if position != last {
            let moved = self.entities[position];
            self.sparse.set(moved, position);
        }
        self.sparse.reset(id);

        Some(value)
    }

    /// Checks if `id` has a value.
    #[inline]
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.sparse.get(id).is_some()
    }

    /// Number of stored values.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    /// Returns true if nothing is stored.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// Drops every value and every sparse page.
    pub fn clear(&mut self) {
        self.sparse.clear();
        self.entities.clear();
        self.dense.clear();
    }

    /// Iterates over the stored ids in dense order.
    #[inline]
    pub fn entities(&self) -> Entities<'_> {
        self.entities.iter().copied()
    }

    /// Iterates over `(id, &value)` pairs in dense order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (EntityId, &T)> + '_ {
        self.entities.iter().copied().zip(self.dense.iter())
    }

    /// Iterates over `(id, &mut value)` pairs in dense order.
    pub fn iter_mut(&mut self) -> impl ExactSizeIterator<Item = (EntityId, &mut T)> + '_ {
        self.entities.iter().copied().zip(self.dense.iter_mut())
    }

    /// Returns the dense value array.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.dense
    }

    /// Number of sparse pages currently allocated.
    #[must_use]
    pub fn allocated_pages(&self) -> usize {
        self.sparse.allocated()
    }

    /// Splits into the sparse index, the id array, and the mutable values,
    /// so a view can walk one pool's ids while writing into its values.
    #[inline]
    pub(crate) fn split_mut(&mut self) -> (&SparsePages, &[EntityId], &mut [T]) {
        (&self.sparse, &self.entities, &mut self.dense)
    }
}
