//! # Component Pools
//!
//! The type-erased face of a [`SparseSet`]. The registry keeps one boxed
//! [`Pool`] per component type and only needs these operations to destroy
//! entities, pick view drivers, and print diagnostics. Typed access goes back
//! through [`Any`], and only the registry performs that downcast.

use super::entity::EntityId;
use super::sparse_set::{Entities, SparseSet};
use std::any::{type_name, Any};

/// Capability set shared by every component pool, independent of element type.
pub trait Pool: Any {
    /// Removes the entity's value, if any.
    fn remove(&mut self, id: EntityId);

    /// Number of stored values.
    fn len(&self) -> usize;

    /// Returns true if nothing is stored.
    fn is_empty(&self) -> bool;

    /// Drops every stored value.
    fn clear(&mut self);

    /// Checks if the entity has a value in this pool.
    fn contains(&self, id: EntityId) -> bool;

    /// Iterates over stored ids in dense order.
    fn entities(&self) -> Entities<'_>;

    /// Type name of the stored component.
    fn component_name(&self) -> &'static str;

    /// Upcast for typed access.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for typed access.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: 'static> Pool for SparseSet<T> {
    fn remove(&mut self, id: EntityId) {
        SparseSet::remove(self, id);
    }

    fn len(&self) -> usize {
        SparseSet::len(self)
    }

    fn is_empty(&self) -> bool {
        SparseSet::is_empty(self)
    }

    fn clear(&mut self) {
        SparseSet::clear(self);
    }

    fn contains(&self, id: EntityId) -> bool {
        SparseSet::contains(self, id)
    }

    fn entities(&self) -> Entities<'_> {
        SparseSet::entities(self)
    }

    fn component_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Health(i32);

    fn boxed_pool() -> Box<dyn Pool> {
        let mut set = SparseSet::new();
        set.insert(EntityId::from_raw(1), Health(10));
        set.insert(EntityId::from_raw(2), Health(20));
        set.insert(EntityId::from_raw(3), Health(30));
        Box::new(set)
    }

    #[test]
    fn test_erased_operations() {
        let mut pool = boxed_pool();
        assert_eq!(pool.len(), 3);
        assert!(pool.contains(EntityId::from_raw(2)));

        pool.remove(EntityId::from_raw(2));
        assert_eq!(pool.len(), 2);
        assert!(!pool.contains(EntityId::from_raw(2)));

        // Absent removal is a no-op.
        pool.remove(EntityId::from_raw(2));
        assert_eq!(pool.len(), 2);

        let mut ids: Vec<_> = pool.entities().map(EntityId::raw).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 3]);

        pool.clear();
        assert!(pool.is_empty());
    }

    #[test]
    fn test_downcast_round_trip() {
        let mut pool = boxed_pool();
        assert!(pool.component_name().ends_with("Health"));

        let typed = pool
            .as_any_mut()
            .downcast_mut::<SparseSet<Health>>()
            .unwrap();
        typed.get_mut(EntityId::from_raw(1)).unwrap().0 += 5;

        let typed = pool.as_any().downcast_ref::<SparseSet<Health>>().unwrap();
        assert_eq!(typed.get(EntityId::from_raw(1)), Some(&Health(15)));
        assert!(pool.as_any().downcast_ref::<SparseSet<u32>>().is_none());
    }
}
