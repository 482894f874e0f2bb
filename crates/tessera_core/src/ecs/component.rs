//! # Component Types
//!
//! Components are plain `'static` values; no trait or registration is needed.
//! The first time a registry sees a type it assigns it the next free index,
//! which is also the type's bit in every [`ComponentMask`](super::ComponentMask).
//! Indices belong to one registry and never change while it lives.

use super::pool::Pool;
use super::sparse_set::SparseSet;
use crate::error::{RegistryError, RegistryResult};
use std::any::{type_name, TypeId};
use std::collections::HashMap;

/// Runtime description of a component type: identity, name, and how to build
/// an empty pool for it.
#[derive(Clone, Copy, Debug)]
pub struct ComponentInfo {
    type_id: TypeId,
    name: &'static str,
    new_pool: fn(usize) -> Box<dyn Pool>,
}

impl ComponentInfo {
    /// Describes component type `T`.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: type_name::<T>(),
            new_pool: new_pool::<T>,
        }
    }

    /// The component's `TypeId`.
    #[inline]
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// The component's type name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

fn new_pool<T: 'static>(page_size: usize) -> Box<dyn Pool> {
    Box::new(SparseSet::<T>::with_page_size(page_size))
}

/// A tuple of component types, used by mask tests and views.
///
/// Implemented for tuples of one to eight types: `(A,)`, `(A, B)`, ...
pub trait ComponentSet: 'static {
    /// Calls `visitor` once per member type, in tuple order.
    fn visit(visitor: impl FnMut(ComponentInfo));
}

macro_rules! impl_component_set {
    ($($ty:ident),+) => {
        impl<$($ty: 'static),+> ComponentSet for ($($ty,)+) {
            fn visit(mut visitor: impl FnMut(ComponentInfo)) {
                $(visitor(ComponentInfo::of::<$ty>());)+
            }
        }
    };
}

impl_component_set!(A);
impl_component_set!(A, B);
impl_component_set!(A, B, C);
impl_component_set!(A, B, C, D);
impl_component_set!(A, B, C, D, E);
impl_component_set!(A, B, C, D, E, F);
impl_component_set!(A, B, C, D, E, F, G);
impl_component_set!(A, B, C, D, E, F, G, H);

/// Per-registry table of component types and their pools.
pub(crate) struct ComponentTable {
    /// `TypeId -> index` into `pools`.
    indices: HashMap<TypeId, usize>,
    /// One pool per registered type, in registration order.
    pools: Vec<Box<dyn Pool>>,
    /// Maximum number of types.
    limit: usize,
    /// Page size handed to new pools.
    page_size: usize,
}

impl ComponentTable {
    pub(crate) fn new(limit: usize, page_size: usize) -> Self {
        Self {
            indices: HashMap::new(),
            pools: Vec::new(),
            limit,
            page_size,
        }
    }

    /// Number of registered types.
    pub(crate) fn len(&self) -> usize {
        self.pools.len()
    }

    /// Index of an already registered type.
    #[inline]
    pub(crate) fn index_of(&self, type_id: TypeId) -> Option<usize> {
        self.indices.get(&type_id).copied()
    }

    /// Index of the type, registering an empty pool for it on first use.
    pub(crate) fn register(&mut self, info: ComponentInfo) -> RegistryResult<usize> {
        if let Some(index) = self.index_of(info.type_id) {
            return Ok(index);
        }
        if self.pools.len() >= self.limit {
            return Err(RegistryError::ComponentLimitReached { max: self.limit });
        }

        let index = self.pools.len();
        self.pools.push((info.new_pool)(self.page_size));
        self.indices.insert(info.type_id, index);
        tracing::debug!(component = info.name, index, "registered component pool");
        Ok(index)
    }

    /// Type-erased pool at `index`.
    pub(crate) fn pool(&self, index: usize) -> Option<&dyn Pool> {
        self.pools.get(index).map(|pool| &**pool)
    }

    /// Mutable type-erased pool at `index`.
    pub(crate) fn pool_mut(&mut self, index: usize) -> Option<&mut (dyn Pool + 'static)> {
        self.pools.get_mut(index).map(|pool| &mut **pool)
    }

    /// Typed pool at `index`.
    pub(crate) fn typed<T: 'static>(&self, index: usize) -> RegistryResult<&SparseSet<T>> {
        self.pool(index)
            .and_then(|pool| pool.as_any().downcast_ref::<SparseSet<T>>())
            .ok_or(RegistryError::PoolTypeMismatch {
                component: type_name::<T>(),
            })
    }

    /// Mutable typed pool at `index`.
    pub(crate) fn typed_mut<T: 'static>(
        &mut self,
        index: usize,
    ) -> RegistryResult<&mut SparseSet<T>> {
        self.pool_mut(index)
            .and_then(|pool| pool.as_any_mut().downcast_mut::<SparseSet<T>>())
            .ok_or(RegistryError::PoolTypeMismatch {
                component: type_name::<T>(),
            })
    }

    /// Borrows the pools at `indices` simultaneously, in the given order.
    ///
    /// Returns `None` if an index is repeated or unknown.
    pub(crate) fn disjoint_mut(
        &mut self,
        indices: &[usize],
    ) -> Option<Vec<&mut (dyn Pool + 'static)>> {
        let mut slots: Vec<Option<&mut (dyn Pool + 'static)>> =
            self.pools.iter_mut().map(|pool| Some(&mut **pool)).collect();
        indices
            .iter()
            .map(|&index| slots.get_mut(index).and_then(Option::take))
            .collect()
    }

    /// Empties every pool. Type indices are kept.
    pub(crate) fn clear_pools(&mut self) {
        for pool in &mut self.pools {
            pool.clear();
        }
    }
}
