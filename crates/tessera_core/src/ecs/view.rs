//! # Views
//!
//! Multi-component iteration. A view walks the ids of its smallest pool (the
//! driver) and probes the other pools for each one, so the cost is bounded by
//! the rarest component rather than by the number of entities.
//!
//! Callbacks receive mutable references to every queried component. The view
//! holds the registry mutably for its whole life, so nothing can add, remove,
//! or destroy while it runs.

use super::component::ComponentSet;
use super::entity::EntityId;
use super::pool::Pool;
use super::sparse_set::SparseSet;
use crate::error::RegistryError;
use itertools::Itertools;
use std::any::type_name;
use std::marker::PhantomData;

/// Iteration over all entities that have every component in `Q`.
///
/// Built by [`Registry::view`](super::Registry::view).
pub struct View<'a, Q> {
    /// Borrowed pools, in query order.
    pools: Vec<&'a mut (dyn Pool + 'static)>,
    /// Position in `pools` of the smallest pool.
    driver: usize,
    _marker: PhantomData<fn() -> Q>,
}

impl<'a, Q: ComponentSet> View<'a, Q> {
    pub(crate) fn new(pools: Vec<&'a mut (dyn Pool + 'static)>) -> Self {
        let driver = pools
            .iter()
            .position_min_by_key(|pool| pool.len())
            .unwrap_or(0);
        Self {
            pools,
            driver,
            _marker: PhantomData,
        }
    }

    /// Upper bound on the number of matches: the driver pool's size.
    #[inline]
    #[must_use]
    pub fn size_hint(&self) -> usize {
        self.pools.get(self.driver).map_or(0, |pool| pool.len())
    }

    /// Type name of the driver component.
    #[must_use]
    pub fn driver_name(&self) -> &'static str {
        self.pools
            .get(self.driver)
            .map_or("<none>", |pool| pool.component_name())
    }

    /// Ids of matching entities, in driver order.
    pub fn entities(&self) -> impl Iterator<Item = EntityId> + '_ {
        let driver = self.pools.get(self.driver);
        driver
            .into_iter()
            .flat_map(|pool| pool.entities())
            .filter(move |&id| self.pools.iter().all(|pool| pool.contains(id)))
    }
}

#[track_caller]
fn mismatch<T>() -> ! {
    panic!(
        "{}",
        RegistryError::PoolTypeMismatch {
            component: type_name::<T>(),
        }
    )
}

macro_rules! impl_view {
    ($(($ty:ident, $pool:ident, $pos:ident)),+) => {
        impl<'a, $($ty: 'static),+> View<'a, ($($ty,)+)> {
            /// Calls `f` with the components of every matching entity.
            pub fn each(&mut self, mut f: impl FnMut($(&mut $ty),+)) {
                self.each_with_entity(|_, $($pool),+| f($($pool),+));
            }

            /// Calls `f` with the id and components of every matching entity.
            pub fn each_with_entity(&mut self, mut f: impl FnMut(EntityId, $(&mut $ty),+)) {
                let driver = self.driver;
                let mut pools = self.pools.iter_mut();
                $(
                    let Some($pool) = pools
                        .next()
                        .and_then(|pool| pool.as_any_mut().downcast_mut::<SparseSet<$ty>>())
                    else {
                        mismatch::<$ty>()
                    };
                    let $pool = $pool.split_mut();
                )+

                let entities = [$($pool.1),+][driver];
                for &id in entities {
                    $(
                        let Some($pos) = $pool.0.get(id) else {
                            continue;
                        };
                    )+
                    f(id, $(&mut $pool.2[$pos]),+);
                }
            }
        }
    };
}

impl_view!((A, a, a_pos));
impl_view!((A, a, a_pos), (B, b, b_pos));
impl_view!((A, a, a_pos), (B, b, b_pos), (C, c, c_pos));
impl_view!((A, a, a_pos), (B, b, b_pos), (C, c, c_pos), (D, d, d_pos));
impl_view!(
    (A, a, a_pos),
    (B, b, b_pos),
    (C, c, c_pos),
    (D, d, d_pos),
    (E, e, e_pos)
);
impl_view!(
    (A, a, a_pos),
    (B, b, b_pos),
    (C, c, c_pos),
    (D, d, d_pos),
    (E, e, e_pos),
    (F, f6, f_pos)
);
impl_view!(
    (A, a, a_pos),
    (B, b, b_pos),
    (C, c, c_pos),
    (D, d, d_pos),
    (E, e, e_pos),
    (F, f6, f_pos),
    (G, g, g_pos)
);
impl_view!(
    (A, a, a_pos),
    (B, b, b_pos),
    (C, c, c_pos),
    (D, d, d_pos),
    (E, e, e_pos),
    (F, f6, f_pos),
    (G, g, g_pos),
    (H, h, h_pos)
);
