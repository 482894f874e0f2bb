//! # Registry
//!
//! The central container for entities and components.
//!
//! - Entity ids come from a counter or a LIFO free list of destroyed ids
//! - Each live entity has a [`ComponentMask`] naming its component types
//! - Each component type has one [`SparseSet`] pool, created on first use
//!
//! A mask bit and the matching pool entry always change together.

use super::component::{ComponentInfo, ComponentSet, ComponentTable};
use super::entity::{ComponentMask, EntityId};
use super::pool::Pool;
use super::sparse_set::{Entities, SparseSet};
use super::view::View;
use crate::config::RegistryConfig;
use crate::error::{RegistryError, RegistryResult};
use std::any::{type_name, TypeId};
use std::fmt;

/// Unwraps a registry result, panicking with the error message.
///
/// Precondition violations are caller bugs, so the primary API treats them
/// as fatal.
#[inline]
#[track_caller]
fn fatal<T>(result: RegistryResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

fn missing<T>(entity: EntityId) -> RegistryError {
    RegistryError::MissingComponent {
        entity,
        component: type_name::<T>(),
    }
}

/// Entity/component registry.
///
/// # Thread Safety
///
/// This registry is NOT thread-safe. One owner mutates and iterates it.
///
/// # Example
///
/// ```rust
/// use tessera_core::Registry;
///
/// struct Position(f32, f32);
/// struct Velocity(f32, f32);
///
/// let mut registry = Registry::new();
/// let e = registry.create();
/// registry.add(e, Position(0.0, 0.0));
/// registry.add(e, Velocity(1.0, 2.0));
///
/// registry.view::<(Position, Velocity)>().each(|pos, vel| {
///     pos.0 += vel.0;
///     pos.1 += vel.1;
/// });
///
/// assert_eq!(registry.get::<Position>(e).1, 2.0);
/// ```
pub struct Registry {
    /// Limits this registry was built with.
    config: RegistryConfig,
    /// One mask per live entity; also the set of live ids.
    masks: SparseSet<ComponentMask>,
    /// Destroyed ids, reused last-in first-out.
    free_ids: Vec<EntityId>,
    /// Next never-used id.
    next_id: u32,
    /// Type index table and pools.
    components: ComponentTable,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("entities", &self.entity_count())
            .field("pools", &self.pool_count())
            .field("free_ids", &self.free_ids.len())
            .field("config", &self.config)
            .finish()
    }
}

impl Registry {
    /// Creates a registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::build(RegistryConfig::default())
    }

    /// Creates a registry with the given limits.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidConfig`] if the config does not validate.
    pub fn with_config(config: RegistryConfig) -> RegistryResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: RegistryConfig) -> Self {
        Self {
            masks: SparseSet::with_page_size(config.page_size),
            free_ids: Vec::new(),
            next_id: 0,
            components: ComponentTable::new(config.max_component_types, config.page_size),
            config,
        }
    }

    /// Returns the configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    // =========================================================================
    // Entity lifecycle
    // =========================================================================

    /// Creates an entity with no components, reusing a destroyed id if any.
    ///
    /// # Panics
    ///
    /// Panics if `max_entities` ids are already in use.
    #[track_caller]
    pub fn create(&mut self) -> EntityId {
        fatal(self.try_create())
    }

    /// Fallible form of [`Registry::create`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EntityLimitReached`] when no id is left.
    pub fn try_create(&mut self) -> RegistryResult<EntityId> {
        let id = match self.free_ids.pop() {
            Some(id) => id,
            None => {
                if self.next_id >= self.config.max_entities {
                    return Err(RegistryError::EntityLimitReached {
                        max: self.config.max_entities,
                    });
                }
                let id = EntityId::from_raw(self.next_id);
                self.next_id += 1;
                id
            }
        };

        self.masks.insert(id, ComponentMask::EMPTY);
        tracing::trace!(entity = id.raw(), "created entity");
        Ok(id)
    }

    /// Destroys an entity: removes all its components, frees its id, and
    /// overwrites the caller's handle with [`EntityId::NULL`].
    ///
    /// The id may be handed out again by the next [`Registry::create`]; any
    /// other copy of it will then refer to the new entity.
    ///
    /// # Panics
    ///
    /// Panics if `id` is null, out of range, or not alive.
    #[track_caller]
    pub fn destroy(&mut self, id: &mut EntityId) {
        fatal(self.try_destroy(id));
    }

    /// Fallible form of [`Registry::destroy`]. The handle is untouched on error.
    ///
    /// # Errors
    ///
    /// Returns the validation error for a null, out-of-range, or dead id.
    pub fn try_destroy(&mut self, id: &mut EntityId) -> RegistryResult<()> {
        let target = *id;
        let mask = self.mask(target)?;

        for index in mask.iter() {
            if let Some(pool) = self.components.pool_mut(index) {
                pool.remove(target);
            }
        }
        self.masks.remove(target);
        self.free_ids.push(target);
        *id = EntityId::NULL;

        tracing::trace!(entity = target.raw(), "destroyed entity");
        Ok(())
    }

    /// Checks if `id` is a live entity. Never panics.
    #[inline]
    #[must_use]
    pub fn is_alive(&self, id: EntityId) -> bool {
        !id.is_null() && self.masks.contains(id)
    }

    /// Iterates over live entity ids. Order is unspecified.
    #[inline]
    pub fn entities(&self) -> Entities<'_> {
        self.masks.entities()
    }

    // =========================================================================
    // Components
    // =========================================================================

    /// Attaches `value` to the entity, overwriting any previous `T`.
    ///
    /// # Panics
    ///
    /// Panics if the entity is invalid or `T` would exceed the component type
    /// limit.
    #[track_caller]
    pub fn add<T: 'static>(&mut self, id: EntityId, value: T) -> &mut T {
        fatal(self.try_add(id, value))
    }

    /// Fallible form of [`Registry::add`].
    ///
    /// # Errors
    ///
    /// Returns the validation error for a bad id, or
    /// [`RegistryError::ComponentLimitReached`].
    pub fn try_add<T: 'static>(&mut self, id: EntityId, value: T) -> RegistryResult<&mut T> {
        self.try_emplace(id, || value)
    }

    /// Attaches a `T` built by `make`. `make` only runs once the entity and
    /// the component type have been validated.
    ///
    /// # Panics
    ///
    /// Same as [`Registry::add`].
    #[track_caller]
    pub fn emplace<T: 'static>(&mut self, id: EntityId, make: impl FnOnce() -> T) -> &mut T {
        fatal(self.try_emplace(id, make))
    }

    /// Attaches `T::default()`.
    ///
    /// # Panics
    ///
    /// Same as [`Registry::add`].
    #[track_caller]
    pub fn add_default<T: Default + 'static>(&mut self, id: EntityId) -> &mut T {
        fatal(self.try_emplace(id, T::default))
    }

    /// Fallible form of [`Registry::emplace`].
    ///
    /// # Errors
    ///
    /// Same as [`Registry::try_add`].
    pub fn try_emplace<T: 'static>(
        &mut self,
        id: EntityId,
        make: impl FnOnce() -> T,
    ) -> RegistryResult<&mut T> {
        self.mask(id)?;
        let index = self.components.register(ComponentInfo::of::<T>())?;
        let pool = self.components.typed_mut::<T>(index)?;
        let mask = self
            .masks
            .get_mut(id)
            .ok_or(RegistryError::DeadEntity(id))?;

        let value = pool.insert_with(id, make);
        mask.insert(index);
        Ok(value)
    }

    /// Returns the entity's `T`.
    ///
    /// # Panics
    ///
    /// Panics if the entity is invalid or has no `T`. Check with
    /// [`Registry::has`] or iterate a view when presence is not known.
    #[track_caller]
    #[must_use]
    pub fn get<T: 'static>(&self, id: EntityId) -> &T {
        fatal(self.try_get(id))
    }

    /// Returns the entity's `T` mutably.
    ///
    /// # Panics
    ///
    /// Same as [`Registry::get`].
    #[track_caller]
    pub fn get_mut<T: 'static>(&mut self, id: EntityId) -> &mut T {
        fatal(self.try_get_mut(id))
    }

    /// Fallible form of [`Registry::get`].
    ///
    /// # Errors
    ///
    /// Returns the validation error for a bad id, or
    /// [`RegistryError::MissingComponent`].
    pub fn try_get<T: 'static>(&self, id: EntityId) -> RegistryResult<&T> {
        self.mask(id)?;
        let index = self
            .components
            .index_of(TypeId::of::<T>())
            .ok_or_else(|| missing::<T>(id))?;
        self.components
            .typed::<T>(index)?
            .get(id)
            .ok_or_else(|| missing::<T>(id))
    }

    /// Fallible form of [`Registry::get_mut`].
    ///
    /// # Errors
    ///
    /// Same as [`Registry::try_get`].
    pub fn try_get_mut<T: 'static>(&mut self, id: EntityId) -> RegistryResult<&mut T> {
        self.mask(id)?;
        let index = self
            .components
            .index_of(TypeId::of::<T>())
            .ok_or_else(|| missing::<T>(id))?;
        self.components
            .typed_mut::<T>(index)?
            .get_mut(id)
            .ok_or_else(|| missing::<T>(id))
    }

    /// Detaches and returns the entity's `T`. `None` if it had none.
    ///
    /// # Panics
    ///
    /// Panics if the entity is invalid.
    #[track_caller]
    pub fn remove<T: 'static>(&mut self, id: EntityId) -> Option<T> {
        fatal(self.try_remove(id))
    }

    /// Fallible form of [`Registry::remove`].
    ///
    /// # Errors
    ///
    /// Returns the validation error for a bad id.
    pub fn try_remove<T: 'static>(&mut self, id: EntityId) -> RegistryResult<Option<T>> {
        self.mask(id)?;
        let index = match self.components.register(ComponentInfo::of::<T>()) {
            Ok(index) => index,
            // A type that cannot be registered was never attached.
            Err(RegistryError::ComponentLimitReached { .. }) => return Ok(None),
            Err(err) => return Err(err),
        };

        let removed = self.components.typed_mut::<T>(index)?.remove(id);
        if removed.is_some() {
            if let Some(mask) = self.masks.get_mut(id) {
                mask.remove(index);
            }
        }
        Ok(removed)
    }

    /// Checks if the entity has a `T`.
    ///
    /// # Panics
    ///
    /// Panics if the entity is invalid.
    #[track_caller]
    #[must_use]
    pub fn has<T: 'static>(&self, id: EntityId) -> bool {
        self.has_all::<(T,)>(id)
    }

    /// Checks if the entity has every component in `Q`.
    ///
    /// ```rust
    /// # use tessera_core::Registry;
    /// let mut registry = Registry::new();
    /// let e = registry.create();
    /// registry.add(e, 1u32);
    /// registry.add(e, 2.0f32);
    /// assert!(registry.has_all::<(u32, f32)>(e));
    /// assert!(!registry.has_all::<(u32, f64)>(e));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the entity is invalid.
    #[track_caller]
    #[must_use]
    pub fn has_all<Q: ComponentSet>(&self, id: EntityId) -> bool {
        let mask = fatal(self.mask(id));
        let mut all = true;
        Q::visit(|info| all &= self.mask_has(mask, info));
        all
    }

    /// Checks if the entity has at least one component in `Q`.
    ///
    /// # Panics
    ///
    /// Panics if the entity is invalid.
    #[track_caller]
    #[must_use]
    pub fn has_any<Q: ComponentSet>(&self, id: EntityId) -> bool {
        let mask = fatal(self.mask(id));
        let mut any = false;
        Q::visit(|info| any |= self.mask_has(mask, info));
        any
    }

    /// Unregistered types are never set.
    #[inline]
    fn mask_has(&self, mask: ComponentMask, info: ComponentInfo) -> bool {
        self.components
            .index_of(info.type_id())
            .is_some_and(|index| mask.contains(index))
    }

    /// Read-only access to the pool for `T`, if the type has been registered.
    #[must_use]
    pub fn pool<T: 'static>(&self) -> Option<&SparseSet<T>> {
        let index = self.components.index_of(TypeId::of::<T>())?;
        self.components.typed::<T>(index).ok()
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Builds a view over every entity that has all components in `Q`.
    ///
    /// Pools for types not seen before are registered empty.
    ///
    /// # Panics
    ///
    /// Panics if `Q` repeats a type or a new type would exceed the component
    /// type limit.
    #[track_caller]
    pub fn view<Q: ComponentSet>(&mut self) -> View<'_, Q> {
        fatal(self.try_view())
    }

    /// Fallible form of [`Registry::view`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateQueryType`] or
    /// [`RegistryError::ComponentLimitReached`].
    pub fn try_view<Q: ComponentSet>(&mut self) -> RegistryResult<View<'_, Q>> {
        let mut indices = Vec::new();
        let mut names = Vec::new();
        let mut failure = None;
        Q::visit(|info| match self.components.register(info) {
            Ok(index) => {
                indices.push(index);
                names.push(info.name());
            }
            Err(err) => {
                failure.get_or_insert(err);
            }
        });
        if let Some(err) = failure {
            return Err(err);
        }

        match self.components.disjoint_mut(&indices) {
            Some(pools) => Ok(View::new(pools)),
            None => {
                let repeated = indices
                    .iter()
                    .enumerate()
                    .find(|&(position, index)| indices[..position].contains(index))
                    .map_or("<unknown>", |(position, _)| names[position]);
                Err(RegistryError::DuplicateQueryType(repeated))
            }
        }
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Number of registered component pools.
    #[inline]
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.components.len()
    }

    /// Number of live entities.
    #[inline]
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.masks.len()
    }

    /// Type names of the entity's components, in type index order.
    ///
    /// # Panics
    ///
    /// Panics if the entity is invalid.
    #[track_caller]
    #[must_use]
    pub fn component_names(&self, id: EntityId) -> Vec<&'static str> {
        fatal(self.mask(id))
            .iter()
            .filter_map(|index| self.components.pool(index).map(Pool::component_name))
            .collect()
    }

    /// Human-readable list of the entity's components.
    ///
    /// # Panics
    ///
    /// Panics if the entity is invalid.
    #[track_caller]
    #[must_use]
    pub fn describe_entity(&self, id: EntityId) -> String {
        let names = self.component_names(id);
        if names.is_empty() {
            format!("Entity {id} has no components")
        } else {
            format!("Entity {id} has components: {}", names.join(", "))
        }
    }

    /// Logs [`Registry::describe_entity`] at info level.
    ///
    /// # Panics
    ///
    /// Panics if the entity is invalid.
    #[track_caller]
    pub fn log_entity(&self, id: EntityId) {
        let description = self.describe_entity(id);
        tracing::info!("{description}");
    }

    /// Destroys every entity and empties every pool.
    ///
    /// Component type indices survive, so masks built afterwards use the same
    /// bits as before.
    pub fn clear(&mut self) {
        let entities = self.masks.len();
        self.masks.clear();
        self.free_ids.clear();
        self.next_id = 0;
        self.components.clear_pools();
        tracing::debug!(entities, pools = self.components.len(), "cleared registry");
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Validates `id` and returns its mask.
    fn mask(&self, id: EntityId) -> RegistryResult<ComponentMask> {
        if id.is_null() {
            return Err(RegistryError::NullEntity);
        }
        if id.raw() >= self.config.max_entities {
            return Err(RegistryError::EntityOutOfRange {
                id,
                max: self.config.max_entities,
            });
        }
        self.masks
            .get(id)
            .copied()
            .ok_or(RegistryError::DeadEntity(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Clone)]
    struct Position {
        x: f32,
        y: f32,
    }

    #[derive(Debug, PartialEq, Default)]
    struct Health(i32);

    #[derive(Debug, PartialEq)]
    struct Name(String);

    fn small_registry(max_entities: u32, max_component_types: usize) -> Registry {
        Registry::with_config(RegistryConfig {
            max_entities,
            max_component_types,
            page_size: 8,
        })
        .unwrap()
    }

    // -- create / destroy ---------------------------------------------------

    #[test]
    fn test_create_returns_sequential_ids() {
        let mut registry = Registry::new();
        assert_eq!(registry.create(), EntityId::from_raw(0));
        assert_eq!(registry.create(), EntityId::from_raw(1));
        assert_eq!(registry.entity_count(), 2);
    }

    #[test]
    fn test_destroy_nulls_handle_and_recycles_id() {
        let mut registry = Registry::new();
        let _a = registry.create();
        let mut b = registry.create();
        let raw = b.raw();

        registry.destroy(&mut b);
        assert!(b.is_null());
        assert_eq!(registry.entity_count(), 1);

        let c = registry.create();
        assert_eq!(c.raw(), raw);
        assert!(registry.component_names(c).is_empty());
    }

    #[test]
    fn test_free_list_is_lifo() {
        let mut registry = Registry::new();
        let mut a = registry.create();
        let mut b = registry.create();
        let (raw_a, raw_b) = (a.raw(), b.raw());

        registry.destroy(&mut a);
        registry.destroy(&mut b);

        assert_eq!(registry.create().raw(), raw_b);
        assert_eq!(registry.create().raw(), raw_a);
        assert_eq!(registry.create().raw(), 2);
    }

    #[test]
    fn test_destroy_clears_components() {
        let mut registry = Registry::new();
        let mut e = registry.create();
        registry.add(e, Position { x: 0.0, y: 0.0 });
        registry.add(e, Health(100));
        registry.destroy(&mut e);

        let fresh = registry.create();
        assert!(!registry.has::<Position>(fresh));
        assert!(!registry.has::<Health>(fresh));
        assert!(registry.try_get::<Health>(fresh).is_err());
        assert!(registry.pool::<Health>().unwrap().is_empty());
    }

    #[test]
    fn test_try_destroy_leaves_handle_on_error() {
        let mut registry = Registry::new();
        let mut e = registry.create();
        let mut copy = e;
        registry.destroy(&mut e);

        assert_eq!(
            registry.try_destroy(&mut copy),
            Err(RegistryError::DeadEntity(copy))
        );
        assert!(!copy.is_null());
    }

    #[test]
    fn test_is_alive() {
        let mut registry = Registry::new();
        let mut e = registry.create();
        let copy = e;
        assert!(registry.is_alive(e));
        registry.destroy(&mut e);
        assert!(!registry.is_alive(copy));
        assert!(!registry.is_alive(EntityId::NULL));
    }

    #[test]
    #[should_panic(expected = "maximum number of entities reached: 2")]
    fn test_entity_limit_panics() {
        let mut registry = small_registry(2, 4);
        registry.create();
        registry.create();
        registry.create();
    }

    #[test]
    fn test_entity_limit_allows_recycling() {
        let mut registry = small_registry(1, 4);
        let mut e = registry.create();
        assert_eq!(
            registry.try_create(),
            Err(RegistryError::EntityLimitReached { max: 1 })
        );
        registry.destroy(&mut e);
        assert_eq!(registry.try_create(), Ok(EntityId::from_raw(0)));
    }

    #[test]
    #[should_panic(expected = "cannot use the null entity")]
    fn test_destroy_null_panics() {
        let mut registry = Registry::new();
        let mut null = EntityId::NULL;
        registry.destroy(&mut null);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_destroy_out_of_range_panics() {
        let mut registry = small_registry(10, 4);
        let mut id = EntityId::from_raw(10);
        registry.destroy(&mut id);
    }

    // -- add / get / remove -------------------------------------------------

    #[test]
    fn test_add_and_get() {
        let mut registry = Registry::new();
        let e = registry.create();
        registry.add(e, Position { x: 1.0, y: 2.0 });
        assert_eq!(registry.get::<Position>(e), &Position { x: 1.0, y: 2.0 });
    }

    #[test]
    fn test_add_overwrites_existing() {
        let mut registry = Registry::new();
        let e = registry.create();
        registry.add(e, Health(100));
        registry.add(e, Health(50));
        assert_eq!(registry.get::<Health>(e), &Health(50));
        assert_eq!(registry.pool::<Health>().unwrap().len(), 1);
    }

    #[test]
    fn test_add_returns_stored_component() {
        let mut registry = Registry::new();
        let e = registry.create();
        registry.add(e, Health(1)).0 += 9;
        assert_eq!(registry.get::<Health>(e), &Health(10));
    }

    #[test]
    fn test_emplace_and_add_default() {
        let mut registry = Registry::new();
        let e = registry.create();
        registry.emplace(e, || Name(String::from("Player")));
        registry.add_default::<Health>(e);

        assert_eq!(registry.get::<Name>(e), &Name("Player".into()));
        assert_eq!(registry.get::<Health>(e), &Health(0));
    }

    #[test]
    fn test_emplace_skips_constructor_on_invalid_entity() {
        let mut registry = Registry::new();
        let mut built = false;
        let result = registry.try_emplace(EntityId::NULL, || {
            built = true;
            Health(1)
        });
        assert_eq!(result.err(), Some(RegistryError::NullEntity));
        assert!(!built);
    }

    #[test]
    fn test_get_mut_modifies_in_place() {
        let mut registry = Registry::new();
        let e = registry.create();
        registry.add(e, Health(100));
        registry.get_mut::<Health>(e).0 -= 30;
        assert_eq!(registry.get::<Health>(e), &Health(70));
    }

    #[test]
    #[should_panic(expected = "not found for entity")]
    fn test_get_missing_panics() {
        let mut registry = Registry::new();
        let e = registry.create();
        let _ = registry.get::<Health>(e);
    }

    #[test]
    fn test_try_get_missing_reports_type() {
        let mut registry = Registry::new();
        let a = registry.create();
        let b = registry.create();
        registry.add(a, Health(1));

        match registry.try_get::<Health>(b) {
            Err(RegistryError::MissingComponent { entity, component }) => {
                assert_eq!(entity, b);
                assert!(component.ends_with("Health"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_remove_returns_component_and_clears_bit() {
        let mut registry = Registry::new();
        let e = registry.create();
        registry.add(e, Health(42));

        assert_eq!(registry.remove::<Health>(e), Some(Health(42)));
        assert!(!registry.has::<Health>(e));
        assert!(registry.try_get::<Health>(e).is_err());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut registry = Registry::new();
        let e = registry.create();
        assert_eq!(registry.remove::<Health>(e), None);
        // First use registers the pool.
        assert_eq!(registry.pool_count(), 1);
    }

    #[test]
    fn test_remove_unregistrable_type_is_noop() {
        let mut registry = small_registry(8, 1);
        let e = registry.create();
        registry.add(e, Health(1));
        assert_eq!(registry.remove::<Name>(e), None);
        assert_eq!(registry.pool_count(), 1);
    }

    #[test]
    #[should_panic(expected = "is not alive")]
    fn test_add_to_destroyed_entity_panics() {
        let mut registry = Registry::new();
        let mut e = registry.create();
        let stale = e;
        registry.destroy(&mut e);
        registry.add(stale, Health(1));
    }

    #[test]
    #[should_panic(expected = "maximum number of component types reached: 2")]
    fn test_component_type_limit_panics() {
        let mut registry = small_registry(8, 2);
        let e = registry.create();
        registry.add(e, Health(1));
        registry.add(e, Name("a".into()));
        registry.add(e, Position { x: 0.0, y: 0.0 });
    }

    // -- masks --------------------------------------------------------------

    #[test]
    fn test_has_all_and_has_any() {
        let mut registry = Registry::new();
        let e = registry.create();
        registry.add(e, Health(1));
        registry.add(e, Position { x: 0.0, y: 0.0 });

        assert!(registry.has_all::<(Health, Position)>(e));
        assert!(!registry.has_all::<(Health, Name)>(e));
        assert!(registry.has_any::<(Health, Name)>(e));
        assert!(!registry.has_any::<(Name, u64)>(e));
    }

    #[test]
    fn test_mask_queries_do_not_register_pools() {
        let mut registry = Registry::new();
        let e = registry.create();
        assert!(!registry.has::<Health>(e));
        assert_eq!(registry.pool_count(), 0);
    }

    #[test]
    fn test_component_names_follow_type_indices() {
        let mut registry = Registry::new();
        let e = registry.create();
        registry.add(e, Name("x".into()));
        registry.add(e, Health(3));

        let names = registry.component_names(e);
        assert_eq!(names.len(), 2);
        assert!(names[0].ends_with("Name"));
        assert!(names[1].ends_with("Health"));
    }

    #[test]
    fn test_describe_entity() {
        let mut registry = Registry::new();
        let e = registry.create();
        assert_eq!(registry.describe_entity(e), "Entity 0 has no components");

        registry.add(e, 7u16);
        registry.add(e, 'c');
        assert_eq!(
            registry.describe_entity(e),
            "Entity 0 has components: u16, char"
        );
        registry.log_entity(e);
    }

    // -- clear --------------------------------------------------------------

    #[test]
    fn test_clear_keeps_type_indices() {
        let mut registry = Registry::new();
        let e = registry.create();
        registry.add(e, Health(1));
        registry.add(e, Name("n".into()));

        registry.clear();
        assert_eq!(registry.entity_count(), 0);
        assert_eq!(registry.pool_count(), 2);
        assert!(registry.pool::<Health>().unwrap().is_empty());

        let fresh = registry.create();
        assert_eq!(fresh.raw(), 0);
        registry.add(fresh, Name("m".into()));
        assert!(registry.component_names(fresh)[0].ends_with("Name"));
    }

    #[test]
    fn test_debug_output() {
        let mut registry = Registry::new();
        registry.create();
        let text = format!("{registry:?}");
        assert!(text.contains("entities: 1"));
    }
}
