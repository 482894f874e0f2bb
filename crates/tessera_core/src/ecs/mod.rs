//! # Entity Component System
//!
//! A sparse-set ECS with runtime component registration.
//!
//! ## Design Philosophy
//!
//! - Entity ids are plain indices, recycled through a free list
//! - Each component type gets its own paged sparse set, created on first use
//! - A 64-bit mask per entity records which types it carries
//! - Views drive iteration from the smallest queried pool

mod component;
mod entity;
mod pool;
mod registry;
mod sparse_set;
mod view;

pub use component::{ComponentInfo, ComponentSet};
pub use entity::{ComponentMask, EntityId, MaskIter, MAX_COMPONENT_TYPES};
pub use pool::Pool;
pub use registry::Registry;
pub use sparse_set::{Entities, SparseSet};
pub use view::View;
