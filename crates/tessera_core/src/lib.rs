//! # Tessera Core
//!
//! Sparse-set Entity Component System (ECS):
//! - Any `'static` type is a component, no registration step
//! - O(1) add, get, and remove per component
//! - Dense per-type storage for cache-friendly iteration
//! - Multi-component views driven by the rarest component
//!
//! ## Example
//!
//! ```rust
//! use tessera_core::Registry;
//!
//! struct Position(f32);
//! struct Velocity(f32);
//!
//! let mut registry = Registry::new();
//! let mover = registry.create();
//! registry.add(mover, Position(0.0));
//! registry.add(mover, Velocity(2.5));
//!
//! let still = registry.create();
//! registry.add(still, Position(1.0));
//!
//! let mut moved = 0;
//! registry.view::<(Position, Velocity)>().each(|pos, vel| {
//!     pos.0 += vel.0;
//!     moved += 1;
//! });
//! assert_eq!(moved, 1);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod bench;
pub mod config;
pub mod ecs;
pub mod error;

pub use config::RegistryConfig;
pub use ecs::{
    ComponentInfo, ComponentMask, ComponentSet, Entities, EntityId, Pool, Registry, SparseSet,
    View, MAX_COMPONENT_TYPES,
};
pub use error::{RegistryError, RegistryResult};
