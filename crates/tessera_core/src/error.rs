//! # Registry Error Types
//!
//! All errors that can occur in the registry and its configuration.
//!
//! Most of these describe caller bugs. The primary registry API panics with
//! the error's message; the `try_*` variants hand the same value back instead.

use crate::ecs::EntityId;
use thiserror::Error;

/// Errors that can occur in the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The null entity was passed to an entity or component operation.
    #[error("cannot use the null entity")]
    NullEntity,

    /// Entity id is outside the configured id space.
    #[error("entity id {id} out of range: max entities is {max}")]
    EntityOutOfRange {
        /// The offending id.
        id: EntityId,
        /// Configured maximum entity count.
        max: u32,
    },

    /// Entity id is in range but not currently alive.
    #[error("entity {0} is not alive")]
    DeadEntity(EntityId),

    /// Every id below the configured maximum is in use.
    #[error("maximum number of entities reached: {max}")]
    EntityLimitReached {
        /// Configured maximum entity count.
        max: u32,
    },

    /// No index left for a new component type.
    #[error("maximum number of component types reached: {max}")]
    ComponentLimitReached {
        /// Configured maximum component type count.
        max: usize,
    },

    /// The entity has no component of the requested type.
    #[error("component {component} not found for entity {entity}")]
    MissingComponent {
        /// The entity that was queried.
        entity: EntityId,
        /// Type name of the missing component.
        component: &'static str,
    },

    /// The same component type appears twice in a view.
    #[error("duplicate component type in view: {0}")]
    DuplicateQueryType(&'static str),

    /// The pool stored at a type's index holds a different element type.
    #[error("component pool type mismatch for {component}")]
    PoolTypeMismatch {
        /// Type name the caller asked for.
        component: &'static str,
    },

    /// Invalid configuration value or file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
