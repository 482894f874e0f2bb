//! # Registry Configuration
//!
//! Limits and tuning knobs for a [`Registry`](crate::Registry), loaded once
//! at startup from TOML or built in code.
//!
//! ```toml
//! max_entities = 1000000
//! max_component_types = 32
//! page_size = 4096
//! ```
//!
//! Missing keys take their default value.

use crate::ecs::MAX_COMPONENT_TYPES;
use crate::error::{RegistryError, RegistryResult};
use serde::Deserialize;
use std::path::Path;

/// Default maximum number of simultaneously allocated entity ids.
pub const DEFAULT_MAX_ENTITIES: u32 = 10_000_000;

/// Default number of sparse-layer slots per page.
pub const DEFAULT_PAGE_SIZE: usize = 2048;

/// Configuration for a registry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Maximum number of entity ids handed out. Ids are `0..max_entities`.
    pub max_entities: u32,
    /// Maximum number of distinct component types (at most the mask width).
    pub max_component_types: usize,
    /// Sparse-layer page size used by every pool of the registry.
    pub page_size: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_entities: DEFAULT_MAX_ENTITIES,
            max_component_types: MAX_COMPONENT_TYPES,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl RegistryConfig {
    /// Parses a configuration from TOML text and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidConfig`] if the text is not valid TOML,
    /// contains unknown keys, or holds out-of-range limits.
    pub fn from_toml_str(text: &str) -> RegistryResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| RegistryError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidConfig`] if the file cannot be read or
    /// its contents are rejected by [`RegistryConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> RegistryResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            RegistryError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks every limit against what the registry can represent.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidConfig`] describing the first bad field.
    pub fn validate(&self) -> RegistryResult<()> {
        if self.max_entities == 0 {
            return Err(RegistryError::InvalidConfig(
                "max_entities must be greater than zero".into(),
            ));
        }
        // u32::MAX is the null entity and can never be a live id.
        if self.max_entities == u32::MAX {
            return Err(RegistryError::InvalidConfig(format!(
                "max_entities must be below {}",
                u32::MAX
            )));
        }
        if self.max_component_types == 0 || self.max_component_types > MAX_COMPONENT_TYPES {
            return Err(RegistryError::InvalidConfig(format!(
                "max_component_types must be in 1..={MAX_COMPONENT_TYPES}, got {}",
                self.max_component_types
            )));
        }
        if self.page_size == 0 {
            return Err(RegistryError::InvalidConfig(
                "page_size must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
