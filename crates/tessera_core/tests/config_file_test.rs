//! # Config File Tests
//!
//! Loading registry limits from TOML files on disk.

use std::fs;
use std::path::PathBuf;
use tessera_core::{Registry, RegistryConfig, RegistryError};

fn write_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tessera_{}_{name}.toml", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

/// Test: A file with partial keys loads and fills in defaults.
#[test]
fn test_load_partial_file() {
    let path = write_config("partial", "max_entities = 5\n");
    let config = RegistryConfig::load(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.max_entities, 5);
    assert_eq!(config.max_component_types, 64);
    assert_eq!(config.page_size, 2048);

    let mut registry = Registry::with_config(config).unwrap();
    for _ in 0..5 {
        registry.create();
    }
    assert!(registry.try_create().is_err());
}

/// Test: Invalid limits in a file are reported, not panicked on.
#[test]
fn test_load_invalid_limits() {
    let path = write_config("invalid", "max_component_types = 65\n");
    let result = RegistryConfig::load(&path);
    fs::remove_file(&path).ok();

    assert!(matches!(result, Err(RegistryError::InvalidConfig(_))));
}

/// Test: A missing file is an error.
#[test]
fn test_load_missing_file() {
    let path = std::env::temp_dir().join("tessera_definitely_missing.toml");
    assert!(matches!(
        RegistryConfig::load(path),
        Err(RegistryError::InvalidConfig(_))
    ));
}
