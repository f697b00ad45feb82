//! Configuration module for the archiver.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument merging
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, OptionsConfig, TargetConfig};
pub use validation::{validate_config, validate_item_id, validate_username};
