//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Maximum username length.
const MAX_USERNAME_LENGTH: usize = 30;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_username(&config.target.username)?;

    if let Some(mark) = config.high_water_mark() {
        validate_item_id(mark)?;
    }

    if config.options.feed_base_url.is_empty() {
        return Err(Error::MissingConfig("feed_base_url".to_string()));
    }

    Ok(())
}

/// Validate the target username.
pub fn validate_username(username: &str) -> Result<()> {
    if username.is_empty() {
        return Err(Error::MissingConfig(
            "username (the profile whose feed to archive)".to_string(),
        ));
    }

    // Remove leading @ if present
    let clean_username = username.trim_start_matches('@');

    if clean_username.len() > MAX_USERNAME_LENGTH {
        return Err(Error::ConfigValidation {
            field: "username".to_string(),
            message: format!(
                "Username '{}' is too long (maximum {} characters)",
                username, MAX_USERNAME_LENGTH
            ),
        });
    }

    // Username pattern: alphanumeric, dots, underscores
    let username_pattern = Regex::new(r"^[a-zA-Z0-9._]+$").unwrap();

    if !username_pattern.is_match(clean_username) {
        return Err(Error::ConfigValidation {
            field: "username".to_string(),
            message: format!(
                "Username '{}' contains invalid characters. Only alphanumeric, dots, and underscores allowed.",
                username
            ),
        });
    }

    // Check for placeholder values
    let lower = clean_username.to_lowercase();
    if lower == "replaceme" || lower == "username" {
        return Err(Error::ConfigValidation {
            field: "username".to_string(),
            message: format!(
                "Username '{}' appears to be a placeholder. Please provide the actual profile username.",
                username
            ),
        });
    }

    Ok(())
}

/// Validate a feed item identifier (as used for the high-water mark).
pub fn validate_item_id(id: &str) -> Result<()> {
    let id_pattern = Regex::new(r"^[A-Za-z0-9._-]+$").unwrap();

    if !id_pattern.is_match(id) {
        return Err(Error::ConfigValidation {
            field: "last_scraped_id".to_string(),
            message: format!(
                "'{}' does not look like a feed item identifier.",
                id
            ),
        });
    }

    Ok(())
}
