//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::api::FeedItem;
use crate::config::Config;
use crate::error::Result;

/// Get the export directory for a feed item.
///
/// Photos are organized into `{username}/{year}/{month}` folders derived
/// from the item's creation time.
pub fn export_dir(config: &Config, item: &FeedItem) -> PathBuf {
    let taken = item.taken_at();

    config
        .download_directory()
        .join(&config.target.username)
        .join(taken.format("%Y").to_string())
        .join(taken.format("%m").to_string())
}

/// Get the full export path for a feed item.
pub fn export_path(config: &Config, item: &FeedItem) -> PathBuf {
    export_dir(config, item).join(format!("{}.jpg", item.id))
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
