//! Filesystem module.
//!
//! Provides:
//! - Date-derived export paths and directory management
//! - Filename validation for wire-supplied ids

pub mod naming;
pub mod paths;

pub use naming::validate_filename_id;
pub use paths::{ensure_dir, export_dir, export_path};
