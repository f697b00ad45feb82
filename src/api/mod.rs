//! Feed API module.
//!
//! This module provides:
//! - HTTP client for the per-user media endpoint
//! - Image host downloads
//! - Feed response types

pub mod client;
pub mod types;

pub use client::{InstagramApi, DEFAULT_BASE_URL};
pub use types::*;
