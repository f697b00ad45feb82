//! Instagram Archiver - scrape a profile's photos into dated folders.
//!
//! This library crawls a user's photo feed page by page, stops at the last
//! photo exported by a previous run, downloads each new photo, and stamps it
//! with EXIF creation time and a synthesized comment.
//!
//! # Features
//!
//! - Cursor-based feed pagination with a high-water-mark stop
//! - Date-derived `{user}/{year}/{month}` folder layout
//! - EXIF timestamp and comment tagging via jhead
//! - Incremental runs: only photos newer than the last scraped id
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use instagram_archiver::{
//!     api::InstagramApi,
//!     config::Config,
//!     crawl::crawl_user_feed,
//!     export::export_feed,
//!     tag::JheadTagger,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     let api = InstagramApi::new(&config.options.feed_base_url)?;
//!
//!     let items = crawl_user_feed(&api, &config).await?;
//!     let tagger = JheadTagger::new(&config.options.jhead_path);
//!     export_feed(&api, &tagger, &config, &items).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod crawl;
pub mod error;
pub mod export;
pub mod fs;
pub mod output;
pub mod tag;

// Re-exports for convenience
pub use api::{FeedItem, InstagramApi, MediaPage};
pub use config::Config;
pub use crawl::{crawl_user_feed, next_high_water_mark};
pub use error::{Error, Result};
pub use export::{export_feed, save_item, ExportState};
pub use tag::{ImageTagger, JheadTagger};
