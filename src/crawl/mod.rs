//! Crawl module for paginating a user's feed.

pub mod feed;

pub use feed::{crawl_user_feed, next_high_water_mark};
