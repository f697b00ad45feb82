//! Feed crawling logic.

use crate::api::{FeedItem, InstagramApi};
use crate::config::Config;
use crate::error::Result;

/// Crawl all new photos for the configured user, newest first.
///
/// Pages are followed through their `max_id` cursor until either the
/// high-water mark from a previous run is found or the feed advertises no
/// further pages. When the mark is absent the entire feed is drained.
///
/// Items preserve the feed's native ordering across page boundaries. Any
/// remote failure aborts the crawl with nothing to export; items collected
/// from earlier pages are discarded with it.
pub async fn crawl_user_feed(api: &InstagramApi, config: &Config) -> Result<Vec<FeedItem>> {
    let username = &config.target.username;
    let mark = config.high_water_mark();

    let mut items: Vec<FeedItem> = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = api.get_media_page(username, cursor.as_deref()).await?;

        // Short circuit if this page contains the last scraped photo
        if let Some(mark) = mark {
            if let Some(index) = page.items.iter().position(|item| item.id == mark) {
                items.extend(page.items.into_iter().take(index));
                tracing::info!("crawled {} items, reached last scraped photo, done", items.len());
                break;
            }
        }

        // Cursor for the next page is the id of the last item on this one
        let next_cursor = page.items.last().map(|item| item.id.clone());
        let more_available = page.more_available;
        items.extend(page.items);

        match next_cursor {
            Some(next) if more_available => {
                tracing::info!("crawled {} items, more available (max_id = {})", items.len(), next);
                cursor = Some(next);
            }
            _ => {
                tracing::info!("crawled {} items, reached the end, done", items.len());
                break;
            }
        }
    }

    Ok(items)
}

/// The mark the operator should record for the next run, if it changed.
///
/// Returns the id of the newest crawled item unless the crawl was empty or
/// the newest item already matches the current mark.
pub fn next_high_water_mark<'a>(items: &'a [FeedItem], current: Option<&str>) -> Option<&'a str> {
    let newest = items.first()?;

    if current == Some(newest.id.as_str()) {
        None
    } else {
        Some(newest.id.as_str())
    }
}
