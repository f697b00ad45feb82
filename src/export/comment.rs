//! Comment synthesis for exported photos.

use regex::Regex;

use crate::api::FeedItem;

/// Build the embedded comment for a feed item.
///
/// Location name and caption text (whichever are present) are joined with
/// `" | "`. Whitespace runs collapse to a single space and double quotes
/// become apostrophes, keeping the value safe for a delimited metadata
/// field.
pub fn build_comment(item: &FeedItem) -> String {
    let parts: Vec<&str> = [item.location_name(), item.caption_text()]
        .into_iter()
        .flatten()
        .collect();

    let joined = parts.join(" | ");

    let whitespace = Regex::new(r"\s+").unwrap();
    let collapsed = whitespace.replace_all(&joined, " ");

    collapsed.replace('"', "'")
}
