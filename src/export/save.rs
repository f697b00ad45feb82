//! Photo export logic.

use std::path::{Path, PathBuf};
use std::time::Duration;

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::time::sleep;

use crate::api::{FeedItem, InstagramApi};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::export::comment::build_comment;
use crate::export::state::ExportState;
use crate::fs::naming::validate_filename_id;
use crate::fs::paths::{export_dir, export_path};
use crate::output::create_item_bar;
use crate::tag::ImageTagger;

/// Minimum file size to show a download progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Export every crawled item in feed order.
///
/// Each export is attempted independently: a failed download or tag
/// invocation is logged and counted, and the batch moves on. A fixed
/// courtesy delay runs after each item.
pub async fn export_feed(
    api: &InstagramApi,
    tagger: &dyn ImageTagger,
    config: &Config,
    items: &[FeedItem],
) -> Result<ExportState> {
    let mut state = ExportState::default();

    let bar = create_item_bar(items.len() as u64, "exporting");

    for item in items {
        match save_item(api, tagger, config, item).await {
            Ok(path) => {
                state.record_exported();
                if config.options.show_downloads {
                    tracing::info!("saved {} to {}", item.id, path.display());
                }
            }
            Err(e) => {
                state.record_failed();
                tracing::warn!("Failed to export {}: {}", item.id, e);
            }
        }

        bar.inc(1);

        // Courtesy pause so we don't hammer the image host
        sleep(Duration::from_millis(config.options.export_delay_ms)).await;
    }

    bar.finish_and_clear();

    Ok(state)
}

/// Save one photo: download it and stamp its EXIF timestamp and comment.
pub async fn save_item(
    api: &InstagramApi,
    tagger: &dyn ImageTagger,
    config: &Config,
    item: &FeedItem,
) -> Result<PathBuf> {
    validate_filename_id(&item.id)?;

    tokio::fs::create_dir_all(export_dir(config, item)).await?;

    let output_path = export_path(config, item);

    download_image(api, config, item, &output_path).await?;

    tagger
        .set_timestamp(&output_path, &item.exif_timestamp())
        .await?;
    tagger
        .set_comment(&output_path, &build_comment(item))
        .await?;

    Ok(output_path)
}

/// Stream the standard-resolution image to disk.
async fn download_image(
    api: &InstagramApi,
    config: &Config,
    item: &FeedItem,
    output_path: &Path,
) -> Result<()> {
    let response = api.download_file(item.standard_url()).await?;

    let content_length = response.content_length();
    let show_progress = config.options.show_downloads
        && content_length.map(|l| l > PROGRESS_THRESHOLD).unwrap_or(false);

    let progress = if show_progress {
        Some(crate::output::create_download_bar(
            content_length.unwrap_or(0),
        ))
    } else {
        None
    };

    let mut file = File::create(output_path).await?;
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;

        if let Some(ref pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush().await?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(())
}
