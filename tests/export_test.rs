//! Integration tests for photo export.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use instagram_archiver::api::{Caption, FeedItem, ImageVariant, ImageVersions, InstagramApi, Location};
use instagram_archiver::config::Config;
use instagram_archiver::error::{Error, Result};
use instagram_archiver::export::{export_feed, save_item};
use instagram_archiver::tag::ImageTagger;
use tempfile::TempDir;
use wiremock::matchers::{method, path as url_path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];

/// Tagger that records every invocation instead of shelling out.
#[derive(Default)]
struct RecordingTagger {
    timestamps: Mutex<Vec<(PathBuf, String)>>,
    comments: Mutex<Vec<(PathBuf, String)>>,
}

#[async_trait]
impl ImageTagger for RecordingTagger {
    async fn set_timestamp(&self, path: &Path, timestamp: &str) -> Result<()> {
        self.timestamps
            .lock()
            .unwrap()
            .push((path.to_path_buf(), timestamp.to_string()));
        Ok(())
    }

    async fn set_comment(&self, path: &Path, comment: &str) -> Result<()> {
        self.comments
            .lock()
            .unwrap()
            .push((path.to_path_buf(), comment.to_string()));
        Ok(())
    }
}

/// Tagger whose invocations always fail.
struct FailingTagger;

#[async_trait]
impl ImageTagger for FailingTagger {
    async fn set_timestamp(&self, _path: &Path, _timestamp: &str) -> Result<()> {
        Err(Error::Tagging("simulated tagging failure".to_string()))
    }

    async fn set_comment(&self, _path: &Path, _comment: &str) -> Result<()> {
        Err(Error::Tagging("simulated tagging failure".to_string()))
    }
}

fn create_test_config(base_dir: &Path) -> Config {
    let mut config = Config::default();
    config.target.username = "skwii".to_string();
    config.options.download_directory = Some(base_dir.to_path_buf());
    config.options.export_delay_ms = 0;
    config
}

fn make_item(
    id: &str,
    created_time: i64,
    url: String,
    location: Option<&str>,
    caption: Option<&str>,
) -> FeedItem {
    FeedItem {
        id: id.to_string(),
        created_time,
        images: ImageVersions {
            standard_resolution: ImageVariant {
                url,
                width: Some(640),
                height: Some(640),
            },
            low_resolution: None,
            thumbnail: None,
        },
        location: location.map(|name| Location {
            name: Some(name.to_string()),
        }),
        caption: caption.map(|text| Caption {
            text: Some(text.to_string()),
        }),
    }
}

async fn mount_photo(server: &MockServer, id: &str) -> String {
    Mock::given(method("GET"))
        .and(url_path(format!("/photos/{}.jpg", id)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(JPEG_BYTES))
        .mount(server)
        .await;

    format!("{}/photos/{}.jpg", server.uri(), id)
}

#[tokio::test]
async fn test_save_item_writes_and_tags() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(temp_dir.path());
    let api = InstagramApi::new(&server.uri()).unwrap();
    let tagger = RecordingTagger::default();

    let url = mount_photo(&server, "abc_1").await;
    // 2015-01-01T00:00:00Z
    let item = make_item(
        "abc_1",
        1420070400,
        url,
        Some("Paris"),
        Some("Great\ntrip!! \"wow\""),
    );

    let saved = save_item(&api, &tagger, &config, &item).await.unwrap();

    let expected = temp_dir.path().join("skwii/2015/01/abc_1.jpg");
    assert_eq!(saved, expected);
    assert_eq!(std::fs::read(&expected).unwrap(), JPEG_BYTES);

    let timestamps = tagger.timestamps.lock().unwrap();
    assert_eq!(
        timestamps.as_slice(),
        &[(expected.clone(), "2015:01:01-00:00:00".to_string())]
    );

    let comments = tagger.comments.lock().unwrap();
    assert_eq!(
        comments.as_slice(),
        &[(expected.clone(), "Paris | Great trip!! 'wow'".to_string())]
    );
}

#[tokio::test]
async fn test_save_item_fails_on_missing_photo() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(temp_dir.path());
    let api = InstagramApi::new(&server.uri()).unwrap();
    let tagger = RecordingTagger::default();

    // Nothing mounted for this URL; the host answers 404.
    let item = make_item(
        "gone_1",
        1420070400,
        format!("{}/photos/gone_1.jpg", server.uri()),
        None,
        None,
    );

    let err = save_item(&api, &tagger, &config, &item).await.unwrap_err();
    assert!(matches!(err, Error::Download(_)));
    assert!(tagger.timestamps.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_export_feed_continues_after_download_failure() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(temp_dir.path());
    let api = InstagramApi::new(&server.uri()).unwrap();
    let tagger = RecordingTagger::default();

    let good_url = mount_photo(&server, "b_2").await;
    let items = vec![
        make_item(
            "a_1",
            1420070400,
            format!("{}/photos/a_1.jpg", server.uri()),
            None,
            None,
        ),
        make_item("b_2", 1420070400, good_url, None, Some("second")),
    ];

    let state = export_feed(&api, &tagger, &config, &items).await.unwrap();

    assert_eq!(state.failed_count, 1);
    assert_eq!(state.exported_count, 1);
    assert!(temp_dir.path().join("skwii/2015/01/b_2.jpg").exists());
    assert!(!temp_dir.path().join("skwii/2015/01/a_1.jpg").exists());
}

#[tokio::test]
async fn test_export_feed_continues_after_tagging_failure() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(temp_dir.path());
    let api = InstagramApi::new(&server.uri()).unwrap();

    let url_a = mount_photo(&server, "a_1").await;
    let url_b = mount_photo(&server, "b_2").await;
    let items = vec![
        make_item("a_1", 1420070400, url_a, None, None),
        make_item("b_2", 1420070400, url_b, None, None),
    ];

    let state = export_feed(&api, &FailingTagger, &config, &items)
        .await
        .unwrap();

    // Both downloads succeed, both taggings fail, the batch still finishes.
    assert_eq!(state.failed_count, 2);
    assert_eq!(state.exported_count, 0);
    assert!(temp_dir.path().join("skwii/2015/01/a_1.jpg").exists());
    assert!(temp_dir.path().join("skwii/2015/01/b_2.jpg").exists());
}
