//! Feed endpoint response type definitions.

use chrono::{DateTime, TimeZone, Utc};
use serde::de::{self, Deserializer};
use serde::Deserialize;

/// One page of a user's media feed.
#[derive(Debug, Deserialize)]
pub struct MediaPage {
    pub status: String,
    #[serde(default)]
    pub items: Vec<FeedItem>,
    #[serde(default)]
    pub more_available: bool,
}

/// A single photo post from the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedItem {
    pub id: String,
    /// Epoch seconds. The endpoint serializes this as a string,
    /// but older payloads carry a bare number.
    #[serde(deserialize_with = "epoch_seconds")]
    pub created_time: i64,
    pub images: ImageVersions,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub caption: Option<Caption>,
}

/// Available image renditions for a post.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageVersions {
    pub standard_resolution: ImageVariant,
    #[serde(default)]
    pub low_resolution: Option<ImageVariant>,
    #[serde(default)]
    pub thumbnail: Option<ImageVariant>,
}

/// A single image rendition.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageVariant {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Tagged location on a post.
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub name: Option<String>,
}

/// Caption attached to a post.
#[derive(Debug, Clone, Deserialize)]
pub struct Caption {
    #[serde(default)]
    pub text: Option<String>,
}

impl FeedItem {
    /// Creation time of the post.
    pub fn taken_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.created_time, 0).unwrap()
    }

    /// Creation time formatted for the EXIF timestamp field.
    pub fn exif_timestamp(&self) -> String {
        self.taken_at().format("%Y:%m:%d-%H:%M:%S").to_string()
    }

    /// URL of the standard-resolution rendition.
    pub fn standard_url(&self) -> &str {
        &self.images.standard_resolution.url
    }

    /// Location name, if the post carries one.
    pub fn location_name(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.name.as_deref())
    }

    /// Caption text, if the post carries one.
    pub fn caption_text(&self) -> Option<&str> {
        self.caption.as_ref().and_then(|c| c.text.as_deref())
    }
}

/// Deserialize epoch seconds from either a JSON string or a number.
fn epoch_seconds<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct EpochVisitor;

    impl de::Visitor<'_> for EpochVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("epoch seconds as a string or integer")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<i64, E> {
            value.parse().map_err(de::Error::custom)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<i64, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<i64, E> {
            i64::try_from(value).map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_any(EpochVisitor)
}
