//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Instagram photo archiver CLI.
#[derive(Parser, Debug)]
#[command(
    name = "instagram-archiver",
    version,
    about = "Archive photos from an Instagram profile",
    long_about = "A CLI tool that crawls a profile's photo feed, downloads every photo posted\n\
                  since the last run, and files it under {user}/{year}/{month} with EXIF\n\
                  timestamp and comment set via jhead."
)]
pub struct Args {
    /// Profile username to archive.
    #[arg(short, long, env = "INSTA_ARCHIVER_USER")]
    pub user: Option<String>,

    /// Item id of the most recently exported photo from a prior run.
    #[arg(short = 'm', long = "last-id")]
    pub last_scraped_id: Option<String>,

    /// Force a full scrape, ignoring any configured last-scraped id.
    #[arg(long)]
    pub full: bool,

    /// Base directory for exported photos.
    #[arg(short = 'd', long = "directory", env = "INSTA_ARCHIVER_DIR")]
    pub download_directory: Option<PathBuf>,

    /// Milliseconds to pause between exports.
    #[arg(long = "delay-ms")]
    pub export_delay_ms: Option<u64>,

    /// Path to the jhead binary.
    #[arg(long)]
    pub jhead: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Hide per-photo save confirmations.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(user) = self.user {
            config.target.username = user;
        }

        if let Some(last_id) = self.last_scraped_id {
            config.target.last_scraped_id = Some(last_id);
        }

        if self.full {
            config.target.last_scraped_id = None;
        }

        if let Some(dir) = self.download_directory {
            config.options.download_directory = Some(dir);
        }

        if let Some(delay) = self.export_delay_ms {
            config.options.export_delay_ms = delay;
        }

        if let Some(jhead) = self.jhead {
            config.options.jhead_path = jhead;
        }

        if self.quiet {
            config.options.show_downloads = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            user: None,
            last_scraped_id: None,
            full: false,
            download_directory: None,
            export_delay_ms: None,
            jhead: None,
            config: PathBuf::from("config.toml"),
            quiet: false,
            debug: false,
        }
    }

    #[test]
    fn test_merge_overrides_target() {
        let mut config = Config::default();
        config.target.username = "old".to_string();

        let args = Args {
            user: Some("skwii".to_string()),
            last_scraped_id: Some("42_7".to_string()),
            ..base_args()
        };
        args.merge_into_config(&mut config);

        assert_eq!(config.target.username, "skwii");
        assert_eq!(config.high_water_mark(), Some("42_7"));
    }

    #[test]
    fn test_full_clears_mark() {
        let mut config = Config::default();
        config.target.last_scraped_id = Some("42_7".to_string());

        let args = Args {
            full: true,
            ..base_args()
        };
        args.merge_into_config(&mut config);

        assert_eq!(config.high_water_mark(), None);
    }

    #[test]
    fn test_merge_keeps_config_when_unset() {
        let mut config = Config::default();
        config.target.username = "kept".to_string();
        config.options.export_delay_ms = 250;

        base_args().merge_into_config(&mut config);

        assert_eq!(config.target.username, "kept");
        assert_eq!(config.options.export_delay_ms, 250);
    }
}
