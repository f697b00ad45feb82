//! EXIF tagging via the external jhead tool.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Error, Result};

/// Capability interface for stamping metadata into an exported image.
///
/// The production implementation shells out to jhead; tests substitute a
/// recording fake.
#[async_trait]
pub trait ImageTagger: Send + Sync {
    /// Set the EXIF creation time from a `YYYY:MM:DD-HH:MM:SS` string.
    async fn set_timestamp(&self, path: &Path, timestamp: &str) -> Result<()>;

    /// Set (or overwrite) the embedded comment field.
    async fn set_comment(&self, path: &Path, comment: &str) -> Result<()>;
}

/// Tagger backed by the jhead binary.
pub struct JheadTagger {
    binary: PathBuf,
}

impl JheadTagger {
    /// Create a tagger invoking the given jhead binary.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Run jhead with the given arguments, discarding its output.
    async fn run(&self, args: &[&std::ffi::OsStr]) -> Result<()> {
        let status = Command::new(&self.binary)
            .args(args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::TaggerNotFound(self.binary.display().to_string())
                } else {
                    Error::Tagging(format!("Failed to run {}: {}", self.binary.display(), e))
                }
            })?;

        if !status.success() {
            return Err(Error::Tagging(format!(
                "{} exited with status: {}",
                self.binary.display(),
                status
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl ImageTagger for JheadTagger {
    async fn set_timestamp(&self, path: &Path, timestamp: &str) -> Result<()> {
        let ts_arg = format!("-ts{}", timestamp);
        self.run(&[
            "-mkexif".as_ref(),
            ts_arg.as_ref(),
            path.as_os_str(),
        ])
        .await
    }

    async fn set_comment(&self, path: &Path, comment: &str) -> Result<()> {
        self.run(&["-cl".as_ref(), comment.as_ref(), path.as_os_str()])
            .await
    }
}
