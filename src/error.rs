//! Error types for the instagram-archiver application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Feed endpoint errors. Always fatal; the run aborts before exporting.
    #[error("Remote feed error at {url}: {message}")]
    Remote { url: String, message: String },

    // Per-item export errors. The export loop logs these and moves on.
    #[error("Download failed: {0}")]
    Download(String),

    // External tool errors
    #[error("Tagging failed: {0}")]
    Tagging(String),

    #[error("'{0}' not found. Please install jhead and ensure it's in your PATH.")]
    TaggerNotFound(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;
    pub const REMOTE_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const EXPORT_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
