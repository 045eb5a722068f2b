use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when talking to the episodes API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request to {url} failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to decode response from {url}: {source}")]
    DecodeFailed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur when shaping a raw API record into a display model
#[derive(Error, Debug)]
pub enum EpisodeError {
    #[error("Episode '{id}' has no media file")]
    MissingFile { id: String },

    #[error("Episode '{id}' has no duration")]
    MissingDuration { id: String },

    #[error("Episode '{id}' has a non-numeric duration: {value}")]
    InvalidDuration { id: String, value: String },

    #[error("Failed to parse date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },
}

/// Errors that can occur while loading the props of one episode page
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Invalid episode slug: {0:?}")]
    InvalidSlug(String),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Episode error: {0}")]
    Episode(#[from] EpisodeError),
}

/// Top-level errors for page generation
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to load episode: {0}")]
    Load(#[from] LoadError),

    #[error("Failed to write page {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
