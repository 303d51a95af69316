use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MirrorError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("output directory not found: {0}")]
    OutputDirNotFound(PathBuf),

    #[error("output directory access denied: {0}")]
    OutputDirDenied(PathBuf),

    #[error("output path is not a directory: {0}")]
    OutputNotADirectory(PathBuf),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    BadStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to write resource file {path}: {source}")]
    ResourceWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write page file {path}: {source}")]
    PageWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MirrorError>;
