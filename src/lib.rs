pub mod bing;
pub mod config;
pub mod desktop;
pub mod fetch;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod utils;

pub use bing::{ImageMetadata, ResolvedImage};
pub use config::BingConfig;
pub use desktop::WallpaperSetter;
pub use fetch::{Fetch, HttpFetcher};
pub use pipeline::Pipeline;
pub use report::{ConsoleReporter, Reporter};

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("Downloaded file not found at {}", .0.display())]
    DownloadVerification(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Desktop environment error: {0}")]
    DesktopEnv(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse failure classes. Only success or failure is visible through the
/// exit code; the kind is for logs and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    MalformedResponse,
    DownloadVerification,
    Unhandled,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Network(_) => ErrorKind::Network,
            Error::MalformedResponse(_) => ErrorKind::MalformedResponse,
            Error::DownloadVerification(_) => ErrorKind::DownloadVerification,
            Error::Io(_) | Error::DesktopEnv(_) | Error::Config(_) => ErrorKind::Unhandled,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
