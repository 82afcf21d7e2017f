//! The single run: fetch metadata, download the picture, apply it.

use crate::bing::{ResolvedImage, parse_metadata};
use crate::config::BingConfig;
use crate::desktop::WallpaperSetter;
use crate::fetch::Fetch;
use crate::report::Reporter;
use crate::{Error, Result};
use std::fmt;

/// Progress markers, logged as the run advances. Any failure ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ArgsParsed,
    MetadataFetched,
    MetadataParsed,
    ImageDownloaded,
    WallpaperSet,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ArgsParsed => "args parsed",
            Stage::MetadataFetched => "metadata fetched",
            Stage::MetadataParsed => "metadata parsed",
            Stage::ImageDownloaded => "image downloaded",
            Stage::WallpaperSet => "wallpaper set",
        };
        f.write_str(name)
    }
}

pub struct Pipeline<'a, F: Fetch> {
    config: &'a BingConfig,
    fetcher: F,
    setter: &'a dyn WallpaperSetter,
    reporter: &'a dyn Reporter,
}

impl<'a, F: Fetch> Pipeline<'a, F> {
    pub fn new(
        config: &'a BingConfig,
        fetcher: F,
        setter: &'a dyn WallpaperSetter,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            config,
            fetcher,
            setter,
            reporter,
        }
    }

    /// Runs every stage in order, stopping at the first failure.
    pub async fn run(&self, days_back: u8) -> Result<ResolvedImage> {
        self.try_run(days_back).await.inspect_err(|e| {
            tracing::debug!("run failed ({:?}): {}", e.kind(), e);
        })
    }

    async fn try_run(&self, days_back: u8) -> Result<ResolvedImage> {
        self.reporter.info(&format!(
            "Changing wallpaper to Bing's picture from {} day(s) ago...",
            days_back
        ));
        advance(Stage::ArgsParsed);

        let body = self
            .fetcher
            .get_text(&self.config.archive_url(days_back))
            .await?;
        advance(Stage::MetadataFetched);

        let metadata = parse_metadata(&body)?;
        advance(Stage::MetadataParsed);

        let resolved = metadata.resolve(self.config);
        self.fetcher
            .download_to(&resolved.absolute_url, &resolved.local_path)
            .await?;
        if !tokio::fs::try_exists(&resolved.local_path).await? {
            return Err(Error::DownloadVerification(resolved.local_path));
        }
        tracing::info!("saved {}", resolved.local_path.display());
        advance(Stage::ImageDownloaded);

        self.setter.apply(&resolved.local_path)?;
        advance(Stage::WallpaperSet);

        let message = match metadata.date() {
            Some(date) => format!(
                "Wallpaper set successfully! {} ({})",
                metadata.title,
                date.format("%Y-%m-%d")
            ),
            None => "Wallpaper set successfully!".to_string(),
        };
        self.reporter.success(&message);

        Ok(resolved)
    }
}

fn advance(stage: Stage) {
    tracing::debug!("stage: {}", stage);
}

/// Text shown to the user for a failed run.
pub fn failure_message(e: &Error) -> String {
    match e {
        Error::MalformedResponse(msg) => msg.clone(),
        Error::DownloadVerification(_) => "Failed to download wallpaper.".to_string(),
        _ => format!("An error occurred: {}", e),
    }
}
